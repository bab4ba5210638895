//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Pick a layout and delegate to components
//!
//! Layout precedence: splash, then fullscreen viewer, then the browser (which
//! draws a windowed viewer on top of itself).

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout for a `rows` x `cols` pane.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(splash) = &vm.splash {
        components::render_splash(vm, splash, theme, cols, rows);
        return;
    }

    match &vm.viewer {
        Some(viewer) if viewer.is_fullscreen => {
            components::render_fullscreen_viewer(vm, viewer, theme, cols, rows);
        }
        _ => components::render_browser(vm, theme, cols, rows),
    }
}
