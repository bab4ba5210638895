//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox `/host` is the cwd of the last focused terminal (usually
//! the user's home), so `~` in user-supplied paths maps onto it.

use std::path::PathBuf;

/// Directory for plugin-owned files (span traces).
///
/// ```
/// use gamedeck::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/gamedeck"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("gamedeck")
}

/// Maps `~` and `~/...` onto `/host`; other paths pass through.
///
/// ```
/// use gamedeck::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/.config/gamedeck/games.json"), "/host/.config/gamedeck/games.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/srv/games.json"), "/srv/games.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Shows a sandbox path the way the user would write it on the host.
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    match path.strip_prefix("/host") {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_round_trips_for_display() {
        let expanded = expand_tilde("~/.config/gamedeck/games.json");
        assert_eq!(strip_host_prefix(&expanded), "~/.config/gamedeck/games.json");
        assert_eq!(strip_host_prefix("/host"), "~");
    }

    #[test]
    fn unrelated_prefixes_are_kept() {
        assert_eq!(expand_tilde("~other/games.json"), "~other/games.json");
        assert_eq!(strip_host_prefix("/hostname/games.json"), "/hostname/games.json");
    }
}
