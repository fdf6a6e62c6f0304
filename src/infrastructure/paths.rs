//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which points
//! at the working directory Zellij was started from (usually the user's home).
//! These helpers translate configured paths into sandbox paths and back.

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
const HOST_ROOT: &str = "/host";

/// Returns the directory used for trace output.
///
/// Resolves to `/host/.local/share/zellij/dunia`, which is
/// `~/.local/share/zellij/dunia` when Zellij was started from the home
/// directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij").join("dunia")
}

/// Expands a leading `~` to the sandbox host mount.
///
/// # Examples
///
/// ```
/// use dunia::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/dunia/data.json"), "/host/dunia/data.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/srv/data.json"), "/srv/data.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', HOST_ROOT, 1)
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}

/// Resolves a configured data path to a sandbox path.
///
/// Tilde paths expand to the host mount, absolute paths are kept, and relative
/// paths are taken relative to the host mount, mirroring a page that fetches
/// `data.json` from its own folder.
#[must_use]
pub fn resolve_host_path(path: &str) -> PathBuf {
    let expanded = expand_tilde(path);
    if expanded.starts_with('/') {
        PathBuf::from(expanded)
    } else {
        PathBuf::from(HOST_ROOT).join(expanded)
    }
}

/// Writes a sandbox path the way the user configured it, with `~` for the
/// host mount. Paths outside the mount are returned unchanged.
///
/// # Examples
///
/// ```
/// use dunia::infrastructure::display_host_path;
///
/// assert_eq!(display_host_path("/host/data.json"), "~/data.json");
/// assert_eq!(display_host_path("/srv/data.json"), "/srv/data.json");
/// ```
#[must_use]
pub fn display_host_path(path: &str) -> String {
    match path.strip_prefix(HOST_ROOT) {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_joins_host_root() {
        assert_eq!(resolve_host_path("data.json"), PathBuf::from("/host/data.json"));
        assert_eq!(
            resolve_host_path("site/data.json"),
            PathBuf::from("/host/site/data.json")
        );
    }

    #[test]
    fn tilde_and_absolute_paths() {
        assert_eq!(resolve_host_path("~/data.json"), PathBuf::from("/host/data.json"));
        assert_eq!(resolve_host_path("/tmp/data.json"), PathBuf::from("/tmp/data.json"));
    }

    #[test]
    fn data_dir_lives_under_host() {
        assert_eq!(
            get_data_dir(),
            PathBuf::from("/host/.local/share/zellij/dunia")
        );
    }

    #[test]
    fn display_collapses_host_mount() {
        let resolved = resolve_host_path("data.json");
        assert_eq!(display_host_path(&resolved.to_string_lossy()), "~/data.json");
        assert_eq!(display_host_path("/host"), "~");
        assert_eq!(display_host_path("/hostile/data.json"), "/hostile/data.json");
    }
}
