//! Data directory resolution and path helpers.
//!
//! The data directory holds the default persistence file and trace output. It
//! is resolved from the environment in this order:
//!
//! 1. `SIDEPANES_DATA_DIR`
//! 2. `$XDG_DATA_HOME/sidepanes`
//! 3. `$HOME/.local/share/sidepanes`
//! 4. `./.sidepanes` when none of the above is set

use std::ffi::OsString;
use std::path::PathBuf;

/// Overrides the data directory.
pub const DATA_DIR_ENV: &str = "SIDEPANES_DATA_DIR";

/// File name of the default persistence file.
pub const PERSISTENCE_FILE_NAME: &str = "panes.json";

/// File name of the trace output.
pub const TRACE_FILE_NAME: &str = "sidepanes-otlp.json";

/// Returns the data directory for the current environment.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    resolve_data_dir(
        std::env::var_os(DATA_DIR_ENV),
        std::env::var_os("XDG_DATA_HOME"),
        std::env::var_os("HOME"),
    )
}

/// Pure resolution behind [`get_data_dir`].
#[must_use]
pub fn resolve_data_dir(
    explicit: Option<OsString>,
    xdg_data_home: Option<OsString>,
    home: Option<OsString>,
) -> PathBuf {
    let non_empty = |value: Option<OsString>| value.filter(|v| !v.is_empty()).map(PathBuf::from);

    if let Some(dir) = non_empty(explicit) {
        return dir;
    }
    if let Some(dir) = non_empty(xdg_data_home) {
        return dir.join("sidepanes");
    }
    non_empty(home).map_or_else(
        || PathBuf::from(".sidepanes"),
        |home| home.join(".local").join("share").join("sidepanes"),
    )
}

/// Default location of the JSON persistence file.
#[must_use]
pub fn default_persistence_file() -> PathBuf {
    get_data_dir().join(PERSISTENCE_FILE_NAME)
}

/// Expands a leading `~` to `home`.
///
/// # Examples
///
/// ```
/// use sidepanes::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/state/panes.json", Some("/home/ada")), "/home/ada/state/panes.json");
/// assert_eq!(expand_tilde("~", Some("/home/ada")), "/home/ada");
/// assert_eq!(expand_tilde("/var/lib/panes.json", Some("/home/ada")), "/var/lib/panes.json");
/// assert_eq!(expand_tilde("~/panes.json", None), "~/panes.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str, home: Option<&str>) -> String {
    let Some(home) = home else {
        return path.to_string();
    };
    if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else if path == "~" {
        home.to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let dir = resolve_data_dir(
            Some("/tmp/panes".into()),
            Some("/xdg".into()),
            Some("/home/ada".into()),
        );
        assert_eq!(dir, PathBuf::from("/tmp/panes"));
    }

    #[test]
    fn xdg_then_home() {
        assert_eq!(
            resolve_data_dir(None, Some("/xdg".into()), Some("/home/ada".into())),
            PathBuf::from("/xdg/sidepanes")
        );
        assert_eq!(
            resolve_data_dir(Some(OsString::new()), None, Some("/home/ada".into())),
            PathBuf::from("/home/ada/.local/share/sidepanes")
        );
        assert_eq!(resolve_data_dir(None, None, None), PathBuf::from(".sidepanes"));
    }
}
