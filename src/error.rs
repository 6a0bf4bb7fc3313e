//! Environmental errors.
//!
//! Problems with the *content* of a plugin are never errors in this sense:
//! they become [`Issue`](crate::issue::Issue)s and end up in the report. A
//! [`LintError`] means the tool itself could not do its job (a root is
//! missing, a file is unreadable, the config is broken, or the user pressed
//! Ctrl-C) and the run stops.

use std::path::PathBuf;

/// Exit code for a run that found issues at or above the `--fail-on` threshold.
pub const EXIT_ISSUES: i32 = 1;
/// Exit code for environmental failures.
pub const EXIT_INTERNAL: i32 = 2;
/// Exit code for a run stopped by SIGINT.
pub const EXIT_INTERRUPTED: i32 = 130;

#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("path does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("interrupted")]
    Interrupted,
}

impl LintError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LintError::Interrupted => EXIT_INTERRUPTED,
            _ => EXIT_INTERNAL,
        }
    }
}

pub type Result<T> = std::result::Result<T, LintError>;

/// Makes any panic, one on a rayon worker included, end the process with
/// [`EXIT_INTERNAL`] once the default hook has printed the message.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        default_hook(info);
        std::process::exit(EXIT_INTERNAL);
    }));
}
