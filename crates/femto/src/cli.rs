//! Command-line arguments and the configuration derived from them.

use clap::Parser;
use std::path::PathBuf;

/// Minimal modal terminal text editor
#[derive(Parser, Debug)]
#[command(name = "femto", version, about = "Minimal modal terminal text editor")]
pub struct CliArgs {
    /// File to edit; created on first save if it does not exist
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Write diagnostics to this file (filter with FEMTO_LOG)
    #[arg(long, value_name = "PATH", env = "FEMTO_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// Startup configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Document to open
    pub path: PathBuf,
    /// Log destination; logging is off when unset
    pub log_file: Option<PathBuf>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Config {
        Config {
            path: self.path,
            log_file: self.log_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_path_is_required() {
        let err = CliArgs::try_parse_from(["femto"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        assert!(err.use_stderr());
    }

    #[test]
    fn test_into_config() {
        let args =
            CliArgs::try_parse_from(["femto", "notes.txt", "--log-file", "/tmp/femto.log"]).unwrap();
        assert_eq!(
            args.into_config(),
            Config {
                path: PathBuf::from("notes.txt"),
                log_file: Some(PathBuf::from("/tmp/femto.log")),
            }
        );
    }
}
