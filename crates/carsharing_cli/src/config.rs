//! Command-line flags.
//!
//! The original single-dash `-databaseFileName <name>` form is accepted next
//! to `--database-file-name`.

use carsharing_core::LogSink;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_FILE_NAME: &str = "carsharing";
pub const DEFAULT_DB_DIR: &str = "db";
const DATABASE_FILE_EXTENSION: &str = "db";
const LEGACY_DATABASE_FLAG: &str = "-databaseFileName";

/// Process flags selecting the company store and the log sink.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "carsharing", version, about = "Manage car-sharing companies")]
pub struct CliArgs {
    #[arg(
        long = "database-file-name",
        value_name = "NAME",
        default_value = DEFAULT_DATABASE_FILE_NAME,
        help = "Database file name without extension"
    )]
    pub database_file_name: String,

    #[arg(long, value_name = "DIR", default_value = DEFAULT_DB_DIR)]
    pub db_dir: PathBuf,

    #[arg(long, default_value = "warn", help = "trace|debug|info|warn|error")]
    pub log_level: String,

    #[arg(
        long,
        value_name = "DIR",
        help = "Absolute directory for rotating log files (default: stderr)"
    )]
    pub log_dir: Option<PathBuf>,
}

impl CliArgs {
    /// Parses process arguments, exiting with usage on error.
    pub fn from_env() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }

    /// Returns `<db_dir>/<database_file_name>.db`.
    pub fn database_path(&self) -> PathBuf {
        self.db_dir.join(format!(
            "{}.{DATABASE_FILE_EXTENSION}",
            self.database_file_name
        ))
    }

    pub fn log_sink(&self) -> LogSink {
        match &self.log_dir {
            Some(dir) => LogSink::Directory(dir.clone()),
            None => LogSink::Stderr,
        }
    }
}

fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            if arg == LEGACY_DATABASE_FLAG {
                OsString::from("--database-file-name")
            } else {
                arg
            }
        })
        .collect()
}
