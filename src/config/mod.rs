//! Configuration management
//!
//! The CLI surface is four positional arguments; they are validated once
//! and frozen into an immutable [`SyncConfig`] that every reconciliation
//! pass receives by reference. There is no global mutable state.

use crate::types::MiraError;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(
    name = "mira",
    version,
    about = "One-way directory mirroring on a fixed interval"
)]
pub struct Cli {
    /// Directory to mirror from
    pub source: PathBuf,

    /// Directory to mirror into (created if absent)
    pub replica: PathBuf,

    /// Seconds between reconciliation passes
    #[arg(value_parser = parse_interval_seconds)]
    pub interval_seconds: u64,

    /// File the sync log is appended to
    pub log_file: PathBuf,
}

fn parse_interval_seconds(raw: &str) -> Result<u64, String> {
    raw.parse::<u64>()
        .map_err(|_| "<INTERVAL_SECONDS> should be an integer value".to_string())
}

/// Immutable runtime configuration, built once at startup
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Source tree root (must exist at startup)
    pub source: PathBuf,

    /// Replica tree root (created by the scheduler if absent)
    pub replica: PathBuf,

    /// Fixed interval between passes
    pub interval: Duration,

    /// Append-only log file path
    pub log_path: PathBuf,
}

impl TryFrom<Cli> for SyncConfig {
    type Error = MiraError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if !cli.source.is_dir() {
            return Err(MiraError::Config("Source path does not exist".to_string()));
        }

        if cli.interval_seconds == 0 {
            return Err(MiraError::Config(
                "<INTERVAL_SECONDS> should be a positive integer".to_string(),
            ));
        }

        if cli.source == cli.replica {
            return Err(MiraError::Config(
                "Source and replica cannot be the same path".to_string(),
            ));
        }

        Ok(Self {
            source: cli.source,
            replica: cli.replica,
            interval: Duration::from_secs(cli.interval_seconds),
            log_path: cli.log_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cli_for(source: PathBuf, replica: PathBuf, interval: u64) -> Cli {
        Cli {
            source,
            replica,
            interval_seconds: interval,
            log_file: PathBuf::from("sync.log"),
        }
    }

    #[test]
    fn test_valid_config() {
        let src = TempDir::new().expect("create src tempdir");
        let cli = cli_for(src.path().to_path_buf(), PathBuf::from("/tmp/replica"), 30);

        let config = SyncConfig::try_from(cli).expect("config should validate");
        assert_eq!(config.interval, Duration::from_secs(30));
        assert_eq!(config.source, src.path());
    }

    #[test]
    fn test_missing_source_is_rejected() {
        let cli = cli_for(
            PathBuf::from("/definitely/not/here"),
            PathBuf::from("/tmp/replica"),
            30,
        );

        let err = SyncConfig::try_from(cli).unwrap_err();
        assert!(err.to_string().contains("Source path does not exist"));
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let src = TempDir::new().expect("create src tempdir");
        let cli = cli_for(src.path().to_path_buf(), PathBuf::from("/tmp/replica"), 0);

        let err = SyncConfig::try_from(cli).unwrap_err();
        assert!(err.to_string().contains("positive integer"));
    }

    #[test]
    fn test_source_equal_to_replica_is_rejected() {
        let src = TempDir::new().expect("create src tempdir");
        let cli = cli_for(src.path().to_path_buf(), src.path().to_path_buf(), 30);

        let err = SyncConfig::try_from(cli).unwrap_err();
        assert!(err.to_string().contains("cannot be the same"));
    }

    #[test]
    fn test_interval_parser_rejects_non_integers() {
        let err = parse_interval_seconds("abc").unwrap_err();
        assert!(err.contains("should be an integer value"));

        assert_eq!(parse_interval_seconds("60"), Ok(60));
    }
}
