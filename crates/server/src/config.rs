// crates/server/src/config.rs
//! Command-line and environment configuration for the `daytrack` binary.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use chrono_tz::Tz;
use clap::Parser;

/// Personal activity tracker API server.
#[derive(Debug, Clone, Parser)]
#[command(name = "daytrack", version, about)]
pub struct Cli {
    /// Address to bind the HTTP listener to.
    #[arg(long, env = "DAYTRACK_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    #[arg(long, env = "DAYTRACK_PORT", default_value_t = 8000)]
    pub port: u16,

    /// SQLite database file. Defaults to `<data dir>/daytrack/daytrack.db`.
    #[arg(long = "db", env = "DAYTRACK_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// IANA timezone used to resolve "today" and `date` parameters.
    #[arg(long, env = "DAYTRACK_TIMEZONE", default_value = "UTC")]
    pub timezone: Tz,

    /// Do not insert the default categories into an empty database.
    #[arg(long)]
    pub no_seed: bool,
}

impl Cli {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["daytrack"]).unwrap();
        assert_eq!(cli.addr().to_string(), "127.0.0.1:8000");
        assert_eq!(cli.timezone, chrono_tz::UTC);
        assert!(cli.db_path.is_none());
        assert!(!cli.no_seed);
    }

    #[test]
    fn test_explicit_flags() {
        let cli = Cli::try_parse_from([
            "daytrack",
            "--host",
            "0.0.0.0",
            "--port",
            "9001",
            "--db",
            "/tmp/daytrack-test.db",
            "--timezone",
            "Europe/Berlin",
            "--no-seed",
        ])
        .unwrap();
        assert_eq!(cli.addr().to_string(), "0.0.0.0:9001");
        assert_eq!(cli.db_path, Some(PathBuf::from("/tmp/daytrack-test.db")));
        assert_eq!(cli.timezone, chrono_tz::Europe::Berlin);
        assert!(cli.no_seed);
    }

    #[test]
    fn test_rejects_unknown_timezone() {
        assert!(Cli::try_parse_from(["daytrack", "--timezone", "Mars/Olympus"]).is_err());
    }
}
