// CLI module for timetable-relay
// Author: kelexine (https://github.com/kelexine)

use clap::Parser;
use std::path::PathBuf;

/// timetable-relay - forwards timetable screenshots to Gemini for schedule extraction
#[derive(Parser, Debug)]
#[command(name = "timetable-relay", version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML config file (default: ~/.timetable-relay/config.toml if present)
    #[arg(short, long, env = "TIMETABLE_RELAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind, overriding the config file
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overriding the config file
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl Args {
    /// Apply command-line overrides on top of loaded configuration
    pub fn apply(&self, config: &mut crate::config::AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_overrides_apply() {
        let args = Args::try_parse_from(["timetable-relay", "--host", "0.0.0.0", "-p", "8088"]).unwrap();
        let mut config = AppConfig::default();
        args.apply(&mut config);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8088);
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let args = Args::try_parse_from(["timetable-relay"]).unwrap();
        let mut config = AppConfig::default();
        args.apply(&mut config);
        assert_eq!(config.server.port, 5000);
    }
}
