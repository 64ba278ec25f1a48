use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Verdict example service
#[derive(Debug, Parser)]
#[command(name = "verdict", about = "Entity lookup service with decorated error responses")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "verdict.toml", env = "VERDICT_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "VERDICT_LISTEN")]
    pub listen: Option<SocketAddr>,

    /// Override the log filter (e.g. `debug`, `verdict_server=trace`)
    #[arg(long, env = "VERDICT_LOG")]
    pub log: Option<String>,
}
