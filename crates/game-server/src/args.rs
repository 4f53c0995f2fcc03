use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
pub struct Args {
    /// Optional TOML settings file ([app], [game], [recommendation]).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Host interface to bind; overrides the settings file.
    #[arg(long)]
    pub host: Option<String>,
    /// Port to bind; overrides the settings file.
    #[arg(long)]
    pub port: Option<u16>,
    /// Optional tracing filter, e.g. "info", "debug".
    #[arg(long, default_value = "info")]
    pub log: String,
}
