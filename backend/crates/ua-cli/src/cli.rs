use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ua")]
#[command(about = "User administration CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (defaults to client.server_url from the config)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,

    /// Debug logging on stderr
    #[arg(long, short, global = true)]
    pub(crate) verbose: bool,
}
