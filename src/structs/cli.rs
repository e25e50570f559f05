use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "report-ops")]
#[clap(about = "Seeds customer report definitions and audits row-level security", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/report-ops/config.toml
    #[clap(short, long, global = true)]
    pub config: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}
