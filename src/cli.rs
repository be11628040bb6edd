use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lifedash")]
#[command(about = "Personal productivity dashboard with TUI", long_about = None)]
pub struct Cli {
    /// Tab to open on launch: overview, time, skills, digital, analytics
    /// (unknown values fall back to overview)
    #[arg(long, value_name = "TAB")]
    pub tab: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the four domain summaries (including habit streaks)
    Summary,

    /// Print the 4-week progress table for all tracked areas
    Progress,

    /// Serialize the metric and integration stores to JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Show config status and location, or create default config if missing
    InitConfig,
}

pub fn parse() -> Cli {
    Cli::parse()
}
