use clap::{Args, Parser, Subcommand};

use crate::domain::Filter;
use crate::render::OutputFormat;

#[derive(Parser)]
#[command(name = "feeder")]
#[command(about = "Multi-source feed aggregator with filterable HTML and terminal views")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the registered feed sources
    Sources,

    /// Fetch all feeds once and render the merged list
    Run {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Fetch and render on a fixed interval
    Watch {
        #[command(flatten)]
        view: ViewArgs,

        /// Seconds between refresh cycles (defaults to FEEDER_REFRESH_SECS or 300)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Stop after this many cycles
        #[arg(long)]
        cycles: Option<usize>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    /// Show only one source: 'all' or a source index from `feeder sources`
    #[arg(short, long, default_value = "all")]
    pub filter: Filter,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Output file path (prints to stdout if not specified)
    #[arg(short, long)]
    pub output: Option<String>,
}
