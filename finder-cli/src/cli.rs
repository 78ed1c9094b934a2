use clap::{Args, Parser, Subcommand};
use finder_server::{DEFAULT_TASK_CAPACITY, DEV_CLIENT_ORIGIN};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "restaurant-finder")]
#[command(about = "Restaurant finder agent served over A2A", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Options for `serve`, which runs when no subcommand is given
    #[command(flatten)]
    pub serve: ServeArgs,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the A2A server (default)
    Serve(ServeArgs),

    /// Run one restaurant lookup and print the JSON result
    Find(FindArgs),
}

#[derive(Args, Clone, Debug)]
pub struct ServeArgs {
    /// Interface to bind; also used in the advertised agent URL
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// Port to bind
    #[arg(long, default_value_t = 10002)]
    pub port: u16,

    /// Directory holding the restaurant data files
    #[arg(long, env = "FINDER_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Directory served under /static
    #[arg(long, default_value = "images")]
    pub static_dir: PathBuf,

    /// CORS origin allowed to call the agent (repeatable)
    #[arg(long = "allowed-origin", default_value = DEV_CLIENT_ORIGIN)]
    pub allowed_origins: Vec<String>,

    /// Load each data file once instead of re-reading it on every lookup
    #[arg(long)]
    pub cache_records: bool,

    /// Number of finished tasks kept for `tasks/get`
    #[arg(long, default_value_t = DEFAULT_TASK_CAPACITY)]
    pub task_capacity: usize,
}

#[derive(Args, Clone, Debug)]
pub struct FindArgs {
    /// Cuisine to look for
    pub cuisine: String,

    /// City or area, e.g. "New York"
    pub location: String,

    /// Number of restaurants to return
    #[arg(long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Directory holding the restaurant data files
    #[arg(long, env = "FINDER_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,
}
