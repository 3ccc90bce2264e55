mod parsers;


use std::time::Duration;

use clap::Parser;

use self::parsers::parse_duration_arg;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent endpoint poker - pokes every endpoint in a JSON list once and reports per-endpoint outcomes plus total elapsed time."
)]
pub struct PokerArgs {
    /// Path to the endpoints file (defaults to endpoints.json)
    pub config: Option<String>,

    /// Load this env file before poking; failing to load it is fatal
    #[arg(long = "env-file")]
    pub env_file: Option<String>,

    /// Per-request timeout (supports ms/s/m/h); default is the client's own
    #[arg(long = "timeout", value_parser = parse_duration_arg)]
    pub timeout: Option<Duration>,

    /// Enable debug-level logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
