use clap::Parser;

/// framesync: resize embedded frames from cross-document size reports.
#[derive(Parser, Debug)]
#[command(name = "framesync", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Message source: a JSON-lines file, or `-` for stdin.
    #[arg(short = 'i', long, default_value = "-")]
    pub input: String,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
