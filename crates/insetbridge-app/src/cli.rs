use clap::Parser;

/// insetbridge: hosts a web page and publishes window insets as CSS safe-area values.
#[derive(Parser, Debug)]
#[command(name = "insetbridge", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (e.g. `debug` or `insetbridge=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// URL to load instead of `surface.url`.
    #[arg(long)]
    pub url: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
