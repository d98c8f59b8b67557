use clap::Parser;

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Host address the HTTP server binds to
    #[arg(long, value_name = "BIND_HOST", default_value = "0.0.0.0")]
    pub bind_host: String,
    /// Port the HTTP server binds to
    #[arg(short = 'p', long, value_name = "BIND_PORT", default_value_t = 8000)]
    pub bind_port: u16,
    /// Load two sample scorecards at startup when the collection is empty
    #[arg(long, default_value_t = false)]
    pub seed_demo_data: bool,
}
