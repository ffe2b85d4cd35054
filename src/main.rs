use clap::Parser;
use gazette::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "gazette", about = "Terminal reader for a REST post feed")]
struct Args {
    /// Base URL of the posts API
    #[arg(long)]
    base_url: Option<String>,

    /// Seed for the synthesized like/comment counts
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config before logging: the log file path is itself configurable.
    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("gazette: {}, continuing with defaults", e);
        config::GazetteConfig::default()
    });
    let resolved = config::resolve(&file_config, args.base_url.as_deref(), args.seed);

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!(
        "Gazette starting up against {} (seed {})",
        resolved.base_url,
        resolved.seed
    );

    gazette::tui::run(resolved)
}
