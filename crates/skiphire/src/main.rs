use std::path::PathBuf;

use clap::Parser;
use skiphire::{
    App, AppConfig, CatalogWorker, ConfigOverrides, HttpCatalog, init_logging, log_session_start,
};

#[derive(Parser, Debug)]
#[command(name = "skiphire")]
#[command(about = "Choose a waste skip from your terminal")]
struct Args {
    /// Path to the data directory (default: ~/.skiphire/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Base URL of the skip catalog API
    #[arg(long)]
    base_url: Option<String>,

    /// Postcode to look up skips for
    #[arg(long)]
    postcode: Option<String>,

    /// Area name sent along with the postcode
    #[arg(long)]
    area: Option<String>,

    /// Number of skips per page
    #[arg(long)]
    page_size: Option<usize>,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".skiphire")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let config = AppConfig::resolve(
        &data_dir,
        ConfigOverrides {
            base_url: args.base_url,
            postcode: args.postcode,
            area: args.area,
            page_size: args.page_size,
        },
    );
    log_session_start(&data_dir, &config);

    let catalog = HttpCatalog::new(config.request_timeout())?;
    let worker = CatalogWorker::spawn(catalog);
    let mut app = App::new(&config, Box::new(worker));

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
