use clap::{Parser, Subcommand};
use device_catalog::{load_config, CatalogLoader, CatalogView, Config, LoadState, Page, Url};
use eyre::{bail, Result};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "device-catalog")]
#[command(about = "Render a device catalog as HTML")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Location the catalog is served from (overrides config file)
    #[arg(long)]
    base_url: Option<Url>,

    /// Log level
    #[arg(short, long, default_value = "warn")]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the card grid, optionally filtered
    List {
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Print the detail view of one device
    Show {
        /// Slug or id of the device
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    let loader = CatalogLoader::new(&config)?;
    tracing::debug!(url = %loader.url(), "using catalog");

    match args.command {
        Command::List { query } => {
            let mut view = CatalogView::new(config, Page::listing(query.is_some()));
            view.load(&loader).await;
            if let Some(query) = query {
                view.search(&query);
            }
            println!("{}", view.page().list_html());
        }
        Command::Show { id } => {
            let mut view = CatalogView::new(config, Page::detail());
            view.render_detail(&id);
            view.load(&loader).await;
            if view.state() == LoadState::Failed {
                bail!("Could not load the catalog from {}", loader.url());
            }
            println!("{}", view.page().detail_html());
        }
    }

    Ok(())
}
