use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracklist::{IdGenerator, ListingConfig, ListingPipeline};

#[derive(Parser, Debug)]
#[command(name = "tracklist")]
#[command(about = "List a music track catalog, best rated first", long_about = None)]
struct Args {
    /// Path to the track catalog (XML)
    #[arg(
        short = 'c',
        long,
        default_value = "~/.local/share/tracklist/catalog.xml"
    )]
    catalog: String,

    /// Only list tracks whose title, artist or tags contain this keyword
    #[arg(short = 's', long)]
    search: Option<String>,

    /// Only list tracks with this tag
    #[arg(long)]
    tag: Option<String>,

    /// Only list tracks rated at least this many stars (1-5)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    min_rating: Option<u8>,

    /// Maximum number of tracks to list
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let catalog_path = shellexpand::tilde(&args.catalog);
    let mut config = ListingConfig::new(PathBuf::from(catalog_path.as_ref()));

    if let Some(keyword) = args.search {
        log::info!("Filtering by keyword: {:?}", keyword);
        config = config.with_keyword(keyword);
    }
    if let Some(tag) = args.tag {
        log::info!("Filtering by tag: {:?}", tag);
        config = config.with_tag(tag);
    }
    if let Some(rating) = args.min_rating {
        config = config.with_min_rating(rating);
    }
    if let Some(limit) = args.limit {
        config = config.with_limit(limit);
    }

    let ids = IdGenerator::new();
    let pipeline = ListingPipeline::new(config);
    log::info!("Listing catalog: {:?}", pipeline.config().catalog_path);
    let listed = pipeline.run(&ids, io::stdout().lock())?;

    log::info!("Listed {} track(s)", listed);
    Ok(())
}
