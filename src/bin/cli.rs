//! next-extract CLI
//!
//! Loads a run configuration, extracts the pageProps payload from the
//! configured page, and writes it under the output directory. Exits
//! non-zero when the page carries no payload.

use clap::Parser;
use next_extract::{JsonStore, NextDataExtractor, RunConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "next-extract",
    version,
    about = "Extract the pageProps payload from a server-rendered Next.js page"
)]
struct Cli {
    /// Path to the run configuration JSON (homepage_url, page_url, ...)
    #[arg(default_value = "website_details.json")]
    config: PathBuf,

    /// Launch the browser with a visible window
    #[arg(long)]
    headed: bool,

    /// Directory to write the extracted payload to (overrides the config file)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Host to suppress during page load; repeatable (overrides the config file)
    #[arg(long = "blocked-domain", value_name = "HOST")]
    blocked_domains: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = RunConfig::from_file(&cli.config)?;

    let mut options = config.launch_options();
    if cli.headed {
        options = options.headless(false);
    }
    if !cli.blocked_domains.is_empty() {
        options = options.blocked_domains(cli.blocked_domains);
    }

    let output_dir = cli.output_dir.unwrap_or_else(|| config.output_dir.clone());
    let store = JsonStore::new(output_dir);

    let extractor = NextDataExtractor::with_options(config.homepage_url.clone(), options);
    match extractor.extract_and_save(&config.page_url, &store)? {
        Some(path) => {
            println!("Extracted pageProps from {}", config.page_url);
            println!("Saved to {}", path.display());
            Ok(())
        }
        None => {
            eprintln!("No pageProps payload found at {}", config.page_url);
            eprintln!("Re-run with --headed to watch the browser, or RUST_LOG=debug for details");
            std::process::exit(1);
        }
    }
}
