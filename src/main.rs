//! Sitemap-Ripple main entry point
//!
//! This is the command-line interface for the Sitemap-Ripple generator.

use anyhow::Context;
use clap::Parser;
use sitemap_ripple::config::{load_options, GenerateOptions, OptionSources};
use sitemap_ripple::generate_sitemap_and_robots;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sitemap-Ripple: generate sitemap.xml and robots.txt by crawling a site
///
/// Options are resolved from built-in defaults, then the environment (with --env),
/// then the TOML file (with --config), then `key=value` arguments such as
/// `baseUrl=https://example.com/ maxDepth=3 disallowPaths=/admin,/private`.
#[derive(Parser, Debug)]
#[command(name = "sitemap-ripple")]
#[command(version)]
#[command(about = "Crawl a site and generate sitemap.xml and robots.txt", long_about = None)]
struct Cli {
    /// Option overrides as key=value (baseUrl, outDir, maxDepth, disallowPaths, timeoutSecs, userAgent)
    #[arg(value_name = "KEY=VALUE")]
    overrides: Vec<String>,

    /// Path to a TOML options file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Read BASE_URL, OUT_DIR, MAX_DEPTH and DISALLOW_PATHS from the environment
    #[arg(long)]
    env: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Resolve and validate options, print them, and exit without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let sources = OptionSources {
        use_env: cli.env,
        config_file: cli.config,
        overrides: cli.overrides,
    };
    let options = load_options(&sources).context("Failed to load options")?;
    tracing::info!("Generating sitemap with options: {:?}", options);

    if cli.dry_run {
        print_options(&options);
        return Ok(());
    }

    match generate_sitemap_and_robots(&options).await {
        Ok(_) => {
            tracing::info!("Sitemap generated successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Sitemap generation failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitemap_ripple=info,warn"),
            1 => EnvFilter::new("sitemap_ripple=debug,info"),
            2 => EnvFilter::new("sitemap_ripple=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Prints resolved options for --dry-run
fn print_options(options: &GenerateOptions) {
    println!("=== Sitemap-Ripple Dry Run ===\n");
    println!("  Base URL: {}", options.base_url);
    println!("  Output directory: {}", options.out_dir);
    println!("  Max depth: {}", options.max_depth);
    println!("  Timeout: {}s", options.timeout_secs);
    println!("  User agent: {}", options.user_agent);

    println!("\nDisallowed paths ({}):", options.disallow_paths.len());
    for path in &options.disallow_paths {
        println!("  - {}", path);
    }

    println!("\n✓ Options are valid");
}
