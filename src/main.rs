//! Seine command-line interface
//!
//! `seine crawl` runs a bounded crawl and builds the index; `seine search`
//! answers ranked queries against a previously built index.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use seine::config::{load_config, validate, CrawlConfig};
use seine::{run_crawl, CrawlSummary};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Seine: a bounded web crawler with a TF-IDF search index
#[derive(Parser, Debug)]
#[command(name = "seine")]
#[command(version)]
#[command(about = "Crawl a bounded set of pages and search them", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl from seed URLs and build the search index
    Crawl(CrawlArgs),

    /// Query a previously built index
    Search(SearchArgs),
}

#[derive(Args, Debug)]
struct CrawlArgs {
    /// TOML config file; explicit flags override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed URLs to start from
    #[arg(long, value_name = "URL", num_args = 1..)]
    seeds: Vec<String>,

    /// Directory receiving docs.json and index.json
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Maximum number of documents to collect
    #[arg(long)]
    limit: Option<usize>,

    /// Only visit URLs on the seed hosts
    #[arg(long)]
    restrict: bool,

    /// User agent string sent with every request
    #[arg(long)]
    user_agent: Option<String>,

    /// Pause in seconds after each collected page
    #[arg(long)]
    delay: Option<f64>,

    /// Maximum documents per host (0 = unlimited)
    #[arg(long)]
    max_per_host: Option<u32>,

    /// Page-fetch timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Upstream proxy (http://, https://, or socks5://)
    #[arg(long, value_name = "URL")]
    proxy: Option<String>,
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Directory holding docs.json and index.json
    #[arg(long, value_name = "DIR")]
    data: PathBuf,

    /// Query string
    #[arg(long, value_name = "QUERY")]
    query: String,

    /// Number of results to return
    #[arg(long, default_value_t = 10)]
    top_k: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Crawl(args) => handle_crawl(args).await,
        Command::Search(args) => handle_search(args),
    }
}

/// Sets up the tracing subscriber from the verbosity flags
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("seine=info,warn"),
            1 => EnvFilter::new("seine=debug,info"),
            2 => EnvFilter::new("seine=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Resolves the crawl configuration from an optional file plus flag overrides
fn resolve_crawl_config(args: CrawlArgs) -> anyhow::Result<CrawlConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => CrawlConfig::default(),
    };

    if !args.seeds.is_empty() {
        config.seeds = args.seeds;
    }
    if let Some(out) = args.out {
        config.out_dir = out;
    }
    if let Some(limit) = args.limit {
        config.limit = limit;
    }
    if args.restrict {
        config.restrict_to_seeds = true;
    }
    if let Some(user_agent) = args.user_agent {
        config.user_agent = user_agent;
    }
    if let Some(delay) = args.delay {
        config.delay = delay;
    }
    if let Some(max_per_host) = args.max_per_host {
        config.max_per_host = max_per_host;
    }
    if let Some(timeout) = args.timeout {
        config.timeout = timeout;
    }
    if args.proxy.is_some() {
        config.proxy = args.proxy;
    }

    if config.out_dir.as_os_str().is_empty() {
        anyhow::bail!("an output directory is required (--out or out-dir in the config file)");
    }
    validate(&config)?;
    Ok(config)
}

async fn handle_crawl(args: CrawlArgs) -> anyhow::Result<()> {
    let config = resolve_crawl_config(args)?;
    let out_dir = config.out_dir.clone();

    tracing::info!(
        "starting crawl: {} seed(s), limit {}, output {}",
        config.seeds.len(),
        config.limit,
        out_dir.display()
    );

    let summary = run_crawl(config).await?;
    print_summary(&summary, &out_dir);
    Ok(())
}

fn print_summary(summary: &CrawlSummary, out_dir: &std::path::Path) {
    let stats = &summary.stats;
    println!("Crawl started {}", summary.started_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!("Finished in {:.1?}", summary.elapsed);
    println!();
    println!("Documents collected:   {}", stats.documents);
    println!("URLs discovered:       {}", stats.discovered);
    println!("Skipped off-site:      {}", stats.skipped_offsite);
    println!("Skipped by robots.txt: {}", stats.skipped_robots);
    println!("Skipped by host quota: {}", stats.skipped_host_cap);
    println!("Skipped non-HTML:      {}", stats.skipped_not_html);
    println!("Failed fetches:        {}", stats.failed_fetches);
    println!("Empty pages:           {}", stats.skipped_empty);
    println!();
    println!("Output written to {}", out_dir.display());
}

fn handle_search(args: SearchArgs) -> anyhow::Result<()> {
    let documents = seine::storage::load_documents(&args.data)
        .with_context(|| format!("failed to load documents from {}", args.data.display()))?;
    let index = seine::storage::load_index(&args.data)
        .with_context(|| format!("failed to load index from {}", args.data.display()))?;

    let hits = seine::search(&index, &documents, &args.query, args.top_k)?;
    println!("{}", serde_json::to_string_pretty(&hits)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crawl_args(extra: &[&str]) -> CrawlArgs {
        let mut argv = vec!["seine", "crawl"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Command::Crawl(args) => args,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_flags_build_a_config() {
        let args = crawl_args(&[
            "--seeds",
            "https://example.com/",
            "--out",
            "/tmp/data",
            "--limit",
            "5",
            "--restrict",
            "--max-per-host",
            "2",
        ]);
        let config = resolve_crawl_config(args).unwrap();
        assert_eq!(config.seeds, vec!["https://example.com/"]);
        assert_eq!(config.limit, 5);
        assert!(config.restrict_to_seeds);
        assert_eq!(config.max_per_host, 2);
        assert_eq!(config.delay, 0.2);
    }

    #[test]
    fn test_missing_out_dir_rejected() {
        let args = crawl_args(&["--seeds", "https://example.com/"]);
        assert!(resolve_crawl_config(args).is_err());
    }

    #[test]
    fn test_missing_seeds_rejected() {
        let args = crawl_args(&["--out", "/tmp/data"]);
        assert!(resolve_crawl_config(args).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "seeds = [\"https://file.example/\"]\nout-dir = \"/tmp/from-file\"\nlimit = 99\n"
        )
        .unwrap();
        file.flush().unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let args = crawl_args(&["--config", &path, "--limit", "3"]);
        let config = resolve_crawl_config(args).unwrap();
        assert_eq!(config.seeds, vec!["https://file.example/"]);
        assert_eq!(config.limit, 3);
        assert_eq!(config.out_dir, PathBuf::from("/tmp/from-file"));
    }
}
