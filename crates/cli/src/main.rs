//! # jobboard-cli: A CLI for `jobboard`
//!
//! Browses live job listings (with the bundled fallback) and the company
//! directory from the terminal.

mod render;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use jobboard::companies::{find_company, jobs_for_company, search_companies};
use jobboard::listing::filter_by_job_type;
use jobboard::{ApiConfig, JobBoard, JobQuery, RecencyWindow};
use render::CompanyProfile;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Overrides for the upstream API; unset flags fall back to `JOBS_API_*`.
#[derive(Args, Debug)]
struct ConnectionArgs {
    /// Base URL of the jobs API
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List active job postings
    Jobs(JobsArgs),
    /// List recently expired job postings
    Expired(OutputArgs),
    /// Search the company directory
    Companies(CompaniesArgs),
    /// Show one company profile with its postings
    Company(CompanyArgs),
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct JobsArgs {
    /// Recency window: 1h, 24h or 7d
    #[arg(long, default_value = "7d")]
    window: RecencyWindow,
    /// Job title filter
    #[arg(long, default_value = "")]
    title: String,
    /// Location filter
    #[arg(long, default_value = "")]
    location: String,
    #[arg(long, default_value_t = jobboard::constants::DEFAULT_LIMIT)]
    limit: usize,
    #[arg(long, default_value_t = 0)]
    offset: usize,
    /// Keep only this employment type (e.g. "Remote", "All Types")
    #[arg(long, default_value = "")]
    job_type: String,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct CompaniesArgs {
    /// Matches company name or industry
    #[arg(long, default_value = "")]
    query: String,
    /// Exact location, or "All Locations"
    #[arg(long, default_value = "")]
    location: String,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct CompanyArgs {
    /// Company identifier, e.g. company1
    id: String,
    #[command(flatten)]
    output: OutputArgs,
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so JSON output stays clean.
    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    debug!(?cli, "Parsed command line");

    match &cli.command {
        Commands::Jobs(args) => handle_jobs(&cli.connection, args).await,
        Commands::Expired(args) => handle_expired(&cli.connection, args).await,
        Commands::Companies(args) => handle_companies(args),
        Commands::Company(args) => handle_company(args),
    }
}

/// Layers command-line overrides over `.env` and the process environment.
fn api_config(connection: &ConnectionArgs) -> Result<ApiConfig> {
    if dotenvy::dotenv().is_ok() {
        info!("Loaded environment overrides from .env");
    }
    let config = ApiConfig::from_vars(|name| match name {
        "JOBS_API_BASE_URL" => connection
            .base_url
            .clone()
            .or_else(|| env::var(name).ok()),
        "JOBS_API_TIMEOUT_SECS" => connection
            .timeout_secs
            .map(|secs| secs.to_string())
            .or_else(|| env::var(name).ok()),
        _ => env::var(name).ok(),
    })
    .context("Invalid jobs API configuration")?;
    debug!(?config, "Resolved API configuration");
    Ok(config)
}

// --- Command Handlers ---

async fn handle_jobs(connection: &ConnectionArgs, args: &JobsArgs) -> Result<()> {
    let board = JobBoard::from_config(api_config(connection)?)?;
    let query = JobQuery::new(args.window)
        .title(args.title.clone())
        .location(args.location.clone())
        .limit(args.limit)
        .offset(args.offset);

    let listing = board.fetch_jobs_with_source(&query).await;
    let jobs = filter_by_job_type(listing.jobs, &args.job_type);

    if args.output.json {
        println!("{}", render::jobs_json(&jobs, listing.source)?);
    } else {
        print!("{}", render::jobs_text(&jobs, listing.source, Utc::now()));
    }
    Ok(())
}

async fn handle_expired(connection: &ConnectionArgs, args: &OutputArgs) -> Result<()> {
    let board = JobBoard::from_config(api_config(connection)?)?;
    let listing = board.fetch_expired_jobs_with_source().await;

    if args.json {
        println!("{}", render::jobs_json(&listing.jobs, listing.source)?);
    } else {
        print!(
            "{}",
            render::jobs_text(&listing.jobs, listing.source, Utc::now())
        );
    }
    Ok(())
}

fn handle_companies(args: &CompaniesArgs) -> Result<()> {
    let companies = search_companies(&args.query, &args.location);
    if args.output.json {
        println!("{}", serde_json::to_string_pretty(&companies)?);
    } else {
        print!("{}", render::companies_text(&companies));
    }
    Ok(())
}

fn handle_company(args: &CompanyArgs) -> Result<()> {
    let company = find_company(&args.id)
        .with_context(|| format!("Company not found: {}", args.id))?;
    let profile = CompanyProfile {
        jobs: jobs_for_company(&company.id),
        company,
    };

    if args.output.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print!("{}", render::profile_text(&profile, Utc::now()));
    }
    Ok(())
}
