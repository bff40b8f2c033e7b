

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use org_cleaner::{CleanerConfig, ExclusionSet, OrgCleaner, ResourceManagerClient, RunScope, TracingSink};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Delete every folder and project under a GCP organization.
#[derive(Parser, Debug)]
#[command(name = "org-cleaner", version)]
struct Cli {
    /// Numeric organization id.
    organization_id: String,

    /// Log every action without calling any mutating endpoint.
    #[arg(long)]
    dry_run: bool,

    /// Comma-separated folder ids to keep, along with their subtrees.
    #[arg(long, value_name = "IDS")]
    exclude_folders: Option<String>,

    /// Comma-separated project ids to keep.
    #[arg(long, value_name = "IDS")]
    exclude_projects: Option<String>,

    #[arg(long)]
    only_folders: bool,

    #[arg(long)]
    only_projects: bool,

    /// TOML file with api_base_url, access_token, timeout and page_size.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

const DEFAULT_LOG_FILTER: &str = "org_cleaner=info";

// `RUST_LOG` wins whenever it parses.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let cli = Cli::parse();

    let config = CleanerConfig::load(cli.config.as_deref())?;
    if config.access_token.is_none() {
        anyhow::bail!(
            "no access token: set ORG_CLEANER_ACCESS_TOKEN or GOOGLE_OAUTH_ACCESS_TOKEN"
        );
    }

    let exclusions = ExclusionSet::from_csv(
        cli.exclude_folders.as_deref(),
        cli.exclude_projects.as_deref(),
    );
    info!(
        "Excluding {} folder(s) and {} project(s)",
        exclusions.folder_count(),
        exclusions.project_count()
    );

    let client = Arc::new(ResourceManagerClient::new(&config)?);
    let cleaner = OrgCleaner::from_client(client, Arc::new(TracingSink));
    cleaner
        .run_scoped(
            &cli.organization_id,
            &exclusions,
            cli.dry_run,
            RunScope::from_flags(cli.only_projects, cli.only_folders),
        )
        .await?;

    Ok(())
}
