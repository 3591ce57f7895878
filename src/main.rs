use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use internmatch::{CandidateQuery, RankingConfig, RecommendResponse, Recommender, RestApi};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Internship recommendation engine
#[derive(Parser, Debug)]
#[command(name = "internmatch")]
#[command(about = "Rank internship postings against a candidate profile", long_about = None)]
struct Args {
    /// Log level
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the catalog once and serve the REST API
    Serve {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Address to bind
        #[arg(long, env = "INTERNMATCH_HOST", default_value = "0.0.0.0")]
        host: String,

        /// HTTP port
        #[arg(long, env = "INTERNMATCH_PORT", default_value_t = 5000)]
        port: u16,
    },
    /// Rank the catalog for one candidate and print the result as JSON
    Recommend {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// JSON file holding a full candidate query; flags below override it
        #[arg(long)]
        candidate: Option<PathBuf>,

        #[arg(long)]
        education: Option<String>,

        #[arg(long)]
        skills: Option<String>,

        #[arg(long)]
        interests: Option<String>,

        /// Preferred location (boosts matching postings)
        #[arg(long)]
        location: Option<String>,

        /// Required mode, e.g. remote
        #[arg(long)]
        mode: Option<String>,

        #[arg(long)]
        min_stipend: Option<f64>,

        /// Maximum duration in weeks
        #[arg(long)]
        max_duration: Option<f64>,

        /// Number of results
        #[arg(long)]
        top_n: Option<usize>,
    },
}

#[derive(ClapArgs, Debug)]
struct CatalogArgs {
    /// Path to the internship catalog (CSV or TSV)
    #[arg(short, long, default_value = "internships.csv")]
    catalog: PathBuf,

    /// Ranking config file (JSON); defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,
}

impl CatalogArgs {
    fn recommender(&self) -> anyhow::Result<Recommender> {
        let config = match &self.config {
            Some(path) => RankingConfig::from_file(path)
                .with_context(|| format!("loading ranking config {:?}", path))?,
            None => RankingConfig::default(),
        };
        Recommender::from_path(&self.catalog, config)
            .with_context(|| format!("loading catalog {:?}", self.catalog))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Serve { catalog, host, port } => serve(catalog, host, port).await,
        Command::Recommend {
            catalog,
            candidate,
            education,
            skills,
            interests,
            location,
            mode,
            min_stipend,
            max_duration,
            top_n,
        } => {
            let mut query = match &candidate {
                Some(path) => read_candidate(path)?,
                None => CandidateQuery::new(),
            };
            if let Some(v) = education {
                query.education = v;
            }
            if let Some(v) = skills {
                query.skills = v;
            }
            if let Some(v) = interests {
                query.interests = v;
            }
            if let Some(v) = location {
                query.preferred_location = v;
            }
            if let Some(v) = mode {
                query.mode = v;
            }
            query.min_stipend = min_stipend.or(query.min_stipend);
            query.max_duration_weeks = max_duration.or(query.max_duration_weeks);
            query.top_n = top_n.or(query.top_n);

            let recommender = catalog.recommender()?;
            let response = RecommendResponse::new(recommender.recommend(&query));
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
    }
}

fn read_candidate(path: &Path) -> anyhow::Result<CandidateQuery> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading candidate {:?}", path))?;
    serde_json::from_str(&text).with_context(|| format!("parsing candidate {:?}", path))
}

async fn serve(catalog: CatalogArgs, host: String, port: u16) -> anyhow::Result<()> {
    info!("Starting internmatch v{}", env!("CARGO_PKG_VERSION"));
    info!("Catalog: {:?}", catalog.catalog);

    let recommender = Arc::new(catalog.recommender()?);
    let stats = recommender.catalog().stats();
    info!(
        "Catalog ready: {} postings, {} terms",
        stats.rows, stats.vocabulary_size
    );

    let http_handle = std::thread::spawn(move || -> std::io::Result<()> {
        info!("Starting HTTP server on {}:{}", host, port);
        let sys = actix_web::rt::System::new();
        sys.block_on(RestApi::start(recommender, &host, port))
    });

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        joined = tokio::task::spawn_blocking(move || http_handle.join()) => {
            match joined {
                Ok(Ok(Ok(()))) => info!("HTTP server stopped"),
                Ok(Ok(Err(e))) => {
                    error!("HTTP server error: {}", e);
                    return Err(e).context("HTTP server failed");
                }
                Ok(Err(_)) | Err(_) => anyhow::bail!("HTTP server thread panicked"),
            }
        }
    }

    info!("Shutting down...");
    Ok(())
}
