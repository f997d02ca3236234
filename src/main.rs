use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use athlete_readiness_dashboard::loader::DataPaths;
use athlete_readiness_dashboard::models::Scope;
use athlete_readiness_dashboard::{build_router, load_view, report, AppState};
use clap::{ArgGroup, Args, Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "readiness-dashboard")]
#[command(about = "Team and athlete readiness, sleep and nutrition dashboard", long_about = None)]
struct Cli {
    /// Directory holding readiness.csv, sleep.csv and nutrition.csv
    #[arg(long, global = true, env = "DASHBOARD_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
#[command(group(
    ArgGroup::new("scope")
        .args(["team", "athlete"])
        .multiple(false)
))]
struct ScopeArgs {
    #[arg(long)]
    team: Option<String>,
    #[arg(long)]
    athlete: Option<String>,
}

impl ScopeArgs {
    fn into_scope(self) -> Scope {
        match (self.team, self.athlete) {
            (Some(team), _) => Scope::Team(team),
            (None, Some(athlete)) => Scope::Athlete(athlete),
            (None, None) => Scope::All,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard JSON API
    Serve {
        #[arg(long, env = "DASHBOARD_BIND", default_value = "127.0.0.1:5000")]
        bind: SocketAddr,
    },
    /// Print averages for all teams, one team or one athlete
    Summary {
        #[command(flatten)]
        scope: ScopeArgs,
    },
    /// Generate a markdown report
    Report {
        #[command(flatten)]
        scope: ScopeArgs,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let paths = DataPaths::from_dir(&cli.data_dir);

    match cli.command {
        Commands::Serve { bind } => {
            info!(
                "Starting readiness dashboard v{} with data from {}",
                env!("CARGO_PKG_VERSION"),
                cli.data_dir.display()
            );

            let app = build_router(AppState::new(paths));
            let listener = tokio::net::TcpListener::bind(bind)
                .await
                .with_context(|| format!("failed to bind {bind}"))?;
            info!("listening on http://{}", bind);

            axum::serve(listener, app).await?;
        }
        Commands::Summary { scope } => {
            let view = load_view(&paths, scope.into_scope())
                .context("failed to load measurement data")?;

            println!("Averages for {}:", view.scope.label());
            for gauge in view.chart.indicators.iter() {
                println!("- {}: {:.2}", gauge.title, gauge.value);
            }

            if view.rows.is_empty() {
                println!("No measurements found for this scope.");
                return Ok(());
            }

            println!();
            for row in view.rows.iter() {
                println!(
                    "- {}: readiness {:.1}, sleep {:.1}h at quality {:.1}, {:.1} kcal",
                    row.key, row.readiness, row.hours, row.quality, row.calories
                );
            }
        }
        Commands::Report { scope, out } => {
            let view = load_view(&paths, scope.into_scope())
                .context("failed to load measurement data")?;
            let report = report::build_report(&view, chrono::Utc::now());
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}
