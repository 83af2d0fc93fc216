use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use basecamp_activities::{config::BasecampArgs, digest};

#[derive(Parser)]
#[command(name = "basecamp-activities")]
#[command(about = "Status digests from Basecamp to-do comments")]
struct Cli {
    #[command(flatten)]
    basecamp: BasecampArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the latest updates of matching to-dos (default)
    Report,
    /// List the account's projects
    Projects,
}

/// Initialize tracing. Everything goes to stderr, the report included.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "basecamp_activities=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(e) = run(cli).await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.basecamp.into_config()?;
    let client = config.client()?;

    match cli.command.unwrap_or(Commands::Report) {
        Commands::Report => {
            config.warn_unsupported();
            let digests = digest::run(&client, &config).await?;
            tracing::debug!("Reported on {} to-do lists", digests.len());
        }
        Commands::Projects => {
            tracing::info!("Projects of account {}", config.account_id);
            for project in client.list_projects().await? {
                let mut flags = Vec::new();
                if project.starred {
                    flags.push("starred");
                }
                if project.archived {
                    flags.push("archived");
                }
                if flags.is_empty() {
                    tracing::info!("{} {}", project.id, project.name);
                } else {
                    tracing::info!("{} {} [{}]", project.id, project.name, flags.join(", "));
                }
            }
        }
    }

    Ok(())
}
