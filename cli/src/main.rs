//! CLI entrypoint for agent-conductor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod output;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use conductor_application::{
    ConversationLogger, DispatchUseCase, NoConversationLogger, NoStateStore, RefineUseCase,
    RouteUseCase, StateStore, Worker, WorkerPool,
};
use conductor_domain::prompt::worker::{default_handler_instructions, default_instructions};
use conductor_domain::{DispatchPromptTemplate, RouteCategory, RoutePromptTemplate, WorkerKind};
use conductor_infrastructure::{
    ConfigLoader, FileConfig, HttpLlmGateway, JsonStateStore, JsonlConversationLogger, RubricGate,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "conductor", version, about = "Coordinates specialized model agents")]
struct Cli {
    /// Increase diagnostic verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Explicit config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Skip config files and use built-in defaults
    #[arg(long, global = true)]
    no_config: bool,

    /// Emit machine-readable JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decompose an objective into tasks and dispatch each to a worker
    Dispatch {
        /// The objective to decompose
        objective: String,
    },
    /// Classify a query and dispatch it to one specialized handler
    Route {
        /// The query to classify
        query: String,
    },
    /// Generate content and refine it until the quality gate passes
    Refine {
        /// The generation request
        input: String,
    },
    /// Check that the configured model endpoint is reachable
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    info!("Starting agent-conductor");

    // === Dependency Injection ===
    let gateway = Arc::new(
        HttpLlmGateway::new(
            &config.gateway.base_url,
            config.gateway.api_key(),
            Duration::from_secs(config.gateway.timeout_secs),
        )
        .context("failed to initialize gateway")?,
    );

    let conversation_logger: Arc<dyn ConversationLogger> =
        match config.logging.conversation_log.as_deref() {
            Some(path) => match JsonlConversationLogger::new(path) {
                Some(logger) => Arc::new(logger),
                None => Arc::new(NoConversationLogger),
            },
            None => Arc::new(NoConversationLogger),
        };

    match cli.command {
        Command::Dispatch { objective } => {
            let state_store: Arc<dyn StateStore> = if config.state.enabled {
                Arc::new(JsonStateStore::new(&config.state.dir))
            } else {
                Arc::new(NoStateStore)
            };

            let planner = build_worker(
                &gateway,
                &config,
                "planner",
                &DispatchPromptTemplate::planner_system(),
            );
            let pool = Arc::new(
                WorkerKind::all()
                    .into_iter()
                    .fold(WorkerPool::new(), |pool, kind| {
                        pool.with_kind(
                            kind,
                            build_worker(&gateway, &config, kind.as_str(), default_instructions(kind)),
                        )
                    }),
            );

            let use_case = DispatchUseCase::new(planner, pool, state_store, conversation_logger);
            let outcome = use_case.execute(&objective).await?;

            if cli.json {
                println!("{}", output::format_dispatch_json(&outcome));
            } else {
                println!("{}", output::format_dispatch(&outcome));
            }
        }

        Command::Route { query } => {
            let classifier = build_worker(
                &gateway,
                &config,
                "classifier",
                &RoutePromptTemplate::classifier_system(),
            );
            let pool = Arc::new(RouteCategory::all().into_iter().fold(
                WorkerPool::new(),
                |pool, category| {
                    pool.with_category(
                        category,
                        build_worker(
                            &gateway,
                            &config,
                            category.as_str(),
                            default_handler_instructions(category),
                        ),
                    )
                },
            ));

            let use_case = RouteUseCase::new(classifier, pool, conversation_logger);
            let outcome = use_case.execute(&query).await?;

            if cli.json {
                println!("{}", output::format_route_json(&outcome));
            } else {
                println!("{}", output::format_route(&outcome));
            }
        }

        Command::Refine { input } => {
            let generator = build_worker(
                &gateway,
                &config,
                "generator",
                default_instructions(WorkerKind::Writer),
            );
            let gate = Arc::new(RubricGate::new(
                config.refine.min_length,
                config.refine.required_phrases.clone(),
            ));

            let use_case = RefineUseCase::new(
                generator,
                gate,
                config.refine.to_params(),
                conversation_logger,
            );
            let outcome = use_case.execute(&input).await?;

            if cli.json {
                println!("{}", output::format_refine_json(&outcome));
            } else {
                println!("{}", output::format_refine(&outcome));
            }
        }

        Command::Health => {
            let status = gateway.probe().await?;
            println!("{}", output::format_health(&status));
            if !status.healthy {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Build one worker from config: the `[workers]` instruction override and
/// `[models]` profile for the role, with the given defaults.
fn build_worker(
    gateway: &Arc<HttpLlmGateway>,
    config: &FileConfig,
    role: &str,
    default_instructions: &str,
) -> Arc<Worker> {
    let profiles = config.models.to_profiles();
    let agent_config = config.workers.agent_config(role);
    Arc::new(Worker::from_config(
        gateway.clone(),
        &profiles,
        &agent_config,
        role,
        default_instructions,
    ))
}
