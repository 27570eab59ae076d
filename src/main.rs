use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use penalty_journey::config::Config;
use penalty_journey::features::FeatureFlags;
use penalty_journey::navigation::{Direction, NavigationResolver};
use penalty_journey::rest::{self, ApiDoc, ApiState};
use penalty_journey::{journey, logging};

#[derive(Parser)]
#[command(name = "penalty-journey")]
#[command(about = "Step navigation for the late-filing penalty payment journey")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the REST API server
    Serve {
        /// Port to listen on (default: from config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Resolve the redirect destination after a step
    Next {
        /// Step name (e.g. EnterDetails)
        step: String,

        /// Path parameter values in route order
        params: Vec<String>,
    },

    /// Resolve the back link before a step
    Previous {
        /// Step name (e.g. ViewPenalties)
        step: String,

        /// Path parameter values in route order
        params: Vec<String>,
    },

    /// List the journey steps
    Steps,

    /// Check the journey declarations for configuration errors
    Validate,

    /// Print the effective configuration as TOML
    Config,

    /// Print the OpenAPI document
    Openapi {
        /// Emit YAML instead of JSON
        #[arg(long)]
        yaml: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::load(cli.config.as_deref())?;
    let _logging_handle = logging::init_logging(&config, cli.debug)?;

    match cli.command {
        Commands::Serve { port } => {
            let port = port.unwrap_or(config.rest_api.port);
            rest::serve(ApiState::new(config), port).await?;
        }
        Commands::Next { step, params } => {
            let resolver = resolver(&config);
            println!("{}", cmd_resolve(&resolver, &step, &params, Direction::Forward)?);
        }
        Commands::Previous { step, params } => {
            let resolver = resolver(&config);
            println!("{}", cmd_resolve(&resolver, &step, &params, Direction::Backward)?);
        }
        Commands::Steps => {
            cmd_features(&config);
            cmd_steps(&resolver(&config));
        }
        Commands::Validate => cmd_validate(&resolver(&config))?,
        Commands::Config => print!("{}", config.to_toml()?),
        Commands::Openapi { yaml } => {
            let document = if yaml {
                ApiDoc::yaml().context("Failed to render OpenAPI YAML")?
            } else {
                ApiDoc::json().context("Failed to render OpenAPI JSON")?
            };
            println!("{}", document);
        }
    }

    Ok(())
}

fn resolver(config: &Config) -> NavigationResolver {
    journey::build_resolver(FeatureFlags::from_config(&config.features))
}

fn cmd_resolve(
    resolver: &NavigationResolver,
    step: &str,
    params: &[String],
    direction: Direction,
) -> Result<String> {
    let node = resolver
        .registry()
        .find_by_name(step)
        .with_context(|| format!("Unknown step '{}'", step))?;

    let destination = resolver
        .resolve(node.id(), direction, params)
        .with_context(|| format!("Failed to resolve {} step of '{}'", direction, step))?;

    Ok(destination.to_string())
}

fn cmd_features(config: &Config) {
    println!("Enabled penalty references:");
    for kind in FeatureFlags::from_config(&config.features).enabled_reference_types() {
        println!("  {}... {}", kind.starts_with(), kind.display_name());
    }
    println!();
}

fn cmd_steps(resolver: &NavigationResolver) {
    for node in resolver.registry().steps() {
        let marker = if node.is_conditional() { "?" } else { " " };
        println!("{} {}", marker, node.id().short_name());

        for template in node.routes().unwrap_or_default() {
            println!("    route    {}", template.as_str());
        }
        if let Some(previous) = node.previous() {
            println!("    previous {}", previous.short_name());
        }
        if let Some(next) = node.next() {
            println!("    next     {}", next.short_name());
        }
    }
}

fn cmd_validate(resolver: &NavigationResolver) -> Result<()> {
    match resolver.registry().validate() {
        Ok(()) => {
            println!("{} steps OK", resolver.registry().len());
            Ok(())
        }
        Err(errors) => {
            for error in &errors {
                eprintln!("  {}", error);
            }
            bail!("{} problem(s) found in step declarations", errors.len());
        }
    }
}
