use clap::{Parser, Subcommand};
use recipebox_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "recipebox-cli", version, about = "RecipeBox CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and search recipes
    Recipes {
        #[command(subcommand)]
        action: commands::recipes::RecipesAction,
    },
    /// Favorite recipes
    Favorites {
        #[command(subcommand)]
        action: commands::favorites::FavoritesAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing(config: &Config) {
    let level_check = config.logging.validate();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match &level_check {
        Ok(()) => EnvFilter::new(&config.logging.level),
        Err(_) => EnvFilter::new("warn"),
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = level_check {
        tracing::warn!(error = %e, "ignoring logging.level, using warn");
    }
}

fn main() {
    let cli = Cli::parse();

    // A broken config file must not prevent resetting it.
    let config = match (Config::load(), &cli.command) {
        (Ok(config), _) => config,
        (
            Err(_),
            Commands::Config {
                action: commands::config::ConfigAction::Reset,
            },
        ) => Config::default(),
        (Err(e), _) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(&config);

    let result = match cli.command {
        Commands::Recipes { action } => commands::recipes::run(action, &config),
        Commands::Favorites { action } => commands::favorites::run(action, &config),
        Commands::Config { action } => commands::config::run(action, config),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
