use anyhow::Result;
use clap::{Parser, Subcommand};
use macroplan_recipe::DietSelection;

mod cli;

/// macroplan - Meal plans scaled to a calorie goal
#[derive(Parser)]
#[command(name = "macroplan")]
#[command(about = "Meal plan generation and macro scaling", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Generate a plan and print it as JSON
    Generate {
        /// vegan, vegetarian, keto, paleo or anything
        #[arg(long)]
        diet: DietSelection,

        /// Daily calorie goal
        #[arg(long)]
        calories: f64,

        /// Maximum prep and cook time per dish, in minutes
        #[arg(long)]
        time: u32,

        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
        meal_count: u8,

        /// Store the plan for this user
        #[arg(long)]
        user_id: Option<String>,

        /// Day to store the plan under (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = macroplan::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    macroplan::observability::init_observability(
        "macroplan",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::serve(config, host, port).await,
        Commands::Migrate => cli::migrate(&config).await,
        Commands::Reset => cli::reset(&config).await,
        Commands::Generate {
            diet,
            calories,
            time,
            meal_count,
            user_id,
            date,
            seed,
        } => {
            cli::generate(
                config,
                cli::GenerateArgs {
                    diet,
                    calories,
                    time,
                    meal_count,
                    user_id,
                    date,
                    seed,
                },
            )
            .await
        }
    }
}
