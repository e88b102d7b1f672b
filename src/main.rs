use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wayfarer_cli::console::menu;
use wayfarer_cli::export::{export_expenses_csv, write_trip_json};
use wayfarer_cli::models::{Money, Profile, User};

#[derive(Parser)]
#[command(
    name = "wayfarer",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal travel planning application",
    long_about = "Wayfarer plans trips with a bounded budget, a day-by-day \
                  itinerary of priced activities, and visa applications gated \
                  by document completeness."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Traveler name for the session profile
    #[arg(long, env = "WAYFARER_NAME", default_value = "Ada Demir")]
    name: String,

    /// Traveler email for the session profile
    #[arg(long, env = "WAYFARER_EMAIL", default_value = "ada@example.com")]
    email: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive planning menu
    #[command(alias = "ui")]
    Interactive,

    /// Run a scripted end-to-end walkthrough (visa, trip, sightseeing)
    Demo {
        /// Budget cap for the demo trip
        #[arg(long, default_value = "50000")]
        budget: String,

        /// Directory to also write trip.json and expenses.csv into
        #[arg(long)]
        export_dir: Option<std::path::PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let profile = Profile::new(&cli.name, &cli.email)?;
    let mut user = User::new(profile);

    match cli.command {
        None | Some(Commands::Interactive) => {
            menu::run(&mut user);
            Ok(())
        }
        Some(Commands::Demo { budget, export_dir }) => {
            let budget = Money::parse(&budget)
                .map_err(|e| anyhow::anyhow!("invalid budget: {}", e))?;
            menu::run_demo(&mut user, budget)?;

            if let Some(dir) = export_dir {
                std::fs::create_dir_all(&dir)?;
                let trip = user
                    .trips()
                    .first()
                    .ok_or_else(|| anyhow::anyhow!("demo registered no trip"))?;

                let mut json_file = std::fs::File::create(dir.join("trip.json"))?;
                write_trip_json(trip, &mut json_file)?;

                let mut csv_file = std::fs::File::create(dir.join("expenses.csv"))?;
                export_expenses_csv(trip.budget(), &mut csv_file)?;

                println!("\nExported trip.json and expenses.csv to {}", dir.display());
            }
            Ok(())
        }
    }
}
