//! Command-line host for the Conquest combat simulator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use commands::ForceOptions;

#[derive(Parser)]
#[command(
    name = "cq",
    about = "Conquest — dice combat simulator for territory battles",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Forces and dice shared by every battle command.
#[derive(Args)]
struct ForceArgs {
    /// Armies in the defending territory
    #[arg(short, long, default_value_t = 15, value_parser = clap::value_parser!(i32).range(1..=90))]
    defence: i32,

    /// Armies in the attacking territory
    #[arg(short, long, default_value_t = 25, value_parser = clap::value_parser!(i32).range(2..=90))]
    attack: i32,

    /// Number of dice the attacker rolls
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(i32).range(1..=3))]
    power: i32,

    /// Attacker average at which the defender rolls a single die
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(i32).range(1..=6))]
    threshold: i32,

    /// Defender always rolls a single die
    #[arg(long, conflicts_with = "threshold")]
    no_smart: bool,

    /// RNG seed for reproducible dice
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl ForceArgs {
    fn options(&self) -> ForceOptions {
        ForceOptions {
            defence: self.defence,
            attack: self.attack,
            power: self.power,
            threshold: (!self.no_smart).then_some(self.threshold),
            seed: self.seed,
            json: self.json,
        }
    }
}

/// Series limits shared by `series` and `sample --series`.
#[derive(Args)]
struct SeriesArgs {
    /// Maximum number of rounds in a series
    #[arg(short, long, default_value_t = 40, value_parser = clap::value_parser!(u32).range(1..=100))]
    length: u32,

    /// Armies the attacker keeps back
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(i32).range(1..=90))]
    reserve: i32,

    /// Stop when the remaining attack equals the reserve, not only below it
    #[arg(long)]
    inclusive_reserve: bool,

    /// Use --threshold in every round instead of the default threshold
    #[arg(long)]
    carry_threshold: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a single battle round
    Battle {
        #[command(flatten)]
        forces: ForceArgs,
    },

    /// Resolve rounds until the reserve, a depleted side, or the length stops them
    Series {
        #[command(flatten)]
        forces: ForceArgs,

        #[command(flatten)]
        series: SeriesArgs,
    },

    /// Average many independent battles
    Sample {
        #[command(flatten)]
        forces: ForceArgs,

        #[command(flatten)]
        series_args: SeriesArgs,

        /// Number of trials
        #[arg(short = 'n', long, default_value_t = 25, value_parser = clap::value_parser!(u32).range(1..=1000))]
        size: u32,

        /// Sample whole series instead of single rounds
        #[arg(long)]
        series: bool,

        /// Cancel the run if it takes longer than this many milliseconds
        #[arg(long)]
        budget_ms: Option<u64>,
    },

    /// Count army pieces from an image's object detections
    Count {
        /// Image the detections belong to
        image: PathBuf,

        /// Detections file (default: `<image>.json`)
        #[arg(long)]
        detections: Option<PathBuf>,

        /// Ignore detections below this confidence
        #[arg(long, default_value_t = 0.5)]
        min_confidence: f32,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

impl SeriesArgs {
    fn options(&self) -> commands::SeriesOptions {
        commands::SeriesOptions {
            length: self.length,
            reserve: self.reserve,
            inclusive_reserve: self.inclusive_reserve,
            carry_threshold: self.carry_threshold,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Battle { forces } => commands::battle::run(&forces.options()),
        Commands::Series { forces, series } => {
            commands::series::run(&forces.options(), &series.options())
        }
        Commands::Sample {
            forces,
            series_args,
            size,
            series,
            budget_ms,
        } => commands::sample::run(
            &forces.options(),
            series.then(|| series_args.options()).as_ref(),
            size as usize,
            budget_ms,
        ),
        Commands::Count {
            image,
            detections,
            min_confidence,
            json,
        } => commands::count::run(&image, detections.as_deref(), min_confidence, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
