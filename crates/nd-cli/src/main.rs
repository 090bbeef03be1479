//! CLI frontend for the narrative dice engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use nd_dice::RollerConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "nd",
    about = "Narrative dice roller: build a pool, roll it, read the net result",
    version,
    propagate_version = true
)]
struct Cli {
    /// RNG seed for reproducible rolls
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a pool given as kind letters (A, P, D, C, B, S, F), e.g. PPADD
    Roll {
        /// Encoded pool; a leading '#' is ignored
        #[arg(default_value = "")]
        pool: String,

        /// Upgrade a family (ability or difficulty) before rolling; repeatable
        #[arg(short, long)]
        upgrade: Vec<String>,

        /// Downgrade a family (ability or difficulty) before rolling; repeatable.
        /// Downgrades apply after every upgrade
        #[arg(short, long)]
        downgrade: Vec<String>,

        /// Show the face rolled by each die
        #[arg(long)]
        dice: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Roll a numeric die (d10 or d100)
    Number {
        /// Die to roll: d10 or d100
        die: String,

        /// Number of times to roll (at least 1)
        #[arg(
            short,
            long,
            default_value = "1",
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        times: u32,
    },

    /// Show the face table of one die kind, or all of them
    Faces {
        /// Die kind (e.g. ability, challenge, force)
        kind: Option<String>,
    },

    /// Encode die kinds into a shareable pool string
    Encode {
        /// Die kinds by name or letter
        #[arg(required = true)]
        kinds: Vec<String>,
    },

    /// Interactive session reading commands from stdin
    Session {
        /// Starting pool encoding
        #[arg(long, default_value = "")]
        pool: String,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = RollerConfig::default().with_color(!cli.no_color);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if !config.color {
        colored::control::set_override(false);
    }

    let result = match cli.command {
        Commands::Roll {
            pool,
            upgrade,
            downgrade,
            dice,
            json,
        } => commands::roll::run(&config, &pool, &upgrade, &downgrade, dice, json),
        Commands::Number { die, times } => commands::number::run(&config, &die, times),
        Commands::Faces { kind } => commands::faces::run(kind.as_deref()),
        Commands::Encode { kinds } => commands::encode::run(&kinds),
        Commands::Session { pool } => commands::session::run(&config, &pool),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
