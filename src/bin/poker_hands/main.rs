mod logging;

use std::cmp::Ordering;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use poker_hands::config::{ConfigError, DealConfig};
use poker_hands::core::{compare, Evaluation, Hand, PokerHandError};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "poker_hands",
    about = "Classify, describe and compare five card poker hands",
    long_about = "Classify, describe and compare five card poker hands.\n\
                  Cards are two characters, a value from 23456789TJQKA followed by a suit\n\
                  from SDCH, e.g. \"AS 2H 3S 4H 5C\"."
)]
struct Args {
    #[command(flatten)]
    log: logging::LogArgs,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify and describe one or more hands
    Describe {
        /// Hands to describe, each as five space separated cards (e.g. "7S 7D AS AC AH")
        #[arg(required = true)]
        hands: Vec<String>,
    },
    /// Compare two hands and report the stronger one
    Compare { first: String, second: String },
    /// Deal random hands
    Deal {
        /// Number of hands to deal
        #[arg(short = 'n', long)]
        hands: Option<usize>,

        /// Seed for a reproducible deal
        #[arg(short, long)]
        seed: Option<u64>,

        /// Deal config, either a path to a JSON file or inline JSON
        #[arg(short, long)]
        config: Option<String>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Invalid hand '{input}': {source}")]
    Hand {
        input: String,
        source: PokerHandError,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn parse_hand(input: &str) -> Result<Hand, CliError> {
    Hand::new_from_str(input).map_err(|source| CliError::Hand {
        input: input.to_string(),
        source,
    })
}

fn print_evaluations(evals: &[Evaluation], json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(evals)?);
    } else {
        for eval in evals {
            println!("{eval}");
        }
    }
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Describe { hands } => {
            let evals = hands
                .iter()
                .map(|h| parse_hand(h).map(|hand| hand.evaluate()))
                .collect::<Result<Vec<_>, _>>()?;
            print_evaluations(&evals, args.json)
        }
        Command::Compare { first, second } => {
            let first = parse_hand(&first)?.evaluate();
            let second = parse_hand(&second)?.evaluate();
            let ordering = compare(&first.hand, &second.hand);
            if args.json {
                let result = serde_json::json!({
                    "first": first,
                    "second": second,
                    "winner": match ordering {
                        Ordering::Greater => "first",
                        Ordering::Less => "second",
                        Ordering::Equal => "tie",
                    },
                });
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{first}");
                println!("{second}");
                match ordering {
                    Ordering::Greater => println!("First hand wins with {}", first.description),
                    Ordering::Less => println!("Second hand wins with {}", second.description),
                    Ordering::Equal => println!("Tie"),
                }
            }
            Ok(())
        }
        Command::Deal {
            hands,
            seed,
            config,
        } => {
            let mut config = match config {
                Some(input) => DealConfig::from_str_or_file(&input)?,
                None => DealConfig::default(),
            };
            // Flags override whatever the config said.
            if let Some(hands) = hands {
                config.hands = hands;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            info!(hands = config.hands, seed = ?config.seed, "Dealing");
            let evals: Vec<Evaluation> = config
                .deal()?
                .into_iter()
                .map(|hand| hand.evaluate())
                .collect();
            print_evaluations(&evals, args.json)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.log.init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(%e, "poker_hands failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
