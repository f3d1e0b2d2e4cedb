//! Command-line front end for the equity engine.
//!
//! Usage:
//!   cargo run --release --bin equity -- field --player hero=AsAh --player villain=KsKh
//!   cargo run --release --bin equity -- field --player a=As?? --player b=QdQc --board "Qs Js 2c ? ?"
//!   cargo run --release --bin equity -- strength --hero AsKs --board "Qs Js Ts" --opponents 2
//!   cargo run --release --bin equity -- practice --difficulty hard --decision call
//!
//! Results are printed as JSON. Set `RUST_LOG=debug` for simulation logs.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use holdem_equity::cards::{parse_cards, Card};
use holdem_equity::equity::{
    estimate_field_equity, estimate_hand_strength, parse_board, Player, SimulationConfig,
};
use holdem_equity::practice::{
    generate_practice_hand, grade_decision, Decision, Difficulty, PracticeSettings, GENERATOR_TRIALS,
};
use holdem_equity::{EquityError, Result};

#[derive(Parser, Debug)]
#[command(name = "equity", about = "Texas Hold'em equity calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    sim: SimArgs,

    /// Write the JSON result to a file instead of stdout
    #[arg(long, short, global = true)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SimArgs {
    /// Simulation config JSON file; flags below override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Number of Monte Carlo trials
    #[arg(long, short, global = true)]
    trials: Option<u32>,

    /// Worker threads (default: all cores)
    #[arg(long, global = true)]
    threads: Option<usize>,

    /// Random seed for reproducible results
    #[arg(long, short, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Equity of several known hands against each other
    Field {
        /// A player as ID=CARDS, e.g. hero=AsAh or villain=Kd,? (repeatable)
        #[arg(long = "player", short, required = true)]
        players: Vec<String>,

        /// Board cards; ? marks an unresolved slot
        #[arg(long, short, default_value = "")]
        board: String,
    },
    /// One hand against random opponents
    Strength {
        /// Hero hole cards, e.g. AsKs
        #[arg(long)]
        hero: String,

        /// Board cards; ? marks an unresolved slot
        #[arg(long, short, default_value = "")]
        board: String,

        /// Number of random opponents
        #[arg(long, default_value_t = 1)]
        opponents: u32,
    },
    /// Generate a pot-odds practice hand, optionally grading an answer
    Practice {
        #[arg(long, default_value_t = 1)]
        min_opponents: u32,

        #[arg(long, default_value_t = 3)]
        max_opponents: u32,

        #[arg(long, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,

        /// Grade this answer (call or fold) against the generated hand
        #[arg(long)]
        decision: Option<Decision>,
    },
}

impl SimArgs {
    fn config(&self, default_trials: u32) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::from_json_file(path)?,
            None => SimulationConfig::default().with_trials(default_trials),
        };
        if let Some(trials) = self.trials {
            config = config.with_trials(trials);
        }
        if let Some(threads) = self.threads {
            config = config.with_threads(threads);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Serialize)]
struct PracticeReport {
    scenario: holdem_equity::practice::PracticeScenario,
    #[serde(skip_serializing_if = "Option::is_none")]
    grade: Option<holdem_equity::practice::DecisionOutcome>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let json = match &cli.command {
        Command::Field { players, board } => {
            let config = cli.sim.config(holdem_equity::equity::DEFAULT_TRIALS)?;
            let players = players
                .iter()
                .map(|p| parse_player(p))
                .collect::<Result<Vec<Player>>>()?;
            let board = parse_board(board)?;
            let results = estimate_field_equity(&players, &board, &config)?;
            serde_json::to_string_pretty(&results)?
        }
        Command::Strength { hero, board, opponents } => {
            let config = cli.sim.config(holdem_equity::equity::DEFAULT_TRIALS)?;
            let hero = parse_hand(hero)?;
            let board = parse_board(board)?;
            let strength = estimate_hand_strength(&hero, &board, *opponents, &config)?;
            serde_json::to_string_pretty(&strength)?
        }
        Command::Practice {
            min_opponents,
            max_opponents,
            difficulty,
            decision,
        } => {
            let config = cli.sim.config(GENERATOR_TRIALS)?;
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let settings = PracticeSettings {
                min_opponents: *min_opponents,
                max_opponents: *max_opponents,
                difficulty: *difficulty,
            };
            let scenario = generate_practice_hand(&settings, &config, &mut rng)?;
            let grade = match decision {
                Some(decision) => {
                    let grading = SimulationConfig {
                        trials: cli.sim.trials.unwrap_or(SimulationConfig::precise().trials),
                        ..config.clone()
                    };
                    Some(grade_decision(&scenario, *decision, &grading)?)
                }
                None => None,
            };
            serde_json::to_string_pretty(&PracticeReport { scenario, grade })?
        }
    };

    match &cli.output {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(json.as_bytes())?;
            eprintln!("Saved: {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

/// Parse `ID=CARDS` where CARDS holds up to two cards, run together or comma
/// separated, with `?` or `??` for an unknown card (`As??`, `?,Kd`).
fn parse_player(arg: &str) -> Result<Player> {
    let (id, cards) = arg
        .split_once('=')
        .ok_or_else(|| EquityError::InvalidCard(arg.to_string()))?;

    let mut hole: Vec<Option<Card>> = Vec::with_capacity(2);
    for token in cards.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let mut rest = token;
        while !rest.is_empty() {
            if let Some(after) = rest.strip_prefix("??").or_else(|| rest.strip_prefix('?')) {
                hole.push(None);
                rest = after;
            } else {
                let end = rest.find('?').unwrap_or(rest.len());
                hole.extend(parse_cards(&rest[..end])?.into_iter().map(Some));
                rest = &rest[end..];
            }
        }
    }
    if hole.len() > 2 {
        return Err(EquityError::InvalidCardCount { expected: 2, actual: hole.len() });
    }
    hole.resize(2, None);
    Ok(Player::new(id, [hole[0], hole[1]]))
}

fn parse_hand(arg: &str) -> Result<[Card; 2]> {
    let cards = parse_cards(arg)?;
    match cards.as_slice() {
        [a, b] => Ok([*a, *b]),
        _ => Err(EquityError::InvalidCardCount { expected: 2, actual: cards.len() }),
    }
}
