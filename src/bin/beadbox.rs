//! beadbox CLI - train and inspect the token-machine for impartial games
//!
//! This CLI provides:
//! - Training the machine against a chosen adversary
//! - Solving a game's losing positions via backward induction

use anyhow::Result;
use beadbox::{
    config::{parse_move_set, Config, GameFamily, GameSpec},
    losing_positions,
    strategy::AdversaryPolicy,
    Machine, Reinforcement, Session,
};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Parser)]
#[command(name = "beadbox")]
#[command(version, about = "Token-machine learning for impartial games", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train the machine against an adversary
    Train(TrainArgs),

    /// Print the losing positions of the configured game
    Solve(GameArgs),
}

#[derive(Args)]
struct GameArgs {
    /// Game family: subtraction (nim) or grid (king)
    #[arg(long, default_value = "subtraction")]
    game: GameFamily,

    /// Subtraction game: largest pile size
    #[arg(long, default_value_t = 8)]
    limit: usize,

    /// Subtraction game: comma-separated amounts that may be taken
    #[arg(long, default_value = "1,2")]
    moves: String,

    /// Grid game: board width
    #[arg(long, default_value_t = 4)]
    width: usize,

    /// Grid game: board height
    #[arg(long, default_value_t = 4)]
    height: usize,
}

impl GameArgs {
    fn spec(&self) -> Result<GameSpec> {
        Ok(match self.game {
            GameFamily::Subtraction => GameSpec::Subtraction {
                limit: self.limit,
                moves: parse_move_set(&self.moves)?,
            },
            GameFamily::Grid => {
                if self.width == 0 || self.height == 0 {
                    return Err(beadbox::Error::InvalidConfiguration {
                        message: format!(
                            "grid dimensions must be positive, got {}x{}",
                            self.width, self.height
                        ),
                    }
                    .into());
                }
                GameSpec::Grid {
                    width: self.width,
                    height: self.height,
                }
            }
        })
    }
}

#[derive(Args)]
struct TrainArgs {
    #[command(flatten)]
    game: GameArgs,

    /// Number of games to play
    #[arg(long, default_value_t = 1000)]
    games: usize,

    /// Adversary policy: random, expert, or machine (self-play)
    #[arg(long, default_value = "random")]
    adversary: AdversaryPolicy,

    /// Tokens per slot at construction (and refill weight)
    #[arg(long, default_value_t = 6)]
    tokens: u32,

    /// Token delta on the winning side's moves
    #[arg(long, default_value_t = 3)]
    reward: i32,

    /// Token delta on the losing side's moves (intended negative)
    #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
    penalty: i32,

    /// Let the adversary make the opening move
    #[arg(long)]
    adversary_starts: bool,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Write the trained machine as JSON to this path
    #[arg(long)]
    export: Option<std::path::PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => train(args),
        Commands::Solve(args) => solve(args),
    }
}

fn train(args: TrainArgs) -> Result<()> {
    let config = Config {
        game: args.game.spec()?,
        adversary: args.adversary,
        initial_tokens: args.tokens,
        reinforcement: Reinforcement {
            reward: args.reward,
            penalty: args.penalty,
        },
        machine_starts: !args.adversary_starts,
    };
    println!(
        "training on {} vs {} adversary for {} games",
        config.game, config.adversary, args.games
    );

    let mut session = Session::new(config, args.seed);
    let bar = ProgressBar::new(args.games as u64);
    bar.set_style(ProgressStyle::with_template(
        "{bar:40.cyan/blue} {pos}/{len} {msg}",
    )?);

    let mut win_rate_history = Vec::new();
    for round in 1..=args.games {
        session.play_round();
        bar.inc(1);
        if round % 100 == 0 {
            let rate = session.tally().win_rate();
            win_rate_history.push(rate);
            bar.set_message(format!("win rate {:.1}%", 100.0 * rate));
        }
    }
    bar.finish();

    let tally = session.tally();
    println!(
        "played {} games: {} victories, {} losses ({:.1}% win rate)",
        tally.total(),
        tally.victories,
        tally.losses,
        100.0 * tally.win_rate()
    );
    if win_rate_history.len() >= 2 {
        println!(
            "win rate moved from {:.1}% (first 100) to {:.1}% (cumulative)",
            100.0 * win_rate_history[0],
            100.0 * win_rate_history[win_rate_history.len() - 1]
        );
    }

    if let Some(path) = args.export {
        export_machine(session.machine(), &path)?;
        println!("machine written to {}", path.display());
    }

    Ok(())
}

fn solve(args: GameArgs) -> Result<()> {
    let spec = args.spec()?;
    let machine = Machine::from_graph(&spec.graph(), 1);
    let losing = losing_positions(&machine);
    let display = spec.display();

    println!("losing positions of {}:", spec);
    for (node, is_losing) in losing.iter().enumerate() {
        if *is_losing {
            let caption = display
                .vertex_label(node)
                .unwrap_or_else(|| node.to_string());
            println!("  {caption}");
        }
    }
    let start = spec.start();
    println!(
        "start node {} is {} for the first mover",
        start,
        if losing[start] { "losing" } else { "winning" }
    );
    Ok(())
}

fn export_machine(machine: &Machine, path: &std::path::Path) -> Result<()> {
    let json = serde_json::to_string_pretty(machine)?;
    std::fs::write(path, json)?;
    Ok(())
}
