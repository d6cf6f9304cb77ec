use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use battleship_board::{init_logging, AdjacencyRule, Board, BoardConfig, Coord, Placement};
use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FleetArgs {
    /// JSON file with ten placements, e.g. `[{"start":[0,0],"end":[0,0]}, ...]`.
    #[arg(long)]
    placements: Option<PathBuf>,
    #[arg(long, help = "Fix RNG seed for a reproducible random fleet (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Only compare ship endpoints when checking adjacency.
    #[arg(long)]
    endpoints: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a board and print it.
    Show {
        #[command(flatten)]
        fleet: FleetArgs,
    },
    /// Fire at each coordinate in turn, printing the board and the outcome.
    Fire {
        #[command(flatten)]
        fleet: FleetArgs,
        /// Targets as ROW,COL.
        #[arg(required = true, value_parser = parse_coord)]
        targets: Vec<Coord>,
    },
}

fn parse_coord(s: &str) -> Result<Coord, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {:?}", s))?;
    let r = r.trim().parse().map_err(|e| format!("bad row {:?}: {}", r, e))?;
    let c = c.trim().parse().map_err(|e| format!("bad column {:?}: {}", c, e))?;
    Ok((r, c))
}

fn build_board(args: &FleetArgs, echo: bool) -> anyhow::Result<Board> {
    let adjacency = if args.endpoints {
        AdjacencyRule::Endpoints
    } else {
        AdjacencyRule::Cells
    };
    let config = BoardConfig::new().with_adjacency(adjacency).with_echo(echo);

    let board = match &args.placements {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let placements: Vec<Placement> = serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", path.display()))?;
            Board::with_config(&placements, config)?
        }
        None => {
            let mut rng = match args.seed {
                Some(s) => {
                    log::info!("using fixed seed {} (fleet will be reproducible)", s);
                    SmallRng::seed_from_u64(s)
                }
                None => {
                    let mut seed_rng = rand::rng();
                    SmallRng::from_rng(&mut seed_rng)
                }
            };
            Board::random(&mut rng, config)?
        }
    };
    Ok(board)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Show { fleet } => {
            let board = build_board(&fleet, false)?;
            board.print();
        }
        Commands::Fire { fleet, targets } => {
            let mut board = build_board(&fleet, true)?;
            for (row, col) in targets {
                let result = board.fire(row, col)?;
                println!("({}, {}) {}", row, col, result);
            }
            if board.all_sunk() {
                println!("All ships sunk after {} shots.", board.shots_fired());
            } else {
                println!("{} ship(s) still afloat.", board.ships_remaining());
            }
        }
    }
    Ok(())
}
