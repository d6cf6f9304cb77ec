use battleship_board::{Board, BoardConfig, FireResult, BOARD_SIZE};
use rand::seq::SliceRandom;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut board = Board::random(&mut rng, BoardConfig::new().with_echo(false))?;

    let n = BOARD_SIZE as usize;
    let mut targets: Vec<(usize, usize)> =
        (0..n).flat_map(|r| (0..n).map(move |c| (r, c))).collect();
    targets.shuffle(&mut rng);

    let (mut hits, mut misses, mut sunk) = (0usize, 0usize, 0usize);
    let mut final_shot = None;
    for (row, col) in targets {
        let result = board.fire(row, col)?;
        final_shot = Some(result);
        match result {
            FireResult::Hit => hits += 1,
            FireResult::Miss => misses += 1,
            FireResult::Sunk => {
                hits += 1;
                sunk += 1;
            }
        }
        if board.all_sunk() {
            break;
        }
    }

    let result = json!({
        "seed": seed,
        "shots": board.shots_fired(),
        "hits": hits,
        "misses": misses,
        "sunk": sunk,
        "final_shot": final_shot,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
