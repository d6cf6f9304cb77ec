use std::process::Command;

use battleship_board::{Placement, HIT, SHIP, SUNK, WATER};

const BIN: &str = env!("CARGO_BIN_EXE_battleship-board");

fn fleet() -> Vec<Placement> {
    vec![
        Placement::cell((0, 0)),
        Placement::cell((0, 2)),
        Placement::cell((0, 4)),
        Placement::cell((0, 6)),
        Placement::new((2, 0), (2, 1)),
        Placement::new((2, 3), (2, 4)),
        Placement::new((2, 6), (2, 7)),
        Placement::new((4, 0), (4, 2)),
        Placement::new((4, 4), (4, 6)),
        Placement::new((6, 0), (6, 3)),
    ]
}

fn glyphs(line: &str) -> usize {
    [WATER, SHIP, HIT, SUNK]
        .iter()
        .map(|g| line.matches(g).count())
        .sum()
}

fn is_grid_line(line: &str) -> bool {
    glyphs(line) == 10
}

fn run(args: &[&str]) -> Vec<String> {
    let output = Command::new(BIN)
        .args(args)
        .output()
        .expect("failed to run battleship-board");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout)
        .expect("non utf8 output")
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn show_prints_ten_grid_lines() {
    let lines = run(&["show", "--seed", "5"]);
    assert_eq!(lines.len(), 10);
    assert!(lines.iter().all(|l| is_grid_line(l)));
}

#[test]
fn fire_prints_grid_before_every_outcome() {
    let path = std::env::temp_dir().join(format!("battleship-cli-{}.json", std::process::id()));
    std::fs::write(&path, serde_json::to_string(&fleet()).unwrap()).unwrap();
    let lines = run(&[
        "fire",
        "--placements",
        path.to_str().unwrap(),
        "0,0",
        "6,0",
        "9,9",
    ]);
    let _ = std::fs::remove_file(&path);

    let outcomes: Vec<(usize, &String)> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| l.starts_with('('))
        .collect();
    let texts: Vec<&str> = outcomes.iter().map(|(_, l)| l.as_str()).collect();
    assert_eq!(texts, vec!["(0, 0) Sunk!", "(6, 0) Hit!", "(9, 9) Miss!"]);

    for (idx, _) in &outcomes {
        assert!(*idx >= 10);
        let grid = &lines[idx - 10..*idx];
        assert!(grid.iter().all(|l| is_grid_line(l)), "grid before line {}", idx);
    }

    // the grid printed after the miss still shows the sunk single and the hit
    let (miss_idx, _) = outcomes[2];
    assert!(lines[miss_idx - 10].starts_with(&format!(" {} ", SUNK)));
    assert!(lines[miss_idx - 4].starts_with(&format!(" {} ", HIT)));
    assert_eq!(lines.last().unwrap(), "9 ship(s) still afloat.");
}
