//! Basic example of using the fill engine directly.

use alphadoku_core::{Puzzle, Solver, Strategy};

fn main() {
    // Build a classic 9×9 puzzle filled from the letters a through i
    println!("Filling a 9×9 grid from the alphabet \"abcdefghi\"...\n");
    let puzzle = Puzzle::with_latin_alphabet(9).expect("9 is a valid size");

    let solver = Solver::new(Strategy::DepthFirst);
    let solution = solver.solve(&puzzle).expect("an empty grid always fills");

    println!("Solved grid:");
    println!("{}", solution.grid);

    // Show some trace statistics
    let reversions = solution
        .trace
        .iter()
        .filter(|e| e.value.is_none())
        .count();
    println!("Mutations recorded: {}", solution.trace.len());
    println!("Reversions among them: {}", reversions);

    // Replaying the trace onto an empty grid lands on the same state
    let replayed = solution.trace.replay(puzzle.size());
    println!("Replay matches solved grid: {}", replayed == solution.grid);

    // The rescanning strategy reaches the same grid
    println!("\n--- Restart-scan strategy ---\n");
    let rescan = Solver::new(Strategy::RestartScan)
        .solve(&puzzle)
        .expect("same puzzle, same outcome");
    println!("Grids agree: {}", rescan.grid == solution.grid);

    // A custom alphabet changes which solution the search finds first
    println!("\n--- Custom alphabet ---\n");
    let puzzle = Puzzle::new(4, "zyxw".parse().unwrap()).unwrap();
    let solution = solver.solve(&puzzle).unwrap();
    println!("{}", solution.grid);
}
