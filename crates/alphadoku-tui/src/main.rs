mod animations;
mod app;
mod playback;
mod render;
mod theme;

use alphadoku_core::{MutationEvent, Puzzle, PuzzleError, Solution, Solver, Strategy};
use app::App;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use serde::Serialize;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use theme::Theme;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Fills an N×N grid from an N-symbol alphabet so that no symbol repeats in
/// any row, column, or sub-block, then replays the search animated.
#[derive(Parser, Debug)]
#[command(name = "alphadoku", version, about = "Animated letter-sudoku grid filler")]
struct Cli {
    /// Grid edge length.
    #[arg(short = 'n', long, default_value_t = 9)]
    size: usize,

    /// Symbols to fill with, in trial order; defaults to the first N latin
    /// letters.
    #[arg(short, long)]
    alphabet: Option<String>,

    /// Cell-location strategy for the backtracking search.
    #[arg(short, long, default_value_t = Strategy::DepthFirst)]
    strategy: Strategy,

    /// Milliseconds between replayed mutations.
    #[arg(long, default_value_t = 100)]
    speed: u64,

    /// Print the solved grid without the animated replay.
    #[arg(long, default_value_t = false)]
    plain: bool,

    /// Color theme (dark, light, high-contrast).
    #[arg(long, default_value = "dark")]
    theme: String,

    /// Write the mutation trace to this path as JSON.
    #[arg(long)]
    export_trace: Option<PathBuf>,
}

/// On-disk form of an exported trace.
#[derive(Serialize)]
struct TraceExport<'a> {
    size: usize,
    alphabet: String,
    strategy: Strategy,
    solve_micros: u128,
    events: &'a [MutationEvent],
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let puzzle = match build_puzzle(&cli) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };
    let Some(theme) = Theme::by_name(&cli.theme) else {
        eprintln!("Error: unknown theme {:?} (dark, light, high-contrast)", cli.theme);
        std::process::exit(2);
    };

    let solver = Solver::new(cli.strategy);
    let started = Instant::now();
    let Some(solution) = solver.solve(&puzzle) else {
        println!("No solution found.");
        std::process::exit(1);
    };
    let solve_time = started.elapsed();
    debug!(
        events = solution.trace.len(),
        micros = solve_time.as_micros() as u64,
        "solve finished"
    );

    if let Some(path) = &cli.export_trace {
        export_trace(path, &cli, &puzzle, &solution, solve_time)?;
    }

    if cli.plain || !io::stdout().is_terminal() {
        print_summary(&cli, &solution, solve_time);
        return Ok(());
    }

    let mut app = App::new(
        &solution,
        cli.strategy,
        solve_time,
        Duration::from_millis(cli.speed),
        theme,
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Run the replay
    let result = run_app(&mut stdout, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    print_summary(&cli, &solution, solve_time);
    Ok(())
}

fn run_app(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let tick_rate = app.get_tick_rate();

        // Render
        render::render(stdout, app)?;
        stdout.flush()?;

        // Handle input with timeout for replay updates
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout.min(Duration::from_millis(33)))? {
            if let Event::Key(key) = event::read()? {
                // Handle Ctrl+C
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    break;
                }

                match app.handle_key(key) {
                    app::AppAction::Continue => {}
                    app::AppAction::Quit => break,
                }
            }
        }

        // Advance the replay
        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn build_puzzle(cli: &Cli) -> Result<Puzzle, PuzzleError> {
    match &cli.alphabet {
        Some(symbols) => Puzzle::new(cli.size, symbols.parse()?),
        None => Puzzle::with_latin_alphabet(cli.size),
    }
}

fn export_trace(
    path: &PathBuf,
    cli: &Cli,
    puzzle: &Puzzle,
    solution: &Solution,
    solve_time: Duration,
) -> io::Result<()> {
    let export = TraceExport {
        size: puzzle.size(),
        alphabet: puzzle.alphabet().to_string(),
        strategy: cli.strategy,
        solve_micros: solve_time.as_micros(),
        events: solution.trace.events(),
    };
    let json = serde_json::to_string_pretty(&export).map_err(io::Error::other)?;
    std::fs::write(path, json)?;
    debug!(path = %path.display(), "trace exported");
    Ok(())
}

fn print_summary(cli: &Cli, solution: &Solution, solve_time: Duration) {
    let n = solution.grid.size();
    println!("{}", solution.grid);
    println!(
        "{n}×{n} grid filled with strategy {} in {:.6} s ({} mutations, {} of them reversions)",
        cli.strategy,
        solve_time.as_secs_f64(),
        solution.trace.len(),
        solution
            .trace
            .iter()
            .filter(|e| e.value.is_none())
            .count()
    );
}
