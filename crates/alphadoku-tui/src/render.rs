use crate::app::{App, ScreenState};
use alphadoku_core::{Position, EMPTY_MARKER};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io;

/// Width of the info panel to the right of the grid.
const PANEL_WIDTH: u16 = 28;

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(stdout, Hide, SetBackgroundColor(app.theme.bg), Clear(ClearType::All))?;

    let n = app.playback.grid().size() as u16;
    // Each cell is 3 chars plus a border column, plus the trailing border.
    let grid_width = n * 4 + 1;
    let grid_height = n * 2 + 1;

    let total_width = grid_width + 3 + PANEL_WIDTH;
    let start_x = if term_width > total_width {
        (term_width - total_width) / 2
    } else {
        1
    };
    let start_y = if term_height > grid_height + 6 { 2 } else { 1 };

    render_grid(stdout, app, start_x, start_y)?;

    let info_x = start_x + grid_width + 3;
    render_info_panel(stdout, app, info_x, start_y)?;

    let controls_y = start_y + grid_height + 1;
    render_controls(stdout, app, start_x, controls_y)?;

    if app.screen_state == ScreenState::Done {
        render_banner(stdout, app, start_x, controls_y + 2)?;
    }

    execute!(stdout, Show)?;
    Ok(())
}

fn render_grid(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let grid = app.playback.grid();
    let n = grid.size();
    let bs = grid.block_size();

    for row in 0..n {
        // Rule above this row: thick on block boundaries
        let rule_y = y + row as u16 * 2;
        let thick = row % bs == 0;
        let color = if thick { theme.box_border } else { theme.border };
        execute!(
            stdout,
            MoveTo(x, rule_y),
            SetForegroundColor(color),
            Print(rule_line(n, thick))
        )?;

        // Cell row
        let cell_y = rule_y + 1;
        execute!(stdout, MoveTo(x, cell_y))?;
        for col in 0..n {
            let border = if col % bs == 0 { "║" } else { "│" };
            let border_color = if col % bs == 0 {
                theme.box_border
            } else {
                theme.border
            };
            execute!(stdout, SetForegroundColor(border_color), Print(border))?;

            let (ch, color) = cell_style(app, Position::new(row, col));
            execute!(
                stdout,
                SetForegroundColor(color),
                Print(format!(" {} ", ch))
            )?;
        }
        execute!(stdout, SetForegroundColor(theme.box_border), Print("║"))?;
    }

    // Bottom rule is always thick
    execute!(
        stdout,
        MoveTo(x, y + n as u16 * 2),
        SetForegroundColor(theme.box_border),
        Print(rule_line(n, true))
    )?;

    Ok(())
}

/// Horizontal rule with junctions at every cell and block boundary.
fn rule_line(n: usize, thick: bool) -> String {
    let seg = if thick { "===" } else { "---" };
    let mut line = String::with_capacity(n * 4 + 1);
    for _ in 0..n {
        line.push('+');
        line.push_str(seg);
    }
    line.push('+');
    line
}

fn cell_style(app: &App, pos: Position) -> (char, Color) {
    let theme = &app.theme;
    match app.playback.grid().get(pos) {
        Some(sym) => {
            let color = if app.screen_state == ScreenState::Done {
                let n = app.playback.grid().size();
                app.flash.cell_color(pos.row, pos.col, n, theme.filled)
            } else if app.playback.flash_at(pos) > 0 {
                theme.flash
            } else {
                theme.filled
            };
            (sym, color)
        }
        None => (EMPTY_MARKER, theme.empty),
    }
}

fn render_info_panel(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let grid = app.playback.grid();
    let n = grid.size();
    let bs = grid.block_size();

    let status = if app.screen_state == ScreenState::Done {
        format!("done (replay {:.1} s)", app.replay_time.as_secs_f64())
    } else if app.playback.is_paused() {
        "paused".to_string()
    } else {
        "replaying".to_string()
    };

    let lines = [
        ("size", format!("{n}×{n}")),
        ("blocks", format!("{bs}×{bs}")),
        ("strategy", app.strategy.to_string()),
        ("speed", format!("{} ms/step", app.playback.interval().as_millis())),
        (
            "events",
            format!("{}/{}", app.playback.applied(), app.playback.total()),
        ),
        ("solve", format!("{:.6} s", app.solve_time.as_secs_f64())),
        ("status", status),
    ];

    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.fg),
        Print("alphadoku")
    )?;

    for (i, (label, value)) in lines.iter().enumerate() {
        execute!(
            stdout,
            MoveTo(x, y + 2 + i as u16),
            SetForegroundColor(theme.info),
            Print(format!("{label:<9}")),
            SetForegroundColor(theme.fg),
            Print(value)
        )?;
    }

    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let bindings = [
        ("space", "pause"),
        ("+/-", "speed"),
        ("r", "restart"),
        ("s", "skip"),
        ("q", "quit"),
    ];

    execute!(stdout, MoveTo(x, y))?;
    for (key, label) in bindings {
        execute!(
            stdout,
            SetForegroundColor(theme.key),
            Print(format!("[{key}] ")),
            SetForegroundColor(theme.info),
            Print(format!("{label}  "))
        )?;
    }
    Ok(())
}

fn render_banner(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let grid = app.playback.grid();
    let n = grid.size();
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(app.theme.success),
        Print(format!(
            "{n}×{n} grid filled in {:.6} s",
            app.solve_time.as_secs_f64()
        ))
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_line_width() {
        // 4 cells of 3 chars each plus 5 junctions
        assert_eq!(rule_line(4, true).chars().count(), 17);
        assert_eq!(rule_line(4, false).chars().count(), 17);
    }
}
