use crate::animations::SolveFlash;
use crate::playback::Playback;
use crate::theme::Theme;
use alphadoku_core::{Solution, Strategy};
use crossterm::event::{KeyCode, KeyEvent};
use std::time::{Duration, Instant};

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// Current screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Replaying the recorded mutations
    Replaying,
    /// Replay finished, grid complete
    Done,
}

/// The main application state
pub struct App {
    /// Trace replay over the grid
    pub playback: Playback,
    /// Color theme
    pub theme: Theme,
    /// Current screen state
    pub screen_state: ScreenState,
    /// Completion animation
    pub flash: SolveFlash,
    /// Strategy the solve ran with
    pub strategy: Strategy,
    /// Wall-clock time the solve itself took
    pub solve_time: Duration,
    /// Wall-clock time the finished replay took
    pub replay_time: Duration,
    /// When the current replay started
    replay_started: Instant,
}

impl App {
    /// Set up a replay of a finished solve.
    pub fn new(
        solution: &Solution,
        strategy: Strategy,
        solve_time: Duration,
        interval: Duration,
        theme: Theme,
    ) -> Self {
        Self {
            playback: Playback::new(solution.grid.size(), &solution.trace, interval),
            theme,
            screen_state: ScreenState::Replaying,
            flash: SolveFlash::new(),
            strategy,
            solve_time,
            replay_time: Duration::ZERO,
            replay_started: Instant::now(),
        }
    }

    /// Get the tick rate based on current screen
    pub fn get_tick_rate(&self) -> Duration {
        match self.screen_state {
            ScreenState::Replaying => self.playback.interval(),
            // 30 FPS while the completion flash runs, then idle
            ScreenState::Done => {
                if self.flash.is_done() {
                    Duration::from_millis(250)
                } else {
                    Duration::from_millis(33)
                }
            }
        }
    }

    /// Advance the replay or the completion animation (called every tick)
    pub fn tick(&mut self) {
        match self.screen_state {
            ScreenState::Replaying => {
                self.playback.advance();
                if self.playback.is_finished() {
                    self.finish();
                }
            }
            ScreenState::Done => self.flash.update(),
        }
    }

    /// Handle a key event.
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char(' ') => {
                if self.screen_state == ScreenState::Replaying {
                    self.playback.toggle_pause();
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.playback.faster(),
            KeyCode::Char('-') | KeyCode::Char('_') => self.playback.slower(),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('s') => {
                if self.screen_state == ScreenState::Replaying {
                    self.playback.skip_to_end();
                    self.finish();
                }
            }
            _ => {}
        }
        AppAction::Continue
    }

    /// Rewind the replay to the empty grid.
    pub fn restart(&mut self) {
        self.playback.restart();
        self.screen_state = ScreenState::Replaying;
        self.replay_time = Duration::ZERO;
        self.replay_started = Instant::now();
    }

    fn finish(&mut self) {
        self.screen_state = ScreenState::Done;
        self.replay_time = self.replay_started.elapsed();
        self.flash = SolveFlash::new();
    }
}
