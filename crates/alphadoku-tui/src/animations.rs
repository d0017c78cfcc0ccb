use crossterm::style::Color;
use rand::Rng;

/// Frames the completion sweep runs before settling.
const FLASH_FRAMES: u32 = 90;

/// Visual style of the completion sweep.
#[derive(Clone, Copy)]
pub enum FlashStyle {
    /// Diagonal color wave across the grid
    Wave,
    /// Whole grid cycles through hues together
    Pulse,
    /// Hue striped by column
    Rainbow,
}

impl FlashStyle {
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        match rng.gen_range(0..3) {
            0 => FlashStyle::Wave,
            1 => FlashStyle::Pulse,
            _ => FlashStyle::Rainbow,
        }
    }
}

/// Short color animation played over the grid once the replay completes.
pub struct SolveFlash {
    style: FlashStyle,
    frame: u32,
}

impl Default for SolveFlash {
    fn default() -> Self {
        Self::new()
    }
}

impl SolveFlash {
    pub fn new() -> Self {
        Self {
            style: FlashStyle::random(),
            frame: 0,
        }
    }

    /// Advance one frame.
    pub fn update(&mut self) {
        if self.frame < FLASH_FRAMES {
            self.frame += 1;
        }
    }

    pub fn is_done(&self) -> bool {
        self.frame >= FLASH_FRAMES
    }

    /// Color for a cell this frame; falls back to `settled` once done.
    pub fn cell_color(&self, row: usize, col: usize, size: usize, settled: Color) -> Color {
        if self.is_done() {
            return settled;
        }
        let t = self.frame as f32 * 0.03;
        let span = (2 * size.max(1)) as f32;
        let hue = match self.style {
            FlashStyle::Wave => (row + col) as f32 / span + t,
            FlashStyle::Pulse => t,
            FlashStyle::Rainbow => col as f32 / size.max(1) as f32 + t * 0.5,
        };
        hue_to_rgb(hue % 1.0)
    }
}

/// Convert hue (0.0-1.0) to RGB color
pub fn hue_to_rgb(hue: f32) -> Color {
    let h = hue * 6.0;
    let x = (1.0 - (h % 2.0 - 1.0).abs()) * 255.0;

    let (r, g, b) = match h as i32 % 6 {
        0 => (255, x as u8, 0),
        1 => (x as u8, 255, 0),
        2 => (0, 255, x as u8),
        3 => (0, x as u8, 255),
        4 => (x as u8, 0, 255),
        _ => (255, 0, x as u8),
    };

    Color::Rgb { r, g, b }
}
