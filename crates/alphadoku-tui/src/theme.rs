use crossterm::style::Color;

/// Color theme for the replay view.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Grid border color
    pub border: Color,
    /// Block border color (thicker sub-block separators)
    pub box_border: Color,
    /// Settled symbol color
    pub filled: Color,
    /// Just-written symbol color (short-lived highlight)
    pub flash: Color,
    /// Empty-cell marker color
    pub empty: Color,
    /// Info panel text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
    /// Completion banner color
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 70, g: 75, b: 90 },
            box_border: Color::Rgb { r: 130, g: 140, b: 170 },
            filled: Color::Rgb { r: 80, g: 180, b: 255 },
            flash: Color::Rgb { r: 255, g: 210, b: 100 },
            empty: Color::Rgb { r: 90, g: 95, b: 115 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 180, g: 180, b: 195 },
            box_border: Color::Rgb { r: 60, g: 60, b: 80 },
            filled: Color::Rgb { r: 30, g: 100, b: 200 },
            flash: Color::Rgb { r: 200, g: 120, b: 20 },
            empty: Color::Rgb { r: 170, g: 170, b: 185 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            border: Color::Grey,
            box_border: Color::White,
            filled: Color::Cyan,
            flash: Color::Yellow,
            empty: Color::DarkGrey,
            info: Color::Grey,
            key: Color::Yellow,
            success: Color::Green,
        }
    }

    /// Look a theme up by its command-line name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "high-contrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert!(Theme::by_name("dark").is_some());
        assert!(Theme::by_name("light").is_some());
        assert!(Theme::by_name("high-contrast").is_some());
        assert!(Theme::by_name("solarized").is_none());
    }
}
