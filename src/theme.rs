/// ANSI escape codes used by the frame renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    /// Section titles and the buffer frame
    pub title: &'static str,
    /// Cells in the active lane
    pub lane: &'static str,
    /// Hovered cell
    pub hover: &'static str,
    /// Already selected cells and empty buffer slots
    pub dim: &'static str,
    /// Uploaded sequences
    pub success: &'static str,
    /// Pending sequences
    pub pending: &'static str,
    /// Reset code
    pub reset: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Neon,
    None,
}

const NEON: ThemeColors = ThemeColors {
    title: "\x1b[38;2;208;237;87m",
    lane: "\x1b[48;2;42;44;68m",
    hover: "\x1b[7m",
    dim: "\x1b[90m",
    success: "\x1b[38;2;94;234;212m",
    pending: "\x1b[38;2;255;95;95m",
    reset: "\x1b[0m",
};

const PLAIN: ThemeColors = ThemeColors {
    title: "",
    lane: "",
    hover: "",
    dim: "",
    success: "",
    pending: "",
    reset: "",
};

impl Theme {
    pub fn from_no_color(no_color: bool) -> Self {
        if no_color {
            Theme::None
        } else {
            Theme::Neon
        }
    }

    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Neon => NEON,
            Theme::None => PLAIN,
        }
    }
}
