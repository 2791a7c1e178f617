//! Logo and key instructions printed once before the first frame.

use breach::theme::Theme;
use crossterm::terminal::size as terminal_size;
use unicode_width::UnicodeWidthStr;

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const ASCII_LOGO: &[&str] = &[
    r"██████╗ ██████╗ ███████╗ █████╗  ██████╗██╗  ██╗",
    r"██╔══██╗██╔══██╗██╔════╝██╔══██╗██╔════╝██║  ██║",
    r"██████╔╝██████╔╝█████╗  ███████║██║     ███████║",
    r"██╔══██╗██╔══██╗██╔══╝  ██╔══██║██║     ██╔══██║",
    r"██████╔╝██║  ██║███████╗██║  ██║╚██████╗██║  ██║",
    r"╚═════╝ ╚═╝  ╚═╝╚══════╝╚═╝  ╚═╝ ╚═════╝╚═╝  ╚═╝",
];

/// Acid green fading to teal, top to bottom.
const NEON_GRADIENT: &[(u8, u8, u8)] = &[
    (208, 237, 87),
    (170, 236, 110),
    (133, 234, 140),
    (110, 233, 170),
    (94, 234, 212),
    (72, 200, 200),
];

const INSTRUCTIONS: &[&str] = &[
    "Arrow keys move along the highlighted lane, Enter selects a code.",
    "Each selection switches between row and column.",
    "Fill the buffer with every sequence to finish the breach. Esc quits.",
];

fn rgb_fg(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

fn centered_padding(content_width: usize, terminal_width: u16) -> String {
    let padding = (terminal_width as usize).saturating_sub(content_width) / 2;
    " ".repeat(padding)
}

/// Format the logo, version line and instructions.
pub fn format_banner(use_color: bool, terminal_width: u16) -> String {
    let reset = "\x1b[0m";
    let dim = "\x1b[90m";
    let mut output = String::new();
    output.push('\n');

    let logo_width = ASCII_LOGO
        .iter()
        .map(|line| UnicodeWidthStr::width(*line))
        .max()
        .unwrap_or(0);
    let pad_str = centered_padding(logo_width, terminal_width);

    for (i, line) in ASCII_LOGO.iter().enumerate() {
        output.push_str(&pad_str);
        if use_color {
            let (r, g, b) = NEON_GRADIENT[i % NEON_GRADIENT.len()];
            output.push_str(&rgb_fg(r, g, b));
            output.push_str(line);
            output.push_str(reset);
        } else {
            output.push_str(line);
        }
        output.push('\n');
    }

    let tagline = format!("v{VERSION} │ breach protocol");
    output.push('\n');
    output.push_str(&centered_padding(
        UnicodeWidthStr::width(tagline.as_str()),
        terminal_width,
    ));
    if use_color {
        output.push_str(dim);
        output.push_str(&tagline);
        output.push_str(reset);
    } else {
        output.push_str(&tagline);
    }
    output.push_str("\n\n");

    for line in INSTRUCTIONS {
        output.push_str(line);
        output.push('\n');
    }
    output.push('\n');
    output
}

/// Format a logo-free banner for terminals too narrow for the ASCII art.
pub fn format_minimal_banner(use_color: bool) -> String {
    let (title, reset) = if use_color {
        ("\x1b[38;2;208;237;87m", "\x1b[0m")
    } else {
        ("", "")
    };
    let mut output = format!("{title}BREACH{reset} v{VERSION}\n");
    for line in INSTRUCTIONS {
        output.push_str(line);
        output.push('\n');
    }
    output.push('\n');
    output
}

fn use_minimal_banner(cols: u16) -> bool {
    cols < 52
}

pub(crate) fn build_banner(theme: Theme) -> String {
    let use_color = theme != Theme::None;
    match terminal_size() {
        Ok((cols, _)) if use_minimal_banner(cols) => format_minimal_banner(use_color),
        Ok((cols, _)) => format_banner(use_color, cols),
        Err(_) => format_minimal_banner(use_color),
    }
}
