//! Frame rendering and the in-place redraw protocol.
//!
//! Each frame is printed top to bottom as plain lines. Before the next frame the
//! cursor is moved back up by the number of lines printed, so the new frame
//! overwrites the old one without clearing the whole screen.

use crossterm::{
    cursor::{MoveToColumn, MoveUp},
    queue,
    terminal::{Clear, ClearType},
};
use std::fmt::Display;
use std::io::{self, Write};

use crate::navigation::{Axis, HoverPosition};
use crate::puzzle::{Cell, Grid, MatchResult, TargetSequence};
use crate::selection::SelectionBuffer;
use crate::theme::{Theme, ThemeColors};

/// Everything a renderer needs to draw one iteration of the session.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub grid: &'a Grid,
    pub hover: HoverPosition,
    pub axis: Axis,
    pub buffer: &'a SelectionBuffer,
    pub targets: Vec<(&'a TargetSequence, MatchResult)>,
}

pub trait Renderer {
    /// Draw a frame and report how many lines were printed.
    fn draw(&mut self, frame: &Frame<'_>) -> io::Result<usize>;

    /// Move the cursor back up `lines` lines so the next frame overwrites the last.
    fn rewind(&mut self, lines: usize) -> io::Result<()>;
}

const SEQUENCE_TITLE: &str = "SEQUENCE REQUIRED TO UPLOAD";
const EMPTY_SLOT: &str = "__";
const USED_CELL: &str = "--";

/// Counts lines as they are written so the caller never has to guess the frame height.
struct LineCounter<'w, W: Write> {
    out: &'w mut W,
    count: usize,
}

impl<'w, W: Write> LineCounter<'w, W> {
    fn new(out: &'w mut W) -> Self {
        Self { out, count: 0 }
    }

    fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.count += 1;
        Ok(())
    }

    fn blank(&mut self) -> io::Result<()> {
        self.line("")
    }
}

/// Renderer writing ANSI-styled text to any writer (stdout in the binary).
pub struct AnsiRenderer<W: Write> {
    out: W,
    theme: Theme,
}

impl<W: Write> AnsiRenderer<W> {
    pub fn new(out: W, theme: Theme) -> Self {
        Self { out, theme }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn format_buffer(buffer: &SelectionBuffer, colors: &ThemeColors) -> String {
    let mut slots: Vec<String> = buffer
        .contents()
        .iter()
        .map(|symbol| symbol.to_string())
        .collect();
    slots.extend(
        (0..buffer.remaining()).map(|_| format!("{}{EMPTY_SLOT}{}", colors.dim, colors.reset)),
    );
    format!(
        "{}BUFFER{}  {}",
        colors.title,
        colors.reset,
        slots.join(" ")
    )
}

fn format_target(target: &TargetSequence, result: MatchResult, colors: &ThemeColors) -> String {
    let symbols = target
        .symbols()
        .iter()
        .map(|symbol| symbol.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let (color, label) = match result {
        MatchResult::Satisfied => (colors.success, "UPLOADED"),
        MatchResult::Pending => (colors.pending, "PENDING"),
    };
    format!("  {symbols}  {color}{label}{}", colors.reset)
}

fn format_cell(cell: Cell, hovered: bool, in_lane: bool, colors: &ThemeColors) -> String {
    let text = if cell.free {
        cell.symbol.to_string()
    } else {
        USED_CELL.to_string()
    };
    if hovered {
        return format!("{}[{text}]{}", colors.hover, colors.reset);
    }
    let style = if in_lane {
        colors.lane
    } else if !cell.free {
        colors.dim
    } else {
        ""
    };
    if style.is_empty() {
        format!(" {text} ")
    } else {
        format!("{style} {text} {}", colors.reset)
    }
}

fn format_grid_row(
    row_index: usize,
    row: &[Cell],
    hover: HoverPosition,
    axis: Axis,
    colors: &ThemeColors,
) -> String {
    row.iter()
        .enumerate()
        .map(|(column_index, cell)| {
            let hovered = hover == HoverPosition::new(row_index, column_index);
            let in_lane = match axis {
                Axis::RowConstrained => row_index == hover.row,
                Axis::ColumnConstrained => column_index == hover.column,
            };
            format_cell(*cell, hovered, in_lane, colors)
        })
        .collect()
}

impl<W: Write> Renderer for AnsiRenderer<W> {
    fn draw(&mut self, frame: &Frame<'_>) -> io::Result<usize> {
        let colors = self.theme.colors();
        let mut lines = LineCounter::new(&mut self.out);

        lines.line(format_buffer(frame.buffer, &colors))?;
        lines.blank()?;
        lines.line(format!("{}{SEQUENCE_TITLE}{}", colors.title, colors.reset))?;
        for (target, result) in &frame.targets {
            lines.line(format_target(target, *result, &colors))?;
        }
        lines.blank()?;
        for (row_index, row) in frame.grid.rows().enumerate() {
            lines.line(format_grid_row(
                row_index,
                row,
                frame.hover,
                frame.axis,
                &colors,
            ))?;
        }

        let count = lines.count;
        self.out.flush()?;
        Ok(count)
    }

    fn rewind(&mut self, lines: usize) -> io::Result<()> {
        if lines == 0 {
            return Ok(());
        }
        let up = u16::try_from(lines).unwrap_or(u16::MAX);
        queue!(
            self.out,
            MoveUp(up),
            MoveToColumn(0),
            Clear(ClearType::FromCursorDown)
        )?;
        self.out.flush()
    }
}
