//! Hover cursor over the code matrix, constrained to one lane at a time.

use crate::input::Command;

/// Which lane the hover cursor is allowed to travel along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Left/Right move along the current row; Up/Down are ignored.
    #[default]
    RowConstrained,
    /// Up/Down move along the current column; Left/Right are ignored.
    ColumnConstrained,
}

impl Axis {
    pub fn toggled(self) -> Self {
        match self {
            Axis::RowConstrained => Axis::ColumnConstrained,
            Axis::ColumnConstrained => Axis::RowConstrained,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Axis::RowConstrained => "row",
            Axis::ColumnConstrained => "column",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverPosition {
    pub row: usize,
    pub column: usize,
}

impl HoverPosition {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

#[inline]
fn step_forward(index: usize, size: usize) -> usize {
    (index + 1) % size
}

#[inline]
fn step_back(index: usize, size: usize) -> usize {
    (index + size - 1) % size
}

/// Hover state on a toroidal `grid_size x grid_size` matrix.
#[derive(Debug, Clone)]
pub struct Navigation {
    grid_size: usize,
    position: HoverPosition,
    axis: Axis,
}

impl Navigation {
    /// Starts at the top-left cell, row constrained. `grid_size` must be non-zero.
    pub fn new(grid_size: usize) -> Self {
        Self::with_state(grid_size, HoverPosition::default(), Axis::default())
    }

    pub fn with_state(grid_size: usize, position: HoverPosition, axis: Axis) -> Self {
        debug_assert!(grid_size > 0, "grid size must be non-zero");
        debug_assert!(position.row < grid_size && position.column < grid_size);
        Self {
            grid_size,
            position,
            axis,
        }
    }

    pub fn position(&self) -> HoverPosition {
        self.position
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Flip the active lane. Only the session calls this, after a confirmed selection.
    pub fn toggle_axis(&mut self) {
        self.axis = self.axis.toggled();
    }

    /// Apply a directional command, wrapping at the edges.
    ///
    /// Returns whether the hover position changed. Commands for the inactive
    /// lane and non-directional commands leave the position untouched.
    pub fn apply_move(&mut self, command: Command) -> bool {
        let size = self.grid_size;
        let HoverPosition { row, column } = self.position;
        let next = match (self.axis, command) {
            (Axis::ColumnConstrained, Command::MoveUp) => {
                HoverPosition::new(step_back(row, size), column)
            }
            (Axis::ColumnConstrained, Command::MoveDown) => {
                HoverPosition::new(step_forward(row, size), column)
            }
            (Axis::RowConstrained, Command::MoveLeft) => {
                HoverPosition::new(row, step_back(column, size))
            }
            (Axis::RowConstrained, Command::MoveRight) => {
                HoverPosition::new(row, step_forward(column, size))
            }
            _ => return false,
        };
        self.position = next;
        next != HoverPosition::new(row, column)
    }
}
