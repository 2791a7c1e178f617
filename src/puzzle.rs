//! Code matrix, target sequences and the match verdicts the session consumes.

use anyhow::{bail, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::navigation::HoverPosition;
use crate::selection::SelectionBuffer;

/// One byte of the breach alphabet, shown as two hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(pub u8);

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.0)
    }
}

pub const SYMBOLS: [Symbol; 6] = [
    Symbol(0x1c),
    Symbol(0x55),
    Symbol(0x7a),
    Symbol(0xbd),
    Symbol(0xe9),
    Symbol(0xff),
];

fn random_symbol(rng: &mut impl Rng) -> Symbol {
    SYMBOLS[rng.random_range(0..SYMBOLS.len())]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub symbol: Symbol,
    pub free: bool,
}

impl Cell {
    pub fn new(symbol: Symbol) -> Self {
        Self { symbol, free: true }
    }
}

/// Square matrix of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn generate(size: usize, rng: &mut impl Rng) -> Self {
        let cells = (0..size * size)
            .map(|_| Cell::new(random_symbol(rng)))
            .collect();
        Self { size, cells }
    }

    /// Build a grid from explicit rows. Rows must form a non-empty square.
    pub fn from_rows(rows: Vec<Vec<Symbol>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            bail!("grid must have at least one row");
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            bail!(
                "grid must be square: row {index} has {} cells, expected {size}",
                row.len()
            );
        }
        let cells = rows.into_iter().flatten().map(Cell::new).collect();
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, pos: HoverPosition) -> usize {
        debug_assert!(pos.row < self.size && pos.column < self.size);
        pos.row * self.size + pos.column
    }

    pub fn cell(&self, pos: HoverPosition) -> Cell {
        self.cells[self.index(pos)]
    }

    pub fn mark_used(&mut self, pos: HoverPosition) {
        let index = self.index(pos);
        self.cells[index].free = false;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }
}

/// Ordered symbols that must appear contiguously in the selection buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSequence {
    symbols: Vec<Symbol>,
}

impl TargetSequence {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    pub fn generate(length: usize, rng: &mut impl Rng) -> Self {
        Self::new((0..length).map(|_| random_symbol(rng)).collect())
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Pending,
    Satisfied,
}

impl MatchResult {
    pub fn is_satisfied(self) -> bool {
        self == MatchResult::Satisfied
    }
}

/// `Satisfied` when `target` occurs as a contiguous run inside `buffer`.
pub fn contiguous_match(target: &TargetSequence, buffer: &[Symbol]) -> MatchResult {
    let needle = target.symbols();
    if needle.is_empty() || buffer.windows(needle.len()).any(|window| window == needle) {
        MatchResult::Satisfied
    } else {
        MatchResult::Pending
    }
}

/// The puzzle side of a session: owns the grid and judges the buffer.
pub trait PuzzleModel {
    fn grid(&self) -> &Grid;

    /// Flag the cell at `pos` as taken so it cannot be selected again.
    fn mark_used(&mut self, pos: HoverPosition);

    fn targets(&self) -> &[TargetSequence];

    fn match_status(&self, target: &TargetSequence, buffer: &[Symbol]) -> MatchResult {
        contiguous_match(target, buffer)
    }

    fn grid_size(&self) -> usize {
        self.grid().size()
    }

    fn cell(&self, pos: HoverPosition) -> Cell {
        self.grid().cell(pos)
    }

    fn initial_buffer(&self, capacity: usize) -> SelectionBuffer {
        SelectionBuffer::with_capacity(capacity)
    }
}

/// Randomly generated matrix plus target sequences.
#[derive(Debug, Clone)]
pub struct BreachPuzzle {
    grid: Grid,
    targets: Vec<TargetSequence>,
}

impl BreachPuzzle {
    /// Generate a puzzle; the same `seed` always yields the same puzzle.
    pub fn generate(
        grid_size: usize,
        sequence_count: usize,
        sequence_length: usize,
        seed: Option<u64>,
    ) -> Self {
        let mut rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let grid = Grid::generate(grid_size, &mut rng);
        let targets = (0..sequence_count)
            .map(|_| TargetSequence::generate(sequence_length, &mut rng))
            .collect();
        Self { grid, targets }
    }

    pub fn from_parts(grid: Grid, targets: Vec<TargetSequence>) -> Self {
        Self { grid, targets }
    }
}

impl PuzzleModel for BreachPuzzle {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn mark_used(&mut self, pos: HoverPosition) {
        self.grid.mark_used(pos);
    }

    fn targets(&self) -> &[TargetSequence] {
        &self.targets
    }
}
