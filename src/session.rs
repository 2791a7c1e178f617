//! Session controller: render, check for a decided puzzle, read one command, apply it.

use anyhow::Result;
use tracing::{debug, info};

use crate::input::{Command, CommandSource};
use crate::navigation::{Axis, HoverPosition, Navigation};
use crate::puzzle::{MatchResult, PuzzleModel};
use crate::render::{Frame, Renderer};
use crate::selection::SelectionBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    /// Every target sequence was satisfied.
    Succeeded,
    /// The buffer filled up before every target was satisfied.
    Exhausted,
    /// The player pressed Escape.
    Cancelled,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        self != SessionState::Running
    }
}

/// Lines printed by the previous frame, consumed by the next rewind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedrawState {
    printed_lines: usize,
}

impl RedrawState {
    pub fn record(&mut self, lines: usize) {
        self.printed_lines = lines;
    }

    pub fn printed_lines(&self) -> usize {
        self.printed_lines
    }

    /// Return the recorded count and reset it to zero.
    pub fn take(&mut self) -> usize {
        std::mem::take(&mut self.printed_lines)
    }
}

pub struct Session<P, R, I> {
    puzzle: P,
    renderer: R,
    input: I,
    navigation: Navigation,
    buffer: SelectionBuffer,
    redraw: RedrawState,
    state: SessionState,
}

impl<P, R, I> Session<P, R, I>
where
    P: PuzzleModel,
    R: Renderer,
    I: CommandSource,
{
    /// Start at the top-left cell, row constrained, with an empty buffer.
    pub fn new(puzzle: P, renderer: R, input: I, buffer_capacity: usize) -> Self {
        let navigation = Navigation::new(puzzle.grid_size());
        Self::with_navigation(puzzle, renderer, input, buffer_capacity, navigation)
    }

    pub fn with_navigation(
        puzzle: P,
        renderer: R,
        input: I,
        buffer_capacity: usize,
        navigation: Navigation,
    ) -> Self {
        debug_assert_eq!(navigation.grid_size(), puzzle.grid_size());
        let buffer = puzzle.initial_buffer(buffer_capacity);
        Self {
            puzzle,
            renderer,
            input,
            navigation,
            buffer,
            redraw: RedrawState::default(),
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn position(&self) -> HoverPosition {
        self.navigation.position()
    }

    pub fn axis(&self) -> Axis {
        self.navigation.axis()
    }

    pub fn buffer(&self) -> &SelectionBuffer {
        &self.buffer
    }

    pub fn puzzle(&self) -> &P {
        &self.puzzle
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn redraw(&self) -> RedrawState {
        self.redraw
    }

    /// Current verdict for each target, in target order.
    pub fn match_results(&self) -> Vec<MatchResult> {
        self.puzzle
            .targets()
            .iter()
            .map(|target| self.puzzle.match_status(target, self.buffer.contents()))
            .collect()
    }

    /// Run iterations until the session reaches a terminal state.
    pub fn run(&mut self) -> Result<SessionState> {
        info!(
            grid_size = self.puzzle.grid_size(),
            capacity = self.buffer.capacity(),
            targets = self.puzzle.targets().len(),
            "session started"
        );
        while self.state == SessionState::Running {
            self.step()?;
        }
        info!(
            state = ?self.state,
            selected = self.buffer.len(),
            "session finished"
        );
        Ok(self.state)
    }

    /// One iteration: draw, check termination, read and apply one command, rewind.
    ///
    /// Termination is checked before reading so a decided puzzle never waits on a key.
    /// Does nothing once the session is terminal.
    pub fn step(&mut self) -> Result<SessionState> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        let results = self.match_results();
        let lines = {
            let frame = Frame {
                grid: self.puzzle.grid(),
                hover: self.navigation.position(),
                axis: self.navigation.axis(),
                buffer: &self.buffer,
                targets: self
                    .puzzle
                    .targets()
                    .iter()
                    .zip(results.iter().copied())
                    .collect(),
            };
            self.renderer.draw(&frame)?
        };
        self.redraw.record(lines);

        if results.iter().all(|result| result.is_satisfied()) {
            self.finish(SessionState::Succeeded);
            return Ok(self.state);
        }
        if self.buffer.is_full() {
            self.finish(SessionState::Exhausted);
            return Ok(self.state);
        }

        let command = self.input.next_command()?;
        self.dispatch(command);

        if self.state == SessionState::Running {
            let lines = self.redraw.take();
            self.renderer.rewind(lines)?;
        }
        Ok(self.state)
    }

    fn finish(&mut self, state: SessionState) {
        debug!(?state, "session decided");
        self.state = state;
    }

    fn dispatch(&mut self, command: Command) {
        match command {
            Command::Cancel => self.finish(SessionState::Cancelled),
            Command::Confirm => self.confirm(),
            Command::MoveUp | Command::MoveDown | Command::MoveLeft | Command::MoveRight => {
                if self.navigation.apply_move(command) {
                    debug!(?command, position = ?self.navigation.position(), "hover moved");
                }
            }
            Command::None => {}
        }
    }

    fn confirm(&mut self) {
        let position = self.navigation.position();
        let cell = self.puzzle.cell(position);
        if !cell.free {
            return;
        }
        self.puzzle.mark_used(position);
        self.navigation.toggle_axis();
        let appended = self.buffer.append(cell.symbol);
        debug_assert!(appended, "buffer is checked for room before input is read");
        debug!(
            row = position.row,
            column = position.column,
            symbol = %cell.symbol,
            axis = self.navigation.axis().label(),
            "cell selected"
        );
    }
}
