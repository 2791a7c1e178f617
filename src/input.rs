//! Raw terminal input decoding so each keypress becomes one session command.
//!
//! Arrow keys arrive as a three byte escape run (`ESC [ A`), while Enter and
//! Escape arrive alone. One read of up to three bytes is enough to tell them apart.

use anyhow::{bail, Context, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Read};

use crate::log_debug;
use crate::terminal_restore::RawModeGuard;

const ESCAPE: u8 = 0x1b;
const CARRIAGE_RETURN: u8 = b'\r';
const ARROW_RUN_LEN: usize = 3;

/// Controlling terminal, even when stdin/stdout are redirected.
const TTY_PATH: &str = "/dev/tty";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Confirm,
    Cancel,
    None,
}

impl Command {
    pub fn is_move(self) -> bool {
        matches!(
            self,
            Command::MoveUp | Command::MoveDown | Command::MoveLeft | Command::MoveRight
        )
    }
}

#[inline]
fn map_arrow_final(byte: u8) -> Option<Command> {
    match byte {
        b'A' => Some(Command::MoveUp),
        b'B' => Some(Command::MoveDown),
        b'C' => Some(Command::MoveRight),
        b'D' => Some(Command::MoveLeft),
        _ => None,
    }
}

/// Map the bytes from a single read to a command.
///
/// A full three byte run is judged by its final byte only; anything else in that
/// position is absorbed. Shorter reads are judged by their first byte.
pub fn classify(bytes: &[u8]) -> Command {
    match bytes {
        [_, _, last] => map_arrow_final(*last).unwrap_or(Command::None),
        [ESCAPE] | [ESCAPE, _] => Command::Cancel,
        [CARRIAGE_RETURN] | [CARRIAGE_RETURN, _] => Command::Confirm,
        _ => Command::None,
    }
}

/// Anything that can hand the session its next command.
pub trait CommandSource {
    fn next_command(&mut self) -> Result<Command>;
}

/// Reads commands from the controlling terminal, one raw-mode read per call.
#[derive(Debug, Default)]
pub struct TtyInput;

impl TtyInput {
    pub fn new() -> Self {
        TtyInput
    }
}

impl CommandSource for TtyInput {
    fn next_command(&mut self) -> Result<Command> {
        read_command()
    }
}

fn open_tty() -> Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .open(TTY_PATH)
        .with_context(|| format!("failed to open controlling terminal {TTY_PATH}"))
}

/// Block until the terminal delivers input and decode it.
///
/// Raw mode is held only for the duration of the read and released on every path.
pub fn read_command() -> Result<Command> {
    let mut tty = open_tty()?;
    let mut buf = [0u8; ARROW_RUN_LEN];
    let read = {
        let _raw = RawModeGuard::acquire().context("failed to enter raw terminal mode")?;
        tty.read(&mut buf)
    };
    match read {
        Ok(0) => bail!("controlling terminal closed"),
        Ok(n) => {
            let command = classify(&buf[..n]);
            tracing::debug!(bytes = n, ?command, "decoded input");
            Ok(command)
        }
        Err(err) if err.kind() == io::ErrorKind::Interrupted => Ok(Command::None),
        Err(err) => {
            log_debug(&format!("terminal read error: {err}"));
            Err(err).context("failed to read from controlling terminal")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_reads_arrow_sequences() {
        assert_eq!(classify(b"\x1b[A"), Command::MoveUp);
        assert_eq!(classify(b"\x1b[B"), Command::MoveDown);
        assert_eq!(classify(b"\x1b[C"), Command::MoveRight);
        assert_eq!(classify(b"\x1b[D"), Command::MoveLeft);
    }

    #[test]
    fn classify_accepts_application_cursor_mode() {
        assert_eq!(classify(b"\x1bOA"), Command::MoveUp);
        assert_eq!(classify(b"\x1bOD"), Command::MoveLeft);
    }

    #[test]
    fn classify_absorbs_unknown_escape_runs() {
        assert_eq!(classify(b"\x1b[H"), Command::None);
        assert_eq!(classify(b"\x1b[5"), Command::None);
        assert_eq!(classify(b"\x1b\x1b\x1b"), Command::None);
    }

    #[test]
    fn classify_three_byte_run_is_never_cancel_or_confirm() {
        assert_eq!(classify(b"\r\r\r"), Command::None);
        assert_eq!(classify(b"\x1b\r\r"), Command::None);
    }

    #[test]
    fn classify_single_literal_keys() {
        assert_eq!(classify(&[0x1b]), Command::Cancel);
        assert_eq!(classify(&[13]), Command::Confirm);
        assert_eq!(classify(b"q"), Command::None);
        assert_eq!(classify(b"A"), Command::None);
        assert_eq!(classify(b"\n"), Command::None);
    }

    #[test]
    fn classify_short_reads_use_first_byte() {
        assert_eq!(classify(b"\x1b["), Command::Cancel);
        assert_eq!(classify(b"\rx"), Command::Confirm);
        assert_eq!(classify(b"x\r"), Command::None);
    }

    #[test]
    fn classify_empty_read_is_none() {
        assert_eq!(classify(&[]), Command::None);
    }

    #[test]
    fn is_move_covers_only_directions() {
        assert!(Command::MoveUp.is_move());
        assert!(Command::MoveLeft.is_move());
        assert!(!Command::Confirm.is_move());
        assert!(!Command::Cancel.is_move());
        assert!(!Command::None.is_move());
    }
}
