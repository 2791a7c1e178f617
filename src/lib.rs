pub mod config;
pub mod input;
mod logging;
pub mod navigation;
pub mod puzzle;
pub mod render;
pub mod selection;
pub mod session;
mod telemetry;
pub mod terminal_restore;
pub mod theme;

pub use input::{classify, Command, CommandSource, TtyInput};
pub use logging::{crash_log_path, init_logging, log_debug, log_file_path, log_panic};
pub use navigation::{Axis, HoverPosition, Navigation};
pub use puzzle::{BreachPuzzle, Cell, Grid, MatchResult, PuzzleModel, Symbol, TargetSequence};
pub use render::{AnsiRenderer, Frame, Renderer};
pub use selection::SelectionBuffer;
pub use session::{RedrawState, Session, SessionState};
pub use telemetry::init_tracing;
pub use theme::{Theme, ThemeColors};
