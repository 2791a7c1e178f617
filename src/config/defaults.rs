pub const DEFAULT_GRID_SIZE: usize = 6;
pub const DEFAULT_BUFFER_SIZE: usize = 6;
pub const DEFAULT_SEQUENCE_COUNT: usize = 3;
pub const DEFAULT_SEQUENCE_LENGTH: usize = 3;

pub const MIN_GRID_SIZE: usize = 2;
pub const MAX_GRID_SIZE: usize = 12;
pub const MAX_BUFFER_SIZE: usize = 16;
pub const MAX_SEQUENCE_COUNT: usize = 6;
