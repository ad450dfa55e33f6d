//! Default values for configuration fields.

pub const DEFAULT_READ_POOL_SIZE: usize = 4;
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_LOG_FILTER: &str = "info";
