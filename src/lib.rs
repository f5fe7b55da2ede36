pub mod core;
pub mod utils;

// Re-export everything from core for ergonomic library use
// Users can write `tagswap::config` instead of `tagswap::core::config`
pub use core::*;
pub use utils::*;
