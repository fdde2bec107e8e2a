//! Command implementations

pub mod share;
pub mod simple;

pub use share::{run_share, share_result};
pub use simple::{play_lines, run_simple};
