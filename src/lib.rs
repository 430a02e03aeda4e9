pub mod campus;
pub mod cli;
pub mod error;
pub mod graph;
pub mod scenario;
pub mod tui;
