//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod interactive;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkReport, GameResult, play_secret, run_benchmark, sample_secrets};
pub use interactive::run_interactive;
pub use solve::solve_word;
