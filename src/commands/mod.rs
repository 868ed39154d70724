//! Command implementations

pub mod add;
pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use add::{AddResult, add_word};
pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, pick_secrets, run_benchmark};
pub use simple::{run_simple, run_simple_with};
pub use solve::{GuessStep, SolveResult, solve_word};
