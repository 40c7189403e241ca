pub mod error;
pub mod sorted;
pub mod incidence;
pub mod greedy;
pub mod verify;
pub mod instance;

// Re-exports to flatten the crate.
pub use error::{CoverError, Result};
pub use incidence::IncidenceStore;
pub use greedy::{solve, solve_with, GreedyConfig};
pub use verify::{cover_weight, is_cover};
pub use instance::Instance;
