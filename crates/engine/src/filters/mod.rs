//! Filter implementations for the candidate pipeline.
//!
//! A candidate is eligible only if it passes every one of these.

pub mod state;
pub mod inversion;
pub mod speed_window;
pub mod height_window;

// Re-export for convenience
pub use height_window::HeightWindowFilter;
pub use inversion::InversionFilter;
pub use speed_window::SpeedWindowFilter;
pub use state::StateFilter;
