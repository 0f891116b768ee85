pub mod protocol;
pub mod render;
pub mod runner;
pub mod state;

// Re-export the control loop so the binary can build and run it directly.
pub use runner::Shell;
pub use state::AppState;
