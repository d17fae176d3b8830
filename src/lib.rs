// Domain layer - the universe engine
pub mod domain;

// Application layer - session state and host configuration
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, CellsView, SeedLayout, Universe, UniverseConfig, UniverseError};
pub use application::{HostArgs, Session};
