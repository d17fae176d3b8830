mod algorithm;
mod cell;
mod error;
mod patterns;
pub mod rules;
mod universe;
mod view;

pub use algorithm::Algorithm;
pub use cell::Cell;
pub use error::UniverseError;
pub use patterns::{Pattern, SeedLayout, presets};
pub use universe::{Universe, UniverseConfig};
pub use view::CellsView;
