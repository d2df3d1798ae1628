pub mod board;
pub mod color;
pub mod coord;
pub mod engine;
pub mod enumerator;
pub mod generator;
pub mod heatmap;
pub mod placer;
pub mod selector;
pub mod shape;
pub mod workqueue;

pub(crate) mod prelude {
    pub use anyhow::{anyhow, Context, Error};
    pub type Result<T> = anyhow::Result<T, Error>;
}

pub mod exports {
    pub use super::board::Board;
    pub use super::color::Color;
    pub use super::coord::Coord;
    pub use super::engine::Engine;
    pub use super::generator::Generator;
    pub use super::heatmap::{Frequency, Heatmap};
    pub use super::selector::Probability;
    pub use super::shape::{AIRCRAFT_SIZE, NUM_DIRECTIONS};
}
