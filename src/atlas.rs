pub mod operations;
pub mod pipelines;
pub mod pure;
pub mod types;

pub use types::{CellSize, LayoutParams, SourceImage, TilesetDescriptor};
