pub mod catalog;
pub mod consts;
pub mod error;
pub mod extract;
pub mod grid;
pub mod placeholder;
pub mod render;
pub mod store;

// Re-export commonly used types
pub use catalog::PageGrid;
pub use error::BudiconError;
pub use extract::{ExtractedIcon, extract_grid};
pub use grid::{
    layout::GridLayout,
    rect::CellRect,
    spec::{GridSpec, NameGrid},
};
pub use render::PageRasterizer;
pub use store::IconStore;
