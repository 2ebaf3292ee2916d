pub mod renderer;

pub use renderer::{cell_at, CellKind, Renderer};
