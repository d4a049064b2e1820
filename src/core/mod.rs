//! Core-Domänentypen: Szenen-Graph, Items, Layer, Kamera, Raster.

pub mod camera;
pub mod grid;
pub mod layer;
pub mod scene;
pub mod scene_item;

pub use camera::Camera2D;
pub use grid::{snap_to_grid, snap_value};
pub use layer::{Layer, DEFAULT_LAYER};
pub use scene::SceneGraph;
pub use scene_item::{ItemData, ItemKind, ItemTransform, SceneItem};
