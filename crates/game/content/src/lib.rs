//! Tile sprites for the die faces.
//!
//! This crate houses the three face sprites (plus, minus, zero) as text art
//! and provides the loader that reads them from disk, with compiled-in
//! defaults as fallback. A [`TileSet`] only exists once all three sprites
//! are ready, so renderers never observe a partially loaded surface.
pub mod loader;
pub mod sprite;

pub use loader::{LoadResult, TileSetLoader};
pub use sprite::{SpriteError, TileSet, TileSprite};
