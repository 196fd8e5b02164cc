//! File-based sprite loading with compiled-in fallbacks.

use std::path::Path;

use anyhow::Context;

use crate::sprite::{TileSet, TileSprite};

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

const EMBEDDED_PLUS: &str = include_str!("../assets/tiles/plus.txt");
const EMBEDDED_MINUS: &str = include_str!("../assets/tiles/minus.txt");
const EMBEDDED_ZERO: &str = include_str!("../assets/tiles/zero.txt");

/// Loader for the three die-face sprites.
pub struct TileSetLoader;

impl TileSetLoader {
    /// Loads `plus.txt`, `minus.txt` and `zero.txt` from a directory.
    ///
    /// Fails if any of the three files is missing or malformed; there is no
    /// partial tile set.
    pub fn load(dir: &Path) -> LoadResult<TileSet> {
        let plus = Self::load_sprite(dir, "plus.txt")?;
        let minus = Self::load_sprite(dir, "minus.txt")?;
        let zero = Self::load_sprite(dir, "zero.txt")?;
        Ok(TileSet::new(plus, minus, zero))
    }

    /// The compiled-in default sprites.
    pub fn embedded() -> LoadResult<TileSet> {
        let plus = TileSprite::parse(EMBEDDED_PLUS).context("embedded plus sprite")?;
        let minus = TileSprite::parse(EMBEDDED_MINUS).context("embedded minus sprite")?;
        let zero = TileSprite::parse(EMBEDDED_ZERO).context("embedded zero sprite")?;
        Ok(TileSet::new(plus, minus, zero))
    }

    fn load_sprite(dir: &Path, name: &str) -> LoadResult<TileSprite> {
        let path = dir.join(name);
        let source = read_file(&path)?;
        TileSprite::parse(&source)
            .with_context(|| format!("Failed to parse sprite {}", path.display()))
    }
}

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dice_core::DieValue;

    #[test]
    fn embedded_defaults_always_parse() {
        let tiles = TileSetLoader::embedded().unwrap();
        for value in [DieValue::Minus, DieValue::Zero, DieValue::Plus] {
            let sprite = tiles.sprite(value);
            assert!(sprite.height() > 0);
            assert!(sprite.width() > 0);
        }
    }

    #[test]
    fn loads_a_complete_directory() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["plus.txt", "minus.txt", "zero.txt"] {
            std::fs::write(dir.path().join(name), "██\n██\n").unwrap();
        }
        let tiles = TileSetLoader::load(dir.path()).unwrap();
        assert_eq!(tiles.sprite(DieValue::Plus).height(), 2);
    }

    #[test]
    fn missing_sprite_fails_the_whole_set() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("plus.txt"), "██\n").unwrap();
        std::fs::write(dir.path().join("minus.txt"), "██\n").unwrap();
        // zero.txt absent
        assert!(TileSetLoader::load(dir.path()).is_err());
    }

    #[test]
    fn malformed_sprite_is_rejected_with_its_path() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["plus.txt", "minus.txt"] {
            std::fs::write(dir.path().join(name), "██\n").unwrap();
        }
        std::fs::write(dir.path().join("zero.txt"), "██\n█\n").unwrap();
        let err = TileSetLoader::load(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("zero.txt"));
    }
}
