//! Compiled-in world data and the texture loader.

mod loader;

pub use loader::{AssetError, load_wall_texture};

use glam::{Vec2, vec2};
use once_cell::sync::Lazy;

use crate::world::{Orientation, TileMap};

/// Where the player starts in [`DEMO_MAP`]; an open cell by design.
pub const SPAWN_POS: Vec2 = vec2(3.0, 3.0);

/// Spawn view: looking down -x with a ~47° field of view.
pub fn spawn_orientation() -> Orientation {
    Orientation::new(vec2(-1.0, 0.0), vec2(0.0, 0.44))
}

/// Built-in 10×10 level: a closed border of material 1 with free-standing
/// blocks of materials 2 and 3 inside.
pub static DEMO_MAP: Lazy<TileMap> = Lazy::new(|| {
    TileMap::from_rows(&[
        &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        &[1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
        &[1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
        &[1, 0, 0, 0, 0, 0, 0, 3, 0, 1],
        &[1, 0, 2, 0, 2, 0, 3, 3, 0, 1],
        &[1, 0, 2, 0, 2, 0, 3, 0, 0, 1],
        &[1, 0, 0, 0, 0, 0, 3, 3, 0, 1],
        &[1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
        &[1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
        &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    ])
    .expect("built-in map is rectangular")
});

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::EMPTY;

    #[test]
    fn demo_map_has_closed_border() {
        let map = &*DEMO_MAP;
        assert_eq!((map.width(), map.height()), (10, 10));
        for i in 0..10 {
            assert_ne!(map.material_at(i, 0), EMPTY);
            assert_ne!(map.material_at(i, 9), EMPTY);
            assert_ne!(map.material_at(0, i), EMPTY);
            assert_ne!(map.material_at(9, i), EMPTY);
        }
    }

    #[test]
    fn spawn_cell_is_walkable() {
        assert!(DEMO_MAP.is_open(SPAWN_POS));
    }

    #[test]
    fn spawn_view_is_perpendicular() {
        let o = spawn_orientation();
        assert!(o.dir().dot(o.plane()).abs() < 1e-6);
    }
}
