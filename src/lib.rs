//! Tile-map raycaster.
//!
//! One ray per screen column, marched through an integer grid with a DDA,
//! producing a textured vertical strip whose height encodes distance.
//! `world` holds the static grid and the camera, `renderer` turns a
//! camera snapshot into pixels, `sim` translates input into movement,
//! `assets` decodes wall textures and carries the built-in map.

pub mod assets;
pub mod renderer;
pub mod sim;
pub mod world;
