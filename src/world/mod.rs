mod camera;
mod grid;
mod texture;

pub use camera::{Camera, CameraSnapshot, MOVE_SPEED, Orientation, ROT_SPEED};

pub use grid::{EMPTY, MapError, MaterialId, TileMap};

pub use texture::{NO_TEXTURE, Texture, TextureBank, TextureError, TextureId};
