//! Rendering abstraction layer.
//!
//! *The rest of the crate never touches a pixel buffer directly.*
//! A frame is described by a [`Scene`] — read-only borrows of the map,
//! one camera snapshot and the texture bank — and handed to a type that
//! implements [`Renderer`].
//!
//! * Back-ends are swappable without changing game logic; the only one
//!   here is [`software::Software`].
//! * A helper blanket-impl [`RendererExt`] adds `draw_frame` so
//!   call-sites stay short.

use crate::world::{CameraSnapshot, TextureBank, TileMap};

/// Pixel format of the software frame-buffer (0xAARRGGBB).
pub type Rgba = u32;

/// Everything one frame reads, borrowed immutably.
///
/// The snapshot is captured by value before the render dispatch, so
/// camera writes for the next frame can never interleave with an
/// in-flight render.
#[derive(Clone, Copy)]
pub struct Scene<'a> {
    pub map: &'a TileMap,
    pub camera: &'a CameraSnapshot,
    pub textures: &'a TextureBank,
}

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
/// Software callers typically forward it to their window-manager.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and
    /// clear it to the background.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Rasterise the scene into the internal buffer.
    fn draw_view(&mut self, scene: &Scene);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` is run exactly once per frame.
    /// * Software caller passes `|fb, w, h| window.update_with_buffer(fb, w, h)`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame<F>(&mut self, width: usize, height: usize, scene: &Scene, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(width, height);
        self.draw_view(scene);
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

pub mod raycast;
pub mod software;
