//! ---------------------------------------------------------------------------
//! Software (CPU) frame renderer
//!
//! * Fills an `&mut [u32]` frame-buffer in **0xAARRGGBB** format.
//! * Columns are mutually independent, so the per-column raycasts run as
//!   a rayon parallel map over a column-major scratch buffer: each worker
//!   owns exactly one column slice and shares the scene read-only.
//! * `end_frame` flips the scratch into row-major order and loans it to
//!   the submit closure.
//! ---------------------------------------------------------------------------

use rayon::prelude::*;

use super::{Renderer, Rgba, Scene, raycast};

/// Background above the horizon.
pub const CEILING: Rgba = 0xFF_30303A;
/// Background below the horizon.
pub const FLOOR: Rgba = 0xFF_1C1C1C;

/// Column-at-a-time raycasting renderer.
pub struct Software {
    /// Column-major scratch: `columns[x * height ..][.. height]`.
    columns: Vec<Rgba>,
    /// Row-major frame handed to `submit`.
    frame: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl Default for Software {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            frame: Vec::new(),
            width: 0,
            height: 0,
        }
    }
}

impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.columns.resize(w * h, 0);
            self.frame.resize(w * h, 0);
        }
        if self.columns.is_empty() {
            return;
        }

        /* two-tone clear: ceiling above the horizon, floor below */
        for column in self.columns.chunks_mut(self.height) {
            let (top, bottom) = column.split_at_mut(self.height / 2);
            top.fill(CEILING);
            bottom.fill(FLOOR);
        }
    }

    fn draw_view(&mut self, scene: &Scene) {
        if self.columns.is_empty() {
            return;
        }
        let width = self.width;
        self.columns
            .par_chunks_mut(self.height)
            .enumerate()
            .for_each(|(x, column)| raycast::render_column(scene, x, width, column));
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        /* flip column-major scratch into the row-major frame */
        if !self.columns.is_empty() {
            for (x, column) in self.columns.chunks(self.height).enumerate() {
                for (y, &px) in column.iter().enumerate() {
                    self.frame[y * self.width + x] = px;
                }
            }
        }
        submit(&self.frame, self.width, self.height);
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RendererExt;
    use crate::world::{Camera, CameraSnapshot, Orientation, Texture, TextureBank, TileMap};
    use glam::vec2;

    fn five_box() -> TileMap {
        TileMap::from_rows(&[
            &[1, 1, 1, 1, 1],
            &[1, 0, 0, 0, 1],
            &[1, 0, 0, 0, 1],
            &[1, 0, 0, 0, 1],
            &[1, 1, 1, 1, 1],
        ])
        .unwrap()
    }

    fn blue_bank() -> TextureBank {
        let mut bank = TextureBank::default_with_checker();
        let id = bank
            .insert(
                "BLUE",
                Texture {
                    w: 4,
                    h: 4,
                    pixels: vec![0xFF_0000FF; 16],
                },
            )
            .unwrap();
        bank.bind_material(1, id).unwrap();
        bank
    }

    fn grab_frame(scene: &Scene, w: usize, h: usize) -> Vec<Rgba> {
        let mut sw = Software::default();
        let mut out = Vec::new();
        sw.draw_frame(w, h, scene, |fb, fw, fh| {
            assert_eq!(fb.len(), fw * fh);
            out = fb.to_vec();
        });
        out
    }

    #[test]
    fn wall_strip_sits_between_ceiling_and_floor() {
        let map = five_box();
        let bank = blue_bank();
        let cam = Camera::new(
            vec2(2.5, 2.5),
            Orientation::new(vec2(-1.0, 0.0), vec2(0.0, 0.66)),
        );
        let snap = cam.snapshot();
        let scene = Scene {
            map: &map,
            camera: &snap,
            textures: &bank,
        };

        let (w, h) = (16, 16);
        let fb = grab_frame(&scene, w, h);

        // centre of the centre column is wall; extremes are background
        let centre = 8;
        assert_eq!(fb[(h / 2) * w + centre], 0xFF_0000FF);
        assert_eq!(fb[centre], CEILING);
        assert_eq!(fb[(h - 1) * w + centre], FLOOR);
    }

    #[test]
    fn no_hit_leaves_full_background_column() {
        // wall-less map: every ray leaves the grid
        let rows: Vec<Vec<u8>> = vec![vec![0; 4]; 4];
        let refs: Vec<&[u8]> = rows.iter().map(|r| r.as_slice()).collect();
        let map = TileMap::from_rows(&refs).unwrap();
        let bank = TextureBank::default_with_checker();
        let snap = CameraSnapshot {
            pos: vec2(2.0, 2.0),
            dir: vec2(1.0, 0.0),
            plane: vec2(0.0, 0.66),
        };
        let scene = Scene {
            map: &map,
            camera: &snap,
            textures: &bank,
        };

        let (w, h) = (8, 8);
        let fb = grab_frame(&scene, w, h);
        for y in 0..h {
            let want = if y < h / 2 { CEILING } else { FLOOR };
            assert_eq!(fb[y * w + 3], want, "row {y}");
        }
    }

    #[test]
    fn resize_between_frames_reallocates() {
        let map = five_box();
        let bank = blue_bank();
        let snap = CameraSnapshot {
            pos: vec2(2.5, 2.5),
            dir: vec2(1.0, 0.0),
            plane: vec2(0.0, 0.66),
        };
        let scene = Scene {
            map: &map,
            camera: &snap,
            textures: &bank,
        };

        let mut sw = Software::default();
        sw.draw_frame(8, 8, &scene, |fb, w, h| assert_eq!(fb.len(), w * h));
        sw.draw_frame(12, 6, &scene, |fb, w, h| {
            assert_eq!((w, h), (12, 6));
            assert_eq!(fb.len(), 72);
        });
    }
}
