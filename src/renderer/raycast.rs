//! Per-column ray casting over the tile grid.
//!
//! For a screen column the ray direction is `dir + plane * camera_x`
//! with `camera_x` swept across [-1, 1).  A DDA walks the grid one cell
//! boundary at a time along whichever axis is nearer until it meets a
//! wall cell, then the wall distance is measured along the camera's
//! forward axis (not to the camera point) so straight walls stay
//! straight on screen.

use glam::{IVec2, Vec2};

use super::{Rgba, Scene};
use crate::world::{EMPTY, MaterialId, TileMap};

/// Stand-in for an infinite per-axis traversal cost when a ray-direction
/// component is exactly zero; that axis then never wins the step race.
const FAR: f32 = 1e30;

/// Which grid-line orientation the ray crossed when it hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// A vertical, x-facing face.
    X,
    /// A horizontal, y-facing face.
    Y,
}

/// First wall cell a ray meets.
#[derive(Clone, Copy, Debug)]
pub struct RayHit {
    pub cell: IVec2,
    pub material: MaterialId,
    pub side: Side,
    /// Distance to the hit measured along the camera's forward axis;
    /// also the ray parameter, so `pos + ray_dir * perp_dist` is the
    /// world-space hit point.
    pub perp_dist: f32,
    /// Fractional hit position along the hit face, in [0, 1).
    pub wall_x: f32,
}

#[inline]
fn delta_dist(component: f32) -> f32 {
    if component == 0.0 {
        FAR
    } else {
        (1.0 / component).abs()
    }
}

/// March `ray_dir` from `pos` until it meets a wall cell.
///
/// Returns `None` when the ray leaves the map (or would: the loop is
/// bounded by the longest straight run through the grid), so maps
/// without a closed border degrade to background columns instead of
/// spinning forever.
pub fn cast_ray(map: &TileMap, pos: Vec2, ray_dir: Vec2) -> Option<RayHit> {
    let mut cell = pos.floor().as_ivec2();
    let delta = Vec2::new(delta_dist(ray_dir.x), delta_dist(ray_dir.y));

    let (step_x, mut side_dist_x) = if ray_dir.x < 0.0 {
        (-1, (pos.x - cell.x as f32) * delta.x)
    } else {
        (1, (cell.x as f32 + 1.0 - pos.x) * delta.x)
    };
    let (step_y, mut side_dist_y) = if ray_dir.y < 0.0 {
        (-1, (pos.y - cell.y as f32) * delta.y)
    } else {
        (1, (cell.y as f32 + 1.0 - pos.y) * delta.y)
    };

    let max_steps = map.width() + map.height();
    for _ in 0..max_steps {
        // advance whichever axis has the nearer grid line
        let side = if side_dist_x < side_dist_y {
            cell.x += step_x;
            side_dist_x += delta.x;
            Side::X
        } else {
            cell.y += step_y;
            side_dist_y += delta.y;
            Side::Y
        };

        let material = map.get(cell)?;
        if material != EMPTY {
            let perp_dist = match side {
                Side::X => side_dist_x - delta.x,
                Side::Y => side_dist_y - delta.y,
            };
            let along = match side {
                Side::X => pos.y + perp_dist * ray_dir.y,
                Side::Y => pos.x + perp_dist * ray_dir.x,
            };
            return Some(RayHit {
                cell,
                material,
                side,
                perp_dist,
                wall_x: along - along.floor(),
            });
        }
    }
    None
}

/// Ray direction for screen column `x` of `width`.
#[inline]
pub fn column_ray(camera_dir: Vec2, camera_plane: Vec2, x: usize, width: usize) -> Vec2 {
    let camera_x = 2.0 * x as f32 / width as f32 - 1.0;
    camera_dir + camera_plane * camera_x
}

/// Texel column for a hit, mirrored when the ray travels in the positive
/// direction on the hit axis so both faces of a wall read the same way.
fn wall_tex_x(hit: &RayHit, ray_dir: Vec2, tex_w: usize) -> usize {
    let mut tex_x = (hit.wall_x * tex_w as f32) as i32;
    let positive = match hit.side {
        Side::X => ray_dir.x > 0.0,
        Side::Y => ray_dir.y > 0.0,
    };
    if positive {
        tex_x = tex_w as i32 - tex_x - 1;
    }
    tex_x.clamp(0, tex_w as i32 - 1) as usize
}

/// y-facing walls are drawn at half brightness.
#[inline]
fn shade(color: Rgba) -> Rgba {
    (color & 0xFF00_0000) | ((color >> 1) & 0x007F_7F7F)
}

/// Fill one screen column.
///
/// `column` is the full vertical strip for screen column `x`
/// (`column.len()` == viewport height); rows outside the wall's draw
/// range are left as they are, so the caller's background shows through.
/// Pure with respect to the scene: nothing is mutated but `column`.
pub fn render_column(scene: &Scene, x: usize, width: usize, column: &mut [Rgba]) {
    let height = column.len();
    let cam = scene.camera;
    let ray_dir = column_ray(cam.dir, cam.plane, x, width);

    let Some(hit) = cast_ray(scene.map, cam.pos, ray_dir) else {
        return;
    };

    let tex = scene
        .textures
        .texture_or_missing(scene.textures.material_texture(hit.material));

    // projected strip, centred on the horizon
    let line_height = (height as f32 / hit.perp_dist) as i32;
    let half_h = height as i32 / 2;
    let draw_start = (half_h - line_height / 2).max(0);
    let draw_end = (half_h + line_height / 2).min(height as i32);

    let tex_x = wall_tex_x(&hit, ray_dir, tex.w);

    // texture rows per screen row; wrap with rem_euclid so any texture
    // height works, not just powers of two
    let step = tex.h as f32 / line_height as f32;
    let mut tex_pos = (draw_start - half_h + line_height / 2) as f32 * step;
    for y in draw_start..draw_end {
        let tex_y = (tex_pos as i32).rem_euclid(tex.h as i32) as usize;
        tex_pos += step;
        let mut color = tex.pixels[tex_y * tex.w + tex_x];
        if hit.side == Side::Y {
            color = shade(color);
        }
        column[y as usize] = color;
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
