//! Top-down debug viewer for the built-in map.
//!
//! ```bash
//! cargo run --bin gridcast
//! ```
//!
//! Draws the grid, the camera and a fan of cast rays from above — handy
//! for eyeballing DDA hits and collision without the 3-D projection in
//! the way.  Same movement keys as the first-person binary.

use minifb::{Key, Window, WindowOptions};
use std::time::Instant;

use gridcast::{
    assets,
    renderer::raycast::{cast_ray, column_ray},
    sim::{InputCmd, MoveIntent, Redraw, apply_input},
    world::{Camera, EMPTY, MaterialId, TileMap},
};

const WIDTH: usize = 640;
const HEIGHT: usize = 640;
/// Rays drawn across the field of view.
const RAY_FAN: usize = 40;

const BACKGROUND: u32 = 0x00_101010;
const RAY_COLOUR: u32 = 0x00_3A6A3A;
const CAMERA_COLOUR: u32 = 0x00_FFFFFF;

fn material_colour(m: MaterialId) -> u32 {
    match m {
        1 => 0x00_707078,
        2 => 0x00_2060C0,
        3 => 0x00_C04020,
        _ => 0x00_9040A0,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let map = &*assets::DEMO_MAP;
    let mut camera = Camera::new(assets::SPAWN_POS, assets::spawn_orientation());
    log::info!("map {}x{} top-down view", map.width(), map.height());

    // ─────────── map‑space → screen‑space transform ────────────
    let cell_px = (WIDTH / map.width()).min(HEIGHT / map.height());
    let offset_x = (WIDTH - map.width() * cell_px) / 2;
    let offset_y = (HEIGHT - map.height() * cell_px) / 2;
    let to_screen = |wx: f32, wy: f32| -> (i32, i32) {
        (
            (wx * cell_px as f32) as i32 + offset_x as i32,
            (wy * cell_px as f32) as i32 + offset_y as i32,
        )
    };

    let mut buffer = vec![0u32; WIDTH * HEIGHT];
    let mut window = Window::new("Gridcast map", WIDTH, HEIGHT, WindowOptions::default())?;
    window.set_target_fps(60);

    let mut redraw = Redraw::Dirty;
    let mut last = Instant::now();

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let dt = last.elapsed().as_secs_f32();
        last = Instant::now();

        let mut intent = MoveIntent::empty();
        if window.is_key_down(Key::Up) || window.is_key_down(Key::W) {
            intent |= MoveIntent::FORWARD;
        }
        if window.is_key_down(Key::Down) || window.is_key_down(Key::S) {
            intent |= MoveIntent::BACKWARD;
        }
        if window.is_key_down(Key::Left) || window.is_key_down(Key::A) {
            intent |= MoveIntent::TURN_LEFT;
        }
        if window.is_key_down(Key::Right) || window.is_key_down(Key::D) {
            intent |= MoveIntent::TURN_RIGHT;
        }
        redraw |= apply_input(&mut camera, map, InputCmd { intent, dt });

        if redraw.is_dirty() {
            buffer.fill(BACKGROUND);
            draw_cells(&mut buffer, map, cell_px, offset_x, offset_y);
            draw_rays(&mut buffer, map, &camera, &to_screen);

            let (cx, cy) = to_screen(camera.pos().x, camera.pos().y);
            fill_rect(&mut buffer, cx - 2, cy - 2, 5, 5, CAMERA_COLOUR);

            redraw = Redraw::Clean;
        }
        window.update_with_buffer(&buffer, WIDTH, HEIGHT)?;
    }
    Ok(())
}

fn draw_cells(buf: &mut [u32], map: &TileMap, cell_px: usize, off_x: usize, off_y: usize) {
    for cy in 0..map.height() {
        for cx in 0..map.width() {
            let material = map.material_at(cx, cy);
            if material == EMPTY {
                continue;
            }
            fill_rect(
                buf,
                (off_x + cx * cell_px) as i32 + 1,
                (off_y + cy * cell_px) as i32 + 1,
                cell_px.saturating_sub(2),
                cell_px.saturating_sub(2),
                material_colour(material),
            );
        }
    }
}

fn draw_rays<F>(buf: &mut [u32], map: &TileMap, camera: &Camera, to_screen: &F)
where
    F: Fn(f32, f32) -> (i32, i32),
{
    let snap = camera.snapshot();
    let (x0, y0) = to_screen(snap.pos.x, snap.pos.y);

    for i in 0..RAY_FAN {
        let ray_dir = column_ray(snap.dir, snap.plane, i, RAY_FAN);
        // hit point = pos + ray_dir * perp_dist; cap misses at a few cells
        let t = cast_ray(map, snap.pos, ray_dir).map_or(4.0, |hit| hit.perp_dist);
        let end = snap.pos + ray_dir * t;
        let (x1, y1) = to_screen(end.x, end.y);
        draw_line(buf, x0, y0, x1, y1, RAY_COLOUR);
    }
}

fn fill_rect(buf: &mut [u32], x: i32, y: i32, w: usize, h: usize, colour: u32) {
    for py in y.max(0)..(y + h as i32).min(HEIGHT as i32) {
        for px in x.max(0)..(x + w as i32).min(WIDTH as i32) {
            buf[py as usize * WIDTH + px as usize] = colour;
        }
    }
}

/// Integer Bresenham line‑drawing algorithm.
fn draw_line(buf: &mut [u32], mut x0: i32, mut y0: i32, x1: i32, y1: i32, colour: u32) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if (0..WIDTH as i32).contains(&x0) && (0..HEIGHT as i32).contains(&y0) {
            buf[y0 as usize * WIDTH + x0 as usize] = colour;
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            if x0 == x1 {
                break;
            }
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            if y0 == y1 {
                break;
            }
            err += dx;
            y0 += sy;
        }
    }
}
