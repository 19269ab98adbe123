//! First-person walk through the built-in tile map.
//!
//! ```bash
//! cargo run --release -- --texture wall.png
//! ```
//!
//! W/S (or ↑/↓) walk, A/D (or ←/→) turn, Esc quits.  The scene is
//! re-rendered only when the camera changed since the last frame.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use minifb::{Key, Window, WindowOptions};

use gridcast::{
    assets::{self, load_wall_texture},
    renderer::{Renderer, Scene, software::Software},
    sim::{InputCmd, MoveIntent, Redraw, apply_input},
    world::{Camera, TextureBank},
};

#[derive(Parser, Debug)]
#[command(about = "First-person walk through the built-in tile map")]
struct Args {
    /// Wall texture image; on decode failure the checkerboard is used.
    #[arg(long, default_value = "wall.png")]
    texture: PathBuf,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 640)]
    width: usize,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 480)]
    height: usize,

    /// Frame-rate cap.
    #[arg(long, default_value_t = 144)]
    fps: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut bank = TextureBank::default_with_checker();
    match load_wall_texture(&args.texture) {
        Ok(tex) => {
            log::info!(
                "wall texture {}: {}x{}",
                args.texture.display(),
                tex.w,
                tex.h
            );
            let id = bank.insert("WALL", tex)?;
            for material in 1..=3 {
                bank.bind_material(material, id)?;
            }
        }
        Err(err) => {
            log::error!(
                "{}: {err}; rendering with the checkerboard",
                args.texture.display()
            );
        }
    }

    let map = &*assets::DEMO_MAP;
    let mut camera = Camera::new(assets::SPAWN_POS, assets::spawn_orientation());
    log::info!(
        "map {}x{}, fov {:.1}°",
        map.width(),
        map.height(),
        camera.orientation().fov().to_degrees()
    );

    let mut renderer = Software::default();
    let mut win = Window::new(
        "Gridcast",
        args.width,
        args.height,
        WindowOptions::default(),
    )?;
    win.set_target_fps(args.fps);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO; // cumulated render time
    let mut acc_frames = 0usize; // frames in the current window
    let mut last_print = Instant::now(); // when we reported last

    let mut redraw = Redraw::Dirty; // first frame always renders
    let mut last = Instant::now();

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let dt = last.elapsed().as_secs_f32();
        last = Instant::now();

        /* --------------- reduce held keys to one InputCmd ---------------- */
        let mut intent = MoveIntent::empty();
        if win.is_key_down(Key::Up) || win.is_key_down(Key::W) {
            intent |= MoveIntent::FORWARD;
        }
        if win.is_key_down(Key::Down) || win.is_key_down(Key::S) {
            intent |= MoveIntent::BACKWARD;
        }
        if win.is_key_down(Key::Left) || win.is_key_down(Key::A) {
            intent |= MoveIntent::TURN_LEFT;
        }
        if win.is_key_down(Key::Right) || win.is_key_down(Key::D) {
            intent |= MoveIntent::TURN_RIGHT;
        }

        redraw |= apply_input(&mut camera, map, InputCmd { intent, dt });

        if redraw.is_dirty() {
            let t0 = Instant::now();
            let snapshot = camera.snapshot();
            let scene = Scene {
                map,
                camera: &snapshot,
                textures: &bank,
            };

            renderer.begin_frame(args.width, args.height);
            renderer.draw_view(&scene);
            renderer.end_frame(|fb, w, h| {
                acc_time += t0.elapsed();
                acc_frames += 1;
                win.update_with_buffer(fb, w, h).unwrap()
            });
            redraw = Redraw::Clean;
        } else {
            // nothing changed: keep the window pumping input without a redraw
            win.update();
        }

        if acc_frames > 0 && last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            log::debug!(
                "avg render: {avg_ms:.2} ms ({:.1} FPS)",
                1000.0 / avg_ms
            );
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
