use glam::Vec2;

use super::grid::TileMap;

/// Forward speed in cells per second.
pub const MOVE_SPEED: f32 = 1.2;
/// Turn rate in radians per second.
pub const ROT_SPEED: f32 = 1.4;

/// View direction and camera plane as one value.
///
/// The plane is perpendicular to the direction; its length relative to
/// the direction sets the horizontal field of view.  Keeping the pair in
/// one type with [`Orientation::rotate`] as the only mutator means both
/// vectors always see the same rotation and stay perpendicular.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    dir: Vec2,
    plane: Vec2,
}

impl Orientation {
    pub fn new(dir: Vec2, plane: Vec2) -> Self {
        Self { dir, plane }
    }

    #[inline]
    pub fn dir(&self) -> Vec2 {
        self.dir
    }

    #[inline]
    pub fn plane(&self) -> Vec2 {
        self.plane
    }

    /// Rotate both vectors by `angle` radians (positive = clockwise in
    /// grid coordinates, where +y points down the rows).
    pub fn rotate(&mut self, angle: f32) {
        let rot = Vec2::from_angle(angle);
        self.dir = rot.rotate(self.dir);
        self.plane = rot.rotate(self.plane);
    }

    /// Horizontal field of view in radians.
    #[inline]
    pub fn fov(&self) -> f32 {
        2.0 * (self.plane.length() / self.dir.length()).atan()
    }
}

/// The six scalars the renderer reads for one frame.
///
/// Captured once after the input phase; the render pass sees a single
/// consistent view of the camera no matter what happens to it afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSnapshot {
    pub pos: Vec2,
    pub dir: Vec2,
    pub plane: Vec2,
}

/// Player view-point in grid space.
///
/// Position is in grid coordinates: the integer part of each component is
/// the cell index.  Movement consults the map for collision; the two axes
/// are resolved independently so sliding along a wall keeps working when
/// only one axis is blocked.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pos: Vec2,
    orient: Orientation,
}

impl Camera {
    /// Create a camera at `pos` with the given orientation.  The caller
    /// guarantees the spawn cell is walkable.
    pub fn new(pos: Vec2, orient: Orientation) -> Self {
        debug_assert!(pos.x >= 0.0 && pos.y >= 0.0, "spawn outside grid");
        Self { pos, orient }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orient
    }

    /// Capture the state the renderer needs for one frame.
    #[inline]
    pub fn snapshot(&self) -> CameraSnapshot {
        CameraSnapshot {
            pos: self.pos,
            dir: self.orient.dir,
            plane: self.orient.plane,
        }
    }

    /// Step along the view direction.  Returns true when the position
    /// actually changed.
    pub fn move_forward(&mut self, map: &TileMap, dt: f32) -> bool {
        self.translate(map, self.orient.dir * (MOVE_SPEED * dt))
    }

    /// Step against the view direction.  Returns true when the position
    /// actually changed.
    pub fn move_backward(&mut self, map: &TileMap, dt: f32) -> bool {
        self.translate(map, -self.orient.dir * (MOVE_SPEED * dt))
    }

    pub fn rotate_left(&mut self, dt: f32) {
        self.orient.rotate(-ROT_SPEED * dt);
    }

    pub fn rotate_right(&mut self, dt: f32) {
        self.orient.rotate(ROT_SPEED * dt);
    }

    /// Apply `delta` with per-axis collision.
    ///
    /// Each axis is checked against the position at the start of the
    /// step, not against the other axis's tentative result, so a blocked
    /// axis never stops the free one.  A diagonal step that clears both
    /// per-axis checks may still clip a wall corner; that approximation
    /// is accepted.
    fn translate(&mut self, map: &TileMap, delta: Vec2) -> bool {
        let start = self.pos;
        if map.is_open(Vec2::new(start.x + delta.x, start.y)) {
            self.pos.x = start.x + delta.x;
        }
        if map.is_open(Vec2::new(start.x, start.y + delta.y)) {
            self.pos.y = start.y + delta.y;
        }
        self.pos != start
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    const EPS: f32 = 1e-5;

    fn walled_box() -> TileMap {
        // (2, 1) is a wall; the rest of the interior is open.
        TileMap::from_rows(&[
            &[1, 1, 1, 1, 1],
            &[1, 0, 1, 0, 1],
            &[1, 0, 0, 0, 1],
            &[1, 0, 0, 0, 1],
            &[1, 1, 1, 1, 1],
        ])
        .unwrap()
    }

    fn spawn_orient() -> Orientation {
        Orientation::new(vec2(-1.0, 0.0), vec2(0.0, 0.44))
    }

    #[test]
    fn rotation_preserves_geometry() {
        // |dir|, |plane| and the angle between them survive any rotation.
        for &dt in &[0.001, 0.3, 1.7, 100.0] {
            let mut o = spawn_orient();
            let (dir_len, plane_len) = (o.dir().length(), o.plane().length());
            let dot = o.dir().dot(o.plane());

            o.rotate(ROT_SPEED * dt);

            assert!((o.dir().length() - dir_len).abs() < EPS);
            assert!((o.plane().length() - plane_len).abs() < EPS);
            assert!((o.dir().dot(o.plane()) - dot).abs() < EPS);
        }
    }

    #[test]
    fn opposite_rotations_cancel() {
        let mut cam = Camera::new(vec2(2.5, 2.5), spawn_orient());
        cam.rotate_left(0.25);
        cam.rotate_right(0.25);
        assert!((cam.orientation().dir() - vec2(-1.0, 0.0)).length() < EPS);
        assert!((cam.orientation().plane() - vec2(0.0, 0.44)).length() < EPS);
    }

    #[test]
    fn fov_follows_plane_length() {
        let o = spawn_orient();
        assert!((o.fov() - 2.0 * 0.44_f32.atan()).abs() < EPS);
    }

    #[test]
    fn blocked_axis_keeps_free_axis_moving() {
        // Facing diagonally at the wall in (2, 1): x is blocked, y slides.
        let map = walled_box();
        let dir = vec2(1.0, 1.0).normalize();
        let mut cam = Camera::new(vec2(1.5, 1.5), Orientation::new(dir, 0.44 * dir.perp()));

        let moved = cam.move_forward(&map, 1.0);

        assert!(moved);
        assert!((cam.pos().x - 1.5).abs() < EPS, "blocked axis must not move");
        assert!((cam.pos().y - (1.5 + MOVE_SPEED * dir.y)).abs() < EPS);
    }

    #[test]
    fn fully_blocked_move_reports_clean() {
        // Head-on into the wall: neither axis changes.
        let map = walled_box();
        let mut cam = Camera::new(vec2(1.5, 1.5), Orientation::new(vec2(1.0, 0.0), vec2(0.0, 0.44)));

        let moved = cam.move_forward(&map, 1.0);

        assert!(!moved);
        assert_eq!(cam.pos(), vec2(1.5, 1.5));
    }

    #[test]
    fn backward_move_mirrors_forward() {
        let map = walled_box();
        let mut cam = Camera::new(vec2(2.5, 2.5), Orientation::new(vec2(0.0, 1.0), vec2(-0.44, 0.0)));

        assert!(cam.move_backward(&map, 0.25));
        assert!((cam.pos().y - (2.5 - MOVE_SPEED * 0.25)).abs() < EPS);
        assert!((cam.pos().x - 2.5).abs() < EPS);
    }

    #[test]
    fn snapshot_mirrors_state() {
        let mut cam = Camera::new(vec2(3.0, 3.0), spawn_orient());
        cam.rotate_right(0.5);
        let snap = cam.snapshot();
        assert_eq!(snap.pos, cam.pos());
        assert_eq!(snap.dir, cam.orientation().dir());
        assert_eq!(snap.plane, cam.orientation().plane());
    }
}
