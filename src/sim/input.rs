//! Input → camera movement.
//!
//! The window loop owns the keyboard; it reduces whatever is held this
//! frame to a [`MoveIntent`] set plus the elapsed time, and
//! [`apply_input`] turns that into camera motion.  Whether anything
//! actually changed comes back as an explicit [`Redraw`] value instead
//! of a global flag, so the frame loop re-renders only on change.

use bitflags::bitflags;

use crate::world::{Camera, TileMap};

bitflags! {
    /// The four discrete movement intents.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct MoveIntent: u8 {
        const FORWARD    = 1 << 0;
        const BACKWARD   = 1 << 1;
        const TURN_LEFT  = 1 << 2;
        const TURN_RIGHT = 1 << 3;
    }
}

/// One frame of input: what is held and for how long it acted.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputCmd {
    pub intent: MoveIntent,
    /// Elapsed seconds since the previous frame.
    pub dt: f32,
}

/// Whether the camera changed since the last rendered frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redraw {
    Clean,
    Dirty,
}

impl Redraw {
    #[inline]
    pub fn is_dirty(self) -> bool {
        self == Redraw::Dirty
    }
}

impl std::ops::BitOr for Redraw {
    type Output = Redraw;
    fn bitor(self, rhs: Redraw) -> Redraw {
        if self.is_dirty() || rhs.is_dirty() {
            Redraw::Dirty
        } else {
            Redraw::Clean
        }
    }
}

impl std::ops::BitOrAssign for Redraw {
    fn bitor_assign(&mut self, rhs: Redraw) {
        *self = *self | rhs;
    }
}

/// Apply one frame of input to the camera.
///
/// Opposing intents are both applied; they cancel positionally but the
/// frame still counts as dirty when either direction made progress.
pub fn apply_input(camera: &mut Camera, map: &TileMap, cmd: InputCmd) -> Redraw {
    let mut moved = false;

    if cmd.intent.contains(MoveIntent::FORWARD) {
        moved |= camera.move_forward(map, cmd.dt);
    }
    if cmd.intent.contains(MoveIntent::BACKWARD) {
        moved |= camera.move_backward(map, cmd.dt);
    }
    if cmd.intent.contains(MoveIntent::TURN_LEFT) {
        camera.rotate_left(cmd.dt);
        moved = true;
    }
    if cmd.intent.contains(MoveIntent::TURN_RIGHT) {
        camera.rotate_right(cmd.dt);
        moved = true;
    }

    if moved { Redraw::Dirty } else { Redraw::Clean }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
