mod input;

pub use input::{InputCmd, MoveIntent, Redraw, apply_input};
