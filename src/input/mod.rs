//! Input handling: platform-agnostic events and the pointer-target state
//! consumed by the camera easing.

mod event;
mod pointer;

pub use event::{InputEvent, TouchPhase};
pub use pointer::PointerTarget;
