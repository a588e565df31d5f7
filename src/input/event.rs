//! Platform-agnostic input events.
//!
//! The viewer translates winit window events into these before handing
//! them to [`CloudSceneEngine::handle_input`](crate::CloudSceneEngine::handle_input).

/// Phase of a touch contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// Contact started.
    Started,
    /// Contact moved.
    Moved,
    /// Contact lifted or was cancelled.
    Ended,
}

/// Platform-agnostic input events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// A touch contact changed.
    Touch {
        /// Platform touch identifier.
        id: u64,
        /// Contact phase.
        phase: TouchPhase,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
}

#[cfg(feature = "viewer")]
impl From<winit::event::TouchPhase> for TouchPhase {
    fn from(phase: winit::event::TouchPhase) -> Self {
        match phase {
            winit::event::TouchPhase::Started => Self::Started,
            winit::event::TouchPhase::Moved => Self::Moved,
            winit::event::TouchPhase::Ended
            | winit::event::TouchPhase::Cancelled => Self::Ended,
        }
    }
}
