//! Pointer-target state: two scalars updated discretely by input events
//! and consumed continuously by the camera easing.

use crate::input::event::{InputEvent, TouchPhase};

/// Target offsets derived from the latest pointer/touch position.
///
/// Updates are last-write-wins with no queuing. Only the first active
/// touch contact is tracked; other contacts are ignored until it ends.
#[derive(Debug, Clone, Copy)]
pub struct PointerTarget {
    /// Eased-toward horizontal offset in world units.
    pub x: f32,
    /// Eased-toward vertical offset in world units (consumer negates).
    pub y: f32,
    half_width: f32,
    half_height: f32,
    scale: f32,
    active_touch: Option<u64>,
}

impl PointerTarget {
    /// Create a pointer target centered in a `width` x `height` window.
    ///
    /// `scale` maps pixel offsets from the window center to world units.
    pub fn new(width: u32, height: u32, scale: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            half_width: width as f32 / 2.0,
            half_height: height as f32 / 2.0,
            scale,
            active_touch: None,
        }
    }

    /// Recompute the window center after a resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.half_width = width as f32 / 2.0;
        self.half_height = height as f32 / 2.0;
    }

    /// Apply an input event. Returns `true` if the target changed.
    pub fn apply(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.set_from_position(x, y);
                true
            }
            InputEvent::Touch { id, phase, x, y } => match phase {
                TouchPhase::Started => {
                    if self.active_touch.is_some() {
                        return false;
                    }
                    self.active_touch = Some(id);
                    self.set_from_position(x, y);
                    true
                }
                TouchPhase::Moved => {
                    if self.active_touch != Some(id) {
                        return false;
                    }
                    self.set_from_position(x, y);
                    true
                }
                TouchPhase::Ended => {
                    if self.active_touch == Some(id) {
                        self.active_touch = None;
                    }
                    false
                }
            },
        }
    }

    fn set_from_position(&mut self, x: f32, y: f32) {
        self.x = (x - self.half_width) * self.scale;
        self.y = (y - self.half_height) * self.scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_cursor_is_zero_target() {
        let mut target = PointerTarget::new(800, 600, 0.25);
        assert!(target.apply(InputEvent::CursorMoved { x: 400.0, y: 300.0 }));
        assert_eq!(target.x, 0.0);
        assert_eq!(target.y, 0.0);
    }

    #[test]
    fn cursor_offset_scales_from_center() {
        let mut target = PointerTarget::new(800, 600, 0.25);
        let _ = target.apply(InputEvent::CursorMoved { x: 800.0, y: 0.0 });
        assert_eq!(target.x, 100.0);
        assert_eq!(target.y, -75.0);
    }

    #[test]
    fn last_write_wins() {
        let mut target = PointerTarget::new(800, 600, 0.25);
        let _ = target.apply(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let _ = target.apply(InputEvent::CursorMoved { x: 600.0, y: 300.0 });
        assert_eq!(target.x, 50.0);
        assert_eq!(target.y, 0.0);
    }

    #[test]
    fn resize_moves_center() {
        let mut target = PointerTarget::new(800, 600, 0.25);
        target.resize(400, 400);
        let _ = target.apply(InputEvent::CursorMoved { x: 200.0, y: 200.0 });
        assert_eq!(target.x, 0.0);
        assert_eq!(target.y, 0.0);
    }

    #[test]
    fn second_touch_is_ignored_until_first_ends() {
        let mut target = PointerTarget::new(800, 600, 1.0);
        assert!(target.apply(InputEvent::Touch {
            id: 1,
            phase: TouchPhase::Started,
            x: 500.0,
            y: 300.0,
        }));
        // A second contact must not steal the target.
        assert!(!target.apply(InputEvent::Touch {
            id: 2,
            phase: TouchPhase::Started,
            x: 0.0,
            y: 0.0,
        }));
        assert!(!target.apply(InputEvent::Touch {
            id: 2,
            phase: TouchPhase::Moved,
            x: 0.0,
            y: 0.0,
        }));
        assert_eq!(target.x, 100.0);

        let _ = target.apply(InputEvent::Touch {
            id: 1,
            phase: TouchPhase::Ended,
            x: 500.0,
            y: 300.0,
        });
        assert!(target.apply(InputEvent::Touch {
            id: 2,
            phase: TouchPhase::Started,
            x: 400.0,
            y: 300.0,
        }));
        assert_eq!(target.x, 0.0);
    }
}
