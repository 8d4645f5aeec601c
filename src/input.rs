//!
//! Translation of pointer gestures into strokes on the canvas
//!

use crate::canvas::{draw_point, draw_segment, Canvas, Point};
use crate::palette::Swatch;

/// A pointer event normalized to canvas pixel coordinates
///
/// Mouse and touch input are mapped onto this one event type by the windowing layer.
/// Raw platform samples without a usable position (e.g. a touch sample with no active touch
/// points) never reach the router as positioned events; the windowing layer either drops
/// them or folds them into [`PointerEvent::Leave`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PointerEvent {
    /// The pointer was pressed down at the given position
    Down(Point),
    /// The pointer moved to the given position
    Move(Point),
    /// The pointer was released
    Up,
    /// The pointer left the drawing surface
    Leave,
}

/// Gesture state of the router
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Phase {
    /// No gesture is in progress
    Idle,
    /// A stroke is being drawn and continues from `last`
    Stroking { last: Point },
}

/// A state machine which turns a stream of pointer events into strokes on a canvas
///
/// The machine has the two states *Idle* and *Stroking*. A `Down` event starts a stroke with a
/// single brush point, `Move` events extend it with line segments, and `Up` or `Leave` events
/// end it. The stroke path is forgotten on gesture end so that the next stroke never joins
/// onto the previous one.
#[derive(Debug, Copy, Clone)]
pub struct InputRouter {
    phase: Phase,
}

impl InputRouter {
    /// Create a new router in the idle state
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Whether a stroke is currently in progress
    pub fn is_stroking(&self) -> bool {
        matches!(self.phase, Phase::Stroking { .. })
    }

    /// Forget any in-progress stroke so that the next one starts fresh
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Advance the state machine by one event, rendering onto `canvas` with `swatch`
    pub fn handle(&mut self, event: PointerEvent, canvas: &mut Canvas, swatch: Swatch) {
        match (self.phase, event) {
            (_, PointerEvent::Down(pos)) => {
                draw_point(canvas, pos, swatch.stroke_width, swatch.color);
                self.phase = Phase::Stroking { last: pos };
            }
            (Phase::Stroking { last }, PointerEvent::Move(pos)) => {
                draw_segment(canvas, last, pos, swatch.stroke_width, swatch.color);
                self.phase = Phase::Stroking { last: pos };
            }
            (Phase::Idle, PointerEvent::Move(_)) => {}
            (_, PointerEvent::Up | PointerEvent::Leave) => {
                self.phase = Phase::Idle;
            }
        }
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::canvas::Color;

    fn test_swatch() -> Swatch {
        Swatch {
            color: Color::BLACK,
            stroke_width: 1,
        }
    }

    #[test]
    fn test_move_without_down_draws_nothing() {
        let mut canvas = Canvas::new(40, 40).unwrap();
        let mut router = InputRouter::new();

        router.handle(PointerEvent::Move(Point { x: 10, y: 10 }), &mut canvas, test_swatch());
        router.handle(PointerEvent::Move(Point { x: 30, y: 30 }), &mut canvas, test_swatch());

        assert!(!router.is_stroking());
        assert!(canvas.pixels().iter().all(|&px| px == Color::WHITE));
    }

    #[test]
    fn test_down_draws_a_single_point() {
        let mut canvas = Canvas::new(40, 40).unwrap();
        let mut router = InputRouter::new();

        router.handle(PointerEvent::Down(Point { x: 7, y: 9 }), &mut canvas, test_swatch());

        assert!(router.is_stroking());
        assert_eq!(canvas.get_pixel(7, 9).unwrap(), Color::BLACK);
    }

    #[test]
    fn test_drag_draws_a_continuous_stroke() {
        let mut canvas = Canvas::new(40, 40).unwrap();
        let mut router = InputRouter::new();

        router.handle(PointerEvent::Down(Point { x: 5, y: 20 }), &mut canvas, test_swatch());
        router.handle(PointerEvent::Move(Point { x: 20, y: 20 }), &mut canvas, test_swatch());
        router.handle(PointerEvent::Move(Point { x: 35, y: 20 }), &mut canvas, test_swatch());
        router.handle(PointerEvent::Up, &mut canvas, test_swatch());

        for x in 5..=35 {
            assert_eq!(canvas.get_pixel(x, 20).unwrap(), Color::BLACK, "gap at column {}", x);
        }
        assert!(!router.is_stroking());
    }

    #[test]
    fn test_strokes_do_not_join_after_up() {
        let mut canvas = Canvas::new(40, 40).unwrap();
        let mut router = InputRouter::new();

        router.handle(PointerEvent::Down(Point { x: 5, y: 5 }), &mut canvas, test_swatch());
        router.handle(PointerEvent::Up, &mut canvas, test_swatch());
        router.handle(PointerEvent::Down(Point { x: 35, y: 35 }), &mut canvas, test_swatch());

        // the midpoint between the strokes must not have been painted
        assert_eq!(canvas.get_pixel(20, 20).unwrap(), Color::WHITE);
    }

    #[test]
    fn test_leave_ends_the_stroke() {
        let mut canvas = Canvas::new(40, 40).unwrap();
        let mut router = InputRouter::new();

        router.handle(PointerEvent::Down(Point { x: 5, y: 5 }), &mut canvas, test_swatch());
        router.handle(PointerEvent::Leave, &mut canvas, test_swatch());
        assert!(!router.is_stroking());

        router.handle(PointerEvent::Move(Point { x: 30, y: 5 }), &mut canvas, test_swatch());
        assert_eq!(canvas.get_pixel(20, 5).unwrap(), Color::WHITE);
    }
}
