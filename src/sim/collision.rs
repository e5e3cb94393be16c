//! Collision tests between falling objects and the catcher
//!
//! Only the object's anchor x is tested against the catcher span, and the span
//! is open on both ends: an object exactly on a catcher edge is not caught.

use super::state::FallingObject;
use crate::tuning::Tuning;

/// Whether `obj` is touching the catcher whose left edge is `catcher_x`
pub fn hits_catcher(obj: &FallingObject, catcher_x: i32, tuning: &Tuning) -> bool {
    obj.y >= tuning.catcher_top()
        && catcher_x < obj.x
        && obj.x < catcher_x + tuning.catcher_width
}

/// Whether `obj` has left the visible area through the bottom edge
pub fn below_screen(obj: &FallingObject, tuning: &Tuning) -> bool {
    obj.y > tuning.screen_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ObjectKind;

    fn object(x: i32, y: i32) -> FallingObject {
        FallingObject {
            id: 1,
            x,
            y,
            kind: ObjectKind::Catch,
            radius: 15,
            speed: 5,
        }
    }

    #[test]
    fn test_hit_inside_span() {
        let tuning = Tuning::default();
        assert!(hits_catcher(&object(300, 460), 270, &tuning));
    }

    #[test]
    fn test_no_hit_above_catcher() {
        let tuning = Tuning::default();
        assert!(!hits_catcher(&object(300, 459), 270, &tuning));
    }

    #[test]
    fn test_edges_are_exclusive() {
        let tuning = Tuning::default();
        assert!(!hits_catcher(&object(270, 470), 270, &tuning));
        assert!(!hits_catcher(&object(370, 470), 270, &tuning));
        assert!(hits_catcher(&object(271, 470), 270, &tuning));
        assert!(hits_catcher(&object(369, 470), 270, &tuning));
    }

    #[test]
    fn test_still_catchable_below_screen() {
        // Collision wins over the off-screen check when both hold
        let tuning = Tuning::default();
        let obj = object(300, 485);
        assert!(hits_catcher(&obj, 270, &tuning));
        assert!(below_screen(&obj, &tuning));
    }

    #[test]
    fn test_below_screen_is_strict() {
        let tuning = Tuning::default();
        assert!(!below_screen(&object(10, 480), &tuning));
        assert!(below_screen(&object(10, 481), &tuning));
    }
}
