//! Per-gesture drag state machine.
//!
//! A gesture is classified once, when it begins, by where the first touch
//! landed. Every following change is applied relative to the handle positions
//! captured at that moment, so the handles track the finger rather than
//! accumulating per-event deltas.

use kurbo::{Point, Rect};

use crate::geometry::{Geometry, clamp};
use crate::handle::Handle;

/// What a gesture grabbed when it began.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragRegion {
    /// The start handle.
    Start,
    /// The end handle.
    End,
    /// The span between the handles; moves the whole selection.
    Middle,
    /// Nothing draggable. The rest of the gesture is ignored.
    None,
}

/// Which handles a change event moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMove {
    Start,
    End,
    Both,
}

/// State captured when a gesture begins.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    region: DragRegion,
    /// Position of the dragged handle (the start handle for middle drags).
    start_x: f64,
    /// Selection width, held fixed for middle drags.
    distance: f64,
    /// Translation seen by the previous change event.
    last_translation: f64,
}

/// Tracks the single active drag session, if any.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    session: Option<DragSession>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is in progress (including one that grabbed nothing).
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Region grabbed by the active gesture.
    pub fn region(&self) -> Option<DragRegion> {
        self.session.map(|s| s.region)
    }

    /// Start a new session, classifying the touch-down `location`.
    ///
    /// Hit testing runs in order: start handle, end handle, the span between
    /// the handles' inner edges. The first match wins, so a start handle hit
    /// area that overlaps the end handle takes priority.
    pub fn begin(&mut self, location: Point, start: &Handle, end: &Handle) -> DragRegion {
        let region = classify(location, start, end);
        let session = match region {
            DragRegion::Start => DragSession {
                region,
                start_x: start.left,
                distance: 0.0,
                last_translation: 0.0,
            },
            DragRegion::End => DragSession {
                region,
                start_x: end.left,
                distance: 0.0,
                last_translation: 0.0,
            },
            DragRegion::Middle => DragSession {
                region,
                start_x: start.left,
                distance: end.left - start.left,
                last_translation: 0.0,
            },
            DragRegion::None => DragSession {
                region,
                start_x: 0.0,
                distance: 0.0,
                last_translation: 0.0,
            },
        };
        self.session = Some(session);
        region
    }

    /// Apply a change with `translation` measured since the gesture began.
    ///
    /// Returns which handles were repositioned, or `None` if there is no
    /// session or it grabbed nothing.
    pub fn update(
        &mut self,
        translation: f64,
        start: &mut Handle,
        end: &mut Handle,
        geometry: &Geometry,
    ) -> Option<DragMove> {
        let session = self.session.as_mut()?;
        match session.region {
            DragRegion::Start => {
                // Never let the minimum length push a handle past a bound.
                let upper = (end.left - geometry.min_duration_length()).max(geometry.start_bound());
                start.left = clamp(session.start_x + translation, geometry.start_bound(), upper);
                Some(DragMove::Start)
            }
            DragRegion::End => {
                let lower = (start.left + geometry.min_duration_length()).min(geometry.end_bound());
                end.left = clamp(session.start_x + translation, lower, geometry.end_bound());
                Some(DragMove::End)
            }
            DragRegion::Middle => {
                drag_middle(session, translation, start, end, geometry);
                Some(DragMove::Both)
            }
            DragRegion::None => None,
        }
    }

    /// End (or cancel) the active session. Returns the region it had grabbed.
    pub fn finish(&mut self) -> Option<DragRegion> {
        self.session.take().map(|s| s.region)
    }
}

/// Hit test the touch-down point against the handles and the middle span.
pub fn classify(location: Point, start: &Handle, end: &Handle) -> DragRegion {
    if start.contains(location) {
        return DragRegion::Start;
    }
    if end.contains(location) {
        return DragRegion::End;
    }
    let middle = Rect::new(start.right(), 0.0, end.left, start.height());
    if middle.contains(location) {
        DragRegion::Middle
    } else {
        DragRegion::None
    }
}

/// Move both handles together, keeping their distance fixed.
///
/// Direction comes from comparing against the previous event's translation,
/// not against zero: reversing mid-gesture must move the selection back from
/// where it is now instead of pinning it at the far edge of its travel.
fn drag_middle(
    session: &mut DragSession,
    translation: f64,
    start: &mut Handle,
    end: &mut Handle,
    geometry: &Geometry,
) {
    let moving_right = translation - session.last_translation > 0.0;
    session.last_translation = translation;

    if moving_right {
        // End leads so it cannot pass the right bound.
        let new_end = session.start_x + session.distance + translation;
        let lower = (start.left + session.distance).min(geometry.end_bound());
        end.left = clamp(new_end, lower, geometry.end_bound());
        start.left = end.left - session.distance;
    } else {
        let new_start = session.start_x + translation;
        let upper = (end.left - session.distance).max(geometry.start_bound());
        start.left = clamp(new_start, geometry.start_bound(), upper);
        end.left = start.left + session.distance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectorConfig;
    use crate::geometry::Track;
    use crate::handle::HandleId;

    const EPS: f64 = 1e-9;

    struct Fixture {
        geometry: Geometry,
        start: Handle,
        end: Handle,
        drag: DragState,
    }

    impl Fixture {
        fn new(width: f64, min_ratio: f64) -> Self {
            let config = SelectorConfig::default().with_min_duration_ratio(min_ratio);
            let geometry = Geometry::new(Track::new(width, 50.0), &config);
            let mut start = Handle::new(HandleId::Start, &config);
            let mut end = Handle::new(HandleId::End, &config);
            start.set_frame(geometry.start_bound(), 50.0);
            end.set_frame(geometry.end_bound(), 50.0);
            Self {
                geometry,
                start,
                end,
                drag: DragState::new(),
            }
        }

        fn begin(&mut self, x: f64) -> DragRegion {
            self.drag.begin(Point::new(x, 25.0), &self.start, &self.end)
        }

        fn update(&mut self, dx: f64) -> Option<DragMove> {
            self.drag
                .update(dx, &mut self.start, &mut self.end, &self.geometry)
        }

        fn drag(&mut self, x: f64, dx: f64) {
            self.begin(x);
            self.update(dx);
            self.drag.finish();
        }
    }

    #[test]
    fn test_classify_order() {
        let mut f = Fixture::new(300.0, 0.5);
        assert_eq!(f.begin(0.0), DragRegion::Start);
        assert_eq!(f.begin(290.0), DragRegion::End);
        assert_eq!(f.begin(150.0), DragRegion::Middle);
        assert_eq!(f.begin(150.0 + 1000.0), DragRegion::None);
    }

    #[test]
    fn test_classify_below_track() {
        let mut f = Fixture::new(300.0, 0.5);
        // Within the handles' vertical margin but not the middle span.
        assert_eq!(f.drag.begin(Point::new(150.0, 55.0), &f.start, &f.end), DragRegion::None);
        assert_eq!(f.drag.begin(Point::new(5.0, 55.0), &f.start, &f.end), DragRegion::Start);
    }

    #[test]
    fn test_update_without_session() {
        let mut f = Fixture::new(300.0, 0.5);
        assert_eq!(f.update(50.0), None);
        assert!((f.start.left - f.geometry.start_bound()).abs() < EPS);
    }

    #[test]
    fn test_none_region_ignores_changes() {
        let mut f = Fixture::new(300.0, 0.5);
        f.begin(1000.0);
        assert!(f.drag.is_active());
        assert_eq!(f.update(50.0), None);
        assert_eq!(f.drag.finish(), Some(DragRegion::None));
        assert!(!f.drag.is_active());
    }

    #[test]
    fn test_start_drag_respects_min_length() {
        let mut f = Fixture::new(300.0, 0.5);
        f.begin(0.0);
        assert_eq!(f.update(100.0), Some(DragMove::Start));
        assert!((f.start.left - 82.5).abs() < EPS);

        f.update(250.0);
        let limit = f.end.left - f.geometry.min_duration_length();
        assert!((f.start.left - limit).abs() < EPS);
    }

    #[test]
    fn test_start_drag_respects_start_bound() {
        let mut f = Fixture::new(300.0, 0.5);
        f.begin(0.0);
        f.update(-80.0);
        assert!((f.start.left - f.geometry.start_bound()).abs() < EPS);
    }

    #[test]
    fn test_end_drag_respects_bounds() {
        let mut f = Fixture::new(300.0, 0.5);
        assert_eq!(f.begin(290.0), DragRegion::End);
        assert_eq!(f.update(40.0), Some(DragMove::End));
        assert!((f.end.left - f.geometry.end_bound()).abs() < EPS);

        f.update(-400.0);
        let limit = f.start.left + f.geometry.min_duration_length();
        assert!((f.end.left - limit).abs() < EPS);
    }

    #[test]
    fn test_changes_measured_from_session_start() {
        let mut f = Fixture::new(300.0, 0.2);
        f.begin(0.0);
        f.update(10.0);
        f.update(30.0);
        f.update(20.0);
        assert!((f.start.left - (f.geometry.start_bound() + 20.0)).abs() < EPS);
    }

    #[test]
    fn test_middle_drag_preserves_distance() {
        let mut f = Fixture::new(300.0, 0.2);
        f.drag(290.0, -150.0);
        let distance = f.end.left - f.start.left;

        assert_eq!(f.begin(80.0), DragRegion::Middle);
        for dx in [10.0, 40.0, 200.0, 180.0, -30.0, -300.0, 5.0] {
            assert_eq!(f.update(dx), Some(DragMove::Both));
            assert!((f.end.left - f.start.left - distance).abs() < EPS);
            assert!(f.start.left >= f.geometry.start_bound() - EPS);
            assert!(f.end.left <= f.geometry.end_bound() + EPS);
        }
    }

    #[test]
    fn test_middle_drag_reversal_continues_from_current_position() {
        let mut f = Fixture::new(300.0, 0.2);
        f.drag(290.0, -100.0);
        assert!((f.end.left - 177.5).abs() < EPS);

        f.begin(100.0);
        f.update(50.0);
        assert!((f.start.left - 32.5).abs() < EPS);
        assert!((f.end.left - 227.5).abs() < EPS);

        // Finger moves back 20 units.
        f.update(30.0);
        assert!((f.start.left - 12.5).abs() < EPS);
        assert!((f.end.left - 207.5).abs() < EPS);
    }

    #[test]
    fn test_middle_drag_stops_at_edges() {
        let mut f = Fixture::new(300.0, 0.2);
        f.drag(290.0, -100.0);
        f.begin(100.0);
        f.update(500.0);
        assert!((f.end.left - f.geometry.end_bound()).abs() < EPS);
        f.update(-500.0);
        assert!((f.start.left - f.geometry.start_bound()).abs() < EPS);
    }

    #[test]
    fn test_single_handle_limits_capped_to_bounds() {
        let mut f = Fixture::new(300.0, 0.2);
        f.drag(0.0, 500.0);
        // Minimum raised past what the current selection allows.
        f.geometry.set_min_duration_ratio(0.9);

        f.begin(290.0);
        f.update(5.0);
        assert!((f.end.left - f.geometry.end_bound()).abs() < EPS);
        f.drag.finish();

        assert_eq!(f.begin(f.start.left + 20.0), DragRegion::Start);
        f.update(-5.0);
        assert!(f.start.left >= f.geometry.start_bound() - EPS);
        assert!(f.start.left <= f.end.left);
    }

    #[test]
    fn test_full_selection_cannot_move() {
        let mut f = Fixture::new(300.0, 0.5);
        assert_eq!(f.begin(150.0), DragRegion::Middle);
        f.update(40.0);
        assert!((f.start.left - f.geometry.start_bound()).abs() < EPS);
        assert!((f.end.left - f.geometry.end_bound()).abs() < EPS);
    }
}
