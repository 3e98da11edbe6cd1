//! The range selector as an egui widget.

use egui::{CornerRadius, CursorIcon, Pos2, Sense, Ui, vec2};
use kurbo::Point;
use rangesel_core::{
    ConfigError, DragRegion, GestureTracker, RangeSelector, RatioUpdate, SelectorConfig, Track,
    drag,
};

use crate::{sizing, theme};
use crate::surface::EguiSurface;

/// What happened to the selector during one frame.
pub struct RangeSelectorResponse {
    /// The egui response for the track area.
    pub response: egui::Response,
    /// The last ratio update produced this frame, if the user dragged.
    pub update: Option<RatioUpdate>,
}

/// A range selector that fills the available width.
///
/// The view owns its [`RangeSelector`]; listeners registered on it are
/// notified from inside [`show`](Self::show).
pub struct RangeSelectorView {
    selector: RangeSelector<EguiSurface>,
    tracker: GestureTracker,
    height: f32,
}

impl RangeSelectorView {
    pub fn new(config: SelectorConfig) -> Result<Self, ConfigError> {
        let surface = EguiSurface::from_config(&config);
        Ok(Self {
            selector: RangeSelector::new(config, surface)?,
            tracker: GestureTracker::new(),
            height: sizing::TRACK_HEIGHT,
        })
    }

    /// Set the track height.
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn selector(&self) -> &RangeSelector<EguiSurface> {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut RangeSelector<EguiSurface> {
        &mut self.selector
    }

    /// Lay out, handle input and paint for this frame.
    pub fn show(&mut self, ui: &mut Ui) -> RangeSelectorResponse {
        let desired = vec2(ui.available_width(), self.height);
        let (rect, response) = ui.allocate_exact_size(desired, Sense::drag());

        let track = Track::new(rect.width() as f64, rect.height() as f64);
        if track != self.selector.track() {
            log::debug!("Range selector resized to {}x{}", track.width, track.height);
            self.selector.layout(track);
        }

        let to_local = |pos: Pos2| {
            Point::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64)
        };
        let mut update = None;

        if response.drag_started() {
            // Classify by where the press happened, not where the drag
            // threshold was crossed.
            let origin = ui
                .input(|i| i.pointer.press_origin())
                .or(response.interact_pointer_pos());
            if let Some(origin) = origin {
                let event = self.tracker.pointer_down(to_local(origin));
                self.selector.handle_gesture(event);
            }
        }
        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some(event) = self.tracker.pointer_move(to_local(pos)) {
                    update = self.selector.handle_gesture(event).or(update);
                }
            }
        }
        if response.drag_stopped() {
            let event = match response.interact_pointer_pos() {
                Some(pos) => self.tracker.pointer_up(to_local(pos)),
                None => self.tracker.cancel(),
            };
            if let Some(event) = event {
                self.selector.handle_gesture(event);
            }
        }

        if let Some(icon) = self.cursor_icon(&response, to_local) {
            ui.ctx().set_cursor_icon(icon);
        }

        if ui.is_rect_visible(rect) {
            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, CornerRadius::ZERO, theme::TRACK_BG);
            self.selector.surface().paint(&painter, rect.min);
        }

        RangeSelectorResponse { response, update }
    }

    fn cursor_icon(
        &self,
        response: &egui::Response,
        to_local: impl Fn(Pos2) -> Point,
    ) -> Option<CursorIcon> {
        let region = match self.selector.active_region() {
            Some(region) => region,
            None => {
                let pos = response.hover_pos()?;
                drag::classify(
                    to_local(pos),
                    self.selector.start_handle(),
                    self.selector.end_handle(),
                )
            }
        };
        match region {
            DragRegion::Start | DragRegion::End => Some(CursorIcon::ResizeHorizontal),
            DragRegion::Middle if self.selector.is_dragging() => Some(CursorIcon::Grabbing),
            DragRegion::Middle => Some(CursorIcon::Grab),
            DragRegion::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(view: &mut RangeSelectorView) {
        run_events(&egui::Context::default(), view, Vec::new());
    }

    fn run_events(
        ctx: &egui::Context,
        view: &mut RangeSelectorView,
        events: Vec<egui::Event>,
    ) -> Option<egui::Rect> {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(Pos2::ZERO, vec2(400.0, 200.0))),
            events,
            ..Default::default()
        };
        let mut track_rect = None;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                track_rect = Some(view.show(ui).response.rect);
            });
        });
        track_rect
    }

    fn button(pos: Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    #[test]
    fn test_first_frame_lays_out_full_range() {
        let mut view = RangeSelectorView::new(SelectorConfig::default()).unwrap();
        assert_eq!(view.selector().ratios(), None);

        run_frame(&mut view);

        let track = view.selector().track();
        assert!(track.width > 0.0);
        assert!((track.height - sizing::TRACK_HEIGHT as f64).abs() < 1e-6);
        assert_eq!(view.selector().ratios(), Some((0.0, 1.0)));
    }

    #[test]
    fn test_selection_survives_same_size_frames() {
        let mut view = RangeSelectorView::new(SelectorConfig::default()).unwrap();
        run_frame(&mut view);
        view.selector_mut().set_ratios(0.1, 0.9).unwrap();

        run_frame(&mut view);

        let (start, end) = view.selector().ratios().unwrap();
        assert!((start - 0.1).abs() < 1e-9);
        assert!((end - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_pointer_drag_moves_start_handle() {
        let ctx = egui::Context::default();
        let mut view = RangeSelectorView::new(SelectorConfig::default()).unwrap();
        let rect = run_events(&ctx, &mut view, Vec::new()).unwrap();

        // Just inside the start handle's stripe.
        let press = Pos2::new(rect.min.x + 4.0, rect.center().y);
        let release = press + vec2(60.0, 0.0);
        run_events(&ctx, &mut view, vec![egui::Event::PointerMoved(press)]);
        run_events(&ctx, &mut view, vec![button(press, true)]);
        run_events(&ctx, &mut view, vec![egui::Event::PointerMoved(press + vec2(30.0, 0.0))]);
        run_events(&ctx, &mut view, vec![egui::Event::PointerMoved(release)]);
        assert_eq!(view.selector().active_region(), Some(DragRegion::Start));

        run_events(&ctx, &mut view, vec![button(release, false)]);
        run_events(&ctx, &mut view, Vec::new());

        assert!(!view.selector().is_dragging());
        let (start, end) = view.selector().ratios().unwrap();
        let expected = 60.0 / view.selector().geometry().span();
        assert!((start - expected).abs() < 1e-3, "start ratio {start}, expected {expected}");
        assert_eq!(end, 1.0);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = SelectorConfig::default().with_min_duration_ratio(2.0);
        assert!(RangeSelectorView::new(config).is_err());
    }
}
