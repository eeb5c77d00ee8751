// File: crates/crosshair-core/src/crosshair.rs
// Summary: Crosshair controller: position/lock state machine, pointer reactions and overlay pass.

use tracing::{debug, trace};

use crate::config::{CrosshairMode, CrosshairOptions};
use crate::geometry::{clamp_coord, stroke_adjustment};
use crate::host::{EventHub, PlotHost};
use crate::label::place_label;
use crate::plugin::{PlotPlugin, PointerEvent, PointerEventKind, Subscriptions};
use crate::point::AxisPoint;
use crate::surface::{DrawingSurface, LineJoin};
use crate::types::{PixelPoint, HIDDEN};

/// Name of the notification fired when pointer input moves or hides the crosshair.
pub const CROSSHAIR_CHANGED: &str = "crosshair.setCrosshair";

/// Crosshair position in drawing-area pixels plus its lock and label flags.
///
/// `x == HIDDEN` means the crosshair is not shown; `y` keeps its last value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrosshairState {
    pub x: f64,
    pub y: f64,
    pub locked: bool,
    pub show_label: bool,
}

impl Default for CrosshairState {
    fn default() -> Self {
        Self { x: HIDDEN, y: HIDDEN, locked: false, show_label: true }
    }
}

impl CrosshairState {
    pub fn is_visible(&self) -> bool {
        self.x != HIDDEN
    }
}

/// Receives the state and the host on every crosshair-changed notification.
pub type ChangeListener = Box<dyn FnMut(&CrosshairState, &dyn PlotHost)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Owns one plot's crosshair. API calls mutate state directly; pointer events
/// arrive through [`PlotPlugin::handle_event`] and are ignored while locked.
pub struct CrosshairController {
    options: CrosshairOptions,
    state: CrosshairState,
    subscriptions: Subscriptions,
    listeners: Vec<(ListenerId, ChangeListener)>,
    next_listener: u64,
}

impl CrosshairController {
    pub fn new(options: CrosshairOptions) -> Self {
        Self {
            options,
            state: CrosshairState::default(),
            subscriptions: Subscriptions::new(),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn options(&self) -> &CrosshairOptions { &self.options }
    pub fn mode(&self) -> CrosshairMode { self.options.mode }
    pub fn state(&self) -> &CrosshairState { &self.state }

    /// Move the crosshair to a data-space position, or hide it with `None`.
    /// Out-of-range positions are clamped to the drawing area. Ignores the lock.
    pub fn set_crosshair(&mut self, pos: Option<&AxisPoint>, host: &mut dyn PlotHost) {
        match pos {
            None => self.state.x = HIDDEN,
            Some(pos) => {
                let px = host.data_to_pixel(pos);
                self.state.x = clamp_coord(px.left, host.width());
                self.state.y = clamp_coord(px.top, host.height());
            }
        }
        debug!(x = self.state.x, y = self.state.y, "crosshair set");
        host.request_redraw();
    }

    pub fn clear_crosshair(&mut self, host: &mut dyn PlotHost) {
        self.set_crosshair(None, host);
    }

    /// Freeze the crosshair against pointer input, optionally moving it first.
    pub fn lock_crosshair(&mut self, pos: Option<&AxisPoint>, host: &mut dyn PlotHost) {
        if pos.is_some() {
            self.set_crosshair(pos, host);
        }
        self.state.locked = true;
        debug!("crosshair locked");
    }

    pub fn unlock_crosshair(&mut self) {
        self.state.locked = false;
        debug!("crosshair unlocked");
    }

    pub fn is_locked_crosshair(&self) -> bool {
        self.state.locked
    }

    pub fn show_label_crosshair(&mut self, host: &mut dyn PlotHost) {
        self.state.show_label = true;
        host.request_redraw();
    }

    pub fn hide_label_crosshair(&mut self, host: &mut dyn PlotHost) {
        self.state.show_label = false;
        host.request_redraw();
    }

    /// Replace the whole state, unchecked.
    pub fn set_raw_crosshair(&mut self, state: CrosshairState, host: &mut dyn PlotHost) {
        self.state = state;
        debug!(?state, "crosshair state replaced");
        host.request_redraw();
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&CrosshairState, &dyn PlotHost) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(l, _)| *l != id);
        self.listeners.len() != before
    }

    fn notify_changed(&mut self, host: &dyn PlotHost) {
        let state = self.state;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&state, host);
        }
    }

    fn on_pointer_leave(&mut self, host: &mut dyn PlotHost) {
        if self.state.locked {
            return;
        }
        if self.state.is_visible() {
            self.state.x = HIDDEN;
            host.request_redraw();
        }
        trace!("pointer left plot");
        self.notify_changed(host);
    }

    fn on_pointer_move(&mut self, page_x: f64, page_y: f64, host: &mut dyn PlotHost) {
        if self.state.locked {
            return;
        }
        if host.selection_active().unwrap_or(false) {
            // selection owns the overlay while it is dragged
            self.state.x = HIDDEN;
            return;
        }
        let offset = host.surface_offset();
        self.state.x = clamp_coord(page_x - offset.left, host.width());
        self.state.y = clamp_coord(page_y - offset.top, host.height());
        trace!(x = self.state.x, y = self.state.y, "pointer moved");
        self.notify_changed(host);
        host.request_redraw();
    }

    fn draw_lines_and_label(&self, host: &dyn PlotHost, surface: &mut dyn DrawingSurface) {
        let c = &self.options;
        let st = self.state;
        let adj = stroke_adjustment(c.line_width);

        surface.set_stroke_color(c.color);
        surface.set_line_width(c.line_width);
        surface.set_line_join(LineJoin::Round);
        if c.line_dashed {
            surface.set_line_dash(&[c.line_width * 2.0]);
        }

        surface.begin_path();
        if c.mode.has_vertical() {
            let draw_x = st.x.floor() + adj;
            surface.move_to(draw_x, 0.0);
            surface.line_to(draw_x, host.height());
        }
        if c.mode.has_horizontal() {
            let draw_y = st.y.floor() + adj;
            surface.move_to(0.0, draw_y);
            surface.line_to(host.width(), draw_y);
        }
        surface.stroke();

        if !st.show_label {
            return;
        }
        let point = host.pixel_to_data(PixelPoint::new(st.x, st.y));
        let text = (c.label)(&point);
        if text.is_empty() {
            return;
        }

        // The horizontal flip always keys on x; y only matters with a horizontal line.
        let x_offset = st.x;
        let y_offset = if c.mode.has_horizontal() { st.y } else { 0.0 };

        surface.set_font(&c.font);
        surface.set_fill_color(c.text_color);
        let width = surface.measure_text(&text);
        let placement = place_label(x_offset, y_offset, width, c.padding, c.mode.has_horizontal());
        surface.set_text_align(placement.align);
        surface.set_text_baseline(placement.baseline);
        surface.fill_text(&text, placement.x, placement.y);
    }
}

impl PlotPlugin for CrosshairController {
    fn id(&self) -> &'static str { "crosshair" }

    fn bind_events(&mut self, events: &mut dyn EventHub) {
        if !self.options.mode.is_enabled() {
            return;
        }
        self.subscriptions.bind(events, PointerEventKind::Leave);
        self.subscriptions.bind(events, PointerEventKind::Move);
    }

    fn handle_event(&mut self, evt: &PointerEvent, host: &mut dyn PlotHost) {
        if !self.subscriptions.contains(evt.kind()) {
            return;
        }
        match *evt {
            PointerEvent::Move { page_x, page_y } => self.on_pointer_move(page_x, page_y, host),
            PointerEvent::Leave => self.on_pointer_leave(host),
        }
    }

    fn draw_overlay(&self, host: &dyn PlotHost, surface: &mut dyn DrawingSurface) {
        if !self.options.mode.is_enabled() {
            return;
        }
        let offset = host.plot_offset();
        surface.save();
        surface.translate(offset.left, offset.top);
        if self.state.is_visible() {
            trace!(x = self.state.x, y = self.state.y, "drawing crosshair");
            self.draw_lines_and_label(host, surface);
        }
        surface.restore();
    }

    fn shutdown(&mut self, events: &mut dyn EventHub) {
        self.subscriptions.release(events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::SubscriptionId;
    use crate::point::AxisKey;
    use crate::surface::{DrawCommand, RecordingSurface, TextAlign, TextBaseline};
    use crate::types::Offset;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Identity-scaled host: data units are pixels on a 200x100 area.
    #[derive(Default)]
    struct PixelHost {
        redraws: usize,
        selecting: Option<bool>,
        next: u64,
        bound: Vec<SubscriptionId>,
    }

    impl PlotHost for PixelHost {
        fn data_to_pixel(&self, p: &AxisPoint) -> PixelPoint {
            PixelPoint::new(p.x().unwrap_or(f64::NAN), p.y().unwrap_or(f64::NAN))
        }
        fn pixel_to_data(&self, px: PixelPoint) -> AxisPoint {
            AxisPoint::xy(px.left, px.top)
        }
        fn width(&self) -> f64 { 200.0 }
        fn height(&self) -> f64 { 100.0 }
        fn plot_offset(&self) -> Offset { Offset::new(30.0, 20.0) }
        fn surface_offset(&self) -> Offset { Offset::new(8.0, 4.0) }
        fn selection_active(&self) -> Option<bool> { self.selecting }
        fn request_redraw(&mut self) { self.redraws += 1; }
    }

    impl EventHub for PixelHost {
        fn bind(&mut self, _kind: PointerEventKind) -> SubscriptionId {
            self.next += 1;
            self.bound.push(SubscriptionId(self.next));
            SubscriptionId(self.next)
        }
        fn unbind(&mut self, id: SubscriptionId) {
            self.bound.retain(|b| *b != id);
        }
    }

    fn bound(mode: CrosshairMode, host: &mut PixelHost) -> CrosshairController {
        let mut c = CrosshairController::new(CrosshairOptions::default().with_mode(mode));
        c.bind_events(host);
        c
    }

    #[test]
    fn starts_hidden_with_label_on() {
        let c = CrosshairController::new(CrosshairOptions::default());
        assert!(!c.state().is_visible());
        assert!(c.state().show_label);
        assert!(!c.is_locked_crosshair());
    }

    #[test]
    fn pointer_move_subtracts_surface_offset() {
        let mut host = PixelHost::default();
        let mut c = bound(CrosshairMode::Both, &mut host);
        c.handle_event(&PointerEvent::Move { page_x: 58.0, page_y: 44.0 }, &mut host);
        assert_eq!((c.state().x, c.state().y), (50.0, 40.0));
        assert_eq!(host.redraws, 1);
    }

    #[test]
    fn pointer_move_clamps_to_area() {
        let mut host = PixelHost::default();
        let mut c = bound(CrosshairMode::Both, &mut host);
        c.handle_event(&PointerEvent::Move { page_x: -50.0, page_y: 900.0 }, &mut host);
        assert_eq!((c.state().x, c.state().y), (0.0, 100.0));
    }

    #[test]
    fn leave_notifies_even_when_hidden() {
        let mut host = PixelHost::default();
        let mut c = bound(CrosshairMode::Vertical, &mut host);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        c.subscribe(move |st, _| sink.borrow_mut().push(*st));

        c.handle_event(&PointerEvent::Leave, &mut host);
        assert_eq!(host.redraws, 0);
        assert_eq!(seen.borrow().len(), 1);
        assert!(!seen.borrow()[0].is_visible());
    }

    #[test]
    fn unsubscribed_listener_is_silent() {
        let mut host = PixelHost::default();
        let mut c = bound(CrosshairMode::Both, &mut host);
        let hits = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&hits);
        let id = c.subscribe(move |_, _| *sink.borrow_mut() += 1);
        assert!(c.unsubscribe(id));
        assert!(!c.unsubscribe(id));
        c.handle_event(&PointerEvent::Move { page_x: 10.0, page_y: 10.0 }, &mut host);
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn mode_none_binds_nothing() {
        let mut host = PixelHost::default();
        let mut c = bound(CrosshairMode::None, &mut host);
        assert!(host.bound.is_empty());
        c.handle_event(&PointerEvent::Move { page_x: 58.0, page_y: 44.0 }, &mut host);
        assert!(!c.state().is_visible());
        c.shutdown(&mut host);
    }

    #[test]
    fn set_crosshair_without_axis_value_lands_on_origin() {
        let mut host = PixelHost::default();
        let mut c = bound(CrosshairMode::Both, &mut host);
        c.set_crosshair(Some(&AxisPoint::new().with(AxisKey::x(2), 5.0)), &mut host);
        assert_eq!((c.state().x, c.state().y), (0.0, 0.0));
    }

    #[test]
    fn dashed_lines_use_double_width_segments() {
        let host = PixelHost::default();
        let mut opts = CrosshairOptions::default().with_mode(CrosshairMode::Vertical);
        opts.line_dashed = true;
        opts.line_width = 3.0;
        let mut c = CrosshairController::new(opts);
        c.state = CrosshairState { x: 12.7, y: 5.0, ..CrosshairState::default() };
        let mut s = RecordingSurface::new();
        c.draw_overlay(&host, &mut s);
        assert!(s.commands().contains(&DrawCommand::LineDash(vec![6.0])));
        assert!(s.commands().contains(&DrawCommand::LineJoin(LineJoin::Round)));
        assert_eq!(s.segments(), vec![((12.5, 0.0), (12.5, 100.0))]);
    }

    #[test]
    fn vertical_only_label_ignores_y() {
        let host = PixelHost::default();
        let opts = CrosshairOptions::default()
            .with_mode(CrosshairMode::Vertical)
            .with_label(|p| format!("{:.0}", p.x().unwrap_or_default()));
        let mut c = CrosshairController::new(opts);
        c.state = CrosshairState { x: 150.0, y: 5.0, ..CrosshairState::default() };
        let mut s = RecordingSurface::new();
        c.draw_overlay(&host, &mut s);
        let text = s.texts().next().cloned();
        assert_eq!(
            text,
            Some(DrawCommand::FillText {
                text: "150".into(),
                x: 146.0,
                y: 10.0,
                align: TextAlign::Right,
                baseline: TextBaseline::Alphabetic,
            })
        );
    }
}
