// File: crates/crosshair-core/src/plot.rs
// Summary: StaticPlot, a fixed-layout host with named axes that drives overlay plugins headlessly.

use tracing::warn;

use crate::axis::Axis;
use crate::host::{EventHub, PlotHost, SubscriptionId};
use crate::plugin::{PlotPlugin, PointerEvent, PointerEventKind};
use crate::point::{AxisKey, AxisPoint};
use crate::surface::DrawingSurface;
use crate::types::{Insets, Offset, PixelPoint, HEIGHT, WIDTH};

/// A plot whose layout and axis ranges are fixed at construction.
///
/// Axis `n` (1-based) of each direction answers to the key `xn`/`yn`; the first
/// axis with a value in a point decides that pixel component.
#[derive(Clone, Debug)]
pub struct StaticPlot {
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub insets: Insets,
    /// Canvas position within the page.
    pub page_offset: Offset,
    pub x_axes: Vec<Axis>,
    pub y_axes: Vec<Axis>,
    /// `None` models a host without selection support.
    pub selection: Option<bool>,
    redraws: usize,
    bindings: Vec<(SubscriptionId, PointerEventKind)>,
    next_binding: u64,
}

impl Default for StaticPlot {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

impl StaticPlot {
    pub fn new(canvas_width: i32, canvas_height: i32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            insets: Insets::default(),
            page_offset: Offset::default(),
            x_axes: vec![Axis::default_x()],
            y_axes: vec![Axis::default_y()],
            selection: None,
            redraws: 0,
            bindings: Vec::new(),
            next_binding: 0,
        }
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    pub fn with_page_offset(mut self, left: f64, top: f64) -> Self {
        self.page_offset = Offset::new(left, top);
        self
    }

    /// Replace the primary axes.
    pub fn with_axes(mut self, x: Axis, y: Axis) -> Self {
        self.x_axes = vec![x];
        self.y_axes = vec![y];
        self
    }

    /// Append a secondary x axis (`x2`, `x3`, ...).
    pub fn with_x_axis(mut self, axis: Axis) -> Self {
        self.x_axes.push(axis);
        self
    }

    /// Append a secondary y axis (`y2`, `y3`, ...).
    pub fn with_y_axis(mut self, axis: Axis) -> Self {
        self.y_axes.push(axis);
        self
    }

    pub fn set_selection(&mut self, active: Option<bool>) {
        self.selection = active;
    }

    /// Redraw requests received so far.
    pub fn redraw_count(&self) -> usize {
        self.redraws
    }

    /// Report and reset pending redraw requests; coalesces them into one frame.
    pub fn take_redraw(&mut self) -> bool {
        let pending = self.redraws > 0;
        self.redraws = 0;
        pending
    }

    pub fn is_bound(&self, kind: PointerEventKind) -> bool {
        self.bindings.iter().any(|(_, k)| *k == kind)
    }

    /// Page coordinates of a drawing-area pixel, as a pointer event would report them.
    pub fn pixel_to_page(&self, pixel: PixelPoint) -> (f64, f64) {
        let o = self.surface_offset();
        (pixel.left + o.left, pixel.top + o.top)
    }

    /// Deliver a pointer event to `plugin` if its kind is currently bound.
    /// Returns whether the event was delivered.
    pub fn dispatch(&mut self, evt: &PointerEvent, plugin: &mut dyn PlotPlugin) -> bool {
        if !self.is_bound(evt.kind()) {
            return false;
        }
        plugin.handle_event(evt, self);
        true
    }

    /// Run one overlay pass of `plugin` onto `surface`.
    pub fn draw_overlay(&self, plugin: &dyn PlotPlugin, surface: &mut dyn DrawingSurface) {
        plugin.draw_overlay(self, surface);
    }

    fn resolve(axes: &[Axis], key: fn(u8) -> AxisKey, point: &AxisPoint) -> Option<(usize, f64)> {
        axes.iter()
            .enumerate()
            .find_map(|(i, _)| point.get(key(i as u8 + 1)).map(|v| (i, v)))
    }
}

impl PlotHost for StaticPlot {
    fn data_to_pixel(&self, point: &AxisPoint) -> PixelPoint {
        let left = match Self::resolve(&self.x_axes, AxisKey::x, point) {
            Some((i, v)) => self.x_axes[i].normalize(v) * self.width(),
            None => {
                warn!("point has no value for any x axis");
                f64::NAN
            }
        };
        let top = match Self::resolve(&self.y_axes, AxisKey::y, point) {
            Some((i, v)) => (1.0 - self.y_axes[i].normalize(v)) * self.height(),
            None => {
                warn!("point has no value for any y axis");
                f64::NAN
            }
        };
        PixelPoint::new(left, top)
    }

    fn pixel_to_data(&self, pixel: PixelPoint) -> AxisPoint {
        let w = self.width().max(1.0);
        let h = self.height().max(1.0);
        let xs = self.x_axes.iter().enumerate().map(|(i, a)| {
            (AxisKey::x(i as u8 + 1), a.denormalize(pixel.left / w))
        });
        let ys = self.y_axes.iter().enumerate().map(|(i, a)| {
            (AxisKey::y(i as u8 + 1), a.denormalize(1.0 - pixel.top / h))
        });
        xs.chain(ys).collect()
    }

    fn width(&self) -> f64 {
        (self.canvas_width as f64 - self.insets.hsum() as f64).max(0.0)
    }

    fn height(&self) -> f64 {
        (self.canvas_height as f64 - self.insets.vsum() as f64).max(0.0)
    }

    fn plot_offset(&self) -> Offset {
        Offset::new(self.insets.left as f64, self.insets.top as f64)
    }

    /// Pointer events are translated into drawing-area pixels, so the offset
    /// includes both the canvas position and the plot margins.
    fn surface_offset(&self) -> Offset {
        Offset::new(
            self.page_offset.left + self.insets.left as f64,
            self.page_offset.top + self.insets.top as f64,
        )
    }

    fn selection_active(&self) -> Option<bool> {
        self.selection
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }
}

impl EventHub for StaticPlot {
    fn bind(&mut self, kind: PointerEventKind) -> SubscriptionId {
        self.next_binding += 1;
        let id = SubscriptionId(self.next_binding);
        self.bindings.push((id, kind));
        id
    }

    fn unbind(&mut self, id: SubscriptionId) {
        self.bindings.retain(|(b, _)| *b != id);
    }
}
