// File: crates/crosshair-core/src/host.rs
// Summary: Collaborator contract the crosshair consumes from the plotting host.

use crate::point::AxisPoint;
use crate::plugin::PointerEventKind;
use crate::types::{Offset, PixelPoint};

/// The plotting host as seen by overlay plugins.
///
/// Pixel coordinates are relative to the drawing area; the host owns axis
/// scaling, layout and redraw scheduling.
pub trait PlotHost {
    /// Data space to pixel space. Components the point does not address may be non-finite.
    fn data_to_pixel(&self, point: &AxisPoint) -> PixelPoint;
    /// Pixel space to data space, one value per host axis.
    fn pixel_to_data(&self, pixel: PixelPoint) -> AxisPoint;

    /// Drawing area width in pixels.
    fn width(&self) -> f64;
    /// Drawing area height in pixels.
    fn height(&self) -> f64;

    /// Offset of the drawing area within the canvas.
    fn plot_offset(&self) -> Offset;
    /// Offset of the canvas within the page, for translating pointer events.
    fn surface_offset(&self) -> Offset;

    /// Whether a rectangular selection is in progress. `None` when the host has
    /// no selection support, which callers treat as "no selection".
    fn selection_active(&self) -> Option<bool> {
        None
    }

    /// Schedule an overlay redraw. Hosts may coalesce requests.
    fn request_redraw(&mut self);
}

/// Handle for one pointer-event binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Event-binding points on the host's input surface.
pub trait EventHub {
    fn bind(&mut self, kind: PointerEventKind) -> SubscriptionId;
    fn unbind(&mut self, id: SubscriptionId);
}
