// File: crates/crosshair-core/src/plugin.rs
// Summary: Overlay plugin trait and pointer events exchanged with the host.

use tracing::debug;

use crate::host::{EventHub, PlotHost, SubscriptionId};
use crate::surface::DrawingSurface;

/// Pointer notifications in page coordinates (canvas offset not yet removed).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move { page_x: f64, page_y: f64 },
    Leave,
}

impl PointerEvent {
    pub const fn kind(&self) -> PointerEventKind {
        match self {
            PointerEvent::Move { .. } => PointerEventKind::Move,
            PointerEvent::Leave => PointerEventKind::Leave,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Move,
    Leave,
}

/// Overlay drawn on top of a plot, wired into the host's hook points.
///
/// Hosts call `bind_events` once at init, `handle_event` for every pointer
/// event whose kind the plugin bound, `draw_overlay` once per redraw and
/// `shutdown` at teardown.
pub trait PlotPlugin {
    fn id(&self) -> &'static str;
    fn version(&self) -> &'static str { "1.0" }
    fn bind_events(&mut self, _events: &mut dyn EventHub) {}
    fn handle_event(&mut self, _evt: &PointerEvent, _host: &mut dyn PlotHost) {}
    fn draw_overlay(&self, host: &dyn PlotHost, surface: &mut dyn DrawingSurface);
    fn shutdown(&mut self, _events: &mut dyn EventHub) {}
}

/// Bindings acquired at init; `release` returns every one of them to the hub.
#[derive(Debug, Default)]
pub struct Subscriptions {
    bound: Vec<(PointerEventKind, SubscriptionId)>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, events: &mut dyn EventHub, kind: PointerEventKind) {
        let id = events.bind(kind);
        debug!(?kind, ?id, "bound pointer event");
        self.bound.push((kind, id));
    }

    pub fn contains(&self, kind: PointerEventKind) -> bool {
        self.bound.iter().any(|(k, _)| *k == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    pub fn release(&mut self, events: &mut dyn EventHub) {
        for (kind, id) in self.bound.drain(..) {
            events.unbind(id);
            debug!(?kind, ?id, "unbound pointer event");
        }
    }
}
