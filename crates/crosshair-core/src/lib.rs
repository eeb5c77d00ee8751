// File: crates/crosshair-core/src/lib.rs
// Summary: Core library entry point; exports the crosshair controller, host contract and overlay types.

pub mod axis;
pub mod config;
pub mod crosshair;
pub mod error;
pub mod geometry;
pub mod host;
pub mod label;
pub mod plot;
pub mod plugin;
pub mod point;
pub mod surface;
pub mod types;

pub use axis::{Axis, ScaleKind};
pub use config::{Color, CrosshairMode, CrosshairOptions, FontSpec, LabelFn, Padding};
pub use crosshair::{ChangeListener, CrosshairController, CrosshairState, ListenerId, CROSSHAIR_CHANGED};
pub use error::{ConfigError, ConfigResult};
pub use host::{EventHub, PlotHost, SubscriptionId};
pub use label::{place_label, LabelPlacement};
pub use plot::StaticPlot;
pub use plugin::{PlotPlugin, PointerEvent, PointerEventKind, Subscriptions};
pub use point::{AxisDirection, AxisKey, AxisPoint};
pub use surface::{DrawCommand, DrawingSurface, LineJoin, RecordingSurface, TextAlign, TextBaseline};
pub use types::{Insets, Offset, PixelPoint, HIDDEN, LABEL_FLIP_THRESHOLD};
