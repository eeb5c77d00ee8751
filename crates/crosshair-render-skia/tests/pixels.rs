// File: crates/crosshair-render-skia/tests/pixels.rs
// Purpose: Rasterize crosshair overlays and check pixels of the decoded PNG.

use crosshair_core::{
    Axis, CrosshairController, CrosshairMode, CrosshairOptions, CrosshairState, DrawingSurface,
    Insets, PlotPlugin, StaticPlot,
};
use crosshair_render_skia::{render_frame_png, FrameOptions, SkiaSurface, TextShaper};
use skia_safe as skia;

const BACKGROUND: [u8; 4] = [18, 18, 20, 255];

fn plot() -> StaticPlot {
    StaticPlot::new(240, 160)
        .with_insets(Insets::new(20, 20, 30, 30))
        .with_axes(Axis::new("X", 0.0, 10.0), Axis::new("Y", 0.0, 100.0))
}

fn crosshair(opts: CrosshairOptions, state: CrosshairState, plot: &mut StaticPlot) -> CrosshairController {
    let mut c = CrosshairController::new(opts);
    c.set_raw_crosshair(state, plot);
    c
}

fn render(plot: &StaticPlot, c: &CrosshairController) -> image::RgbaImage {
    let shaper = TextShaper::new();
    let opts = FrameOptions { draw_frame: false, ..FrameOptions::default() };
    let bytes = render_frame_png(plot, &[c], &shaper, &opts).expect("render frame");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    image::load_from_memory(&bytes).expect("decode png").to_rgba8()
}

fn at(x: f64, y: f64) -> CrosshairState {
    CrosshairState { x, y, show_label: false, ..CrosshairState::default() }
}

fn is_red(px: &image::Rgba<u8>) -> bool {
    px.0[0] > 100 && px.0[1] < 40 && px.0[2] < 40
}

#[test]
fn vertical_line_lands_on_pixel_column() {
    let mut p = plot();
    let opts = CrosshairOptions::default().with_mode(CrosshairMode::Vertical);
    let c = crosshair(opts, at(100.0, 50.0), &mut p);
    let img = render(&p, &c);
    assert_eq!(img.dimensions(), (240, 160));

    assert!(is_red(img.get_pixel(120, 80)), "got {:?}", img.get_pixel(120, 80));
    assert!(is_red(img.get_pixel(120, 31)));
    assert_eq!(img.get_pixel(125, 80).0, BACKGROUND);
    // outside the drawing area
    assert_eq!(img.get_pixel(120, 10).0, BACKGROUND);
}

#[test]
fn horizontal_line_spans_plot_width_only() {
    let mut p = plot();
    let opts = CrosshairOptions::default().with_mode(CrosshairMode::Horizontal);
    let c = crosshair(opts, at(100.0, 40.0), &mut p);
    let img = render(&p, &c);
    assert!(is_red(img.get_pixel(25, 70)));
    assert!(is_red(img.get_pixel(215, 70)));
    assert_eq!(img.get_pixel(5, 70).0, BACKGROUND);
    assert_eq!(img.get_pixel(235, 70).0, BACKGROUND);
}

#[test]
fn hidden_crosshair_leaves_background() {
    let mut p = plot();
    let opts = CrosshairOptions::default().with_mode(CrosshairMode::Both);
    let c = crosshair(opts, CrosshairState::default(), &mut p);
    let img = render(&p, &c);
    assert!(img.pixels().all(|px| px.0 == BACKGROUND));
}

#[test]
fn dashed_line_alternates() {
    let mut p = plot();
    let mut opts = CrosshairOptions::default().with_mode(CrosshairMode::Vertical);
    opts.line_dashed = true;
    let c = crosshair(opts, at(100.0, 50.0), &mut p);
    let img = render(&p, &c);
    let column: Vec<bool> = (30..130).map(|y| is_red(img.get_pixel(120, y))).collect();
    assert!(column.iter().any(|on| *on));
    assert!(column.iter().any(|on| !*on));
}

#[test]
fn labelled_frame_renders() {
    let mut p = plot();
    let opts = CrosshairOptions::default()
        .with_mode(CrosshairMode::Both)
        .with_label(|pt| format!("{:.2}", pt.x().unwrap_or_default()));
    let state = CrosshairState { show_label: true, ..at(5.0, 10.0) };
    let c = crosshair(opts, state, &mut p);
    render(&p, &c);
}

#[test]
fn overlay_pass_restores_canvas_state() {
    let mut p = plot();
    let opts = CrosshairOptions::default()
        .with_mode(CrosshairMode::Both)
        .with_label(|_| "label".to_string());
    let c = crosshair(opts, CrosshairState { show_label: true, ..at(50.0, 50.0) }, &mut p);

    let mut surface = skia::surfaces::raster_n32_premul((240, 160)).expect("raster surface");
    let canvas = surface.canvas();
    let before = canvas.save_count();
    let shaper = TextShaper::new();
    let mut overlay = SkiaSurface::new(canvas, &shaper);
    c.draw_overlay(&p, &mut overlay);
    // unmatched restores are ignored
    overlay.restore();
    assert_eq!(canvas.save_count(), before);
}
