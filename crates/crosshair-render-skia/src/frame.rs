// File: crates/crosshair-render-skia/src/frame.rs
// Summary: Headless frame rendering (plot area + overlay pass) to PNG using Skia CPU raster surfaces.

use anyhow::Result;
use crosshair_core::{PlotHost, PlotPlugin, StaticPlot};
use skia_safe as skia;

use crate::surface::SkiaSurface;
use crate::text::TextShaper;

pub struct FrameOptions {
    pub background: skia::Color,
    pub frame: skia::Color,
    pub draw_frame: bool,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            background: skia::Color::from_argb(255, 18, 18, 20), // near-black
            frame: skia::Color::from_argb(255, 180, 180, 190),
            draw_frame: true,
        }
    }
}

/// Render the drawing-area frame of `plot` and one overlay pass of each plugin to PNG bytes.
pub fn render_frame_png(
    plot: &StaticPlot,
    overlays: &[&dyn PlotPlugin],
    shaper: &TextShaper,
    opts: &FrameOptions,
) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((plot.canvas_width, plot.canvas_height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let canvas = surface.canvas();

    canvas.clear(opts.background);
    if opts.draw_frame {
        draw_plot_frame(canvas, plot, opts.frame);
    }

    {
        let mut overlay = SkiaSurface::new(canvas, shaper);
        for plugin in overlays {
            plot.draw_overlay(*plugin, &mut overlay);
        }
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Same as [`render_frame_png`], written to `output_png_path`.
pub fn render_frame_to_file(
    plot: &StaticPlot,
    overlays: &[&dyn PlotPlugin],
    shaper: &TextShaper,
    opts: &FrameOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_frame_png(plot, overlays, shaper, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

fn draw_plot_frame(canvas: &skia::Canvas, plot: &StaticPlot, color: skia::Color) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);

    let o = plot.plot_offset();
    let rect = skia::Rect::from_xywh(
        o.left as f32 - 0.5,
        o.top as f32 - 0.5,
        plot.width() as f32 + 1.0,
        plot.height() as f32 + 1.0,
    );
    canvas.draw_rect(rect, &paint);
}
