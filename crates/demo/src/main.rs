// File: crates/demo/src/main.rs
// Summary: Demo replays a pointer path over a static plot, logs crosshair notifications and writes one PNG per redraw.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crosshair_core::{
    Axis, AxisPoint, CrosshairController, CrosshairMode, CrosshairOptions, PixelPoint, PlotHost,
    PlotPlugin, PointerEvent, StaticPlot, CROSSHAIR_CHANGED,
};
use crosshair_render_skia::{render_frame_to_file, FrameOptions, TextShaper};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "crosshair-demo", about = "Render crosshair overlay frames for a scripted pointer path")]
struct Args {
    /// TOML file with a [crosshair] table; defaults to mode "xy" with stock styling.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output directory for PNG frames.
    #[arg(long, default_value = "target/out")]
    out: PathBuf,
    #[arg(long, default_value_t = 800)]
    width: i32,
    #[arg(long, default_value_t = 500)]
    height: i32,
    /// Pointer positions sampled along the plot diagonal.
    #[arg(long, default_value_t = 8)]
    steps: u32,
    /// Lock the crosshair at a data-space point (`x,y`) halfway through the path.
    #[arg(long, value_parser = parse_point)]
    lock_at: Option<(f64, f64)>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let options = load_options(args.config.as_deref())?
        .with_label(|p| format!("t={:.1}  v={:.2}", p.x().unwrap_or_default(), p.y().unwrap_or_default()));
    if !options.mode.is_enabled() {
        warn!("crosshair mode is off; frames will show the plot only");
    }

    let mut plot = StaticPlot::new(args.width, args.height)
        .with_page_offset(16.0, 16.0)
        .with_axes(Axis::new("Time", 0.0, 100.0), Axis::new("Value", 0.0, 50.0));
    let mut crosshair = CrosshairController::new(options);
    crosshair.bind_events(&mut plot);
    crosshair.subscribe(|state, host| {
        info!(
            event = CROSSHAIR_CHANGED,
            x = state.x,
            y = state.y,
            visible = state.is_visible(),
            area = %format!("{}x{}", host.width(), host.height()),
            "crosshair changed"
        );
    });

    let shaper = TextShaper::new();
    let frame_opts = FrameOptions::default();
    let mut frame = 0usize;
    let steps = args.steps.max(1);

    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let pixel = PixelPoint::new(t * plot.width(), (1.0 - t) * plot.height());
        let (page_x, page_y) = plot.pixel_to_page(pixel);
        plot.dispatch(&PointerEvent::Move { page_x, page_y }, &mut crosshair);

        if i == steps / 2 {
            if let Some((x, y)) = args.lock_at {
                crosshair.lock_crosshair(Some(&AxisPoint::xy(x, y)), &mut plot);
                info!(x, y, "crosshair locked");
            }
        }
        if plot.take_redraw() {
            write_frame(&plot, &crosshair, &shaper, &frame_opts, &args.out, frame)?;
            frame += 1;
        }
    }

    crosshair.unlock_crosshair();
    plot.dispatch(&PointerEvent::Leave, &mut crosshair);
    if plot.take_redraw() {
        write_frame(&plot, &crosshair, &shaper, &frame_opts, &args.out, frame)?;
        frame += 1;
    }
    crosshair.shutdown(&mut plot);

    info!(frames = frame, out = %args.out.display(), "done");
    Ok(())
}

fn load_options(path: Option<&Path>) -> Result<CrosshairOptions> {
    let Some(path) = path else {
        return Ok(CrosshairOptions::default().with_mode(CrosshairMode::Both));
    };
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let opts = CrosshairOptions::from_toml_str(&src)
        .with_context(|| format!("parsing {}", path.display()))?;
    info!(config = %path.display(), mode = ?opts.mode, "loaded crosshair options");
    Ok(opts)
}

fn write_frame(
    plot: &StaticPlot,
    crosshair: &CrosshairController,
    shaper: &TextShaper,
    opts: &FrameOptions,
    out_dir: &Path,
    index: usize,
) -> Result<()> {
    let out = out_dir.join(format!("crosshair_{index:02}.png"));
    render_frame_to_file(plot, &[crosshair], shaper, opts, &out)
        .with_context(|| format!("writing {}", out.display()))?;
    info!(path = %out.display(), "wrote frame");
    Ok(())
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    Ok((x, y))
}
