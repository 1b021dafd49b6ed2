use std::ops::Range;
use std::path::Path;

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::audio::analysis::SpectrumFrame;

/// Render one comparison figure: a 2x2 grid pairing each frequency axis
/// (linear, log2) with each banding scheme (linear, power-of-two). Every
/// pane overlays the red bars on the blue spectrum.
pub fn render_frame(frame: &SpectrumFrame, path: &Path, width: u32, height: u32) -> Result<()> {
    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(&format!("t = {:.2} s", frame.time), ("sans-serif", 24))?;

    let panes = root.split_evenly((2, 2));
    let spectrum = &frame.spectrum;

    draw_pane(
        &panes[0],
        "Linear frequency, linear bands",
        None,
        Some("Log10 Amplitude"),
        &spectrum.freq,
        &spectrum.magnitudes,
        &frame.bars,
    )?;
    draw_pane(
        &panes[1],
        "Log2 frequency, linear bands",
        None,
        None,
        &spectrum.freq_log2,
        &spectrum.magnitudes,
        &frame.bars,
    )?;
    draw_pane(
        &panes[2],
        "Linear frequency, power-of-two bands",
        Some("Frequency [Hz]"),
        Some("Log10 Amplitude"),
        &spectrum.freq,
        &spectrum.magnitudes,
        &frame.bars_log2,
    )?;
    draw_pane(
        &panes[3],
        "Log2 frequency, power-of-two bands",
        Some("Log2 [Frequency [Hz]]"),
        None,
        &spectrum.freq_log2,
        &spectrum.magnitudes,
        &frame.bars_log2,
    )?;

    root.present()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn draw_pane(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    x_desc: Option<&str>,
    y_desc: Option<&str>,
    xs: &[f32],
    spectrum: &[f32],
    bars: &[f32],
) -> Result<()> {
    let x_range = pad(bounds(xs.iter().copied()));
    let y_range = pad(bounds(spectrum.iter().chain(bars.iter()).copied()));

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(x_range, y_range)?;

    let mut mesh = chart.configure_mesh();
    if let Some(desc) = x_desc {
        mesh.x_desc(desc);
    }
    if let Some(desc) = y_desc {
        mesh.y_desc(desc);
    }
    mesh.draw()?;

    chart.draw_series(LineSeries::new(finite_points(xs, spectrum), &BLUE))?;
    chart.draw_series(LineSeries::new(finite_points(xs, bars), &RED))?;

    Ok(())
}

/// Skip points with a non-finite coordinate: the DC bin on the log2 axis
/// and silent bins, whose log magnitudes are -inf.
fn finite_points<'a>(xs: &'a [f32], ys: &'a [f32]) -> impl Iterator<Item = (f32, f32)> + 'a {
    xs.iter()
        .zip(ys.iter())
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(&x, &y)| (x, y))
}

fn bounds(values: impl Iterator<Item = f32>) -> Option<(f32, f32)> {
    let mut lo = f32::INFINITY;
    let mut hi = f32::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    (lo <= hi).then_some((lo, hi))
}

fn pad(bounds: Option<(f32, f32)>) -> Range<f32> {
    match bounds {
        Some((lo, hi)) if hi > lo => {
            let margin = (hi - lo) * 0.05;
            lo - margin..hi + margin
        }
        Some((lo, _)) => lo - 0.5..lo + 0.5,
        None => 0.0..1.0,
    }
}
