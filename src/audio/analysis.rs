use super::bands::{linear_bars, log2_bars};
use super::spectrum::{spectrum_at, WindowSpectrum};

/// Everything derived for one analysis timestamp. All five sequences share
/// one length: 127 whenever the window fully fits.
#[derive(Clone, Debug)]
pub struct SpectrumFrame {
    pub time: f64,
    pub spectrum: WindowSpectrum,
    pub bars: Vec<f32>,
    pub bars_log2: Vec<f32>,
}

pub fn frame_at(mono: &[i32], sample_rate: u32, bits_per_sample: u16, time: f64) -> SpectrumFrame {
    let spectrum = spectrum_at(mono, sample_rate, bits_per_sample, time);
    let bars = linear_bars(&spectrum.magnitudes);
    let bars_log2 = log2_bars(&spectrum.magnitudes);

    SpectrumFrame {
        time,
        spectrum,
        bars,
        bars_log2,
    }
}

/// End-exclusive arithmetic progression of analysis timestamps.
pub fn timestamp_schedule(start: f64, end: f64, step: f64) -> Vec<f64> {
    (0..)
        .map(|i| start + i as f64 * step)
        .take_while(|&t| t < end)
        .collect()
}
