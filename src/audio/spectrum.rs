use rustfft::{num_complex::Complex, FftPlanner};

pub const FFT_SIZE: usize = 256;

/// Spectrum of one analysis window: bin frequencies on linear and log2 axes
/// plus log10 magnitudes, all trimmed to the half spectrum minus its final
/// bin (127 values for a full window). The log2 axis is -inf at DC and the
/// magnitudes are -inf for silent bins; plotting skips non-finite points.
#[derive(Clone, Debug)]
pub struct WindowSpectrum {
    pub freq: Vec<f32>,
    pub freq_log2: Vec<f32>,
    pub magnitudes: Vec<f32>,
}

impl WindowSpectrum {
    fn empty() -> Self {
        Self {
            freq: Vec::new(),
            freq_log2: Vec::new(),
            magnitudes: Vec::new(),
        }
    }
}

/// Spectrum of the window starting at `time` seconds: up to FFT_SIZE mono
/// samples, normalized by 2^bits_per_sample. A window overrunning the signal
/// shortens, and all output sequences shorten with it.
pub fn spectrum_at(
    mono: &[i32],
    sample_rate: u32,
    bits_per_sample: u16,
    time: f64,
) -> WindowSpectrum {
    let start = (time * sample_rate as f64) as usize;
    if start >= mono.len() {
        log::warn!("Window at {:.2}s starts past the end of the signal", time);
        return WindowSpectrum::empty();
    }

    let window = &mono[start..(start + FFT_SIZE).min(mono.len())];
    if window.len() < FFT_SIZE {
        log::warn!(
            "Window at {:.2}s truncated to {} samples",
            time,
            window.len()
        );
    }

    let n = window.len();
    let out_len = (n / 2).saturating_sub(1);
    if out_len == 0 {
        return WindowSpectrum::empty();
    }

    let scale = (bits_per_sample as f32).exp2();
    let mut buffer: Vec<Complex<f32>> = window
        .iter()
        .map(|&s| Complex::new(s as f32 / scale, 0.0))
        .collect();

    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);

    let bin_hz = sample_rate as f32 / n as f32;
    let freq: Vec<f32> = (0..out_len).map(|k| k as f32 * bin_hz).collect();
    let freq_log2: Vec<f32> = freq.iter().map(|f| f.log2()).collect();
    let magnitudes: Vec<f32> = buffer[..out_len].iter().map(|c| c.norm().log10()).collect();

    WindowSpectrum {
        freq,
        freq_log2,
        magnitudes,
    }
}
