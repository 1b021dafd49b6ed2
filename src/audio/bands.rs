/// Number of columns both banding schemes reduce the spectrum to.
pub const NUM_BARS: usize = 8;

/// Power-of-two bin ranges, stated against the nominal 128-bin half spectrum.
const POW2_BANDS: [(usize, usize); NUM_BARS] = [
    (0, 1),
    (1, 2),
    (2, 4),
    (4, 8),
    (8, 16),
    (16, 32),
    (32, 64),
    (64, 128),
];

/// Max-pool the spectrum into NUM_BARS uniform index bands: every value in a
/// band is replaced by the band's maximum. Band widths derive from the
/// nominal half-spectrum extent (one longer than the trimmed input), so a
/// full 127-value frame gets 16-wide bands with the last clamped to
/// [112, 127).
pub fn linear_bars(spectrum: &[f32]) -> Vec<f32> {
    let len = spectrum.len();
    let mut bars = vec![0.0f32; len];
    if len == 0 {
        return bars;
    }

    let half = len + 1;
    let step = (half / NUM_BARS).max(1);
    let mut lo = 0;
    while lo < len {
        let hi = (lo + step).min(len);
        let peak = spectrum[lo..hi]
            .iter()
            .copied()
            .fold(f32::NEG_INFINITY, f32::max);
        bars[lo..hi].fill(peak);
        lo += step;
    }
    bars
}

/// Max-pool the spectrum into the fixed power-of-two bands. Ranges clamp to
/// the input length; a range that clamps to empty is skipped.
pub fn log2_bars(spectrum: &[f32]) -> Vec<f32> {
    let len = spectrum.len();
    let mut bars = vec![0.0f32; len];
    for &(band_lo, band_hi) in POW2_BANDS.iter() {
        let lo = band_lo.min(len);
        let hi = band_hi.min(len);
        if lo >= hi {
            continue;
        }
        let peak = spectrum[lo..hi]
            .iter()
            .copied()
            .fold(f32::NEG_INFINITY, f32::max);
        bars[lo..hi].fill(peak);
    }
    bars
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrambled(len: usize) -> Vec<f32> {
        (0..len).map(|i| ((i * 37) % 53) as f32 - 10.0).collect()
    }

    fn slice_max(values: &[f32]) -> f32 {
        values.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }

    #[test]
    fn linear_bands_are_piecewise_maxima() {
        let spectrum = scrambled(127);
        let bars = linear_bars(&spectrum);
        assert_eq!(bars.len(), 127);

        for band_start in (0..127).step_by(16) {
            let band_end = (band_start + 16).min(127);
            let expected = slice_max(&spectrum[band_start..band_end]);
            for i in band_start..band_end {
                assert_eq!(bars[i], expected, "index {}", i);
            }
        }
    }

    #[test]
    fn final_linear_band_is_one_narrower() {
        let spectrum = scrambled(127);
        let bars = linear_bars(&spectrum);

        let expected = slice_max(&spectrum[112..127]);
        assert!(bars[112..127].iter().all(|&b| b == expected));
    }

    #[test]
    fn pow2_bands_are_piecewise_maxima() {
        let spectrum = scrambled(127);
        let bars = log2_bars(&spectrum);
        assert_eq!(bars.len(), 127);

        let ranges = [
            (0, 1),
            (1, 2),
            (2, 4),
            (4, 8),
            (8, 16),
            (16, 32),
            (32, 64),
            (64, 127),
        ];
        for (lo, hi) in ranges {
            let expected = slice_max(&spectrum[lo..hi]);
            for i in lo..hi {
                assert_eq!(bars[i], expected, "index {}", i);
            }
        }
    }

    #[test]
    fn short_input_rescales_the_linear_bands() {
        // 49 values come from a 100-sample tail window; band width drops to 6
        let spectrum = scrambled(49);
        let bars = linear_bars(&spectrum);
        assert_eq!(bars.len(), 49);

        for band_start in (0..49).step_by(6) {
            let band_end = (band_start + 6).min(49);
            let expected = slice_max(&spectrum[band_start..band_end]);
            for i in band_start..band_end {
                assert_eq!(bars[i], expected, "index {}", i);
            }
        }
    }

    #[test]
    fn short_input_clamps_the_pow2_bands() {
        let spectrum = scrambled(49);
        let bars = log2_bars(&spectrum);
        assert_eq!(bars.len(), 49);

        let expected = slice_max(&spectrum[32..49]);
        assert!(bars[32..49].iter().all(|&b| b == expected));
    }

    #[test]
    fn single_value_input() {
        assert_eq!(linear_bars(&[5.0]), vec![5.0]);
        assert_eq!(log2_bars(&[5.0]), vec![5.0]);
    }

    #[test]
    fn empty_input_yields_empty_bars() {
        assert!(linear_bars(&[]).is_empty());
        assert!(log2_bars(&[]).is_empty());
    }
}
