use super::wav::WavData;

/// Collapse interleaved stereo to mono: each output sample is
/// floor((L + R) / 2). Odd sums round toward negative infinity, and the sum
/// is taken at 64-bit width so i32 extremes cannot overflow.
pub fn downmix_stereo(samples: &[i32]) -> Vec<i32> {
    samples
        .chunks_exact(2)
        .map(|frame| ((frame[0] as i64 + frame[1] as i64) >> 1) as i32)
        .collect()
}

pub fn to_mono(audio: &WavData) -> Vec<i32> {
    match audio.channels {
        1 => audio.samples.clone(),
        _ => downmix_stereo(&audio.samples),
    }
}
