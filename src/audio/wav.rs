use std::path::{Path, PathBuf};

/// Decoded WAV contents. Samples are interleaved and widened to i32 at the
/// container's native scale (a 16-bit sample keeps its 16-bit value).
#[derive(Debug)]
pub struct WavData {
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub channels: u16,
    pub samples: Vec<i32>,
}

#[derive(Debug, thiserror::Error)]
pub enum WavError {
    #[error("failed to open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("invalid sample rate: {0} Hz")]
    InvalidSampleRate(u32),

    #[error("unsupported sample format: {0}")]
    UnsupportedFormat(String),

    #[error("expected mono or stereo input, got {0} channels")]
    UnsupportedChannels(u16),

    #[error("failed to read samples: {0}")]
    Read(#[from] hound::Error),
}

pub fn read_wav(path: &Path) -> Result<WavData, WavError> {
    let mut reader = hound::WavReader::open(path).map_err(|source| WavError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let spec = reader.spec();
    if spec.sample_rate == 0 {
        return Err(WavError::InvalidSampleRate(spec.sample_rate));
    }
    if spec.channels == 0 || spec.channels > 2 {
        return Err(WavError::UnsupportedChannels(spec.channels));
    }

    let samples: Vec<i32> = match spec.sample_format {
        hound::SampleFormat::Int => reader.samples::<i32>().collect::<Result<_, _>>()?,
        hound::SampleFormat::Float => {
            return Err(WavError::UnsupportedFormat(
                "float PCM (integer PCM required)".into(),
            ))
        }
    };

    let frames = samples.len() / spec.channels as usize;
    log::info!(
        "Loaded WAV: {} frames, {} ch, {}-bit, {}Hz, {:.1}s",
        frames,
        spec.channels,
        spec.bits_per_sample,
        spec.sample_rate,
        frames as f64 / spec.sample_rate as f64
    );

    Ok(WavData {
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        channels: spec.channels,
        samples,
    })
}
