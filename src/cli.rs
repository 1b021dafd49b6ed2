use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bandscope", about = "Spectrum banding comparison plot generator")]
pub struct Cli {
    /// Input WAV file (integer PCM, mono or stereo)
    pub input: Option<PathBuf>,

    /// Directory the figures are written to
    #[arg(short, long, default_value = "plots")]
    pub out_dir: PathBuf,

    /// Render a single timestamp (seconds) instead of the batch schedule
    #[arg(long)]
    pub at: Option<f64>,

    /// First timestamp of the batch schedule (seconds)
    #[arg(long, default_value_t = 0.0)]
    pub start: f64,

    /// End of the batch schedule (seconds, exclusive; defaults to the signal length)
    #[arg(long)]
    pub end: Option<f64>,

    /// Seconds between scheduled timestamps
    #[arg(long, default_value_t = 5.0)]
    pub step: f64,

    /// Figure width in pixels
    #[arg(long, default_value_t = 1600)]
    pub width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = 1200)]
    pub height: u32,

    /// Config file path (otherwise bandscope.toml / the global config is auto-detected)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
