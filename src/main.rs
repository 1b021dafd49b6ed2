mod cli;
mod config;
mod audio;
mod plot;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::Path;

use cli::Cli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut cli = Cli::parse();

    // Load config: explicit --config path, or auto-detect bandscope.toml / global config
    let config_path = cli.config.clone().or_else(|| {
        let local = std::path::PathBuf::from("bandscope.toml");
        if local.exists() {
            return Some(local);
        }
        if let Some(home) = dirs::home_dir() {
            let xdg = home.join(".config").join("bandscope").join("config.toml");
            if xdg.exists() {
                return Some(xdg);
            }
        }
        if let Some(config_dir) = dirs::config_dir() {
            let platform = config_dir.join("bandscope").join("config.toml");
            if platform.exists() {
                return Some(platform);
            }
        }
        None
    });
    if let Some(ref path) = config_path {
        if let Some(cfg) = config::load_config(path) {
            log::info!("Loaded config from {}", path.display());
            // Merge: config values apply only when CLI is at its default
            if cli.width == 1600 { cli.width = cfg.plot.width; }
            if cli.height == 1200 { cli.height = cfg.plot.height; }
            if cli.out_dir == Path::new("plots") { cli.out_dir = cfg.plot.out_dir; }
            if cli.start == 0.0 { cli.start = cfg.schedule.start; }
            if cli.end.is_none() { cli.end = cfg.schedule.end; }
            if cli.step == 5.0 { cli.step = cfg.schedule.step; }
        } else {
            log::warn!("Failed to load config from {}", path.display());
        }
    }

    let input = cli.input.as_ref().context("Input WAV file is required")?;
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }
    validate_schedule(&cli)?;

    log::info!("bandscope - spectrum banding comparison plots");
    log::info!("Input: {}", input.display());
    log::info!("Output directory: {}", cli.out_dir.display());
    log::info!("Figure size: {}x{}", cli.width, cli.height);

    // 1. Load audio
    log::info!("Loading audio...");
    let audio_data = audio::wav::read_wav(input)?;

    // 2. Downmix to mono
    let mono = audio::downmix::to_mono(&audio_data);
    let duration = mono.len() as f64 / audio_data.sample_rate as f64;

    // 3. Build the timestamp schedule
    let timestamps: Vec<f64> = match cli.at {
        Some(at) => vec![at],
        None => {
            let end = cli.end.unwrap_or(duration);
            audio::analysis::timestamp_schedule(cli.start, end, cli.step)
        }
    };
    if timestamps.is_empty() {
        anyhow::bail!("Empty timestamp schedule: nothing to render");
    }
    log::info!("Rendering {} figures...", timestamps.len());

    std::fs::create_dir_all(&cli.out_dir).with_context(|| {
        format!("Failed to create output directory {}", cli.out_dir.display())
    })?;

    // 4. Analyze and render in parallel
    let pb = ProgressBar::new(timestamps.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} plots ({eta} remaining)")
            .unwrap()
            .progress_chars("=>-"),
    );

    timestamps.par_iter().try_for_each(|&time| -> Result<()> {
        let frame = audio::analysis::frame_at(
            &mono,
            audio_data.sample_rate,
            audio_data.bits_per_sample,
            time,
        );
        let path = cli.out_dir.join(format!("spectrum_{:07.2}s.png", time));
        plot::render_frame(&frame, &path, cli.width, cli.height)?;
        pb.inc(1);
        Ok(())
    })?;

    pb.finish_with_message("Rendering complete");

    log::info!("Done! Figures in {}", cli.out_dir.display());
    Ok(())
}

// NaN passes every ordered comparison, so finiteness is checked explicitly.
fn validate_schedule(cli: &Cli) -> Result<()> {
    if !cli.step.is_finite() || cli.step <= 0.0 {
        anyhow::bail!("--step must be positive, got {}", cli.step);
    }
    if !cli.start.is_finite() || cli.start < 0.0 {
        anyhow::bail!("--start must be non-negative, got {}", cli.start);
    }
    if let Some(at) = cli.at {
        if !at.is_finite() || at < 0.0 {
            anyhow::bail!("--at must be non-negative, got {}", at);
        }
    }
    if let Some(end) = cli.end {
        if !end.is_finite() {
            anyhow::bail!("--end must be finite, got {}", end);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_cli() -> Cli {
        Cli {
            input: None,
            out_dir: "plots".into(),
            at: None,
            start: 0.0,
            end: None,
            step: 5.0,
            width: 1600,
            height: 1200,
            config: None,
        }
    }

    #[test]
    fn default_schedule_is_valid() {
        assert!(validate_schedule(&base_cli()).is_ok());
    }

    #[test]
    fn rejects_non_finite_schedule_values() {
        let mut cli = base_cli();
        cli.at = Some(f64::NAN);
        assert!(validate_schedule(&cli).is_err());

        let mut cli = base_cli();
        cli.start = f64::INFINITY;
        assert!(validate_schedule(&cli).is_err());

        let mut cli = base_cli();
        cli.end = Some(f64::NAN);
        assert!(validate_schedule(&cli).is_err());

        let mut cli = base_cli();
        cli.step = f64::NAN;
        assert!(validate_schedule(&cli).is_err());
    }

    #[test]
    fn rejects_zero_or_negative_schedule_values() {
        let mut cli = base_cli();
        cli.step = 0.0;
        assert!(validate_schedule(&cli).is_err());

        let mut cli = base_cli();
        cli.start = -1.0;
        assert!(validate_schedule(&cli).is_err());

        let mut cli = base_cli();
        cli.at = Some(-0.5);
        assert!(validate_schedule(&cli).is_err());
    }
}
