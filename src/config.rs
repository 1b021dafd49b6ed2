use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub plot: PlotConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

#[derive(Debug, Deserialize)]
pub struct PlotConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub end: Option<f64>,
    #[serde(default = "default_step")]
    pub step: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            out_dir: default_out_dir(),
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: None,
            step: default_step(),
        }
    }
}

fn default_width() -> u32 { 1600 }
fn default_height() -> u32 { 1200 }
fn default_out_dir() -> PathBuf { "plots".into() }
fn default_step() -> f64 { 5.0 }

pub fn load_config(path: &PathBuf) -> Option<Config> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.plot.width, 1600);
        assert_eq!(cfg.plot.height, 1200);
        assert_eq!(cfg.plot.out_dir, PathBuf::from("plots"));
        assert_eq!(cfg.schedule.start, 0.0);
        assert_eq!(cfg.schedule.end, None);
        assert_eq!(cfg.schedule.step, 5.0);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [plot]
            width = 800

            [schedule]
            step = 2.5
            end = 60.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.plot.width, 800);
        assert_eq!(cfg.plot.height, 1200);
        assert_eq!(cfg.schedule.step, 2.5);
        assert_eq!(cfg.schedule.end, Some(60.0));
        assert_eq!(cfg.schedule.start, 0.0);
    }
}
