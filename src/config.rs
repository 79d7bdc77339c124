//! Runtime settings: defaults, overridden by an optional TOML file,
//! overridden by command-line flags.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::constants::*;
use crate::error::{CarouselError, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory slide sources are resolved against.
    pub assets_dir: PathBuf,
    pub interval_ms: u64,
    pub fade_ms: u64,
    pub width: i32,
    pub height: i32,
    pub fps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("."),
            interval_ms: AUTOPLAY_INTERVAL_MS,
            fade_ms: FADE_DURATION_MS,
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            fps: FPS,
        }
    }
}

/// Values given on the command line; `None` keeps the file/default value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub assets_dir: Option<PathBuf>,
    pub interval_ms: Option<u64>,
    pub fade_ms: Option<u64>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl Config {
    pub fn from_toml(text: &str, path: &Path) -> Result<Config> {
        let config: Config = toml::from_str(text).map_err(|e| CarouselError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate(path)?;
        Ok(config)
    }

    /// Rejects settings that would leave autoplay inert or the window empty.
    /// `origin` names where the values came from in the error.
    pub fn validate(&self, origin: &Path) -> Result<()> {
        let message = if self.interval_ms == 0 {
            "interval_ms must be greater than zero"
        } else if self.width <= 0 || self.height <= 0 {
            "width and height must be positive"
        } else {
            return Ok(());
        };
        Err(CarouselError::Config {
            path: origin.to_path_buf(),
            message: message.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path).map_err(|e| CarouselError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Config::from_toml(&text, path)
    }

    /// Layers command-line values on top and validates the result.
    pub fn apply(mut self, overrides: Overrides) -> Result<Config> {
        if let Some(dir) = overrides.assets_dir {
            self.assets_dir = dir;
        }
        if let Some(ms) = overrides.interval_ms {
            self.interval_ms = ms;
        }
        if let Some(ms) = overrides.fade_ms {
            self.fade_ms = ms;
        }
        if let Some(width) = overrides.width {
            self.width = width;
        }
        if let Some(height) = overrides.height {
            self.height = height;
        }
        self.validate(Path::new("command line"))?;
        Ok(self)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_constants() {
        let config = Config::default();
        assert_eq!(config.interval(), Duration::from_millis(5000));
        assert_eq!(config.fade_duration(), Duration::from_millis(FADE_DURATION_MS));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::from_toml("interval_ms = 3000\n", Path::new("carousel.toml")).unwrap();
        assert_eq!(config.interval_ms, 3000);
        assert_eq!(config.width, WINDOW_WIDTH);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml("speed = 2\n", Path::new("carousel.toml")).unwrap_err();
        assert!(matches!(err, CarouselError::Config { .. }));
    }

    #[test]
    fn cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "assets_dir = \"site\"\ninterval_ms = 3000\nfade_ms = 200").unwrap();

        let config = Config::load(file.path())
            .unwrap()
            .apply(Overrides {
                interval_ms: Some(1000),
                ..Overrides::default()
            })
            .unwrap();
        assert_eq!(config.assets_dir, PathBuf::from("site"));
        assert_eq!(config.interval_ms, 1000);
        assert_eq!(config.fade_ms, 200);
    }

    #[test]
    fn zero_interval_in_file_is_rejected() {
        let err = Config::from_toml("interval_ms = 0\n", Path::new("carousel.toml")).unwrap_err();
        assert!(matches!(err, CarouselError::Config { .. }));
        assert!(err.to_string().contains("interval_ms"));
    }

    #[test]
    fn zero_interval_on_command_line_is_rejected() {
        let err = Config::default()
            .apply(Overrides {
                interval_ms: Some(0),
                ..Overrides::default()
            })
            .unwrap_err();
        assert!(err.to_string().contains("command line"));
    }

    #[test]
    fn non_positive_window_size_is_rejected() {
        assert!(Config::from_toml("width = 0\n", Path::new("carousel.toml")).is_err());
        let err = Config::default()
            .apply(Overrides {
                height: Some(-10),
                ..Overrides::default()
            })
            .unwrap_err();
        assert!(err.to_string().contains("width and height"));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CarouselError::Config { .. }));
    }
}
