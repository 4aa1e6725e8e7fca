use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tone_engine::{Lab, Region, ShadeGuide, ShadeReference, SharpnessVerdict};

use crate::error::AppError;

/// Environment variable naming the config file when `--config` is absent
pub const CONFIG_ENV: &str = "SHADESCOPE_CONFIG";

/// Name under which the built-in guide is selected
pub const BUILTIN_GUIDE: &str = "vita";

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Focus quality gate
    #[serde(default)]
    pub quality: QualityConfig,

    /// Shade matching defaults
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Additional named reference guides
    #[serde(default)]
    pub guides: HashMap<String, Vec<ShadeEntryConfig>>,

    /// Default analysis region
    #[serde(default)]
    pub region: Option<RegionConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QualityConfig {
    /// Lowest sharpness verdict that still allows color interpretation
    #[serde(default = "default_minimum_verdict")]
    pub minimum_verdict: String,
}

fn default_minimum_verdict() -> String {
    SharpnessVerdict::Acceptable.as_str().to_string()
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            minimum_verdict: default_minimum_verdict(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MatchingConfig {
    /// Skip the bleached shades unless asked otherwise
    #[serde(default)]
    pub exclude_bleached: bool,

    /// Guide to match against
    #[serde(default = "default_guide")]
    pub guide: String,
}

fn default_guide() -> String {
    BUILTIN_GUIDE.to_string()
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            exclude_bleached: false,
            guide: default_guide(),
        }
    }
}

/// One entry of a custom reference guide
#[derive(Debug, Deserialize, Clone)]
pub struct ShadeEntryConfig {
    pub id: String,

    #[serde(default)]
    pub series: String,

    /// `[L, a, b]`
    pub lab: [f32; 3],

    /// 0 for a bleached-style group, then 1 (brightest) upward
    pub rank: u32,
}

impl From<&ShadeEntryConfig> for ShadeReference {
    fn from(entry: &ShadeEntryConfig) -> Self {
        let [l, a, b] = entry.lab;
        ShadeReference::new(
            entry.id.clone(),
            entry.series.clone(),
            Lab::new(l, a, b),
            entry.rank,
        )
    }
}

/// Rectangle in pixels; parses from `x,y,width,height`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionConfig {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl From<RegionConfig> for Region {
    fn from(r: RegionConfig) -> Self {
        Region::new(r.x, r.y, r.width, r.height)
    }
}

impl fmt::Display for RegionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

impl FromStr for RegionConfig {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [x, y, width, height] = parts.as_slice() else {
            return Err(format!("expected x,y,width,height but got '{}'", s));
        };
        let num = |v: &str| {
            v.parse::<usize>()
                .map_err(|e| format!("invalid region value '{}': {}", v, e))
        };
        Ok(Self {
            x: num(*x)?,
            y: num(*y)?,
            width: num(*width)?,
            height: num(*height)?,
        })
    }
}

impl AppConfig {
    /// Parse a YAML document.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load configuration from `path`, or from `$SHADESCOPE_CONFIG`.
    ///
    /// With neither set the defaults are used. A file that cannot be read or
    /// parsed is logged and replaced by the defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match std::env::var_os(CONFIG_ENV) {
                Some(p) => PathBuf::from(p),
                None => {
                    tracing::debug!("No config file given, using defaults");
                    return Self::default();
                }
            },
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        guides = config.guides.len(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// The configured quality gate as a verdict.
    pub fn minimum_verdict(&self) -> Result<SharpnessVerdict, AppError> {
        SharpnessVerdict::from_name(&self.quality.minimum_verdict).ok_or_else(|| {
            AppError::Config(format!(
                "unknown sharpness verdict '{}'",
                self.quality.minimum_verdict
            ))
        })
    }

    /// Build the guide called `name`; `None` selects the built-in guide.
    pub fn custom_guide(&self, name: &str) -> Result<Option<ShadeGuide>, AppError> {
        if name.trim().eq_ignore_ascii_case(BUILTIN_GUIDE) {
            return Ok(None);
        }
        let entries = self
            .guides
            .get(name)
            .ok_or_else(|| AppError::Config(format!("unknown guide '{}'", name)))?;
        let guide = ShadeGuide::new(entries.iter().map(ShadeReference::from).collect())
            .map_err(|e| AppError::Config(format!("guide '{}': {}", name, e)))?;
        Ok(Some(guide))
    }
}
