//! Remembered editor settings, persisted between runs.
//!
//! Stored as JSON under the user config dir. All failures are silent:
//! a missing, unreadable, or malformed settings file behaves exactly
//! like no settings at all, and out-of-range values are clamped.

use crate::defaults;
use crate::types::AspectRatio;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, PartialEq, Copy, Clone)]
pub struct RememberedSettings {
    pub border_percent: f64,
    pub ratio: AspectRatio,
}

impl Default for RememberedSettings {
    #[inline]
    fn default() -> Self {
        Self {
            border_percent: defaults::BORDER_PERCENT,
            ratio: AspectRatio::default(),
        }
    }
}

#[inline]
fn settings_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("just-frames").join("settings.json"))
}

impl RememberedSettings {
    /// Clamps the border into its valid range; non-finite values make
    /// the whole record invalid.
    #[inline]
    fn normalized(self) -> Option<Self> {
        if !self.border_percent.is_finite() {
            return None;
        }
        Some(Self {
            border_percent: self
                .border_percent
                .clamp(defaults::BORDER_PERCENT_MIN, defaults::BORDER_PERCENT_MAX),
            ratio: self.ratio,
        })
    }

    #[inline]
    #[must_use]
    pub fn load() -> Option<Self> {
        Self::load_from(settings_path()?)
    }

    #[must_use]
    pub fn load_from(path: impl AsRef<Path>) -> Option<Self> {
        let raw = fs::read_to_string(path).ok()?;
        serde_json::from_str::<Self>(&raw).ok()?.normalized()
    }

    #[inline]
    pub fn save(&self) {
        if let Some(path) = settings_path() {
            self.save_to(path);
        }
    }

    pub fn save_to(&self, path: impl AsRef<Path>) {
        let Some(normalized) = self.normalized() else {
            return;
        };
        let Ok(json) = serde_json::to_string(&normalized) else {
            return;
        };
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let _ = fs::write(path, json);
    }
}
