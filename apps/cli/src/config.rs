// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Importer defaults loaded from environment variables.

/// Importer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Scale factor applied to file coordinates (`VIEW3D_SCALE`).
    pub scale: String,
    /// Units the file coordinates are written in (`VIEW3D_UNITS`).
    pub units: String,
    /// Units written to the output (`VIEW3D_TARGET_UNITS`).
    pub target_units: String,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            scale: lookup("VIEW3D_SCALE").unwrap_or_else(|| "1.0".into()),
            units: lookup("VIEW3D_UNITS").unwrap_or_else(|| "m".into()),
            target_units: lookup("VIEW3D_TARGET_UNITS").unwrap_or_else(|| "in".into()),
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| "info".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.scale, "1.0");
        assert_eq!(config.units, "m");
        assert_eq!(config.target_units, "in");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(|key| match key {
            "VIEW3D_UNITS" => Some("cm".into()),
            "RUST_LOG" => Some("view3d_core=debug".into()),
            _ => None,
        });
        assert_eq!(config.units, "cm");
        assert_eq!(config.scale, "1.0");
        assert_eq!(config.log_filter, "view3d_core=debug");
    }
}
