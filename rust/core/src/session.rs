// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Importer session state
//!
//! Holds the file most recently loaded, its scene and the scale/units the
//! user picked. At most one scene is alive; loading a new file drops the
//! previous one before parsing starts.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::builder::load_file;
use crate::error::SessionError;
use crate::scene::Scene;
use crate::units::UnitTransform;

#[derive(Debug, Default)]
pub struct Session {
    file: Option<PathBuf>,
    scene: Option<Scene>,
    transform: UnitTransform,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `path`, replacing the current scene.
    ///
    /// On failure the session is left without a scene or file.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<&Scene, SessionError> {
        let path = path.as_ref();
        self.file = None;
        self.scene = None;

        match load_file(path) {
            Ok(scene) => {
                self.file = Some(path.to_path_buf());
                Ok(&*self.scene.insert(scene))
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to load View3D file");
                Err(err.into())
            }
        }
    }

    /// Set scale and units from user input; the previous transform is kept on error.
    pub fn set_units_from_input(&mut self, scale: &str, units: &str) -> Result<(), SessionError> {
        let target = self.transform.target;
        self.transform = UnitTransform::from_input(scale, units)?.with_target(target);
        Ok(())
    }

    pub fn set_transform(&mut self, transform: UnitTransform) {
        self.transform = transform;
    }

    pub fn transform(&self) -> &UnitTransform {
        &self.transform
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Short description of the file, units and scale
    pub fn summary(&self) -> String {
        let file = self
            .file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        format!(
            "Filename:{}\nUnits: {}\nScale: {:.6}\n",
            file, self.transform.source, self.transform.scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::LengthUnit;

    #[test]
    fn test_summary_of_empty_session() {
        let session = Session::new();
        assert_eq!(session.summary(), "Filename:\nUnits: m\nScale: 1.000000\n");
    }

    #[test]
    fn test_units_from_input_keep_target() {
        let mut session = Session::new();
        session.set_transform(UnitTransform::new(1.0, LengthUnit::Meter).with_target(LengthUnit::Meter));
        session.set_units_from_input("0.5", "cm").unwrap();
        assert_eq!(session.transform().source, LengthUnit::Centimeter);
        assert_eq!(session.transform().target, LengthUnit::Meter);
        assert_eq!(session.transform().scale, 0.5);

        assert!(session.set_units_from_input("bad", "m").is_err());
        assert_eq!(session.transform().scale, 0.5);
    }
}
