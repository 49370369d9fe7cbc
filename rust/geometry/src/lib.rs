// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! View3D Geometry
//!
//! Surface normals, the orientation check used when a host builds faces,
//! and the import loop that hands a parsed scene to a host model. Uses
//! nalgebra for points and vectors.

pub mod error;
pub mod import;
pub mod mesh;
pub mod normal;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use error::{Error, Result};
pub use import::{import_scene, HostModel, ImportReport};
pub use mesh::{FaceSet, Polygon};
pub use normal::{compute_normal, orientation_matches_host, surface_normal, surface_points};
