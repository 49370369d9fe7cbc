// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene import into a host model
//!
//! The host builds each face from transformed points in whatever winding
//! its own face construction picks. Afterwards the file's surface normal is
//! compared against the host's face normal and mismatching faces are
//! reversed, so the outward side always matches the file.

use nalgebra::{Point3, Vector3};
use smallvec::SmallVec;
use tracing::{debug, info};
use view3d_core::{Scene, UnitTransform};

use crate::error::{Error, Result};
use crate::normal::{orientation_matches_host, surface_normal, vertex_point};

/// Receiver of imported faces
pub trait HostModel {
    /// Handle to a face the host created
    type Face;

    /// Create a planar face through `points` (host units).
    fn add_face(&mut self, points: &[Point3<f64>]) -> Result<Self::Face>;

    /// Geometric normal of a face as the host built it
    fn face_normal(&self, face: &Self::Face) -> Vector3<f64>;

    /// Flip the winding of a face
    fn reverse_face(&mut self, face: &Self::Face);
}

/// Outcome of [`import_scene`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Faces created in the host
    pub faces: usize,
    /// Faces that had to be reversed after creation
    pub reversed: usize,
}

/// Create one host face per surface, scaled by `transform`.
///
/// Stops at the first face the host rejects; faces created before that stay
/// in the host.
pub fn import_scene<H: HostModel>(
    scene: &Scene,
    transform: &UnitTransform,
    host: &mut H,
) -> Result<ImportReport> {
    let mut report = ImportReport::default();
    let k = transform.factor();
    debug!(factor = k, source = %transform.source, target = %transform.target, "importing scene");

    for surface in scene.surfaces() {
        let points: SmallVec<[Point3<f64>; 4]> = scene
            .surface_vertices(surface)
            .map(|v| vertex_point(v) * k)
            .collect();

        let face = host.add_face(&points).map_err(|err| Error::HostFace {
            surface: surface.id,
            source: Box::new(err),
        })?;
        report.faces += 1;

        let expected = surface_normal(scene, surface);
        if !orientation_matches_host(&expected, &host.face_normal(&face)) {
            debug!(surface = surface.id, name = %surface.name, "reversing host face");
            host.reverse_face(&face);
            report.reversed += 1;
        }
    }

    info!(faces = report.faces, reversed = report.reversed, "scene imported");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use view3d_core::{parse_str, LengthUnit};

    /// Host that stores faces in reverse order of the points it is given
    #[derive(Default)]
    struct MirroringHost {
        faces: Vec<Vec<Point3<f64>>>,
        reject_after: Option<usize>,
    }

    impl HostModel for MirroringHost {
        type Face = usize;

        fn add_face(&mut self, points: &[Point3<f64>]) -> Result<usize> {
            if self.reject_after == Some(self.faces.len()) {
                return Err(Error::DegenerateFace("refused".into()));
            }
            self.faces.push(points.iter().rev().copied().collect());
            Ok(self.faces.len() - 1)
        }

        fn face_normal(&self, face: &usize) -> Vector3<f64> {
            crate::normal::compute_normal(&self.faces[*face])
        }

        fn reverse_face(&mut self, face: &usize) {
            self.faces[*face].reverse();
        }
    }

    const INPUT: &str = "F 3\nV 1 0 0 0\nV 2 1 0 0\nV 3 1 1 0\nV 4 0 1 0\n\
                         S 1 1 2 3 4 0 0 0 up\nS 2 1 4 3 0 0 0 0 down\nE\n";

    #[test]
    fn test_mismatched_faces_are_reversed() {
        let scene = parse_str(INPUT).unwrap();
        let mut host = MirroringHost::default();
        let transform = UnitTransform::new(1.0, LengthUnit::Inch);

        let report = import_scene(&scene, &transform, &mut host).unwrap();
        assert_eq!(report, ImportReport { faces: 2, reversed: 2 });

        // After the fix-up every face winds like the file
        assert_eq!(host.faces[0][0], Point3::new(0.0, 0.0, 0.0));
        assert_eq!(host.faces[0][1], Point3::new(1.0, 0.0, 0.0));
        assert!(host.face_normal(&0).z > 0.0);
        assert!(host.face_normal(&1).z < 0.0);
    }

    #[test]
    fn test_points_are_scaled() {
        let scene = parse_str(INPUT).unwrap();
        let mut host = MirroringHost::default();
        let transform = UnitTransform::new(2.0, LengthUnit::Foot);

        import_scene(&scene, &transform, &mut host).unwrap();
        approx::assert_relative_eq!(host.faces[0][2], Point3::new(24.0, 24.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn test_host_rejection_names_surface() {
        let scene = parse_str(INPUT).unwrap();
        let mut host = MirroringHost {
            reject_after: Some(1),
            ..Default::default()
        };
        let transform = UnitTransform::default();

        match import_scene(&scene, &transform, &mut host) {
            Err(Error::HostFace { surface, source }) => {
                assert_eq!(surface, 2);
                assert!(matches!(*source, Error::DegenerateFace(_)));
            }
            other => panic!("expected host rejection, got {:?}", other),
        }
        assert_eq!(host.faces.len(), 1);
    }
}
