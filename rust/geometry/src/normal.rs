// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Surface normals and orientation checks
//!
//! The normal of a View3D surface is the cross product of its first edge and
//! the edge closing the ring back to the first corner. It is not normalized:
//! callers only look at the sign of a dot product.

use nalgebra::{Point3, Vector3};
use smallvec::SmallVec;
use view3d_core::{Scene, Surface, Vertex};

/// Corner position of a vertex
#[inline]
pub fn vertex_point(vertex: &Vertex) -> Point3<f64> {
    Point3::new(vertex.x, vertex.y, vertex.z)
}

/// Corner positions of `surface`, in file order
pub fn surface_points(scene: &Scene, surface: &Surface) -> SmallVec<[Point3<f64>; 4]> {
    scene.surface_vertices(surface).map(vertex_point).collect()
}

/// Normal of a 3 or 4 point ring: `(p1 - p0) x (p_last - p0)`.
///
/// Returns the zero vector for fewer than three points.
pub fn compute_normal(points: &[Point3<f64>]) -> Vector3<f64> {
    if points.len() < 3 {
        return Vector3::zeros();
    }
    let p0 = points[0];
    let edge_a = points[1] - p0;
    let edge_b = points[points.len() - 1] - p0;
    edge_a.cross(&edge_b)
}

/// Normal of a parsed surface in file coordinates
pub fn surface_normal(scene: &Scene, surface: &Surface) -> Vector3<f64> {
    compute_normal(&surface_points(scene, surface))
}

/// Whether a host face already faces the way the file intends.
///
/// A `false` result means the host should reverse the face.
#[inline]
pub fn orientation_matches_host(surface_normal: &Vector3<f64>, host_normal: &Vector3<f64>) -> bool {
    surface_normal.dot(host_normal) >= 0.0
}
