// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory polygon host with Wavefront OBJ output

use nalgebra::{Point3, Vector3};
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::import::HostModel;

/// Below this squared length a polygon normal counts as zero
const DEGENERATE_EPSILON: f64 = 1e-24;

/// One planar polygon
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: SmallVec<[Point3<f64>; 4]>,
}

impl Polygon {
    /// Polygon normal by Newell's method (not normalized).
    ///
    /// Works for any planar ring; the direction follows the right-hand rule
    /// relative to the point order.
    pub fn newell_normal(&self) -> Vector3<f64> {
        let mut normal = Vector3::zeros();
        let n = self.points.len();
        for i in 0..n {
            let curr = self.points[i];
            let next = self.points[(i + 1) % n];
            normal.x += (curr.y - next.y) * (curr.z + next.z);
            normal.y += (curr.z - next.z) * (curr.x + next.x);
            normal.z += (curr.x - next.x) * (curr.y + next.y);
        }
        normal
    }
}

/// Flat list of polygons, the built-in [`HostModel`]
#[derive(Debug, Clone, Default)]
pub struct FaceSet {
    polygons: Vec<Polygon>,
}

impl FaceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Total number of polygon corners
    pub fn corner_count(&self) -> usize {
        self.polygons.iter().map(|p| p.points.len()).sum()
    }

    /// Serialize as Wavefront OBJ, one `v` line per corner and one `f` line
    /// per polygon (1-based indices).
    pub fn to_obj(&self) -> String {
        let mut out = String::with_capacity(self.corner_count() * 32 + self.len() * 16);
        out.push_str("# View3D import\n");

        for polygon in &self.polygons {
            for p in &polygon.points {
                out.push_str(&format!("v {} {} {}\n", p.x, p.y, p.z));
            }
        }

        let mut next = 1usize;
        for polygon in &self.polygons {
            out.push('f');
            for _ in 0..polygon.points.len() {
                out.push_str(&format!(" {}", next));
                next += 1;
            }
            out.push('\n');
        }

        out
    }
}

impl HostModel for FaceSet {
    type Face = usize;

    fn add_face(&mut self, points: &[Point3<f64>]) -> Result<usize> {
        if points.len() < 3 {
            return Err(Error::DegenerateFace(format!(
                "{} points, at least 3 required",
                points.len()
            )));
        }

        let polygon = Polygon {
            points: points.iter().copied().collect(),
        };
        if polygon.newell_normal().norm_squared() < DEGENERATE_EPSILON {
            return Err(Error::DegenerateFace("points are collinear or coincident".into()));
        }

        self.polygons.push(polygon);
        Ok(self.polygons.len() - 1)
    }

    fn face_normal(&self, face: &usize) -> Vector3<f64> {
        self.polygons
            .get(*face)
            .map(Polygon::newell_normal)
            .unwrap_or_else(Vector3::zeros)
    }

    fn reverse_face(&mut self, face: &usize) {
        if let Some(polygon) = self.polygons.get_mut(*face) {
            polygon.points.reverse();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_newell_normal_of_square() {
        let mut faces = FaceSet::new();
        let face = faces.add_face(&square()).unwrap();
        // Twice the area along +z
        assert_relative_eq!(faces.face_normal(&face), Vector3::new(0.0, 0.0, 2.0));

        faces.reverse_face(&face);
        assert_relative_eq!(faces.face_normal(&face), Vector3::new(0.0, 0.0, -2.0));
    }

    #[test]
    fn test_rejects_degenerate_faces() {
        let mut faces = FaceSet::new();
        assert!(matches!(
            faces.add_face(&square()[..2]),
            Err(Error::DegenerateFace(_))
        ));

        let collinear = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
        ];
        assert!(matches!(faces.add_face(&collinear), Err(Error::DegenerateFace(_))));
        assert!(faces.is_empty());
    }

    #[test]
    fn test_obj_output() {
        let mut faces = FaceSet::new();
        faces.add_face(&square()).unwrap();
        faces.add_face(&square()[..3]).unwrap();

        let obj = faces.to_obj();
        let lines: Vec<&str> = obj.lines().collect();
        assert_eq!(lines[0], "# View3D import");
        assert_eq!(lines[1], "v 0 0 0");
        assert_eq!(lines[3], "v 1 1 0");
        assert_eq!(lines.iter().filter(|l| l.starts_with("v ")).count(), 7);
        assert_eq!(lines[8], "f 1 2 3 4");
        assert_eq!(lines[9], "f 5 6 7");
        assert_eq!(faces.corner_count(), 7);
    }
}
