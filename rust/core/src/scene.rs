// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parsed scene model
//!
//! Vertices live in one arena owned by the [`Scene`]; surfaces refer to them
//! through [`VertexRef`] indices, so a surface never copies vertex data.

use std::fmt;

use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Reference to a vertex by its 1-based id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct VertexRef(u32);

impl VertexRef {
    /// The vertex id as written in the file
    #[inline]
    pub fn id(self) -> u32 {
        self.0
    }

    /// Position in the scene's vertex arena
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }
}

/// A numbered point
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Vertex {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vertex {
    #[inline]
    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// A numbered flat polygon with three or four corners
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Surface {
    pub id: u32,
    pub name: String,
    vertices: SmallVec<[VertexRef; 4]>,
}

impl Surface {
    /// Corner references in file order
    #[inline]
    pub fn vertices(&self) -> &[VertexRef] {
        &self.vertices
    }

    #[inline]
    pub fn is_triangle(&self) -> bool {
        self.vertices.len() == 3
    }

    #[inline]
    pub fn is_quad(&self) -> bool {
        self.vertices.len() == 4
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.id)?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", v.id())?;
        }
        write!(f, " {}", self.name)
    }
}

/// All vertices and surfaces read from one file.
///
/// Only [`crate::builder::SceneBuilder`] populates a scene. Vertex ids run
/// 1..=N and surface ids 1..=M in order, and every surface reference points at
/// a vertex defined before the surface.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Scene {
    vertices: Vec<Vertex>,
    surfaces: Vec<Surface>,
}

impl Scene {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.surfaces.is_empty()
    }

    /// Look up a vertex by reference
    #[inline]
    pub fn vertex(&self, vref: VertexRef) -> Option<&Vertex> {
        self.vertices.get(vref.index())
    }

    /// Corners of `surface` in file order
    pub fn surface_vertices<'s>(
        &'s self,
        surface: &'s Surface,
    ) -> impl Iterator<Item = &'s Vertex> + 's {
        surface.vertices.iter().filter_map(move |v| self.vertex(*v))
    }

    /// Append the next vertex. The caller has checked the sequence number.
    pub(crate) fn push_vertex(&mut self, position: [f64; 3]) -> u32 {
        let id = self.vertices.len() as u32 + 1;
        let [x, y, z] = position;
        self.vertices.push(Vertex { id, x, y, z });
        id
    }

    /// Reference to an already parsed vertex, if `id` is in range
    pub(crate) fn vertex_ref(&self, id: u32) -> Option<VertexRef> {
        (id >= 1 && id as usize <= self.vertices.len()).then_some(VertexRef(id))
    }

    /// Append the next surface. The caller has resolved every corner.
    pub(crate) fn push_surface(&mut self, name: &str, corners: SmallVec<[VertexRef; 4]>) -> u32 {
        debug_assert!(corners.len() == 3 || corners.len() == 4);
        let id = self.surfaces.len() as u32 + 1;
        self.surfaces.push(Surface {
            id,
            name: name.to_string(),
            vertices: corners,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn triangle_and_quad() -> Scene {
        let mut scene = Scene::new();
        for p in [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]] {
            scene.push_vertex(p);
        }
        let r = |id| scene.vertex_ref(id).unwrap();
        let tri = smallvec![r(1), r(2), r(3)];
        let quad = smallvec![r(1), r(2), r(3), r(4)];
        scene.push_surface("tri", tri);
        scene.push_surface("quad", quad);
        scene
    }

    #[test]
    fn test_ids_follow_insertion_order() {
        let scene = triangle_and_quad();
        let ids: Vec<u32> = scene.vertices().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        let ids: Vec<u32> = scene.surfaces().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_vertex_ref_bounds() {
        let scene = triangle_and_quad();
        assert!(scene.vertex_ref(0).is_none());
        assert!(scene.vertex_ref(5).is_none());
        let v = scene.vertex(scene.vertex_ref(4).unwrap()).unwrap();
        assert_eq!(v.position(), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_surface_vertices_resolve_in_order() {
        let scene = triangle_and_quad();
        let quad = &scene.surfaces()[1];
        let ids: Vec<u32> = scene.surface_vertices(quad).map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert!(quad.is_quad());
        assert!(scene.surfaces()[0].is_triangle());
    }

    #[test]
    fn test_surface_display() {
        let scene = triangle_and_quad();
        assert_eq!(scene.surfaces()[0].to_string(), "1 1,2,3 tri");
        assert_eq!(scene.surfaces()[1].to_string(), "2 1,2,3,4 quad");
    }
}
