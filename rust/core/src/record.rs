// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Line classification and record decoding
//!
//! Each line of a View3D file is one record, typed by its first character
//! (case-insensitive). The remainder of the line is split on whitespace into
//! fields:
//!
//! ```text
//! F  <...> <format>
//! V  <id> <x> <y> <z> [ignored...]
//! S  <id> <v0> <v1> <v2> <v3> <u1> <u2> <u3> <name>
//! E
//! ```

use smallvec::SmallVec;

use crate::error::{Axis, Field, ParseError, RecordKind, Result, VertexSlot};
use crate::numeric::{parse_float, parse_integer};

/// Fields required by a vertex record
pub const VERTEX_FIELDS: usize = 4;
/// Fields required by a surface record
pub const SURFACE_FIELDS: usize = 9;
/// Position of the surface name within the surface fields
pub const SURFACE_NAME_FIELD: usize = 8;

/// Record type, from the leading character of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    Format,
    Vertex,
    Surface,
    End,
    /// Comments, titles, control lines and blank lines
    Other,
}

impl RecordType {
    /// Classify a trimmed line
    pub fn of(line: &str) -> Self {
        match line.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('f') => RecordType::Format,
            Some('v') => RecordType::Vertex,
            Some('s') => RecordType::Surface,
            Some('e') => RecordType::End,
            _ => RecordType::Other,
        }
    }
}

/// A classified line with its whitespace separated fields
#[derive(Debug, Clone, PartialEq)]
pub struct Record<'a> {
    pub kind: RecordType,
    pub fields: SmallVec<[&'a str; 12]>,
}

impl<'a> Record<'a> {
    /// Classify `line` and split everything after the type character.
    ///
    /// The line is trimmed first, so callers may pass raw lines.
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        let kind = RecordType::of(line);
        let rest = match line.chars().next() {
            Some(c) => &line[c.len_utf8()..],
            None => "",
        };
        Self {
            kind,
            fields: rest.split_whitespace().collect(),
        }
    }

    /// Format identifier of a format record: its last field.
    pub fn format_id(&self) -> Option<&'a str> {
        match self.kind {
            RecordType::Format => self.fields.last().copied(),
            _ => None,
        }
    }
}

/// Read the vertex id.
///
/// `entry` is the 1-based position this record would take in the vertex
/// sequence; errors name it because the id itself may be unreadable.
pub fn parse_vertex_id(fields: &[&str], entry: u32) -> Result<u32> {
    if fields.len() < VERTEX_FIELDS {
        return Err(ParseError::InsufficientFields {
            kind: RecordKind::Vertex,
            entry,
        });
    }
    parse_integer(fields[0], Field::VertexNumber { entry }, false)
}

/// Read the coordinates of vertex `vertex`. Trailing fields are ignored.
pub fn parse_vertex_position(fields: &[&str], vertex: u32) -> Result<[f64; 3]> {
    let mut position = [0.0; 3];
    for (i, axis) in Axis::ALL.into_iter().enumerate() {
        let token = fields.get(i + 1).copied().unwrap_or("");
        position[i] = parse_float(token, Field::Coordinate { axis, vertex })?;
    }
    Ok(position)
}

/// Read the surface id without touching the remaining fields.
///
/// The id has to be checked for sequence before any vertex index is looked
/// at, so surface decoding is split in two steps.
pub fn parse_surface_id(fields: &[&str], entry: u32) -> Result<u32> {
    if fields.len() < SURFACE_FIELDS {
        return Err(ParseError::InsufficientFields {
            kind: RecordKind::Surface,
            entry,
        });
    }
    parse_integer(fields[0], Field::SurfaceNumber { entry }, false)
}

/// Read one vertex index of surface `surface`.
///
/// Only the fourth slot may hold `0`.
pub fn parse_surface_index(fields: &[&str], slot: VertexSlot, surface: u32) -> Result<u32> {
    let position = slot as usize + 1;
    let token = fields.get(position).copied().unwrap_or("");
    parse_integer(
        token,
        Field::SurfaceVertex { slot, surface },
        slot == VertexSlot::Fourth,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(RecordType::of("F 3"), RecordType::Format);
        assert_eq!(RecordType::of("f 3"), RecordType::Format);
        assert_eq!(RecordType::of("v 1 0 0 0"), RecordType::Vertex);
        assert_eq!(RecordType::of("S 1 1 2 3 0 0 0 0 a"), RecordType::Surface);
        assert_eq!(RecordType::of("End of data"), RecordType::End);
        assert_eq!(RecordType::of("T title line"), RecordType::Other);
        assert_eq!(RecordType::of("! comment"), RecordType::Other);
        assert_eq!(RecordType::of(""), RecordType::Other);
    }

    #[test]
    fn test_format_id_is_last_field() {
        let record = Record::parse("  F 1 2 3  ");
        assert_eq!(record.kind, RecordType::Format);
        assert_eq!(record.format_id(), Some("3"));

        assert_eq!(Record::parse("F3").format_id(), Some("3"));
        assert_eq!(Record::parse("F").format_id(), None);
        assert_eq!(Record::parse("V 1 2 3 4").format_id(), None);
    }

    #[test]
    fn test_vertex_record() {
        let record = Record::parse("V 2 1.0 2. 3.e1 extra");
        assert_eq!(parse_vertex_id(&record.fields, 2).unwrap(), 2);
        assert_eq!(parse_vertex_position(&record.fields, 2).unwrap(), [1.0, 2.0, 30.0]);
    }

    #[test]
    fn test_vertex_insufficient_fields_names_entry() {
        let record = Record::parse("V 7 1.0 2.0");
        match parse_vertex_id(&record.fields, 3) {
            Err(ParseError::InsufficientFields { kind, entry }) => {
                assert_eq!(kind, RecordKind::Vertex);
                assert_eq!(entry, 3);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_vertex_bad_coordinate_names_axis() {
        let record = Record::parse("V 1 0 0 zz");
        match parse_vertex_position(&record.fields, 1) {
            Err(ParseError::InvalidFloat { field, token }) => {
                assert_eq!(field, Field::Coordinate { axis: Axis::Z, vertex: 1 });
                assert_eq!(token, "zz");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    fn surface_indices(line: &str, entry: u32) -> Result<(u32, [u32; 4])> {
        let record = Record::parse(line);
        let id = parse_surface_id(&record.fields, entry)?;
        let mut indices = [0; 4];
        for slot in VertexSlot::ALL {
            indices[slot as usize] = parse_surface_index(&record.fields, slot, id)?;
        }
        Ok((id, indices))
    }

    #[test]
    fn test_surface_fields() {
        let (id, indices) = surface_indices("S 1 1 2 3 4 0 0 0 floor", 1).unwrap();
        assert_eq!(id, 1);
        assert_eq!(indices, [1, 2, 3, 4]);
        assert_eq!(Record::parse("S 1 1 2 3 4 0 0 0 floor").fields[SURFACE_NAME_FIELD], "floor");

        let (id, indices) = surface_indices("s 2 1 2 3 0 0 0 0 roof", 2).unwrap();
        assert_eq!(id, 2);
        assert_eq!(indices, [1, 2, 3, 0]);
    }

    #[test]
    fn test_surface_zero_only_in_fourth_slot() {
        assert!(matches!(
            surface_indices("S 1 0 2 3 4 0 0 0 a", 1),
            Err(ParseError::InvalidInteger {
                field: Field::SurfaceVertex { slot: VertexSlot::First, surface: 1 },
                ..
            })
        ));
    }

    #[test]
    fn test_surface_insufficient_fields() {
        assert!(matches!(
            surface_indices("S 1 1 2 3 0 0 0 0", 1),
            Err(ParseError::InsufficientFields { kind: RecordKind::Surface, entry: 1 })
        ));
    }
}
