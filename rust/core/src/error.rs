// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for View3D parsing, unit handling and sessions.

use std::fmt;

use thiserror::Error;

/// Result type for parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// The record kinds that carry sequence numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Vertex,
    Surface,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Vertex => "vertex",
            RecordKind::Surface => "surface",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a vertex index within a surface record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexSlot {
    First,
    Second,
    Third,
    Fourth,
}

impl VertexSlot {
    pub const ALL: [VertexSlot; 4] = [
        VertexSlot::First,
        VertexSlot::Second,
        VertexSlot::Third,
        VertexSlot::Fourth,
    ];

    /// Ordinal used in messages ("first", "second", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            VertexSlot::First => "first",
            VertexSlot::Second => "second",
            VertexSlot::Third => "third",
            VertexSlot::Fourth => "fourth",
        }
    }
}

impl fmt::Display for VertexSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coordinate axis of a vertex record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        })
    }
}

/// Which field of which record a numeric token came from.
///
/// Carried by numeric errors so the message can point at the offending
/// field without formatting a context string for every token parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Id of the vertex expected at this entry
    VertexNumber { entry: u32 },
    /// Coordinate of an already numbered vertex
    Coordinate { axis: Axis, vertex: u32 },
    /// Id of the surface expected at this entry
    SurfaceNumber { entry: u32 },
    /// Vertex index inside a numbered surface
    SurfaceVertex { slot: VertexSlot, surface: u32 },
    /// User supplied scale factor
    ScaleFactor,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Field::VertexNumber { entry } => {
                write!(f, "Bad vertex number in vertex entry {}", entry)
            }
            Field::Coordinate { axis, vertex } => {
                write!(f, "Bad {} value in vertex {}", axis, vertex)
            }
            Field::SurfaceNumber { entry } => {
                write!(f, "Bad surface number in surface entry {}", entry)
            }
            Field::SurfaceVertex { slot, surface } => {
                write!(f, "Bad {} vertex number in surface {}", slot, surface)
            }
            Field::ScaleFactor => f.write_str("Bad scale factor"),
        }
    }
}

/// Why an integer token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerReason {
    ZeroNotPermitted,
    NotPositive,
    NotNonnegative,
    OutOfRange,
}

impl fmt::Display for IntegerReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IntegerReason::ZeroNotPermitted => "0 not permitted",
            IntegerReason::NotPositive => "number must be a positive integer",
            IntegerReason::NotNonnegative => "number must be a nonnegative integer",
            IntegerReason::OutOfRange => "number is out of range",
        })
    }
}

/// Errors that can occur while reading a View3D file.
///
/// Every variant aborts the parse; no partial scene is produced.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Insufficient data in {kind} entry {entry}")]
    InsufficientFields { kind: RecordKind, entry: u32 },

    #[error("{field} - {reason}")]
    InvalidInteger { field: Field, reason: IntegerReason },

    #[error("{field}: {token:?}")]
    InvalidFloat { field: Field, token: String },

    #[error("Nonsequential {kind} number detected in {kind} {found}")]
    NonsequentialId { kind: RecordKind, found: u32 },

    #[error("{} vertex in surface {surface} is undefined", slot_title(.slot))]
    UndefinedVertexReference { slot: VertexSlot, surface: u32 },

    #[error("Format {0} not yet supported")]
    UnsupportedFormat(String),

    #[error("Unrecognized format {}", describe_format(.0))]
    UnrecognizedFormat(Option<String>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn slot_title(slot: &VertexSlot) -> &'static str {
    match slot {
        VertexSlot::First => "First",
        VertexSlot::Second => "Second",
        VertexSlot::Third => "Third",
        VertexSlot::Fourth => "Fourth",
    }
}

fn describe_format(format: &Option<String>) -> String {
    match format {
        Some(format) => format!("\"{}\"", format),
        None => "(no format record found)".to_string(),
    }
}

/// Errors from the user supplied scale/units pair.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("Invalid scale factor {0:?}")]
    InvalidScale(String),

    #[error("Unknown units {0:?} (expected m, cm, ft or in)")]
    UnknownUnit(String),
}

/// Errors surfaced by [`crate::session::Session`].
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Units(#[from] UnitError),
}
