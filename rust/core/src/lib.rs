// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # View3D Core Parser
//!
//! Strict reader for View3D surface description files (`.vs3`, format `3`).
//!
//! ## Overview
//!
//! - **Record parsing**: one line per record, typed by its first character
//! - **Numeric recovery**: tolerant of `3.` and `1.e5` float tokens, nothing else
//! - **Scene building**: two passes (format discovery, then body) with
//!   sequential numbering and backward-only vertex references enforced
//! - **Units**: scale and unit conversion handed to the importing host
//!
//! ## Quick Start
//!
//! ```rust
//! use view3d_core::parse_str;
//!
//! let content = "F 3\nV 1 0 0 0\nV 2 1 0 0\nV 3 0 1 0\nS 1 1 2 3 0 0 0 0 wall\nE\n";
//! let scene = parse_str(content).unwrap();
//!
//! for surface in scene.surfaces() {
//!     println!("{}", surface);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` for the scene model

pub mod builder;
pub mod error;
pub mod numeric;
pub mod record;
pub mod scene;
pub mod session;
pub mod units;

pub use builder::{load_file, parse, parse_str, ScanState, SceneBuilder};
pub use error::{
    Axis, Field, IntegerReason, ParseError, RecordKind, Result, SessionError, UnitError,
    VertexSlot,
};
pub use numeric::{parse_float, parse_integer};
pub use record::{Record, RecordType};
pub use scene::{Scene, Surface, Vertex, VertexRef};
pub use session::Session;
pub use units::{LengthUnit, UnitTransform};
