// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Two-pass scene builder
//!
//! The first pass only looks for the format record. The input is then
//! rewound and read again from the top, turning vertex and surface records
//! into a [`Scene`] while enforcing sequential numbering and backward-only
//! vertex references.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::Path;

use smallvec::SmallVec;
use tracing::{debug, info};

use crate::error::{ParseError, RecordKind, Result, VertexSlot};
use crate::record::{
    parse_surface_id, parse_surface_index, parse_vertex_id, parse_vertex_position, Record,
    RecordType, SURFACE_NAME_FIELD,
};
use crate::scene::Scene;

/// The only format identifier this reader understands
pub const FORMAT_3: &str = "3";
/// Known but unsupported alternate format
pub const FORMAT_3A: &str = "3a";

/// Where the builder is in its scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    ScanningForFormat,
    ScanningBody,
    Done,
}

/// Reads a View3D file into a [`Scene`].
#[derive(Debug)]
pub struct SceneBuilder {
    state: ScanState,
    line: Vec<u8>,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self {
            state: ScanState::ScanningForFormat,
            line: Vec::new(),
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Run both passes over `reader`.
    ///
    /// The builder ends in [`ScanState::Done`] whether or not the parse
    /// succeeds; a failed parse yields no scene.
    pub fn build<R: BufRead + Seek>(&mut self, mut reader: R) -> Result<Scene> {
        self.state = ScanState::ScanningForFormat;
        let result = self.run(&mut reader);
        self.state = ScanState::Done;
        result
    }

    fn run<R: BufRead + Seek>(&mut self, reader: &mut R) -> Result<Scene> {
        let format = self.scan_format(reader)?;
        reader.rewind()?;

        match format.as_deref() {
            Some(FORMAT_3) => {}
            Some(FORMAT_3A) => return Err(ParseError::UnsupportedFormat(FORMAT_3A.to_string())),
            _ => return Err(ParseError::UnrecognizedFormat(format)),
        }

        self.state = ScanState::ScanningBody;
        let scene = self.scan_body(reader)?;
        info!(
            vertices = scene.vertex_count(),
            surfaces = scene.surface_count(),
            "View3D scene parsed"
        );
        Ok(scene)
    }

    /// Read one raw line into the buffer; `false` at end of input
    fn next_line<R: BufRead>(&mut self, reader: &mut R) -> Result<bool> {
        self.line.clear();
        Ok(reader.read_until(b'\n', &mut self.line)? > 0)
    }

    /// First pass: identifier of the first format record, if any
    fn scan_format<R: BufRead>(&mut self, reader: &mut R) -> Result<Option<String>> {
        while self.next_line(reader)? {
            let text = String::from_utf8_lossy(&self.line);
            let record = Record::parse(&text);
            if record.kind == RecordType::Format {
                let format = record.format_id().map(str::to_string);
                debug!(format = ?format, "format record found");
                return Ok(format);
            }
        }
        debug!("no format record found");
        Ok(None)
    }

    /// Second pass over a format 3 body
    fn scan_body<R: BufRead>(&mut self, reader: &mut R) -> Result<Scene> {
        let mut scene = Scene::new();

        while self.next_line(reader)? {
            // Titles and comments may carry non-UTF-8 text
            let text = String::from_utf8_lossy(&self.line);
            let record = Record::parse(&text);
            match record.kind {
                RecordType::Vertex => read_vertex(&mut scene, &record.fields)?,
                RecordType::Surface => read_surface(&mut scene, &record.fields)?,
                RecordType::End => {
                    debug!("end record, stopping scan");
                    break;
                }
                RecordType::Format | RecordType::Other => {}
            }
        }

        Ok(scene)
    }
}

fn read_vertex(scene: &mut Scene, fields: &[&str]) -> Result<()> {
    let expected = scene.vertex_count() as u32 + 1;
    let id = parse_vertex_id(fields, expected)?;
    if id != expected {
        return Err(ParseError::NonsequentialId {
            kind: RecordKind::Vertex,
            found: id,
        });
    }

    let position = parse_vertex_position(fields, id)?;
    scene.push_vertex(position);
    Ok(())
}

fn read_surface(scene: &mut Scene, fields: &[&str]) -> Result<()> {
    let expected = scene.surface_count() as u32 + 1;
    let id = parse_surface_id(fields, expected)?;
    if id != expected {
        return Err(ParseError::NonsequentialId {
            kind: RecordKind::Surface,
            found: id,
        });
    }

    let defined = scene.vertex_count();
    let mut corners = SmallVec::new();
    for slot in VertexSlot::ALL {
        let index = parse_surface_index(fields, slot, id)?;
        if index as usize > defined {
            return Err(ParseError::UndefinedVertexReference { slot, surface: id });
        }
        // 0 only passes in the fourth slot and marks a triangle
        if let Some(vref) = scene.vertex_ref(index) {
            corners.push(vref);
        }
    }

    scene.push_surface(fields[SURFACE_NAME_FIELD], corners);
    Ok(())
}

/// Parse a View3D scene from a rewindable reader.
pub fn parse<R: BufRead + Seek>(reader: R) -> Result<Scene> {
    SceneBuilder::new().build(reader)
}

/// Parse a View3D scene held in memory.
pub fn parse_str(content: &str) -> Result<Scene> {
    parse(Cursor::new(content.as_bytes()))
}

/// Open and parse a View3D file.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading View3D file");
    let file = File::open(path)?;
    parse(BufReader::new(file))
}
