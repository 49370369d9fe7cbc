// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building host geometry
#[derive(Error, Debug)]
pub enum Error {
    #[error("Degenerate face: {0}")]
    DegenerateFace(String),

    #[error("Host rejected surface {surface}")]
    HostFace {
        surface: u32,
        #[source]
        source: Box<Error>,
    },

    #[error("Core parser error: {0}")]
    CoreError(#[from] view3d_core::ParseError),
}
