// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Numeric token conversion
//!
//! Ids and vertex indices must be plain decimal digit strings. Coordinates
//! go through a strict decimal grammar first; two narrow rewrites recover the
//! float shapes some exporters emit (`3.` and `1.e5`). Nothing else is
//! accepted, so `inf`, `nan` and hex literals are rejected.

use nom::{
    branch::alt,
    character::complete::{char, digit1, one_of},
    combinator::{all_consuming, opt, recognize},
    sequence::{pair, tuple},
    IResult,
};

use crate::error::{Field, IntegerReason, ParseError, Result};

/// Parse an id or vertex index.
///
/// Every character must be an ASCII digit. With `allow_zero` set, `0` is
/// accepted; surfaces use this for the fourth vertex slot where zero marks a
/// triangle.
pub fn parse_integer(token: &str, field: Field, allow_zero: bool) -> Result<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        let reason = if allow_zero {
            IntegerReason::NotNonnegative
        } else {
            IntegerReason::NotPositive
        };
        return Err(ParseError::InvalidInteger { field, reason });
    }

    let value = lexical_core::parse::<u32>(token.as_bytes()).map_err(|_| {
        ParseError::InvalidInteger {
            field,
            reason: IntegerReason::OutOfRange,
        }
    })?;

    if value == 0 && !allow_zero {
        return Err(ParseError::InvalidInteger {
            field,
            reason: IntegerReason::ZeroNotPermitted,
        });
    }

    Ok(value)
}

/// Parse a coordinate value.
///
/// On a failed strict parse the token is trimmed and lowercased, then exactly
/// one rewrite is tried: a trailing `.` is dropped, or else the first `.e`
/// becomes `.0e`.
pub fn parse_float(token: &str, field: Field) -> Result<f64> {
    if let Some(value) = strict_float(token) {
        return Ok(value);
    }

    let normalized = token.trim().to_lowercase();
    let candidate = match normalized.strip_suffix('.') {
        Some(stripped) => stripped.to_string(),
        None => normalized.replacen(".e", ".0e", 1),
    };

    strict_float(&candidate).ok_or_else(|| ParseError::InvalidFloat {
        field,
        token: token.to_string(),
    })
}

/// Decimal literal: [+-] (digits [. digits] | . digits) [(e|E) [+-] digits]
fn decimal(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit1)))),
            recognize(pair(char('.'), digit1)),
        )),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

fn strict_float(token: &str) -> Option<f64> {
    let (_, literal) = all_consuming(decimal)(token).ok()?;
    let literal = literal.strip_prefix('+').unwrap_or(literal);
    fast_float::parse::<f64, _>(literal).ok()
}
