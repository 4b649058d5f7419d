//! A line-level parser for GLSL variable declarations.
//!
//! This is deliberately not a compiler frontend. A declaration is recognized
//! only when a line starts (after leading whitespace) with the `in` or
//! `uniform` qualifier; everything past the identifier and its optional array
//! suffix is ignored, and the downstream GLSL compiler stays the authority on
//! whether the source is actually valid.

pub mod scanner;

pub use self::scanner::Scanner;

use crate::variables::BaseType;

/// The storage qualifier of a recognized declaration. `In` is only
/// meaningful on the vertex stage, where attributes are fed from the host.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Qualifier {
    In,
    Uniform,
}

/// One parsed variable declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub qualifier: Qualifier,
    pub name: String,
    pub base: BaseType,
    /// Number of columns per entry, i.e. 3 for both `vec3` and `mat3`.
    pub components: u32,
    /// Number of rows for matrices, 0 otherwise.
    pub rows: u32,
    /// Array length, 1 when the declaration carries no array suffix.
    pub array_len: u32,
}

/// Parses a single source line for a variable declaration. `in` declarations
/// are recognized only when `vertex_stage` is set, since only vertex shaders
/// take their inputs from the host program.
///
/// Declarations with an unrecognized type token or a malformed array suffix
/// are dropped with a diagnostic rather than kept with zeroed fields.
pub fn parse_line(line: &str, vertex_stage: bool) -> Option<Declaration> {
    let s = line.trim_start();
    if vertex_stage && s.starts_with("in ") {
        parse_declaration(Qualifier::In, &s[3..])
    } else if s.starts_with("uniform ") {
        parse_declaration(Qualifier::Uniform, &s[8..])
    } else {
        None
    }
}

fn is_ident_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

fn parse_declaration(qualifier: Qualifier, s: &str) -> Option<Declaration> {
    let bytes = s.as_bytes();

    // Type token.
    let start = bytes.iter().position(|&c| is_ident_char(c))?;
    let mut i = start;
    while i < bytes.len() && is_ident_char(bytes[i]) {
        i += 1;
    }

    let (base, components, rows) = match parse_type(&s[start..i]) {
        Some(v) => v,
        None => {
            warn!("Unknown GLSL data type in declaration {:?}.", s.trim_end());
            return None;
        }
    };

    // Identifier.
    let start = i + bytes[i..].iter().position(|&c| is_ident_char(c))?;
    let mut i = start;
    while i < bytes.len() && is_ident_char(bytes[i]) {
        i += 1;
    }

    let name = s[start..i].to_string();

    let array_len = match parse_array(&bytes[i..]) {
        Some(v) => v,
        None => {
            warn!("Malformed array suffix on declaration of [{}].", name);
            return None;
        }
    };

    Some(Declaration {
        qualifier,
        name,
        base,
        components,
        rows,
        array_len,
    })
}

/// Identifies a GLSL type token, returning the component type, the number of
/// columns and the number of rows (0 for non-matrices).
///
/// Matching is by prefix, so a token with a valid type as its prefix
/// (`mat33`, `vec3x`) resolves to that type instead of being rejected. Plain
/// `float` scalars are not part of the recognized grammar.
fn parse_type(s: &str) -> Option<(BaseType, u32, u32)> {
    match *s.as_bytes().first()? {
        b'm' => {
            if s.starts_with("mat") {
                let (components, rows) = parse_matrix(&s[3..])?;
                Some((BaseType::Float, components, rows))
            } else {
                None
            }
        }
        b'd' => {
            if s.starts_with("dmat") {
                let (components, rows) = parse_matrix(&s[4..])?;
                Some((BaseType::Double, components, rows))
            } else if s.starts_with("double") {
                Some((BaseType::Double, 1, 0))
            } else {
                parse_vector(&s[1..]).map(|n| (BaseType::Double, n, 0))
            }
        }
        b'v' => parse_vector(s).map(|n| (BaseType::Float, n, 0)),
        b'b' => {
            if let Some(n) = parse_vector(&s[1..]) {
                // Booleans are stored as bytes.
                Some((BaseType::Byte, n, 0))
            } else if s.starts_with("bool") {
                Some((BaseType::Byte, 1, 0))
            } else {
                None
            }
        }
        b'i' => {
            if let Some(n) = parse_vector(&s[1..]) {
                Some((BaseType::Int, n, 0))
            } else if s.starts_with("int") {
                Some((BaseType::Int, 1, 0))
            } else {
                None
            }
        }
        b'u' => {
            if let Some(n) = parse_vector(&s[1..]) {
                Some((BaseType::UnsignedInt, n, 0))
            } else if s.starts_with("uint") {
                Some((BaseType::UnsignedInt, 1, 0))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Parses the `vec{2,3,4}` part of a vector type token.
fn parse_vector(s: &str) -> Option<u32> {
    if !s.starts_with("vec") {
        return None;
    }

    match s.as_bytes().get(3)? {
        b'2' => Some(2),
        b'3' => Some(3),
        b'4' => Some(4),
        _ => None,
    }
}

/// Parses the dimensions following a `mat` prefix: a single digit for square
/// matrices, or `{2,3,4}x{2,3,4}` for the non-square forms.
fn parse_matrix(s: &str) -> Option<(u32, u32)> {
    let bytes = s.as_bytes();
    let components = match bytes.first()? {
        b'2' => 2,
        b'3' => 3,
        b'4' => 4,
        _ => return None,
    };

    if bytes.get(1) == Some(&b'x') {
        let rows = match bytes.get(2)? {
            b'2' => 2,
            b'3' => 3,
            b'4' => 4,
            _ => return None,
        };

        Some((components, rows))
    } else {
        Some((components, components))
    }
}

/// Parses an optional array suffix. No suffix yields a length of 1; a
/// non-digit before the closing bracket or a missing bracket yields `None`,
/// which discards the whole declaration.
fn parse_array(bytes: &[u8]) -> Option<u32> {
    if bytes.first() != Some(&b'[') {
        return Some(1);
    }

    let mut count = 0;
    for &c in &bytes[1..] {
        match c {
            b'0'..=b'9' => count = count * 10 + u32::from(c - b'0'),
            b']' => return Some(count),
            _ => return None,
        }
    }

    None
}
