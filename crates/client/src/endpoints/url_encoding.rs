//! URL encoding utilities for constructing safe API paths.
//!
//! Provides percent-encoding for the object type path segment so that a
//! configured type name can never escape `/crm/v3/objects/{objectType}`.
//!
//! # Security Considerations
//!
//! Without percent-encoding, special characters in an object type could:
//! - Cause path traversal (e.g., `p_a/b` would create a nested path)
//! - Break URL parsing (e.g., `p_a?b` would create a query parameter)
//! - Cause double-decode issues (e.g., `p%20a` might be decoded prematurely)
//!
//! # Example
//!
//! ```
//! use cobj_client::endpoints::url_encoding::encode_path_segment;
//!
//! let encoded = encode_path_segment("p_projects/archive");
//! assert_eq!(encoded, "p_projects%2Farchive");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// Based on RFC 3986 section 3.3, plus additional characters that are
/// reserved or commonly mangled by proxies:
/// - Space, quotes, angle brackets: problematic in URLs
/// - Backslash, pipe, caret, backtick, tilde: often blocked or problematic
/// - Plus, comma, semicolon: can have special meaning in some contexts
/// - Curly braces, square brackets: reserved in URI templates
/// - Percent: must be encoded to prevent double-encoding issues
/// - Slash: must be encoded to prevent path traversal
/// - Question mark and hash: have special URL meaning
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')      // Space
    .add(b'"')      // Double quote
    .add(b'<')      // Less than
    .add(b'>')      // Greater than
    .add(b'`')      // Backtick
    .add(b'{')      // Left curly brace
    .add(b'}')      // Right curly brace
    .add(b'|')      // Pipe
    .add(b'\\')     // Backslash
    .add(b'^')      // Caret
    .add(b'~')      // Tilde
    .add(b'%')      // Percent (prevents double-encoding)
    .add(b'/')      // Forward slash (prevents path traversal)
    .add(b'?')      // Question mark
    .add(b'#')      // Hash
    .add(b'+')      // Plus
    .add(b',')      // Comma
    .add(b';')      // Semicolon
    .add(b'[')      // Left square bracket
    .add(b']'); // Right square bracket

/// Percent-encode a string for safe use as a URL path segment.
///
/// Used for any configured value interpolated into a URL path. Object type
/// ids such as `2-1234567` and names such as `p_projects` pass through
/// unchanged.
///
/// # Examples
///
/// ```
/// use cobj_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("p_projects"), "p_projects");
/// assert_eq!(encode_path_segment("2-1234567"), "2-1234567");
/// assert_eq!(encode_path_segment("my type"), "my%20type");
/// assert_eq!(encode_path_segment("a/b"), "a%2Fb");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
