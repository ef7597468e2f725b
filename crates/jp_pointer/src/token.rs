use alloc::borrow::Cow;
use alloc::borrow::ToOwned;
use alloc::string::String;
use core::fmt;

use crate::PointerError;

// -----------------------------------------------------------------------------
// Token

/// One unescaped, `/`-delimited segment of a pointer.
///
/// `field` is the literal key used against maps and structs. `index` is the
/// segment read as a sequence index: `"0"`, or digits without a leading zero
/// that fit in a `usize`. Anything else, including `-`, has no index.
///
/// ```
/// use jp_pointer::Token;
///
/// let token = Token::parse("~01").unwrap();
/// assert_eq!(token.field(), "~1");
/// assert_eq!(token.index(), None);
///
/// assert_eq!(Token::parse("12").unwrap().index(), Some(12));
/// assert_eq!(Token::parse("012").unwrap().index(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Token {
    field: String,
    index: Option<usize>,
}

impl Token {
    /// Parses a single segment, without the leading `/`.
    ///
    /// `~0` becomes `~` and `~1` becomes `/`. Any other `~`, including a
    /// trailing one, is [`PointerError::InvalidToken`] carrying `segment`.
    pub fn parse(segment: &str) -> Result<Self, PointerError> {
        let field = unescape(segment)?;
        let index = parse_index(&field);
        Ok(Self {
            field: field.into_owned(),
            index,
        })
    }

    /// Returns the unescaped segment text.
    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the segment as a sequence index, if it is one.
    #[inline]
    pub const fn index(&self) -> Option<usize> {
        self.index
    }

    /// Returns `true` for the `-` append marker.
    #[inline]
    pub fn is_append_marker(&self) -> bool {
        self.field == "-"
    }

    /// Writes the field with `~` escaped to `~0` and `/` to `~1`.
    pub fn write_escaped<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        let mut rest = self.field.as_str();
        while let Some(at) = rest.find(['~', '/']) {
            out.write_str(&rest[..at])?;
            out.write_str(if rest.as_bytes()[at] == b'~' { "~0" } else { "~1" })?;
            rest = &rest[at + 1..];
        }
        out.write_str(rest)
    }
}

impl fmt::Display for Token {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.field)
    }
}

fn unescape(segment: &str) -> Result<Cow<'_, str>, PointerError> {
    let Some(first) = segment.find('~') else {
        return Ok(Cow::Borrowed(segment));
    };

    let mut out = String::with_capacity(segment.len());
    out.push_str(&segment[..first]);

    let mut chars = segment[first..].chars();
    while let Some(c) = chars.next() {
        if c != '~' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => out.push('~'),
            Some('1') => out.push('/'),
            _ => return Err(PointerError::InvalidToken(segment.to_owned())),
        }
    }

    Ok(Cow::Owned(out))
}

fn parse_index(field: &str) -> Option<usize> {
    match field.as_bytes() {
        [b'0'] => Some(0),
        [b'1'..=b'9', rest @ ..] if rest.iter().all(u8::is_ascii_digit) => field.parse().ok(),
        _ => None,
    }
}

// -----------------------------------------------------------------------------
// Tests
