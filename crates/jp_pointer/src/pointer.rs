use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;
use core::str::FromStr;

use jp_reflect::Reflect;
use serde_core::de::{self, Deserialize, Deserializer, Visitor};
use serde_core::ser::{Serialize, Serializer};

use crate::resolve::{downcast, resolve, segments};
use crate::{FieldCache, PointerError, Token};

// -----------------------------------------------------------------------------
// Pointer

/// A parsed JSON pointer.
///
/// A `Pointer` is immutable and cheap to share. Parse it once and resolve it
/// against any number of values; it can also be turned back into the exact
/// text it was parsed from.
///
/// # Examples
///
/// ```
/// use jp_pointer::Pointer;
/// use serde_json::{Value, json};
///
/// let ptr = Pointer::parse("/a~1b/0").unwrap();
/// assert_eq!(ptr.len(), 2);
/// assert_eq!(ptr.token(0), Some("a/b"));
/// assert_eq!(ptr.to_string(), "/a~1b/0");
///
/// let doc = json!({ "a/b": ["x"] });
/// assert_eq!(ptr.get_as::<Value>(&doc), Ok(&json!("x")));
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Pointer(Box<[Token]>);

impl Pointer {
    /// The pointer with no tokens. It resolves to the value itself.
    #[inline]
    pub fn root() -> Self {
        Self::default()
    }

    /// Parses pointer text.
    ///
    /// The text must be empty or start with `/`.
    pub fn parse(text: &str) -> Result<Self, PointerError> {
        let Some(segments) = segments(text)? else {
            return Ok(Self::root());
        };
        segments
            .map(Token::parse)
            .collect::<Result<Vec<_>, _>>()
            .map(|tokens| Self(tokens.into_boxed_slice()))
    }

    /// Parses pointer text from raw bytes.
    ///
    /// A segment that is not valid UTF-8 is reported as
    /// [`InvalidToken`](PointerError::InvalidToken).
    pub fn parse_bytes(bytes: &[u8]) -> Result<Self, PointerError> {
        let Some(rest) = bytes.strip_prefix(b"/") else {
            return match bytes {
                [] => Ok(Self::root()),
                _ => Err(PointerError::InvalidPointer(
                    String::from_utf8_lossy(bytes).into_owned(),
                )),
            };
        };

        rest.split(|byte| *byte == b'/')
            .map(|segment| match core::str::from_utf8(segment) {
                Ok(segment) => Token::parse(segment),
                Err(_) => Err(PointerError::InvalidToken(
                    String::from_utf8_lossy(segment).into_owned(),
                )),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|tokens| Self(tokens.into_boxed_slice()))
    }

    /// Parses pointer text known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if `text` is not a valid pointer. Meant for literals:
    ///
    /// ```
    /// use jp_pointer::Pointer;
    ///
    /// let ptr = Pointer::from_static("/items/0");
    /// assert_eq!(ptr.len(), 2);
    /// ```
    #[track_caller]
    pub fn from_static(text: &'static str) -> Self {
        match Self::parse(text) {
            Ok(ptr) => ptr,
            Err(err) => panic!("invalid JSON pointer {text:?}: {err}"),
        }
    }

    /// Returns `true` for the root pointer.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the unescaped text of the token at `index`.
    #[inline]
    pub fn token(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(Token::field)
    }

    /// Iterates over the unescaped text of every token.
    pub fn tokens(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.0.iter().map(Token::field)
    }

    #[inline]
    pub fn as_tokens(&self) -> &[Token] {
        &self.0
    }

    /// Returns a pointer without the first `n` tokens.
    ///
    /// Trimming every token or more gives the root pointer.
    ///
    /// ```
    /// use jp_pointer::Pointer;
    ///
    /// let ptr = Pointer::from_static("/a/b/c");
    /// assert_eq!(ptr.trim(1), Pointer::from_static("/b/c"));
    /// assert!(ptr.trim(5).is_root());
    /// ```
    pub fn trim(&self, n: usize) -> Self {
        match self.0.get(n..) {
            Some(rest) => Self(rest.into()),
            None => Self::root(),
        }
    }

    /// Writes the encoded text of this pointer to `out`.
    ///
    /// This is what [`Display`](fmt::Display) prints.
    pub fn encode_into<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        for token in &self.0 {
            out.write_char('/')?;
            token.write_escaped(out)?;
        }
        Ok(())
    }

    /// Resolves this pointer against `value`.
    ///
    /// Field tables come from [`FieldCache::global`].
    #[inline]
    pub fn get<'v>(&self, value: &'v dyn Reflect) -> Result<&'v dyn Reflect, PointerError> {
        self.get_with(FieldCache::global(), value)
    }

    /// Resolves this pointer against `value`, taking field tables from `cache`.
    pub fn get_with<'v>(
        &self,
        cache: &FieldCache,
        value: &'v dyn Reflect,
    ) -> Result<&'v dyn Reflect, PointerError> {
        resolve(cache, self.0.iter().map(Ok), value)
    }

    /// Resolves this pointer and downcasts the result to `T`.
    ///
    /// `Option`, `Box` and `Arc` layers around the result are looked through.
    /// A result of another type is [`TypeMismatch`](PointerError::TypeMismatch).
    pub fn get_as<'v, T: Any>(&self, value: &'v dyn Reflect) -> Result<&'v T, PointerError> {
        downcast(self.get(value)?)
    }
}

impl fmt::Display for Pointer {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.encode_into(f)
    }
}

impl fmt::Debug for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pointer(\"{self}\")")
    }
}

impl FromStr for Pointer {
    type Err = PointerError;

    #[inline]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl TryFrom<&str> for Pointer {
    type Error = PointerError;

    #[inline]
    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::parse(text)
    }
}

// -----------------------------------------------------------------------------
// Serde

impl Serialize for Pointer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pointer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(PointerVisitor)
    }
}

struct PointerVisitor;

impl<'de> Visitor<'de> for PointerVisitor {
    type Value = Pointer;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON pointer string")
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<Pointer, E> {
        Pointer::parse(text).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, bytes: &[u8]) -> Result<Pointer, E> {
        Pointer::parse_bytes(bytes).map_err(E::custom)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::borrow::ToOwned;
    use alloc::format;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use jp_reflect::derive::Reflect;
    use serde_json::{Value, json};

    use super::Pointer;
    use crate::{FieldCache, PointerError, PointerErrorKind};

    const ROUND_TRIP: &[&str] = &[
        "", "/", "//", "/~0", "/~1", "/~01", "/~10", "/0", "/01", "/1", "/a/b/c", "/-",
    ];

    // -------------------------------------------------------------------------
    // Text

    #[test]
    fn text_round_trip() {
        for &text in ROUND_TRIP {
            let ptr = Pointer::parse(text).unwrap();
            assert_eq!(ptr.to_string(), text);
            assert_eq!(Pointer::parse_bytes(text.as_bytes()), Ok(ptr.clone()));
            assert_eq!(ptr.to_string().parse::<Pointer>(), Ok(ptr.clone()));

            let mut out = "prefix".to_owned();
            ptr.encode_into(&mut out).unwrap();
            assert_eq!(out, format!("prefix{text}"));
        }
    }

    #[test]
    fn distinct_text_distinct_pointers() {
        let pointers: Vec<_> = ROUND_TRIP.iter().map(|&t| Pointer::from_static(t)).collect();
        for (i, a) in pointers.iter().enumerate() {
            for (j, b) in pointers.iter().enumerate() {
                assert_eq!(a == b, i == j, "{a:?} vs {b:?}");
            }
        }
        assert_eq!(Pointer::root(), Pointer::parse("").unwrap());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Pointer::parse("a"),
            Err(PointerError::InvalidPointer("a".to_string()))
        );
        assert_eq!(
            Pointer::parse("/ok/~"),
            Err(PointerError::InvalidToken("~".to_string()))
        );
        assert_eq!(
            Pointer::parse_bytes(b"/a/\xff"),
            Err(PointerError::InvalidToken("\u{fffd}".to_string()))
        );
        assert_eq!(
            Pointer::parse_bytes(b"x").unwrap_err().kind(),
            PointerErrorKind::InvalidPointer
        );
        assert!("/~2".parse::<Pointer>().is_err());
    }

    #[test]
    #[should_panic(expected = "invalid JSON pointer \"/~\"")]
    fn from_static_panics() {
        Pointer::from_static("/~");
    }

    // -------------------------------------------------------------------------
    // Inspection

    #[test]
    fn tokens_and_trim() {
        let ptr = Pointer::from_static("/a~1b/~0/2");
        assert!(!ptr.is_root());
        assert_eq!(ptr.len(), 3);
        assert_eq!(ptr.token(0), Some("a/b"));
        assert_eq!(ptr.token(1), Some("~"));
        assert_eq!(ptr.token(3), None);
        assert_eq!(ptr.tokens().collect::<Vec<_>>(), ["a/b", "~", "2"]);
        assert_eq!(ptr.as_tokens()[2].index(), Some(2));

        assert_eq!(ptr.trim(0), ptr);
        assert_eq!(ptr.trim(2).to_string(), "/2");
        assert!(ptr.trim(3).is_root());
        assert!(ptr.trim(10).is_root());
        assert_eq!(format!("{:?}", ptr.trim(1)), "Pointer(\"/~0/2\")");
    }

    // -------------------------------------------------------------------------
    // Resolution

    #[derive(Reflect)]
    struct Entry {
        #[reflect(json = "name")]
        pub label: String,
    }

    #[test]
    fn resolves_repeatedly() {
        let ptr = Pointer::from_static("/1/name");
        let a = [Entry { label: "a0".into() }, Entry { label: "a1".into() }];
        let b = json!([{}, { "name": "b1" }]);

        assert_eq!(ptr.get_as::<String>(&a).unwrap(), "a1");
        assert_eq!(ptr.get_as::<Value>(&b), Ok(&json!("b1")));

        let root = Pointer::root();
        assert!(root.get(&a).unwrap().is::<[Entry; 2]>());
    }

    #[test]
    fn resolves_with_private_cache() {
        let cache = FieldCache::new();
        let ptr = Pointer::from_static("/name");
        let entry = Entry { label: "x".into() };

        let found = ptr.get_with(&cache, &entry).unwrap();
        assert_eq!(found.downcast_ref::<String>().unwrap(), "x");
        assert_eq!(cache.len(), 1);

        // Sequences and JSON never touch the field cache.
        Pointer::from_static("/0").get_with(&cache, &json!([1])).unwrap();
        assert_eq!(cache.len(), 1);
    }

    // -------------------------------------------------------------------------
    // Serde

    #[test]
    fn serde_uses_text_form() {
        let ptr = Pointer::from_static("/a~1b/~0");
        let encoded = serde_json::to_string(&ptr).unwrap();
        assert_eq!(encoded, "\"/a~1b/~0\"");
        assert_eq!(serde_json::from_str::<Pointer>(&encoded).unwrap(), ptr);

        let err = serde_json::from_str::<Pointer>("\"nope\"").unwrap_err();
        assert!(err.to_string().contains("invalid JSON pointer"), "{err}");

        let list: Vec<Pointer> = serde_json::from_value(json!(["", "/x"])).unwrap();
        assert!(list[0].is_root());
        assert_eq!(list[1].token(0), Some("x"));
    }
}
