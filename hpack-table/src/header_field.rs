//! Header field representation.
//!
//! A header field is a name-value pair. Both halves are opaque octet
//! sequences; nothing here assumes they are valid UTF-8.

use bytes::Bytes;
use std::fmt;

/// Per-entry overhead added to the name and value lengths when accounting
/// for table size (RFC 7541 Section 4.1).
pub const ENTRY_OVERHEAD: u32 = 32;

/// An HTTP header field (name-value pair).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct HeaderField {
    name: Bytes,
    value: Bytes,
    sensitive: bool,
}

impl HeaderField {
    /// Creates a new header field that may be indexed.
    pub fn new(name: impl Into<Bytes>, value: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            sensitive: false,
        }
    }

    /// Creates a header field that must never be reused by exact index
    /// reference, e.g. an authorization secret.
    pub fn sensitive(name: impl Into<Bytes>, value: impl Into<Bytes>) -> Self {
        Self {
            sensitive: true,
            ..Self::new(name, value)
        }
    }

    pub fn name(&self) -> &Bytes {
        &self.name
    }

    pub fn value(&self) -> &Bytes {
        &self.value
    }

    pub fn is_sensitive(&self) -> bool {
        self.sensitive
    }

    /// Returns the size of this field for dynamic table accounting.
    ///
    /// Per RFC 7541 Section 4.1: size = name_len + value_len + 32, measured
    /// before any Huffman coding. A field built by hand with lengths near
    /// `u32::MAX` wraps; the wire encoding cannot produce one.
    pub fn size(&self) -> u32 {
        (self.name.len() as u32)
            .wrapping_add(self.value.len() as u32)
            .wrapping_add(ENTRY_OVERHEAD)
    }
}

impl fmt::Debug for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HeaderField({:?}: {:?}{})",
            String::from_utf8_lossy(&self.name),
            String::from_utf8_lossy(&self.value),
            if self.sensitive { ", sensitive" } else { "" }
        )
    }
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "header field {:?} = {:?}",
            String::from_utf8_lossy(&self.name),
            String::from_utf8_lossy(&self.value)
        )?;
        if self.sensitive {
            f.write_str(" (sensitive)")?;
        }
        Ok(())
    }
}

impl From<(&'static str, &'static str)> for HeaderField {
    fn from((name, value): (&'static str, &'static str)) -> Self {
        Self::new(name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_field_size() {
        let field = HeaderField::new("name", "value");
        assert_eq!(field.size(), 4 + 5 + 32);

        assert_eq!(HeaderField::new("", "").size(), 32);
        assert_eq!(HeaderField::sensitive("auth", "secret").size(), 4 + 6 + 32);
    }

    #[test]
    fn test_header_field_from_tuple() {
        let field: HeaderField = (":method", "GET").into();
        assert_eq!(&field.name()[..], b":method");
        assert_eq!(&field.value()[..], b"GET");
        assert!(!field.is_sensitive());
    }

    #[test]
    fn test_sensitive_is_part_of_equality() {
        let plain = HeaderField::new("auth", "secret");
        let secret = HeaderField::sensitive("auth", "secret");
        assert!(secret.is_sensitive());
        assert_ne!(plain, secret);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            HeaderField::new("content-type", "text/plain").to_string(),
            r#"header field "content-type" = "text/plain""#
        );
        assert_eq!(
            HeaderField::sensitive("authorization", "Bearer x").to_string(),
            r#"header field "authorization" = "Bearer x" (sensitive)"#
        );
    }

    #[test]
    fn test_non_utf8_bytes() {
        let field = HeaderField::new(Bytes::from_static(b"x-bin"), vec![0xff, 0xfe]);
        assert_eq!(field.size(), 5 + 2 + 32);
        assert!(format!("{:?}", field).starts_with("HeaderField(\"x-bin\""));
    }
}
