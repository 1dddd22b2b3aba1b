use percent_encoding::percent_decode_str;

/// ASCII whitespace, as HTML defines it for attribute value lists
pub const WHITESPACES: &[char] = &[' ', '\t', '\n', '\x0c', '\r'];

/// A reference found in an attribute value, split into the portion that names
/// a resource and the portion (query string and/or fragment) that must be
/// carried over unchanged when the reference is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlRef<'a> {
    /// Everything up to the first `?` or `#`
    pub path: &'a str,
    /// The rest of the value, beginning with `?` or `#`; may be empty
    pub trailing: &'a str,
}

impl<'a> UrlRef<'a> {
    /// Reassembles the reference with a replacement path portion
    pub fn with_path(&self, path: &str) -> String {
        let mut result = String::with_capacity(path.len() + self.trailing.len());
        result.push_str(path);
        result.push_str(self.trailing);
        result
    }
}

/// Splits an attribute value into path and trailing portions.
///
/// A value is a candidate reference when it starts with a non-empty run of
/// characters free of `?`, `#`, whitespace, and `)`; whatever follows (from
/// the first `?` or `#`) may contain further `?`/`#` but no whitespace or
/// `)`. Returns `None` for everything else: empty values, values that begin
/// with a query or fragment, and values with embedded whitespace.
///
/// Remote URLs still split successfully here; whether a reference is an
/// actual dependency is decided by resolving it and checking the filesystem,
/// never by inspecting the scheme.
pub fn split_url_ref(value: &str) -> Option<UrlRef> {
    if value.is_empty() || value.contains(|c: char| c.is_ascii_whitespace() || c == ')') {
        return None;
    }

    let path_end = value.find(['?', '#']).unwrap_or(value.len());
    if path_end == 0 {
        return None;
    }

    Some(UrlRef {
        path: &value[..path_end],
        trailing: &value[path_end..],
    })
}

/// Percent-decodes a reference so it can be resolved against the filesystem
/// (e.g. `my%20pic.jpg` names the file `my pic.jpg`)
pub fn decode_reference(reference: &str) -> String {
    percent_decode_str(reference)
        .decode_utf8()
        .map(|decoded| decoded.to_string())
        .unwrap_or_else(|_| reference.to_string())
}
