use serde::Deserialize;

/// A resource locator as given by the host: scheme plus a scheme-specific part.
///
/// The raw string is kept untouched; components are derived on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct Locator {
    raw: String,
}

impl Locator {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The scheme, if the locator starts with a syntactically valid one.
    pub fn scheme(&self) -> Option<&str> {
        let (scheme, _) = self.raw.split_once(':')?;
        is_valid_scheme(scheme).then_some(scheme)
    }

    /// Everything after `scheme:`, or the whole string for scheme-less locators.
    pub fn scheme_specific_part(&self) -> &str {
        match self.scheme() {
            Some(scheme) => &self.raw[scheme.len() + 1..],
            None => &self.raw,
        }
    }

    /// Percent-decoded path component of a hierarchical locator.
    ///
    /// Escapes that decode to invalid UTF-8 become U+FFFD.
    ///
    /// `None` for opaque locators (`mailto:x`) and for an empty path.
    pub fn path(&self) -> Option<String> {
        let rest = self.scheme_specific_part();
        let rest = rest.split_once('#').map_or(rest, |(head, _)| head);
        let rest = rest.split_once('?').map_or(rest, |(head, _)| head);

        let path = if let Some(after_slashes) = rest.strip_prefix("//") {
            match after_slashes.find('/') {
                Some(idx) => &after_slashes[idx..],
                None => "",
            }
        } else if rest.starts_with('/') || self.scheme().is_none() {
            rest
        } else {
            return None;
        };

        if path.is_empty() {
            return None;
        }

        let bytes = urlencoding::decode_binary(path.as_bytes());
        Some(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Locator {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Locator {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

/// RFC 3986: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn is_valid_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Scheme --

    #[test]
    fn scheme_of_common_locators() {
        assert_eq!(Locator::new("file:///a/b.mp4").scheme(), Some("file"));
        assert_eq!(Locator::new("content://media/99").scheme(), Some("content"));
        assert_eq!(Locator::new("https://x.org/v").scheme(), Some("https"));
        assert_eq!(Locator::new("mailto:a@b.c").scheme(), Some("mailto"));
        assert_eq!(Locator::new("svn+ssh://h/r").scheme(), Some("svn+ssh"));
    }

    #[test]
    fn scheme_absent_or_invalid() {
        assert_eq!(Locator::new("/storage/movie.mp4").scheme(), None);
        assert_eq!(Locator::new("").scheme(), None);
        assert_eq!(Locator::new(":nothing").scheme(), None);
        assert_eq!(Locator::new("1abc:x").scheme(), None);
        assert_eq!(Locator::new("a b:x").scheme(), None);
    }

    // -- Path --

    #[test]
    fn file_path_with_empty_authority() {
        let loc = Locator::new("file:///storage/movie.mp4");
        assert_eq!(loc.path().as_deref(), Some("/storage/movie.mp4"));
    }

    #[test]
    fn path_skips_authority() {
        let loc = Locator::new("content://media/external/video/99");
        assert_eq!(loc.path().as_deref(), Some("/external/video/99"));
    }

    #[test]
    fn path_strips_query_and_fragment() {
        let loc = Locator::new("file:///a/b.mp4?t=10#frag");
        assert_eq!(loc.path().as_deref(), Some("/a/b.mp4"));
    }

    #[test]
    fn path_is_percent_decoded() {
        let loc = Locator::new("file:///storage/My%20Movie.mp4");
        assert_eq!(loc.path().as_deref(), Some("/storage/My Movie.mp4"));
    }

    #[test]
    fn invalid_utf8_escape_becomes_replacement_char() {
        let loc = Locator::new("file:///a/%FF.bin");
        assert_eq!(loc.path().as_deref(), Some("/a/\u{FFFD}.bin"));

        let loc = Locator::new("file:///caf%C3%A9/%C3.mp4");
        assert_eq!(loc.path().as_deref(), Some("/caf\u{e9}/\u{FFFD}.mp4"));
    }

    #[test]
    fn single_slash_hierarchical_path() {
        let loc = Locator::new("file:/sdcard/x.mkv");
        assert_eq!(loc.path().as_deref(), Some("/sdcard/x.mkv"));
    }

    #[test]
    fn opaque_locator_has_no_path() {
        assert_eq!(Locator::new("file:relative.mp4").path(), None);
        assert_eq!(Locator::new("mailto:a@b.c").path(), None);
    }

    #[test]
    fn authority_only_has_no_path() {
        assert_eq!(Locator::new("file://host").path(), None);
        assert_eq!(Locator::new("content://media").path(), None);
    }

    #[test]
    fn schemeless_locator_is_all_path() {
        assert_eq!(
            Locator::new("/storage/movie.mp4").path().as_deref(),
            Some("/storage/movie.mp4")
        );
        assert_eq!(Locator::new("").path(), None);
    }

    #[test]
    fn raw_string_is_preserved() {
        let raw = "content://provider/123?x=%20";
        let loc = Locator::from(raw);
        assert_eq!(loc.as_str(), raw);
        assert_eq!(loc.to_string(), raw);
    }
}
