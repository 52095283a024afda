//! The text codec.
//!
//! Node text and attribute values are stored in escaped form; escaping
//! happens once, when a node is created. Nothing in this crate ever
//! unescapes, so stored text is always safe to re-emit as markup.

/// Escape a raw text or attribute value into its storage form.
///
/// Transformations:
///
/// - `"` and `'` become `&quot;`
/// - a backtick becomes `&apos;` (historical quirk, kept deliberately)
/// - `<` and `>` become `&lt;` and `&gt;`
/// - `&` is copied untouched when it starts one of the recognized
///   references `&lt;` `&gt;` `&amp;` `&quot;` `&apos;`, and becomes
///   `&amp;` otherwise
/// - `\r\n` collapses to `\n`; a lone `\r` is dropped
///
/// Escaping already-escaped text is a no-op for the recognized
/// references, so the codec is idempotent on its own output.
pub fn escape(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'"' | b'\'' => out.extend_from_slice(b"&quot;"),
            b'`' => out.extend_from_slice(b"&apos;"),
            b'&' => {
                let rest = &bytes[i + 1..];
                if let Some(reference) = recognized_reference(rest) {
                    out.push(b'&');
                    out.extend_from_slice(reference);
                    i += reference.len();
                } else {
                    out.extend_from_slice(b"&amp;");
                }
            }
            b'<' => out.extend_from_slice(b"&lt;"),
            b'>' => out.extend_from_slice(b"&gt;"),
            b'\r' => {
                if bytes.get(i + 1) == Some(&b'\n') {
                    out.push(b'\n');
                    i += 1;
                }
                // a lone carriage return disappears
            }
            c => out.push(c),
        }
        i += 1;
    }
    // only ASCII was inserted or removed, so this cannot actually be lossy
    String::from_utf8_lossy(&out).into_owned()
}

fn recognized_reference(rest: &[u8]) -> Option<&'static [u8]> {
    const REFERENCES: [&[u8]; 5] = [b"lt;", b"gt;", b"amp;", b"quot;", b"apos;"];
    REFERENCES
        .into_iter()
        .find(|reference| rest.starts_with(reference))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape("hello world"), "hello world");
    }

    #[test]
    fn angle_brackets() {
        assert_eq!(escape("<ok>"), "&lt;ok&gt;");
    }

    #[test]
    fn quotes_both_become_quot() {
        assert_eq!(escape(r#"a "b" 'c'"#), "a &quot;b&quot; &quot;c&quot;");
    }

    #[test]
    fn backtick_becomes_apos() {
        assert_eq!(escape("`x`"), "&apos;x&apos;");
    }

    #[test]
    fn bare_ampersand() {
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("a&"), "a&amp;");
    }

    #[test]
    fn recognized_references_pass_through() {
        assert_eq!(escape("&lt;ok&gt;"), "&lt;ok&gt;");
        assert_eq!(escape("&amp;&quot;&apos;"), "&amp;&quot;&apos;");
    }

    #[test]
    fn unrecognized_reference_is_escaped() {
        assert_eq!(escape("&nbsp;"), "&amp;nbsp;");
        assert_eq!(escape("&ampx"), "&amp;ampx");
    }

    #[test]
    fn crlf_collapses_to_lf() {
        assert_eq!(escape("a\r\nb"), "a\nb");
    }

    #[test]
    fn lone_cr_is_dropped() {
        assert_eq!(escape("a\rb"), "ab");
        assert_eq!(escape("a\r"), "a");
    }

    #[test]
    fn idempotent_on_escaped_output() {
        let once = escape("<a href='x'>&amp;</a>");
        assert_eq!(escape(&once), once);
    }

    #[test]
    fn non_ascii_passes_through() {
        assert_eq!(escape("héllo ünïcode"), "héllo ünïcode");
    }
}
