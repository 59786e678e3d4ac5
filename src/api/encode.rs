//! Query-parameter escaping for endpoint URLs.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters left unescaped by `encodeURIComponent`, except `'`, which the
/// url crate escapes in query strings anyway.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'(')
    .remove(b')');

/// Escape a value for use inside a query component.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Reverse [`encode_component`]. Invalid UTF-8 is replaced lossily.
pub fn decode_component(value: &str) -> String {
    percent_decode_str(value).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_characters() {
        assert_eq!(encode_component("a b&c.txt"), "a%20b%26c.txt");
        assert_eq!(encode_component("100%.txt"), "100%25.txt");
        assert_eq!(encode_component("dir/file"), "dir%2Ffile");
        assert_eq!(encode_component("q?x=1#y"), "q%3Fx%3D1%23y");
    }

    #[test]
    fn test_unreserved_characters_pass_through() {
        assert_eq!(encode_component("A-z_0.9!~*()"), "A-z_0.9!~*()");
        assert_eq!(encode_component("O'Brien"), "O%27Brien");
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(encode_component("résumé.pdf"), "r%C3%A9sum%C3%A9.pdf");
        assert_eq!(decode_component("r%C3%A9sum%C3%A9.pdf"), "résumé.pdf");
    }

    #[test]
    fn test_decode_restores_input() {
        for name in ["a b&c.txt", "100%.txt", "x+y=z", "tab\tname", ""] {
            assert_eq!(decode_component(&encode_component(name)), name);
        }
    }
}
