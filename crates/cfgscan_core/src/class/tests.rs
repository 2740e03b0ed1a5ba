use super::*;
use pretty_assertions::assert_eq;

fn members(class: impl ByteClass, bytes: &[u8]) -> Vec<bool> {
    bytes.iter().map(|&b| class.contains(b)).collect()
}

// === Whitespace ===

#[test]
fn space_covers_ascii_and_latin1() {
    for b in [b'\t', b'\n', 0x0B, 0x0C, b'\r', b' ', 0x85, 0xA0] {
        assert!(is_space(b), "{b:#04x} should be whitespace");
    }
    for b in [b'a', b'0', b'=', 0x00, 0x7F, 0xC3, 0xFF] {
        assert!(!is_space(b), "{b:#04x} should not be whitespace");
    }
}

// === Config bytes ===

#[test]
fn config_rejects_reserved_and_space() {
    for &b in b"`'()[]{}\" \t\n" {
        assert!(!is_config_byte(b), "{:?} should not be a config byte", b as char);
    }
}

#[test]
fn config_accepts_punctuation_and_letters() {
    for &b in b"az_AZ09=<>:;/*#.-+@!" {
        assert!(is_config_byte(b), "{:?} should be a config byte", b as char);
    }
    assert!(is_config_byte(0xC3));
}

// === Comment markers ===

#[test]
fn comment_marker_bytes() {
    assert_eq!(
        members(is_comment_marker_byte, b"/*#\n a=;"),
        vec![true, true, true, false, false, false, false, false]
    );
}

// === Keys ===

#[test]
fn key_excludes_delimiters_and_eol() {
    assert_eq!(
        members(is_key_byte, b"a_1=:<> \t\n"),
        vec![true, true, true, false, false, false, false, false, false, false]
    );
}

#[test]
fn key_accepts_semicolon_and_markers() {
    // Key bytes are not aware of comments or statement ends.
    assert!(is_key_byte(b';'));
    assert!(is_key_byte(b'#'));
    assert!(is_key_byte(b'/'));
}

// === Delimiters ===

#[test]
fn delimiter_bytes() {
    assert_eq!(
        members(is_delim_byte, b"=<>: \ta\n;"),
        vec![true, true, true, true, true, true, false, false, false]
    );
}

// === Values ===

#[test]
fn value_excludes_delimiters_space_and_terminators() {
    assert_eq!(
        members(is_value_byte, b"42x,=: \t;\n\r"),
        vec![true, true, true, true, false, false, false, false, false, false, false]
    );
}

#[test]
fn value_accepts_grouping_bytes() {
    // Unlike keys, values may contain quotes and brackets.
    for &b in b"()[]{}\"'`" {
        assert!(is_value_byte(b), "{:?} should be a value byte", b as char);
    }
}

// === End of line ===

#[test]
fn eol_is_newline_only() {
    assert!(is_eol(b'\n'));
    assert!(!is_eol(b'\r'));
    assert!(!is_eol(b' '));
}

// === Exclusivity ===

#[test]
fn key_and_delimiter_are_disjoint() {
    for b in 0..=u8::MAX {
        assert!(
            !(is_key_byte(b) && is_delim_byte(b)),
            "{b:#04x} is both a key byte and a delimiter byte"
        );
    }
}

#[test]
fn value_and_delimiter_are_disjoint() {
    for b in 0..=u8::MAX {
        assert!(!(is_value_byte(b) && is_delim_byte(b)), "{b:#04x}");
    }
}

// === Combinators ===

#[test]
fn and_intersects() {
    let digit_not_zero = (|b: u8| b.is_ascii_digit()).and(|b: u8| b != b'0');
    assert_eq!(
        members(digit_not_zero, b"019a"),
        vec![false, true, true, false]
    );
}

#[test]
fn negate_complements() {
    let not_eol = is_eol.negate();
    for b in 0..=u8::MAX {
        assert_eq!(not_eol.contains(b), b != b'\n');
    }
}

#[test]
fn double_negation_is_identity() {
    let class = is_delim_byte.negate().negate();
    for b in 0..=u8::MAX {
        assert_eq!(class.contains(b), is_delim_byte(b));
    }
}

// === Multiline values ===

#[test]
fn multiline_until_excludes_only_terminator() {
    let class = multiline_until(b'}');
    assert_eq!(class.terminator(), b'}');
    for b in 0..=u8::MAX {
        assert_eq!(class.contains(b), b != b'}');
    }
}

#[test]
fn multiline_until_spans_newlines() {
    assert_eq!(
        members(multiline_until(b';'), b"a\n b;"),
        vec![true, true, true, true, false]
    );
}
