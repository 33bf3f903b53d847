use std::borrow::Cow;

use pretty_assertions::assert_eq;

use super::*;

/// Helper: spell expected output with `§` written as `~` for readability.
fn m(expected: &str) -> String {
    expected.replace('~', &MARKER.to_string())
}

/// Helper: transcode to an owned `String`.
fn run(text: &str) -> String {
    colorize(text).into_owned()
}

// === Pass-through ===

#[test]
fn absent_input_passes_through() {
    assert_eq!(colorize_opt(None), None);
}

#[test]
fn empty_input_borrows() {
    assert!(matches!(colorize(""), Cow::Borrowed("")));
    assert!(matches!(colorize_opt(Some("")), Some(Cow::Borrowed(""))));
}

#[test]
fn plain_text_borrows_unchanged() {
    let out = colorize("hello # world");
    assert!(matches!(out, Cow::Borrowed(_)));
    assert_eq!(out, "hello # world");
}

#[test]
fn non_ascii_text_survives() {
    assert_eq!(run("héllo &cwörld 😀"), m("héllo ~cwörld 😀"));
}

// === Legacy letters ===

#[test]
fn legacy_letter() {
    assert_eq!(run("&c"), m("~c"));
}

#[test]
fn legacy_letters_keep_case() {
    assert_eq!(run("&L&aX&R"), m("~L~aX~R"));
    assert_eq!(run("&Lbold &rreset"), m("~Lbold ~rreset"));
}

#[test]
fn legacy_x_is_a_letter() {
    assert_eq!(run("&x"), m("~x"));
}

#[test]
fn legacy_letter_inside_text() {
    assert_eq!(run("a&cb&1c"), m("a~cb~1c"));
}

#[test]
fn non_letter_after_escape_is_literal() {
    assert_eq!(run("Tom & Jerry"), "Tom & Jerry");
    assert_eq!(run("&z"), "&z");
    assert_eq!(run("&é"), "&é");
}

#[test]
fn double_escape_reprocesses_second() {
    assert_eq!(run("&&c"), m("&~c"));
}

// === Single tag ===

#[test]
fn single_tag_expands() {
    assert_eq!(run("&#1a2b3c"), m("~x~1~a~2~b~3~c"));
}

#[test]
fn single_tag_keeps_case() {
    assert_eq!(run("&#FFaa00"), m("~x~F~F~a~a~0~0"));
}

#[test]
fn single_tag_consumes_exactly_six() {
    assert_eq!(run("&#1234567"), m("~x~1~2~3~4~5~67"));
}

#[test]
fn single_tag_followed_by_text() {
    assert_eq!(run("&#ff0000Red!"), m("~x~f~f~0~0~0~0Red!"));
}

#[test]
fn malformed_single_tag_is_literal() {
    assert_eq!(run("&#zzzzzz"), "&#zzzzzz");
    assert_eq!(run("&#12345g"), "&#12345g");
}

// === Double tag ===

#[test]
fn double_tag_expands() {
    assert_eq!(run("&##abc"), m("~x~a~a~b~b~c~c"));
}

#[test]
fn double_tag_matches_full_form() {
    assert_eq!(run("&##abc"), run("&#aabbcc"));
    assert_eq!(run("&##F0a"), run("&#FF00aa"));
}

#[test]
fn double_tag_consumes_exactly_three() {
    assert_eq!(run("&##abcdef"), m("~x~a~a~b~b~c~cdef"));
}

#[test]
fn malformed_double_tag_is_literal() {
    assert_eq!(run("&##xyz"), "&##xyz");
    assert_eq!(run("&##ab!"), "&##ab!");
}

#[test]
fn triple_hash_is_literal_then_plain() {
    // Third '#' fails the hex check and is reprocessed as plain text.
    assert_eq!(run("&###abc"), "&###abc");
}

// === End of input ===

#[test]
fn truncated_tags_flush_literally() {
    assert_eq!(run("text&"), "text&");
    assert_eq!(run("text&#"), "text&#");
    assert_eq!(run("text&##"), "text&##");
    assert_eq!(run("text&#12"), "text&#12");
    assert_eq!(run("text&##a"), "text&##a");
    assert_eq!(run("text&#12345"), "text&#12345");
}

#[test]
fn lone_escape() {
    assert_eq!(run("&"), "&");
}

// === Reprocessing ===

#[test]
fn failing_char_starts_new_tag() {
    assert_eq!(run("&#&c"), m("&#~c"));
}

#[test]
fn failing_char_after_double_hash_starts_new_tag() {
    assert_eq!(run("&##&#123456"), m("&##~x~1~2~3~4~5~6"));
}

#[test]
fn partial_hex_then_escape() {
    assert_eq!(run("&#12&c"), m("&#12~c"));
}

#[test]
fn mixed_message() {
    assert_eq!(
        run("&6[Shop] &#00ff00Bought &##f00x2&r for 50$ & change"),
        m("~6[Shop] ~x~0~0~f~f~0~0Bought ~x~f~f~0~0~0~0x2~r for 50$ & change"),
    );
}

// === ScanState ===

#[test]
fn pending_literals() {
    assert_eq!(ScanState::Plain.pending_literal(), "");
    assert_eq!(ScanState::SawEscape.pending_literal(), "&");
    assert_eq!(ScanState::SawHash.pending_literal(), "&#");
    assert_eq!(ScanState::SawDoubleHash.pending_literal(), "&##");
    assert_eq!(ScanState::default(), ScanState::Plain);
}

// === Concurrency ===

#[test]
fn concurrent_calls_agree() {
    let inputs = ["&cred", "&#123456", "&##abc", "text&#", "plain"];
    let expected: Vec<String> = inputs.iter().map(|s| run(s)).collect();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for (input, want) in inputs.iter().zip(&expected) {
                    assert_eq!(&run(input), want);
                }
            });
        }
    });
}

mod proptest_transcoder {
    use super::super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn text_without_escape_is_identity(s in "[^&]*") {
            prop_assert_eq!(colorize(&s), s.as_str());
        }

        #[test]
        fn no_marker_without_escape(s in "[^&§]*") {
            prop_assert!(!colorize(&s).contains(MARKER));
        }

        #[test]
        fn escape_before_space_stays_literal(s in "([^&]|& )*") {
            prop_assert_eq!(colorize(&s), s.as_str());
        }

        #[test]
        fn never_panics_on_markup_heavy_input(
            s in proptest::collection::vec(
                prop_oneof![
                    Just('&'),
                    Just('#'),
                    Just('a'),
                    Just('F'),
                    Just('7'),
                    Just('z'),
                    Just('é'),
                    Just(' '),
                ],
                0..64,
            )
        ) {
            let s: String = s.into_iter().collect();
            let _ = colorize(&s);
        }

        #[test]
        fn valid_single_tag_always_expands(hex in "[0-9a-fA-F]{6}") {
            let out = colorize(&format!("&#{hex}")).into_owned();
            let expected: String = std::iter::once(format!("{MARKER}x"))
                .chain(hex.chars().map(|d| format!("{MARKER}{d}")))
                .collect();
            prop_assert_eq!(out, expected);
        }

        #[test]
        fn double_tag_equals_doubled_single_tag(hex in "[0-9a-fA-F]{3}") {
            let doubled: String = hex.chars().flat_map(|d| [d, d]).collect();
            prop_assert_eq!(
                colorize(&format!("&##{hex}")).into_owned(),
                colorize(&format!("&#{doubled}")).into_owned()
            );
        }
    }
}
