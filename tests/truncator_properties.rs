//! Property checks for the truncation engine over generated fragments.
//!
//! Generated text is lowercase ASCII words only, so any `...` in an output
//! is the ellipsis the engine placed there.

use html_truncate::dom::{parse_fragment, serialize_fragment, text_length};
use html_truncate::{TrimUnit, truncate_chars, truncate_words};
use proptest::prelude::*;

fn words() -> impl Strategy<Value = String> + Clone {
    proptest::collection::vec("[a-z]{1,8}", 1..10).prop_map(|w| w.join(" "))
}

fn fragment() -> impl Strategy<Value = String> {
    let text = words();
    prop_oneof![
        text.clone(),
        text.clone().prop_map(|t| format!("<p>{t}</p>")),
        (text.clone(), text.clone())
            .prop_map(|(a, b)| format!("<p>{a} <strong>{b}</strong></p>")),
        (text.clone(), text.clone())
            .prop_map(|(a, b)| format!(r#"<p><a href="/x">{a}</a> {b}</p>"#)),
        (text.clone(), text.clone(), text)
            .prop_map(|(a, b, c)| format!("<ul><li>{a}</li><li>{b} <em>{c}</em></li></ul>")),
    ]
}

proptest! {
    #[test]
    fn char_output_length_is_bounded(html in fragment(), limit in 1usize..40) {
        let out = truncate_chars(&html, limit, "...");
        let root = parse_fragment(&out).unwrap();
        prop_assert!(text_length(&root, TrimUnit::Chars) <= limit + 3);
    }

    #[test]
    fn word_output_length_is_bounded(html in fragment(), limit in 1usize..12) {
        let out = truncate_words(&html, limit, "...");
        let root = parse_fragment(&out).unwrap();
        // A sibling-placed ellipsis forms one extra standalone word.
        prop_assert!(text_length(&root, TrimUnit::Words) <= limit + 1);
    }

    #[test]
    fn output_reparses_and_reserializes_identically(html in fragment(), limit in 1usize..40) {
        let out = truncate_chars(&html, limit, "...");
        let root = parse_fragment(&out).unwrap();
        prop_assert_eq!(serialize_fragment(&root).unwrap(), out);
    }

    #[test]
    fn content_within_limit_is_a_noop(html in fragment(), limit in 1usize..200) {
        let root = parse_fragment(&html).unwrap();
        prop_assume!(text_length(&root, TrimUnit::Chars) <= limit);
        prop_assert_eq!(truncate_chars(&html, limit, "..."), html);
    }

    #[test]
    fn word_content_within_limit_is_a_noop(html in fragment(), limit in 1usize..40) {
        let root = parse_fragment(&html).unwrap();
        prop_assume!(text_length(&root, TrimUnit::Words) <= limit);
        prop_assert_eq!(truncate_words(&html, limit, "..."), html);
    }

    #[test]
    fn ellipsis_never_nests_inside_avoid_tags(html in fragment(), limit in 1usize..40) {
        let out = truncate_chars(&html, limit, "...");
        prop_assert!(!out.contains("...</a>"));
        prop_assert!(!out.contains("...</strong>"));
        prop_assert!(!out.contains("...</em>"));
    }

    #[test]
    fn no_trailing_punctuation_before_the_ellipsis(html in fragment(), limit in 1usize..40) {
        let out = truncate_words(&html, limit, "…");
        prop_assert!(!out.contains(",…"));
        prop_assert!(!out.contains(".…"));
        prop_assert!(!out.contains(" …"));
    }
}
