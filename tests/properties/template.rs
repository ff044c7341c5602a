//! Property tests for manifest template rendering.

use proptest::prelude::*;

use hippo::domain::services::{
    find_placeholders, placeholder_token, render_template, Substitutions,
};

/// Keys that have a value in every generated substitution map
const KNOWN: &[&str] = &["COMMIT", "TIMESTAMP", "IMAGE"];

/// Keys that never have a value
const UNKNOWN: &[&str] = &["TEAM", "REGION", "DB_HOST"];

#[derive(Debug, Clone)]
enum Piece {
    Text(String),
    Known(usize),
    Unknown(usize),
}

fn piece() -> impl Strategy<Value = Piece> {
    prop_oneof![
        3 => "[a-z0-9 :./\\n-]{0,12}".prop_map(Piece::Text),
        2 => (0..KNOWN.len()).prop_map(Piece::Known),
        1 => (0..UNKNOWN.len()).prop_map(Piece::Unknown),
    ]
}

fn substitutions() -> impl Strategy<Value = Substitutions> {
    proptest::collection::vec("[a-z0-9:.-]{0,16}", KNOWN.len()).prop_map(|values| {
        KNOWN
            .iter()
            .map(|k| k.to_string())
            .zip(values)
            .collect::<Substitutions>()
    })
}

fn template_of(pieces: &[Piece]) -> String {
    pieces
        .iter()
        .map(|p| match p {
            Piece::Text(text) => text.clone(),
            Piece::Known(i) => placeholder_token(KNOWN[*i]),
            Piece::Unknown(i) => placeholder_token(UNKNOWN[*i]),
        })
        .collect()
}

fn expected_of(pieces: &[Piece], subs: &Substitutions) -> String {
    pieces
        .iter()
        .map(|p| match p {
            Piece::Text(text) => text.clone(),
            Piece::Known(i) => subs[KNOWN[*i]].clone(),
            Piece::Unknown(i) => placeholder_token(UNKNOWN[*i]),
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every known token is replaced wherever it appears; all other text is byte-identical.
    #[test]
    fn property_render_replaces_every_known_token(
        pieces in proptest::collection::vec(piece(), 0..=16),
        subs in substitutions(),
    ) {
        let template = template_of(&pieces);
        prop_assert_eq!(render_template(&template, &subs), expected_of(&pieces, &subs));
    }

    /// PROPERTY: rendering is deterministic, and re-rendering its output changes nothing.
    #[test]
    fn property_render_is_idempotent(
        pieces in proptest::collection::vec(piece(), 0..=16),
        subs in substitutions(),
    ) {
        let template = template_of(&pieces);
        let once = render_template(&template, &subs);
        prop_assert_eq!(&render_template(&template, &subs), &once);
        prop_assert_eq!(render_template(&once, &subs), once);
    }

    /// PROPERTY: the placeholders left after rendering are exactly the unknown ones used.
    #[test]
    fn property_leftovers_are_unknown_tokens(
        pieces in proptest::collection::vec(piece(), 0..=16),
        subs in substitutions(),
    ) {
        let rendered = render_template(&template_of(&pieces), &subs);

        let mut expected: Vec<String> = Vec::new();
        for p in &pieces {
            if let Piece::Unknown(i) = p {
                let name = UNKNOWN[*i].to_string();
                if !expected.contains(&name) {
                    expected.push(name);
                }
            }
        }
        prop_assert_eq!(find_placeholders(&rendered), expected);
    }

    /// PROPERTY: text without `$` is never modified.
    #[test]
    fn property_text_without_dollar_is_untouched(
        text in "[^$]{0,256}",
        subs in substitutions(),
    ) {
        prop_assert_eq!(render_template(&text, &subs), text);
    }

    /// PROPERTY: rendering never panics on arbitrary input.
    #[test]
    fn property_render_never_panics(
        text in "(?s).{0,256}",
        key in "(?s).{0,8}",
        value in "(?s).{0,16}",
    ) {
        let subs = Substitutions::from([(key, value)]);
        let _ = render_template(&text, &subs);
        let _ = find_placeholders(&text);
    }
}
