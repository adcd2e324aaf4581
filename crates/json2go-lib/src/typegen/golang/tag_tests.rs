use super::build_tag;

fn tag(key: &str, omit: bool) -> String {
    build_tag(key, omit).to_string()
}

#[test]
fn plain_keys() {
    assert_eq!(tag("name", false), r#"`json:"name"`"#);
    assert_eq!(tag("age", true), r#"`json:"age,omitempty"`"#);
    assert_eq!(tag("user_id", false), r#"`json:"user_id"`"#);
}

#[test]
fn keys_are_verbatim() {
    assert_eq!(tag("Mixed-Case.key", false), r#"`json:"Mixed-Case.key"`"#);
    assert_eq!(tag("naïve ключ", false), r#"`json:"naïve ключ"`"#);
    assert_eq!(tag("", false), r#"`json:""`"#);
}

#[test]
fn escapes() {
    assert_eq!(tag(r#"say "hi""#, false), r#"`json:"say \"hi\""`"#);
    assert_eq!(tag(r"a\b", false), r#"`json:"a\\b"`"#);
    assert_eq!(tag("a\nb\tc", true), r#"`json:"a\nb\tc,omitempty"`"#);
    assert_eq!(tag("\u{1}\u{7f}", false), r#"`json:"\x01\x7f"`"#);
    assert_eq!(tag("zero\u{200b}width", false), r#"`json:"zero\u200bwidth"`"#);
}

#[test]
fn unicode_spaces_and_private_use_are_escaped() {
    assert_eq!(
        tag("a\u{a0}b\u{3000}c\u{e000}", false),
        r#"`json:"a\u00a0b\u3000c\ue000"`"#
    );
    assert_eq!(tag("line\u{2028}end", false), r#"`json:"line\u2028end"`"#);
    assert_eq!(tag("\u{10ffff}", false), r#"`json:"\U0010ffff"`"#);
}

#[test]
fn printable_unicode_is_kept() {
    assert_eq!(tag("naïve café", false), "`json:\"naïve café\"`");
    assert_eq!(tag("日本語", false), "`json:\"日本語\"`");
    assert_eq!(tag("e\u{301}", false), "`json:\"e\u{301}\"`");
}

#[test]
fn backtick_key_uses_interpreted_literal() {
    assert_eq!(tag("a`b", false), r#""json:\"a`b\"""#);
    assert_eq!(tag("q\"`", true), r#""json:\"q\\\"`,omitempty\"""#);
}
