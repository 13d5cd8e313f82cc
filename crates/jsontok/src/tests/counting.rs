use std::{vec, vec::Vec};

use crate::{Error, Token, Tokenizer};

#[test]
fn counting_agrees_with_parsing() {
    let docs: [&[u8]; 7] = [
        br#"{"a":10,"b":true}"#,
        br#"[1,[2,3]]"#,
        br#"{}"#,
        br#"[[],[[]]]"#,
        br#"{"k":[true,null,{"x":"y"}],"s":"\u00e9"}"#,
        br#"  [ 1 , 2 ]  "#,
        br#"{"deep":{"er":{"est":[0]}}}"#,
    ];
    for doc in docs {
        let parsed = Tokenizer::strict()
            .parse(doc, &mut vec![Token::default(); doc.len() + 1])
            .unwrap();
        let counted = Tokenizer::strict().count(doc).unwrap();
        assert_eq!(counted, parsed, "doc: {}", std::str::from_utf8(doc).unwrap());
    }
}

#[test]
fn counting_agrees_in_permissive_mode() {
    let docs: [&[u8]; 5] = [
        br#"{a:1}"#,
        br#"[1 2]"#,
        b"1 two \"three\" [4] {five:6}",
        b"a:1 b:2",
        b"42",
    ];
    for doc in docs {
        let parsed = Tokenizer::permissive()
            .parse(doc, &mut vec![Token::default(); doc.len() + 1])
            .unwrap();
        let counted = Tokenizer::permissive().count(doc).unwrap();
        assert_eq!(counted, parsed, "doc: {}", std::str::from_utf8(doc).unwrap());
    }
}

#[test]
fn counting_reports_truncation() {
    let mut tokenizer = Tokenizer::strict();
    assert_eq!(tokenizer.count(br#"{"a":1"#), Err(Error::Partial));
    assert_eq!(tokenizer.pos(), 5);

    let mut tokenizer = Tokenizer::strict();
    assert_eq!(tokenizer.count(br#"["unterminated"#), Err(Error::Partial));
    assert_eq!(tokenizer.pos(), 1);

    let mut tokenizer = Tokenizer::strict();
    assert_eq!(tokenizer.count(b"[[]"), Err(Error::Partial));
}

#[test]
fn counting_reports_lexical_errors() {
    let mut tokenizer = Tokenizer::strict();
    assert_eq!(tokenizer.count(br#"{a:1}"#), Err(Error::Invalid));
    assert_eq!(tokenizer.pos(), 1);

    let mut tokenizer = Tokenizer::strict();
    assert_eq!(tokenizer.count(br#"["\q"]"#), Err(Error::Invalid));
    assert_eq!(tokenizer.pos(), 1);

    let mut tokenizer = Tokenizer::strict();
    assert_eq!(tokenizer.count(b"]"), Err(Error::Invalid));

    let mut tokenizer = Tokenizer::strict();
    assert_eq!(tokenizer.count(b"{} {}"), Err(Error::Invalid));
}

#[test]
fn counting_never_runs_out_of_memory() {
    // One million array elements, no pool required.
    let mut doc = Vec::with_capacity(4_000_000);
    doc.push(b'[');
    for i in 0..1_000_000u32 {
        if i > 0 {
            doc.push(b',');
        }
        doc.extend_from_slice(b"7");
    }
    doc.push(b']');

    let counted = Tokenizer::strict().count(&doc).unwrap();
    assert_eq!(counted, 1_000_001);
}

#[test]
fn two_pass_sizing() {
    let doc = br#"{"k":[true,null,{"x":"y"}],"s":"hi"}"#;

    let mut tokenizer = Tokenizer::strict();
    let needed = tokenizer.count(doc).unwrap();

    let mut pool = vec![Token::default(); needed];
    tokenizer.reset();
    let parsed = tokenizer.parse(doc, &mut pool).unwrap();
    assert_eq!(parsed, needed);
    assert!(pool.iter().all(|tok| tok.span().is_some()));
}

#[test]
fn counting_mode_writes_nothing() {
    // Exercised through the public surface: `count` takes no pool at all, so
    // there is nothing it could write to; this pins the return value.
    let mut tokenizer = Tokenizer::strict();
    assert_eq!(tokenizer.count(br#"{"a":10,"b":true}"#), Ok(5));
    assert_eq!(tokenizer.tokens_parsed(), 5);
}
