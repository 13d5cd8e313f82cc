use std::{vec, vec::Vec};

use crate::{Error, Token, Tokenizer};

#[test]
fn truncated_primitive_resumes() {
    let full = br#"{"a":10}"#;
    let mut tokens = [Token::default(); 8];
    let mut tokenizer = Tokenizer::strict();

    assert_eq!(tokenizer.parse(&full[..6], &mut tokens), Err(Error::Partial));
    assert_eq!(tokenizer.pos(), 5);
    assert_eq!(tokenizer.tokens_parsed(), 2);

    // Same buffer, extended; the cumulative token total comes back.
    assert_eq!(tokenizer.parse(full, &mut tokens), Ok(3));
    assert_eq!((tokens[0].start, tokens[0].end), (0, 8));
    assert_eq!(&full[tokens[2].span().unwrap()], b"10");
}

#[test]
fn truncated_string_resumes() {
    let full = br#"["abc","d"]"#;
    let mut tokens = [Token::default(); 8];
    let mut tokenizer = Tokenizer::strict();

    assert_eq!(tokenizer.parse(&full[..5], &mut tokens), Err(Error::Partial));
    assert_eq!(tokenizer.pos(), 1);
    assert_eq!(tokenizer.tokens_parsed(), 1);

    assert_eq!(tokenizer.parse(full, &mut tokens), Ok(3));
    assert_eq!(&full[tokens[1].span().unwrap()], b"abc");
    assert_eq!(&full[tokens[2].span().unwrap()], b"d");
    assert_eq!(tokens[0].size, 2);
}

#[test]
fn byte_at_a_time_feeding() {
    let full = br#"{"k":[true,null]}"#;
    let mut tokens = [Token::default(); 8];
    let mut tokenizer = Tokenizer::strict();

    for end in 1..full.len() {
        assert_eq!(
            tokenizer.parse(&full[..end], &mut tokens),
            Err(Error::Partial),
            "prefix of {end} bytes should be incomplete"
        );
    }
    assert_eq!(tokenizer.parse(full, &mut tokens), Ok(5));
    assert_eq!(tokens[0].size, 2);
    assert_eq!(tokens[2].size, 2);
}

#[test]
fn tokens_survive_pool_growth_after_exhaustion() {
    let input = br#"[1,2,3]"#;
    let mut small = vec![Token::default(); 2];
    let mut tokenizer = Tokenizer::strict();

    assert_eq!(tokenizer.parse(input, &mut small), Err(Error::NoMemory));
    assert_eq!(tokenizer.tokens_parsed(), 2);

    // Carry the already-filled slots over into a larger pool and continue.
    let mut grown: Vec<Token> = small.iter().copied().collect();
    grown.resize(8, Token::default());
    assert_eq!(tokenizer.parse(input, &mut grown), Ok(4));
    assert_eq!(grown[0].size, 3);
    assert_eq!(&input[grown[3].span().unwrap()], b"3");
}

#[test]
fn partial_state_is_stable_without_new_bytes() {
    let input = br#"[1,"#;
    let mut tokens = [Token::default(); 8];
    let mut tokenizer = Tokenizer::strict();

    for _ in 0..3 {
        assert_eq!(tokenizer.parse(input, &mut tokens), Err(Error::Partial));
        assert_eq!(tokenizer.pos(), 3);
        assert_eq!(tokenizer.tokens_parsed(), 2);
    }
}

#[test]
fn reset_forgets_previous_input() {
    let mut tokens = [Token::default(); 8];
    let mut tokenizer = Tokenizer::strict();

    assert_eq!(tokenizer.parse(b"[1,", &mut tokens), Err(Error::Partial));
    tokenizer.reset();
    assert_eq!(tokenizer.parse(b"[7]", &mut tokens), Ok(2));
    assert_eq!(&b"[7]"[tokens[1].span().unwrap()], b"7");
}

#[test]
fn resumed_counting_is_cumulative() {
    let full = br#"[1,[2,3]]"#;
    let mut tokenizer = Tokenizer::strict();

    assert_eq!(tokenizer.count(&full[..4]), Err(Error::Partial));
    assert_eq!(tokenizer.count(full), Ok(5));
}
