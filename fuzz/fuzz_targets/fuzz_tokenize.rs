#![no_main]

use arbitrary::Arbitrary;
use jsontok::{Dialect, Token, Tokenizer};
use libfuzzer_sys::fuzz_target;

/// Structured fuzz input: the dialect switch takes part in mutation, so a
/// single corpus exercises both grammars.
#[derive(Arbitrary, Debug)]
struct FuzzInput<'a> {
    permissive: bool,
    data: &'a [u8],
}

fuzz_target!(|input: FuzzInput| {
    let dialect = if input.permissive {
        Dialect::Permissive
    } else {
        Dialect::Strict
    };
    let data = input.data;

    // A token spans at least one input byte, so this pool never fills.
    let mut tokens = vec![Token::default(); data.len() + 1];
    let mut tokenizer = Tokenizer::new(dialect);
    let parsed = tokenizer.parse(data, &mut tokens);

    let mut counter = Tokenizer::new(dialect);
    let counted = counter.count(data);

    match parsed {
        Ok(parsed) => {
            // Counting mode agrees on every accepted input.
            assert_eq!(counted, Ok(parsed));
            // Tokens come out in input order with in-bounds payloads.
            for pair in tokens[..parsed].windows(2) {
                assert!(pair[0].start <= pair[1].start);
            }
            for tok in &tokens[..parsed] {
                let span = tok.span().expect("accepted tokens are delimited");
                assert!(span.start <= span.end);
                assert!(span.end <= data.len());
            }
        }
        Err(err) => {
            // Errors are stable: repeating the call makes no progress.
            let pos = tokenizer.pos();
            let allocated = tokenizer.tokens_parsed();
            assert_eq!(tokenizer.parse(data, &mut tokens), Err(err));
            assert_eq!(tokenizer.pos(), pos);
            assert_eq!(tokenizer.tokens_parsed(), allocated);
        }
    }
});
