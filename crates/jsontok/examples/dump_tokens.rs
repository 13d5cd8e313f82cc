//! Tokenize a document and print one line per token.
//!
//! ```text
//! cargo run --example dump_tokens -- '{"a":[1,2]}'
//! ```

use std::env;

use jsontok::{Token, Tokenizer};

fn main() {
    let input = env::args()
        .nth(1)
        .unwrap_or_else(|| r#"{"name":"jsontok","tags":["json","no_std"],"stars":3}"#.into());
    let input = input.as_bytes();

    let mut tokens = vec![Token::default(); input.len() + 1];
    let mut tokenizer = Tokenizer::strict();
    match tokenizer.parse(input, &mut tokens) {
        Ok(parsed) => {
            for (i, tok) in tokens[..parsed].iter().enumerate() {
                let text = tok
                    .span()
                    .map(|span| String::from_utf8_lossy(&input[span]).into_owned())
                    .unwrap_or_default();
                println!(
                    "{i:3} {:>30} [{:>3},{:>3}) size={} {text}",
                    format!("{:?}", tok.kind),
                    tok.start,
                    tok.end,
                    tok.size
                );
            }
        }
        Err(err) => eprintln!("error: {err} at byte {}", tokenizer.pos()),
    }
}
