use std::io::Read;

use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::core::error::Result;

enum StreamState {
    Idle,
    Generated { tokens: Vec<Token>, cursor: usize },
}

/// Pull-based adapter over a tokenizer, matching the attach / next / reset
/// protocol of host tokenizer frameworks that reuse one instance per field.
/// Tokens are generated lazily on the first `next` call and then served one
/// at a time. Per-use state lives here, never in the tokenizer itself, and
/// an instance is meant to be driven by one thread at a time.
pub struct TokenStream {
    tokenizer: Box<dyn Tokenizer>,
    input: Option<String>,
    state: StreamState,
}

impl TokenStream {
    pub fn new(tokenizer: Box<dyn Tokenizer>) -> Self {
        TokenStream {
            tokenizer,
            input: None,
            state: StreamState::Idle,
        }
    }

    /// Attach a new input, discarding any previous per-use state.
    pub fn attach(&mut self, text: &str) {
        self.input = Some(text.to_string());
        self.state = StreamState::Idle;
    }

    /// Drain a character source into a single string and attach it. A read
    /// failure is fatal for this tokenization pass: no tokens can be
    /// produced without the input.
    pub fn attach_reader<R: Read>(&mut self, mut reader: R) -> Result<()> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.input = Some(text);
        self.state = StreamState::Idle;
        Ok(())
    }

    /// Next token in generation order, or `None` at end of stream (and when
    /// nothing was attached).
    pub fn next(&mut self) -> Option<Token> {
        if let StreamState::Idle = self.state {
            let text = self.input.as_deref()?;
            self.state = StreamState::Generated {
                tokens: self.tokenizer.tokenize(text),
                cursor: 0,
            };
        }

        match &mut self.state {
            StreamState::Generated { tokens, cursor } => {
                let token = tokens.get(*cursor).cloned();
                if token.is_some() {
                    *cursor += 1;
                }
                token
            }
            StreamState::Idle => None,
        }
    }

    /// Clear all per-use state so the same instance can serve a new input.
    pub fn reset(&mut self) {
        self.input = None;
        self.state = StreamState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::phone::tokenizer::PhoneTokenizer;
    use crate::core::config::PhoneConfig;

    fn stream() -> TokenStream {
        TokenStream::new(Box::new(PhoneTokenizer::new(PhoneConfig::default())))
    }

    fn drain(stream: &mut TokenStream) -> Vec<String> {
        let mut texts = Vec::new();
        while let Some(token) = stream.next() {
            texts.push(token.text);
        }
        texts
    }

    #[test]
    fn serves_tokens_one_at_a_time_in_order() {
        let mut stream = stream();
        stream.attach("7148035949@example.com");
        assert_eq!(drain(&mut stream), vec!["1", "7148035949", "17148035949"]);
        // Exhausted stream stays exhausted.
        assert!(stream.next().is_none());
    }

    #[test]
    fn next_before_attach_is_end_of_stream() {
        let mut stream = stream();
        assert!(stream.next().is_none());
    }

    #[test]
    fn reset_allows_reuse_with_a_new_input() {
        let mut stream = stream();
        stream.attach("7148035949");
        assert!(stream.next().is_some());

        stream.reset();
        assert!(stream.next().is_none());

        stream.attach("551697694");
        assert_eq!(drain(&mut stream), vec!["551697694"]);
    }

    #[test]
    fn attach_replaces_a_half_consumed_input() {
        let mut stream = stream();
        stream.attach("7148035949");
        assert_eq!(stream.next().unwrap().text, "1");

        stream.attach("551697694");
        assert_eq!(drain(&mut stream), vec!["551697694"]);
    }

    #[test]
    fn attach_reader_drains_the_source() {
        let mut stream = stream();
        stream
            .attach_reader("7148035949@example.com".as_bytes())
            .unwrap();
        assert_eq!(drain(&mut stream), vec!["1", "7148035949", "17148035949"]);
    }

    #[test]
    fn attach_reader_failure_is_fatal_for_the_pass() {
        struct FailingReader;
        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("source went away"))
            }
        }

        let mut stream = stream();
        assert!(stream.attach_reader(FailingReader).is_err());
        assert!(stream.next().is_none());
    }
}
