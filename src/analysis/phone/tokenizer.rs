use std::sync::Arc;

use crate::analysis::phone::parser::{PhoneNumberParser, PhonenumberParser};
use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::core::config::PhoneConfig;

/// Tokenizes a phone number or SIP address into the forms a search index
/// needs: the national number, its country-code-qualified form, and
/// optionally every numeric prefix so partially typed queries still match.
///
/// Input that the phone parser rejects is degraded to its digits and
/// tokenized the same way, so a SIP username like `7148035949x12@host`
/// still produces something searchable.
#[derive(Clone)]
pub struct PhoneTokenizer {
    config: PhoneConfig,
    parser: Arc<dyn PhoneNumberParser>,
}

impl PhoneTokenizer {
    pub fn new(config: PhoneConfig) -> Self {
        PhoneTokenizer {
            config,
            parser: Arc::new(PhonenumberParser),
        }
    }

    /// Substitute another parser implementation (tests use a canned one).
    pub fn with_parser(config: PhoneConfig, parser: Arc<dyn PhoneNumberParser>) -> Self {
        PhoneTokenizer { config, parser }
    }

    pub fn config(&self) -> &PhoneConfig {
        &self.config
    }

    /// The pure core: raw identifier in, ordered token strings out.
    /// Deterministic for a given input and config, never fails.
    pub fn generate(&self, raw: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        if raw.is_empty() {
            return tokens;
        }

        if self.config.emit_raw_input {
            tokens.push(raw.to_string());
        }

        // Drop anything after the first @. SIP addressing puts routing info
        // there and none of it belongs in a phone token.
        let number_text = raw.split('@').next().unwrap_or(raw);

        let result = self.parser.parse(number_text, &self.config.default_region);
        if result.valid {
            let country_code = result.country_code.as_deref();

            if self.config.add_country_code {
                if let Some(cc) = country_code {
                    tokens.push(cc.to_string());
                }
            }
            if self.config.add_extension {
                if let Some(ext) = result.extension.as_deref() {
                    if !ext.is_empty() {
                        tokens.push(ext.to_string());
                    }
                }
            }

            if self.config.generate_ngrams {
                push_prefixes(&mut tokens, &result.national_number, country_code);
            } else {
                tokens.push(result.national_number.clone());
                if let Some(cc) = country_code {
                    tokens.push(format!("{}{}", cc, result.national_number));
                }
            }
        } else {
            // The parser didn't like it. Keep the digits and tokenize those;
            // qualified tokens never appear on this branch.
            let cleaned: String = number_text.chars().filter(|c| c.is_ascii_digit()).collect();
            if !cleaned.is_empty() {
                if self.config.generate_ngrams {
                    push_prefixes(&mut tokens, &cleaned, None);
                } else {
                    tokens.push(cleaned);
                }
            }
        }

        tokens
    }
}

/// Append every prefix of `digits`, shortest first. EG 7148035949 produces
/// 7, 71, 714, etc. When the country code is known each prefix is followed
/// by its qualified form, so 17, 171, 1714, etc. interleave.
fn push_prefixes(tokens: &mut Vec<String>, digits: &str, country_code: Option<&str>) {
    for end in 1..=digits.len() {
        let prefix = &digits[..end];
        tokens.push(prefix.to_string());
        if let Some(cc) = country_code {
            tokens.push(format!("{}{}", cc, prefix));
        }
    }
}

impl Tokenizer for PhoneTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        self.generate(text)
            .into_iter()
            .enumerate()
            .map(|(position, token)| Token::number(token, position as u32))
            .collect()
    }

    fn name(&self) -> &str {
        "phone"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}
