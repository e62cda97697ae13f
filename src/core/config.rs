/// Settings for the phone analyzers. Built once per analyzer instance and
/// never mutated afterwards, so a configured tokenizer can be shared across
/// threads freely.
#[derive(Debug, Clone)]
pub struct PhoneConfig {
    /// Region used to disambiguate numbers without an international prefix.
    pub default_region: String,
    /// Emit the bare country calling code as its own token.
    pub add_country_code: bool,
    /// Emit the extension as its own token when the source text had one.
    pub add_extension: bool,
    /// Emit every numeric prefix instead of a single full token.
    pub generate_ngrams: bool,
    /// Emit the whole raw input (before `@`-splitting) as the first token.
    /// Earlier revisions of the tokenizer always did this; it is off by
    /// default because the raw text usually duplicates the cleaned tokens.
    pub emit_raw_input: bool,
}

impl Default for PhoneConfig {
    fn default() -> Self {
        PhoneConfig {
            default_region: "US".to_string(),
            add_country_code: true,
            add_extension: false,
            generate_ngrams: false,
            emit_raw_input: false,
        }
    }
}

impl PhoneConfig {
    pub fn with_ngrams(mut self) -> Self {
        self.generate_ngrams = true;
        self
    }
}
