use crate::analysis::phone::tokenizer::PhoneTokenizer;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::core::config::PhoneConfig;
use crate::core::error::Result;

/// Text analysis pipeline
pub struct Analyzer {
    pub tokenizer: Box<dyn Tokenizer>,
    pub name: String,
}

impl Analyzer {
    pub fn new(name: String, tokenizer: Box<dyn Tokenizer>) -> Self {
        Analyzer { tokenizer, name }
    }

    pub fn analyze(&self, text: &str) -> Vec<Token> {
        self.tokenizer.tokenize(text)
    }

    /// Create phone analyzer with the given settings
    pub fn phone(config: PhoneConfig) -> Self {
        Analyzer::new("phone".to_string(), Box::new(PhoneTokenizer::new(config)))
    }
}

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use crate::core::error::{Error, ErrorKind};

/// Registry for managing analyzers
pub struct AnalyzerRegistry {
    analyzers: Arc<RwLock<HashMap<String, Arc<Analyzer>>>>,
}

impl AnalyzerRegistry {
    pub fn new() -> Self {
        let mut registry = AnalyzerRegistry {
            analyzers: Arc::new(RwLock::new(HashMap::new())),
        };

        // Register default analyzers
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        self.register("phone", Analyzer::phone(PhoneConfig::default()));
        // Index-time variant: every numeric prefix becomes a token so a
        // partially typed query still matches.
        self.register("phone_ngram", Analyzer::phone(PhoneConfig::default().with_ngrams()));
    }

    pub fn register(&mut self, name: &str, analyzer: Analyzer) {
        let mut analyzers = self.analyzers.write().unwrap();
        analyzers.insert(name.to_string(), Arc::new(analyzer));
    }

    pub fn get(&self, name: &str) -> Option<Arc<Analyzer>> {
        let analyzers = self.analyzers.read().unwrap();
        analyzers.get(name).cloned()
    }

    pub fn analyze(&self, analyzer_name: &str, text: &str) -> Result<Vec<Token>> {
        self.get(analyzer_name)
            .map(|analyzer| analyzer.analyze(text))
            .ok_or_else(||
                Error{
                    kind: ErrorKind::NotFound,
                    context: format!("Analyzer '{}' not found", analyzer_name),
            })
    }
}

impl Default for AnalyzerRegistry {
    fn default() -> Self {
        AnalyzerRegistry::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_analyzers_are_registered() {
        let registry = AnalyzerRegistry::new();
        assert!(registry.get("phone").is_some());
        assert!(registry.get("phone_ngram").is_some());
        assert!(registry.get("standard").is_none());
    }

    #[test]
    fn unknown_analyzer_is_reported() {
        let registry = AnalyzerRegistry::new();
        let err = registry.analyze("missing", "7148035949").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::NotFound));
    }

    #[test]
    fn phone_ngram_expands_more_than_phone() {
        let registry = AnalyzerRegistry::new();
        let plain = registry.analyze("phone", "714-803-5949").unwrap();
        let ngram = registry.analyze("phone_ngram", "714-803-5949").unwrap();
        assert!(ngram.len() > plain.len());
    }
}
