pub mod token;
pub mod tokenizer;
pub mod analyzer;
pub mod stream;
pub mod phone;
