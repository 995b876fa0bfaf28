pub mod lexicon;
pub mod matcher;
pub mod server;

// Re-export main types for convenient access
pub use lexicon::Lexicon;
pub use matcher::{AdverbMatch, AdverbMatcher, CheckResult, Span};
