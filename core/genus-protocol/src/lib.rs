pub mod morphology;
pub mod sentence;

// Re-export core types for convenience
pub use morphology::*;
pub use sentence::{AnnotatedToken, Arc, Head, ParsedSentence, Relation, SentenceError, Span};

pub mod model;
pub use model::*;
