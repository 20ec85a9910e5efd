pub mod batch;
pub mod console;
pub mod translator;

// Re-export main types for convenient access
pub use translator::{SentenceTranslator, TranslationRules};

// Re-export batch processing types for CLI and tests
pub use batch::{BatchConfig, BatchStats, BatchTranslator};
