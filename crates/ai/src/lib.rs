//! Ledgerly AI - natural-language transaction ingestion.
//!
//! This crate turns free-text descriptions of financial activity into
//! structured transaction drafts via an external completion service,
//! and orchestrates the full prompt → extract → commit pipeline.
//!
//! # Architecture
//!
//! - `providers`: completion provider trait, Gemini HTTP client, fake
//!   provider for tests
//! - `prompt_template`: the fixed extraction instruction template
//! - `extractor`: parses and schema-validates model output into drafts
//! - `assistant`: the caller-facing pipeline (auth gate, extract,
//!   commit, outcome message)
//!
//! # Example
//!
//! ```ignore
//! use ledgerly_ai::{PromptPipeline, GeminiProvider, TransactionExtractor};
//!
//! let provider = Arc::new(GeminiProvider::from_env()?);
//! let extractor = TransactionExtractor::new(provider);
//! let pipeline = PromptPipeline::new(extractor, transaction_service);
//!
//! let outcome = pipeline
//!     .handle_prompt(Some("user-1"), "I spent 500 on groceries")
//!     .await;
//! println!("{}", outcome.message);
//! ```

pub mod assistant;
pub mod error;
pub mod extractor;
pub mod prompt_template;
pub mod providers;

// Re-export main types for convenience
pub use assistant::{PromptOutcome, PromptPipeline};
pub use error::AiError;
pub use extractor::{ExtractionResult, TransactionExtractor};
pub use prompt_template::build_extraction_prompt;
pub use providers::{CompletionProviderTrait, FakeCompletionProvider, GeminiProvider};
