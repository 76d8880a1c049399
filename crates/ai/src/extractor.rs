//! Prompt-to-transactions extraction.
//!
//! Sends the user's text to the completion service wrapped in the fixed
//! instruction template, then parses and schema-validates the JSON reply
//! into transaction drafts or a clarification request. No persistence
//! and no reference resolution happen here.

use log::debug;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;

use ledgerly_core::transactions::TransactionDraft;

use crate::error::AiError;
use crate::prompt_template::build_extraction_prompt;
use crate::providers::CompletionProviderTrait;

/// What the model made of the user's request.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionResult {
    /// Zero or more drafts parsed from the model output. Names and
    /// categories are typed but unvalidated; the committer resolves and
    /// rejects them.
    Transactions(Vec<TransactionDraft>),
    /// The model judged the request too ambiguous to structure.
    Clarification(String),
}

/// The typed shape the model is instructed to reply with. No other
/// top-level shape is recognized.
#[derive(Deserialize)]
struct ModelReply {
    #[serde(default)]
    transactions: Option<Vec<DraftPayload>>,
    #[serde(default)]
    clarification_question: Option<String>,
}

#[derive(Deserialize)]
struct DraftPayload {
    amount: Decimal,
    description: String,
    #[serde(rename = "type")]
    type_name: String,
    category: String,
}

/// Extracts transaction drafts from free text via the completion service.
pub struct TransactionExtractor {
    provider: Arc<dyn CompletionProviderTrait>,
}

impl TransactionExtractor {
    /// Creates a new extractor over the given provider.
    pub fn new(provider: Arc<dyn CompletionProviderTrait>) -> Self {
        Self { provider }
    }

    /// Runs one extraction round-trip.
    ///
    /// Provider failures surface as `AiError::Provider`; replies that do
    /// not match the expected schema surface as
    /// `AiError::ExtractionFailed`. Neither panics on malformed output.
    pub async fn extract(&self, prompt_text: &str) -> Result<ExtractionResult, AiError> {
        let prompt = build_extraction_prompt(prompt_text);
        let reply = self.provider.complete(&prompt).await?;
        debug!("Model replied with {} bytes", reply.len());
        parse_model_reply(&reply)
    }
}

/// Strips code-fence markup the model sometimes wraps JSON in.
fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parses a raw model reply into a typed extraction result.
fn parse_model_reply(raw: &str) -> Result<ExtractionResult, AiError> {
    let cleaned = strip_code_fences(raw);

    let reply: ModelReply = serde_json::from_str(&cleaned).map_err(|e| {
        AiError::ExtractionFailed(format!("model reply is not valid JSON: {}", e))
    })?;

    if let Some(payloads) = reply.transactions {
        // An empty array is a valid reply carrying zero drafts.
        let drafts = payloads
            .into_iter()
            .map(|p| TransactionDraft {
                amount: p.amount,
                description: p.description,
                type_name: p.type_name,
                category_name: p.category,
            })
            .collect();
        return Ok(ExtractionResult::Transactions(drafts));
    }

    if let Some(question) = reply.clarification_question {
        return Ok(ExtractionResult::Clarification(question));
    }

    Err(AiError::ExtractionFailed(
        "model reply contains neither transactions nor a clarification question".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::FakeCompletionProvider;
    use rust_decimal_macros::dec;

    fn extractor(reply: &str) -> TransactionExtractor {
        TransactionExtractor::new(Arc::new(FakeCompletionProvider::with_reply(reply)))
    }

    #[tokio::test]
    async fn test_extracts_single_credit_draft() {
        let result = extractor(
            r#"{"transactions":[{"amount":500,"description":"salary","type":"credit","category":"Salary"}]}"#,
        )
        .extract("I got 500 salary")
        .await
        .unwrap();

        match result {
            ExtractionResult::Transactions(drafts) => {
                assert_eq!(drafts.len(), 1);
                assert_eq!(drafts[0].amount, dec!(500));
                assert_eq!(drafts[0].type_name, "credit");
                assert_eq!(drafts[0].category_name, "Salary");
            }
            other => panic!("expected drafts, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_strips_code_fences_before_parsing() {
        let result = extractor(
            "```json\n{\"transactions\":[{\"amount\":12.5,\"description\":\"bus\",\"type\":\"debit\",\"category\":\"Transport\"}]}\n```",
        )
        .extract("bus ticket 12.50")
        .await
        .unwrap();

        match result {
            ExtractionResult::Transactions(drafts) => {
                assert_eq!(drafts[0].amount, dec!(12.5));
            }
            other => panic!("expected drafts, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_clarification_question_passes_through() {
        let result = extractor(r#"{"clarification_question":"How much did you spend?"}"#)
            .extract("I bought stuff")
            .await
            .unwrap();

        assert_eq!(
            result,
            ExtractionResult::Clarification("How much did you spend?".to_string())
        );
    }

    #[tokio::test]
    async fn test_empty_transactions_array_is_zero_drafts() {
        let result = extractor(r#"{"transactions":[]}"#)
            .extract("nothing happened")
            .await
            .unwrap();

        assert_eq!(result, ExtractionResult::Transactions(Vec::new()));
    }

    #[tokio::test]
    async fn test_non_json_reply_is_extraction_failure() {
        let err = extractor("Sure! Here are your transactions:")
            .extract("groceries 500")
            .await
            .unwrap_err();

        assert_eq!(err.code(), "EXTRACTION_FAILED");
    }

    #[tokio::test]
    async fn test_unrecognized_shape_is_extraction_failure() {
        let err = extractor(r#"{"items": [1, 2, 3]}"#)
            .extract("groceries 500")
            .await
            .unwrap_err();

        assert_eq!(err.code(), "EXTRACTION_FAILED");
    }

    #[tokio::test]
    async fn test_non_numeric_amount_is_extraction_failure() {
        let err = extractor(
            r#"{"transactions":[{"amount":"five hundred","description":"salary","type":"credit","category":"Salary"}]}"#,
        )
        .extract("I got five hundred salary")
        .await
        .unwrap_err();

        assert_eq!(err.code(), "EXTRACTION_FAILED");
    }

    #[tokio::test]
    async fn test_provider_failure_surfaces_as_provider_error() {
        let extractor =
            TransactionExtractor::new(Arc::new(FakeCompletionProvider::failing()));
        let err = extractor.extract("groceries 500").await.unwrap_err();
        assert_eq!(err.code(), "PROVIDER_ERROR");
    }

    #[test]
    fn test_transactions_key_wins_when_both_present() {
        let result = parse_model_reply(
            r#"{"transactions":[],"clarification_question":"Really?"}"#,
        )
        .unwrap();
        assert_eq!(result, ExtractionResult::Transactions(Vec::new()));
    }
}
