//! The fixed extraction instruction template.
//!
//! One template, one job: make the model return a JSON object shaped as
//! `{"transactions": [...]}` or `{"clarification_question": "..."}` and
//! nothing else. The user's text is embedded verbatim.

use ledgerly_core::constants::DEFAULT_CATEGORIES;

/// Builds the instruction prompt for extracting transactions from the
/// user's free-text request.
pub fn build_extraction_prompt(user_text: &str) -> String {
    let categories = DEFAULT_CATEGORIES.join(", ");
    format!(
        r#"You are an expert financial assistant. Your task is to analyze the user's text and convert it into a structured JSON object.

The output must be only the JSON object, with no additional text, formatting, or markdown.

The root of the JSON object must be a key named "transactions", which holds an array of transaction objects.

For each transaction object in the array, you must extract:
- amount (number)
- description (string)
- type (string, must be either "debit" or "credit")
- category (string, must be one of: {categories})

If the user's request is vague, respond with an object containing a "clarification_question" key.

User's request: "{user_text}"
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embeds_user_text_verbatim() {
        let prompt = build_extraction_prompt("I spent 500 on groceries & fuel");
        assert!(prompt.contains("\"I spent 500 on groceries & fuel\""));
    }

    #[test]
    fn test_names_the_closed_category_set() {
        let prompt = build_extraction_prompt("anything");
        assert!(prompt.contains("Groceries, Salary, Transport, Utilities, Rent, Other"));
    }

    #[test]
    fn test_mentions_both_reply_shapes() {
        let prompt = build_extraction_prompt("anything");
        assert!(prompt.contains("\"transactions\""));
        assert!(prompt.contains("\"clarification_question\""));
    }
}
