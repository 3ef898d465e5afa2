pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

pub const NO_CONTEXT_NOTICE: &str = "No specific documents found for this query.";

pub fn answer_prompt(context: &str, user_query: &str) -> String {
    let context = if context.is_empty() {
        NO_CONTEXT_NOTICE
    } else {
        context
    };
    format!(
        r#"You are an intelligent AI assistant.

CONTEXT FROM DOCUMENTS:
{context}

USER QUESTION:
{user_query}

INSTRUCTIONS:
1. If the Context contains the answer, answer based on it.
2. If the Context is empty or irrelevant, use your general knowledge to answer helpfully.
3. Be conversational and engaging.
"#
    )
}
