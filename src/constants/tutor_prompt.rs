/// Builds the prompt for one interactive tutor exchange. The conversation
/// history is passed pre-serialized as JSON so the model sees the full
/// context of the session.
pub fn build_tutor_prompt(base_question: &str, history_json: &str, message: &str) -> String {
    format!(
        r#"You are an expert AI tutor. The user is studying the following question:

"{base_question}"

The following is the conversation so far:
{history_json}

Now the user asks: "{message}"

Please answer in a clear, engaging, and step-by-step manner suitable for an engineering student.
"#
    )
}
