/// Builds the prompt sent to the generative-language model for quiz
/// generation. The model is instructed to return bare JSON, but replies are
/// still fence-stripped before parsing since compliance is not guaranteed.
pub fn build_quiz_prompt(topic: &str, count: u32, difficulty: &str) -> String {
    format!(
        r#"Generate {count} multiple-choice questions on the topic "{topic}" with a difficulty level of "{difficulty}".
Return a valid JSON object with the following structure:
{{
  "questions": [
    {{
      "question": "string",
      "options": ["option1", "option2", "option3", "option4"],
      "answer": "string",
      "explanation": "A short explanation (1-3 sentences) describing why this is the correct answer and clarifying the concept."
    }}
  ]
}}

Do not include any text, notes, or markdown outside the JSON.
"#
    )
}

/// Fallback explanation used when the provider omits one for a question.
pub fn default_explanation(topic: &str, answer: &str) -> String {
    format!(
        "This question helps you understand the topic \"{topic}\". The correct answer is \"{answer}\"."
    )
}
