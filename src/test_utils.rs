use crate::models::domain::Question;

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Three questions with known answers: correct answers are
    /// "100 degrees Celsius", "A drop in air pressure", and "H2O".
    pub fn test_questions() -> Vec<Question> {
        vec![
            Question::new(
                "What is the boiling point of water at sea level?",
                vec![
                    "90 degrees Celsius".to_string(),
                    "100 degrees Celsius".to_string(),
                    "110 degrees Celsius".to_string(),
                    "120 degrees Celsius".to_string(),
                ],
                "100 degrees Celsius",
                Some("Water boils at 100 degrees Celsius at one atmosphere.".to_string()),
            ),
            Question::new(
                "What lowers the boiling point of water at altitude?",
                vec![
                    "A drop in air pressure".to_string(),
                    "A rise in humidity".to_string(),
                    "Stronger gravity".to_string(),
                    "Lower oxygen levels".to_string(),
                ],
                "A drop in air pressure",
                None,
            ),
            Question::new(
                "What is the chemical formula of water?",
                vec![
                    "CO2".to_string(),
                    "H2O2".to_string(),
                    "H2O".to_string(),
                    "HO2".to_string(),
                ],
                "H2O",
                Some("Two hydrogen atoms bonded to one oxygen atom.".to_string()),
            ),
        ]
    }

    /// A single question, for minimal sessions.
    pub fn single_question() -> Question {
        Question::new(
            "Which planet is known as the red planet?",
            vec![
                "Venus".to_string(),
                "Mars".to_string(),
                "Jupiter".to_string(),
                "Saturn".to_string(),
            ],
            "Mars",
            None,
        )
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_test_questions() {
        let questions = test_questions();
        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(|q| q.options.len() == 4));
        assert!(questions.iter().all(|q| q.answer_is_among_options()));
    }

    #[test]
    fn test_fixtures_single_question() {
        let question = single_question();
        assert_eq!(question.correct_answer, "Mars");
        assert!(question.answer_is_among_options());
    }
}
