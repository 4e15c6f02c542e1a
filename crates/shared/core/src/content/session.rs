use serde::{Deserialize, Serialize};

/// A time-boxed quiz instance players join with a code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Session {
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

/// One multiple-choice quiz question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub title: String,

    /// Market situation shown above the options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    pub options: Vec<String>,

    /// Shown once the answer has been submitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,

    /// The option considered right, when the question has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct: Option<String>,
}

impl Question {
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    /// Grade an answer; open questions accept every answer
    pub fn is_correct(&self, answer: &str) -> bool {
        match &self.correct {
            Some(correct) => correct == answer,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grading() {
        let mut question = Question {
            id: "q1".to_string(),
            title: "Fed raises rates".to_string(),
            context: None,
            options: vec!["Buy".to_string(), "Sell".to_string()],
            explanation: None,
            correct: None,
        };
        assert!(question.is_correct("Buy"));
        assert!(question.has_option("Sell"));
        assert!(!question.has_option("Hold"));

        question.correct = Some("Sell".to_string());
        assert!(!question.is_correct("Buy"));
        assert!(question.is_correct("Sell"));
    }
}
