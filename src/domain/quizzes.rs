use serde::Deserialize;
use serde_json::Value;

use super::questions::int_or_numeric_string;

/// Category selection sent by the quiz client; id 0 means every category
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "int_or_numeric_string")]
    pub id: i32,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl QuizCategory {
    pub const ALL: i32 = 0;

    pub fn filter(&self) -> Option<i32> {
        (self.id != Self::ALL).then_some(self.id)
    }
}

/// Request DTO for POST /quizzes
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
    // Client bookkeeping only. Any shape is accepted and selection ignores it.
    #[serde(default)]
    pub previous_questions: Value,
}

impl QuizRequest {
    /// How many questions the client reports as already asked
    pub fn previous_count(&self) -> usize {
        self.previous_questions.as_array().map_or(0, Vec::len)
    }
}
