//! The fixed readiness question bank.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Per-category influence of a question.
pub type WeightMap = BTreeMap<Category, i32>;

/// A single questionnaire item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Prompt shown to the respondent.
    pub prompt: String,
    /// How strongly an answer moves each category.
    pub weights: WeightMap,
}

impl Question {
    pub fn new(prompt: &str, weights: [i32; 4]) -> Self {
        Self {
            prompt: prompt.to_string(),
            weights: Category::ALL.into_iter().zip(weights).collect(),
        }
    }

    /// Weight for `category`, zero when the question does not touch it.
    pub fn weight(&self, category: Category) -> i32 {
        self.weights.get(&category).copied().unwrap_or(0)
    }
}

/// Static source of questions.
pub struct QuestionBank;

impl QuestionBank {
    /// Number of questions in the bank.
    pub const LEN: usize = 9;

    /// Returns the nine readiness questions in presentation order.
    ///
    /// Weights are listed as `[Strategy, Execution, Culture, Data]`.
    pub fn load() -> Vec<Question> {
        vec![
            Question::new(
                "How clearly has your organization defined a strategic vision for AI and ML?",
                [2, 1, 0, 0],
            ),
            Question::new(
                "How confident are you in your current team's ability to deploy and maintain AI solutions?",
                [1, 2, 0, 0],
            ),
            Question::new(
                "How do you gauge overall enthusiasm and acceptance of AI initiatives in your organizational culture?",
                [0, 0, 2, 1],
            ),
            Question::new(
                "How well-prepared are your data collection methods to support AI projects?",
                [0, 0, 1, 2],
            ),
            Question::new(
                "Are your stakeholders aligned on AI priorities and potential ROI?",
                [2, 1, 1, 0],
            ),
            Question::new(
                "Does your organization have a clear plan for addressing data privacy and compliance in AI projects?",
                [0, 1, 1, 2],
            ),
            Question::new(
                "How frequently do you reassess AI initiatives for strategic relevance?",
                [2, 0, 1, 0],
            ),
            Question::new(
                "How robust is your infrastructure for large-scale data processing?",
                [0, 1, 0, 2],
            ),
            Question::new(
                "Do you regularly train employees on AI best practices and innovations?",
                [0, 2, 2, 0],
            ),
        ]
    }

    pub fn len() -> usize {
        Self::LEN
    }
}
