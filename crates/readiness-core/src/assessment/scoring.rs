//! Score accumulation.
//!
//! Answers are centered on the neutral midpoint, so each answer moves a
//! category by `weight * (answer - 3)`:
//!
//! ```text
//! Strongly Disagree  -2 * weight
//! Neutral             0
//! Strongly Agree     +2 * weight
//! ```

use std::collections::BTreeMap;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::answer::AnswerValue;
use super::category::Category;
use super::question_bank::Question;

/// Accumulated per-category totals for one session.
///
/// Always holds every [`Category`]; iteration follows enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Category, i32>", into = "BTreeMap<Category, i32>")]
pub struct ScoreSheet {
    scores: BTreeMap<Category, i32>,
}

impl ScoreSheet {
    /// A sheet with every category at zero.
    pub fn new() -> Self {
        Self {
            scores: Category::ALL.into_iter().map(|c| (c, 0)).collect(),
        }
    }

    pub fn get(&self, category: Category) -> i32 {
        self.scores.get(&category).copied().unwrap_or(0)
    }

    /// `(category, score)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, i32)> + '_ {
        self.scores.iter().map(|(c, s)| (*c, *s))
    }

    pub fn is_zero(&self) -> bool {
        self.scores.values().all(|s| *s == 0)
    }

    fn add(&mut self, category: Category, delta: i32) {
        *self.scores.entry(category).or_insert(0) += delta;
    }
}

impl Default for ScoreSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Category> for ScoreSheet {
    type Output = i32;

    fn index(&self, category: Category) -> &i32 {
        self.scores.get(&category).unwrap_or(&0)
    }
}

impl From<BTreeMap<Category, i32>> for ScoreSheet {
    fn from(partial: BTreeMap<Category, i32>) -> Self {
        let mut sheet = ScoreSheet::new();
        for (category, score) in partial {
            sheet.add(category, score);
        }
        sheet
    }
}

impl From<ScoreSheet> for BTreeMap<Category, i32> {
    fn from(sheet: ScoreSheet) -> Self {
        sheet.scores
    }
}

impl FromIterator<(Category, i32)> for ScoreSheet {
    fn from_iter<I: IntoIterator<Item = (Category, i32)>>(iter: I) -> Self {
        let mut sheet = ScoreSheet::new();
        for (category, score) in iter {
            sheet.add(category, score);
        }
        sheet
    }
}

/// Per-category change produced by answering `question` with `answer`.
pub fn answer_deltas(question: &Question, answer: AnswerValue) -> ScoreSheet {
    question
        .weights
        .iter()
        .map(|(category, weight)| (*category, weight * answer.offset()))
        .collect()
}

/// Returns `scores` with `answer` to `question` applied.
pub fn apply_answer(scores: &ScoreSheet, question: &Question, answer: AnswerValue) -> ScoreSheet {
    let mut next = scores.clone();
    for (category, weight) in &question.weights {
        next.add(*category, weight * answer.offset());
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::QuestionBank;

    fn strategy_heavy() -> Question {
        Question::new("q", [2, 1, 0, 0])
    }

    #[test]
    fn fresh_sheet_is_all_zero() {
        let sheet = ScoreSheet::new();
        for category in Category::ALL {
            assert_eq!(sheet.get(category), 0);
        }
        assert!(sheet.is_zero());
    }

    #[test]
    fn strongly_agree_pushes_weighted() {
        let next = apply_answer(&ScoreSheet::new(), &strategy_heavy(), AnswerValue::STRONGLY_AGREE);
        assert_eq!(next[Category::Strategy], 4);
        assert_eq!(next[Category::Execution], 2);
        assert_eq!(next[Category::Culture], 0);
        assert_eq!(next[Category::Data], 0);
    }

    #[test]
    fn strongly_disagree_pulls_weighted() {
        let next = apply_answer(&ScoreSheet::new(), &strategy_heavy(), AnswerValue::STRONGLY_DISAGREE);
        assert_eq!(next[Category::Strategy], -4);
        assert_eq!(next[Category::Execution], -2);
    }

    #[test]
    fn apply_leaves_input_untouched() {
        let before = ScoreSheet::new();
        let _ = apply_answer(&before, &strategy_heavy(), AnswerValue::AGREE);
        assert!(before.is_zero());
    }

    #[test]
    fn deltas_match_apply() {
        let q = strategy_heavy();
        let start: ScoreSheet = [(Category::Data, 3)].into_iter().collect();
        let next = apply_answer(&start, &q, AnswerValue::DISAGREE);
        let deltas = answer_deltas(&q, AnswerValue::DISAGREE);
        for category in Category::ALL {
            assert_eq!(next[category] - start[category], deltas[category]);
        }
    }

    #[test]
    fn all_strongly_agree_regression_totals() {
        let sheet = QuestionBank::load().iter().fold(ScoreSheet::new(), |acc, q| {
            apply_answer(&acc, q, AnswerValue::STRONGLY_AGREE)
        });
        assert_eq!(sheet[Category::Strategy], 14);
        assert_eq!(sheet[Category::Execution], 16);
        assert_eq!(sheet[Category::Culture], 16);
        assert_eq!(sheet[Category::Data], 14);
    }

    #[test]
    fn serializes_in_enumeration_order() {
        let json = serde_json::to_string(&ScoreSheet::new()).unwrap();
        assert_eq!(json, r#"{"Strategy":0,"Execution":0,"Culture":0,"Data":0}"#);
    }

    #[test]
    fn deserializing_partial_map_fills_zeros() {
        let sheet: ScoreSheet = serde_json::from_str(r#"{"Culture":5}"#).unwrap();
        assert_eq!(sheet[Category::Culture], 5);
        assert_eq!(sheet[Category::Strategy], 0);
        assert_eq!(sheet.iter().count(), 4);
    }
}
