//! Narrative insights from a final score sheet.
//!
//! Categories are ranked by score, highest first. Ties are broken by
//! enumeration order at both ends of the ranking:
//!
//! - the top category is the first-declared category holding the maximum
//! - the bottom category is the first-declared category holding the minimum
//!
//! When every score is equal both resolve to [`Category::Strategy`].

use serde::{Deserialize, Serialize};

use crate::assessment::{Category, ScoreSheet};

const TOP_FOLLOW_UP: &str =
    "This indicates an area where your organization can push forward with AI initiatives.";

const BOTTOM_FOLLOW_UP: &str =
    "By focusing on this aspect, you can create a more balanced AI strategy.";

/// Advisory paragraphs appended regardless of the scores.
pub const ADVISORY: &[&str] = &[
    "Consider cross-functional teams, ongoing AI literacy, and robust data governance to ensure sustainable AI adoption.",
];

/// Ranked summary of a score sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    /// Highest-potential category.
    pub top: Category,
    /// Greatest-room-for-growth category.
    pub bottom: Category,
    /// All categories, highest score first.
    pub ranking: Vec<(Category, i32)>,
}

impl Insights {
    /// Narrative paragraphs in display order.
    pub fn paragraphs(&self) -> Vec<String> {
        let mut paragraphs = vec![
            format!("Highest Potential: {}.\n{TOP_FOLLOW_UP}", self.top),
            format!("Greatest Room for Growth: {}.\n{BOTTOM_FOLLOW_UP}", self.bottom),
        ];
        paragraphs.extend(ADVISORY.iter().map(|p| p.to_string()));
        paragraphs
    }

    /// Paragraphs joined by blank lines.
    pub fn to_text(&self) -> String {
        self.paragraphs().join("\n\n")
    }
}

pub struct InsightGenerator;

impl InsightGenerator {
    /// Categories sorted by score descending, ties in enumeration order.
    pub fn rank(scores: &ScoreSheet) -> Vec<(Category, i32)> {
        let mut ranking: Vec<(Category, i32)> = Category::ALL
            .into_iter()
            .map(|c| (c, scores.get(c)))
            .collect();
        // sort_by is stable, so equal scores keep enumeration order.
        ranking.sort_by(|a, b| b.1.cmp(&a.1));
        ranking
    }

    pub fn generate(scores: &ScoreSheet) -> Insights {
        let ranking = Self::rank(scores);
        let top = ranking[0].0;
        // min_by_key returns the first of several equal minima.
        let bottom = Category::ALL
            .into_iter()
            .min_by_key(|c| scores.get(*c))
            .unwrap_or(Category::Strategy);

        tracing::debug!(%top, %bottom, "generated insights");
        Insights {
            top,
            bottom,
            ranking,
        }
    }
}
