//! Presentation flavor text shown alongside questions.
//!
//! Quotes and snippets are indexed by question number. Past the end of the
//! quote list a quote is drawn at random from an injected RNG, so hosts can
//! seed it for reproducible output.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;

/// Heading shown before the assessment starts.
pub const WELCOME_TITLE: &str = "Welcome to the AI & ML Readiness Assessment";

pub const WELCOME_TEXT: &str = indoc::indoc! {"
    Evaluate your understanding of AI/ML strategies, execution capabilities,
    organizational culture, and data readiness. Identify gaps and explore ways
    to align your initiatives with long-term goals."};

/// Shown under every question.
pub const REFLECTION_PROMPT: &str = indoc::indoc! {"
    Reflect on how this aspect of AI/ML readiness applies to your organization.
    Consider strategic goals, potential roadblocks, and the internal alignment of teams."};

const QUOTES: &[&str] = &[
    "\"AI will continue to grow in 2025, but workplaces must accompany implementation with regular AI literacy.\"",
    "\"By 2025, AI governance can't be addressed in pockets; holistic strategy is key.\"",
    "\"Rigorous risk management practices for AI become nonnegotiable in fast-paced implementations.\"",
];

const SNIPPETS: &[&str] = &[
    "An AI strategist clarifies goals and avoids wasted AI investments.",
    "Vendor-agnostic approaches reduce licensing fees and hidden service charges.",
    "Strategically scaling AI can yield up to 3x return over siloed implementations.",
    "Custom solutions from the start reduce expensive modifications later.",
    "Internal implementations can save millions by removing incremental user fees.",
];

/// Source of quotes and snippets.
pub struct FlavorText<R: Rng = Mcg128Xsl64> {
    rng: R,
}

impl FlavorText<Mcg128Xsl64> {
    /// Deterministic fallback quotes.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(Mcg128Xsl64::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(Mcg128Xsl64::from_entropy())
    }

    /// Seeded when `seed` is set, entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> FlavorText<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Fixed quote for `index`, or a random one once the list runs out.
    pub fn quote_for(&mut self, index: usize) -> &'static str {
        match QUOTES.get(index).copied() {
            Some(quote) => quote,
            None => QUOTES.choose(&mut self.rng).copied().unwrap_or_default(),
        }
    }

    /// Snippet for `index`; there is no fallback.
    pub fn snippet_for(&self, index: usize) -> Option<&'static str> {
        SNIPPETS.get(index).copied()
    }
}
