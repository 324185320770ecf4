use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A scored readiness dimension.
///
/// Declaration order is significant: it is the enumeration order used for
/// iteration, serialization and tie-breaking when ranking scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Strategy,
    Execution,
    Culture,
    Data,
}

impl Category {
    /// All categories in enumeration order.
    pub const ALL: [Category; 4] = [
        Category::Strategy,
        Category::Execution,
        Category::Culture,
        Category::Data,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Strategy => "Strategy",
            Category::Execution => "Execution",
            Category::Culture => "Culture",
            Category::Data => "Data",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ord_follows_declaration_order() {
        let mut shuffled = vec![
            Category::Data,
            Category::Strategy,
            Category::Culture,
            Category::Execution,
        ];
        shuffled.sort();
        assert_eq!(shuffled, Category::ALL.to_vec());
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("culture".parse::<Category>().unwrap(), Category::Culture);
        assert_eq!(" DATA ".parse::<Category>().unwrap(), Category::Data);
        assert!("People".parse::<Category>().is_err());
    }
}
