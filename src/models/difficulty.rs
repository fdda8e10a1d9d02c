use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Advanced,
    Unknown,
}

impl Difficulty {
    /// The difficulties boards are sampled for, in output order.
    pub const SAMPLED: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Advanced,
    ];

    pub fn from_empty_count(count: u32) -> Self {
        if count >= 50 {
            Difficulty::Advanced
        } else if count >= 35 {
            Difficulty::Hard
        } else if count >= 25 {
            Difficulty::Medium
        } else {
            Difficulty::Easy
        }
    }

    /// Classifies a raw CSV field. Anything that doesn't parse as a
    /// non-negative integer is Unknown rather than an error.
    pub fn classify(raw: &str) -> Self {
        match raw.trim().parse::<u32>() {
            Ok(count) => Self::from_empty_count(count),
            Err(_) => Difficulty::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Advanced => "advanced",
            Difficulty::Unknown => "unknown",
        }
    }

    /// The capitalized label used in the CSV "Difficulty" column.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Advanced => "Advanced",
            Difficulty::Unknown => "Unknown",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Easy" => Some(Difficulty::Easy),
            "Medium" => Some(Difficulty::Medium),
            "Hard" => Some(Difficulty::Hard),
            "Advanced" => Some(Difficulty::Advanced),
            "Unknown" => Some(Difficulty::Unknown),
            _ => None,
        }
    }
}
