use serde::{Deserialize, Serialize};

/// How often the AI deviates from optimal play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl Difficulty {
    /// Parses the display labels used by the collaborator's difficulty
    /// selector. Unknown labels yield `None`, leaving the caller's prior
    /// setting in effect.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Easy" => Some(Self::Easy),
            "Medium" => Some(Self::Medium),
            "Hard" => Some(Self::Hard),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// Policy parameters for the search engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Chance of playing a uniformly random move on Easy.
    pub easy_random_chance: f64,
    /// Chance of playing a uniformly random move on Medium.
    pub medium_random_chance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            easy_random_chance: 0.7,
            medium_random_chance: 0.3,
        }
    }
}

impl EngineConfig {
    /// Loads a config from a JSON string. Missing fields keep their
    /// defaults; malformed JSON is an error.
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    #[must_use]
    pub fn random_move_chance(&self, difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::Easy => self.easy_random_chance,
            Difficulty::Medium => self.medium_random_chance,
            Difficulty::Hard => 0.0,
        }
    }
}
