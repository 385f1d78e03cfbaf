use std::collections::HashMap;

use serde::Deserialize;

/// Demand bucket derived from the 2040 market-value score. Drives node color
/// and the legend; always recomputed from the score, never stored on a node
/// permanently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTier {
    HighDemand,
    MidDemand,
    LowDemand,
}

impl ScoreTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 85 {
            Self::HighDemand
        } else if score >= 60 {
            Self::MidDemand
        } else {
            Self::LowDemand
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::HighDemand => "高需要 (85+)",
            Self::MidDemand => "中需要 (60-84)",
            Self::LowDemand => "低需要 (~59)",
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketValue {
    pub score: u8,
    pub salary_range: String,
    pub growth_rate: f32,
    pub ai_risk: u8,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub importance: u8,
    pub category: String,
}

/// Directed career adjacency. The two lists are not required to be mutually
/// consistent, and ids may point outside the catalog entirely.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occupation {
    pub id: String,
    pub name: String,
    pub name_en: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub market_value_2040: MarketValue,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub career_path: CareerPath,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Occupation {
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.market_value_2040.score)
    }
}

/// The full, ordered occupation dataset. Immutable once loaded.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub occupations: Vec<Occupation>,
    index_by_id: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(occupations: Vec<Occupation>) -> Self {
        let index_by_id = occupations
            .iter()
            .enumerate()
            .map(|(index, occupation)| (occupation.id.clone(), index))
            .collect();

        Self {
            occupations,
            index_by_id,
        }
    }

    pub fn len(&self) -> usize {
        self.occupations.len()
    }

    pub fn get(&self, id: &str) -> Option<&Occupation> {
        self.index_by_id
            .get(id)
            .and_then(|&index| self.occupations.get(index))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_by_id.contains_key(id)
    }

    /// Total number of declared forward career-path edges, including ones
    /// whose target is missing from the catalog.
    pub fn career_edge_count(&self) -> usize {
        self.occupations
            .iter()
            .map(|occupation| occupation.career_path.next_steps.len())
            .sum()
    }
}
