use serde::{Deserialize, Serialize};

/// Match percentage above which a career card is highlighted.
pub const STRONG_MATCH_THRESHOLD: f64 = 85.0;

/// A suggested occupation with its rationale and learning resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerDetail {
    pub id: String,
    pub title: String,
    /// 0 – 100
    pub match_percentage: f64,
    pub description: String,
    /// Estimated monthly salary in THB, as free text.
    pub salary_range: String,
    pub reason: String,
    pub study_paths: Vec<String>,
    pub skills_required: Vec<String>,
    pub online_courses: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Strong,
    Standard,
}

/// Card-sized view of a career for the ranked list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerMatch {
    pub index: usize,
    pub id: String,
    pub title: String,
    pub match_percentage: f64,
    pub tier: MatchTier,
    /// First entry of the ranked list.
    pub top_pick: bool,
    pub description: String,
    pub salary_range: String,
    pub reason: String,
}

impl CareerDetail {
    pub fn tier(&self) -> MatchTier {
        if self.match_percentage > STRONG_MATCH_THRESHOLD {
            MatchTier::Strong
        } else {
            MatchTier::Standard
        }
    }

    pub fn summary(&self, index: usize) -> CareerMatch {
        CareerMatch {
            index,
            id: self.id.clone(),
            title: self.title.clone(),
            match_percentage: self.match_percentage,
            tier: self.tier(),
            top_pick: index == 0,
            description: self.description.clone(),
            salary_range: self.salary_range.clone(),
            reason: self.reason.clone(),
        }
    }
}
