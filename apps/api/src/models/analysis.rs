use serde::{Deserialize, Serialize};

/// One axis of the radar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillScore {
    pub subject: String,
    /// Score out of `full_mark`.
    #[serde(rename = "A")]
    pub score: f64,
    pub full_mark: f64,
}

/// Personality and skill summary produced by the first model call (or the
/// fallback). Held unchanged for the rest of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AptitudeAnalysis {
    pub personality_type: String,
    pub summary: String,
    pub top_skills: Vec<String>,
    pub radar_data: Vec<SkillScore>,
}

/// Where a stored analysis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisSource {
    Model,
    Fallback { reason: crate::errors::FailureKind },
}

impl AnalysisSource {
    pub fn is_degraded(&self) -> bool {
        matches!(self, AnalysisSource::Fallback { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FailureKind;

    #[test]
    fn test_analysis_uses_wire_field_names() {
        let analysis = AptitudeAnalysis {
            personality_type: "นักสร้างสรรค์".to_string(),
            summary: "สรุป".to_string(),
            top_skills: vec!["A".into(), "B".into(), "C".into()],
            radar_data: vec![SkillScore {
                subject: "Logic".to_string(),
                score: 75.0,
                full_mark: 100.0,
            }],
        };
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["personalityType"], "นักสร้างสรรค์");
        assert_eq!(json["topSkills"][2], "C");
        assert_eq!(json["radarData"][0]["A"], 75.0);
        assert_eq!(json["radarData"][0]["fullMark"], 100.0);
    }

    #[test]
    fn test_skill_score_requires_a_field() {
        let result: Result<SkillScore, _> =
            serde_json::from_str(r#"{"subject": "Logic", "fullMark": 100}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_analysis_source_tagging() {
        let json = serde_json::to_value(AnalysisSource::Fallback {
            reason: FailureKind::Transport,
        })
        .unwrap();
        assert_eq!(json["kind"], "fallback");
        assert_eq!(json["reason"], "transport");
        assert!(!AnalysisSource::Model.is_degraded());
    }
}
