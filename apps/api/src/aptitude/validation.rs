//! Semantic checks on a deserialized analysis. Serde already guarantees field
//! presence and types; this enforces the cardinalities and ranges.

use crate::errors::OrchestrationError;
use crate::models::analysis::AptitudeAnalysis;

pub const TOP_SKILL_COUNT: usize = 3;
pub const MIN_RADAR_AXES: usize = 5;
pub const MAX_RADAR_AXES: usize = 6;
pub const FULL_MARK: f64 = 100.0;

/// Validates and normalizes an analysis returned by the model.
///
/// Rejects: blank personality type or summary, a skill count other than 3,
/// blank skills, fewer than 5 or more than 6 radar axes, blank axis subjects,
/// non-finite scores.
/// Normalizes: scores clamped to [0, 100], `fullMark` forced to 100.
pub fn validate_analysis(mut analysis: AptitudeAnalysis) -> Result<AptitudeAnalysis, OrchestrationError> {
    if analysis.personality_type.trim().is_empty() {
        return Err(schema("personalityType is blank"));
    }
    if analysis.summary.trim().is_empty() {
        return Err(schema("summary is blank"));
    }
    if analysis.top_skills.len() != TOP_SKILL_COUNT {
        return Err(schema(format!(
            "topSkills has {} entries, expected {TOP_SKILL_COUNT}",
            analysis.top_skills.len()
        )));
    }
    if analysis.top_skills.iter().any(|s| s.trim().is_empty()) {
        return Err(schema("topSkills contains a blank entry"));
    }

    let axes = analysis.radar_data.len();
    if !(MIN_RADAR_AXES..=MAX_RADAR_AXES).contains(&axes) {
        return Err(schema(format!(
            "radarData has {axes} axes, expected {MIN_RADAR_AXES}-{MAX_RADAR_AXES}"
        )));
    }

    for axis in &mut analysis.radar_data {
        if axis.subject.trim().is_empty() {
            return Err(schema("radarData contains a blank subject"));
        }
        if !axis.score.is_finite() {
            return Err(schema(format!("score for '{}' is not a number", axis.subject)));
        }
        axis.score = axis.score.clamp(0.0, FULL_MARK);
        axis.full_mark = FULL_MARK;
    }

    Ok(analysis)
}

fn schema(msg: impl Into<String>) -> OrchestrationError {
    OrchestrationError::Schema(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::SkillScore;

    fn axis(subject: &str, score: f64) -> SkillScore {
        SkillScore {
            subject: subject.to_string(),
            score,
            full_mark: 100.0,
        }
    }

    fn valid() -> AptitudeAnalysis {
        AptitudeAnalysis {
            personality_type: "นักวางแผนเชิงกลยุทธ์".to_string(),
            summary: "คุณชอบคิดอย่างเป็นระบบ".to_string(),
            top_skills: vec!["Logic".into(), "Planning".into(), "Focus".into()],
            radar_data: vec![
                axis("Analytical", 85.0),
                axis("Creative", 60.0),
                axis("Social", 45.0),
                axis("Leadership", 70.0),
                axis("Technical", 90.0),
            ],
        }
    }

    #[test]
    fn test_valid_analysis_is_unchanged() {
        assert_eq!(validate_analysis(valid()).unwrap(), valid());
    }

    #[test]
    fn test_six_axes_accepted() {
        let mut a = valid();
        a.radar_data.push(axis("Resilience", 55.0));
        assert!(validate_analysis(a).is_ok());
    }

    #[test]
    fn test_four_axes_rejected() {
        let mut a = valid();
        a.radar_data.pop();
        let err = validate_analysis(a).unwrap_err();
        assert!(err.to_string().contains("4 axes"));
    }

    #[test]
    fn test_seven_axes_rejected() {
        let mut a = valid();
        a.radar_data.push(axis("Resilience", 55.0));
        a.radar_data.push(axis("Empathy", 65.0));
        assert!(validate_analysis(a).is_err());
    }

    #[test]
    fn test_two_skills_rejected() {
        let mut a = valid();
        a.top_skills.pop();
        let err = validate_analysis(a).unwrap_err();
        assert!(err.to_string().contains("topSkills has 2"));
    }

    #[test]
    fn test_blank_skill_rejected() {
        let mut a = valid();
        a.top_skills[1] = "  ".to_string();
        assert!(validate_analysis(a).is_err());
    }

    #[test]
    fn test_blank_personality_rejected() {
        let mut a = valid();
        a.personality_type = String::new();
        assert!(validate_analysis(a).is_err());
    }

    #[test]
    fn test_scores_clamped_and_full_mark_normalized() {
        let mut a = valid();
        a.radar_data[0] = SkillScore {
            subject: "Analytical".to_string(),
            score: 140.0,
            full_mark: 10.0,
        };
        a.radar_data[1].score = -5.0;
        let out = validate_analysis(a).unwrap();
        assert_eq!(out.radar_data[0].score, 100.0);
        assert_eq!(out.radar_data[0].full_mark, 100.0);
        assert_eq!(out.radar_data[1].score, 0.0);
    }

    #[test]
    fn test_nan_score_rejected() {
        let mut a = valid();
        a.radar_data[2].score = f64::NAN;
        assert!(validate_analysis(a).is_err());
    }
}
