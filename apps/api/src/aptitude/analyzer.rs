//! Aptitude analysis — the first of the two model calls.
//!
//! Flow: build prompt → model call with `analysis_schema()` → serde → `validate_analysis`.
//! `try_analyze_aptitude` surfaces failures; `analyze_with_fallback` and
//! `analyze_aptitude` substitute the fixed fallback record instead.

use serde::Serialize;
use tracing::{info, warn};

use crate::aptitude::prompts::{analysis_schema, ANALYSIS_PROMPT_TEMPLATE};
use crate::aptitude::validation::validate_analysis;
use crate::errors::OrchestrationError;
use crate::llm_client::prompts::{fill_template, JSON_ONLY_INSTRUCTION, LANGUAGE_INSTRUCTION};
use crate::llm_client::{call_json, GenerativeModel};
use crate::models::analysis::{AnalysisSource, AptitudeAnalysis, SkillScore};
use crate::models::profile::{AptitudeAnswers, QuestionKey, UserProfile};

/// Personality type of the fallback record. Tests and the front-end key off it.
pub const FALLBACK_PERSONALITY_TYPE: &str = "นักคิดวิเคราะห์ผู้สร้างสรรค์ (Mock)";

/// An analysis plus where it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisOutcome {
    pub analysis: AptitudeAnalysis,
    pub source: AnalysisSource,
}

/// Fills the analysis template with the profile and the five answers.
pub fn build_analysis_prompt(profile: &UserProfile, answers: &AptitudeAnswers) -> String {
    let answers_block = QuestionKey::ALL
        .iter()
        .enumerate()
        .map(|(i, &key)| format!("{}. {}: {}", i + 1, key.topic(), answers.get(key)))
        .collect::<Vec<_>>()
        .join("\n");

    fill_template(
        ANALYSIS_PROMPT_TEMPLATE,
        &[
            ("language_instruction", LANGUAGE_INSTRUCTION),
            ("name", profile.name.as_str()),
            ("age", profile.age.as_str()),
            ("interest", profile.interest.as_str()),
            ("answers", answers_block.as_str()),
            ("json_only_instruction", JSON_ONLY_INSTRUCTION),
        ],
    )
}

/// Runs the analysis call and validates the result. Never substitutes data.
pub async fn try_analyze_aptitude(
    model: &dyn GenerativeModel,
    profile: &UserProfile,
    answers: &AptitudeAnswers,
) -> Result<AptitudeAnalysis, OrchestrationError> {
    let prompt = build_analysis_prompt(profile, answers);
    let raw: AptitudeAnalysis = call_json(model, &prompt, &analysis_schema()).await?;
    let analysis = validate_analysis(raw)?;
    info!(
        "Aptitude analysis ready: type={:?}, axes={}",
        analysis.personality_type,
        analysis.radar_data.len()
    );
    Ok(analysis)
}

/// Runs the analysis call, falling back to `fallback_analysis()` on any failure.
/// The returned source records whether the result is degraded.
pub async fn analyze_with_fallback(
    model: &dyn GenerativeModel,
    profile: &UserProfile,
    answers: &AptitudeAnswers,
) -> AnalysisOutcome {
    match try_analyze_aptitude(model, profile, answers).await {
        Ok(analysis) => AnalysisOutcome {
            analysis,
            source: AnalysisSource::Model,
        },
        Err(e) => {
            let reason = e.kind();
            warn!("Analysis failed ({reason:?}), serving fallback analysis: {e}");
            AnalysisOutcome {
                analysis: fallback_analysis(),
                source: AnalysisSource::Fallback { reason },
            }
        }
    }
}

/// Always yields an analysis; the caller cannot observe failure.
///
/// Only the tests call this: the session workflow needs the `AnalysisSource`
/// to flag degraded runs, so it goes through `analyze_with_fallback`.
#[allow(dead_code)]
pub async fn analyze_aptitude(
    model: &dyn GenerativeModel,
    profile: &UserProfile,
    answers: &AptitudeAnswers,
) -> AptitudeAnalysis {
    analyze_with_fallback(model, profile, answers).await.analysis
}

/// The fixed record served when the analysis call fails.
pub fn fallback_analysis() -> AptitudeAnalysis {
    let axis = |subject: &str, score: f64| SkillScore {
        subject: subject.to_string(),
        score,
        full_mark: 100.0,
    };

    AptitudeAnalysis {
        personality_type: FALLBACK_PERSONALITY_TYPE.to_string(),
        summary: "เกิดข้อผิดพลาดในการเชื่อมต่อ AI แต่โดยรวมคุณเป็นคนที่มีความคิดสร้างสรรค์และชอบแก้ปัญหา"
            .to_string(),
        top_skills: vec![
            "Critical Thinking".to_string(),
            "Creativity".to_string(),
            "Problem Solving".to_string(),
        ],
        radar_data: vec![
            axis("Analytical", 80.0),
            axis("Creative", 70.0),
            axis("Social", 50.0),
            axis("Tech", 60.0),
            axis("Leadership", 40.0),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FailureKind;
    use crate::llm_client::testing::ScriptedModel;
    use crate::llm_client::LlmError;

    fn profile() -> UserProfile {
        UserProfile {
            name: "มิ้นท์".to_string(),
            age: "16".to_string(),
            interest: "ปลูกต้นไม้".to_string(),
        }
    }

    fn answers() -> AptitudeAnswers {
        AptitudeAnswers {
            q1: "ปรึกษาเพื่อน".to_string(),
            q2: "คนเก็บข้อมูล".to_string(),
            q3: "ดูวิดีโอ".to_string(),
            q4: "ออฟฟิศที่สนุกสนาน".to_string(),
            q5: "รวย".to_string(),
        }
    }

    const MODEL_REPLY: &str = r#"{
        "personalityType": "นักสำรวจธรรมชาติ",
        "summary": "คุณมีความอดทนและช่างสังเกต",
        "topSkills": ["Observation", "Patience", "Research"],
        "radarData": [
            {"subject": "Analytical", "A": 72, "fullMark": 100},
            {"subject": "Creative", "A": 64, "fullMark": 100},
            {"subject": "Social", "A": 58, "fullMark": 100},
            {"subject": "Leadership", "A": 41, "fullMark": 100},
            {"subject": "Technical", "A": 66, "fullMark": 100},
            {"subject": "Resilience", "A": 80, "fullMark": 100}
        ]
    }"#;

    #[test]
    fn test_prompt_contains_profile_and_all_answers() {
        let prompt = build_analysis_prompt(&profile(), &answers());
        assert!(prompt.contains("Name: มิ้นท์, Age: 16, Interest: ปลูกต้นไม้"));
        assert!(prompt.contains("1. Problem Solving: ปรึกษาเพื่อน"));
        assert!(prompt.contains("5. Ultimate Goal: รวย"));
        assert!(prompt.contains("Language: Thai (TH)."));
        for placeholder in ["{language_instruction}", "{name}", "{answers}", "{json_only_instruction}"] {
            assert!(!prompt.contains(placeholder), "unfilled {placeholder} in: {prompt}");
        }
    }

    #[test]
    fn test_prompt_keeps_user_text_with_braces_verbatim() {
        let profile = UserProfile {
            name: "{answers}".to_string(),
            age: "17".to_string(),
            interest: "{json_only_instruction}".to_string(),
        };
        let mut answers = answers();
        answers.q1 = "{name} {x}".to_string();

        let prompt = build_analysis_prompt(&profile, &answers);
        assert!(
            prompt.contains("Name: {answers}, Age: 17, Interest: {json_only_instruction}"),
            "profile line was rewritten: {prompt}"
        );
        assert!(prompt.contains("1. Problem Solving: {name} {x}"));
        assert!(prompt.contains("5. Ultimate Goal: รวย"));
    }

    #[tokio::test]
    async fn test_successful_response_round_trips_exactly() {
        let model = ScriptedModel::new().reply(MODEL_REPLY);
        let analysis = try_analyze_aptitude(&model, &profile(), &answers())
            .await
            .unwrap();
        let expected: AptitudeAnalysis = serde_json::from_str(MODEL_REPLY).unwrap();
        assert_eq!(analysis, expected);
        assert_eq!(model.prompt_count(), 1);
    }

    #[tokio::test]
    async fn test_network_failure_yields_fixed_fallback() {
        let model = ScriptedModel::new().fail(LlmError::Api {
            status: 503,
            message: "unavailable".to_string(),
        });
        let analysis = analyze_aptitude(&model, &profile(), &answers()).await;
        assert_eq!(analysis.personality_type, FALLBACK_PERSONALITY_TYPE);
        assert_eq!(analysis.top_skills.len(), 3);
        assert_eq!(analysis.radar_data.len(), 5);
        assert_eq!(analysis, fallback_analysis());
    }

    #[tokio::test]
    async fn test_fallback_source_records_reason() {
        let model = ScriptedModel::new().fail(LlmError::MissingApiKey);
        let outcome = analyze_with_fallback(&model, &profile(), &answers()).await;
        assert_eq!(
            outcome.source,
            AnalysisSource::Fallback {
                reason: FailureKind::MissingCredential
            }
        );
    }

    #[tokio::test]
    async fn test_schema_mismatch_falls_back() {
        let reply = r#"{
            "personalityType": "x", "summary": "y",
            "topSkills": ["only one"],
            "radarData": []
        }"#;
        let model = ScriptedModel::new().reply(reply);
        let outcome = analyze_with_fallback(&model, &profile(), &answers()).await;
        assert_eq!(
            outcome.source,
            AnalysisSource::Fallback {
                reason: FailureKind::SchemaMismatch
            }
        );
        assert_eq!(outcome.analysis, fallback_analysis());
    }

    #[tokio::test]
    async fn test_garbage_text_is_malformed() {
        let model = ScriptedModel::new().reply("I cannot help with that.");
        let err = try_analyze_aptitude(&model, &profile(), &answers())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::Malformed);
    }

    #[tokio::test]
    async fn test_model_source_on_success() {
        let model = ScriptedModel::new().reply(MODEL_REPLY);
        let outcome = analyze_with_fallback(&model, &profile(), &answers()).await;
        assert_eq!(outcome.source, AnalysisSource::Model);
        assert!(!outcome.source.is_degraded());
    }

    #[test]
    fn test_fallback_passes_own_validation() {
        assert!(validate_analysis(fallback_analysis()).is_ok());
    }
}
