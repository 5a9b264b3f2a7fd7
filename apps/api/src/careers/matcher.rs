//! Career matching — the second of the two model calls.
//!
//! Flow: serialize the analysis into the prompt → model call with `career_schema()`
//! → serde → `validate_careers`. There is no fallback career data: failure is
//! either surfaced (`try_match_careers`) or collapsed to an empty list (`match_careers`).

use tracing::{error, info};

use crate::careers::prompts::{career_schema, MATCHING_PROMPT_TEMPLATE, REQUESTED_CAREER_COUNT};
use crate::careers::validation::validate_careers;
use crate::errors::OrchestrationError;
use crate::llm_client::prompts::{fill_template, JSON_ONLY_INSTRUCTION, LANGUAGE_INSTRUCTION};
use crate::llm_client::{call_json, GenerativeModel};
use crate::models::analysis::AptitudeAnalysis;
use crate::models::career::CareerDetail;

/// Embeds the analysis as JSON in the matching template.
pub fn build_matching_prompt(analysis: &AptitudeAnalysis) -> Result<String, OrchestrationError> {
    let analysis_json = serde_json::to_string(analysis)
        .map_err(|e| OrchestrationError::Schema(format!("analysis is not serializable: {e}")))?;

    let count = REQUESTED_CAREER_COUNT.to_string();

    Ok(fill_template(
        MATCHING_PROMPT_TEMPLATE,
        &[
            ("count", count.as_str()),
            ("language_instruction", LANGUAGE_INSTRUCTION),
            ("json_only_instruction", JSON_ONLY_INSTRUCTION),
            ("analysis_json", analysis_json.as_str()),
        ],
    ))
}

/// Runs the matching call and validates the result.
pub async fn try_match_careers(
    model: &dyn GenerativeModel,
    analysis: &AptitudeAnalysis,
) -> Result<Vec<CareerDetail>, OrchestrationError> {
    let prompt = build_matching_prompt(analysis)?;
    let raw: Vec<CareerDetail> = call_json(model, &prompt, &career_schema()).await?;
    let careers = validate_careers(raw)?;
    info!("Career matching returned {} careers", careers.len());
    Ok(careers)
}

/// Runs the matching call; any failure yields an empty list.
///
/// Only the tests call this: the session workflow must tell a failed call from
/// an empty result to offer a retry, so it goes through `try_match_careers`.
#[allow(dead_code)]
pub async fn match_careers(
    model: &dyn GenerativeModel,
    analysis: &AptitudeAnalysis,
) -> Vec<CareerDetail> {
    match try_match_careers(model, analysis).await {
        Ok(careers) => careers,
        Err(e) => {
            error!("Career matching failed ({:?}): {e}", e.kind());
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aptitude::analyzer::fallback_analysis;
    use crate::errors::FailureKind;
    use crate::llm_client::testing::ScriptedModel;
    use crate::llm_client::LlmError;

    const MODEL_REPLY: &str = r#"[
        {
            "id": "ux", "title": "นักออกแบบ UX/UI", "matchPercentage": 78,
            "description": "ออกแบบประสบการณ์ผู้ใช้", "salaryRange": "30,000 - 70,000 บาท",
            "reason": "มีความคิดสร้างสรรค์",
            "studyPaths": ["นิเทศศิลป์"], "skillsRequired": ["Figma"], "onlineCourses": ["UX Design"]
        },
        {
            "id": "ds", "title": "นักวิทยาศาสตร์ข้อมูล", "matchPercentage": 91,
            "description": "วิเคราะห์ข้อมูล", "salaryRange": "45,000 - 120,000 บาท",
            "reason": "ชอบวิเคราะห์",
            "studyPaths": ["สถิติ", "วิทยาการคอมพิวเตอร์"], "skillsRequired": ["Python", "SQL"],
            "onlineCourses": ["Machine Learning"]
        }
    ]"#;

    #[test]
    fn test_prompt_embeds_analysis_json() {
        let prompt = build_matching_prompt(&fallback_analysis()).unwrap();
        assert!(prompt.contains(r#""personalityType":"นักคิดวิเคราะห์ผู้สร้างสรรค์ (Mock)""#));
        assert!(prompt.contains("Suggest 5 future careers"));
        assert!(!prompt.contains("{analysis_json}"));
    }

    #[test]
    fn test_prompt_keeps_analysis_text_with_placeholders() {
        let mut analysis = fallback_analysis();
        analysis.summary = "ชอบ {count} และ {language_instruction}".to_string();
        let prompt = build_matching_prompt(&analysis).unwrap();
        assert!(prompt.contains("ชอบ {count} และ {language_instruction}"));
        assert!(prompt.contains("Suggest 5 future careers"));
    }

    #[tokio::test]
    async fn test_careers_ranked_on_success() {
        let model = ScriptedModel::new().reply(MODEL_REPLY);
        let careers = try_match_careers(&model, &fallback_analysis())
            .await
            .unwrap();
        assert_eq!(careers.len(), 2);
        assert_eq!(careers[0].id, "ds");
        assert_eq!(careers[1].id, "ux");
    }

    #[tokio::test]
    async fn test_failure_yields_empty_list() {
        let model = ScriptedModel::new().fail(LlmError::Api {
            status: 500,
            message: "boom".to_string(),
        });
        let careers = match_careers(&model, &fallback_analysis()).await;
        assert!(careers.is_empty());
    }

    #[tokio::test]
    async fn test_empty_array_is_success_not_failure() {
        let model = ScriptedModel::new().reply("[]");
        let careers = try_match_careers(&model, &fallback_analysis())
            .await
            .unwrap();
        assert!(careers.is_empty());
    }

    #[tokio::test]
    async fn test_object_instead_of_array_is_malformed() {
        let model = ScriptedModel::new().reply(r#"{"careers": []}"#);
        let err = try_match_careers(&model, &fallback_analysis())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::Malformed);
    }
}
