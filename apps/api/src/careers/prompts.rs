use serde_json::{json, Value};

/// Number of careers the model is asked for. Not enforced on the response.
pub const REQUESTED_CAREER_COUNT: usize = 5;

/// Career matching prompt template.
/// Replace: {analysis_json}, {count}, {language_instruction}, {json_only_instruction}
pub const MATCHING_PROMPT_TEMPLATE: &str = r#"Based on this user analysis: {analysis_json}

Suggest {count} future careers that match their profile.
{language_instruction}

For each career, provide:
- Match percentage based on their skills (0-100).
- Specific university faculties or majors for "studyPaths".
- Keywords for online courses for "onlineCourses".
- Estimated monthly salary in THB for "salaryRange".

{json_only_instruction}"#;

/// Response schema for the matching call, in Gemini `responseSchema` form.
pub fn career_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "title": { "type": "STRING", "description": "Job title in Thai" },
                "matchPercentage": { "type": "NUMBER", "description": "Match percentage 0-100" },
                "description": { "type": "STRING", "description": "Short description of the job in Thai" },
                "salaryRange": { "type": "STRING", "description": "Estimated monthly salary in THB" },
                "reason": { "type": "STRING", "description": "Why this fits the user" },
                "studyPaths": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "Faculties or majors to study"
                },
                "skillsRequired": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                },
                "onlineCourses": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "Types of courses or keywords to search for learning"
                }
            },
            "required": [
                "id", "title", "matchPercentage", "description", "salaryRange",
                "reason", "studyPaths", "skillsRequired", "onlineCourses"
            ]
        }
    })
}
