use serde_json::{json, Value};

/// Analysis prompt template.
/// Replace: {language_instruction}, {name}, {age}, {interest}, {answers}, {json_only_instruction}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze this user based on their profile and aptitude test answers.
{language_instruction}

Profile:
Name: {name}, Age: {age}, Interest: {interest}

Answers:
{answers}

Provide a psychological analysis, identifying their personality type, key strengths, and score them on 5-6 dimensions (e.g., Analytical, Creative, Social, Leadership, Technical, Resilience) for a radar chart.
Give exactly 3 top skills. Every score is between 0 and 100 and fullMark is always 100.

{json_only_instruction}"#;

/// Response schema for the analysis call, in Gemini `responseSchema` form.
pub fn analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "personalityType": {
                "type": "STRING",
                "description": "A creative name for their personality type in Thai"
            },
            "summary": {
                "type": "STRING",
                "description": "A 2-3 sentence summary of their strengths in Thai"
            },
            "topSkills": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of top 3 soft/hard skills"
            },
            "radarData": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "subject": {
                            "type": "STRING",
                            "description": "Skill category (e.g., Logic, Creativity, Social, Tech)"
                        },
                        "A": { "type": "NUMBER", "description": "Score from 0 to 100" },
                        "fullMark": { "type": "NUMBER", "description": "Always 100" }
                    },
                    "required": ["subject", "A", "fullMark"]
                },
                "description": "Data for 5-6 axes radar chart"
            }
        },
        "required": ["personalityType", "summary", "topSkills", "radarData"]
    })
}
