//! Semantic checks on deserialized career matches.

use crate::errors::OrchestrationError;
use crate::models::career::CareerDetail;

/// Validates, normalizes and ranks the careers returned by the model.
///
/// - a blank `title` or a non-finite `matchPercentage` rejects the whole list
/// - `matchPercentage` is clamped to [0, 100]
/// - a blank `id` becomes `career-<n>` (1-based position in the response)
/// - the result is sorted by `matchPercentage`, highest first; ties keep response order
///
/// An empty list is valid.
pub fn validate_careers(
    mut careers: Vec<CareerDetail>,
) -> Result<Vec<CareerDetail>, OrchestrationError> {
    for (i, career) in careers.iter_mut().enumerate() {
        if career.title.trim().is_empty() {
            return Err(OrchestrationError::Schema(format!(
                "career #{} has a blank title",
                i + 1
            )));
        }
        if !career.match_percentage.is_finite() {
            return Err(OrchestrationError::Schema(format!(
                "matchPercentage for '{}' is not a number",
                career.title
            )));
        }
        career.match_percentage = career.match_percentage.clamp(0.0, 100.0);
        if career.id.trim().is_empty() {
            career.id = format!("career-{}", i + 1);
        }
    }

    careers.sort_by(|a, b| b.match_percentage.total_cmp(&a.match_percentage));
    Ok(careers)
}
