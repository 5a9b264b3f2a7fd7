// Shared prompt fragments.
// Each feature module that needs LLM calls defines its own prompts.rs alongside it.

/// Output language for every user-facing string the model produces.
pub const LANGUAGE_INSTRUCTION: &str = "Language: Thai (TH).";

/// Appended to every prompt; the response schema does the structural work,
/// this keeps the model from wrapping the payload in prose.
pub const JSON_ONLY_INSTRUCTION: &str = "Respond with JSON only, matching the declared schema. \
    Do NOT include any text outside the JSON. \
    Do NOT use markdown code fences.";

/// Fills `{key}` placeholders in one left-to-right pass over `template`.
/// Substituted text is never rescanned, so values may contain braces or
/// placeholder names verbatim. Unknown `{...}` sequences are kept as-is.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
