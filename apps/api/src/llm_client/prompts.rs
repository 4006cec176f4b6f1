// Shared prompt fragments.
// Each feature that needs LLM calls defines its own prompts.rs alongside it.

/// Instruction that enforces JSON-only output. Appended to every system prompt.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Placeholder shown to the model for optional inputs the user left blank.
pub const NOT_PROVIDED: &str = "Not provided";

/// Fills `{name}` placeholders in `template` in a single pass.
/// Unknown placeholders are left untouched and substituted values are never re-scanned.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let value = tail[1..].find('}').and_then(|end| {
            let name = &tail[1..=end];
            vars.iter()
                .find(|(var, _)| *var == name)
                .map(|(_, value)| (*value, end + 2))
        });
        match value {
            Some((value, consumed)) => {
                out.push_str(value);
                rest = &tail[consumed..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
