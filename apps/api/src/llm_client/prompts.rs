// Shared prompt constants and prompt-building utilities.
// The advisor defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Common instruction appended to every advisor prompt.
pub const SCHEMA_INSTRUCTION: &str = "\
    CRITICAL: Return exactly the fields shown in the schema. \
    Do NOT add, rename, or omit fields. \
    Use empty strings or empty arrays when you have nothing to say.";

/// Renders a list of items as a comma-separated string, or `none` when empty.
pub fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

/// Fills `{name}` placeholders in a single left-to-right pass. Substituted values are
/// never rescanned, so text supplied by users cannot expand into other placeholders.
/// Unknown placeholders are left as written.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match value {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_known_placeholders() {
        let out = fill("Hi {name}, aim for {goal}.", &[("name", "Asha"), ("goal", "ML")]);
        assert_eq!(out, "Hi Asha, aim for ML.");
    }

    #[test]
    fn test_fill_does_not_rescan_values() {
        let out = fill(
            "{name} needs {skills}",
            &[("name", "{skills}"), ("skills", "Docker")],
        );
        assert_eq!(out, "{skills} needs Docker");
    }

    #[test]
    fn test_fill_keeps_unknown_and_literal_braces() {
        let out = fill(r#"{"title": "{title}"} {other}"#, &[("title", "Analyst")]);
        assert_eq!(out, r#"{"title": "Analyst"} {other}"#);
    }

    #[test]
    fn test_join_or_none() {
        assert_eq!(join_or_none(&[]), "none");
        assert_eq!(join_or_none(&["A".to_string(), "B".to_string()]), "A, B");
    }
}
