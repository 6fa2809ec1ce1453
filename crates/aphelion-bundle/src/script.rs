//! Config injection into the script template.

/// Errors that can occur when injecting config into the script template.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Placeholder token must not be empty")]
    EmptyPlaceholder,

    #[error("Placeholder `{0}` not found in script template")]
    MissingPlaceholder(String),

    #[error("Placeholder `{placeholder}` appears {count} times, expected exactly once")]
    RepeatedPlaceholder { placeholder: String, count: usize },
}

/// Replace the single `placeholder` in `template` with `config_json`.
///
/// The template must contain the placeholder exactly once.
pub fn inject_config(
    template: &str,
    placeholder: &str,
    config_json: &str,
) -> Result<String, ScriptError> {
    if placeholder.is_empty() {
        return Err(ScriptError::EmptyPlaceholder);
    }

    match template.matches(placeholder).count() {
        0 => Err(ScriptError::MissingPlaceholder(placeholder.to_string())),
        1 => Ok(template.replacen(placeholder, config_json, 1)),
        count => Err(ScriptError::RepeatedPlaceholder {
            placeholder: placeholder.to_string(),
            count,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PLACEHOLDER_CONFIG;
    use pretty_assertions::assert_eq;

    #[test]
    fn replaces_placeholder() {
        let template = "(function() {\n  const CONFIG = __APHELION_CONFIG__;\n})();\n";

        let script = inject_config(template, PLACEHOLDER_CONFIG, r#"{"games":[]}"#).unwrap();

        assert_eq!(
            script,
            "(function() {\n  const CONFIG = {\"games\":[]};\n})();\n"
        );
    }

    #[test]
    fn placeholder_inside_config_is_left_alone() {
        let script = inject_config(
            "x=__APHELION_CONFIG__;",
            PLACEHOLDER_CONFIG,
            r#"{"note":"__APHELION_CONFIG__"}"#,
        )
        .unwrap();

        assert_eq!(script, r#"x={"note":"__APHELION_CONFIG__"};"#);
    }

    #[test]
    fn errors_on_missing_placeholder() {
        let result = inject_config("const CONFIG = {};", PLACEHOLDER_CONFIG, "{}");

        assert_eq!(
            result,
            Err(ScriptError::MissingPlaceholder(PLACEHOLDER_CONFIG.to_string()))
        );
    }

    #[test]
    fn errors_on_repeated_placeholder() {
        let template = "a=__APHELION_CONFIG__;b=__APHELION_CONFIG__;";

        let result = inject_config(template, PLACEHOLDER_CONFIG, "{}");

        assert!(matches!(
            result,
            Err(ScriptError::RepeatedPlaceholder { count: 2, .. })
        ));
    }

    #[test]
    fn errors_on_empty_placeholder() {
        let result = inject_config("x", "", "{}");

        assert_eq!(result, Err(ScriptError::EmptyPlaceholder));
    }
}
