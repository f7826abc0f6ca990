//! Advisory screen for the remote analysis path.
//!
//! Rejects snippets with obviously dangerous constructs before they would be
//! sent to the analysis endpoint. It does not guard the local preview.

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

static DYNAMIC_EVALUATION: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        ("eval", r"\beval\s*\("),
        ("new Function", r"\bnew\s+Function\s*\("),
        ("setTimeout with a string", r#"\bsetTimeout\s*\(\s*["'`]"#),
        ("setInterval with a string", r#"\bsetInterval\s*\(\s*["'`]"#),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(pattern).unwrap()))
    .collect()
});

static STYLE_EXPRESSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bexpression\s*\(").unwrap());

pub fn validate_for_remote(snippet: &str) -> Result<(), ValidationError> {
    if let Some((name, _)) = DYNAMIC_EVALUATION.iter().find(|(_, re)| re.is_match(snippet)) {
        warn!("snippet rejected for remote analysis: {}", name);
        return Err(ValidationError::DynamicEvaluation(name));
    }
    if STYLE_EXPRESSION.is_match(snippet) {
        warn!("snippet rejected for remote analysis: style expression");
        return Err(ValidationError::StyleExpression);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinary_code_passes() {
        assert_eq!(validate_for_remote("div { color: red; }"), Ok(()));
        assert_eq!(validate_for_remote("setTimeout(() => go(), 10)"), Ok(()));
        assert_eq!(validate_for_remote("const evaluate = retrieval();"), Ok(()));
    }

    #[test]
    fn eval_is_rejected() {
        assert_eq!(
            validate_for_remote("eval ('1 + 1')"),
            Err(ValidationError::DynamicEvaluation("eval"))
        );
        assert_eq!(
            validate_for_remote("const f = new Function('a', 'return a');"),
            Err(ValidationError::DynamicEvaluation("new Function"))
        );
        assert!(validate_for_remote("setTimeout(\"alert(1)\", 5)").is_err());
    }

    #[test]
    fn css_expressions_are_rejected() {
        assert_eq!(
            validate_for_remote("p { width: Expression(document.body.clientWidth); }"),
            Err(ValidationError::StyleExpression)
        );
    }
}
