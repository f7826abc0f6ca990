use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplainError {
    #[error("snippet is empty")]
    EmptySnippet,
}

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("failed to assemble preview document: {0}")]
    Format(#[from] std::fmt::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("snippet uses dynamic code evaluation ({0})")]
    DynamicEvaluation(&'static str),

    #[error("snippet uses an executable style expression")]
    StyleExpression,
}
