pub mod explainer;
pub mod locale;
