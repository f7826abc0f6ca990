pub mod classifier;
pub mod config;
pub mod error;
pub mod explain;
pub mod i18n;
pub mod model;
pub mod preview;
pub mod requests;
pub mod session;
pub mod validate;
