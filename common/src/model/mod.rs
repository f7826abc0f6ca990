pub mod analysis;
pub mod category;
pub mod explanation;
pub mod locale;
