//! Document request domain: models, validation, prompt assembly, handlers.

pub mod handlers;
pub mod models;
pub mod prompt;
pub mod validation;
