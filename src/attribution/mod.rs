pub mod domain;
pub mod policies;
pub mod rules;
pub mod services;
