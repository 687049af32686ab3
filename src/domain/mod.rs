// Domain layer - Core business logic

pub mod edit;
pub mod errors;
pub mod model;
pub mod selection;
pub mod time;
pub mod validation;
