// Resume persistence: CRUD handlers and structural validation.

pub mod handlers;
pub mod validation;
