//! Pure text transforms applied to model output.

mod json;
mod reasoning;

pub use json::{normalize_and_validate, JsonCheck, JsonExpectation};
pub use reasoning::split_reasoning;
