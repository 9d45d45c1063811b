pub mod validate;

pub use validate::{validate_course, validate_group_name, validate_person};
