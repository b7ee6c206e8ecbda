pub mod relative_time;
pub mod validator;

pub use relative_time::{format_absolute, format_relative};
pub use validator::{validate_link_fields, Field, FieldErrorKind, ValidationErrors};
