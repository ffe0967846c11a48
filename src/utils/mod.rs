pub mod text;
pub mod url_validator;

pub use text::{or_unknown, truncate_chars};
pub use url_validator::{UrlValidationError, parse_absolute_url, validate_url};
