mod arn;
mod glob;
mod options;
mod template;

pub use arn::{Arn, ArnParseError};
pub use glob::{glob_matches, try_regex_from_glob};
pub use options::{field_key, ArnOptions, WILDCARD};
pub use template::{ArnTemplate, Segment};
