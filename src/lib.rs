//! Static IAM metadata for a set of AWS services: typed action enums,
//! per-action access levels and condition keys, and ARN builders that fill
//! any field left unset with `*`.
//!
//! ```
//! use iamcatalog::aws::ArnOptions;
//! use iamcatalog::services::lambda;
//!
//! let arn = lambda::FUNCTION.build(&ArnOptions::new().field("functionName", "resize"));
//! assert_eq!(arn, "arn:*:lambda:*:*:function:resize");
//! assert_eq!(lambda::Action::InvokeFunction.as_str(), "lambda:InvokeFunction");
//! ```

#[macro_use]
mod macros;

pub mod aws;
pub mod catalog;
pub mod error;
pub mod iam;
pub mod services;

pub use error::{Error, Result};
