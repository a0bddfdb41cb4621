use thiserror::Error;

use crate::aws::ArnParseError;
use crate::iam::ActionParseError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown service prefix: {0}")]
    UnknownService(String),
    #[error("unknown action {action} in service {service}")]
    UnknownAction { service: String, action: String },
    #[error("unknown resource type {resource_type} in service {service}")]
    UnknownResourceType { service: String, resource_type: String },
    #[error("invalid action: {0}")]
    InvalidAction(#[from] ActionParseError),
    #[error("invalid ARN: {0}")]
    InvalidArn(#[from] ArnParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
