//! Per-service action enumerations and resource type tables.
//!
//! Each module exposes an `Action` enum (with an `All` wildcard member), an
//! `ACTIONS` metadata table, one constant per resource type plus
//! `RESOURCE_TYPES`, and the `SERVICE` record tying them together.

pub mod dynamodb;
pub mod elasticloadbalancing;
pub mod events;
pub mod kms;
pub mod lambda;
pub mod logs;
pub mod s3_object_lambda;
pub mod secretsmanager;
pub mod sns;
pub mod sqs;

use crate::catalog::Service;

pub static ALL: &[&Service] = &[
    &dynamodb::SERVICE,
    &elasticloadbalancing::SERVICE,
    &events::SERVICE,
    &kms::SERVICE,
    &lambda::SERVICE,
    &logs::SERVICE,
    &s3_object_lambda::SERVICE,
    &secretsmanager::SERVICE,
    &sns::SERVICE,
    &sqs::SERVICE,
];
