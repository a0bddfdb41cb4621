use thiserror::Error;

use crate::aws::{glob_matches, ArnOptions, ArnTemplate, WILDCARD};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionParseError {
    #[error("expected \"service:action\"")]
    InvalidFormat,
}

/// A `service:action` string, as it appears in a policy's `Action` list.
/// Either half may contain wildcards, so it doubles as a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionName {
    service: String,
    action: String,
}

impl ActionName {
    pub fn new(service: impl Into<String>, action: impl Into<String>) -> Self {
        ActionName { service: service.into(), action: action.into() }
    }

    /// The pattern a bare `*` stands for.
    pub fn everything() -> Self {
        Self::new("*", "*")
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    /// Whether this name, read as a pattern, covers `prefix:action`.
    /// IAM compares action names without regard to case.
    pub fn covers(&self, prefix: &str, action: &str) -> bool {
        glob_matches(&self.service, prefix, true) && glob_matches(&self.action, action, true)
    }
}

impl std::fmt::Display for ActionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.service, self.action)
    }
}

impl std::str::FromStr for ActionName {
    type Err = ActionParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "*" => Ok(Self::everything()),
            _ => value.split_once(':')
                .map(|(service, action)| Self::new(service, action))
                .ok_or(ActionParseError::InvalidFormat),
        }
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum AccessLevel {
    List,
    Read,
    Write,
    PermissionsManagement,
    Tagging,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::List => "List",
            Self::Read => "Read",
            Self::Write => "Write",
            Self::PermissionsManagement => "Permissions management",
            Self::Tagging => "Tagging",
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resource type of a service, with the ARN template AWS documents for it.
#[derive(Debug)]
pub struct ResourceType {
    /// The name as AWS documents it. Not always a valid identifier, e.g.
    /// `code signing config` or `loadbalancer/app/`.
    pub name: &'static str,
    pub arn: &'static str,
    pub condition_keys: &'static [&'static str],
}

impl ResourceType {
    /// The lower camel case identifier of this resource type:
    /// `code signing config` is `codeSigningConfig`.
    pub fn key(&self) -> String {
        resource_key(self.name)
    }

    pub fn template(&self) -> ArnTemplate<'static> {
        ArnTemplate::parse(self.arn)
    }

    /// Renders an ARN for this resource type. Missing fields become `*`.
    pub fn build(&self, options: &ArnOptions) -> String {
        self.template().render(options)
    }

    pub fn matches(&self, arn: &str) -> bool {
        self.template().matches(arn)
    }

    /// Whether `name` refers to this resource type, either by key or by the
    /// documented name.
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name || self.key() == resource_key(name)
    }
}

/// Canonical key for a documented resource type name: split on anything
/// that is not alphanumeric, then join in lower camel case.
pub fn resource_key(name: &str) -> String {
    use convert_case::{Case, Casing};

    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_case(Case::Camel)
}

/// Metadata for one IAM action.
#[derive(Debug)]
pub struct ActionDef {
    pub service: &'static str,
    pub name: &'static str,
    pub access_level: AccessLevel,
    pub docs: &'static str,
    /// Empty when the action only supports `"Resource": "*"`.
    pub resource_types: &'static [&'static ResourceType],
    pub condition_keys: &'static [&'static str],
}

impl ActionDef {
    /// The policy string, e.g. `lambda:InvokeFunction`.
    pub fn action_name(&self) -> ActionName {
        ActionName::new(self.service, self.name)
    }

    /// One ARN per resource type this action applies to, or `*` when it
    /// applies to none.
    pub fn arns(&self, options: &ArnOptions) -> Vec<String> {
        if self.resource_types.is_empty() {
            return vec![WILDCARD.to_string()];
        }
        self.resource_types.iter().map(|resource_type| resource_type.build(options)).collect()
    }
}

/// Implemented by each service's `Action` enum.
pub trait IamAction: Copy + 'static {
    const PREFIX: &'static str;

    /// The full policy string, `prefix:Name` or `prefix:*`.
    fn as_str(self) -> &'static str;

    /// Metadata for the action; `None` for the `All` wildcard.
    fn definition(self) -> Option<&'static ActionDef>;

    fn variants() -> &'static [Self];
}

#[cfg(test)]
mod test {
    use super::{resource_key, ActionName, ActionParseError};

    #[test]
    fn parse_action_name() {
        let name: ActionName = "lambda:InvokeFunction".parse().expect("should parse");
        assert_eq!(name.service(), "lambda");
        assert_eq!(name.action(), "InvokeFunction");
        assert_eq!(name, ActionName::new("lambda", "InvokeFunction"));
    }

    #[test]
    fn parse_action_name_requires_separator() {
        assert_eq!("InvokeFunction".parse::<ActionName>(), Err(ActionParseError::InvalidFormat));
    }

    #[test]
    fn bare_wildcard_is_everything() {
        let name: ActionName = "*".parse().expect("should parse");
        assert_eq!(name, ActionName::everything());
        assert_eq!(name.to_string(), "*:*");
        assert!(name.covers("kms", "Decrypt"));
    }

    #[test]
    fn covers_ignores_case() {
        let pattern: ActionName = "Lambda:get*".parse().expect("should parse");
        assert!(pattern.covers("lambda", "GetFunction"));
        assert!(! pattern.covers("lambda", "ListFunctions"));
        assert!(! pattern.covers("sqs", "GetQueueUrl"));
    }

    #[test]
    fn resource_keys() {
        assert_eq!(resource_key("code signing config"), "codeSigningConfig");
        assert_eq!(resource_key("loadbalancer/app/"), "loadbalancerApp");
        assert_eq!(resource_key("global-table"), "globalTable");
        assert_eq!(resource_key("function"), "function");
        assert_eq!(resource_key("eventSourceMapping"), "eventSourceMapping");
    }
}
