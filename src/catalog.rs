//! String-keyed access to every service in the catalog.

mod reference;

use std::cmp::Reverse;

use crate::aws::{Arn, ArnOptions};
use crate::error::{Error, Result};
use crate::iam::{ActionDef, ActionName, ResourceType};
use crate::services;

/// The IAM metadata of one AWS service.
#[derive(Debug)]
pub struct Service {
    /// The service prefix used in action names and ARNs, e.g. `lambda`.
    pub prefix: &'static str,
    pub name: &'static str,
    pub api_reference: &'static str,
    pub condition_keys: &'static [&'static str],
    pub resource_types: &'static [&'static ResourceType],
    pub actions: &'static [ActionDef],
}

impl Service {
    /// Finds a resource type by key (`codeSigningConfig`) or by its
    /// documented name (`code signing config`).
    pub fn resource_type(&self, name: &str) -> Result<&'static ResourceType> {
        self.resource_types.iter().copied().find(|resource_type| resource_type.is_named(name))
            .ok_or_else(|| {
                log::debug!("No resource type {:?} in {}", name, self.prefix);
                Error::UnknownResourceType {
                    service: self.prefix.to_string(),
                    resource_type: name.to_string(),
                }
            })
    }

    pub fn action(&self, name: &str) -> Result<&'static ActionDef> {
        self.actions.iter().find(|action| action.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                log::debug!("No action {:?} in {}", name, self.prefix);
                Error::UnknownAction {
                    service: self.prefix.to_string(),
                    action: name.to_string(),
                }
            })
    }

    pub fn build_arn(&self, resource_type: &str, options: &ArnOptions) -> Result<String> {
        Ok(self.resource_type(resource_type)?.build(options))
    }

    /// Actions of this service that `pattern` covers, ignoring case.
    pub fn matching_actions<'a>(&'a self, pattern: &'a ActionName) -> impl Iterator<Item = &'static ActionDef> + 'a {
        self.actions.iter().filter(move |action| pattern.covers(self.prefix, action.name))
    }

    /// Resource types whose template fits `arn`, most specific first.
    pub fn identify(&self, arn: &str) -> Vec<&'static ResourceType> {
        let mut matches: Vec<_> = self.resource_types.iter().copied()
            .filter(|resource_type| resource_type.matches(arn))
            .collect();
        matches.sort_by_key(|resource_type| Reverse(resource_type.template().specificity()));
        matches
    }
}

/// Every service, ordered by prefix.
pub fn services() -> &'static [&'static Service] {
    services::ALL
}

/// Finds a service by prefix, ignoring ASCII case.
pub fn service(prefix: &str) -> Result<&'static Service> {
    services::ALL.iter().copied().find(|service| service.prefix.eq_ignore_ascii_case(prefix))
        .ok_or_else(|| {
            log::debug!("No service with prefix {:?}", prefix);
            Error::UnknownService(prefix.to_string())
        })
}

/// Looks up an action by its policy string, e.g. `lambda:InvokeFunction`.
pub fn action(name: &str) -> Result<&'static ActionDef> {
    let name: ActionName = name.parse()?;
    service(name.service())?.action(name.action())
}

/// Expands an action pattern such as `lambda:Get*` or `*` into the actions
/// it covers, in service then action order.
pub fn expand(pattern: &str) -> Result<Vec<&'static ActionDef>> {
    let pattern: ActionName = pattern.parse()?;
    let actions: Vec<_> = services::ALL.iter()
        .flat_map(|service| service.matching_actions(&pattern))
        .collect();
    log::debug!("{} expands to {} actions", pattern, actions.len());
    Ok(actions)
}

/// Finds a resource type of `service_prefix` by key or documented name.
pub fn resource_type(service_prefix: &str, name: &str) -> Result<&'static ResourceType> {
    service(service_prefix)?.resource_type(name)
}

/// Renders an ARN for `service_prefix`'s `resource_type`. Fails only when
/// either name is unknown.
pub fn build_arn(service_prefix: &str, resource_type: &str, options: &ArnOptions) -> Result<String> {
    service(service_prefix)?.build_arn(resource_type, options)
}

/// The resource types `arn` could belong to, most specific first. The
/// service token of an ARN is case-sensitive.
pub fn identify(arn: &str) -> Result<Vec<(&'static Service, &'static ResourceType)>> {
    let parsed: Arn = arn.parse()?;
    let service = service(parsed.service())?;
    if service.prefix != parsed.service() {
        log::debug!("ARN service {:?} is not spelled {}", parsed.service(), service.prefix);
        return Err(Error::UnknownService(parsed.service().to_string()));
    }
    Ok(service.identify(parsed.raw()).into_iter().map(|resource_type| (service, resource_type)).collect())
}

/// Every service as an AWS service reference style document.
pub fn to_json() -> json::JsonValue {
    json::JsonValue::Array(services::ALL.iter().map(|service| service.to_json()).collect())
}

#[cfg(test)]
mod test {
    use super::{action, build_arn, expand, identify, resource_type, service, services};
    use crate::aws::ArnOptions;
    use crate::Error;

    #[test]
    fn services_are_ordered_by_prefix() {
        let prefixes: Vec<_> = services().iter().map(|service| service.prefix).collect();
        let mut sorted = prefixes.clone();
        sorted.sort();
        assert_eq!(prefixes, sorted);
    }

    #[test]
    fn service_lookup_ignores_case() {
        assert_eq!(service("SQS").expect("should exist").prefix, "sqs");
        assert_eq!(service("s3").err(), Some(Error::UnknownService("s3".to_string())));
    }

    #[test]
    fn action_lookup() {
        let def = action("sqs:SendMessage").expect("should exist");
        assert_eq!(def.service, "sqs");
        assert_eq!(def.name, "SendMessage");
        assert_eq!(def.action_name().to_string(), "sqs:SendMessage");
        assert!(matches!(action("sqs:Send"), Err(Error::UnknownAction { .. })));
        assert!(matches!(action("SendMessage"), Err(Error::InvalidAction(_))));
    }

    #[test]
    fn expand_wildcards() {
        let names: Vec<_> = expand("sqs:*Permission").expect("should expand")
            .into_iter().map(|def| def.name).collect();
        assert_eq!(names, vec!["AddPermission", "RemovePermission"]);

        let all = expand("*").expect("should expand");
        let total: usize = services().iter().map(|service| service.actions.len()).sum();
        assert_eq!(all.len(), total);

        assert!(expand("nosuchservice:*").expect("should expand").is_empty());
    }

    #[test]
    fn expand_service_wildcards() {
        let prefixes: Vec<_> = expand("s*:ListTagsForResource").expect("should expand")
            .into_iter().map(|def| def.service).collect();
        assert_eq!(prefixes, vec!["sns"]);
    }

    #[test]
    fn build_arn_by_name() {
        let options = ArnOptions::new().region("eu-west-1").field("queueName", "jobs");
        assert_eq!(build_arn("sqs", "queue", &options), Ok("arn:*:sqs:eu-west-1:*:jobs".to_string()));
        assert!(matches!(build_arn("sqs", "topic", &options), Err(Error::UnknownResourceType { .. })));
    }

    #[test]
    fn resource_type_by_service_and_name() {
        let queue = resource_type("SQS", "queue").expect("should exist");
        assert_eq!(queue.arn, "arn:${Partition}:sqs:${Region}:${Account}:${QueueName}");
        let alias = resource_type("lambda", "function alias").expect("should exist");
        assert_eq!(alias.key(), "functionAlias");
        assert!(matches!(resource_type("sqs", "topic"), Err(Error::UnknownResourceType { .. })));
        assert!(matches!(resource_type("s3", "bucket"), Err(Error::UnknownService(_))));
    }

    #[test]
    fn identify_prefers_specific_templates() {
        let matches = identify("arn:aws:lambda:us-east-1:123456789012:function:myFn:live")
            .expect("should parse");
        let names: Vec<_> = matches.iter().map(|(_, resource_type)| resource_type.name).collect();
        assert_eq!(names, vec!["function alias", "function version"]);

        let matches = identify("arn:aws:dynamodb:us-east-1:123456789012:table/Books/index/ByAuthor")
            .expect("should parse");
        assert_eq!(matches[0].1.name, "index");
    }

    #[test]
    fn identify_rejects_bad_input() {
        assert!(matches!(identify("lambda:function"), Err(Error::InvalidArn(_))));
        assert!(matches!(identify("arn:aws:s3:::bucket"), Err(Error::UnknownService(_))));
    }

    #[test]
    fn identify_requires_exact_service_token() {
        assert_eq!(
            identify("arn:aws:Lambda:us-east-1:1:function:x").err(),
            Some(Error::UnknownService("Lambda".to_string())),
        );
        assert_eq!(identify("arn:aws:lambda:us-east-1:1:function:x").map(|found| found.len()), Ok(1));
    }
}
