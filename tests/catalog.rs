use iamcatalog::aws::{Arn, ArnOptions};
use iamcatalog::catalog::{self, Service};
use iamcatalog::iam::{IamAction, ResourceType};
use iamcatalog::services::{
    dynamodb, elasticloadbalancing, events, kms, lambda, logs, s3_object_lambda, secretsmanager, sns, sqs,
};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn resource_types() -> impl Iterator<Item = (&'static Service, &'static ResourceType)> {
    catalog::services().iter().flat_map(|service| {
        service.resource_types.iter().map(move |resource_type| (*service, *resource_type))
    })
}

fn check_action_values<A: IamAction + std::fmt::Debug>() {
    let variants = A::variants();
    assert_eq!(variants[0].as_str(), format!("{}:*", A::PREFIX));
    assert!(variants[0].definition().is_none());
    for action in &variants[1..] {
        let def = action.definition().expect("every named action has a definition");
        assert_eq!(action.as_str(), format!("{}:{}", A::PREFIX, def.name), "{:?}", action);
        assert_eq!(def.service, A::PREFIX);
    }
}

#[test]
fn action_values_follow_variant_names() {
    init();
    check_action_values::<dynamodb::Action>();
    check_action_values::<elasticloadbalancing::Action>();
    check_action_values::<events::Action>();
    check_action_values::<kms::Action>();
    check_action_values::<lambda::Action>();
    check_action_values::<logs::Action>();
    check_action_values::<s3_object_lambda::Action>();
    check_action_values::<secretsmanager::Action>();
    check_action_values::<sns::Action>();
    check_action_values::<sqs::Action>();
}

#[test]
fn action_names_are_unique_per_service() {
    for service in catalog::services() {
        let mut names: Vec<_> = service.actions.iter().map(|def| def.name.to_ascii_lowercase()).collect();
        names.sort();
        let count = names.len();
        names.dedup();
        assert_eq!(names.len(), count, "duplicate action in {}", service.prefix);
    }
}

#[test]
fn resource_references_stay_within_their_service() {
    for service in catalog::services() {
        for def in service.actions {
            for resource_type in def.resource_types {
                assert!(
                    service.resource_types.iter()
                        .any(|own| own.name == resource_type.name && own.arn == resource_type.arn),
                    "{}:{} refers to {} outside its service",
                    service.prefix,
                    def.name,
                    resource_type.name
                );
            }
        }
    }
}

#[test]
fn resource_keys_are_unique_per_service() {
    for service in catalog::services() {
        let mut keys: Vec<_> = service.resource_types.iter().map(|resource_type| resource_type.key()).collect();
        keys.sort();
        let count = keys.len();
        keys.dedup();
        assert_eq!(keys.len(), count, "ambiguous resource type key in {}", service.prefix);
    }
}

#[test]
fn defaults_render_only_wildcards() {
    init();
    for (service, resource_type) in resource_types() {
        let arn = resource_type.build(&ArnOptions::default());
        assert!(!arn.contains("${"), "{} left a placeholder", arn);
        let template = resource_type.template();
        let fields = template.fields();
        assert_eq!(arn.matches('*').count(), fields.len(), "{}", arn);
        assert!(arn.starts_with("arn:*:"), "{}", arn);
        assert!(arn.contains(&format!(":{}:", service.prefix)), "{}", arn);
    }
}

#[test]
fn rendering_is_idempotent() {
    let options = ArnOptions::new().region("us-east-1").account("123456789012");
    for (_, resource_type) in resource_types() {
        assert_eq!(resource_type.build(&options), resource_type.build(&options));
    }
}

#[test]
fn rendered_arns_parse_back() {
    init();
    let options = ArnOptions::new().partition("aws").region("us-east-1").account("123456789012");
    for (service, resource_type) in resource_types() {
        let rendered = resource_type.build(&options);
        let arn: Arn = rendered.parse().expect("rendered ARNs should parse");
        assert_eq!(arn.service(), service.prefix);
        assert_eq!(arn.partition(), "aws");
        assert_eq!(arn.to_string(), rendered);
    }
}

#[test]
fn identify_finds_the_source_resource_type() {
    init();
    for (service, resource_type) in resource_types() {
        let arn = resource_type.build(&ArnOptions::default());
        let found = catalog::identify(&arn).expect("rendered ARNs should identify");
        assert!(
            found.iter().any(|(owner, candidate)| owner.prefix == service.prefix && candidate.name == resource_type.name),
            "{} was not identified as {}",
            arn,
            resource_type.name
        );
    }
}

#[test]
fn lookup_by_key_and_name() {
    for (service, resource_type) in resource_types() {
        let by_key = service.resource_type(&resource_type.key()).expect("key should resolve");
        assert_eq!(by_key.name, resource_type.name);
        let by_name = service.resource_type(resource_type.name).expect("name should resolve");
        assert_eq!(by_name.arn, resource_type.arn);
    }
}

#[test]
fn actions_without_resources_apply_to_everything() {
    let def = catalog::action("sqs:ListQueues").expect("should exist");
    assert!(def.resource_types.is_empty());
    assert_eq!(def.arns(&ArnOptions::default()), vec!["*".to_string()]);

    let def = catalog::action("lambda:InvokeFunction").expect("should exist");
    let arns = def.arns(&ArnOptions::new().field("functionName", "resize"));
    assert!(arns.contains(&"arn:*:lambda:*:*:function:resize".to_string()));
}

#[test]
fn merged_defaults_reach_every_builder() {
    let defaults = ArnOptions::new().partition("aws-us-gov").account("123456789012");
    let options = ArnOptions::new().region("us-gov-west-1").merge(&defaults);
    let arn = catalog::build_arn("kms", "key", &options).expect("should build");
    assert_eq!(arn, "arn:aws-us-gov:kms:us-gov-west-1:123456789012:key/*");
}

#[test]
fn exported_document_round_trips() {
    let dumped = catalog::to_json().dump();
    let parsed = json::parse(&dumped).expect("should parse");
    assert_eq!(parsed.len(), catalog::services().len());
    for (document, service) in parsed.members().zip(catalog::services()) {
        assert_eq!(document["Name"], service.prefix);
        assert_eq!(document["Actions"].len(), service.actions.len());
        assert_eq!(document["Resources"].len(), service.resource_types.len());
    }
}
