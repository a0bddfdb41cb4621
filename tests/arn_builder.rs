use iamcatalog::aws::{field_key, ArnOptions, Segment};
use iamcatalog::catalog;
use iamcatalog::iam::ResourceType;
use iamcatalog::services::lambda;

use proptest::prelude::*;
use proptest::sample::{select, Index};

fn all_resource_types() -> Vec<&'static ResourceType> {
    catalog::services()
        .iter()
        .flat_map(|service| service.resource_types.iter().copied())
        .collect()
}

// What a template renders to when only `key` is set.
fn expected(resource_type: &ResourceType, key: &str, value: &str) -> String {
    resource_type.template().segments().iter().map(|segment| match *segment {
        Segment::Literal(text) => text.to_string(),
        Segment::Field(name) if field_key(name) == key => value.to_string(),
        Segment::Field(_) => "*".to_string(),
    }).collect()
}

#[test]
fn lambda_function_scenarios() {
    let _ = env_logger::builder().is_test(true).try_init();
    assert_eq!(lambda::FUNCTION.build(&ArnOptions::new()), "arn:*:lambda:*:*:function:*");
    let options = ArnOptions::new()
        .region("us-east-1")
        .account("123456789012")
        .field("functionName", "myFn");
    assert_eq!(lambda::FUNCTION.build(&options), "arn:*:lambda:us-east-1:123456789012:function:myFn");
    assert_eq!(lambda::FUNCTION.build(&ArnOptions::new().partition("aws-cn")), "arn:aws-cn:lambda:*:*:function:*");
    assert_eq!(lambda::FUNCTION.build(&ArnOptions::new().field("functionName", "")), "arn:*:lambda:*:*:function:*");
}

proptest! {
    #[test]
    fn one_field_set(
        resource_type in select(all_resource_types()),
        index in any::<Index>(),
        value in "[A-Za-z0-9_.-]{1,24}",
    ) {
        let fields = resource_type.template().fields();
        let key = index.get(&fields);
        let arn = resource_type.build(&ArnOptions::new().field(key, value.as_str()));
        prop_assert_eq!(&arn, &expected(resource_type, key, &value));
        prop_assert!(resource_type.matches(&arn));
    }

    #[test]
    fn empty_values_render_as_wildcards(
        resource_type in select(all_resource_types()),
        index in any::<Index>(),
    ) {
        let fields = resource_type.template().fields();
        let key = index.get(&fields);
        let arn = resource_type.build(&ArnOptions::new().field(key, ""));
        prop_assert_eq!(arn, resource_type.build(&ArnOptions::default()));
    }

    #[test]
    fn unknown_fields_are_ignored(
        resource_type in select(all_resource_types()),
        value in "[a-z]{1,12}",
    ) {
        let options = ArnOptions::new().field("notARealField", value);
        prop_assert_eq!(resource_type.build(&options), resource_type.build(&ArnOptions::default()));
    }

    #[test]
    fn literals_survive_any_values(
        region in "[a-z0-9-]{0,16}",
        account in "[0-9]{0,12}",
        name in "[A-Za-z0-9_/+=,.@-]{0,32}",
    ) {
        let arn = lambda::FUNCTION.build(
            &ArnOptions::new().region(region).account(account).field("FunctionName", name),
        );
        prop_assert!(arn.starts_with("arn:"));
        prop_assert!(arn.contains(":lambda:"));
        prop_assert!(arn.contains(":function:"));
    }
}
