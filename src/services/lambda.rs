//! AWS Lambda (`lambda`).
//!
//! See <https://docs.aws.amazon.com/service-authorization/latest/reference/list_awslambda.html>.

use crate::catalog::Service;
use crate::iam::IamAction;

resource_types! {
    CODE_SIGNING_CONFIG = "code signing config"
        => "arn:${Partition}:lambda:${Region}:${Account}:code-signing-config:${CodeSigningConfigId}"
        ["aws:ResourceTag/${TagKey}"];
    EVENT_SOURCE_MAPPING = "eventSourceMapping"
        => "arn:${Partition}:lambda:${Region}:${Account}:event-source-mapping:${UUID}"
        ["aws:ResourceTag/${TagKey}"];
    FUNCTION = "function"
        => "arn:${Partition}:lambda:${Region}:${Account}:function:${FunctionName}"
        ["aws:ResourceTag/${TagKey}"];
    FUNCTION_ALIAS = "function alias"
        => "arn:${Partition}:lambda:${Region}:${Account}:function:${FunctionName}:${Alias}";
    FUNCTION_VERSION = "function version"
        => "arn:${Partition}:lambda:${Region}:${Account}:function:${FunctionName}:${Version}";
    LAYER = "layer"
        => "arn:${Partition}:lambda:${Region}:${Account}:layer:${LayerName}";
    LAYER_VERSION = "layerVersion"
        => "arn:${Partition}:lambda:${Region}:${Account}:layer:${LayerName}:${LayerVersion}";
}

actions! {
    prefix = "lambda";
    docs = "https://docs.aws.amazon.com/lambda/latest/api/";

    /// Grants permission to add permissions to the resource-based policy of a version of an AWS Lambda layer
    AddLayerVersionPermission => PermissionsManagement [LAYER_VERSION] [];
    /// Grants permission to give an AWS service or another account permission to use an AWS Lambda function
    AddPermission => PermissionsManagement [FUNCTION, FUNCTION_ALIAS, FUNCTION_VERSION] ["lambda:Principal", "lambda:FunctionUrlAuthType"];
    /// Grants permission to create an alias for a Lambda function version
    CreateAlias => Write [FUNCTION] [];
    /// Grants permission to create an AWS Lambda code signing config
    CreateCodeSigningConfig => Write [CODE_SIGNING_CONFIG] ["aws:RequestTag/${TagKey}", "aws:TagKeys"];
    /// Grants permission to create a mapping between an event source and an AWS Lambda function
    CreateEventSourceMapping => Write [EVENT_SOURCE_MAPPING] ["lambda:FunctionArn", "aws:RequestTag/${TagKey}", "aws:TagKeys"];
    /// Grants permission to create an AWS Lambda function
    CreateFunction => Write [FUNCTION] [
        "lambda:Layer",
        "lambda:VpcIds",
        "lambda:SubnetIds",
        "lambda:SecurityGroupIds",
        "lambda:CodeSigningConfigArn",
        "aws:RequestTag/${TagKey}",
        "aws:TagKeys",
    ];
    /// Grants permission to create a function url configuration for a Lambda function
    CreateFunctionUrlConfig => Write [FUNCTION, FUNCTION_ALIAS] ["lambda:FunctionUrlAuthType", "lambda:FunctionArn"];
    /// Grants permission to delete an AWS Lambda function alias
    DeleteAlias => Write [FUNCTION] [];
    /// Grants permission to delete an AWS Lambda code signing config
    DeleteCodeSigningConfig => Write [CODE_SIGNING_CONFIG] [];
    /// Grants permission to delete an AWS Lambda event source mapping
    DeleteEventSourceMapping => Write [EVENT_SOURCE_MAPPING] ["lambda:FunctionArn"];
    /// Grants permission to delete an AWS Lambda function
    DeleteFunction => Write [FUNCTION, FUNCTION_VERSION] [];
    /// Grants permission to detach a code signing config from an AWS Lambda function
    DeleteFunctionCodeSigningConfig => Write [FUNCTION] [];
    /// Grants permission to remove a concurrent execution limit from an AWS Lambda function
    DeleteFunctionConcurrency => Write [FUNCTION] [];
    /// Grants permission to delete the configuration for asynchronous invocation for an AWS Lambda function, version, or alias
    DeleteFunctionEventInvokeConfig => Write [FUNCTION, FUNCTION_ALIAS, FUNCTION_VERSION] [];
    /// Grants permission to delete function url configuration for a Lambda function
    DeleteFunctionUrlConfig => Write [FUNCTION, FUNCTION_ALIAS] ["lambda:FunctionUrlAuthType", "lambda:FunctionArn"];
    /// Grants permission to delete a version of an AWS Lambda layer
    DeleteLayerVersion => Write [LAYER_VERSION] [];
    /// Grants permission to delete the provisioned concurrency configuration for an AWS Lambda function
    DeleteProvisionedConcurrencyConfig => Write [FUNCTION_ALIAS, FUNCTION_VERSION] [];
    /// Grants permission to disable replication for a Lambda@Edge function
    DisableReplication @ "https://docs.aws.amazon.com/lambda/latest/dg/lambda-edge-permissions.html" => Write [FUNCTION] [];
    /// Grants permission to enable replication for a Lambda@Edge function
    EnableReplication @ "https://docs.aws.amazon.com/lambda/latest/dg/lambda-edge-permissions.html" => Write [FUNCTION] [];
    /// Grants permission to view details about an account's limits and usage in an AWS Region
    GetAccountSettings => Read [] [];
    /// Grants permission to view details about an AWS Lambda function alias
    GetAlias => Read [FUNCTION] [];
    /// Grants permission to view details about an AWS Lambda code signing config
    GetCodeSigningConfig => Read [CODE_SIGNING_CONFIG] [];
    /// Grants permission to view details about an AWS Lambda event source mapping
    GetEventSourceMapping => Read [EVENT_SOURCE_MAPPING] ["lambda:FunctionArn"];
    /// Grants permission to view details about an AWS Lambda function
    GetFunction => Read [FUNCTION, FUNCTION_ALIAS, FUNCTION_VERSION] [];
    /// Grants permission to view the code signing config arn attached to an AWS Lambda function
    GetFunctionCodeSigningConfig => Read [FUNCTION] [];
    /// Grants permission to view details about the reserved concurrency configuration for a function
    GetFunctionConcurrency => Read [FUNCTION] [];
    /// Grants permission to view details about the version-specific settings of an AWS Lambda function or version
    GetFunctionConfiguration => Read [FUNCTION, FUNCTION_ALIAS, FUNCTION_VERSION] [];
    /// Grants permission to view the configuration for asynchronous invocation for a function, version, or alias
    GetFunctionEventInvokeConfig => Read [FUNCTION, FUNCTION_ALIAS, FUNCTION_VERSION] [];
    /// Grants permission to view the recursion configuration of an AWS Lambda function
    GetFunctionRecursionConfig => Read [FUNCTION] [];
    /// Grants permission to read function url configuration for a Lambda function
    GetFunctionUrlConfig => Read [FUNCTION, FUNCTION_ALIAS] ["lambda:FunctionUrlAuthType", "lambda:FunctionArn"];
    /// Grants permission to view details about a version of an AWS Lambda layer
    GetLayerVersion => Read [LAYER_VERSION] [];
    /// Grants permission to view the resource-based policy for a version of an AWS Lambda layer
    GetLayerVersionPolicy => Read [LAYER_VERSION] [];
    /// Grants permission to view the resource-based policy for an AWS Lambda function, version, or alias
    GetPolicy => Read [FUNCTION, FUNCTION_ALIAS, FUNCTION_VERSION] [];
    /// Grants permission to view the provisioned concurrency configuration for an AWS Lambda function's alias or version
    GetProvisionedConcurrencyConfig => Read [FUNCTION_ALIAS, FUNCTION_VERSION] [];
    /// Grants permission to view the runtime management configuration of an AWS Lambda function
    GetRuntimeManagementConfig => Read [FUNCTION_VERSION] [];
    /// Grants permission to invoke a function asynchronously (Deprecated)
    InvokeAsync => Write [FUNCTION, FUNCTION_ALIAS, FUNCTION_VERSION] [];
    /// Grants permission to invoke an AWS Lambda function
    InvokeFunction @ "https://docs.aws.amazon.com/lambda/latest/api/API_Invoke.html" => Write [FUNCTION, FUNCTION_ALIAS, FUNCTION_VERSION] [];
    /// Grants permission to invoke an AWS Lambda function through url
    InvokeFunctionUrl @ "https://docs.aws.amazon.com/lambda/latest/dg/urls-auth.html" => Write [FUNCTION, FUNCTION_ALIAS] ["lambda:FunctionUrlAuthType", "lambda:FunctionArn"];
    /// Grants permission to retrieve a list of aliases for an AWS Lambda function
    ListAliases => List [FUNCTION] [];
    /// Grants permission to retrieve a list of AWS Lambda code signing configs
    ListCodeSigningConfigs => List [] [];
    /// Grants permission to retrieve a list of AWS Lambda event source mappings
    ListEventSourceMappings => List [] [];
    /// Grants permission to retrieve a list of configurations for asynchronous invocation for a function
    ListFunctionEventInvokeConfigs => List [FUNCTION] [];
    /// Grants permission to read function url configurations for a function
    ListFunctionUrlConfigs => List [FUNCTION] ["lambda:FunctionUrlAuthType"];
    /// Grants permission to retrieve a list of AWS Lambda functions, with the version-specific configuration of each function
    ListFunctions => List [] [];
    /// Grants permission to retrieve a list of AWS Lambda functions by the code signing config assigned
    ListFunctionsByCodeSigningConfig => List [CODE_SIGNING_CONFIG] [];
    /// Grants permission to retrieve a list of versions of an AWS Lambda layer
    ListLayerVersions => List [] [];
    /// Grants permission to retrieve a list of AWS Lambda layers, with details about the latest version of each layer
    ListLayers => List [] [];
    /// Grants permission to retrieve a list of provisioned concurrency configurations for an AWS Lambda function
    ListProvisionedConcurrencyConfigs => List [FUNCTION] [];
    /// Grants permission to retrieve a list of tags for an AWS Lambda function, event source mapping or code signing configuration resource
    ListTags => Read [CODE_SIGNING_CONFIG, EVENT_SOURCE_MAPPING, FUNCTION] [];
    /// Grants permission to retrieve a list of versions for an AWS Lambda function
    ListVersionsByFunction => List [FUNCTION] [];
    /// Grants permission to create an AWS Lambda layer
    PublishLayerVersion => Write [LAYER] [];
    /// Grants permission to create an AWS Lambda function version
    PublishVersion => Write [FUNCTION] [];
    /// Grants permission to attach a code signing config to an AWS Lambda function
    PutFunctionCodeSigningConfig => Write [FUNCTION] ["lambda:CodeSigningConfigArn"];
    /// Grants permission to configure reserved concurrency for an AWS Lambda function
    PutFunctionConcurrency => Write [FUNCTION] [];
    /// Grants permission to configures options for asynchronous invocation on an AWS Lambda function, version, or alias
    PutFunctionEventInvokeConfig => Write [FUNCTION, FUNCTION_ALIAS, FUNCTION_VERSION] [];
    /// Grants permission to update the recursion configuration of an AWS Lambda function
    PutFunctionRecursionConfig => Write [FUNCTION] [];
    /// Grants permission to configure provisioned concurrency for an AWS Lambda function's alias or version
    PutProvisionedConcurrencyConfig => Write [FUNCTION_ALIAS, FUNCTION_VERSION] [];
    /// Grants permission to update the runtime management configuration of an AWS Lambda function
    PutRuntimeManagementConfig => Write [FUNCTION_VERSION] [];
    /// Grants permission to remove a statement from the permissions policy for a version of an AWS Lambda layer
    RemoveLayerVersionPermission => PermissionsManagement [LAYER_VERSION] [];
    /// Grants permission to revoke function-use permission from an AWS service or another account
    RemovePermission => PermissionsManagement [FUNCTION, FUNCTION_ALIAS, FUNCTION_VERSION] ["lambda:Principal", "lambda:FunctionUrlAuthType"];
    /// Grants permission to add tags to an AWS Lambda function, event source mapping or code signing configuration resource
    TagResource => Tagging [CODE_SIGNING_CONFIG, EVENT_SOURCE_MAPPING, FUNCTION] ["aws:RequestTag/${TagKey}", "aws:TagKeys"];
    /// Grants permission to remove tags from an AWS Lambda function, event source mapping or code signing configuration resource
    UntagResource => Tagging [CODE_SIGNING_CONFIG, EVENT_SOURCE_MAPPING, FUNCTION] ["aws:TagKeys"];
    /// Grants permission to update the configuration of an AWS Lambda function's alias
    UpdateAlias => Write [FUNCTION] [];
    /// Grants permission to update an AWS Lambda code signing config
    UpdateCodeSigningConfig => Write [CODE_SIGNING_CONFIG] [];
    /// Grants permission to update the configuration of an AWS Lambda event source mapping
    UpdateEventSourceMapping => Write [EVENT_SOURCE_MAPPING] ["lambda:FunctionArn"];
    /// Grants permission to update the code of an AWS Lambda function
    UpdateFunctionCode => Write [FUNCTION] [];
    /// Grants permission to modify the version-specific settings of an AWS Lambda function
    UpdateFunctionConfiguration => Write [FUNCTION] ["lambda:Layer", "lambda:VpcIds", "lambda:SubnetIds", "lambda:SecurityGroupIds"];
    /// Grants permission to modify the configuration for asynchronous invocation for an AWS Lambda function, version, or alias
    UpdateFunctionEventInvokeConfig => Write [FUNCTION, FUNCTION_ALIAS, FUNCTION_VERSION] [];
    /// Grants permission to update a function url configuration for a Lambda function
    UpdateFunctionUrlConfig => Write [FUNCTION, FUNCTION_ALIAS] ["lambda:FunctionUrlAuthType", "lambda:FunctionArn"];
}

pub static SERVICE: Service = Service {
    prefix: <Action as IamAction>::PREFIX,
    name: "AWS Lambda",
    api_reference: API_REFERENCE,
    condition_keys: &[
        "aws:RequestTag/${TagKey}",
        "aws:ResourceTag/${TagKey}",
        "aws:TagKeys",
        "lambda:CodeSigningConfigArn",
        "lambda:EventSourceToken",
        "lambda:FunctionArn",
        "lambda:FunctionUrlAuthType",
        "lambda:Layer",
        "lambda:Principal",
        "lambda:SecurityGroupIds",
        "lambda:SourceFunctionArn",
        "lambda:SubnetIds",
        "lambda:VpcIds",
    ],
    resource_types: RESOURCE_TYPES,
    actions: ACTIONS,
};

#[cfg(test)]
mod test {
    use super::{Action, FUNCTION, FUNCTION_ALIAS, SERVICE};
    use crate::aws::ArnOptions;
    use crate::iam::{AccessLevel, IamAction};

    #[test]
    fn function_arn_scenarios() {
        assert_eq!(FUNCTION.build(&ArnOptions::default()), "arn:*:lambda:*:*:function:*");

        let options = ArnOptions::new()
            .region("us-east-1")
            .account("123456789012")
            .field("functionName", "myFn");
        assert_eq!(FUNCTION.build(&options), "arn:*:lambda:us-east-1:123456789012:function:myFn");

        let options = ArnOptions::new().partition("aws-cn");
        assert_eq!(FUNCTION.build(&options), "arn:aws-cn:lambda:*:*:function:*");

        let options = ArnOptions::new().field("functionName", "");
        assert_eq!(FUNCTION.build(&options), "arn:*:lambda:*:*:function:*");
    }

    #[test]
    fn alias_uses_colon_separator() {
        let options = ArnOptions::new().field("functionName", "myFn").field("alias", "live");
        assert_eq!(FUNCTION_ALIAS.build(&options), "arn:*:lambda:*:*:function:myFn:live");
    }

    #[test]
    fn code_signing_config_by_key_and_name() {
        let by_key = SERVICE.resource_type("codeSigningConfig").expect("should exist");
        let by_name = SERVICE.resource_type("code signing config").expect("should exist");
        assert_eq!(by_key.arn, by_name.arn);
        assert_eq!(by_key.build(&ArnOptions::default()), "arn:*:lambda:*:*:code-signing-config:*");
    }

    #[test]
    fn action_values() {
        assert_eq!(Action::All.as_str(), "lambda:*");
        assert_eq!(Action::InvokeFunction.as_str(), "lambda:InvokeFunction");
        assert_eq!(Action::InvokeFunction.to_string(), "lambda:InvokeFunction");
        assert_eq!("lambda:invokefunction".parse::<Action>(), Ok(Action::InvokeFunction));
        assert!("lambda:Invoke".parse::<Action>().is_err());
    }

    #[test]
    fn action_definitions() {
        let def = Action::InvokeFunction.definition().expect("should have a definition");
        assert_eq!(def.name, "InvokeFunction");
        assert_eq!(def.access_level, AccessLevel::Write);
        assert_eq!(def.docs, "https://docs.aws.amazon.com/lambda/latest/api/API_Invoke.html");

        let def = Action::GetAlias.definition().expect("should have a definition");
        assert_eq!(def.docs, "https://docs.aws.amazon.com/lambda/latest/api/API_GetAlias.html");
        assert!(Action::All.definition().is_none());
    }

    #[test]
    fn variants_line_up_with_definitions() {
        for action in Action::variants().iter().copied().filter(|action| *action != Action::All) {
            let def = action.definition().expect("every named action has a definition");
            assert_eq!(action.as_str(), format!("{}:{}", def.service, def.name));
        }
    }
}
