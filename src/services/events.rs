//! Amazon EventBridge (`events`).

use crate::catalog::Service;
use crate::iam::IamAction;

resource_types! {
    API_DESTINATION = "api-destination" => "arn:${Partition}:events:${Region}:${Account}:api-destination/${ApiDestinationName}";
    ARCHIVE = "archive" => "arn:${Partition}:events:${Region}:${Account}:archive/${ArchiveName}";
    CONNECTION = "connection" => "arn:${Partition}:events:${Region}:${Account}:connection/${ConnectionName}";
    /// Global endpoints span regions.
    ENDPOINT = "endpoint" => "arn:${Partition}:events::${Account}:endpoint/${EndpointName}";
    EVENT_BUS = "event-bus" => "arn:${Partition}:events:${Region}:${Account}:event-bus/${EventBusName}"
        ["aws:ResourceTag/${TagKey}"];
    /// Partner event sources are owned by the partner, not an account.
    EVENT_SOURCE = "event-source" => "arn:${Partition}:events:${Region}::event-source/${EventSourceName}";
    REPLAY = "replay" => "arn:${Partition}:events:${Region}:${Account}:replay/${ReplayName}";
    RULE_ON_DEFAULT_EVENT_BUS = "rule-on-default-event-bus" => "arn:${Partition}:events:${Region}:${Account}:rule/${RuleName}"
        ["aws:ResourceTag/${TagKey}"];
    RULE_ON_CUSTOM_EVENT_BUS = "rule-on-custom-event-bus" => "arn:${Partition}:events:${Region}:${Account}:rule/${EventBusName}/${RuleName}"
        ["aws:ResourceTag/${TagKey}", "events:creatorAccount"];
}

actions! {
    prefix = "events";
    docs = "https://docs.aws.amazon.com/eventbridge/latest/APIReference/";

    /// Grants permission to activate partner event sources
    ActivateEventSource => Write [EVENT_SOURCE] [];
    /// Grants permission to cancel a replay
    CancelReplay => Write [REPLAY] [];
    /// Grants permission to create a new api destination
    CreateApiDestination => Write [API_DESTINATION] [];
    /// Grants permission to create a new archive
    CreateArchive => Write [ARCHIVE, EVENT_BUS] [];
    /// Grants permission to create a new connection
    CreateConnection => Write [CONNECTION] [];
    /// Grants permission to create a global endpoint
    CreateEndpoint => Write [ENDPOINT] [];
    /// Grants permission to create event buses
    CreateEventBus => Write [EVENT_BUS] ["aws:RequestTag/${TagKey}", "aws:TagKeys"];
    /// Grants permission to create partner event sources
    CreatePartnerEventSource => Write [EVENT_SOURCE] [];
    /// Grants permission to deactivate event sources
    DeactivateEventSource => Write [EVENT_SOURCE] [];
    /// Grants permission to deauthorize a connection, deleting its stored authorization secrets
    DeauthorizeConnection => Write [CONNECTION] [];
    /// Grants permission to delete an api destination
    DeleteApiDestination => Write [API_DESTINATION] [];
    /// Grants permission to delete an archive
    DeleteArchive => Write [ARCHIVE] [];
    /// Grants permission to delete a connection
    DeleteConnection => Write [CONNECTION] [];
    /// Grants permission to delete a global endpoint
    DeleteEndpoint => Write [ENDPOINT] [];
    /// Grants permission to delete event buses
    DeleteEventBus => Write [EVENT_BUS] [];
    /// Grants permission to delete partner event sources
    DeletePartnerEventSource => Write [EVENT_SOURCE] [];
    /// Grants permission to delete rules
    DeleteRule => Write [RULE_ON_DEFAULT_EVENT_BUS, RULE_ON_CUSTOM_EVENT_BUS] ["events:creatorAccount"];
    /// Grants permission to retrieve details about an api destination
    DescribeApiDestination => Read [API_DESTINATION] [];
    /// Grants permission to retrieve details about an archive
    DescribeArchive => Read [ARCHIVE] [];
    /// Grants permission to retrieve details about a connection
    DescribeConnection => Read [CONNECTION] [];
    /// Grants permission to retrieve details about a global endpoint
    DescribeEndpoint => Read [ENDPOINT] [];
    /// Grants permission to retrieve details about event buses
    DescribeEventBus => Read [EVENT_BUS] [];
    /// Grants permission to retrieve details about event sources
    DescribeEventSource => Read [EVENT_SOURCE] [];
    /// Grants permission to retrieve details about partner event sources
    DescribePartnerEventSource => Read [EVENT_SOURCE] [];
    /// Grants permission to retrieve the details of a replay
    DescribeReplay => Read [REPLAY] [];
    /// Grants permission to retrieve details about rules
    DescribeRule => Read [RULE_ON_DEFAULT_EVENT_BUS, RULE_ON_CUSTOM_EVENT_BUS] ["events:creatorAccount"];
    /// Grants permission to disable rules
    DisableRule => Write [RULE_ON_DEFAULT_EVENT_BUS, RULE_ON_CUSTOM_EVENT_BUS] ["events:creatorAccount"];
    /// Grants permission to enable rules
    EnableRule => Write [RULE_ON_DEFAULT_EVENT_BUS, RULE_ON_CUSTOM_EVENT_BUS] ["events:creatorAccount"];
    /// Grants permission to invoke an api destination
    InvokeApiDestination @ "https://docs.aws.amazon.com/eventbridge/latest/userguide/iam-identity-based-access-control-eventbridge.html" => Write [API_DESTINATION] [];
    /// Grants permission to retrieve a list of api destinations
    ListApiDestinations => List [] [];
    /// Grants permission to retrieve a list of archives
    ListArchives => List [] [];
    /// Grants permission to retrieve a list of connections
    ListConnections => List [] [];
    /// Grants permission to retrieve a list of global endpoints
    ListEndpoints => List [] [];
    /// Grants permission to retrieve a list of the event buses in your account
    ListEventBuses => List [] [];
    /// Grants permission to retrieve a list of event sources shared with this account
    ListEventSources => List [] [];
    /// Grants permission to retrieve a list of AWS account IDs associated with an event source
    ListPartnerEventSourceAccounts => List [] [];
    /// Grants permission to retrieve a list of partner event sources
    ListPartnerEventSources => List [] [];
    /// Grants permission to retrieve a list of replays
    ListReplays => List [] [];
    /// Grants permission to retrieve the names of the rules that the given target is put to
    ListRuleNamesByTarget => List [] [];
    /// Grants permission to retrieve a list of the Amazon EventBridge rules in the account
    ListRules => List [] [];
    /// Grants permission to retrieve a list of tags associated with an Amazon EventBridge resource
    ListTagsForResource => Read [EVENT_BUS, RULE_ON_DEFAULT_EVENT_BUS, RULE_ON_CUSTOM_EVENT_BUS] [];
    /// Grants permission to retrieve a list of targets defined for a rule
    ListTargetsByRule => List [RULE_ON_DEFAULT_EVENT_BUS, RULE_ON_CUSTOM_EVENT_BUS] ["events:creatorAccount"];
    /// Grants permission to send custom events to Amazon EventBridge
    PutEvents => Write [EVENT_BUS] ["events:detail-type", "events:source", "events:eventBusInvocation"];
    /// Grants permission to send custom events to Amazon EventBridge as a partner
    PutPartnerEvents => Write [] [];
    /// Grants permission to use the PutPermission action to grants permission to another AWS account to put events to your default event bus
    PutPermission => PermissionsManagement [EVENT_BUS] [];
    /// Grants permission to create or update rules
    PutRule => Write [RULE_ON_DEFAULT_EVENT_BUS, RULE_ON_CUSTOM_EVENT_BUS] [
        "aws:RequestTag/${TagKey}",
        "aws:TagKeys",
        "events:detail.userIdentity.principalId",
        "events:detail-type",
        "events:source",
        "events:detail.service",
        "events:detail.eventTypeCode",
        "events:ManagedBy",
        "events:creatorAccount",
    ];
    /// Grants permission to add targets to a rule
    PutTargets => Write [RULE_ON_DEFAULT_EVENT_BUS, RULE_ON_CUSTOM_EVENT_BUS] ["events:TargetArn", "events:creatorAccount"];
    /// Grants permission to revoke the permission of another AWS account to put events to your default event bus
    RemovePermission => PermissionsManagement [EVENT_BUS] [];
    /// Grants permission to remove targets from a rule
    RemoveTargets => Write [RULE_ON_DEFAULT_EVENT_BUS, RULE_ON_CUSTOM_EVENT_BUS] ["events:creatorAccount"];
    /// Grants permission to retrieve the authorization secret of a connection
    RetrieveConnectionCredentials @ "https://docs.aws.amazon.com/eventbridge/latest/userguide/iam-identity-based-access-control-eventbridge.html" => Read [CONNECTION] [];
    /// Grants permission to start a replay of an archive
    StartReplay => Write [ARCHIVE, EVENT_BUS] [];
    /// Grants permission to add a tag to an Amazon EventBridge resource
    TagResource => Tagging [EVENT_BUS, RULE_ON_DEFAULT_EVENT_BUS, RULE_ON_CUSTOM_EVENT_BUS] ["aws:TagKeys", "aws:RequestTag/${TagKey}"];
    /// Grants permission to test whether an event pattern matches the provided event
    TestEventPattern => Read [] [];
    /// Grants permission to remove a tag from an Amazon EventBridge resource
    UntagResource => Tagging [EVENT_BUS, RULE_ON_DEFAULT_EVENT_BUS, RULE_ON_CUSTOM_EVENT_BUS] ["aws:TagKeys"];
    /// Grants permission to update an api destination
    UpdateApiDestination => Write [API_DESTINATION] [];
    /// Grants permission to update an archive
    UpdateArchive => Write [ARCHIVE] [];
    /// Grants permission to update a connection
    UpdateConnection => Write [CONNECTION] [];
    /// Grants permission to update a global endpoint
    UpdateEndpoint => Write [ENDPOINT] [];
    /// Grants permission to update an event bus
    UpdateEventBus => Write [EVENT_BUS] [];
}

pub static SERVICE: Service = Service {
    prefix: <Action as IamAction>::PREFIX,
    name: "Amazon EventBridge",
    api_reference: API_REFERENCE,
    condition_keys: &[
        "aws:RequestTag/${TagKey}",
        "aws:ResourceTag/${TagKey}",
        "aws:TagKeys",
        "events:ManagedBy",
        "events:TargetArn",
        "events:creatorAccount",
        "events:detail-type",
        "events:detail.eventTypeCode",
        "events:detail.service",
        "events:detail.userIdentity.principalId",
        "events:eventBusInvocation",
        "events:source",
    ],
    resource_types: RESOURCE_TYPES,
    actions: ACTIONS,
};

#[cfg(test)]
mod test {
    use super::{ENDPOINT, EVENT_SOURCE, SERVICE};
    use crate::aws::ArnOptions;

    #[test]
    fn rules_on_custom_buses_are_more_specific() {
        let found: Vec<_> = SERVICE
            .identify("arn:aws:events:us-east-1:123456789012:rule/orders/nightly")
            .iter()
            .map(|resource_type| resource_type.name)
            .collect();
        assert_eq!(found, ["rule-on-custom-event-bus", "rule-on-default-event-bus"]);
    }

    #[test]
    fn empty_region_and_account_portions() {
        let options = ArnOptions::new().region("us-east-1").account("123456789012");
        assert_eq!(ENDPOINT.build(&options), "arn:*:events::123456789012:endpoint/*");
        assert_eq!(EVENT_SOURCE.build(&options), "arn:*:events:us-east-1::event-source/*");
    }
}
