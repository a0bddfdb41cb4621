//! Amazon SNS (`sns`).
//!
//! Platform applications, endpoints and SMS settings have no resource type
//! of their own; those actions only support `*`.

use crate::catalog::Service;
use crate::iam::IamAction;

resource_types! {
    TOPIC = "topic" => "arn:${Partition}:sns:${Region}:${Account}:${TopicName}" ["aws:ResourceTag/${TagKey}"];
}

actions! {
    prefix = "sns";
    docs = "https://docs.aws.amazon.com/sns/latest/api/";

    /// Grants permission to add a statement to a topic's access control policy
    AddPermission => PermissionsManagement [TOPIC] [];
    /// Grants permission to accept a phone number and indicate whether the phone holder has opted out of receiving SMS messages from your account
    CheckIfPhoneNumberIsOptedOut => Read [] [];
    /// Grants permission to verify an endpoint owner's intent to receive messages by validating the token sent to the endpoint by an earlier Subscribe action
    ConfirmSubscription => Write [TOPIC] [];
    /// Grants permission to create a platform application object for one of the supported push notification services
    CreatePlatformApplication => Write [] [];
    /// Grants permission to create an endpoint for a device and mobile app on one of the supported push notification services
    CreatePlatformEndpoint => Write [] [];
    /// Grants permission to add a destination phone number to an AWS account in the SMS sandbox
    CreateSMSSandboxPhoneNumber => Write [] [];
    /// Grants permission to create a topic to which notifications can be published
    CreateTopic => Write [TOPIC] ["aws:RequestTag/${TagKey}", "aws:TagKeys"];
    /// Grants permission to delete the endpoint for a device and mobile app from Amazon SNS
    DeleteEndpoint => Write [] [];
    /// Grants permission to delete a platform application object for one of the supported push notification services
    DeletePlatformApplication => Write [] [];
    /// Grants permission to delete an AWS account's verified or pending phone number from the SMS sandbox
    DeleteSMSSandboxPhoneNumber => Write [] [];
    /// Grants permission to delete a topic and all its subscriptions
    DeleteTopic => Write [TOPIC] [];
    /// Grants permission to retrieve the specified inline DataProtectionPolicy document that is stored in the specified Amazon SNS topic
    GetDataProtectionPolicy => Read [TOPIC] [];
    /// Grants permission to retrieve the endpoint attributes for a device on one of the supported push notification services
    GetEndpointAttributes => Read [] [];
    /// Grants permission to retrieve the attributes of the platform application object for the supported push notification services
    GetPlatformApplicationAttributes => Read [] [];
    /// Grants permission to return the settings for sending SMS messages from your account
    GetSMSAttributes => Read [] [];
    /// Grants permission to retrieve the sandbox status for the calling account in the target region
    GetSMSSandboxAccountStatus => Read [] [];
    /// Grants permission to return all of the properties of a subscription
    GetSubscriptionAttributes => Read [] [];
    /// Grants permission to return all of the properties of a topic
    GetTopicAttributes => Read [TOPIC] [];
    /// Grants permission to list the endpoints and endpoint attributes for devices in a supported push notification service
    ListEndpointsByPlatformApplication => List [] [];
    /// Grants permission to list all origination numbers, and their metadata
    ListOriginationNumbers => List [] [];
    /// Grants permission to return a list of phone numbers that are opted out
    ListPhoneNumbersOptedOut => Read [] [];
    /// Grants permission to list the platform application objects for the supported push notification services
    ListPlatformApplications => List [] [];
    /// Grants permission to list the calling account's current pending and verified destination phone numbers in the SMS sandbox
    ListSMSSandboxPhoneNumbers => List [] [];
    /// Grants permission to return a list of the requester's subscriptions
    ListSubscriptions => List [] [];
    /// Grants permission to return a list of the subscriptions to a specific topic
    ListSubscriptionsByTopic => List [TOPIC] [];
    /// Grants permission to list all tags added to the specified Amazon SNS topic
    ListTagsForResource => Read [TOPIC] [];
    /// Grants permission to return a list of the requester's topics
    ListTopics => List [] [];
    /// Grants permission to opt in a phone number that is currently opted out
    OptInPhoneNumber => Write [] [];
    /// Grants permission to send a message to all of a topic's subscribed endpoints
    Publish => Write [TOPIC] [];
    /// Grants permission to create or update an inline DataProtectionPolicy document that is stored in the specified Amazon SNS topic
    PutDataProtectionPolicy => Write [TOPIC] [];
    /// Grants permission to remove a statement from a topic's access control policy
    RemovePermission => PermissionsManagement [TOPIC] [];
    /// Grants permission to set the attributes for an endpoint for a device on one of the supported push notification services
    SetEndpointAttributes => Write [] [];
    /// Grants permission to set the attributes of the platform application object for the supported push notification services
    SetPlatformApplicationAttributes => Write [] [];
    /// Grants permission to set the default settings for sending SMS messages and receiving daily SMS usage reports
    SetSMSAttributes => Write [] [];
    /// Grants permission to allow a subscription owner to set an attribute of the topic to a new value
    SetSubscriptionAttributes => Write [] [];
    /// Grants permission to allow a topic owner to set an attribute of the topic to a new value
    SetTopicAttributes => PermissionsManagement [TOPIC] [];
    /// Grants permission to prepare to subscribe an endpoint by sending the endpoint a confirmation message
    Subscribe => Write [TOPIC] ["sns:Endpoint", "sns:Protocol"];
    /// Grants permission to add tags to the specified Amazon SNS topic
    TagResource => Tagging [TOPIC] ["aws:RequestTag/${TagKey}", "aws:TagKeys"];
    /// Grants permission to delete a subscription
    Unsubscribe => Write [] [];
    /// Grants permission to remove tags from the specified Amazon SNS topic
    UntagResource => Tagging [TOPIC] ["aws:TagKeys"];
    /// Grants permission to verify a destination phone number with a one-time password (OTP) for the calling AWS account
    VerifySMSSandboxPhoneNumber => Write [] [];
}

pub static SERVICE: Service = Service {
    prefix: <Action as IamAction>::PREFIX,
    name: "Amazon SNS",
    api_reference: API_REFERENCE,
    condition_keys: &[
        "aws:RequestTag/${TagKey}",
        "aws:ResourceTag/${TagKey}",
        "aws:TagKeys",
        "sns:Endpoint",
        "sns:Protocol",
    ],
    resource_types: RESOURCE_TYPES,
    actions: ACTIONS,
};
