//! Amazon SQS (`sqs`).

use crate::catalog::Service;
use crate::iam::IamAction;

resource_types! {
    QUEUE = "queue" => "arn:${Partition}:sqs:${Region}:${Account}:${QueueName}" ["aws:ResourceTag/${TagKey}"];
}

actions! {
    prefix = "sqs";
    docs = "https://docs.aws.amazon.com/AWSSimpleQueueService/latest/APIReference/";

    /// Grants permission to add a permission to a queue for a specific principal
    AddPermission => PermissionsManagement [QUEUE] [];
    /// Grants permission to cancel an in progress message move task
    CancelMessageMoveTask => Write [QUEUE] [];
    /// Grants permission to change the visibility timeout of a specified message in a queue to a new value
    ChangeMessageVisibility => Write [QUEUE] [];
    /// Grants permission to create a new queue, or returns the URL of an existing one
    CreateQueue => Write [QUEUE] ["aws:RequestTag/${TagKey}", "aws:TagKeys"];
    /// Grants permission to delete the specified message from the specified queue
    DeleteMessage => Write [QUEUE] [];
    /// Grants permission to delete the queue specified by the queue URL, regardless of whether the queue is empty
    DeleteQueue => Write [QUEUE] [];
    /// Grants permission to get attributes for the specified queue
    GetQueueAttributes => Read [QUEUE] [];
    /// Grants permission to return the URL of an existing queue
    GetQueueUrl => Read [QUEUE] [];
    /// Grants permission to return a list of your queues that have the RedrivePolicy queue attribute configured with a dead letter queue
    ListDeadLetterSourceQueues => Read [QUEUE] [];
    /// Grants permission to list the most recent message movement tasks (up to 10) under a specific source queue
    ListMessageMoveTasks => Read [QUEUE] [];
    /// Grants permission to list tags added to an SQS queue
    ListQueueTags => Read [QUEUE] [];
    /// Grants permission to return a list of your queues
    ListQueues => List [] [];
    /// Grants permission to delete the messages in a queue specified by the queue URL
    PurgeQueue => Write [QUEUE] [];
    /// Grants permission to retrieve one or more messages, with a maximum limit of 10 messages, from the specified queue
    ReceiveMessage => Read [QUEUE] [];
    /// Grants permission to revoke any permissions in the queue policy that matches the specified Label parameter
    RemovePermission => PermissionsManagement [QUEUE] [];
    /// Grants permission to deliver a message to the specified queue
    SendMessage => Write [QUEUE] [];
    /// Grants permission to set the value of one or more queue attributes
    SetQueueAttributes => Write [QUEUE] [];
    /// Grants permission to start a task to move messages from a dead letter queue to its source queue
    StartMessageMoveTask => Write [QUEUE] [];
    /// Grants permission to add tags to the specified SQS queue
    TagQueue => Tagging [QUEUE] ["aws:RequestTag/${TagKey}", "aws:TagKeys"];
    /// Grants permission to remove tags from the specified SQS queue
    UntagQueue => Tagging [QUEUE] ["aws:TagKeys"];
}

pub static SERVICE: Service = Service {
    prefix: <Action as IamAction>::PREFIX,
    name: "Amazon SQS",
    api_reference: API_REFERENCE,
    condition_keys: &["aws:RequestTag/${TagKey}", "aws:ResourceTag/${TagKey}", "aws:TagKeys"],
    resource_types: RESOURCE_TYPES,
    actions: ACTIONS,
};
