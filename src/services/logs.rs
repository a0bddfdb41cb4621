//! Amazon CloudWatch Logs (`logs`).
//!
//! Log group and log stream ARNs use `:` inside the resource portion.

use crate::catalog::Service;
use crate::iam::IamAction;

resource_types! {
    ANOMALY_DETECTOR = "anomaly-detector" => "arn:${Partition}:logs:${Region}:${Account}:anomaly-detector:${DetectorId}"
        ["aws:ResourceTag/${TagKey}"];
    DELIVERY = "delivery" => "arn:${Partition}:logs:${Region}:${Account}:delivery:${DeliveryId}"
        ["aws:ResourceTag/${TagKey}"];
    DELIVERY_DESTINATION = "delivery-destination" => "arn:${Partition}:logs:${Region}:${Account}:delivery-destination:${DeliveryDestinationName}"
        ["aws:ResourceTag/${TagKey}"];
    DELIVERY_SOURCE = "delivery-source" => "arn:${Partition}:logs:${Region}:${Account}:delivery-source:${DeliverySourceName}"
        ["aws:ResourceTag/${TagKey}"];
    DESTINATION = "destination" => "arn:${Partition}:logs:${Region}:${Account}:destination:${DestinationName}"
        ["aws:ResourceTag/${TagKey}"];
    LOG_GROUP = "log-group" => "arn:${Partition}:logs:${Region}:${Account}:log-group:${LogGroupName}"
        ["aws:ResourceTag/${TagKey}"];
    LOG_STREAM = "log-stream" => "arn:${Partition}:logs:${Region}:${Account}:log-group:${LogGroupName}:log-stream:${LogStreamName}";
}

actions! {
    prefix = "logs";
    docs = "https://docs.aws.amazon.com/AmazonCloudWatchLogs/latest/APIReference/";

    /// Grants permission to associate the specified AWS Key Management Service (AWS KMS) customer master key (CMK) with the specified log group
    AssociateKmsKey => Write [LOG_GROUP] [];
    /// Grants permission to cancel an export task if it is in PENDING or RUNNING state
    CancelExportTask => Write [] [];
    /// Grants permission to create a delivery
    CreateDelivery => Write [DELIVERY, DELIVERY_DESTINATION, DELIVERY_SOURCE] ["aws:RequestTag/${TagKey}", "aws:TagKeys"];
    /// Grants permission to create an ExportTask which allows you to efficiently export data from a Log Group to your Amazon S3 bucket
    CreateExportTask => Write [LOG_GROUP] [];
    /// Grants permission to create a log anomaly detector
    CreateLogAnomalyDetector => Write [ANOMALY_DETECTOR] ["aws:RequestTag/${TagKey}", "aws:TagKeys"];
    /// Grants permission to create a new log group with the specified name
    CreateLogGroup => Write [LOG_GROUP] ["aws:RequestTag/${TagKey}", "aws:TagKeys"];
    /// Grants permission to create a new log stream with the specified name
    CreateLogStream => Write [LOG_GROUP] [];
    /// Grants permission to delete the data protection policy from the specified log group
    DeleteDataProtectionPolicy => Write [LOG_GROUP] [];
    /// Grants permission to delete a delivery
    DeleteDelivery => Write [DELIVERY] [];
    /// Grants permission to delete a delivery destination
    DeleteDeliveryDestination => Write [DELIVERY_DESTINATION] [];
    /// Grants permission to delete a delivery destination policy
    DeleteDeliveryDestinationPolicy => Write [DELIVERY_DESTINATION] [];
    /// Grants permission to delete a delivery source
    DeleteDeliverySource => Write [DELIVERY_SOURCE] [];
    /// Grants permission to delete the destination with the specified name
    DeleteDestination => Write [DESTINATION] [];
    /// Grants permission to delete a log anomaly detector
    DeleteLogAnomalyDetector => Write [ANOMALY_DETECTOR] [];
    /// Grants permission to delete the log group with the specified name
    DeleteLogGroup => Write [LOG_GROUP] [];
    /// Grants permission to delete a log stream
    DeleteLogStream => Write [LOG_STREAM] [];
    /// Grants permission to delete a metric filter associated with the specified log group
    DeleteMetricFilter => Write [LOG_GROUP] [];
    /// Grants permission to delete a saved CloudWatch Logs Insights query definition
    DeleteQueryDefinition => Write [] [];
    /// Grants permission to delete a resource policy from this account
    DeleteResourcePolicy => Write [] [];
    /// Grants permission to delete the retention policy of the specified log group
    DeleteRetentionPolicy => Write [LOG_GROUP] [];
    /// Grants permission to delete a subscription filter associated with the specified log group
    DeleteSubscriptionFilter => Write [LOG_GROUP] [];
    /// Grants permission to return all the deliveries that have been created in the account
    DescribeDeliveries => List [] [];
    /// Grants permission to return all the delivery destinations that have been created in the account
    DescribeDeliveryDestinations => List [] [];
    /// Grants permission to return all the delivery sources that have been created in the account
    DescribeDeliverySources => List [] [];
    /// Grants permission to return all the destinations that are associated with the AWS account making the request
    DescribeDestinations => List [] [];
    /// Grants permission to return all the export tasks that are associated with the AWS account making the request
    DescribeExportTasks => List [] [];
    /// Grants permission to return all the log groups that are associated with the AWS account making the request
    DescribeLogGroups => List [] [];
    /// Grants permission to return all the log streams that are associated with the specified log group
    DescribeLogStreams => List [LOG_GROUP] [];
    /// Grants permission to return all the metrics filters associated with the specified log group
    DescribeMetricFilters => List [] [];
    /// Grants permission to return a list of CloudWatch Logs Insights queries that are scheduled, executing, or have been executed recently in this account
    DescribeQueries => List [] [];
    /// Grants permission to return a paginated list of your saved CloudWatch Logs Insights query definitions
    DescribeQueryDefinitions => List [] [];
    /// Grants permission to return all the resource policies in this account
    DescribeResourcePolicies => List [] [];
    /// Grants permission to return all the subscription filters associated with the specified log group
    DescribeSubscriptionFilters => List [LOG_GROUP] [];
    /// Grants permission to disassociate the associated AWS Key Management Service (AWS KMS) customer master key (CMK) from the specified log group
    DisassociateKmsKey => Write [LOG_GROUP] [];
    /// Grants permission to retrieve log events, optionally filtered by a filter pattern from the specified log group
    FilterLogEvents => Read [LOG_GROUP] [];
    /// Grants permission to retrieve a data protection policy attached to a log group
    GetDataProtectionPolicy => Read [LOG_GROUP] [];
    /// Grants permission to get complete information about one delivery
    GetDelivery => Read [DELIVERY] [];
    /// Grants permission to get complete information about one delivery destination
    GetDeliveryDestination => Read [DELIVERY_DESTINATION] [];
    /// Grants permission to get the delivery destination policy assigned to the delivery destination
    GetDeliveryDestinationPolicy => Read [DELIVERY_DESTINATION] [];
    /// Grants permission to get complete information about one delivery source
    GetDeliverySource => Read [DELIVERY_SOURCE] [];
    /// Grants permission to retrieve information about the log anomaly detector
    GetLogAnomalyDetector => Read [ANOMALY_DETECTOR] [];
    /// Grants permission to retrieve log events from the specified log stream
    GetLogEvents => Read [LOG_STREAM] [];
    /// Grants permission to return a list of the fields that are included in log events in the specified log group, along with the percentage of log events that contain each field
    GetLogGroupFields => Read [LOG_GROUP] [];
    /// Grants permission to retrieve all the fields and values of a single log event
    GetLogRecord => Read [] [];
    /// Grants permission to return the results from the specified query
    GetQueryResults => Read [] [];
    /// Grants permission to return a list of anomalies that log anomaly detectors have found
    ListAnomalies => List [ANOMALY_DETECTOR] [];
    /// Grants permission to retrieve a list of the log anomaly detectors in the account
    ListLogAnomalyDetectors => List [] [];
    /// Grants permission to list the tags for the specified resource
    ListTagsForResource => List [ANOMALY_DETECTOR, DELIVERY, DELIVERY_DESTINATION, DELIVERY_SOURCE, DESTINATION, LOG_GROUP] [];
    /// Grants permission to create or update a data protection policy for a log group
    PutDataProtectionPolicy => Write [LOG_GROUP] [];
    /// Grants permission to create or update a logical delivery destination
    PutDeliveryDestination => Write [DELIVERY_DESTINATION] ["aws:RequestTag/${TagKey}", "aws:TagKeys"];
    /// Grants permission to create and assign an IAM policy that grants permissions to CloudWatch Logs to deliver logs cross-account to a specified destination in this account
    PutDeliveryDestinationPolicy => Write [DELIVERY_DESTINATION] [];
    /// Grants permission to create or update a logical delivery source
    PutDeliverySource => Write [DELIVERY_SOURCE] ["aws:RequestTag/${TagKey}", "aws:TagKeys"];
    /// Grants permission to create or update a Destination
    PutDestination => Write [DESTINATION] ["aws:RequestTag/${TagKey}", "aws:TagKeys"];
    /// Grants permission to create or update an access policy associated with an existing Destination
    PutDestinationPolicy => Write [DESTINATION] [];
    /// Grants permission to upload a batch of log events to the specified log stream
    PutLogEvents => Write [LOG_STREAM] [];
    /// Grants permission to create or update a metric filter and associates it with the specified log group
    PutMetricFilter => Write [LOG_GROUP] [];
    /// Grants permission to create or update a query definition
    PutQueryDefinition => Write [] [];
    /// Grants permission to create or update a resource policy allowing other AWS services to put log events to this account
    PutResourcePolicy => Write [] [];
    /// Grants permission to set the retention of the specified log group
    PutRetentionPolicy => Write [LOG_GROUP] [];
    /// Grants permission to create or update a subscription filter and associates it with the specified log group
    PutSubscriptionFilter => Write [DESTINATION, LOG_GROUP] [];
    /// Grants permission to start a live tail session for one or more log groups
    StartLiveTail => Read [LOG_GROUP] [];
    /// Grants permission to schedule a query of a log group using CloudWatch Logs Insights
    StartQuery => Read [LOG_GROUP] [];
    /// Grants permission to stop a CloudWatch Logs Insights query that is in progress
    StopQuery => Read [] [];
    /// Grants permission to add or update the specified tags for the specified resource
    TagResource => Tagging [ANOMALY_DETECTOR, DELIVERY, DELIVERY_DESTINATION, DELIVERY_SOURCE, DESTINATION, LOG_GROUP] ["aws:RequestTag/${TagKey}", "aws:TagKeys"];
    /// Grants permission to test the filter pattern of a metric filter against a sample of log event messages
    TestMetricFilter => Read [] [];
    /// Grants permission to remove the specified tags from the specified resource
    UntagResource => Tagging [ANOMALY_DETECTOR, DELIVERY, DELIVERY_DESTINATION, DELIVERY_SOURCE, DESTINATION, LOG_GROUP] ["aws:TagKeys"];
    /// Grants permission to mark an anomaly or pattern as a false positive or as not anomalous
    UpdateAnomaly => Write [ANOMALY_DETECTOR] [];
    /// Grants permission to update the configuration of a delivery
    UpdateDeliveryConfiguration => Write [DELIVERY] [];
    /// Grants permission to update an existing log anomaly detector
    UpdateLogAnomalyDetector => Write [ANOMALY_DETECTOR] [];
}

pub static SERVICE: Service = Service {
    prefix: <Action as IamAction>::PREFIX,
    name: "Amazon CloudWatch Logs",
    api_reference: API_REFERENCE,
    condition_keys: &["aws:RequestTag/${TagKey}", "aws:ResourceTag/${TagKey}", "aws:TagKeys"],
    resource_types: RESOURCE_TYPES,
    actions: ACTIONS,
};

#[cfg(test)]
mod test {
    use super::{LOG_GROUP, LOG_STREAM, SERVICE};
    use crate::aws::ArnOptions;

    #[test]
    fn log_stream_arn() {
        let options = ArnOptions::new()
            .region("us-west-2")
            .field("logGroupName", "/aws/lambda/resize")
            .field("logStreamName", "2024/01/01/[$LATEST]abc");
        assert_eq!(
            LOG_STREAM.build(&options),
            "arn:*:logs:us-west-2:*:log-group:/aws/lambda/resize:log-stream:2024/01/01/[$LATEST]abc"
        );
    }

    #[test]
    fn log_group_does_not_swallow_streams() {
        let arn = "arn:aws:logs:us-west-2:123456789012:log-group:/aws/lambda/resize:log-stream:abc";
        assert!(LOG_STREAM.matches(arn));
        assert!(!LOG_GROUP.matches(arn));
        let found: Vec<_> = SERVICE.identify(arn).iter().map(|resource_type| resource_type.name).collect();
        assert_eq!(found, ["log-stream"]);
    }
}
