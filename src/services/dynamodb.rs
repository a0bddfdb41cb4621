//! Amazon DynamoDB (`dynamodb`), including DynamoDB Streams.

use crate::catalog::Service;
use crate::iam::IamAction;

const PERMISSIONS_DOCS: &str = "https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/api-permissions-reference.html";

resource_types! {
    BACKUP = "backup" => "arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}/backup/${BackupName}";
    EXPORT = "export" => "arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}/export/${ExportName}";
    // Global tables are not regional.
    GLOBAL_TABLE = "global-table" => "arn:${Partition}:dynamodb::${Account}:global-table/${GlobalTableName}";
    IMPORT = "import" => "arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}/import/${ImportName}";
    INDEX = "index" => "arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}/index/${IndexName}";
    STREAM = "stream" => "arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}/stream/${StreamLabel}";
    TABLE = "table" => "arn:${Partition}:dynamodb:${Region}:${Account}:table/${TableName}" ["aws:ResourceTag/${TagKey}"];
}

actions! {
    prefix = "dynamodb";
    docs = "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/";

    /// Grants permission to return the attributes of one or more items from one or more tables
    BatchGetItem => Read [TABLE] ["dynamodb:Attributes", "dynamodb:LeadingKeys", "dynamodb:ReturnConsumedCapacity", "dynamodb:Select"];
    /// Grants permission to put or delete multiple items in one or more tables
    BatchWriteItem => Write [TABLE] ["dynamodb:Attributes", "dynamodb:LeadingKeys", "dynamodb:ReturnConsumedCapacity"];
    /// Grants permission to check the existence of a set of attributes for an item
    ConditionCheckItem @ PERMISSIONS_DOCS => Read [TABLE] ["dynamodb:Attributes", "dynamodb:EnclosingOperation", "dynamodb:LeadingKeys", "dynamodb:ReturnConsumedCapacity", "dynamodb:ReturnValues"];
    /// Grants permission to create a backup for an existing table
    CreateBackup => Write [TABLE] [];
    /// Grants permission to create a global table from an existing table
    CreateGlobalTable => Write [GLOBAL_TABLE, TABLE] [];
    /// Grants permission to create a table
    CreateTable => Write [TABLE] ["aws:RequestTag/${TagKey}", "aws:TagKeys"];
    /// Grants permission to add a new replica table
    CreateTableReplica @ PERMISSIONS_DOCS => Write [TABLE] [];
    /// Grants permission to delete an existing backup of a table
    DeleteBackup => Write [BACKUP] [];
    /// Grants permission to delete a single item in a table by primary key
    DeleteItem => Write [TABLE] ["dynamodb:Attributes", "dynamodb:EnclosingOperation", "dynamodb:LeadingKeys", "dynamodb:ReturnConsumedCapacity", "dynamodb:ReturnValues"];
    /// Grants permission to delete the resource-based policy attached to a table or stream
    DeleteResourcePolicy => Write [STREAM, TABLE] [];
    /// Grants permission to delete a table and all of its items
    DeleteTable => Write [TABLE] [];
    /// Grants permission to delete a replica table and all of its items
    DeleteTableReplica @ PERMISSIONS_DOCS => Write [TABLE] [];
    /// Grants permission to describe an existing backup of a table
    DescribeBackup => Read [BACKUP] [];
    /// Grants permission to check the status of the backup restore settings on the specified table
    DescribeContinuousBackups => Read [TABLE] [];
    /// Grants permission to describe the contributor insights status and related details for a given table or global secondary index
    DescribeContributorInsights => Read [INDEX, TABLE] [];
    /// Grants permission to return the regional endpoint information
    DescribeEndpoints => Read [] [];
    /// Grants permission to describe an existing export of a table
    DescribeExport => Read [EXPORT] [];
    /// Grants permission to return information about the specified global table
    DescribeGlobalTable => Read [GLOBAL_TABLE] [];
    /// Grants permission to return settings information about the specified global table
    DescribeGlobalTableSettings => Read [GLOBAL_TABLE] [];
    /// Grants permission to describe an existing import
    DescribeImport => Read [IMPORT] [];
    /// Grants permission to grant permission to describe the status of Kinesis streaming and related details for a given table
    DescribeKinesisStreamingDestination => Read [TABLE] [];
    /// Grants permission to return the current provisioned-capacity limits for your AWS account in a region
    DescribeLimits => Read [] [];
    /// Grants permission to return information about a stream, including the current status of the stream
    DescribeStream @ "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_streams_DescribeStream.html" => Read [STREAM] [];
    /// Grants permission to return information about the table
    DescribeTable => Read [TABLE] [];
    /// Grants permission to describe the auto scaling settings across all replicas of the global table
    DescribeTableReplicaAutoScaling => Read [TABLE] [];
    /// Grants permission to give a description of the Time to Live (TTL) status on the specified table
    DescribeTimeToLive => Read [TABLE] [];
    /// Grants permission to stop replication from the DynamoDB table to the Kinesis data stream
    DisableKinesisStreamingDestination => Write [TABLE] [];
    /// Grants permission to start table data replication to the specified Kinesis data stream
    EnableKinesisStreamingDestination => Write [TABLE] [];
    /// Grants permission to initiate an export of a DynamoDB table to S3
    ExportTableToPointInTime => Write [TABLE] [];
    /// Grants permission to return a set of attributes for the item with the given primary key
    GetItem => Read [TABLE] ["dynamodb:Attributes", "dynamodb:EnclosingOperation", "dynamodb:LeadingKeys", "dynamodb:ReturnConsumedCapacity", "dynamodb:Select"];
    /// Grants permission to retrieve the stream records from a given shard
    GetRecords @ "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_streams_GetRecords.html" => Read [STREAM] [];
    /// Grants permission to view the resource-based policy attached to a table or stream
    GetResourcePolicy => Read [STREAM, TABLE] [];
    /// Grants permission to return a shard iterator
    GetShardIterator @ "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_streams_GetShardIterator.html" => Read [STREAM] [];
    /// Grants permission to initiate an import from S3 to a DynamoDB table
    ImportTable => Write [TABLE] [];
    /// Grants permission to list backups associated with the account and endpoint
    ListBackups => List [] [];
    /// Grants permission to list the ContributorInsightsSummary for all tables and global secondary indexes associated with the current account and endpoint
    ListContributorInsights => List [] [];
    /// Grants permission to list exports associated with the account and endpoint
    ListExports => List [] [];
    /// Grants permission to list all global tables that have a replica in the specified region
    ListGlobalTables => List [] [];
    /// Grants permission to list imports associated with the account and endpoint
    ListImports => List [] [];
    /// Grants permission to return an array of stream ARNs associated with the current account and endpoint
    ListStreams @ "https://docs.aws.amazon.com/amazondynamodb/latest/APIReference/API_streams_ListStreams.html" => List [] [];
    /// Grants permission to return an array of table names associated with the current account and endpoint
    ListTables => List [] [];
    /// Grants permission to list all tags on an Amazon DynamoDB resource
    ListTagsOfResource => Read [TABLE] [];
    /// Grants permission to delete a single item in a table by primary key via PartiQL
    PartiQLDelete @ PERMISSIONS_DOCS => Write [TABLE] ["dynamodb:EnclosingOperation", "dynamodb:LeadingKeys", "dynamodb:ReturnValues"];
    /// Grants permission to create a new item via PartiQL
    PartiQLInsert @ PERMISSIONS_DOCS => Write [TABLE] ["dynamodb:EnclosingOperation", "dynamodb:LeadingKeys", "dynamodb:ReturnValues"];
    /// Grants permission to read a set of attributes for items from a table or index via PartiQL
    PartiQLSelect @ PERMISSIONS_DOCS => Read [INDEX, TABLE] ["dynamodb:Attributes", "dynamodb:EnclosingOperation", "dynamodb:FullTableScan", "dynamodb:LeadingKeys", "dynamodb:Select"];
    /// Grants permission to edit an existing item's attributes via PartiQL
    PartiQLUpdate @ PERMISSIONS_DOCS => Write [TABLE] ["dynamodb:Attributes", "dynamodb:EnclosingOperation", "dynamodb:LeadingKeys", "dynamodb:ReturnValues"];
    /// Grants permission to create a new item, or replace an old item with a new item
    PutItem => Write [TABLE] ["dynamodb:Attributes", "dynamodb:EnclosingOperation", "dynamodb:LeadingKeys", "dynamodb:ReturnConsumedCapacity", "dynamodb:ReturnValues"];
    /// Grants permission to attach a resource-based policy to a table or stream
    PutResourcePolicy => Write [STREAM, TABLE] [];
    /// Grants permission to use the primary key of a table or a secondary index to directly access items from that table or index
    Query => Read [INDEX, TABLE] ["dynamodb:Attributes", "dynamodb:LeadingKeys", "dynamodb:ReturnConsumedCapacity", "dynamodb:Select"];
    /// Grants permission to create a new table from an existing backup
    RestoreTableFromBackup => Write [BACKUP, TABLE] [];
    /// Grants permission to restore a table to a point in time
    RestoreTableToPointInTime => Write [TABLE] [];
    /// Grants permission to return one or more items and item attributes by accessing every item in a table or a secondary index
    Scan => Read [INDEX, TABLE] ["dynamodb:Attributes", "dynamodb:ReturnConsumedCapacity", "dynamodb:Select"];
    /// Grants permission to associate a set of tags with an Amazon DynamoDB resource
    TagResource => Tagging [TABLE] ["aws:RequestTag/${TagKey}", "aws:TagKeys"];
    /// Grants permission to remove the association of tags from an Amazon DynamoDB resource
    UntagResource => Tagging [TABLE] ["aws:TagKeys"];
    /// Grants permission to enable or disable continuous backups
    UpdateContinuousBackups => Write [TABLE] [];
    /// Grants permission to update the status for contributor insights for a specific table or global secondary index
    UpdateContributorInsights => Write [INDEX, TABLE] [];
    /// Grants permission to add or remove replicas in the specified global table
    UpdateGlobalTable => Write [GLOBAL_TABLE, TABLE] [];
    /// Grants permission to update settings of the specified global table
    UpdateGlobalTableSettings => Write [GLOBAL_TABLE, TABLE] [];
    /// Grants permission to edit an existing item's attributes, or adds a new item to the table if it does not already exist
    UpdateItem => Write [TABLE] ["dynamodb:Attributes", "dynamodb:EnclosingOperation", "dynamodb:LeadingKeys", "dynamodb:ReturnConsumedCapacity", "dynamodb:ReturnValues"];
    /// Grants permission to modify the provisioned throughput settings, global secondary indexes, or DynamoDB Streams settings for a given table
    UpdateTable => Write [TABLE] [];
    /// Grants permission to update auto scaling settings on your replica table
    UpdateTableReplicaAutoScaling => Write [TABLE] [];
    /// Grants permission to enable or disable TTL for the specified table
    UpdateTimeToLive => Write [TABLE] [];
}

pub static SERVICE: Service = Service {
    prefix: <Action as IamAction>::PREFIX,
    name: "Amazon DynamoDB",
    api_reference: API_REFERENCE,
    condition_keys: &[
        "aws:RequestTag/${TagKey}",
        "aws:ResourceTag/${TagKey}",
        "aws:TagKeys",
        "dynamodb:Attributes",
        "dynamodb:EnclosingOperation",
        "dynamodb:FullTableScan",
        "dynamodb:LeadingKeys",
        "dynamodb:ReturnConsumedCapacity",
        "dynamodb:ReturnValues",
        "dynamodb:Select",
    ],
    resource_types: RESOURCE_TYPES,
    actions: ACTIONS,
};

#[cfg(test)]
mod test {
    use super::{GLOBAL_TABLE, INDEX, SERVICE};
    use crate::aws::ArnOptions;

    #[test]
    fn global_tables_have_no_region() {
        let options = ArnOptions::new().region("us-east-1").field("globalTableName", "Books");
        assert_eq!(GLOBAL_TABLE.build(&options), "arn:*:dynamodb::*:global-table/Books");
    }

    #[test]
    fn global_table_key() {
        let resource_type = SERVICE.resource_type("globalTable").expect("should exist");
        assert_eq!(resource_type.name, "global-table");
    }

    #[test]
    fn index_takes_two_identifiers() {
        let options = ArnOptions::new().field("TableName", "Books");
        assert_eq!(INDEX.build(&options), "arn:*:dynamodb:*:*:table/Books/index/*");
        let options = options.field("IndexName", "ByAuthor");
        assert_eq!(INDEX.build(&options), "arn:*:dynamodb:*:*:table/Books/index/ByAuthor");
    }
}
