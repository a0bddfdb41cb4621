//! Amazon S3 Object Lambda (`s3-object-lambda`).
//!
//! Object Lambda access point ARNs separate the resource type token from
//! the name with `/`.

use crate::catalog::Service;
use crate::iam::IamAction;

const POLICY_DOCS: &str = "https://docs.aws.amazon.com/AmazonS3/latest/userguide/olap-policies.html";

resource_types! {
    OBJECT_LAMBDA_ACCESS_POINT = "objectlambdaaccesspoint"
        => "arn:${Partition}:s3-object-lambda:${Region}:${Account}:accesspoint/${AccessPointName}";
}

actions! {
    prefix = "s3-object-lambda";
    docs = "https://docs.aws.amazon.com/AmazonS3/latest/API/";

    /// Grants permission to abort a multipart upload
    AbortMultipartUpload => Write [OBJECT_LAMBDA_ACCESS_POINT] ["s3:DataAccessPointAccount", "s3:DataAccessPointArn", "s3:AccessPointNetworkOrigin"];
    /// Grants permission to remove the null version of an object and insert a delete marker, which becomes the current version of the object
    DeleteObject => Write [OBJECT_LAMBDA_ACCESS_POINT] ["s3:DataAccessPointAccount", "s3:DataAccessPointArn", "s3:AccessPointNetworkOrigin"];
    /// Grants permission to use the tagging subresource to remove the entire tag set from the specified object
    DeleteObjectTagging => Tagging [OBJECT_LAMBDA_ACCESS_POINT] ["s3:ExistingObjectTag/<key>"];
    /// Grants permission to remove a specific version of an object
    DeleteObjectVersion @ "https://docs.aws.amazon.com/AmazonS3/latest/API/API_DeleteObject.html" => Write [OBJECT_LAMBDA_ACCESS_POINT] ["s3:versionid"];
    /// Grants permission to remove the entire tag set for a specific version of the object
    DeleteObjectVersionTagging @ "https://docs.aws.amazon.com/AmazonS3/latest/API/API_DeleteObjectTagging.html" => Tagging [OBJECT_LAMBDA_ACCESS_POINT] ["s3:ExistingObjectTag/<key>", "s3:versionid"];
    /// Grants permission to retrieve objects from Amazon S3
    GetObject => Read [OBJECT_LAMBDA_ACCESS_POINT] ["s3:ExistingObjectTag/<key>"];
    /// Grants permission to return the access control list (ACL) of an object
    GetObjectAcl => Read [OBJECT_LAMBDA_ACCESS_POINT] ["s3:ExistingObjectTag/<key>"];
    /// Grants permission to get an object's current Legal Hold status
    GetObjectLegalHold => Read [OBJECT_LAMBDA_ACCESS_POINT] [];
    /// Grants permission to retrieve the retention settings for an object
    GetObjectRetention => Read [OBJECT_LAMBDA_ACCESS_POINT] [];
    /// Grants permission to return the tag set of an object
    GetObjectTagging => Read [OBJECT_LAMBDA_ACCESS_POINT] ["s3:ExistingObjectTag/<key>"];
    /// Grants permission to retrieve a specific version of an object
    GetObjectVersion @ POLICY_DOCS => Read [OBJECT_LAMBDA_ACCESS_POINT] ["s3:ExistingObjectTag/<key>", "s3:versionid"];
    /// Grants permission to return the access control list (ACL) of a specific object version
    GetObjectVersionAcl @ POLICY_DOCS => Read [OBJECT_LAMBDA_ACCESS_POINT] ["s3:ExistingObjectTag/<key>", "s3:versionid"];
    /// Grants permission to return the tag set for a specific version of the object
    GetObjectVersionTagging @ POLICY_DOCS => Read [OBJECT_LAMBDA_ACCESS_POINT] ["s3:ExistingObjectTag/<key>", "s3:versionid"];
    /// Grants permission to list some or all of the objects in an Amazon S3 bucket (up to 1000)
    ListBucket @ "https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListObjectsV2.html" => List [OBJECT_LAMBDA_ACCESS_POINT] ["s3:delimiter", "s3:max-keys", "s3:prefix"];
    /// Grants permission to list in-progress multipart uploads
    ListBucketMultipartUploads @ "https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListMultipartUploads.html" => List [OBJECT_LAMBDA_ACCESS_POINT] [];
    /// Grants permission to list the parts that have been uploaded for a specific multipart upload
    ListMultipartUploadParts @ "https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListParts.html" => List [OBJECT_LAMBDA_ACCESS_POINT] [];
    /// Grants permission to add an object to a bucket
    PutObject => Write [OBJECT_LAMBDA_ACCESS_POINT] ["s3:RequestObjectTag/<key>", "s3:RequestObjectTagKeys", "s3:x-amz-acl", "s3:x-amz-server-side-encryption"];
    /// Grants permission to set the access control list (ACL) permissions for new or existing objects in an S3 bucket
    PutObjectAcl => PermissionsManagement [OBJECT_LAMBDA_ACCESS_POINT] ["s3:ExistingObjectTag/<key>", "s3:x-amz-acl"];
    /// Grants permission to apply a Legal Hold configuration to the specified object
    PutObjectLegalHold => Write [OBJECT_LAMBDA_ACCESS_POINT] ["s3:object-lock-legal-hold"];
    /// Grants permission to place an object retention configuration on an object
    PutObjectRetention => Write [OBJECT_LAMBDA_ACCESS_POINT] ["s3:object-lock-mode", "s3:object-lock-retain-until-date"];
    /// Grants permission to set the supplied tag-set to an object that already exists in a bucket
    PutObjectTagging => Tagging [OBJECT_LAMBDA_ACCESS_POINT] ["s3:ExistingObjectTag/<key>", "s3:RequestObjectTag/<key>", "s3:RequestObjectTagKeys"];
    /// Grants permission to use the acl subresource to set the access control list (ACL) permissions for an object that already exists in a bucket
    PutObjectVersionAcl @ "https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutObjectAcl.html" => PermissionsManagement [OBJECT_LAMBDA_ACCESS_POINT] ["s3:ExistingObjectTag/<key>", "s3:versionid", "s3:x-amz-acl"];
    /// Grants permission to set the supplied tag-set for a specific version of an object
    PutObjectVersionTagging @ "https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutObjectTagging.html" => Tagging [OBJECT_LAMBDA_ACCESS_POINT] ["s3:ExistingObjectTag/<key>", "s3:RequestObjectTag/<key>", "s3:versionid"];
    /// Grants permission to restore an archived copy of an object back into Amazon S3
    RestoreObject => Write [OBJECT_LAMBDA_ACCESS_POINT] [];
    /// Grants permission to provide data to a client GetObject request from an Object Lambda function
    WriteGetObjectResponse => Write [OBJECT_LAMBDA_ACCESS_POINT] [];
}

pub static SERVICE: Service = Service {
    prefix: <Action as IamAction>::PREFIX,
    name: "Amazon S3 Object Lambda",
    api_reference: API_REFERENCE,
    condition_keys: &[
        "s3:AccessPointNetworkOrigin",
        "s3:DataAccessPointAccount",
        "s3:DataAccessPointArn",
        "s3:ExistingObjectTag/<key>",
        "s3:RequestObjectTag/<key>",
        "s3:RequestObjectTagKeys",
        "s3:TlsVersion",
        "s3:authType",
        "s3:signatureAge",
        "s3:signatureversion",
        "s3:versionid",
        "s3:x-amz-content-sha256",
    ],
    resource_types: RESOURCE_TYPES,
    actions: ACTIONS,
};
