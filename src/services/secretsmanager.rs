//! AWS Secrets Manager (`secretsmanager`).

use crate::catalog::Service;
use crate::iam::IamAction;

resource_types! {
    /// Secret ids carry a six character suffix that AWS appends, e.g. `prod/db-AbCdEf`.
    SECRET = "Secret" => "arn:${Partition}:secretsmanager:${Region}:${Account}:secret:${SecretId}" [
        "aws:ResourceTag/${TagKey}",
        "secretsmanager:ResourceTag/tag-key",
        "secretsmanager:resource/AllowRotationLambdaArn",
    ];
}

actions! {
    prefix = "secretsmanager";
    docs = "https://docs.aws.amazon.com/secretsmanager/latest/apireference/";

    /// Grants permission to retrieve and decrypt a list of secrets
    BatchGetSecretValue => Read [] [];
    /// Grants permission to cancel an in-progress secret rotation
    CancelRotateSecret => Write [SECRET] ["secretsmanager:SecretId"];
    /// Grants permission to create a secret that stores encrypted data that can be queried and rotated
    CreateSecret => Write [SECRET] [
        "aws:RequestTag/${TagKey}",
        "aws:TagKeys",
        "secretsmanager:AddReplicaRegions",
        "secretsmanager:Description",
        "secretsmanager:ForceOverwriteReplicaSecret",
        "secretsmanager:KmsKeyId",
        "secretsmanager:Name",
    ];
    /// Grants permission to delete the resource policy attached to a secret
    DeleteResourcePolicy => PermissionsManagement [SECRET] ["secretsmanager:SecretId"];
    /// Grants permission to delete a secret
    DeleteSecret => Write [SECRET] ["secretsmanager:ForceDeleteWithoutRecovery", "secretsmanager:RecoveryWindowInDays", "secretsmanager:SecretId"];
    /// Grants permission to retrieve the metadata about a secret, but not the encrypted data
    DescribeSecret => Read [SECRET] ["secretsmanager:SecretId"];
    /// Grants permission to generate a random string for use in password creation
    GetRandomPassword => Read [] [];
    /// Grants permission to get the resource policy attached to a secret
    GetResourcePolicy => Read [SECRET] ["secretsmanager:SecretId"];
    /// Grants permission to retrieve and decrypt the encrypted data
    GetSecretValue => Read [SECRET] ["secretsmanager:SecretId", "secretsmanager:VersionId", "secretsmanager:VersionStage"];
    /// Grants permission to list the available versions of a secret
    ListSecretVersionIds => Read [SECRET] ["secretsmanager:SecretId"];
    /// Grants permission to list the available secrets
    ListSecrets => List [] [];
    /// Grants permission to attach a resource policy to a secret
    PutResourcePolicy => PermissionsManagement [SECRET] ["secretsmanager:BlockPublicPolicy", "secretsmanager:SecretId"];
    /// Grants permission to create a new version of the secret with new encrypted data
    PutSecretValue => Write [SECRET] ["secretsmanager:SecretId"];
    /// Grants permission to remove regions from replication
    RemoveRegionsFromReplication => Write [SECRET] ["secretsmanager:SecretId"];
    /// Grants permission to convert an existing secret to a multi-Region secret and begin replicating the secret to a list of new regions
    ReplicateSecretToRegions => Write [SECRET] ["secretsmanager:AddReplicaRegions", "secretsmanager:ForceOverwriteReplicaSecret", "secretsmanager:SecretId"];
    /// Grants permission to cancel deletion of a secret
    RestoreSecret => Write [SECRET] ["secretsmanager:SecretId"];
    /// Grants permission to start rotation of a secret
    RotateSecret => Write [SECRET] [
        "secretsmanager:ModifyRotationRules",
        "secretsmanager:RotateImmediately",
        "secretsmanager:RotationLambdaARN",
        "secretsmanager:SecretId",
    ];
    /// Grants permission to remove the secret from replication and promote the secret to a regional secret in the replica Region
    StopReplicationToReplica => Write [SECRET] ["secretsmanager:SecretPrimaryRegion"];
    /// Grants permission to add tags to a secret
    TagResource => Tagging [SECRET] ["aws:RequestTag/${TagKey}", "aws:TagKeys", "secretsmanager:SecretId"];
    /// Grants permission to remove tags from a secret
    UntagResource => Tagging [SECRET] ["aws:TagKeys", "secretsmanager:SecretId"];
    /// Grants permission to update a secret with new metadata or with a new version of the encrypted data
    UpdateSecret => Write [SECRET] ["secretsmanager:Description", "secretsmanager:KmsKeyId", "secretsmanager:SecretId"];
    /// Grants permission to move a stage from one secret to another
    UpdateSecretVersionStage => Write [SECRET] ["secretsmanager:SecretId", "secretsmanager:VersionStage"];
    /// Grants permission to validate a resource policy before attaching policy
    ValidateResourcePolicy => PermissionsManagement [SECRET] ["secretsmanager:SecretId"];
}

pub static SERVICE: Service = Service {
    prefix: <Action as IamAction>::PREFIX,
    name: "AWS Secrets Manager",
    api_reference: API_REFERENCE,
    condition_keys: &[
        "aws:RequestTag/${TagKey}",
        "aws:ResourceTag/${TagKey}",
        "aws:TagKeys",
        "secretsmanager:AddReplicaRegions",
        "secretsmanager:BlockPublicPolicy",
        "secretsmanager:Description",
        "secretsmanager:ForceDeleteWithoutRecovery",
        "secretsmanager:ForceOverwriteReplicaSecret",
        "secretsmanager:KmsKeyId",
        "secretsmanager:ModifyRotationRules",
        "secretsmanager:Name",
        "secretsmanager:RecoveryWindowInDays",
        "secretsmanager:ResourceTag/tag-key",
        "secretsmanager:RotateImmediately",
        "secretsmanager:RotationLambdaARN",
        "secretsmanager:SecretId",
        "secretsmanager:SecretPrimaryRegion",
        "secretsmanager:VersionId",
        "secretsmanager:VersionStage",
        "secretsmanager:resource/AllowRotationLambdaArn",
    ],
    resource_types: RESOURCE_TYPES,
    actions: ACTIONS,
};
