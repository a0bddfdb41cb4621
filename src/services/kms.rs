//! AWS Key Management Service (`kms`).

use crate::catalog::Service;
use crate::iam::IamAction;

resource_types! {
    ALIAS = "alias" => "arn:${Partition}:kms:${Region}:${Account}:alias/${Alias}";
    KEY = "key" => "arn:${Partition}:kms:${Region}:${Account}:key/${KeyId}" [
        "aws:ResourceTag/${TagKey}",
        "kms:KeyOrigin",
        "kms:KeySpec",
        "kms:KeyUsage",
        "kms:MultiRegion",
        "kms:MultiRegionKeyType",
        "kms:ResourceAliases",
    ];
}

actions! {
    prefix = "kms";
    docs = "https://docs.aws.amazon.com/kms/latest/APIReference/";

    /// Controls permission to cancel the scheduled deletion of an AWS KMS key
    CancelKeyDeletion => Write [KEY] ["kms:CallerAccount", "kms:ViaService"];
    /// Controls permission to connect or reconnect a custom key store to its associated AWS CloudHSM cluster or external key manager
    ConnectCustomKeyStore => Write [] ["kms:CallerAccount"];
    /// Controls permission to create an alias for an AWS KMS key
    CreateAlias => Write [ALIAS, KEY] ["kms:CallerAccount", "kms:ViaService"];
    /// Controls permission to create a custom key store
    CreateCustomKeyStore => Write [] ["kms:CallerAccount"];
    /// Controls permission to add a grant to an AWS KMS key
    CreateGrant => PermissionsManagement [KEY] [
        "kms:CallerAccount",
        "kms:GrantConstraintType",
        "kms:GrantIsForAWSResource",
        "kms:GrantOperations",
        "kms:GranteePrincipal",
        "kms:RetiringPrincipal",
        "kms:ViaService",
    ];
    /// Controls permission to create an AWS KMS key
    CreateKey => Write [] [
        "aws:RequestTag/${TagKey}",
        "aws:TagKeys",
        "kms:BypassPolicyLockoutSafetyCheck",
        "kms:CallerAccount",
        "kms:KeyOrigin",
        "kms:KeySpec",
        "kms:KeyUsage",
        "kms:MultiRegion",
        "kms:MultiRegionKeyType",
        "kms:ViaService",
    ];
    /// Controls permission to decrypt ciphertext that was encrypted under an AWS KMS key
    Decrypt => Write [KEY] [
        "kms:CallerAccount",
        "kms:EncryptionAlgorithm",
        "kms:EncryptionContext:${EncryptionContextKey}",
        "kms:EncryptionContextKeys",
        "kms:RecipientAttestation:ImageSha384",
        "kms:ViaService",
    ];
    /// Controls permission to delete an alias
    DeleteAlias => Write [ALIAS, KEY] ["kms:CallerAccount", "kms:ViaService"];
    /// Controls permission to delete a custom key store
    DeleteCustomKeyStore => Write [] ["kms:CallerAccount"];
    /// Controls permission to delete cryptographic material that you imported into an AWS KMS key
    DeleteImportedKeyMaterial => Write [KEY] ["kms:CallerAccount", "kms:ViaService"];
    /// Controls permission to derive a shared secret from a key agreement key pair
    DeriveSharedSecret => Write [KEY] ["kms:CallerAccount", "kms:KeyAgreementAlgorithm", "kms:ViaService"];
    /// Controls permission to view detailed information about custom key stores in the account and region
    DescribeCustomKeyStores => Read [] ["kms:CallerAccount"];
    /// Controls permission to view detailed information about an AWS KMS key
    DescribeKey => Read [KEY] ["kms:CallerAccount", "kms:ViaService"];
    /// Controls permission to disable an AWS KMS key
    DisableKey => Write [KEY] ["kms:CallerAccount", "kms:ViaService"];
    /// Controls permission to disable automatic rotation of a customer managed AWS KMS key
    DisableKeyRotation => Write [KEY] ["kms:CallerAccount", "kms:ViaService"];
    /// Controls permission to disconnect the custom key store from its associated AWS CloudHSM cluster or external key manager
    DisconnectCustomKeyStore => Write [] ["kms:CallerAccount"];
    /// Controls permission to change the state of an AWS KMS key to enabled
    EnableKey => Write [KEY] ["kms:CallerAccount", "kms:ViaService"];
    /// Controls permission to enable automatic rotation of the cryptographic material in an AWS KMS key
    EnableKeyRotation => Write [KEY] ["kms:CallerAccount", "kms:RotationPeriodInDays", "kms:ViaService"];
    /// Controls permission to use the specified AWS KMS key to encrypt data and data keys
    Encrypt => Write [KEY] [
        "kms:CallerAccount",
        "kms:EncryptionAlgorithm",
        "kms:EncryptionContext:${EncryptionContextKey}",
        "kms:EncryptionContextKeys",
        "kms:ViaService",
    ];
    /// Controls permission to use the AWS KMS key to generate data keys
    GenerateDataKey => Write [KEY] [
        "kms:CallerAccount",
        "kms:EncryptionAlgorithm",
        "kms:EncryptionContext:${EncryptionContextKey}",
        "kms:EncryptionContextKeys",
        "kms:ViaService",
    ];
    /// Controls permission to use the AWS KMS key to generate data key pairs
    GenerateDataKeyPair => Write [KEY] [
        "kms:CallerAccount",
        "kms:DataKeyPairSpec",
        "kms:EncryptionAlgorithm",
        "kms:EncryptionContext:${EncryptionContextKey}",
        "kms:EncryptionContextKeys",
        "kms:ViaService",
    ];
    /// Controls permission to use the AWS KMS key to generate data key pairs without a plaintext private key
    GenerateDataKeyPairWithoutPlaintext => Write [KEY] [
        "kms:CallerAccount",
        "kms:DataKeyPairSpec",
        "kms:EncryptionAlgorithm",
        "kms:EncryptionContext:${EncryptionContextKey}",
        "kms:EncryptionContextKeys",
        "kms:ViaService",
    ];
    /// Controls permission to use the AWS KMS key to generate a data key without a plaintext copy
    GenerateDataKeyWithoutPlaintext => Write [KEY] [
        "kms:CallerAccount",
        "kms:EncryptionAlgorithm",
        "kms:EncryptionContext:${EncryptionContextKey}",
        "kms:EncryptionContextKeys",
        "kms:ViaService",
    ];
    /// Controls permission to use the AWS KMS key to generate message authentication codes
    GenerateMac => Write [KEY] ["kms:CallerAccount", "kms:MacAlgorithm", "kms:ViaService"];
    /// Controls permission to get a cryptographically secure random byte string from AWS KMS
    GenerateRandom => Write [] [];
    /// Controls permission to view the key policy for the specified AWS KMS key
    GetKeyPolicy => Read [KEY] ["kms:CallerAccount", "kms:ViaService"];
    /// Controls permission to determine whether automatic key rotation is enabled on the AWS KMS key
    GetKeyRotationStatus => Read [KEY] ["kms:CallerAccount", "kms:ViaService"];
    /// Controls permission to get data that is required to import cryptographic material into a customer managed key
    GetParametersForImport => Read [KEY] ["kms:CallerAccount", "kms:ViaService", "kms:WrappingAlgorithm", "kms:WrappingKeySpec"];
    /// Controls permission to download the public key of an asymmetric AWS KMS key
    GetPublicKey => Read [KEY] ["kms:CallerAccount", "kms:ViaService"];
    /// Controls permission to import cryptographic material into an AWS KMS key
    ImportKeyMaterial => Write [KEY] ["kms:CallerAccount", "kms:ExpirationModel", "kms:ValidTo", "kms:ViaService"];
    /// Controls permission to view the aliases that are defined in the account
    ListAliases => List [] [];
    /// Controls permission to view all grants for an AWS KMS key
    ListGrants => List [KEY] ["kms:CallerAccount", "kms:GrantIsForAWSResource", "kms:ViaService"];
    /// Controls permission to view the names of key policies for an AWS KMS key
    ListKeyPolicies => List [KEY] ["kms:CallerAccount", "kms:ViaService"];
    /// Controls permission to view the list of completed key rotations for an AWS KMS key
    ListKeyRotations => List [KEY] ["kms:CallerAccount", "kms:ViaService"];
    /// Controls permission to view the key ID and Amazon Resource Name (ARN) of all AWS KMS keys in the account
    ListKeys => List [] [];
    /// Controls permission to view all tags that are attached to an AWS KMS key
    ListResourceTags => Read [KEY] ["kms:CallerAccount", "kms:ViaService"];
    /// Controls permission to view grants in which the specified principal is the retiring principal
    ListRetirableGrants => List [] [];
    /// Controls permission to replace the key policy for the specified AWS KMS key
    PutKeyPolicy => PermissionsManagement [KEY] ["kms:BypassPolicyLockoutSafetyCheck", "kms:CallerAccount", "kms:ViaService"];
    /// Controls permission to decrypt data as part of the process that decrypts and reencrypts the data within AWS KMS
    ReEncryptFrom @ "https://docs.aws.amazon.com/kms/latest/APIReference/API_ReEncrypt.html" => Write [KEY] [
        "kms:CallerAccount",
        "kms:EncryptionAlgorithm",
        "kms:EncryptionContext:${EncryptionContextKey}",
        "kms:EncryptionContextKeys",
        "kms:ReEncryptOnSameKey",
        "kms:ViaService",
    ];
    /// Controls permission to encrypt data as part of the process that decrypts and reencrypts the data within AWS KMS
    ReEncryptTo @ "https://docs.aws.amazon.com/kms/latest/APIReference/API_ReEncrypt.html" => Write [KEY] [
        "kms:CallerAccount",
        "kms:EncryptionAlgorithm",
        "kms:EncryptionContext:${EncryptionContextKey}",
        "kms:EncryptionContextKeys",
        "kms:ReEncryptOnSameKey",
        "kms:ViaService",
    ];
    /// Controls permission to replicate a multi-Region primary key
    ReplicateKey => Write [KEY] ["aws:RequestTag/${TagKey}", "aws:TagKeys", "kms:CallerAccount", "kms:ReplicaRegion", "kms:ViaService"];
    /// Controls permission to retire a grant
    RetireGrant => PermissionsManagement [KEY] ["kms:CallerAccount", "kms:ViaService"];
    /// Controls permission to revoke a grant, which denies permission for all operations that depend on the grant
    RevokeGrant => PermissionsManagement [KEY] ["kms:CallerAccount", "kms:GrantIsForAWSResource", "kms:ViaService"];
    /// Controls permission to invoke on-demand rotation of the cryptographic material in an AWS KMS key
    RotateKeyOnDemand => Write [KEY] ["kms:CallerAccount", "kms:ViaService"];
    /// Controls permission to schedule deletion of an AWS KMS key
    ScheduleKeyDeletion => Write [KEY] ["kms:CallerAccount", "kms:ScheduleKeyDeletionPendingWindowInDays", "kms:ViaService"];
    /// Controls permission to produce a digital signature for a message
    Sign => Write [KEY] ["kms:CallerAccount", "kms:MessageType", "kms:SigningAlgorithm", "kms:ViaService"];
    /// Controls access to internal APIs that synchronize multi-Region keys
    SynchronizeMultiRegionKey @ "https://docs.aws.amazon.com/kms/latest/developerguide/multi-region-update.html" => Write [KEY] [];
    /// Controls permission to create or update tags that are attached to an AWS KMS key
    TagResource => Tagging [KEY] ["aws:RequestTag/${TagKey}", "aws:TagKeys", "kms:CallerAccount", "kms:ViaService"];
    /// Controls permission to delete tags that are attached to an AWS KMS key
    UntagResource => Tagging [KEY] ["aws:TagKeys", "kms:CallerAccount", "kms:ViaService"];
    /// Controls permission to associate an alias with a different AWS KMS key
    UpdateAlias => Write [ALIAS, KEY] ["kms:CallerAccount", "kms:ViaService"];
    /// Controls permission to change the properties of a custom key store
    UpdateCustomKeyStore => Write [] ["kms:CallerAccount"];
    /// Controls permission to delete or change the description of an AWS KMS key
    UpdateKeyDescription => Write [KEY] ["kms:CallerAccount", "kms:ViaService"];
    /// Controls permission to update the primary Region of a multi-Region primary key
    UpdatePrimaryRegion => Write [KEY] ["kms:CallerAccount", "kms:PrimaryRegion", "kms:ViaService"];
    /// Controls permission to use the specified AWS KMS key to verify digital signatures
    Verify => Write [KEY] ["kms:CallerAccount", "kms:MessageType", "kms:SigningAlgorithm", "kms:ViaService"];
    /// Controls permission to use the AWS KMS key to verify message authentication codes
    VerifyMac => Write [KEY] ["kms:CallerAccount", "kms:MacAlgorithm", "kms:ViaService"];
}

pub static SERVICE: Service = Service {
    prefix: <Action as IamAction>::PREFIX,
    name: "AWS Key Management Service",
    api_reference: API_REFERENCE,
    condition_keys: &[
        "aws:RequestTag/${TagKey}",
        "aws:ResourceTag/${TagKey}",
        "aws:TagKeys",
        "kms:BypassPolicyLockoutSafetyCheck",
        "kms:CallerAccount",
        "kms:DataKeyPairSpec",
        "kms:EncryptionAlgorithm",
        "kms:EncryptionContext:${EncryptionContextKey}",
        "kms:EncryptionContextKeys",
        "kms:ExpirationModel",
        "kms:GrantConstraintType",
        "kms:GrantIsForAWSResource",
        "kms:GrantOperations",
        "kms:GranteePrincipal",
        "kms:KeyAgreementAlgorithm",
        "kms:KeyOrigin",
        "kms:KeySpec",
        "kms:KeyUsage",
        "kms:MacAlgorithm",
        "kms:MessageType",
        "kms:MultiRegion",
        "kms:MultiRegionKeyType",
        "kms:PrimaryRegion",
        "kms:ReEncryptOnSameKey",
        "kms:RecipientAttestation:ImageSha384",
        "kms:ReplicaRegion",
        "kms:RequestAlias",
        "kms:ResourceAliases",
        "kms:RetiringPrincipal",
        "kms:RotationPeriodInDays",
        "kms:ScheduleKeyDeletionPendingWindowInDays",
        "kms:SigningAlgorithm",
        "kms:ValidTo",
        "kms:ViaService",
        "kms:WrappingAlgorithm",
        "kms:WrappingKeySpec",
    ],
    resource_types: RESOURCE_TYPES,
    actions: ACTIONS,
};
