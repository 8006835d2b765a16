use crate::domain::value_objects::{BucketName, LogicalId};

/// What CloudFormation does with a resource when it leaves the template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalPolicy {
    Retain,
    Destroy,
}

impl RemovalPolicy {
    /// Value for `DeletionPolicy` and `UpdateReplacePolicy`
    pub fn as_str(&self) -> &'static str {
        match self {
            RemovalPolicy::Retain => "Retain",
            RemovalPolicy::Destroy => "Delete",
        }
    }
}

/// Public access block settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicAccessBlock {
    pub block_public_acls: bool,
    pub block_public_policy: bool,
    pub ignore_public_acls: bool,
    pub restrict_public_buckets: bool,
}

impl PublicAccessBlock {
    pub const BLOCK_ALL: Self = Self {
        block_public_acls: true,
        block_public_policy: true,
        ignore_public_acls: true,
        restrict_public_buckets: true,
    };

    pub fn blocks_all(&self) -> bool {
        *self == Self::BLOCK_ALL
    }
}

/// Server-side encryption applied by default to new objects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketEncryption {
    /// SSE-S3, keys managed by S3
    S3Managed,
}

impl BucketEncryption {
    pub fn sse_algorithm(&self) -> &'static str {
        match self {
            BucketEncryption::S3Managed => "AES256",
        }
    }
}

/// Custom resource that empties the bucket before CloudFormation deletes it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoDeleteObjects {
    pub handler_asset_key: String,
}

/// The single bucket a stack declares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketDescriptor {
    /// Construct id of the bucket within the stack
    pub construct_id: String,
    pub logical_id: LogicalId,
    pub name: BucketName,
    pub versioned: bool,
    pub public_access_block: PublicAccessBlock,
    pub encryption: BucketEncryption,
    pub removal_policy: RemovalPolicy,
    /// Present exactly when `removal_policy` is `Destroy`
    pub auto_delete_objects: Option<AutoDeleteObjects>,
}

impl BucketDescriptor {
    pub fn versioning_status(&self) -> &'static str {
        if self.versioned {
            "Enabled"
        } else {
            "Suspended"
        }
    }
}
