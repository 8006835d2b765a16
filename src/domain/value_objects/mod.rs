mod bucket_name;
mod logical_id;
mod stack_name;

pub use bucket_name::BucketName;
pub use logical_id::LogicalId;
pub use stack_name::StackName;
