use super::{BucketDescriptor, OutputSet, PolicyDocument, StackConfig, StackEnvironment, StackOutput};
use crate::domain::value_objects::StackName;

/// Everything one construction of the bucket stack declares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackDeclaration {
    pub stack_name: StackName,
    pub environment: StackEnvironment,
    /// Configuration the declaration was built from
    pub config: StackConfig,
    pub bucket: BucketDescriptor,
    /// Object read/write/delete access to the bucket, published as an output
    pub access_policy: PolicyDocument,
    pub outputs: OutputSet,
}

impl StackDeclaration {
    pub fn output(&self, name: &str) -> Option<&StackOutput> {
        self.outputs.get(name)
    }
}
