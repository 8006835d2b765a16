use super::intrinsic::Expr;
use crate::domain::value_objects::LogicalId;

pub const BUCKET_NAME_OUTPUT: &str = "bucketName";
pub const AWS_REGION_OUTPUT: &str = "awsRegion";
pub const IAM_POLICY_OUTPUT: &str = "iamPolicyAwsS3Bucket";
pub const USE_VPC_ENDPOINT_OUTPUT: &str = "useAwsVpcEndpointS3";

/// A named stack output, fixed at declaration time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackOutput {
    pub logical_id: LogicalId,
    pub value: Expr,
    pub description: String,
}

/// Outputs in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSet(Vec<StackOutput>);

impl OutputSet {
    pub fn new(outputs: Vec<StackOutput>) -> Self {
        Self(outputs)
    }

    pub fn get(&self, name: &str) -> Option<&StackOutput> {
        self.0.iter().find(|o| o.logical_id.as_str() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|o| o.logical_id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StackOutput> {
        self.0.iter()
    }
}
