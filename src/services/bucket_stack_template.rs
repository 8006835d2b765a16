use tracing::debug;

use crate::{
    domain::{
        models::{
            AutoDeleteObjects, BucketDescriptor, BucketEncryption, Expr, OutputSet,
            PolicyDocument, PolicyStatement, Pseudo, PublicAccessBlock, RemovalPolicy,
            StackConfig, StackDeclaration, StackEnvironment, StackOutput, AWS_REGION_OUTPUT,
            BUCKET_NAME_OUTPUT, IAM_POLICY_OUTPUT, USE_VPC_ENDPOINT_OUTPUT,
        },
        value_objects::{BucketName, LogicalId, StackName},
    },
    ports::services::StackService,
};

/// Construct id of the bucket within the stack
pub const BUCKET_CONSTRUCT_ID: &str = "HereyaS3Bucket";

/// Object actions granted by the published access policy
pub const OBJECT_ACCESS_ACTIONS: [&str; 3] = ["s3:GetObject", "s3:PutObject", "s3:DeleteObject"];

/// Declares one versioned, encrypted, private bucket plus its access policy
/// and outputs
#[derive(Debug, Clone, Default)]
pub struct BucketStackTemplate;

impl BucketStackTemplate {
    pub fn new() -> Self {
        Self
    }

    fn declare_bucket(stack_name: &StackName, config: &StackConfig) -> BucketDescriptor {
        let auto_delete = config.auto_delete_objects;

        BucketDescriptor {
            construct_id: BUCKET_CONSTRUCT_ID.to_string(),
            logical_id: LogicalId::from_path(&[BUCKET_CONSTRUCT_ID, "Resource"]),
            name: BucketName::for_stack(config.effective_prefix(), stack_name),
            versioned: true,
            public_access_block: PublicAccessBlock::BLOCK_ALL,
            encryption: BucketEncryption::S3Managed,
            removal_policy: if auto_delete {
                RemovalPolicy::Destroy
            } else {
                RemovalPolicy::Retain
            },
            auto_delete_objects: auto_delete.then(|| AutoDeleteObjects {
                handler_asset_key: config.auto_delete_handler_asset_key.clone(),
            }),
        }
    }

    fn declare_access_policy(bucket: &BucketDescriptor) -> PolicyDocument {
        let objects = Expr::concat(vec![
            Expr::get_att(&bucket.logical_id, "Arn"),
            Expr::literal("/*"),
        ]);

        PolicyDocument::new(vec![
            PolicyStatement::allow(&OBJECT_ACCESS_ACTIONS).with_resource(objects)
        ])
    }

    fn declare_outputs(
        bucket: &BucketDescriptor,
        environment: &StackEnvironment,
        policy: &PolicyDocument,
    ) -> OutputSet {
        let region = match &environment.region {
            Some(region) => Expr::literal(region.clone()),
            None => Expr::pseudo(Pseudo::Region),
        };

        OutputSet::new(vec![
            output(
                BUCKET_NAME_OUTPUT,
                Expr::reference(&bucket.logical_id),
                "The name of the S3 bucket",
            ),
            output(AWS_REGION_OUTPUT, region, "The AWS region"),
            output(
                IAM_POLICY_OUTPUT,
                policy.to_json_expr(),
                "IAM policy document for S3 bucket permissions",
            ),
            output(
                USE_VPC_ENDPOINT_OUTPUT,
                Expr::literal("true"),
                "Use AWS VPC endpoint for S3",
            ),
        ])
    }
}

fn output(name: &str, value: Expr, description: &str) -> StackOutput {
    StackOutput {
        logical_id: LogicalId::from_path(&[name]),
        value,
        description: description.to_string(),
    }
}

impl StackService for BucketStackTemplate {
    fn construct(
        &self,
        stack_name: StackName,
        environment: StackEnvironment,
        config: &StackConfig,
    ) -> StackDeclaration {
        let bucket = Self::declare_bucket(&stack_name, config);
        debug!(
            stack = %stack_name,
            bucket = %bucket.name,
            removal_policy = bucket.removal_policy.as_str(),
            "declared bucket"
        );

        let access_policy = Self::declare_access_policy(&bucket);
        let outputs = Self::declare_outputs(&bucket, &environment, &access_policy);

        StackDeclaration {
            stack_name,
            environment,
            config: config.clone(),
            bucket,
            access_policy,
            outputs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn construct(stack: &str, config: &StackConfig) -> StackDeclaration {
        BucketStackTemplate::new().construct(
            StackName::from(stack),
            StackEnvironment::default(),
            config,
        )
    }

    #[test]
    fn test_bucket_name_derivation() {
        let decl = construct("MyTestStack", &StackConfig::default());
        assert_eq!(decl.bucket.name.as_str(), "hereya-myteststack");

        let config = StackConfig::builder().name_prefix("test-prefix").build();
        let decl = construct("MyTestStack", &config);
        assert_eq!(decl.bucket.name.as_str(), "test-prefix-myteststack");
    }

    #[test]
    fn test_retain_by_default() {
        let decl = construct("TestStack", &StackConfig::default());
        assert_eq!(decl.bucket.removal_policy, RemovalPolicy::Retain);
        assert!(decl.bucket.auto_delete_objects.is_none());
    }

    #[test]
    fn test_destroy_with_auto_delete() {
        let config = StackConfig::builder().auto_delete_objects(true).build();
        let decl = construct("TestStack", &config);
        assert_eq!(decl.bucket.removal_policy, RemovalPolicy::Destroy);
        assert_eq!(
            decl.bucket.auto_delete_objects,
            Some(AutoDeleteObjects {
                handler_asset_key: config.auto_delete_handler_asset_key.clone(),
            })
        );
    }

    #[test]
    fn test_security_settings_fixed() {
        for auto_delete in [false, true] {
            let config = StackConfig::builder()
                .auto_delete_objects(auto_delete)
                .build();
            let decl = construct("TestStack", &config);
            assert!(decl.bucket.versioned);
            assert!(decl.bucket.public_access_block.blocks_all());
            assert_eq!(decl.bucket.encryption.sse_algorithm(), "AES256");
        }
    }

    #[test]
    fn test_outputs() {
        let decl = construct("TestStack", &StackConfig::default());
        assert_eq!(
            decl.outputs.names(),
            vec![
                "bucketName",
                "awsRegion",
                "iamPolicyAwsS3Bucket",
                "useAwsVpcEndpointS3"
            ]
        );
        assert_eq!(
            decl.output("awsRegion").map(|o| &o.value),
            Some(&Expr::pseudo(Pseudo::Region))
        );
        assert_eq!(
            decl.output("useAwsVpcEndpointS3").map(|o| &o.value),
            Some(&Expr::literal("true"))
        );
    }

    #[test]
    fn test_region_output_uses_environment() {
        let decl = BucketStackTemplate::new().construct(
            StackName::from("TestStack"),
            StackEnvironment::new(None, Some("eu-central-1".to_string())),
            &StackConfig::default(),
        );
        assert_eq!(
            decl.output("awsRegion").map(|o| o.value.to_string()),
            Some("eu-central-1".to_string())
        );
    }

    #[test]
    fn test_policy_text() {
        let decl = construct("TestStack", &StackConfig::default());
        let text = decl.access_policy.to_json_text();
        let arn = format!("${{{}.Arn}}/*", decl.bucket.logical_id);

        assert_eq!(
            text,
            format!(
                "{{\"Statement\":[{{\"Action\":[\"s3:GetObject\",\"s3:PutObject\",\"s3:DeleteObject\"],\"Effect\":\"Allow\",\"Resource\":\"{}\"}}],\"Version\":\"2012-10-17\"}}",
                arn
            )
        );
    }

    #[test]
    fn test_construction_is_deterministic() {
        let config = StackConfig::default();
        assert_eq!(construct("TestStack", &config), construct("TestStack", &config));
    }
}
