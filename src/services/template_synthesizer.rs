use serde::Serialize;
use tracing::{debug, info};

use crate::{
    domain::{
        errors::{SynthError, SynthResult},
        models::{
            AutoDeleteObjects, BucketDescriptor, CloudFormationTemplate, Expr, PolicyDocument,
            PolicyStatement, Principal, RemovalPolicy, StackDeclaration, TemplateOutput,
            TemplateResource,
        },
        value_objects::LogicalId,
    },
    ports::services::SynthesisService,
};

pub const BUCKET_RESOURCE_TYPE: &str = "AWS::S3::Bucket";
pub const BUCKET_POLICY_RESOURCE_TYPE: &str = "AWS::S3::BucketPolicy";
pub const AUTO_DELETE_RESOURCE_TYPE: &str = "Custom::S3AutoDeleteObjects";
pub const AUTO_DELETE_TAG_KEY: &str = "aws-cdk:auto-delete-objects";

const AUTO_DELETE_PROVIDER_ID: &str = "Custom::S3AutoDeleteObjectsCustomResourceProvider";
const AUTO_DELETE_CUSTOM_RESOURCE_ID: &str = "AutoDeleteObjectsCustomResource";
const ASSETS_BUCKET: &str = "cdk-hnb659fds-assets-${AWS::AccountId}-${AWS::Region}";
const LAMBDA_BASIC_EXECUTION_ROLE: &str =
    "arn:${AWS::Partition}:iam::aws:policy/service-role/AWSLambdaBasicExecutionRole";
const HANDLER_RUNTIME: &str = "nodejs20.x";
const HANDLER_TIMEOUT_SECONDS: u32 = 900;
const HANDLER_MEMORY_MB: u32 = 128;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct BucketProperties {
    bucket_encryption: BucketEncryptionProperty,
    bucket_name: String,
    public_access_block_configuration: PublicAccessBlockConfiguration,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<Tag>,
    versioning_configuration: VersioningConfiguration,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct BucketEncryptionProperty {
    server_side_encryption_configuration: Vec<ServerSideEncryptionRule>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ServerSideEncryptionRule {
    server_side_encryption_by_default: ServerSideEncryptionByDefault,
}

#[derive(Serialize)]
struct ServerSideEncryptionByDefault {
    #[serde(rename = "SSEAlgorithm")]
    sse_algorithm: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct PublicAccessBlockConfiguration {
    block_public_acls: bool,
    block_public_policy: bool,
    ignore_public_acls: bool,
    restrict_public_buckets: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct VersioningConfiguration {
    status: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Tag {
    key: String,
    value: String,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct BucketPolicyProperties {
    bucket: Expr,
    policy_document: PolicyDocument,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct RoleProperties {
    assume_role_policy_document: PolicyDocument,
    managed_policy_arns: Vec<Expr>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct FunctionProperties {
    code: FunctionCode,
    timeout: u32,
    memory_size: u32,
    handler: &'static str,
    role: Expr,
    runtime: &'static str,
    description: Expr,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct FunctionCode {
    s3_bucket: Expr,
    s3_key: String,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct AutoDeleteProperties {
    service_token: Expr,
    bucket_name: Expr,
}

/// Validates a stack declaration and renders it as a CloudFormation template
#[derive(Debug, Clone, Default)]
pub struct TemplateSynthesizer;

impl TemplateSynthesizer {
    pub fn new() -> Self {
        Self
    }

    fn validate(declaration: &StackDeclaration) -> SynthResult<()> {
        declaration
            .stack_name
            .validate()
            .map_err(|reason| SynthError::InvalidStackName {
                stack_name: declaration.stack_name.as_str().to_string(),
                reason,
            })?;

        declaration
            .bucket
            .name
            .validate()
            .map_err(|reason| SynthError::InvalidBucketName {
                stack_name: declaration.stack_name.clone(),
                bucket_name: declaration.bucket.name.as_str().to_string(),
                reason,
            })
    }

    fn bucket_resource(bucket: &BucketDescriptor) -> SynthResult<TemplateResource> {
        let tags = match bucket.auto_delete_objects {
            Some(_) => vec![Tag {
                key: AUTO_DELETE_TAG_KEY.to_string(),
                value: "true".to_string(),
            }],
            None => Vec::new(),
        };

        let block = bucket.public_access_block;
        let properties = BucketProperties {
            bucket_encryption: BucketEncryptionProperty {
                server_side_encryption_configuration: vec![ServerSideEncryptionRule {
                    server_side_encryption_by_default: ServerSideEncryptionByDefault {
                        sse_algorithm: bucket.encryption.sse_algorithm(),
                    },
                }],
            },
            bucket_name: bucket.name.as_str().to_string(),
            public_access_block_configuration: PublicAccessBlockConfiguration {
                block_public_acls: block.block_public_acls,
                block_public_policy: block.block_public_policy,
                ignore_public_acls: block.ignore_public_acls,
                restrict_public_buckets: block.restrict_public_buckets,
            },
            tags,
            versioning_configuration: VersioningConfiguration {
                status: bucket.versioning_status(),
            },
        };

        Ok(
            TemplateResource::new(BUCKET_RESOURCE_TYPE, serde_json::to_value(properties)?)
                .removal_policy(bucket.removal_policy.as_str()),
        )
    }

    /// Resources that empty the bucket before it is deleted
    fn auto_delete_resources(
        bucket: &BucketDescriptor,
        auto_delete: &AutoDeleteObjects,
    ) -> SynthResult<Vec<(LogicalId, TemplateResource)>> {
        let bucket_ref = Expr::reference(&bucket.logical_id);
        let bucket_arn = Expr::get_att(&bucket.logical_id, "Arn");

        let role_id = LogicalId::from_path(&[AUTO_DELETE_PROVIDER_ID, "Role"]);
        let handler_id = LogicalId::from_path(&[AUTO_DELETE_PROVIDER_ID, "Handler"]);
        let construct_id = bucket.construct_id.as_str();
        let policy_id = LogicalId::from_path(&[construct_id, "Policy", "Resource"]);
        let custom_id = LogicalId::from_path(&[
            construct_id,
            AUTO_DELETE_CUSTOM_RESOURCE_ID,
            "Default",
        ]);

        let bucket_policy = BucketPolicyProperties {
            bucket: bucket_ref.clone(),
            policy_document: PolicyDocument::new(vec![PolicyStatement::allow(&[
                "s3:PutBucketPolicy",
                "s3:GetBucket*",
                "s3:List*",
                "s3:DeleteObject*",
            ])
            .with_principal(Principal::Aws(Expr::get_att(&role_id, "Arn")))
            .with_resource(bucket_arn.clone())
            .with_resource(Expr::concat(vec![bucket_arn, Expr::literal("/*")]))]),
        };

        let role = RoleProperties {
            assume_role_policy_document: PolicyDocument::new(vec![PolicyStatement::allow(&[
                "sts:AssumeRole",
            ])
            .with_principal(Principal::Service("lambda.amazonaws.com".to_string()))]),
            managed_policy_arns: vec![Expr::sub(LAMBDA_BASIC_EXECUTION_ROLE)],
        };

        let handler = FunctionProperties {
            code: FunctionCode {
                s3_bucket: Expr::sub(ASSETS_BUCKET),
                s3_key: auto_delete.handler_asset_key.clone(),
            },
            timeout: HANDLER_TIMEOUT_SECONDS,
            memory_size: HANDLER_MEMORY_MB,
            handler: "index.handler",
            role: Expr::get_att(&role_id, "Arn"),
            runtime: HANDLER_RUNTIME,
            description: Expr::concat(vec![
                Expr::literal("Lambda function for auto-deleting objects in "),
                bucket_ref.clone(),
                Expr::literal(" S3 bucket."),
            ]),
        };

        let custom = AutoDeleteProperties {
            service_token: Expr::get_att(&handler_id, "Arn"),
            bucket_name: bucket_ref,
        };

        Ok(vec![
            (
                policy_id.clone(),
                TemplateResource::new(BUCKET_POLICY_RESOURCE_TYPE, serde_json::to_value(bucket_policy)?),
            ),
            (
                custom_id,
                TemplateResource::new(AUTO_DELETE_RESOURCE_TYPE, serde_json::to_value(custom)?)
                    .depends_on(&policy_id)
                    .removal_policy(RemovalPolicy::Destroy.as_str()),
            ),
            (
                role_id.clone(),
                TemplateResource::new("AWS::IAM::Role", serde_json::to_value(role)?),
            ),
            (
                handler_id,
                TemplateResource::new("AWS::Lambda::Function", serde_json::to_value(handler)?)
                    .depends_on(&role_id),
            ),
        ])
    }
}

impl SynthesisService for TemplateSynthesizer {
    fn synthesize(&self, declaration: &StackDeclaration) -> SynthResult<CloudFormationTemplate> {
        Self::validate(declaration)?;

        let bucket = &declaration.bucket;
        let mut template = CloudFormationTemplate::new(None);
        template.add_resource(bucket.logical_id.clone(), Self::bucket_resource(bucket)?);

        if let Some(auto_delete) = &bucket.auto_delete_objects {
            for (logical_id, resource) in Self::auto_delete_resources(bucket, auto_delete)? {
                debug!(%logical_id, resource_type = %resource.resource_type, "declared auto-delete resource");
                template.add_resource(logical_id, resource);
            }
        }

        for output in declaration.outputs.iter() {
            template.add_output(
                output.logical_id.clone(),
                TemplateOutput {
                    description: output.description.clone(),
                    value: output.value.clone(),
                },
            );
        }

        info!(
            stack = %declaration.stack_name,
            resources = template.resources.len(),
            outputs = template.outputs.len(),
            "synthesized template"
        );

        Ok(template)
    }
}
