use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::intrinsic::Expr;
use crate::domain::value_objects::LogicalId;

pub const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";

/// A resource entry of a CloudFormation template
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateResource {
    #[serde(rename = "Type")]
    pub resource_type: String,

    #[serde(rename = "Properties")]
    pub properties: Value,

    #[serde(rename = "DependsOn", skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,

    #[serde(rename = "UpdateReplacePolicy", skip_serializing_if = "Option::is_none")]
    pub update_replace_policy: Option<String>,

    #[serde(rename = "DeletionPolicy", skip_serializing_if = "Option::is_none")]
    pub deletion_policy: Option<String>,
}

impl TemplateResource {
    pub fn new(resource_type: impl Into<String>, properties: Value) -> Self {
        Self {
            resource_type: resource_type.into(),
            properties,
            depends_on: Vec::new(),
            update_replace_policy: None,
            deletion_policy: None,
        }
    }

    pub fn depends_on(mut self, logical_id: &LogicalId) -> Self {
        self.depends_on.push(logical_id.as_str().to_string());
        self
    }

    /// Set both `DeletionPolicy` and `UpdateReplacePolicy`
    pub fn removal_policy(mut self, policy: &str) -> Self {
        self.update_replace_policy = Some(policy.to_string());
        self.deletion_policy = Some(policy.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateOutput {
    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "Value")]
    pub value: Expr,
}

/// A synthesized CloudFormation template
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudFormationTemplate {
    #[serde(rename = "AWSTemplateFormatVersion")]
    pub format_version: String,

    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "Resources", serialize_with = "serialize_entries")]
    pub resources: Vec<(LogicalId, TemplateResource)>,

    #[serde(
        rename = "Outputs",
        serialize_with = "serialize_entries",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub outputs: Vec<(LogicalId, TemplateOutput)>,
}

impl CloudFormationTemplate {
    pub fn new(description: Option<String>) -> Self {
        Self {
            format_version: TEMPLATE_FORMAT_VERSION.to_string(),
            description,
            resources: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn add_resource(&mut self, logical_id: LogicalId, resource: TemplateResource) {
        self.resources.push((logical_id, resource));
    }

    pub fn add_output(&mut self, logical_id: LogicalId, output: TemplateOutput) {
        self.outputs.push((logical_id, output));
    }

    pub fn resource(&self, logical_id: &str) -> Option<&TemplateResource> {
        self.resources
            .iter()
            .find(|(id, _)| id.as_str() == logical_id)
            .map(|(_, r)| r)
    }

    pub fn resources_of_type<'a>(
        &'a self,
        resource_type: &'a str,
    ) -> impl Iterator<Item = (&'a LogicalId, &'a TemplateResource)> + 'a {
        self.resources
            .iter()
            .filter(move |(_, r)| r.resource_type == resource_type)
            .map(|(id, r)| (id, r))
    }

    pub fn output(&self, logical_id: &str) -> Option<&TemplateOutput> {
        self.outputs
            .iter()
            .find(|(id, _)| id.as_str() == logical_id)
            .map(|(_, o)| o)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// Keeps declaration order in the rendered JSON object
fn serialize_entries<S, T>(entries: &Vec<(LogicalId, T)>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    serializer.collect_map(entries.iter().map(|(id, value)| (id.as_str(), value)))
}

/// Cloud assembly schema version written to `manifest.json`
pub const ASSEMBLY_SCHEMA_VERSION: &str = "36.0.0";
pub const STACK_ARTIFACT_TYPE: &str = "aws:cloudformation:stack";

/// `manifest.json` of a cloud assembly directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyManifest {
    pub version: String,
    pub artifacts: std::collections::BTreeMap<String, ArtifactManifest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactManifest {
    #[serde(rename = "type")]
    pub artifact_type: String,
    pub environment: String,
    pub properties: StackArtifactProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackArtifactProperties {
    #[serde(rename = "templateFile")]
    pub template_file: String,
}

impl AssemblyManifest {
    pub fn new() -> Self {
        Self {
            version: ASSEMBLY_SCHEMA_VERSION.to_string(),
            artifacts: Default::default(),
        }
    }

    /// Register a stack artifact and return its template file name
    pub fn add_stack(&mut self, stack_name: &str, environment_uri: String) -> String {
        let template_file = format!("{}.template.json", stack_name);
        self.artifacts.insert(
            stack_name.to_string(),
            ArtifactManifest {
                artifact_type: STACK_ARTIFACT_TYPE.to_string(),
                environment: environment_uri,
                properties: StackArtifactProperties {
                    template_file: template_file.clone(),
                },
            },
        );
        template_file
    }
}

impl Default for AssemblyManifest {
    fn default() -> Self {
        Self::new()
    }
}
