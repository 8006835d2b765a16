use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::intrinsic::{token_marker, Expr};

pub const POLICY_VERSION: &str = "2012-10-17";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Allow,
    Deny,
}

impl Effect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Effect::Allow => "Allow",
            Effect::Deny => "Deny",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    /// `{"AWS": arn}`
    Aws(Expr),
    /// `{"Service": "lambda.amazonaws.com"}`
    Service(String),
}

/// One statement of an IAM policy document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyStatement {
    pub effect: Effect,
    pub actions: Vec<String>,
    pub principal: Option<Principal>,
    pub resources: Vec<Expr>,
}

impl PolicyStatement {
    pub fn allow(actions: &[&str]) -> Self {
        Self {
            effect: Effect::Allow,
            actions: actions.iter().map(|a| a.to_string()).collect(),
            principal: None,
            resources: Vec::new(),
        }
    }

    pub fn with_principal(mut self, principal: Principal) -> Self {
        self.principal = Some(principal);
        self
    }

    pub fn with_resource(mut self, resource: Expr) -> Self {
        self.resources.push(resource);
        self
    }

    fn to_value(&self, render: &mut dyn FnMut(&Expr) -> Value) -> Value {
        let mut map = Map::new();
        map.insert(
            "Action".to_string(),
            one_or_many(
                self.actions
                    .iter()
                    .map(|a| Value::String(a.clone()))
                    .collect(),
            ),
        );
        map.insert(
            "Effect".to_string(),
            Value::String(self.effect.as_str().to_string()),
        );
        if let Some(principal) = &self.principal {
            let mut inner = Map::new();
            match principal {
                Principal::Aws(arn) => inner.insert("AWS".to_string(), render(arn)),
                Principal::Service(service) => {
                    inner.insert("Service".to_string(), Value::String(service.clone()))
                }
            };
            map.insert("Principal".to_string(), Value::Object(inner));
        }
        if !self.resources.is_empty() {
            map.insert(
                "Resource".to_string(),
                one_or_many(self.resources.iter().map(|r| render(r)).collect()),
            );
        }
        Value::Object(map)
    }
}

/// IAM policy document, rendered in the compact form IAM and CloudFormation
/// accept: single actions and resources are scalars, not lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyDocument {
    pub statements: Vec<PolicyStatement>,
}

impl PolicyDocument {
    pub fn new(statements: Vec<PolicyStatement>) -> Self {
        Self { statements }
    }

    fn to_value(&self, render: &mut dyn FnMut(&Expr) -> Value) -> Value {
        let mut map = Map::new();
        map.insert(
            "Statement".to_string(),
            Value::Array(self.statements.iter().map(|s| s.to_value(render)).collect()),
        );
        map.insert(
            "Version".to_string(),
            Value::String(POLICY_VERSION.to_string()),
        );
        Value::Object(map)
    }

    /// The document as JSON text, with deploy-time values spliced in through
    /// an `Fn::Join` when any are present
    pub fn to_json_expr(&self) -> Expr {
        let mut tokens: Vec<Expr> = Vec::new();
        let text = self
            .to_value(&mut |expr: &Expr| match expr {
                Expr::Literal(s) => Value::String(s.clone()),
                other => {
                    tokens.push(other.clone());
                    Value::String(token_marker(tokens.len() - 1))
                }
            })
            .to_string();

        Expr::from_tokenized_json(&text, &tokens)
    }

    /// Plain-text JSON with deploy-time values shown as `${...}` placeholders
    pub fn to_json_text(&self) -> String {
        self.to_json_expr().to_string()
    }
}

impl Serialize for PolicyDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value(&mut |expr: &Expr| Value::from(expr))
            .serialize(serializer)
    }
}

fn one_or_many(mut values: Vec<Value>) -> Value {
    if values.len() == 1 {
        values.remove(0)
    } else {
        Value::Array(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::LogicalId;
    use serde_json::json;

    fn object_policy() -> (LogicalId, PolicyDocument) {
        let id = LogicalId::new("Bucket".to_string()).unwrap();
        let doc = PolicyDocument::new(vec![PolicyStatement::allow(&[
            "s3:GetObject",
            "s3:PutObject",
        ])
        .with_resource(Expr::concat(vec![
            Expr::get_att(&id, "Arn"),
            Expr::literal("/*"),
        ]))]);
        (id, doc)
    }

    #[test]
    fn test_serialize_as_template_value() {
        let (_, doc) = object_policy();
        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({
                "Statement": [{
                    "Action": ["s3:GetObject", "s3:PutObject"],
                    "Effect": "Allow",
                    "Resource": {"Fn::Join": ["", [{"Fn::GetAtt": ["Bucket", "Arn"]}, "/*"]]}
                }],
                "Version": "2012-10-17"
            })
        );
    }

    #[test]
    fn test_json_expr_splices_arn() {
        let (id, doc) = object_policy();
        let expr = doc.to_json_expr();
        assert_eq!(
            expr,
            Expr::Join {
                delimiter: String::new(),
                parts: vec![
                    Expr::literal(
                        "{\"Statement\":[{\"Action\":[\"s3:GetObject\",\"s3:PutObject\"],\"Effect\":\"Allow\",\"Resource\":\""
                    ),
                    Expr::get_att(&id, "Arn"),
                    Expr::literal("/*\"}],\"Version\":\"2012-10-17\"}"),
                ],
            }
        );
        assert_eq!(
            doc.to_json_text(),
            "{\"Statement\":[{\"Action\":[\"s3:GetObject\",\"s3:PutObject\"],\"Effect\":\"Allow\",\"Resource\":\"${Bucket.Arn}/*\"}],\"Version\":\"2012-10-17\"}"
        );
    }

    #[test]
    fn test_principal_and_single_action() {
        let doc = PolicyDocument::new(vec![PolicyStatement::allow(&["sts:AssumeRole"])
            .with_principal(Principal::Service("lambda.amazonaws.com".to_string()))]);
        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({
                "Statement": [{
                    "Action": "sts:AssumeRole",
                    "Effect": "Allow",
                    "Principal": {"Service": "lambda.amazonaws.com"}
                }],
                "Version": "2012-10-17"
            })
        );
        assert!(matches!(doc.to_json_expr(), Expr::Literal(_)));
    }
}
