use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::domain::value_objects::LogicalId;

/// Pseudo parameters resolved by CloudFormation at deploy time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pseudo {
    AccountId,
    Region,
    Partition,
}

impl Pseudo {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pseudo::AccountId => "AWS::AccountId",
            Pseudo::Region => "AWS::Region",
            Pseudo::Partition => "AWS::Partition",
        }
    }
}

/// A template value that may only be known at deploy time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(String),
    /// `{"Ref": name}` for a resource logical ID or a pseudo parameter
    Ref(String),
    GetAtt {
        logical_id: LogicalId,
        attribute: String,
    },
    Join {
        delimiter: String,
        parts: Vec<Expr>,
    },
    /// `{"Fn::Sub": template}` with `${Name}` placeholders
    Sub(String),
}

impl Expr {
    pub fn literal(value: impl Into<String>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn reference(logical_id: &LogicalId) -> Self {
        Expr::Ref(logical_id.as_str().to_string())
    }

    pub fn pseudo(pseudo: Pseudo) -> Self {
        Expr::Ref(pseudo.as_str().to_string())
    }

    pub fn get_att(logical_id: &LogicalId, attribute: impl Into<String>) -> Self {
        Expr::GetAtt {
            logical_id: logical_id.clone(),
            attribute: attribute.into(),
        }
    }

    pub fn sub(template: impl Into<String>) -> Self {
        Expr::Sub(template.into())
    }

    /// Concatenate parts into the smallest equivalent expression.
    ///
    /// Nested empty-delimiter joins are flattened and adjacent literals merged,
    /// so a concatenation of plain strings stays a plain string.
    pub fn concat(parts: impl IntoIterator<Item = Expr>) -> Self {
        let mut flat = Vec::new();
        for part in parts {
            push_flat(&mut flat, part);
        }

        match flat.len() {
            0 => Expr::Literal(String::new()),
            1 => flat.remove(0),
            _ => Expr::Join {
                delimiter: String::new(),
                parts: flat,
            },
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Expr::Literal(s) => Some(s),
            _ => None,
        }
    }

    /// Rebuild an expression from text containing token markers.
    ///
    /// Each `${Token[i]}` marker in `text` is replaced by `tokens[i]`. Literal
    /// pieces of the tokens are JSON-escaped since the text is a JSON document.
    pub fn from_tokenized_json(text: &str, tokens: &[Expr]) -> Self {
        let markers: Vec<String> = (0..tokens.len()).map(token_marker).collect();
        let mut parts = Vec::new();
        let mut rest = text;

        loop {
            let next = markers
                .iter()
                .zip(tokens)
                .filter_map(|(marker, token)| rest.find(marker).map(|pos| (pos, marker.len(), token)))
                .min_by_key(|(pos, _, _)| *pos);

            match next {
                Some((pos, len, token)) => {
                    parts.push(Expr::Literal(rest[..pos].to_string()));
                    parts.push(token.json_escaped());
                    rest = &rest[pos + len..];
                }
                None => {
                    parts.push(Expr::Literal(rest.to_string()));
                    break;
                }
            }
        }

        Expr::concat(parts)
    }

    fn json_escaped(&self) -> Self {
        match self {
            Expr::Literal(s) => Expr::Literal(escape_json(s)),
            Expr::Join { delimiter, parts } => Expr::Join {
                delimiter: escape_json(delimiter),
                parts: parts.iter().map(Expr::json_escaped).collect(),
            },
            other => other.clone(),
        }
    }
}

/// Placeholder for the `index`-th token in tokenized text
pub fn token_marker(index: usize) -> String {
    format!("${{Token[{}]}}", index)
}

fn push_flat(flat: &mut Vec<Expr>, part: Expr) {
    match part {
        Expr::Join { delimiter, parts } if delimiter.is_empty() => {
            for inner in parts {
                push_flat(flat, inner);
            }
        }
        Expr::Literal(s) if s.is_empty() => {}
        Expr::Literal(s) => match flat.last_mut() {
            Some(Expr::Literal(prev)) => prev.push_str(&s),
            _ => flat.push(Expr::Literal(s)),
        },
        other => flat.push(other),
    }
}

fn escape_json(s: &str) -> String {
    let quoted = Value::String(s.to_string()).to_string();
    quoted[1..quoted.len() - 1].to_string()
}

impl From<&Expr> for Value {
    fn from(expr: &Expr) -> Self {
        let (key, body) = match expr {
            Expr::Literal(s) => return Value::String(s.clone()),
            Expr::Ref(name) => ("Ref", Value::String(name.clone())),
            Expr::GetAtt {
                logical_id,
                attribute,
            } => (
                "Fn::GetAtt",
                Value::Array(vec![
                    Value::String(logical_id.as_str().to_string()),
                    Value::String(attribute.clone()),
                ]),
            ),
            Expr::Join { delimiter, parts } => (
                "Fn::Join",
                Value::Array(vec![
                    Value::String(delimiter.clone()),
                    Value::Array(parts.iter().map(Value::from).collect()),
                ]),
            ),
            Expr::Sub(template) => ("Fn::Sub", Value::String(template.clone())),
        };

        let mut map = Map::new();
        map.insert(key.to_string(), body);
        Value::Object(map)
    }
}

impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Value::from(self).serialize(serializer)
    }
}

/// Renders references as `${Name}` / `${Name.Attr}` placeholders
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Literal(s) => write!(f, "{}", s),
            Expr::Ref(name) => write!(f, "${{{}}}", name),
            Expr::GetAtt {
                logical_id,
                attribute,
            } => write!(f, "${{{}.{}}}", logical_id, attribute),
            Expr::Join { delimiter, parts } => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, "{}", delimiter)?;
                    }
                    write!(f, "{}", part)?;
                }
                Ok(())
            }
            Expr::Sub(template) => write!(f, "{}", template),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bucket_id() -> LogicalId {
        LogicalId::new("Bucket".to_string()).unwrap()
    }

    #[test]
    fn test_concat_merges_literals() {
        let expr = Expr::concat(vec![Expr::literal("a"), Expr::literal(""), Expr::literal("b")]);
        assert_eq!(expr, Expr::literal("ab"));

        let arn = Expr::get_att(&bucket_id(), "Arn");
        let expr = Expr::concat(vec![arn.clone(), Expr::literal("/*")]);
        assert_eq!(
            expr,
            Expr::Join {
                delimiter: String::new(),
                parts: vec![arn, Expr::literal("/*")],
            }
        );
    }

    #[test]
    fn test_serialize_intrinsics() {
        let id = bucket_id();
        assert_eq!(serde_json::to_value(Expr::literal("x")).unwrap(), json!("x"));
        assert_eq!(
            serde_json::to_value(Expr::reference(&id)).unwrap(),
            json!({"Ref": "Bucket"})
        );
        assert_eq!(
            serde_json::to_value(Expr::pseudo(Pseudo::Region)).unwrap(),
            json!({"Ref": "AWS::Region"})
        );
        assert_eq!(
            serde_json::to_value(Expr::concat(vec![
                Expr::get_att(&id, "Arn"),
                Expr::literal("/*")
            ]))
            .unwrap(),
            json!({"Fn::Join": ["", [{"Fn::GetAtt": ["Bucket", "Arn"]}, "/*"]]})
        );
    }

    #[test]
    fn test_display_placeholders() {
        let id = bucket_id();
        let expr = Expr::concat(vec![Expr::get_att(&id, "Arn"), Expr::literal("/*")]);
        assert_eq!(expr.to_string(), "${Bucket.Arn}/*");
        assert_eq!(Expr::pseudo(Pseudo::Region).to_string(), "${AWS::Region}");
    }

    #[test]
    fn test_from_tokenized_json() {
        let arn = Expr::get_att(&bucket_id(), "Arn");
        let token = Expr::concat(vec![arn.clone(), Expr::literal("/\"x\"")]);
        let text = format!("{{\"Resource\":\"{}\"}}", token_marker(0));

        let expr = Expr::from_tokenized_json(&text, &[token]);
        assert_eq!(
            expr,
            Expr::Join {
                delimiter: String::new(),
                parts: vec![
                    Expr::literal("{\"Resource\":\""),
                    arn,
                    Expr::literal("/\\\"x\\\"\"}"),
                ],
            }
        );
    }

    #[test]
    fn test_from_tokenized_without_tokens() {
        let expr = Expr::from_tokenized_json("{\"a\":1}", &[]);
        assert_eq!(expr, Expr::literal("{\"a\":1}"));
    }
}
