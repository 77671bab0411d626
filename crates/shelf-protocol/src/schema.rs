//! JSON Schema helpers for MCP tool input descriptions.

use serde_json::{Map, Value};

/// JSON Schema primitive type of a tool argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    String,
    Integer,
}

impl ArgType {
    fn as_str(self) -> &'static str {
        match self {
            ArgType::String => "string",
            ArgType::Integer => "integer",
        }
    }
}

/// One named argument of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolArgument {
    pub name: &'static str,
    pub arg_type: ArgType,
    pub description: &'static str,
}

/// Builds an object `inputSchema` in which every listed argument is required.
pub fn build_input_schema(arguments: &[ToolArgument]) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for arg in arguments {
        let mut prop = Map::new();
        prop.insert("type".to_string(), Value::String(arg.arg_type.as_str().to_string()));
        prop.insert(
            "description".to_string(),
            Value::String(arg.description.to_string()),
        );
        properties.insert(arg.name.to_string(), Value::Object(prop));
        required.push(Value::String(arg.name.to_string()));
    }

    let mut schema = Map::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".to_string(), Value::Array(required));
    }

    Value::Object(schema)
}
