//! The six tools served by shelf and their typed arguments.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use shelf_protocol::schema::{ArgType, ToolArgument};
use shelf_types::NewUser;

/// Errors raised while turning a `tools/call` request into a [`ToolCall`].
#[derive(Debug, Error)]
pub enum ToolCallError {
    /// No tool with this name exists.
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    /// The arguments object does not fit the tool's signature.
    #[error("invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: ToolName, message: String },
}

/// Name of a served tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    ListUsers,
    ListProducts,
    AddUser,
    SearchProductsByCategory,
    GetDatabaseStats,
    ExecuteCustomQuery,
}

impl ToolName {
    /// Every tool, in `tools/list` order.
    pub const ALL: [ToolName; 6] = [
        ToolName::ListUsers,
        ToolName::ListProducts,
        ToolName::AddUser,
        ToolName::SearchProductsByCategory,
        ToolName::GetDatabaseStats,
        ToolName::ExecuteCustomQuery,
    ];

    /// Wire name used in `tools/call`.
    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::ListUsers => "list_users",
            ToolName::ListProducts => "list_products",
            ToolName::AddUser => "add_user",
            ToolName::SearchProductsByCategory => "search_products_by_category",
            ToolName::GetDatabaseStats => "get_database_stats",
            ToolName::ExecuteCustomQuery => "execute_custom_query",
        }
    }

    /// Description shown to the client.
    pub fn description(self) -> &'static str {
        match self {
            ToolName::ListUsers => "List all users in the database.",
            ToolName::ListProducts => "List all products in the database.",
            ToolName::AddUser => "Add a new user to the database.",
            ToolName::SearchProductsByCategory => "Search for products by category.",
            ToolName::GetDatabaseStats => "Get statistics about the database.",
            ToolName::ExecuteCustomQuery => {
                "Execute a custom SELECT query on the database. \
                 Only SELECT statements are allowed for safety."
            }
        }
    }

    /// Declared arguments, all required.
    pub fn arguments(self) -> &'static [ToolArgument] {
        const ADD_USER: &[ToolArgument] = &[
            ToolArgument {
                name: "name",
                arg_type: ArgType::String,
                description: "Full name of the user",
            },
            ToolArgument {
                name: "email",
                arg_type: ArgType::String,
                description: "Email address, unique across users",
            },
            ToolArgument {
                name: "age",
                arg_type: ArgType::Integer,
                description: "Age in years",
            },
        ];
        const CATEGORY: &[ToolArgument] = &[ToolArgument {
            name: "category",
            arg_type: ArgType::String,
            description: "Category to match, case-insensitive",
        }];
        const QUERY: &[ToolArgument] = &[ToolArgument {
            name: "query",
            arg_type: ArgType::String,
            description: "A single SELECT statement",
        }];

        match self {
            ToolName::AddUser => ADD_USER,
            ToolName::SearchProductsByCategory => CATEGORY,
            ToolName::ExecuteCustomQuery => QUERY,
            ToolName::ListUsers | ToolName::ListProducts | ToolName::GetDatabaseStats => &[],
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = ToolCallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ToolCallError::UnknownTool(s.to_string()))
    }
}

/// A fully-typed tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    ListUsers,
    ListProducts,
    AddUser(NewUser),
    SearchProductsByCategory { category: String },
    GetDatabaseStats,
    ExecuteCustomQuery { query: String },
}

#[derive(Deserialize)]
struct AddUserArgs {
    name: String,
    email: String,
    age: i64,
}

#[derive(Deserialize)]
struct CategoryArgs {
    category: String,
}

#[derive(Deserialize)]
struct QueryArgs {
    query: String,
}

impl ToolCall {
    /// Resolves a tool name and its raw JSON arguments.
    ///
    /// Tools without arguments ignore whatever is passed.
    pub fn parse(name: &str, arguments: Value) -> Result<Self, ToolCallError> {
        let tool: ToolName = name.parse()?;
        let call = match tool {
            ToolName::ListUsers => ToolCall::ListUsers,
            ToolName::ListProducts => ToolCall::ListProducts,
            ToolName::GetDatabaseStats => ToolCall::GetDatabaseStats,
            ToolName::AddUser => {
                let args: AddUserArgs = decode(tool, arguments)?;
                ToolCall::AddUser(NewUser::new(args.name, args.email, Some(args.age)))
            }
            ToolName::SearchProductsByCategory => {
                let args: CategoryArgs = decode(tool, arguments)?;
                ToolCall::SearchProductsByCategory {
                    category: args.category,
                }
            }
            ToolName::ExecuteCustomQuery => {
                let args: QueryArgs = decode(tool, arguments)?;
                ToolCall::ExecuteCustomQuery { query: args.query }
            }
        };
        Ok(call)
    }

    /// The tool this call targets.
    pub fn tool(&self) -> ToolName {
        match self {
            ToolCall::ListUsers => ToolName::ListUsers,
            ToolCall::ListProducts => ToolName::ListProducts,
            ToolCall::AddUser(_) => ToolName::AddUser,
            ToolCall::SearchProductsByCategory { .. } => ToolName::SearchProductsByCategory,
            ToolCall::GetDatabaseStats => ToolName::GetDatabaseStats,
            ToolCall::ExecuteCustomQuery { .. } => ToolName::ExecuteCustomQuery,
        }
    }
}

fn decode<T: DeserializeOwned>(tool: ToolName, arguments: Value) -> Result<T, ToolCallError> {
    serde_json::from_value(arguments).map_err(|e| ToolCallError::InvalidArguments {
        tool,
        message: e.to_string(),
    })
}
