pub mod jsonrpc;
pub mod registry;
pub mod tools;

pub use jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use registry::{Tool, ToolDefinition, ToolError, ToolOutput, ToolRegistry};
pub use tools::default_registry;
