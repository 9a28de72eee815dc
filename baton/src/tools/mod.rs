//! Named tools and the registry that exposes them as a `ToolSource`.

mod fn_tool;
mod registry;
mod r#trait;

pub use fn_tool::FnTool;
pub use r#trait::Tool;
pub use registry::ToolRegistry;
