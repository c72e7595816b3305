//! Agent-facing job market tools.
//!
//! Every tool takes plain arguments, performs at most one Adzuna call and
//! always answers with text, see [`tools::ToolOutput`].

pub mod api;
mod boundary;
pub mod format;
pub mod inputs;
pub mod registry;
pub mod tools;

pub use api::JobMarket;
pub use registry::{agent_profile, definitions, AgentProfile, ToolDefinition};
pub use tools::{ToolOutput, Toolbox};
