//! Publer REST API exposed as callable actions for workflow hosts.
//!
//! Each action declares a parameter schema and knows how to turn one
//! item's resolved parameters into an HTTP request; the batch executor
//! drives an action over a sequence of input items, pairing every output
//! with the input item that produced it.

pub mod actions;
pub mod client;
pub mod connection;
pub mod error;
pub mod executor;
pub mod params;
pub mod request;

// Re-export commonly used types
pub use actions::{
    ActionKind, ContentType, MediaKind, Network, NetworkContent, PostState, PublerAction,
    WorkspaceRequirement,
};
pub use client::{PublerClient, AUTH_SCHEME, WORKSPACE_HEADER};
pub use connection::{PublerConnection, TimeoutConfig, DEFAULT_BASE_URL};
pub use error::{ConnectorError, ConnectorResult};
pub use executor::{BatchExecutor, ExecutionOptions};
pub use params::{clean_id_list, ParamSet, ParameterDef, ParameterKind};
pub use request::RequestSpec;
