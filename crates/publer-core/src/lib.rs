pub mod error;
pub mod sanitization;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, CoreResult};
pub use sanitization::{is_sensitive_field, sanitize_json_value};
pub use types::{
    Credential, ExecutionResult, InputItem, OutputItem, ParamValue, ParamsProvider, StaticParams,
};
