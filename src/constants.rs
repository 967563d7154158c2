//! Constants for message roles, model identifiers, and file purposes
//!
//! These string vocabularies mirror the values the API accepts; request
//! validation checks membership in the `SUPPORTED` sets before sending.

/// Message role constants
pub mod role {
    /// User role identifier
    pub const USER: &str = "user";

    /// Assistant role identifier
    pub const ASSISTANT: &str = "assistant";

    /// System role identifier
    pub const SYSTEM: &str = "system";

    /// Roles accepted in chat completion requests
    pub const SUPPORTED: &[&str] = &[USER, ASSISTANT, SYSTEM];
}

/// Model identifier constants
pub mod model {
    /// gpt-3.5-turbo model identifier
    pub const GPT_3_5_TURBO: &str = "gpt-3.5-turbo";

    /// gpt-3.5-turbo-0301 snapshot identifier
    pub const GPT_3_5_TURBO_0301: &str = "gpt-3.5-turbo-0301";

    /// Models accepted in chat completion requests
    pub const SUPPORTED: &[&str] = &[GPT_3_5_TURBO, GPT_3_5_TURBO_0301];
}

/// File purpose constants
pub mod purpose {
    /// Fine-tune upload purpose
    pub const FINE_TUNE: &str = "fine-tune";
}
