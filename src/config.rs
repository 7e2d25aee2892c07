/// Configuration constants for the LiteLLM management API
pub mod api {
    /// Header carrying the master/admin key
    pub const API_KEY_HEADER: &str = "x-litellm-api-key";

    /// Content type sent and accepted on every request
    pub const JSON_CONTENT_TYPE: &str = "application/json";

    pub const TEAM_NEW: &str = "/team/new";
    pub const TEAM_INFO: &str = "/team/info";
    pub const TEAM_UPDATE: &str = "/team/update";
    pub const TEAM_DELETE: &str = "/team/delete";

    pub const TEAM_MEMBER_ADD: &str = "/team/member_add";
    pub const TEAM_MEMBER_UPDATE: &str = "/team/member_update";
    pub const TEAM_MEMBER_DELETE: &str = "/team/member_delete";

    pub const KEY_GENERATE: &str = "/key/generate";
    pub const KEY_INFO: &str = "/key/info";
    pub const KEY_UPDATE: &str = "/key/update";
    pub const KEY_DELETE: &str = "/key/delete";

    pub const USER_NEW: &str = "/user/new";
    pub const USER_INFO: &str = "/user/info";
    pub const USER_UPDATE: &str = "/user/update";
    pub const USER_DELETE: &str = "/user/delete";

    pub const MODEL_NEW: &str = "/model/new";
    pub const MODEL_INFO: &str = "/model/info";
    pub const MODEL_UPDATE: &str = "/model/update";
    pub const MODEL_DELETE: &str = "/model/delete";

    /// Credentials are addressed by name: `/credentials/{name}`
    pub const CREDENTIALS: &str = "/credentials";
    pub const CREDENTIALS_BY_NAME: &str = "/credentials/by_name";

    pub const VECTOR_STORE_NEW: &str = "/vector_store/new";
    pub const VECTOR_STORE_INFO: &str = "/vector_store/info";
    pub const VECTOR_STORE_UPDATE: &str = "/vector_store/update";
    pub const VECTOR_STORE_DELETE: &str = "/vector_store/delete";

    /// MCP servers are addressed by id: `/v1/mcp/server/{id}`
    pub const MCP_SERVER: &str = "/v1/mcp/server";
}

/// Environment variables overriding provider settings
pub mod env {
    pub const API_BASE: &str = "LITELLM_API_BASE";
    pub const API_KEY: &str = "LITELLM_API_KEY";
    pub const INSECURE_SKIP_VERIFY: &str = "LITELLM_INSECURE_SKIP_VERIFY";
}

/// Settings file location (relative to HOME)
pub mod settings {
    pub const DIR_NAME: &str = ".litellm-provider";
    pub const FILE_NAME: &str = "config.json";
}

/// Read-after-create backoff used by resources with eventually consistent reads
pub mod retry {
    use std::time::Duration;

    pub const INITIAL_DELAY: Duration = Duration::from_secs(1);
    pub const MAX_DELAY: Duration = Duration::from_secs(10);
    pub const FACTOR: u32 = 2;
    pub const MAX_ATTEMPTS: u32 = 5;
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default state file
    pub const STATE_FILE: &str = "litellm.state.json";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_paths_are_absolute() {
        for path in [
            api::TEAM_NEW,
            api::KEY_GENERATE,
            api::USER_NEW,
            api::MODEL_NEW,
            api::CREDENTIALS,
            api::VECTOR_STORE_NEW,
            api::MCP_SERVER,
        ] {
            assert!(path.starts_with('/'), "{} must start with '/'", path);
            assert!(!path.ends_with('/'));
        }
    }

    #[test]
    fn test_env_var_names() {
        assert_eq!(env::API_BASE, "LITELLM_API_BASE");
        assert_eq!(env::API_KEY, "LITELLM_API_KEY");
        assert_eq!(env::INSECURE_SKIP_VERIFY, "LITELLM_INSECURE_SKIP_VERIFY");
    }

    #[test]
    fn test_retry_delays_are_bounded() {
        assert!(retry::INITIAL_DELAY <= retry::MAX_DELAY);
        assert!(retry::MAX_ATTEMPTS > 1);
    }
}
