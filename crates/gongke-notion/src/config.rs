//! Environment-provided Notion configuration.

/// Notion integration token environment variable.
pub const TOKEN_VAR: &str = "NOTION_TOKEN";

/// Destination database id environment variable.
pub const DATABASE_ID_VAR: &str = "NOTION_DATABASE_ID";

/// Credentials and destination for the relay, read once at startup and
/// immutable afterwards.
#[derive(Clone, Debug, Default)]
pub struct NotionConfig {
    /// Integration token sent as a bearer credential.
    pub token: String,
    /// Id of the database new rows are created in.
    pub database_id: String,
}

impl NotionConfig {
    /// Read the configuration from the environment.
    ///
    /// Missing variables are not fatal here — an empty token or database id
    /// surfaces as a downstream API rejection on the first submission, which
    /// the handler reports as a 500.
    pub fn from_env() -> Self {
        let config = NotionConfig {
            token: std::env::var(TOKEN_VAR).unwrap_or_default(),
            database_id: std::env::var(DATABASE_ID_VAR).unwrap_or_default(),
        };
        if config.token.is_empty() {
            log::warn!("{TOKEN_VAR} is not set; submissions will fail downstream");
        }
        if config.database_id.is_empty() {
            log::warn!("{DATABASE_ID_VAR} is not set; submissions will fail downstream");
        }
        config
    }
}
