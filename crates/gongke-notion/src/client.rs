//! The create-page call against the Notion API.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use gongke_core::{Block, PageProperties};

use crate::config::NotionConfig;
use crate::error::{Error, Result};

/// Notion page-creation endpoint.
const PAGES_URL: &str = "https://api.notion.com/v1/pages";

/// API version header value — pinned; property shapes differ across versions.
const NOTION_VERSION: &str = "2022-06-28";

/// One create-page request: the destination database, the full property
/// set, and optional child blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePage {
    /// Id of the database the row is created in.
    pub database_id: String,
    /// The complete, fixed-shape property set.
    pub properties: PageProperties,
    /// Child content blocks; empty when the submission had no note.
    pub children: Vec<Block>,
}

/// The created page, identified by its opaque id. Never read back or
/// updated by this system.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedPage {
    /// Opaque page id assigned by Notion.
    pub id: String,
}

/// Trait for the single downstream write.
///
/// The HTTP handler depends on this rather than on `NotionClient` directly,
/// so tests can substitute a double.
pub trait PageWriter: Send + Sync + 'static {
    /// Create one page, returning its opaque id.
    fn create_page(
        &self,
        page: CreatePage,
    ) -> Pin<Box<dyn Future<Output = Result<CreatedPage>> + Send + '_>>;
}

/// Wire body of the create-page call.
#[derive(Serialize)]
struct CreatePageBody<'a> {
    parent: Parent<'a>,
    properties: &'a PageProperties,
    children: &'a [Block],
}

#[derive(Serialize)]
struct Parent<'a> {
    database_id: &'a str,
}

/// Error body shape returned by the Notion API.
#[derive(Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Reqwest-based Notion client. Cheap to clone; the inner connection pool
/// is shared.
#[derive(Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    config: NotionConfig,
}

impl NotionClient {
    /// Create a client with the given configuration.
    pub fn new(config: NotionConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Issue the create-page call.
    ///
    /// Non-2xx responses are decoded for their `message` field and
    /// surfaced as [`Error::Api`]; the call is never retried.
    async fn create(&self, page: CreatePage) -> Result<CreatedPage> {
        let body = CreatePageBody {
            parent: Parent {
                database_id: &page.database_id,
            },
            properties: &page.properties,
            children: &page.children,
        };

        let response = self
            .http
            .post(PAGES_URL)
            .bearer_auth(&self.config.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|b| b.message);
            log::warn!(
                "Notion rejected page creation (HTTP {status}): {}",
                message.as_deref().unwrap_or("<no message>")
            );
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let created: CreatedPage = response.json().await?;
        log::info!("Created Notion page {}", created.id);
        Ok(created)
    }
}

impl PageWriter for NotionClient {
    fn create_page(
        &self,
        page: CreatePage,
    ) -> Pin<Box<dyn Future<Output = Result<CreatedPage>> + Send + '_>> {
        Box::pin(self.create(page))
    }
}
