

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use super::error::{classify_error, ApiError};
use super::models::{
    Folder, Lien, ListFoldersResponse, ListLiensResponse, Page, Project, SearchProjectsResponse,
};
use super::traits::{FolderService, LienService, ProjectService};
use crate::core::config::CleanerConfig;


pub struct ResourceManagerClient {
    base_url: String,
    access_token: Option<String>,
    page_size: u32,
    client: Client,
}

impl ResourceManagerClient {
    pub fn new(config: &CleanerConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        info!(
            "Resource Manager client initialized (url={}, page_size={})",
            config.api_base_url, config.page_size
        );

        Ok(Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
            page_size: config.page_size,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, ApiError> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        if params.is_empty() {
            Ok(Url::parse(&raw)?)
        } else {
            Ok(Url::parse_with_params(&raw, params)?)
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(classify_error(status.as_u16(), &body))
    }

    async fn list_all<P>(&self, path: &str, params: &[(&str, &str)]) -> Result<Vec<P::Item>, ApiError>
    where
        P: Page + DeserializeOwned,
    {
        let page_size = self.page_size.to_string();
        let mut items = Vec::new();
        let mut page_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let url = {
                let mut query: Vec<(&str, &str)> = params.to_vec();
                query.push(("pageSize", page_size.as_str()));
                if let Some(token) = page_token.as_deref() {
                    query.push(("pageToken", token));
                }
                self.endpoint(path, &query)?
            };
            let page = self
                .send(self.client.get(url))
                .await?
                .json::<P>()
                .await?;

            let (batch, next) = page.into_parts();
            pages += 1;
            items.extend(batch);

            match next.filter(|token| !token.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!("Listed {} item(s) from {} in {} page(s)", items.len(), path, pages);
        Ok(items)
    }

    async fn delete_resource(&self, name: &str) -> Result<(), ApiError> {
        let url = self.endpoint(name, &[])?;
        debug!("DELETE {}", url);
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}

#[async_trait]
impl FolderService for ResourceManagerClient {
    async fn list_child_folders(&self, parent: &str) -> Result<Vec<Folder>, ApiError> {
        self.list_all::<ListFoldersResponse>("folders", &[("parent", parent)])
            .await
    }

    async fn delete_folder(&self, name: &str) -> Result<(), ApiError> {
        self.delete_resource(name).await
    }
}

#[async_trait]
impl ProjectService for ResourceManagerClient {
    async fn search_active_projects(&self, query: &str) -> Result<Vec<Project>, ApiError> {
        self.list_all::<SearchProjectsResponse>("projects:search", &[("query", query)])
            .await
    }

    async fn delete_project(&self, name: &str) -> Result<(), ApiError> {
        self.delete_resource(name).await
    }
}

#[async_trait]
impl LienService for ResourceManagerClient {
    async fn list_liens(&self, parent: &str) -> Result<Vec<Lien>, ApiError> {
        self.list_all::<ListLiensResponse>("liens", &[("parent", parent)])
            .await
    }

    async fn delete_lien(&self, name: &str) -> Result<(), ApiError> {
        self.delete_resource(name).await
    }
}
