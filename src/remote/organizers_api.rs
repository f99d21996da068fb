//! 组织者 API 客户端
//!
//! 只负责传输细节：请求构造、超时、HTTP 错误映射和 JSON 解码。

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use super::dto::OrganizersResponseDto;
use super::{Page, RemoteError, RemoteResult, RemoteSource};
use crate::config::config::ApiConfig;
use crate::error::Result;
use crate::models::{Organizer, OrganizerType, Segment};

const API_KEY_HEADER: &str = "Api-Authorization-Key";

/// 基于 reqwest 的组织者数据源
pub struct HttpOrganizerSource {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    per_page: u32,
}

impl HttpOrganizerSource {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/events/{}/organizers",
                config.base_url.trim_end_matches('/'),
                config.event_slug
            ),
            api_key: config.api_key.clone(),
            per_page: config.per_page.max(1),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RemoteSource<Organizer, OrganizerType> for HttpOrganizerSource {
    async fn fetch(&self, segment: OrganizerType) -> RemoteResult<Page<Organizer>> {
        let mut request = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[
                ("type", segment.as_str().to_string()),
                ("per_page", self.per_page.to_string()),
            ]);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key.as_str());
        }

        tracing::debug!(endpoint = %self.endpoint, %segment, "Fetching organizers");

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }

        let decoded: OrganizersResponseDto = serde_json::from_slice(&body)
            .map_err(|e| RemoteError::Decode(format!("invalid organizers payload: {e}")))?;

        let meta = decoded
            .meta
            .and_then(|m| m.paginator)
            .map(Into::into)
            .unwrap_or_default();
        let records = decoded
            .data
            .into_iter()
            .map(|dto| dto.into_domain(segment))
            .collect();

        Ok(Page::new(records).with_meta(meta))
    }
}

fn map_transport_error(error: reqwest::Error) -> RemoteError {
    if error.is_timeout() {
        RemoteError::Transport(format!("request timed out: {error}"))
    } else {
        RemoteError::Transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> RemoteError {
    RemoteError::Status {
        status: status.as_u16(),
        body: String::from_utf8_lossy(body).chars().take(512).collect(),
    }
}
