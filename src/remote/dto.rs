//! DroidconKE API 响应结构
//!
//! 只负责反序列化和向领域模型的映射，不做任何网络操作。

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use super::PageMeta;
use crate::models::{Organizer, OrganizerType};

/// `GET /events/{slug}/organizers` 响应体
#[derive(Debug, Deserialize)]
pub struct OrganizersResponseDto {
    #[serde(default)]
    pub data: Vec<OrganizerDto>,
    #[serde(default)]
    pub meta: Option<MetaDto>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MetaDto {
    #[serde(default)]
    pub paginator: Option<PaginatorDto>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PaginatorDto {
    pub count: u32,
    pub per_page: u32,
    pub current_page: u32,
    pub next_page: Option<u32>,
    pub has_more_pages: bool,
    pub next_page_url: Option<String>,
    pub previous_page_url: Option<String>,
}

impl From<PaginatorDto> for PageMeta {
    fn from(p: PaginatorDto) -> Self {
        PageMeta {
            count: p.count,
            per_page: p.per_page,
            current_page: p.current_page,
            next_page: p.next_page,
            has_more_pages: p.has_more_pages,
            next_page_url: p.next_page_url,
            previous_page_url: p.previous_page_url,
        }
    }
}

/// 单个组织者
#[derive(Debug, Deserialize)]
pub struct OrganizerDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "type")]
    pub organizer_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub upcoming_events_count: Option<u32>,
    #[serde(default)]
    pub total_events_count: Option<u32>,
}

impl OrganizerDto {
    /// 映射为领域模型
    ///
    /// 响应里缺失或无法识别的 `type` 回落到请求的分段。
    pub fn into_domain(self, requested: OrganizerType) -> Organizer {
        let organizer_type = self
            .organizer_type
            .as_deref()
            .and_then(|t| t.parse().ok())
            .unwrap_or(requested);

        Organizer {
            id: self.id,
            name: self.name,
            email: self.email,
            description: self.description,
            facebook: self.facebook,
            twitter: self.twitter,
            instagram: self.instagram,
            logo: self.logo,
            slug: self.slug,
            status: self.status,
            organizer_type,
            created_at: self.created_at.as_deref().and_then(parse_timestamp),
            upcoming_events_count: self.upcoming_events_count.unwrap_or(0),
            total_events_count: self.total_events_count.unwrap_or(0),
        }
    }
}

/// 接口同时出现过 RFC 3339 和 `YYYY-MM-DD HH:MM:SS` 两种格式
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_payload_maps_to_domain() {
        let body = json!({
            "data": [{
                "id": 7,
                "name": "Android254",
                "email": "hello@android254.dev",
                "description": "Community",
                "twitter": "android254",
                "logo": "https://cdn.example/logo.png",
                "slug": "android254",
                "status": "active",
                "type": "company",
                "created_at": "2022-07-12 09:30:00",
                "upcoming_events_count": 1,
                "total_events_count": 4
            }],
            "meta": {
                "paginator": {
                    "count": 1,
                    "per_page": 100,
                    "current_page": 1,
                    "next_page": null,
                    "has_more_pages": false
                }
            }
        });

        let dto: OrganizersResponseDto = serde_json::from_value(body).unwrap();
        let meta: PageMeta = dto.meta.unwrap().paginator.unwrap().into();
        assert_eq!(meta.per_page, 100);
        assert!(!meta.has_more_pages);

        let organizer = dto
            .data
            .into_iter()
            .next()
            .unwrap()
            .into_domain(OrganizerType::Individual);
        assert_eq!(organizer.id, 7);
        assert_eq!(organizer.organizer_type, OrganizerType::Company);
        assert_eq!(organizer.total_events_count, 4);
        assert_eq!(
            organizer.created_at.unwrap().to_rfc3339(),
            "2022-07-12T09:30:00+00:00"
        );
    }

    #[test]
    fn test_missing_type_falls_back_to_requested_segment() {
        let dto: OrganizerDto = serde_json::from_value(json!({"id": 1, "name": "A"})).unwrap();
        let organizer = dto.into_domain(OrganizerType::Individual);
        assert_eq!(organizer.organizer_type, OrganizerType::Individual);
        assert!(organizer.created_at.is_none());
        assert_eq!(organizer.upcoming_events_count, 0);
    }

    #[test]
    fn test_unparseable_timestamp_is_dropped() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2022-07-12T09:30:00Z").is_some());
    }
}
