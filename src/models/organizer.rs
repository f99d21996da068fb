//! 组织者数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::record::{Record, Segment};

/// 组织者类型，同时也是远程拉取的分段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrganizerType {
    /// 个人
    #[serde(rename = "individual")]
    Individual,

    /// 公司/赞助方
    #[serde(rename = "company")]
    Company,
}

impl OrganizerType {
    const ALL: [OrganizerType; 2] = [OrganizerType::Individual, OrganizerType::Company];
}

impl std::fmt::Display for OrganizerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrganizerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "individual" => Ok(OrganizerType::Individual),
            "company" => Ok(OrganizerType::Company),
            other => Err(format!("unknown organizer type: {other}")),
        }
    }
}

impl Segment for OrganizerType {
    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn as_str(&self) -> &'static str {
        match self {
            OrganizerType::Individual => "individual",
            OrganizerType::Company => "company",
        }
    }
}

/// 组织者
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organizer {
    /// 远程接口分配的唯一标识
    pub id: i64,

    /// 名称
    pub name: String,

    /// 邮箱
    pub email: Option<String>,

    /// 简介
    pub description: Option<String>,

    /// === 社交账号 ===
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,

    /// 头像或 logo 地址
    pub logo: Option<String>,

    pub slug: Option<String>,

    /// 状态，例如 `active`
    pub status: Option<String>,

    /// 组织者类型
    pub organizer_type: OrganizerType,

    /// 远程创建时间
    pub created_at: Option<DateTime<Utc>>,

    pub upcoming_events_count: u32,
    pub total_events_count: u32,
}

impl Organizer {
    /// 创建只带必要字段的组织者
    pub fn new(id: i64, name: &str, organizer_type: OrganizerType) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: None,
            description: None,
            facebook: None,
            twitter: None,
            instagram: None,
            logo: None,
            slug: None,
            status: None,
            organizer_type,
            created_at: None,
            upcoming_events_count: 0,
            total_events_count: 0,
        }
    }
}

impl PartialEq for Organizer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Organizer {}

impl Record for Organizer {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("individual", OrganizerType::Individual)]
    #[case("Company", OrganizerType::Company)]
    #[case("  COMPANY ", OrganizerType::Company)]
    fn test_organizer_type_parse(#[case] input: &str, #[case] expected: OrganizerType) {
        assert_eq!(input.parse::<OrganizerType>().unwrap(), expected);
    }

    #[test]
    fn test_organizer_type_rejects_unknown() {
        assert!("sponsor".parse::<OrganizerType>().is_err());
    }

    #[test]
    fn test_segments_in_fetch_order() {
        let names: Vec<&str> = OrganizerType::all().iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["individual", "company"]);
    }

    #[test]
    fn test_organizers_compare_by_identity() {
        let a = Organizer::new(1, "A", OrganizerType::Individual);
        let mut renamed = a.clone();
        renamed.name = "A (renamed)".into();
        assert_eq!(a, renamed);
        assert_ne!(a, Organizer::new(2, "A", OrganizerType::Individual));
    }
}
