use serde::{Deserialize, Serialize};

/// 个人资料，对应 `me.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Me {
    pub name: String,
    pub street_address: String,
    pub zip: String,
    pub city: String,
    pub job: Job,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// 当前职位
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub apps: Vec<JobApp>,
}

/// 工作中参与的应用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApp {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}
