use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use url::Url;

use super::types::Site;

pub const DEFAULT_TITLE: &str = "Meet crelies";
pub const DEFAULT_DESCRIPTION: &str = "My personal website including my blog posts";
pub const DEFAULT_URL: &str = "https://christianelies.de";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub language: Option<String>,
    pub content_dir: Option<String>,
    pub public_dir: Option<String>,
    pub stylesheets: Option<Vec<String>>,
    pub deploy: Option<DeployConfig>,
    pub server: Option<ServerConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    pub repo: String,
    pub branch: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: Option<u16>,
    pub public_dir: Option<String>,
    pub profile_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: Some(DEFAULT_DESCRIPTION.to_string()),
            url: Some(DEFAULT_URL.to_string()),
            language: Some("en".to_string()),
            content_dir: None,
            public_dir: None,
            stylesheets: None,
            deploy: None,
            server: None,
        }
    }
}

impl DeployConfig {
    pub fn branch(&self) -> &str {
        self.branch.as_deref().unwrap_or("master")
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("Publish deploy")
    }
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("解析配置文件失败: {}", path.display()))?;
        Ok(config)
    }

    /// Markdown 内容目录
    pub fn content_dir(&self) -> &str {
        self.content_dir.as_deref().unwrap_or("content")
    }

    /// 生成输出目录
    pub fn public_dir(&self) -> &str {
        self.public_dir.as_deref().unwrap_or("output")
    }

    pub fn stylesheets(&self) -> Vec<String> {
        self.stylesheets.clone().unwrap_or_else(|| {
            vec![
                "/css/bootstrap.min.css".to_string(),
                "/css/all.min.css".to_string(),
                "/css/styles.css".to_string(),
            ]
        })
    }

    pub fn server_port(&self) -> u16 {
        self.server.as_ref().and_then(|s| s.port).unwrap_or(8080)
    }

    /// 欢迎页服务器的静态目录
    pub fn server_public_dir(&self) -> &str {
        self.server
            .as_ref()
            .and_then(|s| s.public_dir.as_deref())
            .unwrap_or("Public")
    }

    /// 个人资料文件名，相对于服务器静态目录
    pub fn profile_file(&self) -> &str {
        self.server
            .as_ref()
            .and_then(|s| s.profile_file.as_deref())
            .unwrap_or("me.json")
    }

    /// 根据配置创建站点模型
    pub fn to_site(&self) -> Result<Site> {
        let raw_url = self.url.as_deref().unwrap_or(DEFAULT_URL);
        let url = Url::parse(raw_url).with_context(|| format!("无效的站点 URL: {}", raw_url))?;

        Ok(Site::new(
            self.title.clone(),
            self.description.clone().unwrap_or_default(),
            url,
            self.language.clone().unwrap_or_else(|| "en".to_string()),
            self.stylesheets(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let config: Config = serde_yaml::from_str("title: Test Site\nurl: https://example.com\n").unwrap();
        assert_eq!(config.content_dir(), "content");
        assert_eq!(config.public_dir(), "output");
        assert_eq!(config.server_port(), 8080);
        assert_eq!(config.stylesheets().len(), 3);

        let site = config.to_site().unwrap();
        assert_eq!(site.name, "Test Site");
        assert_eq!(site.language, "en");
    }

    #[test]
    fn deploy_section_defaults() {
        let yaml = "title: T\ndeploy:\n  repo: git@github.com:crelies/christianelies.de.git\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        let deploy = config.deploy.unwrap();
        assert_eq!(deploy.branch(), "master");
        assert_eq!(deploy.message(), "Publish deploy");
    }

    #[test]
    fn reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "description: Blog\nserver:\n  port: 9000\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.description.as_deref(), Some("Blog"));
        assert_eq!(config.server_port(), 9000);
        assert_eq!(config.profile_file(), "me.json");

        assert!(Config::from_file(&dir.path().join("missing.yml")).is_err());
    }

    #[test]
    fn invalid_url_is_rejected() {
        let config = Config {
            url: Some("not a url".to_string()),
            ..Config::default()
        };
        assert!(config.to_site().is_err());
    }
}
