use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use tracing::{debug, info};

use super::deploy::{Deployer, GitDeployer};
use super::pipeline::{Pipeline, PublishingContext};
use super::server::Server;
use crate::models::{Config, Site};
use crate::steps;

/// 配置文件名
pub const CONFIG_FILE: &str = "_config.yml";

/// 构建驱动：加载配置、组装发布流水线并运行
#[derive(Debug, Clone)]
pub struct Engine {
    /// 基础目录
    pub base_dir: PathBuf,
    /// 源文件目录
    pub content_dir: PathBuf,
    /// 公共目录（输出）
    pub public_dir: PathBuf,
    /// 站点配置
    pub config: Config,
}

impl Engine {
    /// 创建引擎；没有配置文件时使用默认配置
    pub fn new(base_dir: PathBuf) -> Result<Self> {
        info!("工作目录: {}", base_dir.display());

        let config_path = base_dir.join(CONFIG_FILE);
        let config = if config_path.exists() {
            Config::from_file(&config_path)?
        } else {
            debug!("未找到 {}，使用默认配置", config_path.display());
            Config::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    pub fn with_config(base_dir: PathBuf, config: Config) -> Self {
        let content_dir = base_dir.join(config.content_dir());
        let public_dir = base_dir.join(config.public_dir());

        Self {
            base_dir,
            content_dir,
            public_dir,
            config,
        }
    }

    /// 默认的发布流水线，步骤顺序决定了文章正文的最终布局
    pub fn pipeline(&self, deployer: Option<Box<dyn Deployer>>) -> Pipeline {
        let mut pipeline = Pipeline::new()
            .with_step(steps::add_section_titles())
            .with_step(steps::add_markdown_files())
            .with_step(steps::sort_items_by_date())
            .with_step(steps::ensure_all_items_are_tagged())
            .with_step(steps::insert_post_dates())
            .with_step(steps::insert_post_tags())
            .with_step(steps::insert_post_titles())
            .with_step(steps::generate_html());

        if let Some(deployer) = deployer {
            pipeline.push(steps::deploy(deployer));
        }

        pipeline
    }

    /// 根据配置创建部署目标
    pub fn deployer(&self) -> Result<Box<dyn Deployer>> {
        let deploy = self
            .config
            .deploy
            .as_ref()
            .ok_or_else(|| anyhow!("{} 中缺少 deploy 配置", CONFIG_FILE))?;
        Ok(Box::new(GitDeployer::from_config(deploy)))
    }

    /// 构建站点，`deploy` 为真时在最后部署
    pub fn build(&self, deploy: bool) -> Result<Site> {
        let deployer = if deploy { Some(self.deployer()?) } else { None };
        self.build_with(deployer)
    }

    /// 使用指定的部署目标构建站点
    pub fn build_with(&self, deployer: Option<Box<dyn Deployer>>) -> Result<Site> {
        info!("开始生成静态网站");

        let site = self.config.to_site()?;
        let context = PublishingContext::new(site, self.content_dir.clone(), self.public_dir.clone());

        let context = self
            .pipeline(deployer)
            .run(context)
            .context("生成站点失败")?;

        info!("{}", "Site generated successfully.".green());
        Ok(context.site)
    }

    /// 启动欢迎页服务器
    pub async fn server(&self, port: Option<u16>) -> Result<()> {
        let port = port.unwrap_or_else(|| self.config.server_port());
        let public_dir = self.base_dir.join(self.config.server_public_dir());

        let server = Server::new(public_dir, self.config.profile_file(), port);
        server.start().await
    }

    /// 删除输出目录
    pub fn clean(&self) -> Result<()> {
        if self.public_dir.exists() {
            fs::remove_dir_all(&self.public_dir)
                .with_context(|| format!("删除目录失败: {}", self.public_dir.display()))?;
            info!("已删除 {}", self.public_dir.display());
        } else {
            info!("输出目录不存在，无需清理");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pipeline_order() {
        let engine = Engine::with_config(PathBuf::from("site"), Config::default());
        assert_eq!(
            engine.pipeline(None).step_names(),
            vec![
                "Add section titles",
                "Add Markdown files",
                "Sort items by date",
                "Ensure all items are tagged",
                "Insert date in posts",
                "Insert tags in posts",
                "Insert titles in posts",
                "Generate HTML",
            ]
        );
    }

    #[test]
    fn deploy_without_config_is_an_error() {
        let engine = Engine::with_config(PathBuf::from("site"), Config::default());
        assert!(engine.deployer().is_err());
        assert!(engine.build(true).is_err());
    }

    #[test]
    fn directories_follow_config() {
        let config = Config {
            content_dir: Some("Content".to_string()),
            public_dir: Some("Output".to_string()),
            ..Config::default()
        };
        let engine = Engine::with_config(PathBuf::from("site"), config);
        assert_eq!(engine.content_dir, PathBuf::from("site/Content"));
        assert_eq!(engine.public_dir, PathBuf::from("site/Output"));
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let engine = Engine::new(dir.path().to_path_buf()).unwrap();
        assert_eq!(engine.config.title, crate::models::config::DEFAULT_TITLE);
    }
}
