use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use super::error::DeployError;
use crate::models::config::DeployConfig;

/// 部署目标：发布生成后的输出目录
pub trait Deployer {
    fn deploy(&self, output_dir: &Path) -> Result<(), DeployError>;
}

/// 通过 git 提交并推送输出目录
#[derive(Debug, Clone)]
pub struct GitDeployer {
    /// 远程仓库地址
    pub repo: String,
    /// 目标分支
    pub branch: String,
    /// 提交信息
    pub message: String,
}

impl GitDeployer {
    pub fn from_config(config: &DeployConfig) -> Self {
        Self {
            repo: config.repo.clone(),
            branch: config.branch().to_string(),
            message: config.message().to_string(),
        }
    }
}

impl Deployer for GitDeployer {
    fn deploy(&self, output_dir: &Path) -> Result<(), DeployError> {
        if !output_dir.is_dir() {
            return Err(DeployError::MissingOutput {
                path: output_dir.to_path_buf(),
            });
        }

        info!("部署 {} 到 {} ({})", output_dir.display(), self.repo, self.branch);

        open_or_init(output_dir)?;
        git(output_dir, &["add", "--all"])?;
        git(output_dir, &["commit", "--allow-empty", "-m", &self.message])?;

        let refspec = format!("HEAD:{}", self.branch);
        git(output_dir, &["push", "--force", &self.repo, &refspec])?;

        info!("部署完成");
        Ok(())
    }
}

/// 输出目录已经是仓库时直接打开，否则初始化
fn open_or_init(dir: &Path) -> Result<(), DeployError> {
    if dir.join(".git").exists() {
        gix::open(dir).map_err(|source| DeployError::Open {
            path: dir.to_path_buf(),
            source: Box::new(source),
        })?;
        debug!("使用已有仓库 {}", dir.display());
    } else {
        gix::init(dir).map_err(|source| DeployError::Init {
            path: dir.to_path_buf(),
            source: Box::new(source),
        })?;
        info!("初始化部署仓库 {}", dir.display());
    }
    Ok(())
}

fn git(dir: &Path, args: &[&str]) -> Result<(), DeployError> {
    let command = args.join(" ");
    debug!("git {}", command);

    let output = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .output()
        .map_err(|source| DeployError::Spawn {
            command: command.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(DeployError::Git {
            command,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(())
}
