use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use personal_site::core::Engine;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// 指定站点目录
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 生成静态网站
    Build(BuildArgs),

    /// 启动欢迎页服务器
    Server(ServerArgs),

    /// 清理生成的文件
    Clean,
}

#[derive(Args)]
pub struct BuildArgs {
    /// 生成后部署到配置的 git 仓库
    #[arg(short, long)]
    pub deploy: bool,
}

#[derive(Args)]
pub struct ServerArgs {
    /// 服务器端口，默认读取配置
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// 执行命令
pub async fn execute(cli: Cli) -> Result<()> {
    let engine = Engine::new(cli.path)?;

    match cli.command {
        Commands::Build(args) => {
            let site = engine.build(args.deploy)?;
            let posts = site.all_posts().count();
            info!(
                "已生成 {} 篇内容到 {}",
                posts.to_string().bright_green(),
                engine.public_dir.display()
            );
        }
        Commands::Server(args) => {
            engine.server(args.port).await?;
        }
        Commands::Clean => {
            engine.clean()?;
        }
    }

    Ok(())
}
