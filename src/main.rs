use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::error;
use tracing_subscriber::fmt;

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志系统
    fmt().with_target(false).init();

    // 解析命令行参数
    let cli = cli::Cli::parse();

    // 打印欢迎信息
    println!("{}", "
                                     _         _ _
 _ __   ___ _ __ ___  ___  _ __   __ _| |    ___(_) |_ ___
| '_ \\ / _ \\ '__/ __|/ _ \\| '_ \\ / _` | |   / __| | __/ _ \\
| |_) |  __/ |  \\__ \\ (_) | | | | (_| | |   \\__ \\ | ||  __/
| .__/ \\___|_|  |___/\\___/|_| |_|\\__,_|_|   |___/_|\\__\\___|
|_|
    ".bright_cyan());

    println!("{} {}", "personal-site".bright_cyan(), env!("CARGO_PKG_VERSION").bright_green());
    println!("{}", "Static generator for a personal website and blog".bright_white());
    println!();

    // 执行命令
    if let Err(e) = cli::execute(cli).await {
        error!("Error: {}", e);

        // 打印错误链
        for cause in e.chain().skip(1) {
            error!("Caused by: {}", cause);
        }

        std::process::exit(1);
    }

    Ok(())
}
