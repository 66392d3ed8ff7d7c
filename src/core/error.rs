use std::path::PathBuf;
use thiserror::Error;

/// 发布步骤错误类型
#[derive(Error, Debug)]
pub enum StepError {
    #[error("文章没有任何标签: {path}")]
    UntaggedItem {
        path: String,
    },

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Deploy(#[from] DeployError),

    #[error("写入文件失败: {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("多个页面写入同一个文件: {path} ({first} / {second})")]
    DuplicateOutput {
        path: PathBuf,
        first: String,
        second: String,
    },

    #[error("清空输出目录失败: {path}")]
    Reset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("输出目录 {output} 包含内容目录 {content}，拒绝清空")]
    OutputContainsContent {
        output: PathBuf,
        content: PathBuf,
    },
}

/// 内容加载错误类型
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("读取内容失败: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("遍历内容目录失败: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("前置元数据无效: {path} - {message}")]
    FrontMatter {
        path: PathBuf,
        message: String,
    },

    #[error("无法从文件名生成页面路径: {path}")]
    EmptySlug {
        path: PathBuf,
    },

    #[error("页面路径 {slug} 重复: {path} 与 {other}")]
    DuplicateSlug {
        slug: String,
        path: PathBuf,
        other: PathBuf,
    },
}

/// 个人资料读取错误类型
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("个人资料文件不存在: {path}")]
    NotFound {
        path: PathBuf,
    },

    #[error("读取个人资料失败: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("解析个人资料失败: {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 部署错误类型
#[derive(Error, Debug)]
pub enum DeployError {
    #[error("输出目录不存在: {path}")]
    MissingOutput {
        path: PathBuf,
    },

    #[error("无法打开部署仓库: {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: Box<gix::open::Error>,
    },

    #[error("无法初始化部署仓库: {path}")]
    Init {
        path: PathBuf,
        #[source]
        source: Box<gix::init::Error>,
    },

    #[error("无法执行 git {command}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git {command} 失败: {stderr}")]
    Git {
        command: String,
        stderr: String,
    },
}

/// 发布流水线错误：记录失败的步骤名称
#[derive(Error, Debug)]
#[error("发布步骤 \"{step}\" 失败")]
pub struct PipelineError {
    pub step: String,
    #[source]
    pub source: StepError,
}
