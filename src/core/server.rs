use anyhow::Result;
use axum::{extract::State, response::Html, routing::get, Router};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::profile::ProfileService;
use crate::theme::render_welcome;

/// 欢迎页 HTTP 服务器
pub struct Server {
    /// 静态文件目录
    public_dir: PathBuf,
    /// 端口
    port: u16,
    /// 个人资料服务
    profile: Arc<ProfileService>,
}

impl Server {
    /// 创建新的服务器，个人资料文件位于静态目录中
    pub fn new(public_dir: PathBuf, profile_file: &str, port: u16) -> Self {
        let profile = Arc::new(ProfileService::new(public_dir.join(profile_file)));
        Self {
            public_dir,
            port,
            profile,
        }
    }

    /// 路由：`GET /` 渲染欢迎页，其余请求回退到静态文件
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(welcome))
            .fallback_service(ServeDir::new(&self.public_dir))
            .layer(TraceLayer::new_for_http())
            .with_state(Arc::clone(&self.profile))
    }

    /// 启动服务器
    pub async fn start(self) -> Result<()> {
        let app = self.router();

        let addr: SocketAddr = format!("0.0.0.0:{}", self.port).parse()?;
        info!("Server started at http://localhost:{}", self.port);
        info!("个人资料文件: {}", self.profile.path().display());

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// 欢迎页：个人资料缺失或无效时仍然返回 200，字段留空
async fn welcome(State(profile): State<Arc<ProfileService>>) -> Html<String> {
    let me = match tokio::task::spawn_blocking(move || profile.get_profile()).await {
        Ok(Ok(me)) => Some(me),
        Ok(Err(e)) => {
            warn!("无法加载个人资料，使用空白资料: {}", e);
            None
        }
        Err(e) => {
            warn!("读取个人资料的任务失败: {}", e);
            None
        }
    };

    Html(render_welcome(me.as_ref()).into_string())
}
