use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::deploy::Deployer;
use crate::core::error::StepError;
use crate::core::pipeline::PublishingStep;
use crate::models::{SectionId, Site};
use crate::theme::{render, PageRequest};

/// 部署仓库目录，清空输出目录时保留
const GIT_DIR: &str = ".git";

/// 站点需要生成的所有页面
pub fn page_requests(site: &Site) -> Vec<PageRequest<'_>> {
    let mut requests = vec![PageRequest::Index];
    requests.extend(SectionId::ALL.into_iter().map(PageRequest::Section));
    requests.extend(site.all_posts().map(PageRequest::Post));
    requests.push(PageRequest::TagList);
    requests.extend(site.all_tags().into_iter().map(PageRequest::TagDetail));
    requests
}

/// 每个页面对应的输出文件，两个页面落到同一文件时报错
pub fn output_paths<'a>(requests: &[PageRequest<'a>]) -> Result<Vec<PathBuf>, StepError> {
    let mut owners: HashMap<PathBuf, PageRequest<'a>> = HashMap::with_capacity(requests.len());
    let mut paths = Vec::with_capacity(requests.len());

    for request in requests {
        let path = request.output_path();
        if let Some(first) = owners.insert(path.clone(), *request) {
            return Err(StepError::DuplicateOutput {
                path,
                first: first.to_string(),
                second: request.to_string(),
            });
        }
        paths.push(path);
    }

    Ok(paths)
}

/// 清空输出目录后渲染所有页面
pub fn generate_html() -> PublishingStep {
    PublishingStep::step("Generate HTML", |context| {
        let requests = page_requests(&context.site);
        let paths = output_paths(&requests)?;

        reset_output_dir(&context.output_dir, &context.content_dir)?;
        info!("生成 {} 个页面到 {}", requests.len(), context.output_dir.display());

        for (request, path) in requests.into_iter().zip(paths) {
            let target = context.output_dir.join(path);
            let html = render(request, &context.site).into_string();
            write_page(&target, &html)?;
            debug!("写入 {}", target.display());
        }

        Ok(())
    })
}

/// 构建成功后调用部署目标，只执行一次
pub fn deploy(deployer: Box<dyn Deployer>) -> PublishingStep {
    PublishingStep::step("Deploy", move |context| {
        deployer.deploy(&context.output_dir)?;
        Ok(())
    })
}

/// 删除上一次生成的文件，`.git` 除外
fn reset_output_dir(output_dir: &Path, content_dir: &Path) -> Result<(), StepError> {
    if content_dir.starts_with(output_dir) {
        return Err(StepError::OutputContainsContent {
            output: output_dir.to_path_buf(),
            content: content_dir.to_path_buf(),
        });
    }

    if !output_dir.exists() {
        return Ok(());
    }

    let reset_err = |source| StepError::Reset {
        path: output_dir.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(output_dir).map_err(reset_err)? {
        let entry = entry.map_err(reset_err)?;
        if entry.file_name() == GIT_DIR {
            continue;
        }

        let path = entry.path();
        let removed = if entry.file_type().map_err(reset_err)?.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        removed.map_err(|source| StepError::Reset { path, source })?;
    }

    debug!("已清空输出目录 {}", output_dir.display());
    Ok(())
}

fn write_page(target: &Path, html: &str) -> Result<(), StepError> {
    let io_err = |source| StepError::Write {
        path: target.to_path_buf(),
        source,
    };

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(target, html).map_err(io_err)
}
