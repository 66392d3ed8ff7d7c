use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use gray_matter::engine::YAML;
use gray_matter::{Matter, Pod};
use tracing::{debug, info};
use walkdir::WalkDir;

use super::error::LoadError;
use crate::models::{Post, SectionId, Tag};
use crate::utils::{self, date::parse_front_matter_date, markdown};

/// 分区索引文件名，其前置元数据中的标题会成为分区标题
const SECTION_INDEX: &str = "index.md";

/// 从一个分区目录加载的内容
#[derive(Debug, Default)]
pub struct LoadedSection {
    /// 分区索引文件提供的标题
    pub title: Option<String>,
    /// 分区中的文章，按文件名排序
    pub posts: Vec<Post>,
}

/// Markdown 内容加载器
pub struct ContentLoader {
    content_dir: PathBuf,
    matter: Matter<YAML>,
}

impl ContentLoader {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            matter: Matter::<YAML>::new(),
        }
    }

    /// 加载 `<content_dir>/<section>/` 下的 Markdown 文件，不进入子目录
    pub fn load_section(&self, id: SectionId) -> Result<LoadedSection, LoadError> {
        let section_dir = self.content_dir.join(id.raw_value());
        let mut loaded = LoadedSection::default();

        if !section_dir.exists() {
            debug!("分区目录不存在，跳过: {}", section_dir.display());
            return Ok(loaded);
        }

        info!("从 {} 加载文章", section_dir.display());

        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        for entry in WalkDir::new(&section_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            let path = entry.path();

            if !entry.file_type().is_file() || !utils::is_markdown_file(path) {
                continue;
            }

            if entry.file_name() == SECTION_INDEX {
                let (data, _) = self.read_front_matter(path)?;
                loaded.title = string_field(&data, "title").filter(|t| !t.is_empty());
                continue;
            }

            let post = self.load_post(path, id)?;
            if let Some(other) = seen.insert(post.path.clone(), post.source.clone()) {
                return Err(LoadError::DuplicateSlug {
                    slug: post.path,
                    path: post.source,
                    other,
                });
            }
            debug!("加载文章: {} ({})", post.title, post.path);
            loaded.posts.push(post);
        }

        info!("分区 {} 加载了 {} 篇文章", id, loaded.posts.len());
        Ok(loaded)
    }

    /// 解析单个 Markdown 文件为文章
    pub fn load_post(&self, path: &Path, section: SectionId) -> Result<Post, LoadError> {
        let (data, content) = self.read_front_matter(path)?;

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();

        let slug = utils::slugify(&stem);
        if slug.is_empty() {
            return Err(LoadError::EmptySlug {
                path: path.to_path_buf(),
            });
        }

        let title = string_field(&data, "title").unwrap_or_else(|| stem.clone());
        let description = string_field(&data, "description").unwrap_or_default();

        let date = match string_field(&data, "date") {
            Some(raw) => parse_front_matter_date(&raw).ok_or_else(|| LoadError::FrontMatter {
                path: path.to_path_buf(),
                message: format!("无法解析日期 \"{}\"", raw),
            })?,
            None => modified_time(path)?,
        };

        Ok(Post {
            title,
            description,
            body: markdown::render(&content),
            date,
            tags: tags_field(&data),
            path: format!("{}/{}", section.raw_value(), slug),
            source: path.to_path_buf(),
        })
    }

    fn read_front_matter(&self, path: &Path) -> Result<(Pod, String), LoadError> {
        let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = self.matter.parse(&raw);
        let data = match parsed.data {
            Some(data @ Pod::Hash(_)) => data,
            Some(Pod::Null) | None => Pod::Null,
            Some(_) => {
                return Err(LoadError::FrontMatter {
                    path: path.to_path_buf(),
                    message: "前置元数据必须是键值映射".to_string(),
                })
            }
        };

        Ok((data, parsed.content))
    }
}

fn field<'a>(data: &'a Pod, key: &str) -> Option<&'a Pod> {
    match data {
        Pod::Hash(map) => map.get(key),
        _ => None,
    }
}

fn string_field(data: &Pod, key: &str) -> Option<String> {
    match field(data, key)? {
        Pod::String(s) => Some(s.trim().to_string()),
        Pod::Integer(i) => Some(i.to_string()),
        Pod::Float(f) => Some(f.to_string()),
        _ => None,
    }
}

/// 标签既可以是 YAML 列表，也可以是逗号分隔的字符串
fn tags_field(data: &Pod) -> Vec<Tag> {
    let raw: Vec<String> = match field(data, "tags") {
        Some(Pod::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Pod::String(s) => Some(s.clone()),
                _ => None,
            })
            .collect(),
        Some(Pod::String(s)) => s.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    };

    let mut tags: Vec<Tag> = Vec::with_capacity(raw.len());
    for name in raw.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        let tag = Tag::from(name);
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

fn modified_time(path: &Path) -> Result<DateTime<Utc>, LoadError> {
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let modified = fs::metadata(path).and_then(|m| m.modified()).map_err(io_err)?;
    Ok(modified.into())
}
