use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use url::Url;

/// 站点分区标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// 关于我
    Me,
    /// 博客文章
    Posts,
    /// 项目
    Projects,
}

impl SectionId {
    /// 所有分区，按导航顺序排列
    pub const ALL: [SectionId; 3] = [SectionId::Me, SectionId::Posts, SectionId::Projects];

    /// 分区的原始名称，同时也是分区的 URL 路径
    pub fn raw_value(&self) -> &'static str {
        match self {
            SectionId::Me => "me",
            SectionId::Posts => "posts",
            SectionId::Projects => "projects",
        }
    }

    /// 分区的默认标题
    pub fn default_title(&self) -> &'static str {
        match self {
            SectionId::Me => "Me",
            SectionId::Posts => "Posts",
            SectionId::Projects => "Projects",
        }
    }

    /// 从目录名解析分区
    pub fn from_raw(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.raw_value() == value)
    }

    fn index(&self) -> usize {
        match self {
            SectionId::Me => 0,
            SectionId::Posts => 1,
            SectionId::Projects => 2,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_value())
    }
}

/// 标签显示颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagColor {
    Blue,
    Gray,
    Green,
    Red,
    Yellow,
    Cyan,
    White,
    Black,
}

/// 文章标签
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 根据首字母计算标签颜色，只匹配小写字母区间
    pub fn color(&self) -> TagColor {
        match self.0.chars().next() {
            Some('a'..='c') => TagColor::Blue,
            Some('d'..='o') => TagColor::Green,
            Some('p'..='t') => TagColor::Cyan,
            Some('u'..='z') => TagColor::Red,
            _ => TagColor::Cyan,
        }
    }

    /// URL 友好的标签名：小写字母和数字保持不变，空格、`-`、`_` 变为 `-`，
    /// 其余字符按 UTF-8 字节转义为 `-xx`，因此 `c++` 与 `c#` 不会落到同一目录
    pub fn normalized(&self) -> String {
        let mut normalized = String::with_capacity(self.0.len());
        for ch in self.0.trim().chars().flat_map(char::to_lowercase) {
            match ch {
                ' ' | '-' | '_' => normalized.push('-'),
                ch if ch.is_alphanumeric() => normalized.push(ch),
                ch => {
                    let mut buf = [0u8; 4];
                    for byte in ch.encode_utf8(&mut buf).bytes() {
                        normalized.push_str(&format!("-{:02x}", byte));
                    }
                }
            }
        }

        if normalized.is_empty() {
            normalized.push('_');
        }
        normalized
    }

    /// 标签详情页路径
    pub fn path(&self) -> String {
        format!("tags/{}", self.normalized())
    }
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 博客文章的基本结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// 文章标题
    pub title: String,
    /// 文章描述
    pub description: String,
    /// 渲染后的 HTML 正文
    pub body: String,
    /// 文章创建时间
    pub date: DateTime<Utc>,
    /// 文章标签（已去重，保持原有顺序）
    pub tags: Vec<Tag>,
    /// 输出 URL 路径，例如 `posts/hello-world`
    pub path: String,
    /// 源文件路径
    pub source: PathBuf,
}

impl Post {
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// 分区：一组有序的文章
#[derive(Debug, Clone)]
pub struct Section {
    /// 分区标识
    pub id: SectionId,
    /// 分区标题，渲染前必须非空
    pub title: String,
    /// 分区内的文章
    pub posts: Vec<Post>,
}

impl Section {
    pub fn new(id: SectionId) -> Self {
        Self {
            id,
            title: String::new(),
            posts: Vec::new(),
        }
    }

    pub fn path(&self) -> &'static str {
        self.id.raw_value()
    }
}

/// 站点模型
#[derive(Debug, Clone)]
pub struct Site {
    /// 站点名称
    pub name: String,
    /// 站点描述
    pub description: String,
    /// 网站URL
    pub url: Url,
    /// 站点语言
    pub language: String,
    /// 样式表路径
    pub stylesheet_paths: Vec<String>,
    sections: Vec<Section>,
}

impl Site {
    /// 创建站点，所有分区按 `SectionId::ALL` 的顺序初始化为空
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url: Url,
        language: impl Into<String>,
        stylesheet_paths: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            url,
            language: language.into(),
            stylesheet_paths,
            sections: SectionId::ALL.into_iter().map(Section::new).collect(),
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn sections_mut(&mut self) -> &mut [Section] {
        &mut self.sections
    }

    pub fn section(&self, id: SectionId) -> &Section {
        &self.sections[id.index()]
    }

    pub fn section_mut(&mut self, id: SectionId) -> &mut Section {
        &mut self.sections[id.index()]
    }

    /// 所有分区中的文章
    pub fn all_posts(&self) -> impl Iterator<Item = &Post> {
        self.sections.iter().flat_map(|section| section.posts.iter())
    }

    /// 最新的一篇文章
    pub fn latest_post(&self) -> Option<&Post> {
        self.all_posts().max_by_key(|post| post.date)
    }

    /// 带有指定标签的文章，按日期降序
    pub fn posts_tagged_with(&self, tag: &Tag) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.all_posts().filter(|post| post.has_tag(tag)).collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }

    /// 站点中出现过的所有标签，按字典序排列
    pub fn all_tags(&self) -> BTreeSet<&Tag> {
        self.all_posts().flat_map(|post| post.tags.iter()).collect()
    }

    /// 站内路径对应的完整 URL
    pub fn url_for(&self, path: &str) -> String {
        match self.url.join(path.trim_start_matches('/')) {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}/{}", self.url.as_str().trim_end_matches('/'), path.trim_start_matches('/')),
        }
    }
}
