use std::path::Path;

pub mod date;
pub mod markdown;

/// 从文件名生成 URL 友好的别名
pub fn slugify(text: &str) -> String {
    slug::slugify(text)
}

/// 检查文件是否为 Markdown 文件
pub fn is_markdown_file<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    if let Some(ext) = path.extension() {
        ext == "md" || ext == "markdown"
    } else {
        false
    }
}

/// 站内路径转换为以斜杠开头和结尾的链接，例如 `posts/a` -> `/posts/a/`
pub fn page_href(path: &str) -> String {
    ensure_trailing_slash(&ensure_leading_slash(path.trim_matches('/')))
}

/// 确保路径以斜杠结尾
pub fn ensure_trailing_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}

/// 确保路径以斜杠开头
pub fn ensure_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_href_wraps_in_slashes() {
        assert_eq!(page_href("posts/hello"), "/posts/hello/");
        assert_eq!(page_href("/tags/"), "/tags/");
        assert_eq!(page_href(""), "/");
    }

    #[test]
    fn markdown_extensions() {
        assert!(is_markdown_file("content/posts/a.md"));
        assert!(is_markdown_file("a.markdown"));
        assert!(!is_markdown_file("a.html"));
        assert!(!is_markdown_file("README"));
    }
}
