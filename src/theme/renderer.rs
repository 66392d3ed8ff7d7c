use std::fmt;
use std::path::{Path, PathBuf};

use maud::{html, Markup};

use super::components::{
    document, icon_text_card, link_tag, page_wrapper, post_card, raw_html, tag_badge, tag_card,
};
use super::styles::{FontSize, Icon, TextColor};
use crate::models::{Post, SectionId, Site, Tag};

const PERSONAL_TAGS: [&str; 7] = [
    "Family person",
    "Minimalist",
    "Traveler 4731: I love to travel",
    "Skier",
    "Father",
    "Road racer",
    "Swift developer",
];

/// 页面请求：每种页面对应一个变体
#[derive(Debug, Clone, Copy)]
pub enum PageRequest<'a> {
    /// 首页，展示最新文章
    Index,
    /// 分区页面
    Section(SectionId),
    /// 单篇文章
    Post(&'a Post),
    /// 所有标签
    TagList,
    /// 某个标签下的文章
    TagDetail(&'a Tag),
}

impl PageRequest<'_> {
    /// 页面相对于站点根目录的路径，首页为空字符串
    pub fn page_path(&self) -> String {
        match self {
            PageRequest::Index => String::new(),
            PageRequest::Section(id) => id.raw_value().to_string(),
            PageRequest::Post(post) => post.path.clone(),
            PageRequest::TagList => "tags".to_string(),
            PageRequest::TagDetail(tag) => tag.path(),
        }
    }

    /// 页面相对于输出目录的文件路径
    pub fn output_path(&self) -> PathBuf {
        Path::new(&self.page_path()).join("index.html")
    }
}

impl fmt::Display for PageRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageRequest::Index => f.write_str("index"),
            PageRequest::Section(id) => write!(f, "section {}", id),
            PageRequest::Post(post) => write!(f, "post {}", post.source.display()),
            PageRequest::TagList => f.write_str("tag list"),
            PageRequest::TagDetail(tag) => write!(f, "tag \"{}\"", tag),
        }
    }
}

/// 渲染页面，不会修改站点模型
pub fn render(request: PageRequest<'_>, site: &Site) -> Markup {
    let path = request.page_path();
    match request {
        PageRequest::Index => index_page(site, &path),
        PageRequest::Section(SectionId::Me) => me_page(site, &path),
        PageRequest::Section(SectionId::Posts) => posts_page(site, &path),
        PageRequest::Section(SectionId::Projects) => projects_page(site, &path),
        PageRequest::Post(post) => post_page(site, &path, post),
        PageRequest::TagList => tag_list_page(site, &path),
        PageRequest::TagDetail(tag) => tag_detail_page(site, &path, tag),
    }
}

fn index_page(site: &Site, path: &str) -> Markup {
    let content = html! {
        div {
            h2.mb-3 { "Latest post" }
            @if let Some(post) = site.latest_post() {
                (post_card(post))
            } @else {
                p { "No posts yet." }
            }
        }
    };

    document(site, path, &site.name, None, page_wrapper(true, content))
}

fn me_page(site: &Site, path: &str) -> Markup {
    let section = site.section(SectionId::Me);
    let content = html! {
        h2.mb-3 { "About me" }
        div.row {
            div class="col me card-wrapper" {
                (icon_text_card(
                    "Current position",
                    Icon::Laptop,
                    FontSize::Display,
                    "iOS Software Engineer @eos-uptrade",
                    "I work in the Hamburg office. My team is among others responsible for the library eos.ticketingSuite.",
                    &["mr-2"],
                ))
            }
            div class="col me card-wrapper" {
                (tag_card(Icon::User, FontSize::Display, "Personal tags", &["mr-2"], &PERSONAL_TAGS))
            }
        }
    };

    document(site, path, &section.title, Some(SectionId::Me), page_wrapper(true, content))
}

fn posts_page(site: &Site, path: &str) -> Markup {
    let section = site.section(SectionId::Posts);
    let content = html! {
        h2.mb-3 { (section.title) }
        @for post in &section.posts {
            (post_card(post))
        }
    };

    document(site, path, &section.title, Some(SectionId::Posts), page_wrapper(true, content))
}

fn projects_page(site: &Site, path: &str) -> Markup {
    let section = site.section(SectionId::Projects);
    let content = html! {
        h2.mb-3 { (section.title) }
        @if section.posts.is_empty() {
            p { "Coming soon ..." }
        } @else {
            @for post in &section.posts {
                (post_card(post))
            }
        }
    };

    document(site, path, &section.title, Some(SectionId::Projects), page_wrapper(true, content))
}

fn post_page(site: &Site, path: &str, post: &Post) -> Markup {
    let current = site
        .sections()
        .iter()
        .find(|section| section.posts.iter().any(|p| p.path == post.path))
        .map(|section| section.id);

    let content = html! {
        div.content { (raw_html(&post.body)) }
    };

    document(site, path, &post.title, current, page_wrapper(false, content))
}

fn tag_list_page(site: &Site, path: &str) -> Markup {
    let content = html! {
        h2.mb-3 { "Browse by tag" }
        @for tag in site.all_tags() {
            (link_tag(tag, FontSize::Large))
        }
    };

    document(site, path, "Browse by tag", None, page_wrapper(false, content))
}

fn tag_detail_page(site: &Site, path: &str, tag: &Tag) -> Markup {
    let content = html! {
        div class="row justify-content-between" {
            div class="col-8" {
                h2 {
                    div class="align-horizontally mb-3" {
                        "Tagged with"
                        (tag_badge(tag.as_str(), FontSize::Large, tag.color(), &["ml-2", "pt-2", "pb-2"]))
                    }
                }
            }
            div.col {
                p class="text-right align-middle" {
                    a class=(TextColor::Red.css_class()) href="/tags/" { "Browse all tags" }
                }
            }
        }
        @for post in site.posts_tagged_with(tag) {
            (post_card(post))
        }
    };

    let title = format!("Tagged with {}", tag);
    document(site, path, &title, None, page_wrapper(false, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use url::Url;

    fn post(title: &str, day: u32, tags: &[&str]) -> Post {
        Post {
            title: title.to_string(),
            description: format!("About {}", title),
            body: format!("<p>{} body</p>", title),
            date: Utc.with_ymd_and_hms(2020, 1, day, 12, 0, 0).unwrap(),
            tags: tags.iter().map(|t| Tag::from(*t)).collect(),
            path: format!("posts/{}", slug::slugify(title)),
            source: PathBuf::new(),
        }
    }

    fn site_with(posts: Vec<Post>) -> Site {
        let mut site = Site::new("Meet crelies", "", Url::parse("https://example.com").unwrap(), "en", Vec::new());
        for id in SectionId::ALL {
            site.section_mut(id).title = id.default_title().to_string();
        }
        site.section_mut(SectionId::Posts).posts = posts;
        site
    }

    fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
        needles
            .iter()
            .map(|n| html.find(n).unwrap_or_else(|| panic!("{n} not found")))
            .collect()
    }

    #[test]
    fn tag_list_is_sorted_lexicographically() {
        let site = site_with(vec![post("Only", 1, &["zebra", "apple", "mango"])]);
        let html = render(PageRequest::TagList, &site).into_string();

        let found = positions(&html, &[">apple</span>", ">mango</span>", ">zebra</span>"]);
        assert!(found[0] < found[1] && found[1] < found[2], "{found:?}");
    }

    #[test]
    fn empty_index_renders_placeholder() {
        let html = render(PageRequest::Index, &site_with(Vec::new())).into_string();
        assert!(html.contains("Latest post"));
        assert!(html.contains("No posts yet."));
    }

    #[test]
    fn index_shows_only_latest_post() {
        let site = site_with(vec![post("Old", 1, &["a"]), post("New", 9, &["a"])]);
        let html = render(PageRequest::Index, &site).into_string();
        assert!(html.contains("href=\"/posts/new/\""));
        assert!(!html.contains("href=\"/posts/old/\""));
    }

    #[test]
    fn tag_detail_lists_tagged_posts_and_back_link() {
        let site = site_with(vec![post("Swifty", 2, &["swift"]), post("Rusty", 3, &["rust"])]);
        let tag = Tag::from("swift");
        let html = render(PageRequest::TagDetail(&tag), &site).into_string();

        assert!(html.contains("Tagged with"));
        assert!(html.contains("<a class=\"text-danger\" href=\"/tags/\">Browse all tags</a>"));
        assert!(html.contains("/posts/swifty/"));
        assert!(!html.contains("/posts/rusty/"));
    }

    #[test]
    fn post_page_inserts_body_unescaped() {
        let site = site_with(vec![post("Hello", 1, &["a"])]);
        let target = &site.section(SectionId::Posts).posts[0];
        let html = render(PageRequest::Post(target), &site).into_string();

        assert!(html.contains("<p>Hello body</p>"));
        assert!(html.contains("nav-link active\" href=\"/posts/\""));
    }

    #[test]
    fn projects_page_without_posts_is_coming_soon() {
        let html = render(PageRequest::Section(SectionId::Projects), &site_with(Vec::new())).into_string();
        assert!(html.contains("<h2 class=\"mb-3\">Projects</h2>"));
        assert!(html.contains("Coming soon ..."));
    }

    #[test]
    fn me_page_lists_personal_tags() {
        let html = render(PageRequest::Section(SectionId::Me), &site_with(Vec::new())).into_string();
        assert!(html.contains("About me"));
        assert!(html.contains("Road racer"));
    }

    #[test]
    fn canonical_link_points_at_the_page() {
        let site = site_with(vec![post("Hello", 1, &["a"])]);
        let target = &site.section(SectionId::Posts).posts[0];

        let html = render(PageRequest::Post(target), &site).into_string();
        assert!(html.contains("<link rel=\"canonical\" href=\"https://example.com/posts/hello/\">"));

        let html = render(PageRequest::Index, &site).into_string();
        assert!(html.contains("<link rel=\"canonical\" href=\"https://example.com/\">"));
    }

    #[test]
    fn output_paths() {
        let p = post("Hello", 1, &[]);
        let tag = Tag::from("Open Source");
        assert_eq!(PageRequest::Index.output_path(), PathBuf::from("index.html"));
        assert_eq!(PageRequest::Section(SectionId::Me).output_path(), PathBuf::from("me/index.html"));
        assert_eq!(PageRequest::Post(&p).output_path(), PathBuf::from("posts/hello/index.html"));
        assert_eq!(PageRequest::TagList.output_path(), PathBuf::from("tags/index.html"));
        assert_eq!(
            PageRequest::TagDetail(&tag).output_path(),
            PathBuf::from("tags/open-source/index.html")
        );
        assert_eq!(
            PageRequest::TagDetail(&Tag::from("++")).output_path(),
            PathBuf::from("tags/-2b-2b/index.html")
        );
    }
}
