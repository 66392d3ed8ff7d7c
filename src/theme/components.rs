//! 页面组件：页头、导航、页脚、卡片与标签

use chrono::{DateTime, Utc};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::styles::{tag_color_class, ClassList, FontSize, Icon, TextColor};
use crate::models::{Post, SectionId, Site, Tag, TagColor};
use crate::utils::{date::format_post_date, page_href};

const SOCIAL_LINKS: [(&str, Icon); 5] = [
    ("https://github.com/crelies", Icon::Github),
    ("https://medium.com/@crelies", Icon::Medium),
    ("https://stackoverflow.com/story/crelies", Icon::Stackoverflow),
    ("https://www.xing.com/profile/Christian_Elies2", Icon::Xing),
    ("https://www.linkedin.com/in/christian-elies-b1009b104", Icon::Linkedin),
];

/// 完整的 HTML 文档，`path` 是页面相对于站点根目录的路径
pub fn document(site: &Site, path: &str, title: &str, current: Option<SectionId>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(site.language) {
            (head(site, path, title))
            body {
                (custom_header(site, current))
                (content)
                (custom_footer())
            }
        }
    }
}

fn head(site: &Site, path: &str, title: &str) -> Markup {
    let full_title = if title.is_empty() || title == site.name {
        site.name.clone()
    } else {
        format!("{} | {}", title, site.name)
    };

    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            title { (full_title) }
            meta name="description" content=(site.description);
            link rel="canonical" href=(site.url_for(&page_href(path)));
            @for stylesheet in &site.stylesheet_paths {
                link rel="stylesheet" href=(stylesheet);
            }
        }
    }
}

pub fn custom_header(site: &Site, current: Option<SectionId>) -> Markup {
    let hello_classes = ClassList::from(["text-center", "pt-4"]).with(FontSize::Small.css_class());
    let link_classes = ClassList::new().with(TextColor::Red.css_class()).with("text-monospace");

    html! {
        header {
            div class=(hello_classes.join()) {
                a class=(link_classes.join()) href="/" {
                    p.mb-0 { "debugPrint(\"Hello world!\")" }
                }
            }
            (navigation_bar(site, current))
            (social_links())
        }
    }
}

pub fn navigation_bar(site: &Site, current: Option<SectionId>) -> Markup {
    html! {
        nav class="navbar navbar-expand-lg justify-content-center" {
            div.navbar-nav {
                @for section in site.sections() {
                    @let classes = ClassList::from(["nav-item", "nav-link"])
                        .with_if(Some(section.id) == current, "active");
                    a class=(classes.join()) href=(page_href(section.path())) {
                        "." (section.id.raw_value())
                    }
                }
            }
        }
    }
}

fn social_links() -> Markup {
    html! {
        ul class="list-inline text-center pb-4 mb-0 social-links" {
            @for (url, icon) in SOCIAL_LINKS {
                li.list-inline-item {
                    a target="_blank" href=(url) {
                        i class=(ClassList::new().with_all(icon.css_classes()).join()) {}
                    }
                }
            }
        }
    }
}

pub fn custom_footer() -> Markup {
    let wrapper = ClassList::from(["text-center"])
        .with(FontSize::Small.css_class())
        .with_all(&["w-50", "center-horizontally"]);
    let notice = ClassList::new().with(TextColor::Red.css_class()).with("text-monospace");
    let credit = ClassList::new().with(TextColor::Red.css_class()).with("mb-0");

    html! {
        footer.mb-3 {
            div class=(wrapper.join()) {
                p class=(notice.join()) {
                    "LegalNotice(name: \"Christian Elies\", city: \"Lüneburg\")"
                    br;
                    br;
                    "Copyright © Christian Elies 2020."
                }
                p class=(credit.join()) {
                    "Generated with personal-site. 100% JavaScript-free."
                }
            }
        }
    }
}

/// 页面主体容器
pub fn page_wrapper(container: bool, content: Markup) -> Markup {
    let classes = ClassList::from(["page-wrapper"])
        .with_if(container, "container")
        .with(TextColor::White.css_class());

    html! {
        div class=(classes.join()) { (content) }
    }
}

/// 标签徽章
pub fn tag_badge(tag: &str, font_size: FontSize, color: TagColor, additional: &[&'static str]) -> Markup {
    let classes = ClassList::from(["badge", "badge-pill"])
        .with(tag_color_class(color))
        .with(font_size.css_class())
        .with("text-monospace")
        .with_all(additional);

    html! {
        span class=(classes.join()) { (tag) }
    }
}

/// 链接到标签详情页的标签
pub fn link_tag(tag: &Tag, font_size: FontSize) -> Markup {
    html! {
        a href=(page_href(&tag.path())) {
            (tag_badge(tag.as_str(), font_size, tag.color(), &["pt-2", "pb-2", "mr-2", "mb-2"]))
        }
    }
}

pub fn link_tags(tags: &[Tag], font_size: FontSize) -> Markup {
    html! {
        @for tag in tags {
            (link_tag(tag, font_size))
        }
    }
}

/// 插入文章正文的日期标记
pub fn post_date(date: &DateTime<Utc>) -> Markup {
    html! {
        p class="post date" { (format_post_date(date)) }
    }
}

/// 插入文章正文的标题
pub fn post_title(title: &str) -> Markup {
    html! {
        h1 { (title) }
    }
}

fn card_classes() -> ClassList {
    ClassList::from(["card"])
        .with(TextColor::White.css_class())
        .with_all(&["bg-dark", "mb-3", "card-size"])
}

/// 文章摘要卡片
pub fn post_card(post: &Post) -> Markup {
    let date_classes = ClassList::new().with(TextColor::Red.css_class()).with("mb-0");

    html! {
        div class=(card_classes().join()) {
            div.card-body {
                div.card-title {
                    h5 {
                        a class=(TextColor::White.css_class()) href=(page_href(&post.path)) { (post.title) }
                    }
                    (link_tags(&post.tags, FontSize::Small))
                }
                p.card-text { (post.description) }
                p class=(date_classes.join()) { (format_post_date(&post.date)) }
            }
        }
    }
}

pub fn icon_text_card(
    header_title: &str,
    icon: Icon,
    icon_size: FontSize,
    title: &str,
    text: &str,
    additional: &[&'static str],
) -> Markup {
    let icon_classes = ClassList::new()
        .with_all(icon.css_classes())
        .with(icon_size.css_class())
        .with_all(additional);

    html! {
        div class=(card_classes().join()) {
            div.card-header {
                span {
                    i class=(icon_classes.join()) {}
                    (header_title)
                }
            }
            div.card-body {
                h5.card-title { (title) }
                p.card-text { (text) }
            }
        }
    }
}

pub fn tag_card(
    header_icon: Icon,
    header_icon_size: FontSize,
    header_title: &str,
    additional_icon_classes: &[&'static str],
    tags: &[&str],
) -> Markup {
    let icon_classes = ClassList::new()
        .with_all(header_icon.css_classes())
        .with(header_icon_size.css_class())
        .with_all(additional_icon_classes);

    html! {
        div class=(card_classes().join()) {
            div.card-header {
                span {
                    i class=(icon_classes.join()) {}
                    (header_title)
                }
            }
            div.card-body {
                @for tag in tags {
                    (tag_badge(tag, FontSize::Medium, TagColor::Cyan, &["pt-2", "pb-2", "mr-4", "mb-2"]))
                }
            }
        }
    }
}

/// 未经转义的 HTML 片段
pub fn raw_html(fragment: &str) -> PreEscaped<&str> {
    PreEscaped(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use url::Url;

    fn site() -> Site {
        Site::new(
            "Meet crelies",
            "desc",
            Url::parse("https://example.com").unwrap(),
            "en",
            vec!["/css/styles.css".to_string()],
        )
    }

    #[test]
    fn link_tag_uses_color_and_tag_url() {
        let html = link_tag(&Tag::from("apple"), FontSize::Small).into_string();
        assert!(html.starts_with("<a href=\"/tags/apple/\">"));
        assert!(html.contains("badge badge-pill badge-primary fs-12 text-monospace pt-2 pb-2 mr-2 mb-2"));
        assert!(html.contains(">apple</span>"));
    }

    #[test]
    fn navigation_marks_current_section() {
        let html = navigation_bar(&site(), Some(SectionId::Posts)).into_string();
        assert!(html.contains("<a class=\"nav-item nav-link active\" href=\"/posts/\">.posts</a>"));
        assert!(html.contains("<a class=\"nav-item nav-link\" href=\"/me/\">.me</a>"));
    }

    #[test]
    fn document_contains_stylesheets_and_title() {
        let html = document(&site(), "posts", "Posts", None, html! { p { "x" } }).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Posts | Meet crelies</title>"));
        assert!(html.contains("<link rel=\"stylesheet\" href=\"/css/styles.css\">"));
        assert!(html.contains("<link rel=\"canonical\" href=\"https://example.com/posts/\">"));
    }

    #[test]
    fn post_date_marker() {
        let date = Utc.with_ymd_and_hms(2020, 1, 6, 9, 0, 0).unwrap();
        assert_eq!(post_date(&date).into_string(), "<p class=\"post date\">Jan 6, 2020</p>");
    }

    #[test]
    fn titles_are_escaped() {
        assert_eq!(post_title("a < b").into_string(), "<h1>a &lt; b</h1>");
    }
}
