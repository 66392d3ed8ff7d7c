use maud::{html, Markup, DOCTYPE};

use super::components::tag_badge;
use super::styles::{ClassList, FontSize, TextColor};
use crate::models::{Me, TagColor};

/// 欢迎页面；没有个人资料时所有字段留空
pub fn render_welcome(me: Option<&Me>) -> Markup {
    let name = me.map(|m| m.name.as_str()).unwrap_or_default();
    let street = me.map(|m| m.street_address.as_str()).unwrap_or_default();
    let zip = me.map(|m| m.zip.as_str()).unwrap_or_default();
    let city = me.map(|m| m.city.as_str()).unwrap_or_default();
    let job_title = me.map(|m| m.job.title.as_str()).unwrap_or_default();
    let job_description = me.map(|m| m.job.description.as_str()).unwrap_or_default();

    let wrapper = ClassList::from(["page-wrapper", "container"]).with(TextColor::White.css_class());

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Welcome" }
            }
            body {
                div class=(wrapper.join()) {
                    h1.name { (name) }
                    address {
                        span.street { (street) }
                        br;
                        span.zip { (zip) }
                        " "
                        span.city { (city) }
                    }
                    section.job {
                        h2.job-title { (job_title) }
                        p.job-description { (job_description) }
                        ul.apps {
                            @for app in me.map(|m| m.job.apps.as_slice()).unwrap_or_default() {
                                li {
                                    @if let Some(url) = &app.url {
                                        a target="_blank" href=(url) { (app.name) }
                                    } @else {
                                        (app.name)
                                    }
                                }
                            }
                        }
                    }
                    div.tags {
                        @for tag in me.map(|m| m.tags.as_slice()).unwrap_or_default() {
                            (tag_badge(tag, FontSize::Medium, TagColor::Cyan, &["mr-2"]))
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Job, JobApp};

    #[test]
    fn renders_profile_fields() {
        let me = Me {
            name: "Jane".to_string(),
            street_address: "1 Main St".to_string(),
            zip: "00000".to_string(),
            city: "Town".to_string(),
            job: Job {
                title: "Eng".to_string(),
                description: "d".to_string(),
                apps: vec![JobApp {
                    name: "Tickets".to_string(),
                    url: None,
                }],
            },
            tags: vec!["Skier".to_string()],
        };

        let html = render_welcome(Some(&me)).into_string();
        assert!(html.contains("<h1 class=\"name\">Jane</h1>"));
        assert!(html.contains("<span class=\"street\">1 Main St</span>"));
        assert!(html.contains("<li>Tickets</li>"));
        assert!(html.contains(">Skier</span>"));
    }

    #[test]
    fn missing_profile_renders_empty_fields() {
        let html = render_welcome(None).into_string();
        assert!(html.contains("<h1 class=\"name\"></h1>"));
        assert!(html.contains("<ul class=\"apps\"></ul>"));
    }
}
