//! 修改文章正文的步骤：每一步都把新的 HTML 插入到正文最前面，
//! 因此最后注册的步骤输出的内容位于正文最上方。

use crate::core::pipeline::PublishingStep;
use crate::models::{Post, SectionId};
use crate::theme::components::{link_tags, post_date, post_title};
use crate::theme::styles::FontSize;

fn prepend(post: &mut Post, html: String) {
    post.body.insert_str(0, &html);
}

pub fn insert_post_dates() -> PublishingStep {
    PublishingStep::step("Insert date in posts", |context| {
        context.mutate_items(SectionId::Posts, |post| {
            let date = post_date(&post.date).into_string();
            prepend(post, date);
        });
        Ok(())
    })
}

pub fn insert_post_tags() -> PublishingStep {
    PublishingStep::step("Insert tags in posts", |context| {
        context.mutate_items(SectionId::Posts, |post| {
            let tags = link_tags(&post.tags, FontSize::Small).into_string();
            prepend(post, tags);
        });
        Ok(())
    })
}

pub fn insert_post_titles() -> PublishingStep {
    PublishingStep::step("Insert titles in posts", |context| {
        context.mutate_items(SectionId::Posts, |post| {
            let title = post_title(&post.title).into_string();
            prepend(post, title);
        });
        Ok(())
    })
}
