use tracing::{debug, info};

use crate::core::error::StepError;
use crate::core::loader::ContentLoader;
use crate::core::pipeline::PublishingStep;
use crate::models::SectionId;

/// 为没有标题的分区设置默认标题
pub fn add_section_titles() -> PublishingStep {
    PublishingStep::step("Add section titles", |context| {
        context.mutate_all_sections(|section| {
            if section.title.is_empty() {
                section.title = section.id.default_title().to_string();
                debug!("分区 {} 使用默认标题 {}", section.id, section.title);
            }
        });
        Ok(())
    })
}

/// 从内容目录加载所有分区的 Markdown 文件
pub fn add_markdown_files() -> PublishingStep {
    PublishingStep::step("Add Markdown files", |context| {
        let loader = ContentLoader::new(&context.content_dir);

        for id in SectionId::ALL {
            let loaded = loader.load_section(id)?;
            let section = context.site.section_mut(id);
            if let Some(title) = loaded.title {
                section.title = title;
            }
            section.posts.extend(loaded.posts);
        }

        info!("共加载 {} 篇文章", context.site.all_posts().count());
        Ok(())
    })
}

/// 每个分区内按日期降序排列，日期相同时按标题排列
pub fn sort_items_by_date() -> PublishingStep {
    PublishingStep::step("Sort items by date", |context| {
        context.mutate_all_sections(|section| {
            section
                .posts
                .sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.title.cmp(&b.title)));
        });
        Ok(())
    })
}

/// 所有文章都必须至少有一个标签
pub fn ensure_all_items_are_tagged() -> PublishingStep {
    PublishingStep::step("Ensure all items are tagged", |context| {
        match context.site.all_posts().find(|post| post.tags.is_empty()) {
            Some(post) => Err(StepError::UntaggedItem {
                path: post.path.clone(),
            }),
            None => Ok(()),
        }
    })
}
