//! 内置的发布步骤

mod output;
mod posts;
mod sections;

pub use output::{deploy, generate_html, output_paths, page_requests};
pub use posts::{insert_post_dates, insert_post_tags, insert_post_titles};
pub use sections::{add_markdown_files, add_section_titles, ensure_all_items_are_tagged, sort_items_by_date};
