pub mod config;
pub mod profile;
pub mod types;

pub use config::Config;
pub use profile::{Job, JobApp, Me};
pub use types::{Post, Section, SectionId, Site, Tag, TagColor};
