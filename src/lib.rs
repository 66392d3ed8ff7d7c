pub mod core;
pub mod models;
pub mod steps;
pub mod theme;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{Deployer, Engine, Pipeline, PublishingContext, PublishingStep};
pub use crate::models::{Config, Me, Post, Section, SectionId, Site, Tag};
pub use crate::theme::{render, PageRequest};
