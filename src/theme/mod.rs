pub mod components;
pub mod renderer;
pub mod styles;
pub mod welcome;

pub use renderer::{render, PageRequest};
pub use welcome::render_welcome;
