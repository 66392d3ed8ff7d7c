pub mod deploy;
pub mod engine;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod profile;
pub mod server;

pub use deploy::{Deployer, GitDeployer};
pub use engine::Engine;
pub use error::{DeployError, LoadError, PipelineError, ProfileError, StepError};
pub use pipeline::{Pipeline, PublishingContext, PublishingStep};
pub use profile::ProfileService;
pub use server::Server;
