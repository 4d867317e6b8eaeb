pub mod config;
pub mod error;
pub mod pipeline;
pub mod process;
pub mod schema;

pub use config::PanelPaths;
pub use error::PanelError;
pub use pipeline::{run, RunSummary};
pub use schema::ProjectRecord;
