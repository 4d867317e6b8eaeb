pub mod types;
pub mod write;

pub use types::ProjectRecord;
pub use write::{render_js, render_json, write_output, SELECT_PROJECTS_GLOBAL};
