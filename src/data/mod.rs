pub mod dataset;
pub mod models;
pub mod resources;
pub mod source;

pub use dataset::Dataset;
pub use source::{DataSource, DirectorySource, HttpSource};
