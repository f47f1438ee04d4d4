pub mod builder;
pub mod config;

pub use builder::{strip_extension, UploadBuilder, UploadFields, ValidationError};
pub use config::UploadConfig;
