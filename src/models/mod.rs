pub mod config;
pub mod transform;

pub use config::AppConfig;
pub use transform::Transform;
