pub mod sample;

pub use crate::domain::model::LogFormat;
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
