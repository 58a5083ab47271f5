use crate::domain::model::LogFormat;

/// Effective settings the binary needs, whichever layer they came from.
pub trait ConfigProvider {
    fn verbose(&self) -> bool;
    fn log_format(&self) -> LogFormat;
    fn args(&self) -> &[String];
}
