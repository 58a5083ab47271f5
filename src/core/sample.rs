use crate::utils::error::Result;

/// The unit behind the `sample` entry point.
///
/// Carries no state: every instance is independent and `run` never mutates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sample;

impl Sample {
    pub fn new() -> Self {
        Self
    }

    /// Entry point. Accepts any number of arguments and records them.
    pub fn run<I, S>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut count = 0usize;
        for (index, arg) in args.into_iter().enumerate() {
            tracing::debug!(index, arg = arg.as_ref(), "argument");
            count += 1;
        }

        tracing::info!(count, "Sample entry point invoked");
        Ok(())
    }
}
