use crate::domain::model::Hint;
use crate::utils::error::Result;

/// A student-authored value under evaluation. Operations are addressed by
/// name so a half-finished scaffold can simply not list one yet; the trait
/// fixes everything else about their shape (no arguments beyond the
/// constructor's, integer result).
pub trait Subject {
    /// Display name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Names of the operations this value actually exposes.
    fn capabilities(&self) -> &'static [&'static str];

    /// Invoke a named operation. Must return `MissingCapability` for any
    /// name not listed by `capabilities`.
    fn invoke(&self, op: &str) -> Result<i64>;
}

/// Builds a subject from a case's constructor arguments. Implementations
/// must tolerate missing arguments (a student may have forgotten constructor
/// parameters) rather than panic.
pub trait Scaffold {
    fn construct(&self, args: &[i64]) -> Box<dyn Subject>;
}

/// Where emitted hints go. The CLI writes the platform envelope to stdout;
/// tests record into memory.
pub trait HintSink {
    fn emit(&mut self, hint: &Hint);
}
