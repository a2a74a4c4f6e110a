use std::ffi::OsString;

/// Rebuild the argv that parses back into this value.
///
/// Implementations and the parser must agree: feeding `to_args()` back
/// through `clap` yields an equal value.
pub trait ToArgs {
    fn to_args(&self) -> Vec<OsString>;
}
