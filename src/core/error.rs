use thiserror::Error;

/// Errors surfaced for caller mistakes.
///
/// Malformed document numbers are a data-quality concern, not an error:
/// validators answer `false` and formatters pass the input through. This
/// enum covers the programmer-error side — nonsensical arguments and
/// broken configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FiscoError {
    /// A caller-supplied parameter makes no sense (e.g. zero installments).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The supplied configuration is unusable.
    #[error("configuration error: {0}")]
    Config(String),
}
