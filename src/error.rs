use thiserror::Error;

pub type Result<T> = std::result::Result<T, DecodeError>;

/// Decoding never recovers internally; both kinds surface to the caller
/// unchanged from wherever they were raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Unexpected EOF. At {offset}, seek by {needed}, buffer size: {len}.")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        len: usize,
    },

    #[error("Unrecognized {field}: {value}")]
    InvalidEnumValue { field: &'static str, value: u8 },
}
