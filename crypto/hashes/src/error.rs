use thiserror::Error;

/// Errors raised by a [`HashPrimitives`](crate::HashPrimitives) backend.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Error {
    #[error("HMAC key of {0} bytes was rejected by the hash backend")]
    HmacKeyLength(usize),
}
