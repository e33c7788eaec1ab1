/// Failure of a checked arithmetic operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArithError {
    /// The exact result is larger than the integer width can hold.
    #[error("integer overflow in {operation}")]
    Overflow { operation: &'static str },
}

impl ArithError {
    pub(crate) const fn overflow(operation: &'static str) -> Self {
        ArithError::Overflow { operation }
    }
}
