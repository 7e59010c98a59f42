/// Epochs at or below this number predate the chain rollback and are
/// structurally unqueryable. This is a fixed property of the chain's
/// history, not a tunable.
pub const EARLY_EPOCH_CUTOFF: u64 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Expected: the epoch is below the rollback cutoff.
    Early,
    /// A queryable epoch failed anyway.
    Unexpected,
}

pub fn classify(epoch: u64) -> FailureClass {
    if epoch <= EARLY_EPOCH_CUTOFF {
        FailureClass::Early
    } else {
        FailureClass::Unexpected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundary() {
        assert_eq!(classify(0), FailureClass::Early);
        assert_eq!(classify(15), FailureClass::Early);
        assert_eq!(classify(16), FailureClass::Unexpected);
        assert_eq!(classify(1_000), FailureClass::Unexpected);
    }
}
