use macrotate_common::error::{CommandError, RotationError};

/// Failures collected over the lifetime of a run.
///
/// Successful changes never clear the ledger, so the threshold counts every
/// failure of the run and not only consecutive ones.
#[derive(Debug)]
pub struct FailureLedger {
    errors: Vec<CommandError>,
    threshold: usize,
}

impl FailureLedger {
    pub fn new(threshold: usize) -> Self {
        Self {
            errors: Vec::with_capacity(threshold),
            threshold,
        }
    }

    /// Appends `error`, returning it with the number of further failures tolerated.
    pub fn record(&mut self, error: CommandError) -> (&CommandError, usize) {
        let remaining = self.threshold.saturating_sub(self.errors.len() + 1);
        self.errors.push(error);
        (&self.errors[self.errors.len() - 1], remaining)
    }

    pub fn is_exhausted(&self) -> bool {
        self.errors.len() >= self.threshold
    }

    pub fn failure_count(&self) -> usize {
        self.errors.len()
    }

    /// Composite error listing every recorded failure in order.
    pub fn to_error(&self) -> RotationError {
        RotationError::TooManyFailures {
            messages: self.errors.iter().map(ToString::to_string).collect(),
        }
    }
}
