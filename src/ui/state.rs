//! Operation state shared by the UI state objects.

/// Progress of one user-triggered operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OpState {
    #[default]
    Idle,
    InFlight,
    /// The last attempt failed with a user-facing message.
    Failed(String),
}

impl OpState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, OpState::InFlight)
    }

    /// Message of the last failure, if the operation is in the failed state.
    pub fn failure(&self) -> Option<&str> {
        match self {
            OpState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
