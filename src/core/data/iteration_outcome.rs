/// Result of iterating one plane sample.
///
/// Escape-time kernels only produce `Escaped`; `steps == max_iterations`
/// means the orbit never left the escape radius. Newton produces
/// `Converged` or `Unresolved`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IterationOutcome {
    Escaped { steps: u32 },
    Converged { root_id: u8, steps: u32 },
    Unresolved { steps: u32 },
}

impl IterationOutcome {
    /// Root id used for `Unresolved` in flat outcome tables.
    pub const UNRESOLVED_ROOT_ID: u8 = 0;

    #[must_use]
    pub fn steps(&self) -> u32 {
        match *self {
            Self::Escaped { steps } | Self::Converged { steps, .. } | Self::Unresolved { steps } => {
                steps
            }
        }
    }

    /// Root index for Newton outcomes, `None` for escape-time outcomes.
    #[must_use]
    pub fn root_id(&self) -> Option<u8> {
        match *self {
            Self::Escaped { .. } => None,
            Self::Converged { root_id, .. } => Some(root_id),
            Self::Unresolved { .. } => Some(Self::UNRESOLVED_ROOT_ID),
        }
    }
}
