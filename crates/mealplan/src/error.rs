use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("{0}")]
    Invalid(#[from] validator::ValidationErrors),

    #[error(
        "Insufficient candidates: need at least {required} recipes matching diet and time, found {found}"
    )]
    InsufficientCandidates { found: usize, required: usize },

    #[error("meal groups don't meet calorie goals after retries")]
    ConstraintUnsatisfiable { attempts: u32 },

    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}
