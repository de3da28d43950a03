/// An error type for failures of classifier construction, training and classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassifierError {
    /// Retrieval or classification was attempted with zero training data.
    EmptyCorpus,
    /// A plurality vote was requested over zero candidates.
    EmptyVote,
    /// A classifier was constructed with a zero neighbour count.
    ZeroK,
}

/// A type alias for result type with `ClassifierError`.
pub type ClassifierResult<T> = Result<T, ClassifierError>;

impl std::fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifierError::EmptyCorpus => write!(f, "cannot classify with an empty corpus"),
            ClassifierError::EmptyVote => write!(f, "cannot resolve a vote with no candidates"),
            ClassifierError::ZeroK => write!(f, "neighbour count must be positive"),
        }
    }
}

impl std::error::Error for ClassifierError {}
