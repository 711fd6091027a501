//! The error type shared by graph construction and planning.

/// Everything that can go wrong while building a map or planning a Walk.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An [`Edge`](crate::Edge) was attached to a Node that is not its origin.
    ///
    /// This is not recoverable: it signals a bug in the calling code.
    #[error("node `{node}` is not the from-node on edge")]
    EdgeOriginMismatch {
        /// Display name of the Node the Edge was wrongly attached to
        node: String,
    },

    /// No Walk starting at the named source touches every requested Target.
    ///
    /// Recoverable: surface it to the user and let them pick a different source or
    /// Target set.
    #[error("targets not reachable from `{0}`")]
    Unreachable(String),

    /// The name passed to [`heuristic_by_name`](crate::heuristics::heuristic_by_name)
    /// does not identify a Heuristic.
    #[error("unknown heuristic `{0}`")]
    UnknownHeuristic(String),

    /// More distinct Targets were requested than a [`Signature`](crate::Signature)
    /// can hold.
    #[error("{0} targets exceed the supported maximum of 64")]
    TooManyTargets(usize),
}
