use thiserror::Error;

pub type MerkleResult<T> = std::result::Result<T, MerkleError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    #[error("Index {0} appears more than once in the entry table")]
    DuplicateIndex(u64),

    #[error("Entry table has no entry for index {0}")]
    MissingIndex(u64),

    #[error("Index {index} is out of range for a tree of {len} entries")]
    IndexOutOfRange { index: u64, len: usize },

    #[error("Tree produced too few sibling hashes for index {0}")]
    MalformedProof(u64),
}
