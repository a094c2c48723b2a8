use alloc::string::String;

/// The key type indexing leaves of the compact sparse Merkle tree.
///
/// The full range is valid; there is no sentinel key.
pub type Key = u64;

/// The digest byte-length produced by the SHA-256 policy.
pub const DIGEST_LEN: usize = 32;

/// The digest array produced by the SHA-256 policy.
pub type Digest32 = [u8; DIGEST_LEN];

/// The hashing policy consumed by the tree.
///
/// Both functions are expected to be pure and total; the tree never calls
/// them with anything it could recover from, so a panicking policy leaves
/// the tree in an unspecified state.
///
/// `merge_hash` is non-commutative: the left/right order of children is
/// load-bearing for the resulting digests.
pub trait HashPolicy {
    /// The application payload hashed into a leaf.
    type Value: ?Sized;

    /// The digest representation chosen by the policy.
    ///
    /// Opaque to the tree; only cloning and equality are required.
    type Digest: Clone + PartialEq;

    /// Hashes a leaf payload into its digest.
    fn leaf_hash(value: &Self::Value) -> Self::Digest;

    /// Merges two child digests into the parent digest.
    fn merge_hash(lhs: &Self::Digest, rhs: &Self::Digest) -> Self::Digest;
}

/// A transparent policy for tests: leaves keep their payload, merges
/// concatenate.
///
/// Digests built under this policy are human-readable, which makes
/// structural expectations easy to write down.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityPolicy;

impl HashPolicy for IdentityPolicy {
    type Value = str;
    type Digest = String;

    fn leaf_hash(value: &str) -> String {
        String::from(value)
    }

    fn merge_hash(lhs: &String, rhs: &String) -> String {
        let mut out = String::with_capacity(lhs.len() + rhs.len());
        out.push_str(lhs);
        out.push_str(rhs);
        out
    }
}

#[cfg(feature = "sha2")]
pub use sha256::*;

#[cfg(feature = "sha2")]
mod sha256 {
    use super::*;

    use sha2::{Digest as _, Sha256};

    /// The SHA-256 policy with domain-separated inputs.
    ///
    /// Leaf and merge inputs are prefixed with distinct tags so that a
    /// leaf payload can never collide with an internal concatenation.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct Sha2Policy;

    impl Sha2Policy {
        /// Prefix for leaf hashes.
        pub const LEAF_PREFIX: &'static [u8] = b"0";

        /// Prefix for the left child of a merge.
        pub const MERGE_LEFT_PREFIX: &'static [u8] = b"1";

        /// Prefix for the right child of a merge.
        pub const MERGE_RIGHT_PREFIX: &'static [u8] = b"2";
    }

    impl HashPolicy for Sha2Policy {
        type Value = [u8];
        type Digest = Digest32;

        fn leaf_hash(value: &[u8]) -> Digest32 {
            Sha256::new()
                .chain_update(Self::LEAF_PREFIX)
                .chain_update(value)
                .finalize()
                .into()
        }

        fn merge_hash(lhs: &Digest32, rhs: &Digest32) -> Digest32 {
            Sha256::new()
                .chain_update(Self::MERGE_LEFT_PREFIX)
                .chain_update(lhs)
                .chain_update(Self::MERGE_RIGHT_PREFIX)
                .chain_update(rhs)
                .finalize()
                .into()
        }
    }
}
