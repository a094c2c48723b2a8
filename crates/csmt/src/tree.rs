use core::marker::PhantomData;

use alloc::boxed::Box;
use alloc::vec::Vec;
use csmt_types::HashPolicy;
use serde::{Deserialize, Serialize};

use crate::node::Node;

/// A compact sparse Merkle tree over 64-bit keys.
///
/// The tree's shape is a function of its current contents alone: any two
/// operation sequences that leave the same key/value pairs produce
/// node-for-node identical trees, so equal contents always yield equal
/// root digests.
pub struct Csmt<P>
where
    P: HashPolicy,
{
    pub(crate) root: Option<Box<Node<P::Digest>>>,
    pub(crate) len: usize,
    pub(crate) policy: PhantomData<P>,
}

/// A membership proof: the digest chain from the proven leaf up to the
/// root, leaf first.
///
/// Empty exactly when the key is absent. The last element of a non-empty
/// proof equals the tree's root digest.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Opening<D> {
    /// The digest chain, ordered leaf to root.
    pub path: Vec<D>,
}

impl<D> Opening<D> {
    /// Wraps a digest chain as an opening.
    pub fn new(path: Vec<D>) -> Self {
        Self { path }
    }

    /// The number of digests in the chain; one per node on the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the opening is empty, i.e. the key was absent.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The proven leaf's digest.
    pub fn leaf(&self) -> Option<&D> {
        self.path.first()
    }

    /// The root digest the chain ends at.
    pub fn root(&self) -> Option<&D> {
        self.path.last()
    }

    /// The digest chain as a slice, ordered leaf to root.
    pub fn as_slice(&self) -> &[D] {
        &self.path
    }
}

impl<P> Csmt<P>
where
    P: HashPolicy,
{
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            policy: PhantomData,
        }
    }

    /// The number of live keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root digest, when the tree is non-empty.
    pub fn root_digest(&self) -> Option<&P::Digest> {
        self.root.as_deref().map(Node::digest)
    }

    /// The root node, for structural inspection.
    pub fn root(&self) -> Option<&Node<P::Digest>> {
        self.root.as_deref()
    }
}
