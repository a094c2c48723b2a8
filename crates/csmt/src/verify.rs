use alloc::vec::Vec;
use csmt_types::{HashPolicy, Key};

use crate::node::{Descent, Node};
use crate::tree::{Csmt, Opening};

impl<P> Csmt<P>
where
    P: HashPolicy,
{
    /// Whether `key` is live in the tree.
    pub fn contains(&self, key: Key) -> bool {
        self.root.as_deref().map(|root| find(root, key)).unwrap_or(false)
    }

    /// Computes the membership proof for `key`: the digest chain of the
    /// nodes on its path, leaf first and root last.
    ///
    /// Empty when the key is absent.
    pub fn membership_proof(&self, key: Key) -> Opening<P::Digest> {
        let mut path = Vec::new();

        if let Some(root) = self.root.as_deref() {
            prove(root, key, &mut path);
        }

        Opening::new(path)
    }
}

/// Descends to `key` by the divergence discipline. Recursion depth is
/// bounded by the tree height, which the 64-bit key space caps.
fn find<D>(node: &Node<D>, key: Key) -> bool {
    match node {
        Node::Leaf { key: held, .. } => *held == key,
        Node::Internal { left, right, .. } => match Node::descend(key, left, right) {
            Descent::Left => find(left, key),
            Descent::Right => find(right, key),
            Descent::Outside => false,
        },
    }
}

/// Descends to `key` and, when found, records the digest of every node on
/// the path while unwinding, so the chain reads leaf to root.
fn prove<D>(node: &Node<D>, key: Key, path: &mut Vec<D>) -> bool
where
    D: Clone,
{
    match node {
        Node::Leaf { key: held, digest } => {
            let hit = *held == key;

            if hit {
                path.push(digest.clone());
            }

            hit
        }

        Node::Internal {
            left,
            right,
            digest,
            ..
        } => {
            let child = match Node::descend(key, left, right) {
                Descent::Left => left,
                Descent::Right => right,
                Descent::Outside => return false,
            };

            let hit = prove(child, key, path);

            if hit {
                path.push(digest.clone());
            }

            hit
        }
    }
}
