use alloc::boxed::Box;
use csmt_types::{HashPolicy, Key};

use crate::node::{Descent, Node};
use crate::tree::Csmt;

impl<P> Csmt<P>
where
    P: HashPolicy,
{
    /// Inserts `value` at `key`, replacing the payload if the key is
    /// already live.
    pub fn insert(&mut self, key: Key, value: &P::Value) {
        let digest = P::leaf_hash(value);

        match self.root.take() {
            None => {
                self.root = Some(Box::new(Node::leaf(key, digest)));
                self.len += 1;
            }
            Some(root) => {
                let (root, grown) = put::<P>(root, key, digest);

                self.root = Some(root);

                if grown {
                    self.len += 1;
                }
            }
        }
    }

    /// Removes `key` if it is live.
    pub fn erase(&mut self, key: Key) {
        if let Some(root) = self.root.take() {
            let (root, removed) = remove::<P>(root, key);

            self.root = root;

            if removed {
                self.len -= 1;
            }
        }
    }
}

/// Builds the parent of two sibling subtrees, restoring the max-key and
/// merge-digest invariants along the rebuilt spine.
fn join<P>(left: Box<Node<P::Digest>>, right: Box<Node<P::Digest>>) -> Box<Node<P::Digest>>
where
    P: HashPolicy,
{
    let key = left.key().max(right.key());
    let digest = P::merge_hash(left.digest(), right.digest());

    Box::new(Node::Internal {
        key,
        digest,
        left,
        right,
    })
}

fn put<P>(node: Box<Node<P::Digest>>, key: Key, digest: P::Digest) -> (Box<Node<P::Digest>>, bool)
where
    P: HashPolicy,
{
    match *node {
        Node::Leaf {
            key: held,
            digest: old,
        } => {
            if held == key {
                (Box::new(Node::leaf(key, digest)), false)
            } else {
                let fresh = Box::new(Node::leaf(key, digest));
                let kept = Box::new(Node::leaf(held, old));

                let node = if key < held {
                    join::<P>(fresh, kept)
                } else {
                    join::<P>(kept, fresh)
                };

                (node, true)
            }
        }

        Node::Internal {
            key: max,
            digest: acc,
            left,
            right,
        } => match Node::descend(key, &left, &right) {
            Descent::Left => {
                let (left, grown) = put::<P>(left, key, digest);

                (join::<P>(left, right), grown)
            }

            Descent::Right => {
                let (right, grown) = put::<P>(right, key, digest);

                (join::<P>(left, right), grown)
            }

            // The key splits off at this level; splice a new leaf in as
            // this node's sibling, ordered by key.
            Descent::Outside => {
                let fresh = Box::new(Node::leaf(key, digest));
                let low = left.key().min(right.key());
                let kept = Box::new(Node::Internal {
                    key: max,
                    digest: acc,
                    left,
                    right,
                });

                let node = if key < low {
                    join::<P>(fresh, kept)
                } else {
                    join::<P>(kept, fresh)
                };

                (node, true)
            }
        },
    }
}

fn remove<P>(node: Box<Node<P::Digest>>, key: Key) -> (Option<Box<Node<P::Digest>>>, bool)
where
    P: HashPolicy,
{
    match *node {
        Node::Leaf {
            key: held,
            digest,
        } => {
            if held == key {
                (None, true)
            } else {
                (Some(Box::new(Node::leaf(held, digest))), false)
            }
        }

        Node::Internal {
            key: max,
            digest: acc,
            left,
            right,
        } => match Node::descend(key, &left, &right) {
            // Equidistant children mean the key was never in this
            // subtree; it would have been spliced in beside it.
            Descent::Outside => {
                let kept = Box::new(Node::Internal {
                    key: max,
                    digest: acc,
                    left,
                    right,
                });

                (Some(kept), false)
            }

            Descent::Left => match remove::<P>(left, key) {
                // The left child was the target leaf; its sibling takes
                // this node's place.
                (None, removed) => (Some(right), removed),
                (Some(left), true) => (Some(join::<P>(left, right)), true),
                (Some(left), false) => {
                    let kept = Box::new(Node::Internal {
                        key: max,
                        digest: acc,
                        left,
                        right,
                    });

                    (Some(kept), false)
                }
            },

            Descent::Right => match remove::<P>(right, key) {
                (None, removed) => (Some(left), removed),
                (Some(right), true) => (Some(join::<P>(left, right)), true),
                (Some(right), false) => {
                    let kept = Box::new(Node::Internal {
                        key: max,
                        digest: acc,
                        left,
                        right,
                    });

                    (Some(kept), false)
                }
            },
        },
    }
}
