use core::fmt;
use core::marker::PhantomData;

use csmt_types::HashPolicy;

use crate::tree::{Csmt, Opening};

// Manual impls keep the bounds on `P::Digest` instead of the policy
// marker itself, which is never instantiated.

impl<P> Default for Csmt<P>
where
    P: HashPolicy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for Csmt<P>
where
    P: HashPolicy,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
            policy: PhantomData,
        }
    }
}

impl<P> fmt::Debug for Csmt<P>
where
    P: HashPolicy,
    P::Digest: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Csmt")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

/// Node-for-node equality: same shape, same keys, same digests.
impl<P> PartialEq for Csmt<P>
where
    P: HashPolicy,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.root == other.root
    }
}

impl<P> Eq for Csmt<P>
where
    P: HashPolicy,
    P::Digest: Eq,
{
}

impl<D> Default for Opening<D> {
    fn default() -> Self {
        Self::new(alloc::vec::Vec::new())
    }
}

impl<D> AsRef<[D]> for Opening<D> {
    fn as_ref(&self) -> &[D] {
        self.as_slice()
    }
}

impl<D> From<alloc::vec::Vec<D>> for Opening<D> {
    fn from(path: alloc::vec::Vec<D>) -> Self {
        Self::new(path)
    }
}
