//! Iteration helpers over discovered block lists
//!
//! Discovery hands back plain `Vec<BlockRef>`; the helpers here are the bulk
//! verbs scripts lean on. All of them visit elements in list order, and the
//! quantifiers short-circuit.

use super::block::BlockRef;

/// Bulk iteration verbs for slices of block handles
pub trait BlockSliceExt {
    /// Apply `f` to every block, in order, exactly once each
    fn for_each<F: FnMut(&BlockRef)>(&self, f: F);

    /// Whether every block satisfies `predicate`
    ///
    /// An empty list is vacuously true. Evaluation stops at the first miss.
    fn all<P: FnMut(&BlockRef) -> bool>(&self, predicate: P) -> bool;

    /// Whether at least one block satisfies `predicate`
    ///
    /// An empty list yields false. Evaluation stops at the first hit.
    fn any<P: FnMut(&BlockRef) -> bool>(&self, predicate: P) -> bool;

    /// New list holding, in the original order, exactly the blocks that
    /// satisfy `predicate`
    fn filtered<P: FnMut(&BlockRef) -> bool>(&self, predicate: P) -> Vec<BlockRef>;
}

impl BlockSliceExt for [BlockRef] {
    fn for_each<F: FnMut(&BlockRef)>(&self, mut f: F) {
        for block in self {
            f(block);
        }
    }

    fn all<P: FnMut(&BlockRef) -> bool>(&self, mut predicate: P) -> bool {
        self.iter().all(|block| predicate(block))
    }

    fn any<P: FnMut(&BlockRef) -> bool>(&self, mut predicate: P) -> bool {
        self.iter().any(|block| predicate(block))
    }

    fn filtered<P: FnMut(&BlockRef) -> bool>(&self, mut predicate: P) -> Vec<BlockRef> {
        self.iter()
            .filter(|block| predicate(block))
            .cloned()
            .collect()
    }
}
