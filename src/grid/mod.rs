//! Host boundary and discovery
//!
//! The grid terminal system is the host collaborator that owns every block.
//! The facade only talks to it through [`GridTerminal`]; the in-memory
//! implementation in [`memory`] doubles as the reference host model for
//! tests and benchmarks.

pub mod memory;

use crate::core::block::BlockRef;
use crate::core::KindTag;

/// Filter applied during discovery, before handles are returned
pub type BlockPredicate<'a> = dyn Fn(&BlockRef) -> bool + 'a;

/// Host-side terminal system owning the block collection
///
/// Discovery returns fresh handle lists in host order, every call. Name
/// matching semantics (case handling, substring versus exact) are the
/// host's own; the facade passes queries through verbatim.
pub trait GridTerminal: Send + Sync {
    /// Every terminal block on the grid
    fn blocks(&self) -> Vec<BlockRef>;

    /// Blocks whose name matches `name`, optionally post-filtered
    fn search_blocks_of_name(&self, name: &str, predicate: Option<&BlockPredicate>)
        -> Vec<BlockRef>;

    /// Blocks of one sub-kind, optionally post-filtered
    fn blocks_of_kind(&self, kind: KindTag, predicate: Option<&BlockPredicate>) -> Vec<BlockRef>;

    /// The first block whose name equals `name` exactly, if any
    fn block_with_name(&self, name: &str) -> Option<BlockRef>;
}
