use crate::{Error, Graph, NodeID, Position};

/// The canonical encoding of the Targets a Walk still has to visit.
///
/// A Signature is a bitmask over the [`TargetSet`] of one planning request: bit `i` is
/// set while Target `i` has not been absorbed yet. Since the Target list is sorted and
/// deduplicated, equal remaining sets always have equal Signatures, regardless of the
/// order the request listed them in. The empty Signature means "all Targets visited".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature(u64);

impl Signature {
    /// The Signature with no Targets remaining.
    pub const EMPTY: Signature = Signature(0);

    /// `true` once every Target has been absorbed.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The number of Targets still remaining.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// `true` while the Target at `bit` is still remaining.
    pub fn contains(self, bit: usize) -> bool {
        self.0 & (1 << bit) != 0
    }

    pub(crate) fn without(self, bit: usize) -> Signature {
        Signature(self.0 & !(1 << bit))
    }

    pub(crate) fn bits(self) -> Bits {
        Bits(self.0)
    }
}

/// Iterator over the set bit indices of a [`Signature`], lowest first.
pub(crate) struct Bits(u64);

impl Iterator for Bits {
    type Item = usize;
    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let bit = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(bit)
    }
}

/// The canonical Target table of a single planning request.
///
/// Created once per request from the raw Target list: sorted, deduplicated, positions
/// snapshotted. [`Signature`]s are only meaningful relative to the TargetSet they were
/// built from.
#[derive(Clone, Debug)]
pub struct TargetSet {
    ids: Vec<NodeID>,
    positions: Vec<Position>,
}

impl TargetSet {
    /// Canonicalizes `targets` against `graph`.
    ///
    /// Fails with [`Error::TooManyTargets`] when more than 64 distinct Targets are
    /// requested - the expanded state space is intractable long before that bound.
    pub fn new(graph: &Graph, targets: &[NodeID]) -> Result<TargetSet, Error> {
        let mut ids = targets.to_vec();
        ids.sort_unstable();
        ids.dedup();
        if ids.len() > 64 {
            return Err(Error::TooManyTargets(ids.len()));
        }
        let positions = ids.iter().map(|&id| graph[id].pos()).collect();
        Ok(TargetSet { ids, positions })
    }

    /// The number of distinct Targets.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// `true` for a request without Targets.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The Signature with every Target still remaining.
    pub fn full_signature(&self) -> Signature {
        if self.ids.len() == 64 {
            Signature(u64::MAX)
        } else {
            Signature((1 << self.ids.len()) - 1)
        }
    }

    /// The successor Signature of a Walk arriving at `node`: `sig` with `node` removed
    /// if it is a remaining Target, `sig` unchanged otherwise.
    pub fn consume(&self, sig: Signature, node: NodeID) -> Signature {
        match self.ids.binary_search(&node) {
            Ok(bit) => sig.without(bit),
            Err(_) => sig,
        }
    }

    /// The positions of the Targets still remaining in `sig`.
    pub fn remaining_positions(&self, sig: Signature) -> impl Iterator<Item = Position> + '_ {
        sig.bits().map(move |bit| self.positions[bit])
    }

    /// The IDs of the Targets still remaining in `sig`.
    pub fn remaining_ids(&self, sig: Signature) -> impl Iterator<Item = NodeID> + '_ {
        sig.bits().map(move |bit| self.ids[bit])
    }
}
