//! Annealing state and neighborhood moves.

use rand::Rng;

/// A reversible change to a [`Placement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotMove {
    /// Exchange the slots of two distinct nodes.
    Swap { a: usize, b: usize },

    /// Move `node` from slot `from` to the free slot `to`.
    Relocate { node: usize, from: usize, to: usize },
}

/// An injective assignment of nodes to ring slots with O(1) free-slot
/// sampling.
///
/// `slots[i]` is the slot of node `i`. Occupancy and the free list are
/// kept in sync by [`apply`](Self::apply) and [`undo`](Self::undo).
#[derive(Debug, Clone)]
pub struct Placement {
    slots: Vec<usize>,
    owner: Vec<Option<usize>>,
    free: Vec<usize>,
    free_pos: Vec<usize>,
}

impl Placement {
    /// Places `k` nodes on `k` distinct slots of `m`, sampled uniformly.
    ///
    /// # Panics
    /// Panics if `k > m`.
    pub fn random<R: Rng>(k: usize, m: usize, rng: &mut R) -> Self {
        let slots = rand::seq::index::sample(rng, m, k).into_vec();
        Self::from_slots(slots, m)
    }

    /// Wraps an existing assignment.
    ///
    /// # Panics
    /// Panics if a slot is out of range or used twice.
    pub fn from_slots(slots: Vec<usize>, m: usize) -> Self {
        let mut owner = vec![None; m];
        for (node, &slot) in slots.iter().enumerate() {
            assert!(slot < m, "slot {slot} outside ring of {m}");
            assert!(owner[slot].is_none(), "slot {slot} assigned twice");
            owner[slot] = Some(node);
        }

        let mut free = Vec::with_capacity(m - slots.len());
        let mut free_pos = vec![usize::MAX; m];
        for slot in (0..m).filter(|&s| owner[s].is_none()) {
            free_pos[slot] = free.len();
            free.push(slot);
        }

        Self {
            slots,
            owner,
            free,
            free_pos,
        }
    }

    /// Slot per node.
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    /// Node occupying `slot`, if any.
    pub fn owner(&self, slot: usize) -> Option<usize> {
        self.owner[slot]
    }

    /// Number of unoccupied slots.
    pub fn num_free(&self) -> usize {
        self.free.len()
    }

    /// Draws a random move: a swap or a relocation with equal probability.
    ///
    /// Returns `None` when the drawn kind is impossible (fewer than two
    /// nodes for a swap, no free slot for a relocation).
    pub fn propose<R: Rng>(&self, rng: &mut R) -> Option<SlotMove> {
        let k = self.slots.len();
        if rng.random_bool(0.5) {
            if k < 2 {
                return None;
            }
            let a = rng.random_range(0..k);
            let mut b = rng.random_range(0..k - 1);
            if b >= a {
                b += 1;
            }
            Some(SlotMove::Swap { a, b })
        } else {
            if k == 0 || self.free.is_empty() {
                return None;
            }
            let node = rng.random_range(0..k);
            let to = self.free[rng.random_range(0..self.free.len())];
            Some(SlotMove::Relocate {
                node,
                from: self.slots[node],
                to,
            })
        }
    }

    /// Applies `mv`.
    pub fn apply(&mut self, mv: SlotMove) {
        match mv {
            SlotMove::Swap { a, b } => self.swap(a, b),
            SlotMove::Relocate { node, to, .. } => self.relocate(node, to),
        }
    }

    /// Reverts a move previously passed to [`apply`](Self::apply).
    pub fn undo(&mut self, mv: SlotMove) {
        match mv {
            SlotMove::Swap { a, b } => self.swap(a, b),
            SlotMove::Relocate { node, from, .. } => self.relocate(node, from),
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
        self.owner[self.slots[a]] = Some(a);
        self.owner[self.slots[b]] = Some(b);
    }

    fn relocate(&mut self, node: usize, to: usize) {
        let from = self.slots[node];
        debug_assert!(self.owner[to].is_none(), "relocation target occupied");

        // Take `to` out of the free list.
        let pos = self.free_pos[to];
        let last = self.free.len() - 1;
        self.free.swap(pos, last);
        self.free_pos[self.free[pos]] = pos;
        self.free.pop();
        self.free_pos[to] = usize::MAX;

        // Release `from`.
        self.free_pos[from] = self.free.len();
        self.free.push(from);

        self.owner[from] = None;
        self.owner[to] = Some(node);
        self.slots[node] = to;
    }
}
