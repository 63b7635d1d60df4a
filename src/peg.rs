//! Peg stack primitive for the iterative solver.
//!
//! A peg holds disk sizes bottom-to-top, strictly decreasing toward the
//! top (classic Hanoi legality). Disk sizes are positive integers;
//! emptiness is represented explicitly through `Option` rather than a
//! reserved sentinel value.

use smallvec::SmallVec;

/// Inline capacity covering every practical disk count without touching
/// the heap.
const INLINE_DISKS: usize = 32;

/// A bounded stack of disks on a single peg.
///
/// Capacity is the initial disk count of the run: callers guarantee that
/// no more than that many disks are ever in play, so `push` does not
/// re-check the bound.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Peg {
    disks: SmallVec<[u32; INLINE_DISKS]>,
}

impl Peg {
    /// Create an empty peg able to hold up to `capacity` disks.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            disks: SmallVec::with_capacity(capacity),
        }
    }

    /// Create a peg pre-loaded with disks `n..=1`, largest at the bottom,
    /// disk 1 on top.
    pub fn loaded(n: u32) -> Self {
        let mut peg = Self::with_capacity(n as usize);
        for disk in (1..=n).rev() {
            peg.push(disk);
        }
        peg
    }

    /// Place a disk on top of the peg.
    pub fn push(&mut self, disk: u32) {
        self.disks.push(disk);
    }

    /// Remove and return the top disk, or `None` if the peg is empty.
    pub fn pop(&mut self) -> Option<u32> {
        self.disks.pop()
    }

    /// The top disk without removing it, or `None` if the peg is empty.
    pub fn top(&self) -> Option<u32> {
        self.disks.last().copied()
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// True when the peg holds exactly disks `n..=1` in decreasing size
    /// bottom-to-top, i.e. the complete finished tower.
    pub fn is_full_tower(&self, n: u32) -> bool {
        self.disks.len() == n as usize
            && self
                .disks
                .iter()
                .zip((1..=n).rev())
                .all(|(&disk, want)| disk == want)
    }
}
