//! Crate-internal walks along the ring. The deque itself only exposes its two ends, but `Debug`
//! and the invariant checks in the tests need to follow the links.
//!
//! ```text
//!    ┌─────────────────────────────────────┐
//!    v                                     │
//!  front <-> node <-> node <-> back ───────┘
//! ```
//!
//! A walk starts on one node and takes a fixed number of steps in one direction. On an intact ring
//! of `len` nodes, walking `len` steps visits every node once and ends up on the start again,
//! which is what [`Walk::position`] reports afterwards.

use crate::arena::{Link, Slots};

#[derive(Clone, Copy)]
pub(crate) enum Direction {
    Forward,
    #[cfg_attr(not(test), allow(dead_code))]
    Backward,
}

pub(crate) struct Walk<'ring, T> {
    nodes: &'ring Slots<T>,
    at: Option<Link>,
    remaining: usize,
    direction: Direction,
}

impl<'ring, T> Walk<'ring, T> {
    pub(crate) fn new(
        nodes: &'ring Slots<T>,
        start: Option<Link>,
        steps: usize,
        direction: Direction,
    ) -> Self {
        Self {
            nodes,
            at: start,
            remaining: steps,
            direction,
        }
    }

    /// The node the next step would yield. Once every step is taken, this is where the walk
    /// ended up.
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn position(&self) -> Option<Link> {
        self.at
    }

    /// Element values instead of links.
    pub(crate) fn values(self) -> impl Iterator<Item = &'ring T> {
        let nodes = self.nodes;
        self.map(move |link| &nodes[link].data)
    }
}

impl<'ring, T> Iterator for Walk<'ring, T> {
    type Item = Link;

    fn next(&mut self) -> Option<Link> {
        if self.remaining == 0 {
            return None;
        }

        let current = self.at?;
        let node = &self.nodes[current];
        self.at = Some(match self.direction {
            Direction::Forward => node.next,
            Direction::Backward => node.prev,
        });
        self.remaining -= 1;

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.at {
            Some(_) => (self.remaining, Some(self.remaining)),
            None => (0, Some(0)),
        }
    }
}
