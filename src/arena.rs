//! Slot table holding the nodes of the ring.
//!
//! Nodes never move once inserted and are addressed by a [`Link`], which is just the index of
//! their slot. Evicted slots are threaded onto a free list and handed out again by the next
//! insertion, so the table only grows when every slot is occupied.
//!
//! ```text
//!   index:   0      1        2      3
//!   slots: [ node | vacant | node | vacant ]
//!   free ─► 3 ─► 1 ─► none
//! ```

use std::{mem, ops};

/// Index of a slot in [`Slots`]. Only meaningful for the table that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Link(usize);

pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) prev: Link,
    pub(crate) next: Link,
}

enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<Link> },
}

pub(crate) struct Slots<T> {
    slots: Vec<Slot<T>>,
    free: Option<Link>,
    occupied: usize,
}

impl<T> Slots<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            occupied: 0,
        }
    }

    /// Number of slots currently holding a node.
    pub(crate) fn occupied(&self) -> usize {
        self.occupied
    }

    /// Number of slots ever allocated, occupied or not.
    #[cfg(test)]
    pub(crate) fn allocated(&self) -> usize {
        self.slots.len()
    }

    /// Stores the node built by `make`, which receives the link the node will live at. That way
    /// a node can point at itself.
    pub(crate) fn insert_with(&mut self, make: impl FnOnce(Link) -> Node<T>) -> Link {
        match self.free {
            Some(link) => {
                let slot = &mut self.slots[link.0];
                let Slot::Vacant { next_free } = slot else {
                    panic!("free list points at occupied slot {}", link.0);
                };
                self.free = *next_free;
                *slot = Slot::Occupied(make(link));
                self.occupied += 1;
                link
            }
            None => {
                let link = Link(self.slots.len());
                self.slots.push(Slot::Occupied(make(link)));
                self.occupied += 1;
                link
            }
        }
    }

    /// Takes the node out of its slot and puts the slot on the free list.
    ///
    /// # Panics
    ///
    /// Panics if the slot is already vacant.
    pub(crate) fn remove(&mut self, link: Link) -> Node<T> {
        let slot = &mut self.slots[link.0];
        if let Slot::Vacant { .. } = slot {
            panic!("tried to remove vacant slot {}", link.0);
        }

        let Slot::Occupied(node) = mem::replace(slot, Slot::Vacant { next_free: self.free }) else {
            unreachable!();
        };
        self.free = Some(link);
        self.occupied -= 1;
        node
    }
}

impl<T> ops::Index<Link> for Slots<T> {
    type Output = Node<T>;

    fn index(&self, link: Link) -> &Node<T> {
        match &self.slots[link.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("dangling link to vacant slot {}", link.0),
        }
    }
}

impl<T> ops::IndexMut<Link> for Slots<T> {
    fn index_mut(&mut self, link: Link) -> &mut Node<T> {
        match &mut self.slots[link.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("dangling link to vacant slot {}", link.0),
        }
    }
}
