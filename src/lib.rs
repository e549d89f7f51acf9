
mod arena;
pub mod log;
pub mod menu;
mod ring;

use std::fmt;

use thiserror::Error;
use tracing::{debug, trace};

use arena::{Link, Node, Slots};
use ring::{Direction, Walk};

/// Returned when reading or removing from an empty [`Deque`]. Nothing was changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("Deque is empty.")]
pub struct Underflow;

/// Double-ended queue on top of a circular doubly linked ring of nodes.
///
/// The deque keeps a link to its front node. The back is always the node right before the
/// front, so both ends are reachable in _O_(1):
///
/// ```text
///    ┌──────────────────────────────┐
///    v                              │
///  front <-> node <-> node <-> back ┘
/// ```
///
/// Nodes live in a slot table and link to each other by slot index. Removing a node frees its
/// slot for the next insertion.
pub struct Deque<T> {
    nodes: Slots<T>,
    front: Option<Link>,
    len: usize,
}

impl<T> Deque<T> {
    pub const fn new() -> Self {
        Self {
            nodes: Slots::new(),
            front: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `item` in front of the current front. It becomes the new front.
    pub fn push_front(&mut self, item: T) {
        let link = self.link_before_front(item);
        self.front = Some(link);
    }

    /// Adds `item` behind the current back. The front stays where it is.
    pub fn push_back(&mut self, item: T) {
        self.link_before_front(item);
    }

    /// Removes the front node and returns its value. The node after it becomes the new front.
    pub fn pop_front(&mut self) -> Result<T, Underflow> {
        let front = self.front_link()?;
        Ok(self.evict(front))
    }

    /// Removes the back node and returns its value.
    pub fn pop_back(&mut self) -> Result<T, Underflow> {
        let front = self.front_link()?;
        let back = self.nodes[front].prev;
        Ok(self.evict(back))
    }

    pub fn peek_front(&self) -> Result<&T, Underflow> {
        let front = self.front_link()?;
        Ok(&self.nodes[front].data)
    }

    pub fn peek_back(&self) -> Result<&T, Underflow> {
        let front = self.front_link()?;
        let back = self.nodes[front].prev;
        Ok(&self.nodes[back].data)
    }

    /// Copy of the front value.
    pub fn front(&self) -> Result<T, Underflow>
    where
        T: Clone,
    {
        self.peek_front().cloned()
    }

    /// Copy of the back value.
    pub fn back(&self) -> Result<T, Underflow>
    where
        T: Clone,
    {
        self.peek_back().cloned()
    }

    fn front_link(&self) -> Result<Link, Underflow> {
        self.front.ok_or_else(|| {
            debug!("access to empty deque");
            Underflow
        })
    }

    /// Splices a new node holding `item` between the back and the front, i.e. makes it the new
    /// back. An empty deque gets a ring of one, with the new node as front.
    fn link_before_front(&mut self, item: T) -> Link {
        let link = match self.front {
            None => {
                let link = self.nodes.insert_with(|link| Node {
                    data: item,
                    prev: link,
                    next: link,
                });
                self.front = Some(link);
                link
            }
            Some(front) => {
                let back = self.nodes[front].prev;
                let link = self.nodes.insert_with(|_| Node {
                    data: item,
                    prev: back,
                    next: front,
                });
                self.nodes[back].next = link;
                self.nodes[front].prev = link;
                link
            }
        };

        self.len += 1;
        debug_assert_eq!(self.nodes.occupied(), self.len);
        trace!(?link, len = self.len, "linked node");
        link
    }

    /// Unlinks the node at `link`, closes the ring over the gap and releases the node. If it was
    /// the front, its successor takes over.
    ///
    /// `link` must be part of this deque's ring.
    fn evict(&mut self, link: Link) -> T {
        if self.len == 1 {
            self.front = None;
        } else {
            let Node { prev, next, .. } = self.nodes[link];
            self.nodes[prev].next = next;
            self.nodes[next].prev = prev;
            if self.front == Some(link) {
                self.front = Some(next);
            }
        }

        let node = self.nodes.remove(link);
        self.len -= 1;
        debug_assert_eq!(self.nodes.occupied(), self.len);
        trace!(?link, len = self.len, "evicted node");
        node.data
    }

    fn walk(&self, direction: Direction) -> Walk<'_, T> {
        Walk::new(&self.nodes, self.front, self.len, direction)
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.walk(Direction::Forward).values())
            .finish()
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Deque<T> {
    fn drop(&mut self) {
        while let Some(front) = self.front {
            self.evict(front);
        }
    }
}
