//! Frontiers ("open lists") hold the generated but not yet expanded nodes.
//!
//! The order in which a frontier gives nodes back is the only difference
//! between the searches in `crate::algorithms`.

use std::collections::VecDeque;
use std::fmt::Debug;

use crate::search::SearchTreeIndex;
use crate::space::State;

pub trait Frontier<St>: Debug
where
    St: State,
{
    /// Short name of the expansion order, used for logging.
    const ORDER: &'static str;

    /// Adds a node. `s` is the State stored at `node_index`.
    fn push(&mut self, node_index: SearchTreeIndex, s: &St);
    /// Removes the next node to expand.
    fn pop(&mut self) -> Option<SearchTreeIndex>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last-in first-out frontier (a stack).
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<SearchTreeIndex>,
}

impl LifoFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: Vec::with_capacity(2048),
        }
    }
}

impl<St: State> Frontier<St> for LifoFrontier {
    const ORDER: &'static str = "LIFO";

    #[inline(always)]
    fn push(&mut self, node_index: SearchTreeIndex, _s: &St) {
        self.stack.push(node_index);
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<SearchTreeIndex> {
        self.stack.pop()
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// First-in first-out frontier (a queue).
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<SearchTreeIndex>,
}

impl FifoFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::with_capacity(2048),
        }
    }
}

impl<St: State> Frontier<St> for FifoFrontier {
    const ORDER: &'static str = "FIFO";

    #[inline(always)]
    fn push(&mut self, node_index: SearchTreeIndex, _s: &St) {
        self.queue.push_back(node_index);
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<SearchTreeIndex> {
        self.queue.pop_front()
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.queue.len()
    }
}
