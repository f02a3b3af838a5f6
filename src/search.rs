use nonmax::NonMaxUsize;
use thiserror::Error;

use crate::space::Action;
use crate::space::Cost;
use crate::space::Path;
use crate::space::Space;
use crate::space::State;

/// A reference to a `SearchTreeNode<St, A, C>` within its `SearchTree`.
///
/// `NonMaxUsize` lets `Option<(SearchTreeIndex, A)>` parents use the niche.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SearchTreeIndex {
    index: NonMaxUsize,
}

impl SearchTreeIndex {
    #[inline(always)]
    fn new(index: usize) -> Self {
        Self {
            index: NonMaxUsize::new(index).expect("search tree outgrew usize::MAX nodes"),
        }
    }

    #[inline(always)]
    pub fn get(&self) -> usize {
        self.index.get()
    }
}

/// A node of the search tree.
///
/// Nodes are never mutated after being pushed, so their parent chain is stable
/// for as long as the tree lives.
#[derive(Clone, Debug)]
pub struct SearchTreeNode<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    pub(crate) parent: Option<(SearchTreeIndex, A)>,
    pub(crate) state: St,
    pub(crate) g: C,
}

impl<St, A, C> SearchTreeNode<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    pub fn new(s: St, parent: Option<(SearchTreeIndex, A)>, g: C) -> Self {
        Self {
            parent,
            state: s,
            g,
        }
    }

    #[inline(always)]
    pub fn state(&self) -> &St {
        &self.state
    }
    #[inline(always)]
    pub fn parent(&self) -> Option<(SearchTreeIndex, A)> {
        self.parent
    }
    /// The action that produced this node, if it has a parent.
    #[inline(always)]
    pub fn action(&self) -> Option<A> {
        self.parent.map(|(_, a)| a)
    }
    #[inline(always)]
    pub fn g(&self) -> C {
        self.g
    }
}

/// All the nodes generated by a search.
///
/// Naturally forms a tree (a forest with a single root) as every node but the
/// start has a parent that was pushed before it. The tree only grows.
pub struct SearchTree<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    nodes: Vec<SearchTreeNode<St, A, C>>,
}

impl<St, A, C> SearchTree<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    #[inline(always)]
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    #[inline(always)]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub fn push(&mut self, node: SearchTreeNode<St, A, C>) -> SearchTreeIndex {
        debug_assert!(
            node.parent.is_none_or(|(p, _)| p.get() < self.nodes.len()),
            "Parents must be pushed before their children"
        );
        let index = SearchTreeIndex::new(self.nodes.len());
        self.nodes.push(node);
        index
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of actions between the root and a node.
    #[must_use]
    pub fn depth(&self, mut node_index: SearchTreeIndex) -> usize {
        let mut depth = 0usize;
        while let Some((parent_index, _)) = self[node_index].parent {
            depth += 1;
            node_index = parent_index;
        }
        depth
    }

    /// Rebuilds the Path from the root to a node by following parent links.
    #[must_use]
    pub fn path<Sp: Space<St, A, C>>(
        &self,
        space: &Sp,
        mut node_index: SearchTreeIndex,
    ) -> Path<St, A, C> {
        let e = &self[node_index];
        let mut path = Path::<St, A, C>::new_from_start(*e.state());

        while let Some((parent_index, a)) = self[node_index].parent {
            let p = &self[parent_index];
            let s = p.state();
            let c: C = space.cost(s, &a);
            debug_assert!(c != C::zero());

            path.append((*s, a), c);
            debug_assert!(node_index != parent_index);
            node_index = parent_index;
        }

        path.reverse();
        path
    }
}

impl<St, A, C> Default for SearchTree<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<St, A, C> std::ops::Index<SearchTreeIndex> for SearchTree<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    type Output = SearchTreeNode<St, A, C>;

    #[inline(always)]
    fn index(&self, index: SearchTreeIndex) -> &Self::Output {
        &self.nodes[index.get()]
    }
}

impl<St, A, C> std::fmt::Debug for SearchTree<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "SearchTree{{({} nodes)}}", self.len())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search exhausted its frontier after {enqueued} states without reaching a goal")]
    Exhausted { enqueued: usize },
}

/// The outcome of a successful search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    /// The goal State that was reached.
    pub goal: St,
    /// Number of States removed from the frontier, including the goal.
    pub enqueued: usize,
    /// The Path from the start to `goal`.
    pub path: Path<St, A, C>,
}

impl<St, A, C> Solution<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    /// Number of moves from the start to the goal.
    #[inline(always)]
    pub fn moves(&self) -> usize {
        self.path.len()
    }
}

/// Counters describing the work done by a search so far.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub enqueued: usize,
    pub generated: usize,
    pub visited: usize,
    pub frontier: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::eight_puzzle::EightPuzzleAction;
    use crate::problems::eight_puzzle::EightPuzzleCost;
    use crate::problems::eight_puzzle::EightPuzzleSpace;
    use crate::problems::eight_puzzle::EightPuzzleState;
    use crate::problems::eight_puzzle::GOAL;

    type Tree = SearchTree<EightPuzzleState, EightPuzzleAction, EightPuzzleCost>;
    type Node = SearchTreeNode<EightPuzzleState, EightPuzzleAction, EightPuzzleCost>;

    #[test]
    fn path_follows_parents() {
        let space = EightPuzzleSpace;
        let start = EightPuzzleState::new([[1, 2, 3], [4, 5, 6], [0, 7, 8]]);

        let mut tree = Tree::new();
        let root = tree.push(Node::new(start, None, 0));

        let a7 = EightPuzzleAction::new(7);
        let s1 = space.apply(&start, &a7).unwrap();
        let n1 = tree.push(Node::new(s1, Some((root, a7)), 1));

        let a8 = EightPuzzleAction::new(8);
        let s2 = space.apply(&s1, &a8).unwrap();
        let n2 = tree.push(Node::new(s2, Some((n1, a8)), 2));
        assert_eq!(s2, GOAL);

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.depth(root), 0);
        assert_eq!(tree.depth(n2), 2);
        assert_eq!(tree[n2].action(), Some(a8));
        assert_eq!(tree[root].action(), None);

        let path = tree.path(&space, n2);
        assert_eq!(path.start, Some(start));
        assert_eq!(path.end, Some(GOAL));
        assert_eq!(path.actions, vec![a7, a8]);
        assert_eq!(path.cost, 2);
        assert!(path.seems_valid());
        assert_eq!(path.steps(), vec![None, Some(a7), Some(a8)]);
        assert!(space.valid_path(&path));
    }

    #[test]
    fn path_to_root_is_empty() {
        let space = EightPuzzleSpace;
        let mut tree = Tree::new();
        let root = tree.push(Node::new(GOAL, None, 0));

        let path = tree.path(&space, root);
        assert!(path.is_empty());
        assert_eq!(path.start, path.end);
        assert_eq!(path.steps(), vec![None]);
        assert!(space.valid_path(&path));
    }
}
