//! Greedy best-first search.
//!
//! Nodes are expanded by their heuristic value alone (no path cost), so the
//! solutions found are not guaranteed to be the shortest.

use std::cmp::Reverse;
use std::cmp::min;
use std::marker::PhantomData;

use crate::algorithms::graph_search::GraphSearch;
use crate::derank::derank;
use crate::frontier::Frontier;
use crate::problem::Heuristic;
use crate::problem::Problem;
use crate::search::SearchError;
use crate::search::SearchTreeIndex;
use crate::search::Solution;
use crate::space::Action;
use crate::space::Cost;
use crate::space::Space;
use crate::space::State;

/// The ranking tuple for best-first search
///
/// We prefer lower h-values, and tie break for the most recent push.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct BestFirstRank<C: Cost> {
    h: C,
    recency: Reverse<u64>,
}
impl<C> BestFirstRank<C>
where
    C: Cost,
{
    /// Ranks a node with heuristic value `h` that was the `push`-th one
    /// pushed.
    pub fn new(h: C, push: u64) -> Self {
        Self {
            h,
            recency: Reverse(push),
        }
    }
    pub fn h(&self) -> C {
        self.h
    }
}

const HEAP_ARITY: usize = 4usize;
#[inline(always)]
#[must_use]
fn up(i: usize) -> usize {
    crate::heap_primitives::index_parent::<HEAP_ARITY>(i)
}
#[inline(always)]
#[must_use]
fn down_left(i: usize) -> usize {
    crate::heap_primitives::index_first_children::<HEAP_ARITY>(i)
}
#[inline(always)]
#[must_use]
fn down_right(i: usize) -> usize {
    crate::heap_primitives::index_last_children::<HEAP_ARITY>(i)
}

/// A heap node for best-first search
///
/// Heap nodes carry just ranking information and an index to the actual
/// search node, so States are never compared by the heap.
#[derive(Clone, Debug)]
pub struct BestFirstHeapNode<C>
where
    C: Cost,
{
    /// The rank of this node that defines how good it is.
    pub rank: BestFirstRank<C>,
    /// The index of this node in the Search Tree. Ignored when ranking.
    pub node_index: SearchTreeIndex,
}

/// PartialEq is forwarded to self.rank's PartialEq
impl<C: Cost> PartialEq for BestFirstHeapNode<C> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.rank.eq(&other.rank)
    }
}
impl<C: Cost> Eq for BestFirstHeapNode<C> {}

/// PartialOrd is forwarded to Ord::cmp
impl<C: Cost> PartialOrd for BestFirstHeapNode<C> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
/// Ord is forwarded to self.rank's Ord
impl<C: Cost> Ord for BestFirstHeapNode<C> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank.cmp(&other.rank)
    }
}

/// A frontier ordered by a Heuristic.
///
/// A min-heap of `(BestFirstRank, SearchTreeIndex)`.
#[derive(Debug)]
pub struct PriorityFrontier<H, St, C>
where
    H: Heuristic<St, C>,
    St: State,
    C: Cost,
{
    open: Vec<BestFirstHeapNode<C>>,
    /// Number of pushes so far. Used for tie-breaking.
    pushes: u64,

    _phantom_heuristic: PhantomData<H>,
    _phantom_state: PhantomData<St>,
}

impl<H, St, C> Default for PriorityFrontier<H, St, C>
where
    H: Heuristic<St, C>,
    St: State,
    C: Cost,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<H, St, C> PriorityFrontier<H, St, C>
where
    H: Heuristic<St, C>,
    St: State,
    C: Cost,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            open: Vec::with_capacity(2048),
            pushes: 0u64,
            _phantom_heuristic: PhantomData,
            _phantom_state: PhantomData,
        }
    }

    /// The best node, if any.
    pub fn peek(&self) -> Option<&BestFirstHeapNode<C>> {
        self.open.first()
    }

    #[inline(always)]
    #[cfg(not(feature = "verify"))]
    pub(crate) fn verify_heap(&self) {
        // All good... (hopefully)
    }
    #[inline(always)]
    #[cfg(feature = "verify")]
    pub(crate) fn verify_heap(&self) {
        // Every node goes after its parent node, if any.
        for i in 1..self.open.len() {
            let p = up(i);
            debug_assert!(
                self.open[p].rank <= self.open[i].rank,
                "Node[{p}]={:?} !<= child [{i}]={:?}. Out of heap of len={}",
                self.open[p],
                self.open[i],
                self.open.len(),
            );
        }
    }

    /// Raises a node
    /// Returns it's new index
    #[inline(always)]
    fn sift_up(&mut self, index: usize) -> usize {
        debug_assert!(index < self.open.len(), "Index out of bounds");

        let mut pos = index;
        while pos != 0 {
            let parent = up(pos);
            if self.open[parent].rank <= self.open[pos].rank {
                break;
            }
            self.open.swap(parent, pos);
            pos = parent;
        }
        pos
    }

    /// Lowers a node
    /// Returns it's new index
    #[inline(always)]
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.open.len();
        debug_assert!(index < len, "Index out of bounds");

        loop {
            // Find the best child
            let mut child = down_left(index);
            if child >= len {
                break;
            }
            debug_assert_eq!(child + HEAP_ARITY, down_right(index) + 1);
            child += derank(&self.open[child..min(child + HEAP_ARITY, len)]);

            if self.open[index].rank <= self.open[child].rank {
                break;
            }
            self.open.swap(index, child);
            index = child;
        }
        index
    }
}

impl<H, St, C> Frontier<St> for PriorityFrontier<H, St, C>
where
    H: Heuristic<St, C>,
    St: State,
    C: Cost,
{
    const ORDER: &'static str = "Best-first";

    fn push(&mut self, node_index: SearchTreeIndex, s: &St) {
        self.verify_heap();

        let rank = BestFirstRank::new(H::h(s), self.pushes);
        self.pushes += 1;

        let heap_index = self.open.len();
        self.open.push(BestFirstHeapNode { rank, node_index });
        self.sift_up(heap_index);

        self.verify_heap();
    }

    fn pop(&mut self) -> Option<SearchTreeIndex> {
        self.verify_heap();

        if self.open.len() <= 1 {
            return self.open.pop().map(|n| n.node_index);
        }

        let best = self.open.swap_remove(0);
        self.sift_down(0);

        self.verify_heap();
        Some(best.node_index)
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.open.len()
    }
}

pub type BestFirstSearch<H, P, Sp, St, A, C> =
    GraphSearch<PriorityFrontier<H, St, C>, P, Sp, St, A, C>;

/// Finds a goal expanding the States that seem closer to it first.
pub fn best_first_search<H, P, Sp, St, A, C>(
    problem: P,
) -> Result<Solution<St, A, C>, SearchError>
where
    H: Heuristic<St, C>,
    P: Problem<Sp, St, A, C>,
    Sp: Space<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    BestFirstSearch::<H, P, Sp, St, A, C>::new(problem, PriorityFrontier::new()).solve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::breadth_first::breadth_first_search;
    use crate::problems::eight_puzzle::EightPuzzleAction;
    use crate::problems::eight_puzzle::EightPuzzleCost;
    use crate::problems::eight_puzzle::EightPuzzleHeuristicHamming;
    use crate::problems::eight_puzzle::EightPuzzleHeuristicManhattan;
    use crate::problems::eight_puzzle::EightPuzzleProblem;
    use crate::problems::eight_puzzle::EightPuzzleSpace;
    use crate::problems::eight_puzzle::EightPuzzleState;
    use crate::problems::eight_puzzle::GOAL;
    use crate::search::SearchTree;
    use crate::search::SearchTreeNode;

    fn hamming_search(
        p: EightPuzzleProblem,
    ) -> Result<Solution<EightPuzzleState, EightPuzzleAction, EightPuzzleCost>, SearchError> {
        best_first_search::<EightPuzzleHeuristicHamming, _, EightPuzzleSpace, _, _, _>(p)
    }
    fn manhattan_search(
        p: EightPuzzleProblem,
    ) -> Result<Solution<EightPuzzleState, EightPuzzleAction, EightPuzzleCost>, SearchError> {
        best_first_search::<EightPuzzleHeuristicManhattan, _, EightPuzzleSpace, _, _, _>(p)
    }

    #[test]
    fn ranking() {
        let c0: EightPuzzleCost = 0u32;
        let c1: EightPuzzleCost = 1u32;

        assert!(BestFirstRank::new(c0, 0) < BestFirstRank::new(c1, 1));
        assert!(BestFirstRank::new(c0, 5) < BestFirstRank::new(c1, 0));
        assert!(BestFirstRank::new(c1, 3) == BestFirstRank::new(c1, 3));

        // Same h-value, needs tie-breaking on recency
        let old = BestFirstRank::new(c1, 0);
        let new = BestFirstRank::new(c1, 1);
        assert!(new < old);
        assert_eq!(old.h(), new.h());
    }

    #[derive(Debug)]
    struct FirstTile;
    impl Heuristic<EightPuzzleState, EightPuzzleCost> for FirstTile {
        fn h(s: &EightPuzzleState) -> EightPuzzleCost {
            s.tile_at(0, 0) as EightPuzzleCost
        }
    }

    #[test]
    fn frontier_pops_by_rank() {
        let mut tree = SearchTree::<EightPuzzleState, EightPuzzleAction, EightPuzzleCost>::new();
        let mut open = PriorityFrontier::<FirstTile, EightPuzzleState, EightPuzzleCost>::new();

        let firsts = [5u8, 3, 8, 1, 3, 0, 7, 3, 2, 6, 4];
        let mut pushed = vec![];
        for (i, &first) in firsts.iter().enumerate() {
            let mut cells = [0u8, 1, 2, 3, 4, 5, 6, 7, 8];
            cells.swap(0, first as usize);
            let s = EightPuzzleState::try_from_cells(cells).unwrap();
            let n = tree.push(SearchTreeNode::new(s, None, 0));
            open.push(n, &s);
            pushed.push((first, i, n));
        }
        assert_eq!(open.len(), firsts.len());
        assert_eq!(open.peek().map(|n| n.rank.h()), Some(0));

        // Lowest first tile, newest first among equals.
        pushed.sort_by_key(|&(first, i, _)| (first, Reverse(i)));
        for (_, _, n) in pushed {
            assert_eq!(open.pop(), Some(n));
        }
        assert_eq!(open.pop(), None);
        assert!(open.is_empty());
    }

    #[test]
    fn regression_fixture_hamming() {
        let start = EightPuzzleState::new([[1, 8, 2], [0, 4, 3], [7, 6, 5]]);
        let solution = hamming_search(EightPuzzleProblem::new(start)).unwrap();

        assert_eq!(solution.goal, GOAL);
        assert_eq!(solution.enqueued, 10);
        assert_eq!(solution.moves(), 9);
        assert!(EightPuzzleSpace.valid_path(&solution.path));
    }

    #[test]
    fn regression_fixture_manhattan() {
        let start = EightPuzzleState::new([[1, 8, 2], [0, 4, 3], [7, 6, 5]]);
        let solution = manhattan_search(EightPuzzleProblem::new(start)).unwrap();

        assert_eq!(solution.goal, GOAL);
        assert_eq!(solution.enqueued, 10);
        assert_eq!(solution.moves(), 9);
        assert!(EightPuzzleSpace.valid_path(&solution.path));
    }

    #[test]
    fn never_shorter_than_breadth_first() {
        for rows in [
            [[1, 2, 3], [4, 5, 6], [7, 0, 8]],
            [[1, 2, 3], [0, 5, 6], [4, 7, 8]],
            [[4, 1, 3], [7, 2, 5], [0, 8, 6]],
            [[8, 1, 3], [4, 0, 2], [7, 6, 5]],
        ] {
            let start = EightPuzzleState::new(rows);
            let optimal = breadth_first_search(EightPuzzleProblem::new(start))
                .unwrap()
                .moves();

            for solution in [
                hamming_search(EightPuzzleProblem::new(start)).unwrap(),
                manhattan_search(EightPuzzleProblem::new(start)).unwrap(),
            ] {
                assert_eq!(solution.goal, GOAL);
                assert!(solution.moves() >= optimal, "{start:?}");
                assert!(EightPuzzleSpace.valid_path(&solution.path));
            }
        }
    }

    #[test]
    fn unsolvable_is_exhausted() {
        let start = EightPuzzleState::new([[2, 1, 3], [4, 5, 6], [7, 8, 0]]);
        assert!(matches!(
            hamming_search(EightPuzzleProblem::new(start)),
            Err(SearchError::Exhausted { .. })
        ));
        assert!(matches!(
            manhattan_search(EightPuzzleProblem::new(start)),
            Err(SearchError::Exhausted { .. })
        ));
    }
}
