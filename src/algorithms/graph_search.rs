//! The search loop shared by every algorithm.

use std::marker::PhantomData;

use rustc_hash::FxHashSet;
use thousands::Separable;

use crate::frontier::Frontier;
use crate::problem::Problem;
use crate::search::SearchError;
use crate::search::SearchStats;
use crate::search::SearchTree;
use crate::search::SearchTreeIndex;
use crate::search::SearchTreeNode;
use crate::search::Solution;
use crate::space::Action;
use crate::space::Cost;
use crate::space::Path;
use crate::space::Space;
use crate::space::State;

/// Graph search over a Problem, expanding nodes in the order given by a
/// Frontier.
///
/// States are added to the closed set when they are popped, not when they are
/// pushed. A State may then sit in the frontier several times, and popping an
/// already closed State still counts and expands it. Only children that were
/// not closed yet get pushed.
#[derive(Debug)]
pub struct GraphSearch<F, P, Sp, St, A, C>
where
    F: Frontier<St>,
    P: Problem<Sp, St, A, C>,
    Sp: Space<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    /// All the nodes ever generated. Owns the parent links.
    search_tree: SearchTree<St, A, C>,
    /// Generated but not yet expanded nodes.
    open: F,
    /// States that have been popped at least once.
    closed: FxHashSet<St>,
    /// Number of pops so far.
    enqueued: usize,

    problem: P,

    _phantom_space: PhantomData<Sp>,
    _phantom_action: PhantomData<A>,
}

impl<F, P, Sp, St, A, C> GraphSearch<F, P, Sp, St, A, C>
where
    F: Frontier<St>,
    P: Problem<Sp, St, A, C>,
    Sp: Space<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    /// Initialises the Search with the start State on an empty frontier.
    #[must_use]
    pub fn new(problem: P, open: F) -> Self {
        debug_assert!(open.is_empty());
        let start = problem.start();

        let mut search = Self {
            search_tree: SearchTree::with_capacity(1024),
            open,
            closed: FxHashSet::default(),
            enqueued: 0usize,

            problem,

            _phantom_space: PhantomData,
            _phantom_action: PhantomData,
        };

        let root = search
            .search_tree
            .push(SearchTreeNode::new(start, None, C::zero()));
        search.open.push(root, &start);
        log::debug!("{} search starting from {:?}", F::ORDER, start);

        search
    }

    /// Runs the search until a goal is popped.
    ///
    /// Fails once the frontier runs dry.
    pub fn find_goal(&mut self) -> Result<SearchTreeIndex, SearchError> {
        while let Some(node_index) = self.open.pop() {
            let node = &self.search_tree[node_index];
            let state = *node.state();
            let g: C = node.g();

            self.closed.insert(state);
            self.enqueued += 1;

            if self.problem.is_goal(&state) {
                log::info!(
                    "{} search reached a goal at depth {} after {} enqueued states",
                    F::ORDER,
                    g,
                    self.enqueued.separate_with_commas()
                );
                return Ok(node_index);
            }

            // Expand state
            let space = self.problem.space();
            for (s, a) in space.neighbours(&state) {
                if self.closed.contains(&s) {
                    continue;
                }
                let c: C = space.cost(&state, &a);
                let child = self
                    .search_tree
                    .push(SearchTreeNode::new(s, Some((node_index, a)), g + c));
                self.open.push(child, &s);
            }
        }

        log::warn!(
            "{} search exhausted its frontier after {} enqueued states ({} distinct)",
            F::ORDER,
            self.enqueued.separate_with_commas(),
            self.closed.len().separate_with_commas()
        );
        Err(SearchError::Exhausted {
            enqueued: self.enqueued,
        })
    }

    /// Runs the search to the first goal and rebuilds the Path to it.
    pub fn solve(mut self) -> Result<Solution<St, A, C>, SearchError> {
        let goal_index = self.find_goal()?;
        let path = self.path(goal_index);
        Ok(Solution {
            goal: *self.search_tree[goal_index].state(),
            enqueued: self.enqueued,
            path,
        })
    }

    /// The Path from the start to a generated node.
    #[must_use]
    pub fn path(&self, node_index: SearchTreeIndex) -> Path<St, A, C> {
        self.search_tree.path(self.problem.space(), node_index)
    }

    /// Number of States popped from the frontier so far.
    #[inline(always)]
    pub fn enqueued(&self) -> usize {
        self.enqueued
    }

    #[inline(always)]
    pub fn is_closed(&self, s: &St) -> bool {
        self.closed.contains(s)
    }

    #[inline(always)]
    pub fn search_tree(&self) -> &SearchTree<St, A, C> {
        &self.search_tree
    }

    #[inline(always)]
    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            enqueued: self.enqueued,
            generated: self.search_tree.len(),
            visited: self.closed.len(),
            frontier: self.open.len(),
        }
    }
}
