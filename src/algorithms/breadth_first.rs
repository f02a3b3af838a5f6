//! Breadth-first search.
//!
//! Expands nodes in non-decreasing depth, so the first goal found is one with
//! the fewest actions.

use crate::algorithms::graph_search::GraphSearch;
use crate::frontier::FifoFrontier;
use crate::problem::Problem;
use crate::search::SearchError;
use crate::search::Solution;
use crate::space::Action;
use crate::space::Cost;
use crate::space::Space;
use crate::space::State;

pub type BreadthFirstSearch<P, Sp, St, A, C> = GraphSearch<FifoFrontier, P, Sp, St, A, C>;

pub fn breadth_first_search<P, Sp, St, A, C>(
    problem: P,
) -> Result<Solution<St, A, C>, SearchError>
where
    P: Problem<Sp, St, A, C>,
    Sp: Space<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    BreadthFirstSearch::<P, Sp, St, A, C>::new(problem, FifoFrontier::new()).solve()
}
