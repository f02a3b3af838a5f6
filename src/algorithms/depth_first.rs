//! Depth-first search.
//!
//! Expands the most recently generated node first. Children are pushed in the
//! order the Space generates them, so the last one is explored first.

use crate::algorithms::graph_search::GraphSearch;
use crate::frontier::LifoFrontier;
use crate::problem::Problem;
use crate::search::SearchError;
use crate::search::Solution;
use crate::space::Action;
use crate::space::Cost;
use crate::space::Space;
use crate::space::State;

pub type DepthFirstSearch<P, Sp, St, A, C> = GraphSearch<LifoFrontier, P, Sp, St, A, C>;

pub fn depth_first_search<P, Sp, St, A, C>(problem: P) -> Result<Solution<St, A, C>, SearchError>
where
    P: Problem<Sp, St, A, C>,
    Sp: Space<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    DepthFirstSearch::<P, Sp, St, A, C>::new(problem, LifoFrontier::new()).solve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::breadth_first::breadth_first_search;
    use crate::problems::eight_puzzle::EightPuzzleProblem;
    use crate::problems::eight_puzzle::EightPuzzleSpace;
    use crate::problems::eight_puzzle::EightPuzzleState;
    use crate::problems::eight_puzzle::GOAL;

    #[test]
    fn regression_fixture() {
        let start = EightPuzzleState::new([[1, 8, 2], [0, 4, 3], [7, 6, 5]]);
        let solution = depth_first_search(EightPuzzleProblem::new(start)).unwrap();

        assert_eq!(solution.goal, GOAL);
        assert_eq!(solution.enqueued, 155_593);
        assert_eq!(solution.moves(), 102_587);
        assert_eq!(solution.path.steps().len(), 102_588);
        assert!(EightPuzzleSpace.valid_path(&solution.path));
    }

    #[test]
    fn follows_the_last_generated_child() {
        // One move away, but the blank moving right is generated first and
        // explored last.
        let start = EightPuzzleState::new([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        let solution = depth_first_search(EightPuzzleProblem::new(start)).unwrap();

        assert_eq!(solution.goal, GOAL);
        assert_eq!(solution.enqueued, 151_337);
        assert_eq!(solution.moves(), 106_329);
    }

    #[test]
    fn shallow_instance() {
        let start = EightPuzzleState::new([[4, 1, 3], [7, 2, 5], [0, 8, 6]]);
        let solution = depth_first_search(EightPuzzleProblem::new(start)).unwrap();
        let optimal = breadth_first_search(EightPuzzleProblem::new(start))
            .unwrap()
            .moves();

        assert_eq!(solution.enqueued, 3_100);
        assert_eq!(solution.moves(), 3_034);
        assert!(solution.moves() >= optimal);
        assert!(EightPuzzleSpace.valid_path(&solution.path));
    }

    #[test]
    fn start_at_goal() {
        let solution = depth_first_search(EightPuzzleProblem::new(GOAL)).unwrap();
        assert_eq!(solution.enqueued, 1);
        assert_eq!(solution.moves(), 0);
    }

    #[test]
    fn unsolvable_is_exhausted() {
        let start = EightPuzzleState::new([[2, 1, 3], [4, 5, 6], [7, 8, 0]]);
        assert!(!start.is_solvable());
        assert!(matches!(
            depth_first_search(EightPuzzleProblem::new(start)),
            Err(SearchError::Exhausted { .. })
        ));
    }
}
