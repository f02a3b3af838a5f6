//! Runs the strategies on an 8-puzzle and prints their summaries.

use std::io::Write;

use derive_more::Display;
use owo_colors::OwoColorize;

use crate::algorithms::best_first::best_first_search;
use crate::algorithms::breadth_first::breadth_first_search;
use crate::algorithms::depth_first::depth_first_search;
use crate::problems::eight_puzzle::EightPuzzleAction;
use crate::problems::eight_puzzle::EightPuzzleCost;
use crate::problems::eight_puzzle::EightPuzzleHeuristicHamming;
use crate::problems::eight_puzzle::EightPuzzleHeuristicManhattan;
use crate::problems::eight_puzzle::EightPuzzleProblem;
use crate::problems::eight_puzzle::EightPuzzleSpace;
use crate::problems::eight_puzzle::EightPuzzleState;
use crate::search::SearchError;
use crate::search::Solution;

pub type EightPuzzleSolution = Solution<EightPuzzleState, EightPuzzleAction, EightPuzzleCost>;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    #[display("Depth-First Search")]
    #[value(alias = "dfs")]
    DepthFirst,
    #[display("Breadth-First Search")]
    #[value(alias = "bfs")]
    BreadthFirst,
    #[display("Best-First Search (Hamming Priority)")]
    BestFirstHamming,
    #[display("Best-First Search (Manhattan Priority)")]
    BestFirstManhattan,
}

impl Strategy {
    /// Every strategy, in reporting order.
    pub const ALL: [Strategy; 4] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::BestFirstHamming,
        Strategy::BestFirstManhattan,
    ];

    pub fn run(self, problem: EightPuzzleProblem) -> Result<EightPuzzleSolution, SearchError> {
        log::debug!("Running {self}");
        match self {
            Strategy::DepthFirst => depth_first_search::<
                EightPuzzleProblem,
                EightPuzzleSpace,
                EightPuzzleState,
                EightPuzzleAction,
                EightPuzzleCost,
            >(problem),
            Strategy::BreadthFirst => breadth_first_search::<
                EightPuzzleProblem,
                EightPuzzleSpace,
                EightPuzzleState,
                EightPuzzleAction,
                EightPuzzleCost,
            >(problem),
            Strategy::BestFirstHamming => best_first_search::<
                EightPuzzleHeuristicHamming,
                EightPuzzleProblem,
                EightPuzzleSpace,
                EightPuzzleState,
                EightPuzzleAction,
                EightPuzzleCost,
            >(problem),
            Strategy::BestFirstManhattan => best_first_search::<
                EightPuzzleHeuristicManhattan,
                EightPuzzleProblem,
                EightPuzzleSpace,
                EightPuzzleState,
                EightPuzzleAction,
                EightPuzzleCost,
            >(problem),
        }
    }
}

/// Writes the summary of a run followed by a blank line.
///
/// ```text
/// Algorithm: Breadth-First Search
/// Number of states enqueued: 386
/// Number of moves: 9
/// ```
pub fn write_summary<W: Write>(
    out: &mut W,
    strategy: Strategy,
    outcome: &Result<EightPuzzleSolution, SearchError>,
    show_path: bool,
) -> std::io::Result<()> {
    writeln!(out, "Algorithm: {}", strategy.bold())?;
    match outcome {
        Ok(solution) => {
            writeln!(out, "Number of states enqueued: {}", solution.enqueued)?;
            writeln!(out, "Number of moves: {}", solution.moves())?;
            if show_path {
                for (i, a) in solution.path.actions.iter().enumerate() {
                    writeln!(out, "Move {}: {}", i + 1, a.green())?;
                }
            }
        }
        Err(e @ SearchError::Exhausted { enqueued }) => {
            writeln!(out, "Number of states enqueued: {enqueued}")?;
            writeln!(out, "{}", e.red())?;
        }
    }
    writeln!(out)
}
