use crate::space::Action;
use crate::space::Cost;
use crate::space::Space;
use crate::space::State;

/// A single-start search problem over a Space.
pub trait Problem<Sp, St, A, C>: std::fmt::Debug
where
    Sp: Space<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    fn space(&self) -> &Sp;
    fn start(&self) -> St;
    fn is_goal(&self, s: &St) -> bool;
}

/// An estimate of the distance from a State to the goal.
///
/// Goals are fixed for the problems it's used with, so only the State is
/// needed.
pub trait Heuristic<St, C>: std::fmt::Debug
where
    St: State,
    C: Cost,
{
    fn h(s: &St) -> C;
}
