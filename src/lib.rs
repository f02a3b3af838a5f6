use shadow_rs::shadow;

shadow!(build);

// Internals
// ---------
pub mod derank;
pub mod heap_primitives;

// Search space and problems
// -------------------------
pub mod problem;
pub mod search;
pub mod space;

// Problems
// --------
pub mod problems;

// Algorithms
// ----------
pub mod algorithms;
pub mod frontier;

// Harness
// -------
pub mod report;
