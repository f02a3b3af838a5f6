//! Implementation of search algorithms.
//!
//! All of them share the loop in `graph_search` and only differ on the
//! frontier they expand nodes from.

pub mod best_first;
pub mod breadth_first;
pub mod depth_first;
pub mod graph_search;
