//! Network-flow primitives and exhaustive cut enumeration.
//!
//! The pipeline for listing all minimum cuts:
//!
//! ```text
//! graph + capacities
//!   -> maxflow                 per-edge flow and the cut value
//!   -> reverse residual graph  certifies minimality
//!   -> SCC contraction         minimum cuts = closed component sets
//!   -> Provan-Shier search     with the minimal-active-vertex pivot
//!   -> fan-out + edge cuts     back in the original labeling
//! ```
//!
//! Listing *all* cuts skips the flow machinery entirely and drives the
//! same search with a dominator-tree pivot instead.

mod all_cuts;
mod maxflow;
mod mincuts;
mod provan_shier;
mod transform;

pub use all_cuts::{all_st_cuts, StCuts};
pub use maxflow::{maxflow, Maxflow};
pub use mincuts::{all_st_mincuts, StMinCuts};
pub use provan_shier::{provan_shier_search, PivotStrategy};
pub use transform::{
    even_tarjan_reduction, residual_graph, reverse_residual_graph, EvenTarjanReduction,
    ResidualGraph,
};
