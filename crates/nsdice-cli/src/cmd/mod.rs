pub mod compare;
pub mod completions;
pub mod cycles;
pub mod edges;
pub mod stats;
