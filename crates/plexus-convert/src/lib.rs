#![deny(missing_docs)]

//! Conversions from hypergraphs to derived graphs: the encapsulation DAG
//! recording which hyperedges nest inside others, and the s-line graph.

mod encapsulation;
mod line_graph;
mod options;

pub use encapsulation::{to_encapsulation_dag, to_encapsulation_dag_with, write_encapsulation_dag};
pub use line_graph::{to_line_graph, LineGraph};
pub use options::{DuplicatePolicy, EncapsulationOptions, LineGraphOptions, Relations};
