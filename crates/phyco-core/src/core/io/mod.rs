//! # I/O Module
//!
//! File formats understood by PhycoSim: TOML scenario definition files
//! ([`scenario_file`]) and CSV comparison reports ([`report`]). Everything
//! else in the core layer is I/O-free.

pub mod report;
pub mod scenario_file;
