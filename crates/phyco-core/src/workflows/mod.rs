//! # Workflows Module
//!
//! High-level entry points for users of PhycoSim. A workflow ties the
//! `engine` and `core` layers together into a complete run: scenario
//! resolution, energy augmentation, per-reactor computation, fleet scaling,
//! and the optional reporting extensions (household offset, fuel mode).
//!
//! - **Simulation Workflow** ([`simulate`]) - One full fleet simulation
//!   returning a [`simulate::SimulationReport`].

pub mod simulate;
