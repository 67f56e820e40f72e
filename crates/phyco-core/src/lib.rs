//! # PhycoSim Core Library
//!
//! A deterministic simulation library for modeling CO₂ sequestration by
//! algae-based photobioreactors, from a single backyard unit up to fleets of
//! millions of reactors.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models
//!   (`ReactorParameters`, `PerReactorResult`), pure mathematical formulas for
//!   biomass production and CO₂ fixation, the energy-augmentation transforms
//!   (`augment`), the fuel-conversion chain, and file I/O utilities.
//!
//! - **[`engine`]: The Logic Core.** This layer orchestrates a simulation run.
//!   It holds the typed configuration (`SimulationConfig`), the scenario
//!   registry, the fleet aggregator, and the `SimulationEngine` that resolves
//!   a scenario, folds energy modules over its parameters, and scales the
//!   per-reactor result to fleet totals.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing
//!   layer. It ties the `engine` and `core` together into a complete
//!   simulation run, optionally extended with household-offset and fuel-mode
//!   accounting. It provides a simple and powerful entry point for end-users
//!   of the library.

pub mod core;
pub mod engine;
pub mod workflows;
