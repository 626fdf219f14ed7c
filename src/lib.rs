#![warn(missing_docs)]

//! # `wiregrade`
//!
//! A grader for transformer bank wiring exercises, as practiced by line workers on a training board:
//! a row of primary buses overhead, a secondary rack below, and two or three transformer cans in between.
//! The learner draws point-to-point wires between terminals; this crate decides whether the result is a correct bank.
//!
//! Begin with a [`Scenario`] from the [`catalog()`], or assemble [`AcceptanceConfiguration`]s yourself with a
//! [`ConfigurationGenerator`](generator::ConfigurationGenerator) such as [`ClosedDeltaBank`](generator::ClosedDeltaBank).
//! Then grade a list of [`Connection`]s with [`Scenario::validate`] or [`validate()`].
//!
//! # Correctness
//! Correctness here is topological, not electrical. Two terminals are correctly joined if they end up on the same
//! electrical node, whatever path the wires take to get there.
//!
//! A high level overview is as follows:
//!
//! 1. The learner's wires form an undirected graph G whose vertices are terminals. The connected components of G are
//! the learner's electrical nodes; duplicate or reversed wires change nothing.
//! 2. A scenario carries many acceptance configurations, each one complete and independently valid wiring of the bank.
//! A configuration is a list of required groups; every group must lie within one node and no node may reach into two groups.
//! 3. A node reaching into two groups is a short circuit and disqualifies that configuration outright.
//! Otherwise the configuration scores the fraction of its groups that are each wholly inside a single node.
//! 4. The first configuration matched exactly passes the scenario. Failing that, the closest unshorted configuration
//! supplies the score and the diagnostics.
//!
//! Banks such as the closed delta have hundreds of valid wirings (which can lights, phase rotation, polarity of each winding);
//! the [`generator`] module enumerates them as a Cartesian product of small choice axes.

pub use configuration::{AcceptanceConfiguration, RequiredGroup};
pub use diagnostic::Diagnostic;
pub use error::{GradeError, Result};
pub use graph::{electrical_nodes, ElectricalNode};
pub use matcher::{match_configuration, MatchOutcome};
pub use scenario::{catalog, find, BusConfig, Scenario};
pub use selector::{validate, ValidationResult};
pub use terminal::{wire, Bushing, Connection, Terminal};

pub(crate) mod configuration;
pub(crate) mod diagnostic;
pub mod error;
pub mod generator;
pub(crate) mod graph;
pub(crate) mod matcher;
pub(crate) mod scenario;
pub(crate) mod selector;
pub(crate) mod terminal;
pub mod wiring;

#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::{scenario_ids, WasmGrader};
