//! # Workflows Module
//!
//! This module provides the high-level entry points that tie the engine and
//! core together into complete physical procedures.
//!
//! ## Overview
//!
//! Workflows are the top-level API of the library. Where the engine exposes
//! individual formulas and generators, a workflow composes them into one
//! decision with a structured outcome, handling both atomic forms and
//! propagating the engine's errors unchanged.
//!
//! ## Key Components
//!
//! - [`absorption`] - The photon absorption/emission policy: given an atom and
//!   an incoming photon energy, decide whether the photon excites the atom to
//!   the next principal level and return the resulting atom.

pub mod absorption;
