//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent atoms
//! and their electron structure, providing the foundation for every shell-filling
//! and transition computation in the library.
//!
//! ## Overview
//!
//! The models module defines the core abstractions for representing atomic
//! structure, including quantum states, spins, and atoms. These models are
//! designed to:
//!
//! - **Represent electron structure** - Complete description of an electron's
//!   quantum numbers and an atom's electron configuration
//! - **Accept both atomic forms** - A tagged variant discriminates a bare
//!   electron count from a full, explicitly enumerated configuration
//! - **Maintain type safety** - Strong typing replaces runtime container
//!   inspection when deciding how an input should be interpreted
//! - **Stay immutable** - All models are plain values with no interior
//!   mutability, constructed fresh per call
//!
//! ## Key Components
//!
//! - [`quantum`] - Individual electron representation: spin and the
//!   `(n, l, m, s)` quantum-number quadruple
//! - [`atom`] - Atom representation with proton/neutron counts and either form
//!   of electron specification, plus the spin-input discriminator
//!
//! ## Usage
//!
//! The models form the backbone of every operation in the library. Most
//! computations start by constructing an atom in one of its two forms.
//!
//! ```ignore
//! use aufbau::core::models::atom::Atom;
//!
//! let carbon = Atom::with_count(6, 6, 6);
//! let filled = aufbau::engine::aufbau::fill(&carbon);
//! ```

pub mod atom;
pub mod quantum;
