//! # Aufbau Core Library
//!
//! A library for modeling simplified electron-shell structure in light atoms and
//! computing photon absorption/emission energies for hydrogen-like transitions.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear separation of concerns,
//! making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`QuantumState`, `Atom`),
//!   the physical-constant configuration consumed by the transition math, and the
//!   static element-naming tables.
//!
//! - **[`engine`]: The Logic Core.** This layer implements the computational rules:
//!   quantum-number enumeration and shell construction (`shell`), the shell-filling
//!   assembler (`aufbau`), derived atomic properties (`properties`), and the
//!   Rydberg/photon-energy formulas (`transition`).
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer. It ties the
//!   `engine` and `core` together to execute complete physical procedures, such as deciding
//!   whether an incoming photon is absorbed by an atom. It provides a simple and powerful
//!   entry point for end-users of the library.

pub mod core;
pub mod engine;
pub mod workflows;
