//! Core logic for a terminal arcade shooter: a ship at the bottom of the
//! field fires upward at descending enemy waves and collects temporary
//! power-ups.
//!
//! Everything in the library is pure data plus pure functions — time arrives
//! as millisecond timestamps, randomness through an injected `Rng` — so the
//! whole simulation is drivable (and testable) without a terminal.

pub mod collision;
pub mod entities;
pub mod game;
pub mod integrator;
pub mod score_store;
pub mod spawner;
