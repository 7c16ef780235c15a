//! Pilgrim Clinic - Celestial health steward for the westward pilgrims.
//!
//! This crate implements the session core of a themed clinic: a decoy-gate
//! puzzle guarding the symptom picker, a merit ledger debited by paid
//! consultations, and an AI-backed gateway that turns symptoms or health
//! metrics into a narrative diagnosis.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
