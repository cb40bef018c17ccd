//! # agro-core
//!
//! Core types, ID prefixes, and error types for AgroSalud.
//!
//! This crate provides the foundational types shared across all AgroSalud crates:
//! - Entity structs for owner-scoped records (animals, vaccinations, checkups, etc.)
//! - Enums for animal kinds, species, roles, and departments
//! - Domain catalogs carried over from the record forms (vaccines per species)
//! - Input validation for new records
//! - The lightweight `AuthIdentity` passed between auth and storage
//! - Cross-cutting error types

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod validation;
