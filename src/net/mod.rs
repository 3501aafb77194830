//! Boundaries to the external NEAR SDK: wire types, the contract client trait
//! and the wallet session trait.

pub mod contract;
pub mod types;
pub mod wallet;
