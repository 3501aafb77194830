//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The only locally owned state is the session snapshot taken at mount.
//! Question and answer data is never cached here; pages load it per visit.

pub mod session;
