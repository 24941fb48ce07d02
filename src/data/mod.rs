//! Database repository layer.
//!
//! Repositories handle persistence for the domain entities, always scoped to
//! live (non-soft-deleted) rows. Mutations go through a unit of work: they
//! are staged inside a transaction and become visible only when the unit is
//! committed.

pub mod client;
