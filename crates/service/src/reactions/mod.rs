//! Reaction ledger: one reaction per (user, product), upsert on repeat.

pub mod domain;
pub mod repo;
pub mod repository;
pub mod service;

pub use service::ReactionsService;
