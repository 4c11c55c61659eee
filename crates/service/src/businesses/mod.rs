//! Business registry: CRUD over businesses with owner-authorization checks.

pub mod domain;
pub mod repo;
pub mod repository;
pub mod service;

pub use service::BusinessesService;
