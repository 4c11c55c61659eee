//! Product catalog: CRUD with ownership resolved through the business
//! registry (product -> business -> owner).

pub mod domain;
pub mod repo;
pub mod repository;
pub mod service;

pub use service::ProductsService;
