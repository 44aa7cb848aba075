//! PeerEval - peer-evaluation backend for organization periods and prokers.
//!
//! Built on Actix Web. Administrators manage periods, divisions, users,
//! prokers and indicators; creating an evaluation event snapshots the chosen
//! indicators and fans out evaluator assignments; members submit 1-5 scores
//! which are aggregated into anonymized per-evaluatee reports.
//!
//! # Architecture
//! - `cache`: cache layer (Moka/Redis)
//! - `config`: configuration management
//! - `entity`: SeaORM database entities
//! - `errors`: unified error handling
//! - `middlewares`: authentication/authorization middleware
//! - `models`: data model definitions
//! - `routes`: API route layer
//! - `runtime`: runtime lifecycle management
//! - `services`: business logic layer
//! - `storage`: data storage layer (SeaORM)
//! - `utils`: utility functions

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
