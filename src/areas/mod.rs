//! Repository storage components
//!
//! - `database`: Loose object database on disk
//! - `memory_database`: In-memory object store with the same decoding path
//! - `repository`: Repository discovery and command coordination

pub mod database;
pub mod memory_database;
pub mod repository;
