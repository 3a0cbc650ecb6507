//! Object store access types
//!
//! This module contains the types shared by every object store implementation:
//!
//! - `database_error`: Failure taxonomy for reading and decoding objects
//! - `object_store`: The read-only store interface
//! - `raw_object`: A decompressed object split into type tag and payload

pub mod database_error;
pub mod object_store;
pub mod raw_object;
