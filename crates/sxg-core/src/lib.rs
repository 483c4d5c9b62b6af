/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by the sxg family of crates
//!
//! This crate provides the pieces the encoder crates build on
//!
//! - A bytestream writer with endian aware writes and pluggable sinks
//! - Color vocabulary for indexed low-color images
//! - Encoder options shared by the format crates
//! - A log shim that forwards to the `log` crate when enabled
//!
//! This library is `#[no_std]` with the `alloc` feature needed for
//! defining `Vec` which we need for in-memory sinks.
//!
//! # Features
//!  - `std`: Enables `std` facilities such as writing into a file.
//!
//!  - `log`: Forwards the logging macros to the `log` crate, otherwise
//!     they compile to nothing.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub mod bytestream;
pub mod color;
pub mod log;
pub mod options;
pub mod serde;
