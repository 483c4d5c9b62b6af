/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A writer for the encoders in the sxg family of crates
//!
//! The writer is split into a sink trait, implemented for the
//! things we can write into, and a thin wrapper that adds endian
//! aware integer writes on top of any sink.

pub use self::traits::SxgByteWriterTrait;
pub use self::writer::{SxgIoError, SxgWriter};

mod traits;
mod writer;
