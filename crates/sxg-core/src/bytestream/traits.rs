/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for writing encoded images in the sxg family of crates

use crate::bytestream::SxgIoError;

/// The writer trait implemented for the sxg library of encoders
///
/// Anything that implements this trait can be used as a sink
/// for writing encoded images
pub trait SxgByteWriterTrait {
    /// Write some bytes into the sink returning the number of bytes
    /// written or an error if something bad happened
    ///
    /// An implementation is free to write fewer bytes than are in `buf`,
    /// so the write cannot be guaranteed to be complete
    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize, SxgIoError>;
    /// Write all bytes to the sink or return an error if that
    /// isn't possible
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), SxgIoError>;
    /// Write a fixed number of bytes and error out if we can't write them
    ///
    /// This is provided to allow for optimized writes where possible
    /// (when the compiler can const fold them)
    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), SxgIoError>;
    /// Ensure bytes are written to the sink.
    ///
    /// Implementations backed by buffered storage should treat this
    /// like a flush, in-memory sinks have nothing to do
    fn flush_bytes(&mut self) -> Result<(), SxgIoError>;
    /// A hint to tell the implementation how big we expect the encoded
    /// output to be.
    ///
    /// An in-memory `Vec` can use this to reserve additional memory to
    /// prevent reallocation when encoding.
    ///
    /// This is just a hint, akin to calling `Vec::reserve`, and should be
    /// treated as such. If your implementation doesn't support it, e.g.
    /// files or mutable slices, it's okay to return `Ok(())`
    fn reserve_capacity(&mut self, size: usize) -> Result<(), SxgIoError>;
}
