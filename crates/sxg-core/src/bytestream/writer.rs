/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use core::fmt::Formatter;

use crate::bytestream::SxgByteWriterTrait;

mod mem_writer;
#[cfg(feature = "std")]
mod std_writer;

/// Errors that may arise when writing to a sink
pub enum SxgIoError {
    /// An error from the underlying `std::io` machinery
    #[cfg(feature = "std")]
    StdIoError(std::io::Error),
    /// The sink cannot take the requested number of bytes
    ///
    /// Contains `(requested, available)`
    NotEnoughBuffer(usize, usize),
    /// Any other error
    Generic(&'static str)
}

impl core::fmt::Debug for SxgIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            SxgIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            SxgIoError::NotEnoughBuffer(requested, available) => {
                writeln!(
                    f,
                    "Not enough buffer to write {requested} bytes, sink has space for {available}"
                )
            }
            SxgIoError::Generic(err) => {
                writeln!(f, "{}", err)
            }
        }
    }
}

/// Encapsulates a simple byte writer with support for endian
/// aware writes on top of any [`SxgByteWriterTrait`] sink
///
/// The writer keeps track of how many bytes passed through it,
/// encoders use that as the encoded size they report back.
pub struct SxgWriter<T: SxgByteWriterTrait> {
    inner:         T,
    bytes_written: usize
}

impl<T: SxgByteWriterTrait> SxgWriter<T> {
    /// Create a new writer that writes into `sink`
    pub fn new(sink: T) -> SxgWriter<T> {
        SxgWriter {
            inner:         sink,
            bytes_written: 0
        }
    }

    /// Return the number of bytes the writer has written
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Pass a size hint down to the sink, see
    /// [`reserve_capacity`](SxgByteWriterTrait::reserve_capacity)
    pub fn reserve(&mut self, size: usize) -> Result<(), SxgIoError> {
        self.inner.reserve_capacity(size)
    }

    /// Write a single byte into the sink or error out
    /// if there is no space for it
    pub fn write_u8_err(&mut self, byte: u8) -> Result<(), SxgIoError> {
        self.inner.write_const_bytes(&[byte])?;
        self.bytes_written += 1;
        Ok(())
    }

    /// Write `u16` as a little endian integer, returning an error if the
    /// sink cannot support a `u16` write
    pub fn write_u16_le_err(&mut self, value: u16) -> Result<(), SxgIoError> {
        self.inner.write_const_bytes(&value.to_le_bytes())?;
        self.bytes_written += 2;
        Ok(())
    }

    /// Write a fixed size buffer into the sink, erroring out if the
    /// sink cannot take all of it
    pub fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), SxgIoError> {
        self.inner.write_const_bytes(buf)?;
        self.bytes_written += N;
        Ok(())
    }

    /// Write all bytes in `buf` into the sink, erroring out if the
    /// sink cannot take all of them
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), SxgIoError> {
        self.inner.write_all_bytes(buf)?;
        self.bytes_written += buf.len();
        Ok(())
    }

    /// Flush the underlying sink
    pub fn flush(&mut self) -> Result<(), SxgIoError> {
        self.inner.flush_bytes()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::bytestream::SxgWriter;

    #[test]
    fn write_little_endian_to_vec() {
        let mut sink = Vec::new();
        let mut writer = SxgWriter::new(&mut sink);

        writer.write_u8_err(0x7F).unwrap();
        writer.write_u16_le_err(0xCAFE).unwrap();
        writer.write_all(&[1, 2, 3]).unwrap();

        assert_eq!(writer.bytes_written(), 6);
        assert_eq!(sink, vec![0x7F, 0xFE, 0xCA, 1, 2, 3]);
    }

    #[test]
    fn slice_sink_errors_when_full() {
        let mut storage = [0_u8; 2];
        let mut writer = SxgWriter::new(&mut storage[..]);

        writer.write_u16_le_err(0x1234).unwrap();
        assert!(writer.write_u8_err(0).is_err());
    }

    #[test]
    fn bytes_written_tracks_const_writes() {
        let mut sink = Vec::new();
        let mut writer = SxgWriter::new(&mut sink);

        writer.write_const_bytes(&[0_u8; 4]).unwrap();
        assert_eq!(writer.bytes_written(), 4);
    }
}
