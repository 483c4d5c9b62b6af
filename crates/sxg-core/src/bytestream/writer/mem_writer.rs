/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! In-memory sinks, available with and without `std`

use crate::bytestream::{SxgByteWriterTrait, SxgIoError};

impl SxgByteWriterTrait for &mut [u8] {
    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize, SxgIoError> {
        // taken from the Write impl of std
        let amt = core::cmp::min(buf.len(), self.len());
        let (a, b) = core::mem::take(self).split_at_mut(amt);
        a.copy_from_slice(&buf[..amt]);
        *self = b;
        Ok(amt)
    }

    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), SxgIoError> {
        if buf.len() > self.len() {
            return Err(SxgIoError::NotEnoughBuffer(buf.len(), self.len()));
        }
        let (a, b) = core::mem::take(self).split_at_mut(buf.len());
        a.copy_from_slice(buf);
        *self = b;

        Ok(())
    }

    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), SxgIoError> {
        if N > self.len() {
            return Err(SxgIoError::NotEnoughBuffer(N, self.len()));
        }
        let (a, b) = core::mem::take(self).split_at_mut(N);
        a.copy_from_slice(buf);
        *self = b;
        Ok(())
    }

    fn flush_bytes(&mut self) -> Result<(), SxgIoError> {
        Ok(())
    }

    fn reserve_capacity(&mut self, _: usize) -> Result<(), SxgIoError> {
        // can't really pre-allocate anything here
        Ok(())
    }
}

impl SxgByteWriterTrait for &mut alloc::vec::Vec<u8> {
    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize, SxgIoError> {
        self.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), SxgIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), SxgIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn flush_bytes(&mut self) -> Result<(), SxgIoError> {
        Ok(())
    }

    fn reserve_capacity(&mut self, size: usize) -> Result<(), SxgIoError> {
        self.reserve(size);
        Ok(())
    }
}
