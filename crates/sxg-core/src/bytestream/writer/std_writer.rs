/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! File-backed sink, only available with `std`

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::bytestream::{SxgByteWriterTrait, SxgIoError};

impl SxgByteWriterTrait for &mut BufWriter<File> {
    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize, SxgIoError> {
        self.write(buf).map_err(SxgIoError::StdIoError)
    }

    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), SxgIoError> {
        self.write_all(buf).map_err(SxgIoError::StdIoError)
    }

    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), SxgIoError> {
        self.write_all_bytes(buf)
    }

    fn flush_bytes(&mut self) -> Result<(), SxgIoError> {
        self.flush().map_err(SxgIoError::StdIoError)
    }

    fn reserve_capacity(&mut self, _: usize) -> Result<(), SxgIoError> {
        Ok(())
    }
}
