use std::{
    io::{Read, Seek, SeekFrom},
    mem,
    ops::Range,
};

use super::{consts::LumpType, error::FormatError};

/// A fixed-size record stored as a table in one lump of the file.
///
/// The record layout is the struct layout, so implementors are `#[repr(C)]` plain-old-data
/// with no padding and `size_of::<Self>()` is the on-disk record size.
pub trait Lump: bytemuck::Pod {
    fn max() -> usize;
    fn lump_type() -> LumpType;
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BSPLump {
    pub file_ofs: u32, // offset into file (bytes)
    pub file_len: u32, // length of lump (bytes)
}

impl BSPLump {
    pub fn new(file_ofs: u32, file_len: u32) -> Self {
        Self { file_ofs, file_len }
    }

    pub fn range(&self) -> Range<usize> {
        let start = self.file_ofs as usize;
        start..start.saturating_add(self.file_len as usize)
    }

    /// Number of whole `T` records in this lump.
    pub fn count<T: Lump>(&self) -> usize {
        self.file_len as usize / mem::size_of::<T>()
    }

    /// The raw bytes of this lump within `data`.
    pub fn slice<'a>(&self, lump: LumpType, data: &'a [u8]) -> Result<&'a [u8], FormatError> {
        data.get(self.range()).ok_or(FormatError::Truncated {
            lump,
            offset: self.file_ofs as usize,
            len: self.file_len as usize,
            file_len: data.len(),
        })
    }

    /// Decode this lump as a table of `record_size` byte records, each passed through `decode`.
    pub fn decode_with<T>(
        &self,
        lump: LumpType,
        record_size: usize,
        data: &[u8],
        decode: impl Fn(&[u8]) -> T,
    ) -> Result<Box<[T]>, FormatError> {
        self.check_aligned(lump, record_size)?;
        let bytes = self.slice(lump, data)?;
        Ok(bytes.chunks_exact(record_size).map(decode).collect())
    }

    pub fn decode<T: Lump>(&self, data: &[u8]) -> Result<Box<[T]>, FormatError> {
        let table = self.decode_with(
            T::lump_type(),
            mem::size_of::<T>(),
            data,
            bytemuck::pod_read_unaligned::<T>,
        )?;
        warn_over_limit::<T>(table.len());
        Ok(table)
    }

    /// Seek to this lump in `buffer` and read its bytes.
    pub fn read_bytes<R: Read + Seek>(
        &self,
        lump: LumpType,
        buffer: &mut R,
    ) -> Result<Box<[u8]>, FormatError> {
        let file_len = buffer.seek(SeekFrom::End(0)).unwrap_or(0) as usize;
        let truncated = FormatError::Truncated {
            lump,
            offset: self.file_ofs as usize,
            len: self.file_len as usize,
            file_len,
        };
        if self.range().end > file_len {
            return Err(truncated);
        }

        let mut bytes = bytemuck::zeroed_slice_box(self.file_len as usize);
        buffer
            .seek(SeekFrom::Start(self.file_ofs as u64))
            .and_then(|_| buffer.read_exact(&mut bytes))
            .map_err(|_| truncated)?;
        Ok(bytes)
    }

    /// Reader counterpart of [`BSPLump::decode`].
    pub fn read<T: Lump, R: Read + Seek>(&self, buffer: &mut R) -> Result<Box<[T]>, FormatError> {
        let record_size = mem::size_of::<T>();
        self.check_aligned(T::lump_type(), record_size)?;
        let bytes = self.read_bytes(T::lump_type(), buffer)?;
        let table: Box<[T]> = bytes
            .chunks_exact(record_size)
            .map(bytemuck::pod_read_unaligned::<T>)
            .collect();
        warn_over_limit::<T>(table.len());
        Ok(table)
    }

    fn check_aligned(&self, lump: LumpType, record_size: usize) -> Result<(), FormatError> {
        debug_assert!(record_size > 0);
        if self.file_len as usize % record_size != 0 {
            return Err(FormatError::UnalignedLump {
                lump,
                len: self.file_len as usize,
                record_size,
            });
        }
        Ok(())
    }
}

/// Encode a table back into its lump bytes.
pub fn encode<T: Lump>(table: &[T]) -> Vec<u8> {
    bytemuck::cast_slice(table).to_vec()
}

fn warn_over_limit<T: Lump>(len: usize) {
    if len > T::max() {
        log::warn!(
            "{} lump holds {} records, more than the format limit of {}",
            T::lump_type(),
            len,
            T::max()
        );
    }
}
