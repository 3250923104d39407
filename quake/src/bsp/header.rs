use std::{fmt, mem};

use crate::binaries::BinaryData;

use super::{
    consts::{LumpType, BSP_VERSION, HEADER_LUMPS, HEADER_SIZE},
    error::FormatError,
    lump::{BSPLump, Lump},
};

#[repr(C)]
#[derive(Copy, Clone, Default, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BSPHeader {
    pub version: u32,                   // BSP file version
    pub lumps: [BSPLump; HEADER_LUMPS], // lump directory array
}

const _: () = assert!(mem::size_of::<BSPHeader>() == HEADER_SIZE);

impl fmt::Debug for BSPHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("BSPHeader");
        s.field("version", &self.version);
        for (lump, header) in self.iter() {
            s.field(lump.name(), header);
        }
        s.finish()
    }
}

impl BSPHeader {
    /// Read the lump directory from the start of `data`.
    pub fn parse(data: &[u8]) -> Result<Self, FormatError> {
        Self::read(&mut &data[..]).map_err(|_| FormatError::TruncatedHeader { len: data.len() })
    }

    pub fn get_lump_header(&self, lump: LumpType) -> &BSPLump {
        &self.lumps[lump as usize]
    }

    pub fn get_lump<T: Lump>(&self, data: &[u8]) -> Result<Box<[T]>, FormatError> {
        self.get_lump_header(T::lump_type()).decode(data)
    }

    pub fn iter(&self) -> impl Iterator<Item = (LumpType, &BSPLump)> {
        LumpType::ALL.into_iter().zip(self.lumps.iter())
    }

    /// Logs anything unexpected about the directory. Lump bounds are checked when a lump is decoded.
    pub fn validate(&self, file_len: usize) {
        if self.version != BSP_VERSION {
            log::warn!(
                "BSP version {} is not the expected {}, decoding anyway",
                self.version,
                BSP_VERSION
            );
        }
        for (lump, header) in self.iter() {
            if header.range().end > file_len {
                log::debug!("{lump} lump {:?} extends past the end of the file", header.range());
            }
        }
    }
}

#[cfg(test)]
mod header_tests {
    use super::*;

    fn directory() -> Vec<u8> {
        let mut data = BSP_VERSION.to_le_bytes().to_vec();
        for i in 0..HEADER_LUMPS as u32 {
            data.extend((HEADER_SIZE as u32 + i * 16).to_le_bytes());
            data.extend((i * 4).to_le_bytes());
        }
        data
    }

    #[test]
    fn test_header() {
        let data = directory();
        assert_eq!(data.len(), 124);

        let header = BSPHeader::parse(&data).unwrap();
        assert_eq!(header.version, 29);

        let edges = header.get_lump_header(LumpType::Edges);
        assert_eq!(edges.file_ofs, 124 + 12 * 16);
        assert_eq!(edges.file_len, 48);

        let names: Vec<_> = header.iter().map(|(lump, _)| lump.name()).collect();
        assert_eq!(names[0], "entities");
        assert_eq!(names[3], "vertices");
        assert_eq!(names[14], "models");
    }

    #[test]
    fn truncated_header() {
        let data = directory();
        assert_eq!(
            BSPHeader::parse(&data[..123]),
            Err(FormatError::TruncatedHeader { len: 123 })
        );
        assert_eq!(
            BSPHeader::parse(&[]),
            Err(FormatError::TruncatedHeader { len: 0 })
        );
    }
}
