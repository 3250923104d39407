use std::io::{self, Read, Write};

// Records are read as their in-memory bytes and the format is little-endian.
#[cfg(not(target_endian = "little"))]
compile_error!("BSP records are decoded in place and require a little-endian target");

/// Plain-old-data that is read and written as its exact bytes.
pub trait BinaryData: bytemuck::Pod {
    fn read<R: Read>(buffer: &mut R) -> io::Result<Self> {
        let mut data = <Self as bytemuck::Zeroable>::zeroed();
        // `read_exact()` comes from `Read` impl for `&[u8]`
        buffer.read_exact(bytemuck::bytes_of_mut(&mut data))?;
        Ok(data)
    }

    fn write<W: Write>(&self, buffer: &mut W) -> io::Result<()> {
        buffer.write_all(bytemuck::bytes_of(self))
    }
}

impl<T: bytemuck::Pod> BinaryData for T {}

#[cfg(test)]
mod binaries_tests {
    use super::*;

    #[test]
    fn read_then_write() {
        let bytes = 0x1234_5678u32.to_le_bytes();
        let value = u32::read(&mut &bytes[..]).unwrap();
        assert_eq!(value, 0x1234_5678);

        let mut out = Vec::new();
        value.write(&mut out).unwrap();
        assert_eq!(out, bytes);
    }

    #[test]
    fn short_read() {
        let bytes = [0u8; 3];
        let err = u32::read(&mut &bytes[..]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
