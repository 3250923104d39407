use std::{
    fs,
    io::{self, BufReader, Cursor},
    path::{Path, PathBuf},
};

/// A file read fully into memory. Loaders decode from [`VFile::data`] so that
/// parsing never interleaves with file system access.
#[derive(Default, Debug, Clone)]
pub struct VFile {
    pub path: PathBuf,
    pub data: Vec<u8>,
}

impl VFile {
    pub fn open(path: &Path) -> io::Result<Self> {
        match fs::read(path) {
            Ok(data) => {
                log::debug!("read {} bytes from {:?}", data.len(), path);
                Ok(Self {
                    path: path.to_owned(),
                    data,
                })
            }
            Err(e) => {
                log::error!("{:?} could not be read: {}", path, e);
                Err(e)
            }
        }
    }

    pub fn from_bytes(path: impl Into<PathBuf>, data: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            data,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn reader(&self) -> BufReader<Cursor<&[u8]>> {
        BufReader::new(Cursor::new(&self.data[..]))
    }
}

#[cfg(test)]
mod vfile_tests {
    use std::io::Read;

    use super::*;

    #[test]
    fn missing_file() {
        let err = VFile::open(Path::new("definitely/not/a/map.bsp")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn reader_yields_data() {
        let file = VFile::from_bytes("mem.bsp", vec![1, 2, 3]);
        assert_eq!(file.len(), 3);

        let mut out = Vec::new();
        file.reader().read_to_end(&mut out).unwrap();
        assert_eq!(out, [1, 2, 3]);
    }
}
