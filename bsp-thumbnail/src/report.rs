use std::fmt::{self, Write};

use quake::prelude::*;

use crate::view::TopDownView;

/// The lump directory, how many records each table holds, then the entity text.
pub fn listing(document: &BspDocument) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let header = document.header();

    writeln!(out, "BSP version {}", header.version)?;
    writeln!(out, "{:<10} {:>10} {:>10} {:>8}", "lump", "offset", "size", "count")?;
    for (lump, entry) in header.iter() {
        write!(out, "{:<10} {:>10} {:>10}", lump.name(), entry.file_ofs, entry.file_len)?;
        match lump.record_size() {
            Some(size) => writeln!(out, " {:>8}", entry.file_len as usize / size)?,
            None => writeln!(out)?,
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", document.entities().trim_end())?;
    Ok(out)
}

pub fn summary(
    file_len: usize,
    document: &BspDocument,
    view: &TopDownView,
) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Filesize: {file_len}")?;
    writeln!(out, "Models: {}", document.models().len())?;
    if let Some(model) = document.models().get(view.model) {
        writeln!(out, "Model {} bbox: {} - {}", view.model, model.mins(), model.maxs())?;
        writeln!(out, "Model {} origin: {}", view.model, model.origin())?;
    }
    let bounds = document.bounds();
    writeln!(out, "Map bounds: {} - {}", bounds.min, bounds.max)?;
    writeln!(out, "View bounds: {} - {}", view.bounds.min, view.bounds.max)?;
    writeln!(out, "Width: {} Height: {} Size: {}", view.width, view.height, view.size)?;
    writeln!(
        out,
        "Faces: {} visible of {}, {} lines",
        view.visible_faces().count(),
        view.faces.len(),
        view.line_count()
    )?;
    Ok(out)
}

#[cfg(test)]
mod report_tests {
    use quake::bsp::test_map::TestMap;

    use super::*;

    #[test]
    fn lists_directory() {
        let document = BspDocument::from_bytes(&TestMap::room().build()).unwrap();
        let text = listing(&document).unwrap();

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "BSP version 29");
        assert_eq!(lines.len(), 2 + 15 + 1 + 3);
        let faces = lines.iter().find(|l| l.starts_with("faces ")).unwrap();
        assert!(faces.ends_with(" 2"));
        let edges = lines.iter().find(|l| l.starts_with("edges ")).unwrap();
        assert!(edges.ends_with(" 9"));
        assert!(text.contains("\"classname\" \"worldspawn\""));
    }

    #[test]
    fn summarises_view() {
        let data = TestMap::room().build();
        let document = BspDocument::from_bytes(&data).unwrap();
        let view = TopDownView::new(&document, 0).unwrap();
        let text = summary(data.len(), &document, &view).unwrap();

        assert!(text.starts_with(&format!("Filesize: {}\nModels: 1\n", data.len())));
        assert!(text.contains("Width: 128 Height: 64 Size: 128"));
        assert!(text.contains("Faces: 1 visible of 2, 4 lines"));
    }
}
