use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::Formatter;
use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use super::ProjectRecord;

/// Global the panel reads its dataset from.
pub const SELECT_PROJECTS_GLOBAL: &str = "window.SELECT_PROJECTS";

/// One-line JSON with `", "` and `": "` separators, the layout the panel's
/// bundled `projects.js` has always had.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Pretty JSON document (two-space indent, non-ASCII kept literal).
pub fn render_json(records: &[ProjectRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).context("serializing records to JSON")
}

/// `window.SELECT_PROJECTS = [...];` for a plain `<script>` include.
pub fn render_js(records: &[ProjectRecord]) -> Result<String> {
    let mut buf = Vec::with_capacity(records.len() * 1024);
    buf.extend_from_slice(SELECT_PROJECTS_GLOBAL.as_bytes());
    buf.extend_from_slice(b" = ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    records
        .serialize(&mut ser)
        .context("serializing records to JS")?;
    buf.push(b';');
    String::from_utf8(buf).context("JS output is not UTF-8")
}

/// Write `contents` to `path`: to a hidden tmp file next to it, then rename
/// over the target.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("creating directory {}", dir.display()))?;

    let file_name = path
        .file_name()
        .with_context(|| format!("output path {} has no file name", path.display()))?;
    let tmp_path = dir.join(format!(".{}.tmp", file_name.to_string_lossy()));

    let written = fs::File::create(&tmp_path)
        .with_context(|| format!("creating {}", tmp_path.display()))
        .and_then(|mut tmp| {
            tmp.write_all(contents.as_bytes())
                .with_context(|| format!("writing {}", tmp_path.display()))?;
            tmp.sync_all()
                .with_context(|| format!("flushing {}", tmp_path.display()))
        })
        .and_then(|()| {
            fs::rename(&tmp_path, path).with_context(|| {
                format!("renaming {} -> {}", tmp_path.display(), path.display())
            })
        });
    if written.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    written
}
