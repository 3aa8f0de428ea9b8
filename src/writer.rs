use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::Builder;

use crate::config::Config;
use crate::document::Document;
use crate::error::{DocumentError, Result};
use crate::tokenizer::split_fields;

impl Document {
    /// Render the header and all rows, one line each, values joined by the field separator.
    pub fn to_text(&self) -> String {
        let endl = self.config().endl();
        let mut text = render_line(self.header(), self.config());
        text.push(endl);
        for row in self.rows() {
            text.push_str(&render_line(row.values(), self.config()));
            text.push(endl);
        }
        text
    }

    /// Write the header and all rows to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let endl = self.config().endl();
        write!(writer, "{}{}", render_line(self.header(), self.config()), endl)?;
        for row in self.rows() {
            write!(writer, "{}{}", render_line(row.values(), self.config()), endl)?;
        }
        Ok(())
    }

    /// Overwrite the file this document was loaded from with its current content. Does nothing
    /// for a document loaded from text.
    ///
    /// The file is truncated first, a failure while writing leaves it partially written. See
    /// [sync_atomic](Document::sync_atomic).
    pub fn sync(&self) -> Result<()> {
        let Some(path) = self.path() else {
            log::debug!("Document is not bound to a file, nothing to sync");
            return Ok(());
        };
        let write_failure = |source| DocumentError::WriteFailure {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(write_failure)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)
            .and_then(|_| writer.flush())
            .map_err(write_failure)?;
        log::info!("Synced {}, rows: {}", path.display(), self.row_count());
        Ok(())
    }

    /// Like [sync](Document::sync) but writes a temporary file in the same directory and renames it
    /// over the target, so the target holds either the old or the new content. An existing target
    /// keeps its permissions.
    pub fn sync_atomic(&self) -> Result<()> {
        let Some(path) = self.path() else {
            log::debug!("Document is not bound to a file, nothing to sync");
            return Ok(());
        };
        let write_failure = |source| DocumentError::WriteFailure {
            path: path.to_path_buf(),
            source,
        };
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = Builder::new()
            .prefix(".sync-")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(write_failure)?;
        {
            let mut writer = BufWriter::new(&mut tmp);
            self.write_to(&mut writer)
                .and_then(|_| writer.flush())
                .map_err(write_failure)?;
        }
        if let Ok(metadata) = fs::metadata(path) {
            tmp.as_file().set_permissions(metadata.permissions()).map_err(write_failure)?;
        }
        tmp.as_file().sync_all().map_err(write_failure)?;
        tmp.persist(path).map_err(|e| write_failure(e.error))?;
        log::info!("Synced {} atomically, rows: {}", path.display(), self.row_count());
        Ok(())
    }
}

fn render_line(values: &[String], config: &Config) -> String {
    let separator = config.field_separator().to_string();
    values.iter()
        .map(|value| render_value(value, config))
        .collect::<Vec<Cow<str>>>()
        .join(&separator)
}

fn render_value<'a>(value: &'a str, config: &Config) -> Cow<'a, str> {
    if !config.quote_on_write() || split_fields(value, config.field_separator()).len() == 1 {
        return Cow::Borrowed(value);
    }
    if value.contains(config.quote()) {
        log::warn!("Value {:?} contains both the field separator and a quote, writing it as is", value);
        return Cow::Borrowed(value);
    }
    Cow::Owned(format!("{}{}{}", config.quote(), value, config.quote()))
}
