use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::checker::ChapterCount;
use crate::error::{ChapterGuardError, Result};

/// UTF-8 byte-order mark; spreadsheet apps need it to detect UTF-8 CSV.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes `path,count,status` rows after a BOM.
///
/// # Errors
/// Returns an error if writing to `writer` fails.
pub fn write_csv<W: Write>(mut writer: W, chapters: &[ChapterCount]) -> Result<()> {
    writer.write_all(UTF8_BOM)?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["path", "count", "status"])?;
    for chapter in chapters {
        let count = chapter.count.to_string();
        csv_writer.write_record([
            chapter.display_path.as_str(),
            count.as_str(),
            chapter.status.as_str(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Creates (or truncates) the report file at `path`.
///
/// # Errors
/// Returns `FileWrite` if the file cannot be created, or a CSV error while writing.
pub fn write_csv_report(path: &Path, chapters: &[ChapterCount]) -> Result<()> {
    let file = File::create(path).map_err(|source| ChapterGuardError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(BufWriter::new(file), chapters)
}
