//! Human-readable and JSON reports of a [`Summary`]

mod export;
mod tables;

pub use export::{ExportReport, ExtensionRow, FileRow};
pub use tables::{ALL_EXTENSIONS, extension_table, file_table, total_table};

use std::io::{self, Write};

use crate::stats::Summary;

pub const NO_DATA: &str = "No data: no files were processed.";
pub const ALL_MINIFIED: &str = "All files have a minified version.";

/// Write the text report: file count, missing minified files, then the
/// per-file, per-extension and totals tables.
pub fn write_report(out: &mut impl Write, summary: Option<&Summary>) -> io::Result<()> {
    let Some(summary) = summary else {
        return writeln!(out, "{}", NO_DATA);
    };

    writeln!(out, "{} files processed", summary.file_count())?;
    writeln!(out)?;

    let missing: Vec<_> = summary.missing_minified().collect();
    if missing.is_empty() {
        writeln!(out, "{}", ALL_MINIFIED)?;
    } else {
        writeln!(out, "{} files without a minified version:", missing.len())?;
        for entry in missing {
            writeln!(out, "  {}", entry.name)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "By file")?;
    writeln!(out, "{}", file_table(summary))?;
    writeln!(out)?;
    writeln!(out, "By extension")?;
    writeln!(out, "{}", extension_table(summary))?;
    writeln!(out)?;
    writeln!(out, "Total")?;
    writeln!(out, "{}", total_table(summary))?;
    Ok(())
}

/// Render the text report into a string
pub fn render_report(summary: Option<&Summary>) -> io::Result<String> {
    let mut buf = Vec::new();
    write_report(&mut buf, summary)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
