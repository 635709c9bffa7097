use comfy_table::{Cell, CellAlignment, Row, Table, presets::ASCII_MARKDOWN};

use crate::model::{ExtensionBucket, FileEntry};
use crate::stats::Summary;
use crate::util::{format_opt_size, format_percent, format_size};

const FILE_HEADER: [&str; 8] = [
    "File", "Raw", "Minified", "Raw gzip", "Min gzip", "Min ratio", "Gzip ratio", "Over wire",
];

const EXTENSION_HEADER: [&str; 8] = [
    "Extension", "Files", "Minified", "Src", "Dist", "Gzip", "Min ratio", "Gzip ratio",
];

/// Label of the all-extensions row
pub const ALL_EXTENSIONS: &str = "(all)";

fn new_table(header: [&str; 8]) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_MARKDOWN);
    table.set_header(header.to_vec());
    table
}

fn right(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

fn file_row(entry: &FileEntry) -> Row {
    let mut row = Row::new();
    row.add_cell(Cell::new(&entry.name));
    row.add_cell(right(format_opt_size(entry.unminified.map(|s| s.size))));
    row.add_cell(right(format_opt_size(entry.minified.map(|s| s.size))));
    row.add_cell(right(format_opt_size(entry.unminified.map(|s| s.gzip_size))));
    row.add_cell(right(format_opt_size(entry.minified.map(|s| s.gzip_size))));
    row.add_cell(right(format_percent(entry.minification_size_ratio())));
    row.add_cell(right(format_percent(entry.compression_size_ratio())));
    row.add_cell(right(format_size(entry.over_wire())));
    row
}

fn extension_row(label: &str, stats: &ExtensionBucket) -> Row {
    let mut row = Row::new();
    row.add_cell(Cell::new(label));
    row.add_cell(right(stats.file_count().to_string()));
    row.add_cell(right(format_percent(stats.minification_count_ratio())));
    row.add_cell(right(format_size(stats.size.src)));
    row.add_cell(right(format_size(stats.size.dist)));
    row.add_cell(right(format_size(stats.size.gzip)));
    row.add_cell(right(format_percent(stats.minification_size_ratio())));
    row.add_cell(right(format_percent(stats.compression_ratio())));
    row
}

/// One row per file, in name order
pub fn file_table(summary: &Summary) -> Table {
    let mut table = new_table(FILE_HEADER);
    for entry in &summary.files {
        table.add_row(file_row(entry));
    }
    table
}

/// One row per real extension, in key order
pub fn extension_table(summary: &Summary) -> Table {
    let mut table = new_table(EXTENSION_HEADER);
    for ext in &summary.extensions {
        table.add_row(extension_row(&ext.extension, &ext.stats));
    }
    table
}

/// Single row with the totals across all extensions
pub fn total_table(summary: &Summary) -> Table {
    let mut table = new_table(EXTENSION_HEADER);
    table.add_row(extension_row(ALL_EXTENSIONS, &summary.all));
    table
}
