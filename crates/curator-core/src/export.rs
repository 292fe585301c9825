//! Flat CSV rendition of a curator list.
//!
//! The column schema is fixed and consumed by the analysis service. Values are
//! written verbatim, without quoting, so a comma inside a name or URL shifts
//! the columns of that row.

use regex::Regex;

use crate::form::{BrandForm, CuratorList};
use crate::platform::Platform;

/// Header row of every export.
pub const CSV_HEADER: &str = "brand,type,name,youtube,instagram,reddit,twitter,linkedin";

/// Platforms that get a column, in column order. `tiktok` has no column.
pub const CSV_PLATFORM_COLUMNS: [Platform; 5] = [
    Platform::Youtube,
    Platform::Instagram,
    Platform::Reddit,
    Platform::Twitter,
    Platform::Linkedin,
];

/// Serialize a curator list into the fixed CSV schema.
///
/// Entries whose trimmed name is empty are skipped. Influencers come first,
/// then competitors, each in list order. Every line ends with `\n`.
#[must_use]
pub fn serialize(list: &CuratorList) -> String {
    let mut csv = String::with_capacity(64 * (1 + list.influencers.len() + list.competitors.len()));
    csv.push_str(CSV_HEADER);
    csv.push('\n');

    for (kind, entry) in list.entries() {
        if entry.name.trim().is_empty() {
            continue;
        }
        csv.push_str(&list.brand_name);
        csv.push(',');
        csv.push_str(&kind.to_string());
        csv.push(',');
        csv.push_str(&entry.name);
        for platform in CSV_PLATFORM_COLUMNS {
            csv.push(',');
            csv.push_str(entry.links.get(platform));
        }
        csv.push('\n');
    }

    csv
}

/// Serialize the current form state (trimmed brand, blank entities dropped).
#[must_use]
pub fn serialize_form(form: &BrandForm) -> String {
    serialize(&form.curator_list())
}

/// File-name stem for anything named after a brand: each whitespace run
/// becomes one underscore. Leading and trailing runs are kept.
#[must_use]
pub fn brand_file_stem(brand_name: &str) -> String {
    let re = Regex::new(r"\s+").expect("valid whitespace regex");
    re.replace_all(brand_name, "_").into_owned()
}

/// File name for a downloaded export.
#[must_use]
pub fn export_file_name(brand_name: &str) -> String {
    format!("{}_curator_list.csv", brand_file_stem(brand_name))
}

/// A ready-to-write export file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: String,
    pub content: String,
}

impl CsvExport {
    /// Build the export for `form`. Returns `None` when the brand name is
    /// empty, since there is nothing to name the file after.
    #[must_use]
    pub fn from_form(form: &BrandForm) -> Option<Self> {
        if form.brand_name.is_empty() {
            return None;
        }
        Some(Self {
            file_name: export_file_name(&form.brand_name),
            content: serialize_form(form),
        })
    }
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
