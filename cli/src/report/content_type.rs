//! # Content Types (`report::content_type`)
//!
//! File: cli/src/report/content_type.rs
//!
//! Fixed table mapping report file extensions to MIME types. Unknown extensions
//! fall back to `text/plain`.
//!

/// MIME type used when an extension is not in the table.
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// Report output formats with a known MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Csv,
    Tsv,
    Excel,
    ExcelXml,
    Pdf,
    Html,
    Xml,
    Json,
    Zip,
}

impl ContentType {
    pub const ALL: [ContentType; 9] = [
        ContentType::Csv,
        ContentType::Tsv,
        ContentType::Excel,
        ContentType::ExcelXml,
        ContentType::Pdf,
        ContentType::Html,
        ContentType::Xml,
        ContentType::Json,
        ContentType::Zip,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            ContentType::Csv => "csv",
            ContentType::Tsv => "tsv",
            ContentType::Excel => "xls",
            ContentType::ExcelXml => "xlsx",
            ContentType::Pdf => "pdf",
            ContentType::Html => "html",
            ContentType::Xml => "xml",
            ContentType::Json => "json",
            ContentType::Zip => "zip",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ContentType::Csv => "text/csv",
            ContentType::Tsv => "text/tab-separated-values",
            ContentType::Excel => "application/vnd.ms-excel",
            ContentType::ExcelXml => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ContentType::Pdf => "application/pdf",
            ContentType::Html => "text/html",
            ContentType::Xml => "text/xml",
            ContentType::Json => "application/json",
            ContentType::Zip => "application/zip",
        }
    }

    /// Exact (case-sensitive) lookup by extension, without the leading dot.
    pub fn for_extension(extension: &str) -> Option<ContentType> {
        Self::ALL.into_iter().find(|t| t.extension() == extension)
    }
}

/// MIME type for `extension`, or `text/plain` when the table has no entry.
pub fn mime_for_extension(extension: &str) -> &'static str {
    ContentType::for_extension(extension)
        .map(ContentType::mime)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}
