//! # reportfs Report Collaborators (`report`)
//!
//! File: cli/src/report/mod.rs
//!
//! ## Overview
//!
//! The minimal report model the file utilities work with: datasets, designs,
//! renderers, and rendering modes resolved from template resources.
//!
//! ## Architecture
//!
//! - **`dataset`**: `Cell`, `DataSet`, `ReportData`.
//! - **`content_type`**: extension → MIME table.
//! - **`design`**: `ReportDesign` and its `ReportDesignResource`s.
//! - **`renderer`**: the `ReportRenderer` trait and the `FixedDesign` adapter.
//! - **`csv`**: `CsvReportRenderer`.
//! - **`template`**: Tera-backed `TextTemplateRenderer` and `ExcelTemplateRenderer`.
//! - **`resource`**: `ResourceProvider` plus directory and in-memory providers.
//! - **`mode`**: `RenderingMode` and `rendering_mode_from_resource`.
//! - **`util`**: `to_csv`.
//!

pub mod content_type;
pub mod csv;
pub mod dataset;
pub mod design;
pub mod mode;
pub mod renderer;
pub mod resource;
pub mod template;
pub mod util;

pub use dataset::{Cell, DataSet, ReportData};
pub use mode::{rendering_mode_from_resource, RenderingMode};
pub use renderer::{RendererKind, ReportRenderer};
pub use resource::{DirectoryResourceProvider, MemoryResourceProvider, ResourceProvider};
pub use util::to_csv;
