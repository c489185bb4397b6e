//! # Report Designs (`report::design`)
//!
//! File: cli/src/report/design.rs
//!
//! A design bundles the named template resources a renderer needs. Template
//! renderers look for the resource named `template`.
//!

/// Name of the resource template renderers render from.
pub const TEMPLATE_RESOURCE_NAME: &str = "template";

/// One named resource inside a design: a template file and its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDesignResource {
    pub name: String,
    /// Extension without the leading dot, e.g. `xls`.
    pub extension: String,
    pub content_type: String,
    pub contents: Vec<u8>,
}

/// A named bundle of resources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportDesign {
    pub name: String,
    pub resources: Vec<ReportDesignResource>,
}

impl ReportDesign {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resources: Vec::new(),
        }
    }

    pub fn with_resource(mut self, resource: ReportDesignResource) -> Self {
        self.resources.push(resource);
        self
    }

    pub fn resource_by_name(&self, name: &str) -> Option<&ReportDesignResource> {
        self.resources.iter().find(|r| r.name == name)
    }

    /// The `template` resource, falling back to the only resource of a single-resource design.
    pub fn template(&self) -> Option<&ReportDesignResource> {
        self.resource_by_name(TEMPLATE_RESOURCE_NAME).or(match self.resources.as_slice() {
            [only] => Some(only),
            _ => None,
        })
    }
}
