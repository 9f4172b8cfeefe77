//! Component XML shaping.
//!
//! A component-details fetch returns XML metadata. Known document-like
//! component types (`process`, `profile`) are condensed into a ten-field
//! summary; every other type is passed through verbatim so nothing is lost.
//! The raw XML is always dumped to a configurable directory, best-effort.

use std::path::{Path, PathBuf};

use roxmltree::{Document, Node};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Placeholder used when a summarized component carries no description.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Errors from parsing or rendering component XML.
///
/// These are always rendered as reply text by the tool handler, never
/// allowed to crash the process.
#[derive(Debug, Error)]
pub enum ComponentXmlError {
    #[error("Malformed component XML: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("Failed to render component summary: {0}")]
    Render(#[from] serde_json::Error),
}

/// Compact summary extracted from a component document.
///
/// Field values live in XML attributes on the top-level component node
/// (with a child-element fallback); absent fields become empty strings,
/// except `description` which gets a fixed placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSummary {
    pub component_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: String,
    pub version: String,
    pub created_by: String,
    pub created_date: String,
    pub modified_by: String,
    pub modified_date: String,
    pub current_version: String,
    pub description: String,
}

/// Shape a raw component XML body into the reply text.
///
/// The two-tier verbosity policy: a `type` containing `"process"` or
/// `"profile"` yields a [`ComponentSummary`] rendered as pretty JSON; any
/// other type (including a missing one, treated as `"unknown"`) yields the
/// full raw XML. Both variants carry a pointer to the dumped file when the
/// dump succeeded.
pub fn shape(
    raw_xml: &str,
    component_id: &str,
    dump_dir: &Path,
) -> Result<String, ComponentXmlError> {
    let doc = Document::parse(raw_xml)?;
    let root = doc.root_element();

    let saved = dump_raw_xml(raw_xml, component_id, dump_dir);

    let kind = field(&root, "type").unwrap_or_else(|| "unknown".to_string());

    if kind.contains("process") || kind.contains("profile") {
        let summary = extract_summary(&root, component_id, &kind);
        let rendered = serde_json::to_string_pretty(&summary)?;
        Ok(match saved {
            Some(path) => format!(
                "Component summary:\n{rendered}\n\nRaw XML saved to {}",
                path.display()
            ),
            None => format!("Component summary:\n{rendered}"),
        })
    } else {
        debug!("Component type '{}' not summarized; passing through", kind);
        Ok(match saved {
            Some(path) => format!("{raw_xml}\n\nRaw XML saved to {}", path.display()),
            None => raw_xml.to_string(),
        })
    }
}

/// Write the raw XML to `<dump_dir>/component_<id>.xml`, best-effort.
///
/// A failed write is logged and the reply is still produced without the
/// file pointer.
fn dump_raw_xml(raw_xml: &str, component_id: &str, dump_dir: &Path) -> Option<PathBuf> {
    let path = dump_dir.join(format!("component_{component_id}.xml"));

    let result = std::fs::create_dir_all(dump_dir).and_then(|_| std::fs::write(&path, raw_xml));

    match result {
        Ok(()) => Some(path),
        Err(err) => {
            warn!("Could not dump component XML to {}: {}", path.display(), err);
            None
        }
    }
}

fn extract_summary(root: &Node<'_, '_>, requested_id: &str, kind: &str) -> ComponentSummary {
    ComponentSummary {
        component_id: field(root, "componentId").unwrap_or_else(|| requested_id.to_string()),
        name: field(root, "name").unwrap_or_default(),
        component_type: kind.to_string(),
        version: field(root, "version").unwrap_or_default(),
        created_by: field(root, "createdBy").unwrap_or_default(),
        created_date: field(root, "createdDate").unwrap_or_default(),
        modified_by: field(root, "modifiedBy").unwrap_or_default(),
        modified_date: field(root, "modifiedDate").unwrap_or_default(),
        current_version: field(root, "currentVersion").unwrap_or_default(),
        description: field(root, "description")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
    }
}

/// Read a named field from an element: attribute first, then the text of a
/// direct child element with the same local name. Namespace prefixes are
/// ignored.
fn field(node: &Node<'_, '_>, name: &str) -> Option<String> {
    if let Some(value) = node.attribute(name) {
        return Some(value.to_string());
    }

    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == name)
        .and_then(|child| child.text())
        .map(|text| text.to_string())
}
