//! Print-form templates and exported documents.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entities::{Meta, MetaEntity};

/// A print-form template, either built in or uploaded by the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `entity` for single documents, `mxtemplate` for spreadsheets.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub template_type: Option<String>,
    /// Download link of the template file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl MetaEntity for Template {
    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

/// File format of an exported document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportExtension {
    #[default]
    Pdf,
    Xls,
    Odt,
}

impl ExportExtension {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Xls => "xls",
            Self::Odt => "odt",
        }
    }
}

impl fmt::Display for ExportExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document rendered with a print-form template.
#[derive(Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub bytes: Vec<u8>,
    pub extension: ExportExtension,
}

impl ExportFile {
    /// Writes the file contents to `path`.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be written.
    pub async fn write_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        tokio::fs::write(path, &self.bytes).await
    }
}

// Contents are binary; only the size is useful in logs.
impl fmt::Debug for ExportFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportFile")
            .field("len", &self.bytes.len())
            .field("extension", &self.extension)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extension_wire_names() {
        assert_eq!(serde_json::to_value(ExportExtension::Xls).unwrap(), json!("xls"));
        assert_eq!(ExportExtension::default().to_string(), "pdf");
    }

    #[test]
    fn test_template_type_field() {
        let template: Template = serde_json::from_value(json!({
            "meta": {
                "href": "https://api.moysklad.ru/api/remap/1.2/entity/loss/metadata/embeddedtemplate/t1",
                "type": "embeddedtemplate"
            },
            "id": "t1",
            "name": "Loss act",
            "type": "entity"
        }))
        .unwrap();
        assert_eq!(template.template_type.as_deref(), Some("entity"));
    }

    #[test]
    fn test_debug_hides_contents() {
        let file = ExportFile {
            bytes: vec![0x25, 0x50, 0x44, 0x46],
            extension: ExportExtension::Pdf,
        };
        assert_eq!(format!("{file:?}"), "ExportFile { len: 4, extension: Pdf }");
    }

    #[tokio::test]
    async fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loss.pdf");
        let file = ExportFile {
            bytes: b"%PDF-1.4".to_vec(),
            extension: ExportExtension::Pdf,
        };
        file.write_to(&path).await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4");
    }
}
