//! POM document parsing.
//!
//! Lookup is namespace-aware and root-scoped: only direct children of the
//! root element in the POM default namespace count. A `<version>` nested in
//! `<parent>` or a dependency never matches, and neither does a `version`
//! element from another (or no) namespace.

use docvars_shared::{DocvarsError, Result};
use roxmltree::{Document, Node};
use tracing::debug;

use crate::POM_NAMESPACE;

/// Typed view of the manifest's root-level project coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pom {
    /// `<version>` declared at the project root, if any.
    pub version: Option<String>,
    /// `<groupId>` declared at the project root.
    pub group_id: Option<String>,
    /// `<artifactId>` declared at the project root.
    pub artifact_id: Option<String>,
    /// `<name>` declared at the project root.
    pub name: Option<String>,
}

/// Parse POM XML text into a [`Pom`].
pub(crate) fn parse_pom(content: &str) -> Result<Pom> {
    let doc = Document::parse(content)
        .map_err(|e| DocvarsError::parse(format!("malformed manifest XML: {e}")))?;

    let root = doc.root_element();
    if !root.has_tag_name((POM_NAMESPACE, "project")) {
        debug!(
            root = root.tag_name().name(),
            "manifest root is not a POM <project> element"
        );
    }

    let pom = Pom {
        version: root_child_text(root, "version"),
        group_id: root_child_text(root, "groupId"),
        artifact_id: root_child_text(root, "artifactId"),
        name: root_child_text(root, "name"),
    };

    debug!(
        artifact_id = pom.artifact_id.as_deref().unwrap_or("<none>"),
        has_version = pom.version.is_some(),
        "parsed manifest"
    );

    Ok(pom)
}

/// Text of a direct child of the root element in the POM namespace.
/// Empty or whitespace-only elements count as absent.
fn root_child_text(root: Node<'_, '_>, tag: &str) -> Option<String> {
    root.children()
        .find(|n| n.has_tag_name((POM_NAMESPACE, tag)))
        .and_then(|n| n.text())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_fixture() {
        let content = std::fs::read_to_string("../../../fixtures/pom/valid-pom.xml")
            .expect("read fixture");
        let pom = parse_pom(&content).unwrap();

        assert_eq!(pom.version.as_deref(), Some("1.2.3"));
        assert_eq!(pom.group_id.as_deref(), Some("com.acme.platform"));
        assert_eq!(pom.artifact_id.as_deref(), Some("acme-platform"));
        assert_eq!(pom.name.as_deref(), Some("Acme Platform"));
    }

    #[test]
    fn parse_fixture_without_root_version() {
        let content = std::fs::read_to_string("../../../fixtures/pom/no-version-pom.xml")
            .expect("read fixture");
        let pom = parse_pom(&content).unwrap();

        // The fixture declares a version inside <parent>, which must not
        // leak into the root-level lookup.
        assert_eq!(pom.version, None);
        assert_eq!(pom.artifact_id.as_deref(), Some("acme-platform-docs"));
    }

    #[test]
    fn nested_dependency_version_does_not_match() {
        let content = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <artifactId>lib</artifactId>
  <dependencies>
    <dependency>
      <groupId>org.junit.jupiter</groupId>
      <artifactId>junit-jupiter</artifactId>
      <version>5.10.0</version>
    </dependency>
  </dependencies>
</project>"#;
        let pom = parse_pom(content).unwrap();
        assert_eq!(pom.version, None);
    }

    #[test]
    fn unnamespaced_version_does_not_match() {
        let content = "<project><version>3.3.3</version></project>";
        let pom = parse_pom(content).unwrap();
        assert_eq!(pom.version, None);
    }

    #[test]
    fn foreign_namespace_version_does_not_match() {
        let content = r#"<project xmlns="http://example.com/other-schema">
  <version>3.3.3</version>
</project>"#;
        let pom = parse_pom(content).unwrap();
        assert_eq!(pom.version, None);
    }

    #[test]
    fn empty_version_element_counts_as_absent() {
        let content = r#"<project xmlns="http://maven.apache.org/POM/4.0.0">
  <version>  </version>
</project>"#;
        let pom = parse_pom(content).unwrap();
        assert_eq!(pom.version, None);
    }

    #[test]
    fn version_text_is_trimmed() {
        let content = r#"<project xmlns="http://maven.apache.org/POM/4.0.0">
  <version>
    2.5.0-SNAPSHOT
  </version>
</project>"#;
        let pom = parse_pom(content).unwrap();
        assert_eq!(pom.version.as_deref(), Some("2.5.0-SNAPSHOT"));
    }

    #[test]
    fn malformed_xml_fails() {
        let result = parse_pom("<project><version>1.0</project>");
        assert!(result.is_err());
    }

    #[test]
    fn empty_document_fails() {
        let result = parse_pom("");
        assert!(result.is_err());
    }
}
