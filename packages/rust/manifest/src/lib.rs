//! Maven POM manifest model and parser.
//!
//! The manifest is the XML project descriptor read once per documentation
//! build. Only the project coordinates at the document root are modeled;
//! the rest of the POM (dependencies, plugins, profiles) is out of scope.

mod parser;

use docvars_shared::Result;

pub use parser::Pom;

/// Default namespace URI of the Maven POM 4.0.0 schema.
pub const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";

/// Parse POM XML text into a [`Pom`].
///
/// Fails with a parse error on malformed XML. A well-formed document that is
/// not a POM parses to a `Pom` with all fields absent.
pub fn parse(content: &str) -> Result<Pom> {
    parser::parse_pom(content)
}
