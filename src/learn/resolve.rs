//! Source resolution: (kind, identifier) -> [`FetchPlan`].

use crate::models::{FetchPlan, Source, SourceKind};

const JAVADOC_HOST: &str = "https://javadoc.io/doc";
const GODOC_HOST: &str = "https://pkg.go.dev";
const DOCS_RS_HOST: &str = "https://docs.rs";

/// Resolve a source into a fetch plan. Never fails: identifiers are taken
/// permissively and any malformed remote location surfaces at fetch time.
pub fn resolve(source: &Source) -> FetchPlan {
    let id = source.identifier.as_str();
    match source.kind {
        SourceKind::Url => FetchPlan::Web { url: id.to_string() },
        SourceKind::Man => FetchPlan::ManPage {
            name: id.to_string(),
        },
        SourceKind::Javadoc => web(id, javadoc_url),
        SourceKind::Sphinx => web(id, sphinx_url),
        SourceKind::Godoc => godoc(id),
        SourceKind::Rustdoc => web(id, rustdoc_url),
    }
}

fn is_url(id: &str) -> bool {
    id.starts_with("http")
}

fn web(id: &str, build: fn(&str) -> String) -> FetchPlan {
    let url = if is_url(id) { id.to_string() } else { build(id) };
    FetchPlan::Web { url }
}

/// `group:artifact[:version]`, version defaulting to `latest`. Fewer than two
/// parts become a single path segment.
pub fn javadoc_url(coordinate: &str) -> String {
    let parts: Vec<&str> = coordinate.split(':').collect();
    match parts.as_slice() {
        [group, artifact, rest @ ..] => {
            let version = rest.first().copied().unwrap_or("latest");
            format!(
                "{}/{}/{}/{}",
                JAVADOC_HOST,
                group.replace('.', "/"),
                artifact,
                version
            )
        }
        _ => format!("{}/{}", JAVADOC_HOST, coordinate),
    }
}

pub fn sphinx_url(package: &str) -> String {
    format!("https://{}.readthedocs.io/en/latest/", package)
}

pub fn godoc_url(module: &str) -> String {
    format!("{}/{}", GODOC_HOST, module)
}

/// Crate segment keeps hyphens; the module segment uses underscores.
pub fn rustdoc_url(crate_name: &str) -> String {
    format!(
        "{}/{}/latest/{}/",
        DOCS_RS_HOST,
        crate_name,
        crate_name.replace('-', "_")
    )
}

fn godoc(id: &str) -> FetchPlan {
    if is_url(id) {
        return FetchPlan::Web { url: id.to_string() };
    }
    FetchPlan::GoDoc {
        module: id.to_string(),
        fallback_url: godoc_url(id),
    }
}
