//! Helpers for package file listings, titles and repositories.

use crate::config::ViewConfig;

/// Prefix of files generated by source services. They are rewritten by
/// the service run and cannot be deleted by hand.
const SERVICE_FILE_PREFIX: &str = "_service:";

/// Architecture that cloud upload targets accept.
const UPLOAD_ARCH: &str = "x86_64";

/// Image formats that cloud upload targets accept.
const UPLOAD_EXTENSIONS: &[&str] = &[".raw.xz", ".vhdfixed.xz"];

/// Whether a file in a package listing gets a delete action.
pub fn removable_file(file_name: &str, belongs_to_product: bool) -> bool {
    !file_name.starts_with(SERVICE_FILE_PREFIX) && !belongs_to_product
}

/// Package title for display, falling back to its name when blank.
pub fn title_or_name<'a>(title: Option<&'a str>, name: &'a str) -> &'a str {
    match title {
        Some(title) if !title.trim().is_empty() => title,
        _ => name,
    }
}

/// Repository summary such as `"rpm-md, Priority: 99"`.
///
/// Either part is left out when missing.
pub fn repo_type_and_priority(repo_type: Option<&str>, priority: Option<i64>) -> String {
    let priority = priority.map(|p| format!("Priority: {}", p));
    repo_type
        .map(str::to_string)
        .into_iter()
        .chain(priority)
        .collect::<Vec<_>>()
        .join(", ")
}

/// URL of a source file, optionally pinned to a revision.
///
/// Each path segment is percent-encoded so names with spaces or `:`
/// (service files) survive.
pub fn file_url(
    project: &str,
    package: &str,
    filename: &str,
    revision: Option<&str>,
    config: &ViewConfig,
) -> String {
    let mut url = format!(
        "{}/{}/{}/{}",
        config.source_prefix,
        urlencoding::encode(project),
        urlencoding::encode(package),
        urlencoding::encode(filename),
    );
    if let Some(rev) = revision {
        url.push_str("?rev=");
        url.push_str(&urlencoding::encode(rev));
    }
    url
}

/// Whether a build result can be pushed to a cloud upload target.
pub fn uploadable(filename: &str, architecture: &str) -> bool {
    architecture == UPLOAD_ARCH && UPLOAD_EXTENSIONS.iter().any(|ext| filename.ends_with(*ext))
}
