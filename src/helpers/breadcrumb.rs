//! Breadcrumb navigation above package pages.

use askama::Template;

use crate::error::Result;
use crate::utils::SafeHtml;

/// One entry in a breadcrumb trail. Entries without a link are shown as
/// the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: Option<String>,
}

impl Crumb {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

/// Path of a project's overview page.
pub fn project_show_path(project: &str) -> String {
    format!("/project/show/{}", urlencoding::encode(project))
}

/// Path of a package's overview page.
pub fn package_show_path(project: &str, package: &str) -> String {
    format!(
        "/package/show/{}/{}",
        urlencoding::encode(project),
        urlencoding::encode(package)
    )
}

/// Breadcrumb trail for a package page.
///
/// Starts with the project, then the package, then `trail`. The package
/// entry is not linked when the current page is the package overview.
pub fn package_bread_crumb(
    project: &str,
    package: &str,
    on_show_page: bool,
    trail: Vec<Crumb>,
) -> Vec<Crumb> {
    let package_crumb = if on_show_page {
        Crumb::text(package)
    } else {
        Crumb::link(package, package_show_path(project, package))
    };

    let mut crumbs = vec![
        Crumb::link(project, project_show_path(project)),
        package_crumb,
    ];
    crumbs.extend(trail);
    crumbs
}

#[derive(Template)]
#[template(path = "breadcrumb.html")]
struct BreadCrumbTemplate<'a> {
    crumbs: &'a [Crumb],
}

/// Render a breadcrumb trail as an ordered list.
pub fn render_bread_crumb(crumbs: &[Crumb]) -> Result<SafeHtml> {
    let markup = BreadCrumbTemplate { crumbs }.render()?;
    Ok(SafeHtml::from_trusted(markup))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_bread_crumb_links_package() {
        let crumbs = package_bread_crumb("home:alice", "hello", false, vec![]);
        assert_eq!(
            crumbs,
            vec![
                Crumb::link("home:alice", "/project/show/home%3Aalice"),
                Crumb::link("hello", "/package/show/home%3Aalice/hello"),
            ]
        );
    }

    #[test]
    fn test_package_bread_crumb_on_show_page() {
        let crumbs = package_bread_crumb("devel", "vim", true, vec![]);
        assert_eq!(crumbs[1], Crumb::text("vim"));
    }

    #[test]
    fn test_package_bread_crumb_appends_trail() {
        let crumbs = package_bread_crumb(
            "devel",
            "vim",
            false,
            vec![Crumb::link("Files", "/package/files"), Crumb::text("vim.spec")],
        );
        assert_eq!(crumbs.len(), 4);
        assert_eq!(crumbs[3], Crumb::text("vim.spec"));
    }

    #[test]
    fn test_render_bread_crumb() {
        let crumbs = package_bread_crumb("devel", "vim", true, vec![]);
        let html = render_bread_crumb(&crumbs).unwrap();
        assert!(html
            .as_str()
            .contains(r#"<a href="/project/show/devel">devel</a>"#));
        assert!(html
            .as_str()
            .contains(r#"<li class="breadcrumb-item active" aria-current="page">vim</li>"#));
        assert!(!html.as_str().contains("/package/show/"));
    }

    #[test]
    fn test_render_bread_crumb_escapes_labels() {
        let html = render_bread_crumb(&[Crumb::text("<b>&")]).unwrap();
        assert!(html.as_str().contains("&lt;b&gt;&amp;"));
        assert!(!html.as_str().contains("<b>"));
    }
}
