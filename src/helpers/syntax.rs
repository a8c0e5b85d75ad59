//! Syntax-class guessing for the source file viewer.
//!
//! Maps a file name to the short grammar label the code viewer uses for
//! highlighting. Named rules are tried in order before falling back to an
//! extension table; an empty string means plain text.

use regex::Regex;
use std::sync::LazyLock;

/// How a named rule recognises a file.
enum Matcher {
    /// The whole name equals one of these.
    Exact(&'static [&'static str]),
    /// The name matches this pattern.
    Pattern(Regex),
}

impl Matcher {
    fn matches(&self, filename: &str) -> bool {
        match self {
            Matcher::Exact(names) => names.iter().any(|name| *name == filename),
            Matcher::Pattern(re) => re.is_match(filename),
        }
    }
}

/// Build-service control files that are XML documents.
const XML_CONTROL_FILES: &[&str] = &["_aggregate", "_link", "_patchinfo", "_service"];

/// Named rules in priority order. Several may match one name; the first wins.
static NAMED_RULES: LazyLock<Vec<(Matcher, &'static str)>> = LazyLock::new(|| {
    vec![
        (Matcher::Exact(XML_CONTROL_FILES), "xml"),
        // Anywhere in the name, so `foo.service` and `foo.service.in` both count
        (Matcher::Pattern(Regex::new(r"\.service").unwrap()), "xml"),
        // rc-scripts are shell
        (Matcher::Pattern(Regex::new(r"^rc[A-Za-z0-9_-]+$").unwrap()), "shell"),
        (Matcher::Pattern(Regex::new(r"rpmlintrc$").unwrap()), "python"),
        (Matcher::Exact(&["debian.rules"]), "makefile"),
        (Matcher::Exact(&["baselibs.conf"]), "baselibs"),
        (Matcher::Pattern(Regex::new(r"^macros\.[A-Za-z0-9_]").unwrap()), "spec"),
        (Matcher::Pattern(Regex::new(r"^[Dd]ockerfile").unwrap()), "dockerfile"),
    ]
});

/// Guess the highlighting class for a file name.
///
/// Returns `""` when nothing matches.
pub fn classify_syntax(filename: &str) -> &'static str {
    if let Some(class) = NAMED_RULES
        .iter()
        .find(|(matcher, _)| matcher.matches(filename))
        .map(|(_, class)| *class)
    {
        return class;
    }

    let ext = extension(filename).to_lowercase();
    let class = class_for_extension(&ext);
    if class.is_empty() {
        tracing::trace!("No syntax class for {:?}", filename);
    }
    class
}

/// Highlighting class for a lowercased extension (without the dot).
fn class_for_extension(ext: &str) -> &'static str {
    match ext {
        "group" | "kiwi" | "product" => "xml",
        "patch" | "dif" => "diff",
        "pl" | "pm" => "perl",
        "py" => "python",
        "rb" => "ruby",
        "tex" => "latex",
        "js" => "javascript",
        "sh" => "shell",
        "spec" => "rpm-spec",
        "changes" => "rpm-changes",
        "diff" => "diff",
        "php" => "php",
        "html" => "html",
        "xml" => "xml",
        "css" => "css",
        "perl" => "perl",
        _ => "",
    }
}

/// Extension of the last path component, without the dot.
///
/// Dotfiles such as `.bashrc` have no extension.
fn extension(filename: &str) -> &str {
    let base = filename.rsplit('/').next().unwrap_or(filename);
    match base.rfind('.') {
        Some(0) | None => "",
        Some(idx) => &base[idx + 1..],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_files_are_xml() {
        for name in ["_aggregate", "_link", "_patchinfo", "_service"] {
            assert_eq!(classify_syntax(name), "xml", "{}", name);
        }
        assert_eq!(classify_syntax("docker.service"), "xml");
        assert_eq!(classify_syntax("foo.service.in"), "xml");
    }

    #[test]
    fn test_control_file_names_are_exact() {
        assert_eq!(classify_syntax("_links"), "");
        assert_eq!(classify_syntax("_Service"), "");
    }

    #[test]
    fn test_rc_scripts() {
        assert_eq!(classify_syntax("rcapache2"), "shell");
        assert_eq!(classify_syntax("rc-local_2"), "shell");
        assert_eq!(classify_syntax("rc"), "");
        assert_eq!(classify_syntax("rcfoo.bar"), "");
    }

    #[test]
    fn test_named_files() {
        assert_eq!(classify_syntax("foo-rpmlintrc"), "python");
        assert_eq!(classify_syntax("debian.rules"), "makefile");
        assert_eq!(classify_syntax("baselibs.conf"), "baselibs");
        assert_eq!(classify_syntax("macros.python3"), "spec");
        assert_eq!(classify_syntax("macros."), "");
        assert_eq!(classify_syntax("Dockerfile"), "dockerfile");
        assert_eq!(classify_syntax("Dockerfile.prod"), "dockerfile");
        assert_eq!(classify_syntax("dockerfile-dev"), "dockerfile");
        assert_eq!(classify_syntax("DOCKERFILE"), "");
    }

    #[test]
    fn test_rule_order() {
        // rpmlintrc rule is checked before the extension table
        assert_eq!(classify_syntax("setup.py"), "python");
        assert_eq!(classify_syntax("x.py.rpmlintrc"), "python");
        // .service beats the rc-script rule and the extension table
        assert_eq!(classify_syntax("rc.service"), "xml");
        assert_eq!(classify_syntax("app.service.spec"), "xml");
        // Dockerfile rule wins over the .sh extension
        assert_eq!(classify_syntax("Dockerfile.sh"), "dockerfile");
    }

    #[test]
    fn test_extension_table() {
        let cases = [
            ("base.group", "xml"),
            ("appliance.kiwi", "xml"),
            ("sles.product", "xml"),
            ("fix.patch", "diff"),
            ("fix.dif", "diff"),
            ("fix.diff", "diff"),
            ("script.pl", "perl"),
            ("Module.pm", "perl"),
            ("legacy.perl", "perl"),
            ("app.rb", "ruby"),
            ("paper.tex", "latex"),
            ("app.js", "javascript"),
            ("build.sh", "shell"),
            ("foo.spec", "rpm-spec"),
            ("foo.changes", "rpm-changes"),
            ("index.php", "php"),
            ("index.html", "html"),
            ("config.xml", "xml"),
            ("style.css", "css"),
        ];
        for (name, class) in cases {
            assert_eq!(classify_syntax(name), class, "{}", name);
        }
    }

    #[test]
    fn test_extension_case_insensitive() {
        assert_eq!(classify_syntax("FOO.SPEC"), "rpm-spec");
        assert_eq!(classify_syntax("Fix.Patch"), "diff");
    }

    #[test]
    fn test_unknown() {
        assert_eq!(classify_syntax("notes.txt"), "");
        assert_eq!(classify_syntax("README"), "");
        assert_eq!(classify_syntax(".bashrc"), "");
        assert_eq!(classify_syntax("trailing."), "");
        assert_eq!(classify_syntax(""), "");
    }

    #[test]
    fn test_extension_uses_last_component() {
        assert_eq!(extension("dir.d/README"), "");
        assert_eq!(extension("dir/foo.tar.gz"), "gz");
        assert_eq!(classify_syntax("src/lib/app.py"), "python");
    }
}
