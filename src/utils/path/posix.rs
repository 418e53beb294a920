//! Forward-slash path manipulation on plain strings.
//!
//! Output paths and urls end up inside generated module source, so they are
//! built with POSIX semantics regardless of the host OS.

/// Join two path strings and normalize the result.
///
/// Empty segments are ignored. An empty result becomes `"."`.
///
/// # Examples
/// ```
/// use dusk::utils::path::posix_join;
/// assert_eq!(posix_join("static/img", "a1b2.png"), "static/img/a1b2.png");
/// assert_eq!(posix_join("static/", "../a1b2.png"), "a1b2.png");
/// assert_eq!(posix_join("/cdn", "./x.png"), "/cdn/x.png");
/// ```
pub fn posix_join(base: &str, rest: &str) -> String {
    let joined = match (base.is_empty(), rest.is_empty()) {
        (true, true) => return ".".to_string(),
        (true, false) => rest.to_string(),
        (false, true) => base.to_string(),
        (false, false) => format!("{base}/{rest}"),
    };
    posix_normalize(&joined)
}

/// Normalize a forward-slash path.
///
/// Collapses duplicate separators, resolves `.` and `..` segments and keeps
/// a leading or trailing separator when present.
pub fn posix_normalize(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let absolute = path.starts_with('/');
    let trailing = path.ends_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                // `..` above the root of an absolute path is dropped
                _ if absolute => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let mut normalized = segments.join("/");
    if normalized.is_empty() && !absolute {
        normalized.push('.');
    }
    if trailing && !normalized.is_empty() {
        normalized.push('/');
    }
    if absolute {
        normalized.insert(0, '/');
    }
    normalized
}

/// Split a file name into stem and extension (extension keeps its dot).
///
/// A leading dot does not start an extension, so `.env` has none.
pub fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(0) | None => (file_name, ""),
        Some(idx) => file_name.split_at(idx),
    }
}

/// Insert `suffix` between the file stem and the extension of `path`.
///
/// The directory part is kept as-is.
///
/// # Examples
/// ```
/// use dusk::utils::path::insert_suffix;
/// assert_eq!(insert_suffix("img/logo.png", "_dark"), "img/logo_dark.png");
/// assert_eq!(insert_suffix("LICENSE", "_dark"), "LICENSE_dark");
/// ```
pub fn insert_suffix(path: &str, suffix: &str) -> String {
    let (dir, file_name) = match path.rfind('/') {
        Some(idx) => path.split_at(idx + 1),
        None => ("", path),
    };
    let (stem, ext) = split_extension(file_name);
    format!("{dir}{stem}{suffix}{ext}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posix_join() {
        assert_eq!(posix_join("out", "a.png"), "out/a.png");
        assert_eq!(posix_join("out/", "a.png"), "out/a.png");
        assert_eq!(posix_join("out//nested/", "/a.png"), "out/nested/a.png");
        assert_eq!(posix_join("", "a.png"), "a.png");
        assert_eq!(posix_join("out", ""), "out");
        assert_eq!(posix_join("", ""), ".");
    }

    #[test]
    fn test_posix_normalize_dots() {
        assert_eq!(posix_normalize("a/./b/../c"), "a/c");
        assert_eq!(posix_normalize("../a/../../b"), "../../b");
        assert_eq!(posix_normalize("/../a"), "/a");
        assert_eq!(posix_normalize("a/.."), ".");
        assert_eq!(posix_normalize("a/b/"), "a/b/");
        assert_eq!(posix_normalize("/"), "/");
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("logo.png"), ("logo", ".png"));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_extension(".env"), (".env", ""));
        assert_eq!(split_extension("Makefile"), ("Makefile", ""));
    }

    #[test]
    fn test_insert_suffix() {
        assert_eq!(insert_suffix("logo.png", "_dark"), "logo_dark.png");
        assert_eq!(
            insert_suffix("static/img/logo.png", "_dark"),
            "static/img/logo_dark.png"
        );
        assert_eq!(insert_suffix("v1.2/logo", "_dark"), "v1.2/logo_dark");
        assert_eq!(insert_suffix(".hidden", "_dark"), ".hidden_dark");
    }
}
