//! Build version shown in the footer and logged at startup.

/// Returns a combined version string: `pkg_version (git_hash)`.
///
/// A dirty working tree is marked with a trailing `+`. Without git metadata the
/// hash is reported as `unknown`.
#[must_use]
pub fn build_version() -> String {
    let pkg_version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");
    let dirty = match option_env!("VERGEN_GIT_DIRTY") {
        Some("true") => "+",
        _ => "",
    };

    format!("{pkg_version} ({git_hash}{dirty})")
}

#[cfg(test)]
mod tests {
    use super::build_version;

    #[test]
    fn starts_with_package_version() {
        let version = build_version();
        assert!(version.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(version.ends_with(')'));
    }
}
