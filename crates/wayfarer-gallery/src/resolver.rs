//! Image resource resolution.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

/// Resolves a path-like image reference into encoded image bytes.
///
/// Returning `None` means the reference does not name an available resource.
/// Decoding is not the resolver's concern.
pub trait ResourceResolver {
    /// Returns the bytes for `image_ref`, or `None` if it cannot be found.
    fn resolve(&self, image_ref: &str) -> Option<Vec<u8>>;
}

impl<R> ResourceResolver for &R
where
    R: ResourceResolver + ?Sized,
{
    fn resolve(&self, image_ref: &str) -> Option<Vec<u8>> {
        (**self).resolve(image_ref)
    }
}

impl<R> ResourceResolver for Box<R>
where
    R: ResourceResolver + ?Sized,
{
    fn resolve(&self, image_ref: &str) -> Option<Vec<u8>> {
        (**self).resolve(image_ref)
    }
}

/// Resolves references as paths below a root directory.
///
/// A leading `/` is stripped, so the catalog reference `/resources/Tokyo.jpg`
/// resolves to `<root>/resources/Tokyo.jpg`.
#[derive(Debug, Clone)]
pub struct DirResolver {
    root: PathBuf,
}

impl DirResolver {
    /// Creates a resolver rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path `image_ref` maps to.
    #[must_use]
    pub fn path_for(&self, image_ref: &str) -> PathBuf {
        self.root.join(image_ref.trim_start_matches('/'))
    }
}

impl ResourceResolver for DirResolver {
    fn resolve(&self, image_ref: &str) -> Option<Vec<u8>> {
        let path = self.path_for(image_ref);
        match fs::read(&path) {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                log::debug!("cannot read {}: {err}", path.display());
                None
            }
        }
    }
}

/// Resolves references from an in-memory table.
#[derive(Debug, Default, Clone)]
pub struct MemoryResolver {
    resources: HashMap<String, Vec<u8>>,
}

impl MemoryResolver {
    /// Creates an empty resolver. Every lookup fails until resources are added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `bytes` under `image_ref`, replacing any previous entry.
    pub fn insert(&mut self, image_ref: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.resources.insert(image_ref.into(), bytes.into());
    }

    /// Builder form of [`MemoryResolver::insert`].
    #[must_use]
    pub fn with(mut self, image_ref: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(image_ref, bytes);
        self
    }
}

impl ResourceResolver for MemoryResolver {
    fn resolve(&self, image_ref: &str) -> Option<Vec<u8>> {
        self.resources.get(image_ref).cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{DirResolver, MemoryResolver, ResourceResolver};

    #[test]
    fn dir_resolver_strips_leading_slash() {
        let resolver = DirResolver::new("/srv/assets");
        assert_eq!(
            resolver.path_for("/resources/Tokyo.jpg"),
            Path::new("/srv/assets/resources/Tokyo.jpg")
        );
        assert_eq!(
            resolver.path_for("resources/Tokyo.jpg"),
            Path::new("/srv/assets/resources/Tokyo.jpg")
        );
    }

    #[test]
    fn dir_resolver_reports_missing_file_as_none() {
        let resolver = DirResolver::new(std::env::temp_dir().join("wayfarer-no-such-dir"));
        assert_eq!(resolver.resolve("/resources/Missing.jpg"), None);
    }

    #[test]
    fn dir_resolver_reads_existing_file() {
        let dir = std::env::temp_dir().join(format!("wayfarer-resolver-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("resources")).unwrap();
        std::fs::write(dir.join("resources/a.bin"), [1, 2, 3]).unwrap();

        let resolver = DirResolver::new(&dir);
        assert_eq!(resolver.resolve("/resources/a.bin"), Some(vec![1, 2, 3]));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn memory_resolver_lookup() {
        let resolver = MemoryResolver::new().with("/a.png", vec![7]);
        assert_eq!(resolver.resolve("/a.png"), Some(vec![7]));
        assert_eq!(resolver.resolve("/b.png"), None);
    }

    #[test]
    fn borrowed_and_boxed_resolvers_delegate() {
        let resolver = MemoryResolver::new().with("/a.png", vec![1]);
        let boxed: Box<dyn ResourceResolver> = Box::new(resolver.clone());
        assert_eq!((&resolver).resolve("/a.png"), Some(vec![1]));
        assert_eq!(boxed.resolve("/a.png"), Some(vec![1]));
    }
}
