use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// The caller's `Cargo.toml`, used to find the path through which generated
/// code can name a sibling crate.
///
/// # Example
///
/// ```rust
/// # use jp_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("jp_reflect"));
/// ```
///
/// Reading and parsing the manifest is not cheap; call this once per macro
/// invocation and pass the resulting path around.
///
/// # Resolution rules
///
/// 1. The crate is listed in `dependencies`: `::crate_name`.
/// 2. The name starts with `jp_` and the caller depends on the facade
///    `jp_core`: `::jp_core::short_name` (e.g. `jp_reflect` -> `::jp_core::reflect`).
/// 3. Steps 1-2 again for `dev-dependencies`.
/// 4. Otherwise `::crate_name`.
///
/// A crate that derives on its own types should declare
/// `extern crate self as jp_reflect;` so that rule 4 resolves.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "jp_core";
const MEMBER_PREFIX: &str = "jp_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        env::var_os("CARGO_MANIFEST_DIR")
            .map(|path| {
                let mut path = PathBuf::from(path);
                path.push("Cargo.toml");
                assert!(
                    path.exists(),
                    "Cargo manifest does not exist at path {}",
                    path.display(),
                );
                path
            })
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.")
    }

    #[inline(never)]
    fn get_manifest_modified_time(
        cargo_manifest_path: &Path,
    ) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(cargo_manifest_path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(manifest)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    #[inline]
    fn parse_str<T: syn::parse::Parse>(path: &str) -> T {
        syn::parse_str(path).unwrap()
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_str(&format!("::{name}")));
        }

        let module = name.strip_prefix(MEMBER_PREFIX)?;
        if deps.contains_key(FACADE_NAME) {
            let mut path = Self::parse_str::<syn::Path>(&format!("::{FACADE_NAME}"));
            path.segments.push(Self::parse_str(module));
            return Some(path);
        }
        None
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the type-level documentation for the rules.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        for table in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = self.manifest.get(table)
                && let Some(val) = Self::find_in_deps(deps, name)
            {
                return val;
            }
        }

        Self::parse_str(&format!("::{name}"))
    }

    /// Run `func` against the caller's manifest.
    ///
    /// Manifests are cached per path and re-read when the file's modified time
    /// changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use toml_edit::{Document, Item};

    use super::Manifest;

    fn path_string(path: &syn::Path) -> String {
        let segments: Vec<String> = path
            .segments
            .iter()
            .map(|seg| seg.ident.to_string())
            .collect();
        format!("::{}", segments.join("::"))
    }

    fn deps(text: &str) -> Document<String> {
        Document::parse(text.to_string()).unwrap()
    }

    #[test]
    fn direct_dependency() {
        let doc = deps("[dependencies]\njp_reflect = \"0.0.1\"\n");
        let Some(Item::Table(table)) = doc.get("dependencies") else {
            panic!("missing table");
        };
        let path = Manifest::find_in_deps(table, "jp_reflect").unwrap();
        assert_eq!(path_string(&path), "::jp_reflect");
    }

    #[test]
    fn facade_dependency() {
        let doc = deps("[dependencies]\njp_core = \"0.0.1\"\n");
        let Some(Item::Table(table)) = doc.get("dependencies") else {
            panic!("missing table");
        };
        let path = Manifest::find_in_deps(table, "jp_reflect").unwrap();
        assert_eq!(path_string(&path), "::jp_core::reflect");
        assert!(Manifest::find_in_deps(table, "serde").is_none());
    }
}
