use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::TypeId;
use core::fmt;
use core::mem;
use std::sync::{PoisonError, RwLock};

use jp_reflect::info::{NamedField, StructInfo};
use jp_utils::TypeIdMap;
use jp_utils::hash::{HashMap, HashSet};
use unicode_general_category::{GeneralCategory, get_general_category};

// -----------------------------------------------------------------------------
// FieldTable

/// The externally visible field names of a struct type, each mapped to the
/// chain of field positions that reaches it from the struct root.
///
/// A field's name is its declared name, or the first comma-separated part of
/// its tag when that part is non-empty and made only of letters, decimal digits,
/// spaces and ``!#$%&()*+-./:;<=>?@[]^_{|}~``. A tag of exactly `-` hides the
/// field. Fields that are not `pub` are hidden.
///
/// Fields of embedded structs are promoted, level by level. A name seen at a
/// shallower level shadows the same name deeper down, and a struct type is
/// expanded only once however many times it is embedded.
///
/// # Examples
///
/// ```
/// use jp_pointer::FieldTable;
/// use jp_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Base {
///     pub id: u32,
/// }
///
/// #[derive(Reflect)]
/// struct Item {
///     #[reflect(embed)]
///     base: Base,
///     #[reflect(json = "label")]
///     pub name: String,
/// }
///
/// let info = Item::type_info().as_struct().unwrap();
/// let table = FieldTable::build(info);
/// assert_eq!(table.get("id"), Some(&[0, 0][..]));
/// assert_eq!(table.get("label"), Some(&[1][..]));
/// assert_eq!(table.get("name"), None);
/// ```
pub struct FieldTable {
    chains: HashMap<&'static str, Box<[usize]>>,
}

impl FieldTable {
    /// Builds the table of `info` by walking its embedded structs breadth
    /// first.
    pub fn build(info: &'static StructInfo) -> Self {
        let mut chains: HashMap<&'static str, Box<[usize]>> = HashMap::default();
        let mut visited: HashSet<TypeId> = HashSet::default();

        let mut current: Vec<(&'static StructInfo, Vec<usize>)> = Vec::new();
        let mut next = alloc::vec![(info, Vec::new())];

        while !next.is_empty() {
            mem::swap(&mut current, &mut next);

            for (record, prefix) in current.drain(..) {
                if !visited.insert(record.ty().id()) {
                    continue;
                }

                for (position, field) in record.iter().enumerate() {
                    let embedded = embedded_struct(field);
                    if !field.is_exported() && embedded.is_none() {
                        continue;
                    }

                    let Some(name) = visible_name(field) else {
                        continue;
                    };

                    let mut chain = Vec::with_capacity(prefix.len() + 1);
                    chain.extend_from_slice(&prefix);
                    chain.push(position);

                    match embedded {
                        Some(inner) => next.push((inner, chain)),
                        None => {
                            chains.entry(name).or_insert_with(|| chain.into_boxed_slice());
                        }
                    }
                }
            }
        }

        Self { chains }
    }

    /// Returns the position chain registered for `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&[usize]> {
        self.chains.get(name).map(|chain| &**chain)
    }

    /// Returns the visible field names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.chains.keys().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

impl fmt::Debug for FieldTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.chains.iter()).finish()
    }
}

/// The struct promoted by an embedded field, looking through indirections.
fn embedded_struct(field: &NamedField) -> Option<&'static StructInfo> {
    if !field.is_embedded() {
        return None;
    }
    field.type_info().peel_indirect().as_struct()
}

/// `None` when the tag hides the field.
fn visible_name(field: &NamedField) -> Option<&'static str> {
    let Some(tag) = field.tag().filter(|tag| !tag.is_empty()) else {
        return Some(field.name());
    };
    if tag == "-" {
        return None;
    }

    let alias = tag.split(',').next().unwrap_or_default();
    if !alias.is_empty() && alias.chars().all(is_name_char) {
        Some(alias)
    } else {
        Some(field.name())
    }
}

/// Letters, decimal digits and a fixed set of punctuation.
fn is_name_char(c: char) -> bool {
    if "!#$%&()*+-./:;<=>?@[]^_{|}~ ".contains(c) {
        return true;
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

// -----------------------------------------------------------------------------
// FieldCache

/// Field tables keyed by struct type.
///
/// Each table is built the first time its type is looked up and shared from
/// then on. Concurrent first lookups of one type may build it more than once,
/// but only the first finished table is published.
///
/// [`FieldCache::global`] backs [`Pointer::get`](crate::Pointer::get) and the
/// free [`get`](crate::get). A private cache can be passed to
/// [`Pointer::get_with`](crate::Pointer::get_with).
pub struct FieldCache {
    tables: RwLock<TypeIdMap<Arc<FieldTable>>>,
}

impl FieldCache {
    /// Creates an empty cache.
    pub const fn new() -> Self {
        Self {
            tables: RwLock::new(TypeIdMap::new()),
        }
    }

    /// The process-wide cache.
    pub fn global() -> &'static FieldCache {
        static GLOBAL: FieldCache = FieldCache::new();
        &GLOBAL
    }

    /// Returns the table of `info`, building it on first use.
    pub fn table(&self, info: &'static StructInfo) -> Arc<FieldTable> {
        let type_id = info.ty().id();

        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(table) = tables.get(&type_id) {
            return Arc::clone(table);
        }
        drop(tables);

        let built = Arc::new(FieldTable::build(info));
        log::debug!(
            "built field table for `{}` ({} fields)",
            info.type_path(),
            built.len()
        );

        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(tables.get_or_insert(type_id, || built))
    }

    /// Returns the number of cached tables.
    pub fn len(&self) -> usize {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if no table has been built yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached table.
    pub fn clear(&self) {
        self.tables
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Default for FieldCache {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FieldCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldCache")
            .field("len", &self.len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests
