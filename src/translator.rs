//! Attribute name translation.

use std::collections::HashMap;

/// Bidirectional mapping between small unsigned integers and attribute
/// names, enabling dictionary-style compression of repeated object keys.
/// Objects whose keys are stored as integers cannot be decoded without
/// one; every operation that may encounter such keys takes the translator
/// as an explicit parameter.
///
/// The `Sync` bound lets one translator instance serve concurrent
/// readers.
pub trait AttributeTranslator: Sync {
    /// The attribute name for `id`, or `None` when the id is unknown.
    fn id_to_string(&self, id: u64) -> Option<&str>;

    /// The id for `name`, or `None` when the name is not translated.
    fn string_to_id(&self, name: &str) -> Option<u64>;
}

/// A `HashMap`-backed translator, filled once at configuration time.
#[derive(Debug, Default)]
pub struct BasicAttributeTranslator {
    names: HashMap<u64, String>,
    ids: HashMap<String, u64>,
}

impl BasicAttributeTranslator {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a mapping in both directions; a later registration for
    /// the same id or name wins.
    #[inline]
    pub fn add<T: Into<String>>(&mut self, id: u64, name: T) {
        let name = name.into();
        self.ids.insert(name.clone(), id);
        self.names.insert(id, name);
    }
}

impl AttributeTranslator for BasicAttributeTranslator {
    #[inline]
    fn id_to_string(&self, id: u64) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    #[inline]
    fn string_to_id(&self, name: &str) -> Option<u64> {
        self.ids.get(name).copied()
    }
}
