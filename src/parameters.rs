//! Ordered, read-only parameter store for parsed MIME types.
//!
//! Parameter order is part of the serialized form, so the store is backed by
//! an [`IndexMap`] and iterates in insertion order. Names are already
//! lower-cased by the parser; lookups are exact.

use indexmap::IndexMap;

/// The parameters of a [`MimeType`](crate::MimeType), in insertion order.
///
/// Only the parser can add entries. Callers get a shared view through
/// [`MimeType::parameters`](crate::MimeType::parameters).
///
/// # Examples
///
/// ```
/// use mimesniff::MimeType;
///
/// let mime = MimeType::parse("text/plain; charset=utf-8; format=flowed").unwrap();
/// let names: Vec<_> = mime.parameters().keys().collect();
/// assert_eq!(names, ["charset", "format"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parameters(IndexMap<String, String>);

impl Parameters {
    pub(crate) fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Inserts `name` only if it is not present yet. Returns whether it was inserted.
    pub(crate) fn insert_first(&mut self, name: String, value: String) -> bool {
        if self.0.contains_key(&name) {
            return false;
        }
        self.0.insert(name, value);
        true
    }

    /// Returns the value for an exact (already lower-cased) parameter name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns true if a parameter with this exact name exists.
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.iter())
    }

    /// Iterates over parameter names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates over parameter values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    /// Returns an owned copy of the underlying map.
    pub fn to_index_map(&self) -> IndexMap<String, String> {
        self.0.clone()
    }
}

// IndexMap equality ignores order; parameter order is significant here.
impl PartialEq for Parameters {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().eq(other.0.iter())
    }
}

impl Eq for Parameters {}

/// Iterator over the parameters of a MIME type.
#[derive(Debug, Clone)]
pub struct Iter<'a>(indexmap::map::Iter<'a, String, String>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Parameters {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Parameters> for IndexMap<String, String> {
    fn from(params: Parameters) -> Self {
        params.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Parameters {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
