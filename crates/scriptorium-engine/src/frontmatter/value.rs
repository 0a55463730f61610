/// A single frontmatter value as inferred from its header text.
#[derive(Debug, Clone, PartialEq)]
pub enum FrontmatterValue {
    String(String),
    Number(f64),
    Bool(bool),
    List(Vec<String>),
}

impl FrontmatterValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FrontmatterValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FrontmatterValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FrontmatterValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FrontmatterValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for FrontmatterValue {
    fn from(s: &str) -> Self {
        FrontmatterValue::String(s.to_string())
    }
}

impl From<String> for FrontmatterValue {
    fn from(s: String) -> Self {
        FrontmatterValue::String(s)
    }
}

impl From<bool> for FrontmatterValue {
    fn from(b: bool) -> Self {
        FrontmatterValue::Bool(b)
    }
}

impl From<f64> for FrontmatterValue {
    fn from(n: f64) -> Self {
        FrontmatterValue::Number(n)
    }
}

impl From<Vec<String>> for FrontmatterValue {
    fn from(items: Vec<String>) -> Self {
        FrontmatterValue::List(items)
    }
}

impl From<Vec<&str>> for FrontmatterValue {
    fn from(items: Vec<&str>) -> Self {
        FrontmatterValue::List(items.into_iter().map(str::to_string).collect())
    }
}

/// Ordered, key-unique frontmatter record.
///
/// Insertion order is preserved so serialisation is stable. Inserting an
/// existing key replaces the value in its original position. Keys the
/// application does not know about are kept as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    entries: Vec<(String, FrontmatterValue)>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FrontmatterValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns a copy of this record with `key` set, leaving `self` untouched.
    pub fn with(&self, key: impl Into<String>, value: impl Into<FrontmatterValue>) -> Self {
        let mut next = self.clone();
        next.insert(key, value);
        next
    }

    /// Returns a copy of this record without `key`.
    pub fn without(&self, key: &str) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(k, _)| k != key)
                .cloned()
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FrontmatterValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FrontmatterValue::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(FrontmatterValue::as_bool)
    }

    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(FrontmatterValue::as_number)
    }

    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(FrontmatterValue::as_list)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrontmatterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn title(&self) -> Option<&str> {
        self.get_str("title")
    }

    pub fn slug(&self) -> Option<&str> {
        self.get_str("slug")
    }

    pub fn date(&self) -> Option<&str> {
        self.get_str("date")
    }

    pub fn description(&self) -> Option<&str> {
        self.get_str("description")
            .or_else(|| self.get_str("meta_description"))
    }

    /// Tags accept either a list or a single comma-separated string.
    pub fn tags(&self) -> Vec<String> {
        match self.get("tags") {
            Some(FrontmatterValue::List(items)) => items.clone(),
            Some(FrontmatterValue::String(s)) => s
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// A document is a draft when `draft: true` or `status: draft`.
    pub fn is_draft(&self) -> bool {
        self.get_bool("draft").unwrap_or(false) || self.get_str("status") == Some("draft")
    }
}

impl<K: Into<String>, V: Into<FrontmatterValue>> FromIterator<(K, V)> for Frontmatter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fm = Frontmatter::new();
        for (k, v) in iter {
            fm.insert(k, v);
        }
        fm
    }
}
