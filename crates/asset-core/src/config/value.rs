//! Values produced by statically evaluating a configuration file

/// Key of a configuration array entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArrayKey {
    Int(i64),
    String(String),
}

impl ArrayKey {
    /// Build a key from a string, turning canonical decimal integers
    /// (`"8"`, `"-3"`, but not `"08"` or `"-0"`) into integer keys the way
    /// the configuration language does.
    pub fn from_string(s: &str) -> Self {
        let digits = s.strip_prefix('-').unwrap_or(s);
        let canonical = !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && (digits == "0" || !digits.starts_with('0'))
            && s != "-0";
        match s.parse::<i64>() {
            Ok(n) if canonical => Self::Int(n),
            _ => Self::String(s.to_string()),
        }
    }
}

/// Ordered array with int or string keys.
///
/// Inserting an existing key replaces its value in place, so entry order is
/// the order keys were first seen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigArray {
    entries: Vec<(ArrayKey, ConfigValue)>,
    next_index: i64,
}

impl ConfigArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under the next free integer key.
    pub fn push(&mut self, value: ConfigValue) {
        let key = ArrayKey::Int(self.next_index);
        self.insert(key, value);
    }

    pub fn insert(&mut self, key: ArrayKey, value: ConfigValue) {
        if let ArrayKey::Int(n) = key
            && n >= self.next_index
        {
            self.next_index = n.saturating_add(1);
        }
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a value by string key (integer-like strings match int keys).
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        let key = ArrayKey::from_string(key);
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ArrayKey, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn values(&self) -> impl Iterator<Item = &ConfigValue> {
        self.entries.iter().map(|(_, v)| v)
    }
}

/// A statically evaluated configuration value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(ConfigArray),
    /// An expression the evaluator does not model (variables, function
    /// calls, constants, operators other than concatenation, ...)
    #[default]
    Opaque,
}

impl ConfigValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ConfigArray> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Index into an array value; `None` for non-arrays and absent keys.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.as_array()?.get(key)
    }

    /// Follow a key path through nested arrays.
    pub fn get_path(&self, path: &[&str]) -> Option<&ConfigValue> {
        path.iter().try_fold(self, |value, key| value.get(key))
    }

    /// String conversion used by concatenation. Floats and compound values
    /// have no static string form here.
    pub fn to_php_string(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            Self::Int(n) => Some(n.to_string()),
            Self::Bool(true) => Some("1".to_string()),
            Self::Bool(false) | Self::Null => Some(String::new()),
            Self::Float(_) | Self::Array(_) | Self::Opaque => None,
        }
    }

    /// Key form of a scalar, `None` when the value cannot be a key.
    pub fn to_key(&self) -> Option<ArrayKey> {
        match self {
            Self::String(s) => Some(ArrayKey::from_string(s)),
            Self::Int(n) => Some(ArrayKey::Int(*n)),
            Self::Bool(b) => Some(ArrayKey::Int(i64::from(*b))),
            Self::Null => Some(ArrayKey::String(String::new())),
            Self::Float(f) if f.is_finite() => Some(ArrayKey::Int(f.trunc() as i64)),
            _ => None,
        }
    }
}
