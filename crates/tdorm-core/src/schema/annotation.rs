use indexmap::IndexMap;
use std::sync::{PoisonError, RwLock};

/// Setting key that excludes a field from statements and result mapping.
pub const IGNORE: &str = "-";

/// Setting key that marks a field as a tag column.
pub const TAG: &str = "TAG";

/// Setting key naming the result column a field is loaded from.
pub const COLUMN: &str = "COLUMN";

/// Column/tag metadata parsed from a field's `#[sql("...")]` and
/// `#[td("...")]` attributes.
///
/// Attribute text is a `;`-separated list of settings. Each setting is either
/// `key:value` or a bare flag such as `TAG`. Keys are trimmed and uppercased;
/// a bare flag maps to itself. When several dialects are given, later ones
/// override earlier ones key by key.
///
/// ```
/// use tdorm_core::schema::FieldAnnotation;
///
/// let annotation = FieldAnnotation::parse(["column:location;TAG"]);
/// assert!(annotation.is_tag());
/// assert_eq!(annotation.column().as_deref(), Some("location"));
/// ```
#[derive(Debug)]
pub struct FieldAnnotation {
    /// Raw attribute text, one entry per dialect, in precedence order.
    raw: Vec<String>,

    settings: RwLock<IndexMap<String, String>>,

    ignored: bool,

    tag: bool,
}

impl FieldAnnotation {
    /// Parses the raw attribute text of each dialect, lowest precedence
    /// first. Malformed text never fails; it simply yields fewer settings.
    pub fn parse<I, S>(dialects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw: Vec<String> = dialects.into_iter().map(Into::into).collect();
        let mut settings = IndexMap::new();

        for src in &raw {
            if src.is_empty() {
                continue;
            }

            for setting in src.split(';') {
                let (key, value) = match setting.split_once(':') {
                    Some((key, value)) => (key.trim().to_uppercase(), value.to_string()),
                    None => {
                        let key = setting.trim().to_uppercase();
                        let value = key.clone();
                        (key, value)
                    }
                };

                settings.insert(key, value);
            }
        }

        let ignored = settings.contains_key(IGNORE);
        let tag = !ignored && settings.contains_key(TAG);

        Self {
            raw,
            settings: RwLock::new(settings),
            ignored,
            tag,
        }
    }

    /// An annotation with no settings, for fields without attributes.
    pub fn empty() -> Self {
        Self::parse(std::iter::empty::<String>())
    }

    pub fn raw(&self) -> &[String] {
        &self.raw
    }

    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    pub fn is_tag(&self) -> bool {
        self.tag
    }

    /// Looks up a setting by its uppercased key.
    pub fn setting(&self, key: &str) -> Option<String> {
        let settings = self.settings.read().unwrap_or_else(PoisonError::into_inner);
        settings.get(key).cloned()
    }

    /// Adds or replaces a setting after parsing. Does not change whether the
    /// field is ignored or a tag.
    pub fn set_setting(&self, key: impl Into<String>, value: impl Into<String>) {
        let mut settings = self
            .settings
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        settings.insert(key.into(), value.into());
    }

    /// The result column this field is loaded from, if any.
    pub fn column(&self) -> Option<String> {
        self.setting(COLUMN)
    }
}

impl Clone for FieldAnnotation {
    fn clone(&self) -> Self {
        let settings = self
            .settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        Self {
            raw: self.raw.clone(),
            settings: RwLock::new(settings),
            ignored: self.ignored,
            tag: self.tag,
        }
    }
}

impl Default for FieldAnnotation {
    fn default() -> Self {
        Self::empty()
    }
}
