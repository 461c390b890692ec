//! Form-driven fragment generation for structured components.
//!
//! Table, card, list and image components are inserted through a small form
//! instead of verbatim. Each [`FormKind`] carries a static [`FormSchema`]
//! describing its fields and a generator that turns [`FormValues`] into the
//! fragment handed to the editor. Generation is a pure function of the values
//! and the framework: blank or malformed input resolves to the field's
//! declared default, never to anything remembered from an earlier form.

pub mod card;
pub mod image;
pub mod list;
pub mod numeric;
pub mod table;

use crate::framework::Framework;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub use card::CardInput;
pub use image::ImageInput;
pub use list::{ListInput, ListStyle};
pub use table::TableInput;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Table,
    Card,
    List,
    Image,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Table => "table",
            FormKind::Card => "card",
            FormKind::List => "list",
            FormKind::Image => "image",
        }
    }

    pub fn all() -> [FormKind; 4] {
        [FormKind::Table, FormKind::Card, FormKind::List, FormKind::Image]
    }

    pub fn schema(&self) -> &'static FormSchema {
        match self {
            FormKind::Table => &table::TABLE_FORM,
            FormKind::Card => &card::CARD_FORM,
            FormKind::List => &list::LIST_FORM,
            FormKind::Image => &image::IMAGE_FORM,
        }
    }

    /// Build the fragment for this form.
    ///
    /// Only cards consult `framework`; tables, lists and images are plain
    /// markdown and render the same under every framework.
    pub fn generate(&self, values: &FormValues, framework: Framework) -> String {
        match self {
            FormKind::Table => TableInput::from_values(values).render(),
            FormKind::Card => CardInput::from_values(values).render(framework),
            FormKind::List => ListInput::from_values(values).render(),
            FormKind::Image => ImageInput::from_values(values).render(),
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered field list for one form.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct FormSchema {
    pub kind: FormKind,
    pub fields: &'static [FieldDescriptor],
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Used whenever the submitted value is blank or unusable.
    pub default: &'static str,
    pub placeholder: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    ShortText,
    LongText,
    Number { min: i64, max: i64 },
    Choice { options: &'static [ChoiceOption] },
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl FieldDescriptor {
    /// Trimmed text value, or the declared default when blank.
    pub fn text(&self, values: &FormValues) -> String {
        match values.get(self.name).trim() {
            "" => self.default.to_string(),
            value => value.to_string(),
        }
    }

    /// Trimmed text value with no fallback; blank means "omit".
    pub fn optional_text(&self, values: &FormValues) -> Option<String> {
        match values.get(self.name).trim() {
            "" => None,
            value => Some(value.to_string()),
        }
    }

    /// Numeric value clamped to the field's range.
    pub fn number(&self, values: &FormValues) -> i64 {
        let (min, max) = match self.kind {
            FieldKind::Number { min, max } => (min, max),
            _ => (i64::MIN, i64::MAX),
        };
        let default = numeric::parse_leading_int(self.default).unwrap_or(min);
        numeric::clamp_or_default(values.get(self.name), min, max, default)
    }
}

/// Working values of one open form, keyed by field name.
///
/// Created empty for every form opening; missing fields read as blank.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    values: BTreeMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values pre-filled with every field's declared default.
    pub fn defaults(schema: &FormSchema) -> Self {
        schema
            .fields
            .iter()
            .fold(Self::new(), |values, field| values.with(field.name, field.default))
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
