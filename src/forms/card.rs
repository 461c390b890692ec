//! Card form. The only form whose output is framework-specific HTML.

use crate::forms::{FieldDescriptor, FieldKind, FormKind, FormSchema, FormValues};
use crate::framework::Framework;

const TITLE: FieldDescriptor = FieldDescriptor {
    name: "title",
    label: "Card title",
    kind: FieldKind::ShortText,
    default: "Card Title",
    placeholder: "My Card",
    hint: None,
};

const SUBTITLE: FieldDescriptor = FieldDescriptor {
    name: "subtitle",
    label: "Subtitle (optional)",
    kind: FieldKind::ShortText,
    default: "",
    placeholder: "A short subtitle",
    hint: None,
};

const BODY: FieldDescriptor = FieldDescriptor {
    name: "body",
    label: "Card content",
    kind: FieldKind::LongText,
    default: "Card content goes here.",
    placeholder: "Write your card content here…",
    hint: None,
};

pub static CARD_FORM: FormSchema = FormSchema {
    kind: FormKind::Card,
    fields: &[TITLE, SUBTITLE, BODY],
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardInput {
    pub title: String,
    pub subtitle: Option<String>,
    pub body: String,
}

impl CardInput {
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            title: TITLE.text(values),
            subtitle: SUBTITLE.optional_text(values),
            body: BODY.text(values),
        }
    }

    /// Card markup in `framework`'s idiom. A missing subtitle drops its whole
    /// line, wrapper included.
    pub fn render(&self, framework: Framework) -> String {
        let title = &self.title;
        let body = &self.body;
        let subtitle = |open: &str, close: &str| {
            self.subtitle
                .as_deref()
                .map(|text| format!("\n    {open}{text}{close}"))
                .unwrap_or_default()
        };

        match framework {
            Framework::PoshUi => format!(
                "<div class=\"card\">\n  <div class=\"card-header\">\n    <h3>{title}</h3>{}\n  </div>\n  <div class=\"card-body\">\n    <p>{body}</p>\n  </div>\n</div>",
                subtitle("<p>", "</p>")
            ),
            Framework::Oat => format!(
                "<article class=\"card\">\n  <header>\n    <h3>{title}</h3>{}\n  </header>\n  <p>{body}</p>\n</article>",
                subtitle("<p>", "</p>")
            ),
            Framework::Spectre => format!(
                "<div class=\"card\">\n  <div class=\"card-header\">\n    <div class=\"card-title h5\">{title}</div>{}\n  </div>\n  <div class=\"card-body\">{body}</div>\n</div>",
                subtitle("<div class=\"card-subtitle text-gray\">", "</div>")
            ),
        }
    }
}
