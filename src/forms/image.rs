//! Markdown image form with optional caption.

use crate::forms::{FieldDescriptor, FieldKind, FormKind, FormSchema, FormValues};

pub const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/600/300";

const URL: FieldDescriptor = FieldDescriptor {
    name: "url",
    label: "Image URL",
    kind: FieldKind::ShortText,
    default: PLACEHOLDER_IMAGE_URL,
    placeholder: "https://example.com/photo.jpg",
    hint: None,
};

const ALT: FieldDescriptor = FieldDescriptor {
    name: "alt",
    label: "Alt text (description)",
    kind: FieldKind::ShortText,
    default: "Image",
    placeholder: "A beautiful sunset",
    hint: None,
};

const CAPTION: FieldDescriptor = FieldDescriptor {
    name: "caption",
    label: "Caption (optional)",
    kind: FieldKind::ShortText,
    default: "",
    placeholder: "Photo by Jane Doe",
    hint: Some("Caption appears below the image as italic text"),
};

pub static IMAGE_FORM: FormSchema = FormSchema {
    kind: FormKind::Image,
    fields: &[URL, ALT, CAPTION],
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInput {
    pub url: String,
    pub alt: String,
    pub caption: Option<String>,
}

impl ImageInput {
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            url: URL.text(values),
            alt: ALT.text(values),
            caption: CAPTION.optional_text(values),
        }
    }

    pub fn render(&self) -> String {
        let image = format!("![{}]({})", self.alt, self.url);
        match &self.caption {
            Some(caption) => format!("{image}\n\n*{caption}*"),
            None => image,
        }
    }
}
