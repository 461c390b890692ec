//! Markdown list form: bullet, numbered or task list.

use crate::forms::{ChoiceOption, FieldDescriptor, FieldKind, FormKind, FormSchema, FormValues};

const STYLE: FieldDescriptor = FieldDescriptor {
    name: "type",
    label: "List type",
    kind: FieldKind::Choice {
        options: &[
            ChoiceOption {
                value: "ul",
                label: "Bullet list",
            },
            ChoiceOption {
                value: "ol",
                label: "Numbered list",
            },
            ChoiceOption {
                value: "task",
                label: "Task list",
            },
        ],
    },
    default: "ul",
    placeholder: "",
    hint: None,
};

const ITEMS: FieldDescriptor = FieldDescriptor {
    name: "items",
    label: "Items (one per line)",
    kind: FieldKind::LongText,
    default: "",
    placeholder: "First item\nSecond item\nThird item",
    hint: Some("Each line becomes a list item"),
};

pub static LIST_FORM: FormSchema = FormSchema {
    kind: FormKind::List,
    fields: &[STYLE, ITEMS],
};

const PLACEHOLDER_ITEMS: [&str; 3] = ["Item 1", "Item 2", "Item 3"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListStyle {
    #[default]
    Unordered,
    Ordered,
    Task,
}

impl ListStyle {
    /// Accepts the form values (`ul`, `ol`, `task`) and their long names.
    pub fn parse(raw: &str) -> Option<ListStyle> {
        match raw.trim() {
            "ul" | "unordered" => Some(ListStyle::Unordered),
            "ol" | "ordered" => Some(ListStyle::Ordered),
            "task" => Some(ListStyle::Task),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListInput {
    pub style: ListStyle,
    /// Never empty once resolved.
    pub items: Vec<String>,
}

impl ListInput {
    pub fn from_values(values: &FormValues) -> Self {
        let style = ListStyle::parse(values.get(STYLE.name))
            .or_else(|| ListStyle::parse(STYLE.default))
            .unwrap_or_default();

        let mut items: Vec<String> = values
            .get(ITEMS.name)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        if items.is_empty() {
            items = PLACEHOLDER_ITEMS.iter().map(|item| item.to_string()).collect();
        }

        Self { style, items }
    }

    pub fn render(&self) -> String {
        self.items
            .iter()
            .enumerate()
            .map(|(position, item)| match self.style {
                ListStyle::Unordered => format!("- {item}"),
                ListStyle::Ordered => format!("{}. {item}", position + 1),
                ListStyle::Task => format!("- [ ] {item}"),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
