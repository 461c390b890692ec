//! Markdown table form.

use crate::forms::{FieldDescriptor, FieldKind, FormKind, FormSchema, FormValues};

const COLUMNS: FieldDescriptor = FieldDescriptor {
    name: "columns",
    label: "Columns",
    kind: FieldKind::Number { min: 1, max: 10 },
    default: "3",
    placeholder: "3",
    hint: None,
};

const ROWS: FieldDescriptor = FieldDescriptor {
    name: "rows",
    label: "Rows",
    kind: FieldKind::Number { min: 1, max: 20 },
    default: "3",
    placeholder: "3",
    hint: None,
};

const HEADERS: FieldDescriptor = FieldDescriptor {
    name: "headers",
    label: "Column headers (comma-separated)",
    kind: FieldKind::ShortText,
    default: "",
    placeholder: "Name, Age, City",
    hint: Some("Leave blank for generic headers (Column 1, Column 2…)"),
};

pub static TABLE_FORM: FormSchema = FormSchema {
    kind: FormKind::Table,
    fields: &[COLUMNS, ROWS, HEADERS],
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableInput {
    pub columns: usize,
    pub rows: usize,
    /// Exactly `columns` entries once resolved.
    pub headers: Vec<String>,
}

impl TableInput {
    pub fn from_values(values: &FormValues) -> Self {
        let columns = usize::try_from(COLUMNS.number(values)).unwrap_or(1);
        let rows = usize::try_from(ROWS.number(values)).unwrap_or(1);
        let headers = resolve_headers(values.get(HEADERS.name), columns);
        Self {
            columns,
            rows,
            headers,
        }
    }

    /// Header row, `---` separator row, then `rows` rows of blank cells.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows + 2);
        lines.push(pipe_row(self.headers.iter().map(String::as_str)));
        lines.push(pipe_row((0..self.columns).map(|_| "---")));
        for _ in 0..self.rows {
            lines.push(pipe_row((0..self.columns).map(|_| " ")));
        }
        lines.join("\n")
    }
}

/// Split comma-separated headers and fit them to `columns`.
///
/// Blank entries (`"A, ,C"`) take the generated `Column N` label for their
/// position, missing entries are generated the same way, extras are dropped.
pub fn resolve_headers(raw: &str, columns: usize) -> Vec<String> {
    let supplied: Vec<&str> = match raw.trim() {
        "" => Vec::new(),
        trimmed => trimmed.split(',').map(str::trim).collect(),
    };

    (0..columns)
        .map(|position| match supplied.get(position) {
            Some(header) if !header.is_empty() => (*header).to_string(),
            _ => format!("Column {}", position + 1),
        })
        .collect()
}

fn pipe_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    format!("| {} |", cells.collect::<Vec<_>>().join(" | "))
}
