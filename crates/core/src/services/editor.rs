//! Schema-driven entity editor.
//!
//! Every admin screen is the same editor bound to a different field list.
//! Forms travel as JSON objects keyed by column name.

use charity_common::{AppError, AppResult};
use charity_db::store::Row;
use serde::Serialize;
use serde_json::Value;

/// Input widget for a field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    TextArea,
    /// Upload or URL; whichever was set last is kept.
    Image,
    /// Plain link, e.g. a PDF.
    Url,
    Checkbox,
    Select {
        options: Vec<&'static str>,
    },
    /// A list of sub-forms sharing one template.
    Repeatable {
        item_label: &'static str,
        fields: Vec<Field>,
    },
}

/// One form field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Column name.
    pub name: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: FieldKind,
    pub required: bool,
    /// Blank input is stored as null rather than an empty string.
    pub nullable: bool,
    /// Value of a blank form.
    pub default: Value,
}

impl Field {
    fn new(name: &'static str, label: &'static str, kind: FieldKind, default: Value) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            nullable: false,
            default,
        }
    }

    /// Single-line text.
    #[must_use]
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text, Value::String(String::new()))
    }

    /// Multi-line text.
    #[must_use]
    pub fn text_area(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::TextArea, Value::String(String::new()))
    }

    /// Image upload or URL.
    #[must_use]
    pub fn image(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Image, Value::String(String::new()))
    }

    /// Plain URL.
    #[must_use]
    pub fn url(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Url, Value::String(String::new()))
    }

    /// Checkbox.
    #[must_use]
    pub fn checkbox(name: &'static str, label: &'static str, default: bool) -> Self {
        Self::new(name, label, FieldKind::Checkbox, Value::Bool(default))
    }

    /// Drop-down over fixed values; the first option unless `default` says otherwise.
    #[must_use]
    pub fn select(
        name: &'static str,
        label: &'static str,
        options: &[&'static str],
        default: &'static str,
    ) -> Self {
        Self::new(
            name,
            label,
            FieldKind::Select {
                options: options.to_vec(),
            },
            Value::String(default.to_string()),
        )
    }

    /// Repeatable group of sub-fields.
    #[must_use]
    pub fn repeatable(
        name: &'static str,
        label: &'static str,
        item_label: &'static str,
        fields: Vec<Self>,
    ) -> Self {
        Self::new(
            name,
            label,
            FieldKind::Repeatable { item_label, fields },
            Value::Array(Vec::new()),
        )
    }

    /// Mark the field as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Store blank input as null.
    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    fn normalize(&self, input: Option<&Value>) -> Value {
        match &self.kind {
            FieldKind::Checkbox => match input {
                Some(Value::Bool(b)) => Value::Bool(*b),
                Some(Value::String(s)) => {
                    Value::Bool(matches!(s.trim(), "true" | "on" | "1" | "yes"))
                }
                Some(Value::Number(n)) => Value::Bool(n.as_i64() != Some(0)),
                _ => self.default.clone(),
            },
            FieldKind::Repeatable { fields, .. } => match input {
                Some(Value::Array(items)) => Value::Array(
                    items
                        .iter()
                        .map(|item| {
                            let empty = Row::new();
                            let item = item.as_object().unwrap_or(&empty);
                            Value::Object(normalize_fields(fields, item))
                        })
                        .collect(),
                ),
                _ => Value::Array(Vec::new()),
            },
            FieldKind::Select { .. } => match input {
                Some(Value::String(s)) if !s.trim().is_empty() => {
                    Value::String(s.trim().to_string())
                }
                Some(Value::Null) | None => self.default.clone(),
                Some(Value::String(_)) => self.default.clone(),
                Some(other) => other.clone(),
            },
            FieldKind::Text | FieldKind::TextArea | FieldKind::Image | FieldKind::Url => {
                let text = match input {
                    Some(Value::String(s)) => s.trim().to_string(),
                    Some(Value::Null) | None => String::new(),
                    Some(other) => other.to_string(),
                };
                if text.is_empty() && self.nullable {
                    Value::Null
                } else {
                    Value::String(text)
                }
            }
        }
    }

    fn validate(&self, value: Option<&Value>, context: &str) -> AppResult<()> {
        match &self.kind {
            FieldKind::Select { options } => {
                let valid = value
                    .and_then(Value::as_str)
                    .is_some_and(|v| options.contains(&v));
                if !valid {
                    return Err(AppError::Validation(format!(
                        "{context}{} must be one of: {}",
                        self.label,
                        options.join(", ")
                    )));
                }
            }
            FieldKind::Repeatable {
                item_label, fields, ..
            } => {
                let items = value.and_then(Value::as_array).map_or(&[][..], Vec::as_slice);
                if self.required && items.is_empty() {
                    return Err(AppError::Validation(format!(
                        "{context}Add at least one {item_label}"
                    )));
                }
                for (i, item) in items.iter().enumerate() {
                    let empty = Row::new();
                    let item = item.as_object().unwrap_or(&empty);
                    let context = format!("{context}{item_label} {}: ", i + 1);
                    validate_fields(fields, item, &context)?;
                }
            }
            FieldKind::Checkbox => {}
            FieldKind::Text | FieldKind::TextArea | FieldKind::Image | FieldKind::Url => {
                let blank = value
                    .and_then(Value::as_str)
                    .is_none_or(|v| v.trim().is_empty());
                if self.required && blank {
                    return Err(AppError::Validation(format!(
                        "{context}{} is required",
                        self.label
                    )));
                }
            }
        }
        Ok(())
    }
}

fn normalize_fields(fields: &[Field], input: &Row) -> Row {
    fields
        .iter()
        .map(|field| (field.name.to_string(), field.normalize(input.get(field.name))))
        .collect()
}

fn validate_fields(fields: &[Field], form: &Row, context: &str) -> AppResult<()> {
    for field in fields {
        field.validate(form.get(field.name), context)?;
    }
    Ok(())
}

fn blank_fields(fields: &[Field]) -> Row {
    fields
        .iter()
        .map(|field| (field.name.to_string(), field.default.clone()))
        .collect()
}

/// The field list of one screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSchema {
    pub fields: Vec<Field>,
}

impl FormSchema {
    /// Create a schema.
    #[must_use]
    pub const fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Look up a top-level field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// A blank form with every default filled in.
    #[must_use]
    pub fn blank(&self) -> Row {
        blank_fields(&self.fields)
    }

    /// Current values of a stored row, restricted to the form's fields.
    #[must_use]
    pub fn values_of(&self, row: &Row) -> Row {
        self.fields
            .iter()
            .map(|field| {
                let value = row
                    .get(field.name)
                    .filter(|v| !v.is_null())
                    .cloned()
                    .unwrap_or_else(|| field.default.clone());
                (field.name.to_string(), value)
            })
            .collect()
    }

    /// Keep only known fields, trim text and apply defaults.
    #[must_use]
    pub fn normalize(&self, input: &Row) -> Row {
        normalize_fields(&self.fields, input)
    }

    /// Check required fields and allowed values. Nothing deeper.
    pub fn validate(&self, form: &Row) -> AppResult<()> {
        validate_fields(&self.fields, form, "")
    }

    /// Append a blank item to a repeatable group.
    pub fn add_item(&self, form: &mut Row, name: &str) -> AppResult<()> {
        let fields = self.repeatable_fields(name)?;
        let mut items = take_items(form, name);
        items.push(Value::Object(blank_fields(fields)));
        form.insert(name.to_string(), Value::Array(items));
        Ok(())
    }

    /// Remove the item at `index` from a repeatable group.
    pub fn remove_item(&self, form: &mut Row, name: &str, index: usize) -> AppResult<()> {
        self.repeatable_fields(name)?;
        let mut items = take_items(form, name);
        let removed = if index < items.len() {
            items.remove(index);
            true
        } else {
            false
        };
        form.insert(name.to_string(), Value::Array(items));
        if removed {
            Ok(())
        } else {
            Err(AppError::BadRequest(format!("{name} has no item {index}")))
        }
    }

    /// Set an image field, replacing whatever was there.
    pub fn set_image(&self, form: &mut Row, name: &str, value: String) -> AppResult<()> {
        match self.field(name).map(|f| &f.kind) {
            Some(FieldKind::Image) => {
                form.insert(name.to_string(), Value::String(value));
                Ok(())
            }
            _ => Err(AppError::BadRequest(format!("{name} is not an image field"))),
        }
    }

    fn repeatable_fields(&self, name: &str) -> AppResult<&[Field]> {
        match self.field(name).map(|f| &f.kind) {
            Some(FieldKind::Repeatable { fields, .. }) => Ok(fields),
            _ => Err(AppError::BadRequest(format!(
                "{name} is not a repeatable field"
            ))),
        }
    }
}

/// Take the items of a repeatable field; missing or malformed reads as empty.
fn take_items(form: &mut Row, name: &str) -> Vec<Value> {
    match form.remove(name) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}
