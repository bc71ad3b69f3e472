//! Typed two-way binding between a control and a piece of state
//!
//! The decode/render rules live here as plain functions over [`RawControl`];
//! the Leptos components in `shared::components::bound` attach them to DOM
//! elements.

use std::sync::Arc;

use crate::shared::date_utils::now_rfc3339;

/// How a control's raw content maps onto a typed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Numeric text; zero renders as an empty control
    Integer,
    Text,
    Boolean,
    /// A `<select>` whose option values are the backing integers
    EnumInteger,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Text(String),
    Bool(bool),
}

impl FieldValue {
    pub fn as_int(&self) -> i64 {
        match self {
            FieldValue::Int(n) => *n,
            FieldValue::Bool(b) => i64::from(*b),
            FieldValue::Text(s) => parse_integer(s),
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Int(n) => n.to_string(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }

    pub fn as_bool(&self) -> bool {
        match self {
            FieldValue::Int(n) => *n != 0,
            FieldValue::Bool(b) => *b,
            FieldValue::Text(s) => !s.is_empty() && s != "false",
        }
    }
}

/// What the control shows or reports
#[derive(Debug, Clone, PartialEq)]
pub enum RawControl {
    Text(String),
    Checked(bool),
}

/// Keep digits, and a minus sign only in leading position
pub fn sanitize_integer(raw: &str) -> String {
    raw.chars()
        .enumerate()
        .filter(|(i, c)| c.is_ascii_digit() || (*i == 0 && *c == '-'))
        .map(|(_, c)| c)
        .collect()
}

/// Malformed input, overflow and the empty string all give 0
pub fn parse_integer(raw: &str) -> i64 {
    sanitize_integer(raw).parse().unwrap_or(0)
}

impl ControlKind {
    pub fn decode(self, raw: &RawControl) -> FieldValue {
        match (self, raw) {
            (ControlKind::Integer | ControlKind::EnumInteger, RawControl::Text(s)) => {
                FieldValue::Int(parse_integer(s))
            }
            (ControlKind::Integer | ControlKind::EnumInteger, RawControl::Checked(b)) => {
                FieldValue::Int(i64::from(*b))
            }
            (ControlKind::Text, RawControl::Text(s)) => FieldValue::Text(s.clone()),
            (ControlKind::Text, RawControl::Checked(b)) => FieldValue::Text(b.to_string()),
            (ControlKind::Boolean, RawControl::Checked(b)) => FieldValue::Bool(*b),
            (ControlKind::Boolean, RawControl::Text(s)) => {
                FieldValue::Bool(FieldValue::Text(s.clone()).as_bool())
            }
        }
    }

    pub fn render(self, value: &FieldValue) -> RawControl {
        match self {
            ControlKind::Integer => match value.as_int() {
                0 => RawControl::Text(String::new()),
                n => RawControl::Text(n.to_string()),
            },
            ControlKind::EnumInteger => RawControl::Text(value.as_int().to_string()),
            ControlKind::Text => RawControl::Text(value.as_text()),
            ControlKind::Boolean => RawControl::Checked(value.as_bool()),
        }
    }

    /// Text the control should hold right after an edit, if it changes
    pub fn normalize(self, raw: &RawControl) -> Option<String> {
        match (self, raw) {
            (ControlKind::Integer | ControlKind::EnumInteger, RawControl::Text(s)) => {
                let clean = sanitize_integer(s);
                (clean != *s).then_some(clean)
            }
            _ => None,
        }
    }
}

/// Conversion between a record field type and [`FieldValue`]
pub trait BindValue: Clone + 'static {
    fn to_field(&self) -> FieldValue;
    fn from_field(value: FieldValue) -> Self;
}

impl BindValue for i64 {
    fn to_field(&self) -> FieldValue {
        FieldValue::Int(*self)
    }

    fn from_field(value: FieldValue) -> Self {
        value.as_int()
    }
}

impl BindValue for i32 {
    fn to_field(&self) -> FieldValue {
        FieldValue::Int(i64::from(*self))
    }

    fn from_field(value: FieldValue) -> Self {
        i32::try_from(value.as_int()).unwrap_or(0)
    }
}

impl BindValue for u32 {
    fn to_field(&self) -> FieldValue {
        FieldValue::Int(i64::from(*self))
    }

    fn from_field(value: FieldValue) -> Self {
        u32::try_from(value.as_int()).unwrap_or(0)
    }
}

impl BindValue for String {
    fn to_field(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }

    fn from_field(value: FieldValue) -> Self {
        value.as_text()
    }
}

impl BindValue for bool {
    fn to_field(&self) -> FieldValue {
        FieldValue::Bool(*self)
    }

    fn from_field(value: FieldValue) -> Self {
        value.as_bool()
    }
}

/// Optional timestamp shown as a checkbox: checked means "set to now"
impl BindValue for Option<String> {
    fn to_field(&self) -> FieldValue {
        FieldValue::Bool(self.is_some())
    }

    fn from_field(value: FieldValue) -> Self {
        value.as_bool().then(now_rfc3339)
    }
}

/// Getter/setter pair plus the control kind
///
/// Cheap to clone; recreated on each render pass.
#[derive(Clone)]
pub struct Binding {
    kind: ControlKind,
    read: Arc<dyn Fn() -> FieldValue + Send + Sync>,
    write: Arc<dyn Fn(FieldValue) + Send + Sync>,
}

impl Binding {
    pub fn new<V: BindValue>(
        kind: ControlKind,
        read: impl Fn() -> V + Send + Sync + 'static,
        write: impl Fn(V) + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            read: Arc::new(move || read().to_field()),
            write: Arc::new(move |value| write(V::from_field(value))),
        }
    }

    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    pub fn current(&self) -> FieldValue {
        (self.read)()
    }

    /// State to control
    pub fn rendered(&self) -> RawControl {
        self.kind.render(&self.current())
    }

    /// Control to state. Returns replacement text for the control when the
    /// raw input had to be sanitized.
    pub fn apply_input(&self, raw: &RawControl) -> Option<String> {
        let normalized = self.kind.normalize(raw);
        (self.write)(self.kind.decode(raw));
        normalized
    }
}
