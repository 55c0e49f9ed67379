use crate::descriptor::ClassDef;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub enum Value {
    Absent,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
    Instance(InstanceValue),
}

impl Value {
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(items)
    }

    pub fn object<K: Into<String>>(entries: Vec<(K, Value)>) -> Self {
        Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    pub fn instance<K: Into<String>>(class: &Rc<ClassDef>, fields: Vec<(K, Value)>) -> Self {
        Value::Instance(InstanceValue::new(class, fields))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn get_property(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object(entries) => entries
                .iter()
                .find(|(key, _)| key.as_str() == name)
                .map(|(_, value)| value),
            Value::Instance(instance) => instance.get_field(name),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "\"{v}\""),
            Value::Array(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Object(entries) => write_entries(f, entries),
            Value::Instance(instance) => write_entries(f, &instance.fields),
        }
    }
}

fn write_entries(f: &mut fmt::Formatter<'_>, entries: &[(String, Value)]) -> fmt::Result {
    write!(f, "{{")?;
    for (idx, (key, value)) in entries.iter().enumerate() {
        if idx > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{key}: {value}")?;
    }
    write!(f, "}}")
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

#[derive(Clone, Debug)]
pub struct InstanceValue {
    class: Rc<ClassDef>,
    fields: Vec<(String, Value)>,
}

impl InstanceValue {
    pub fn new<K: Into<String>>(class: &Rc<ClassDef>, fields: Vec<(K, Value)>) -> Self {
        Self {
            class: class.clone(),
            fields: fields
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }

    pub fn class(&self) -> &Rc<ClassDef> {
        &self.class
    }

    pub fn get_field(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(key, _)| key.as_str() == name)
            .map(|(_, value)| value)
    }
}
