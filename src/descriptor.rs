use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

thread_local! {
    static NEXT_CLASS_ID: Cell<u64> = Cell::new(0);
}

// Identity for the custom-check registry; two descriptors naming the same
// class share one id and therefore one registered routine.
#[derive(Debug)]
pub struct ClassDef {
    id: u64,
    name: String,
    parent: Option<Rc<ClassDef>>,
}

impl ClassDef {
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Self::build(name, None)
    }

    pub fn extends(name: impl Into<String>, parent: &Rc<ClassDef>) -> Rc<Self> {
        Self::build(name, Some(parent.clone()))
    }

    fn build(name: impl Into<String>, parent: Option<Rc<ClassDef>>) -> Rc<Self> {
        let id = NEXT_CLASS_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        Rc::new(Self {
            id,
            name: name.into(),
            parent,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    pub fn descends_from(&self, ancestor: &ClassDef) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if class.id == ancestor.id {
                return true;
            }
            current = class.parent.as_deref();
        }
        false
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveKind {
    String,
    Number,
    Boolean,
    Void,
}

impl PrimitiveKind {
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Number => "number",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Void => "void",
        }
    }
}

#[derive(Clone, Debug)]
pub struct TypeDescriptor {
    inner: Rc<DescriptorInner>,
}

#[derive(Debug)]
struct DescriptorInner {
    name: String,
    kind: DescriptorKind,
}

#[derive(Debug)]
pub(crate) enum DescriptorKind {
    Primitive(PrimitiveKind),
    Nominal(Rc<ClassDef>),
    ArrayOf(Vec<TypeDescriptor>),
    Structure(Vec<(String, TypeDescriptor)>),
}

impl TypeDescriptor {
    pub(crate) fn new(name: String, kind: DescriptorKind) -> Self {
        Self {
            inner: Rc::new(DescriptorInner { name, kind }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub(crate) fn kind(&self) -> &DescriptorKind {
        &self.inner.kind
    }

    pub fn class(&self) -> Option<&Rc<ClassDef>> {
        match &self.inner.kind {
            DescriptorKind::Nominal(class) => Some(class),
            _ => None,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.name)
    }
}

impl From<&Rc<ClassDef>> for TypeDescriptor {
    fn from(class: &Rc<ClassDef>) -> Self {
        TypeDescriptor::new(
            class.name().to_string(),
            DescriptorKind::Nominal(class.clone()),
        )
    }
}

fn primitive(kind: PrimitiveKind) -> TypeDescriptor {
    TypeDescriptor::new(kind.name().to_string(), DescriptorKind::Primitive(kind))
}

pub fn string() -> TypeDescriptor {
    primitive(PrimitiveKind::String)
}

pub fn number() -> TypeDescriptor {
    primitive(PrimitiveKind::Number)
}

pub fn boolean() -> TypeDescriptor {
    primitive(PrimitiveKind::Boolean)
}

pub fn void() -> TypeDescriptor {
    primitive(PrimitiveKind::Void)
}
