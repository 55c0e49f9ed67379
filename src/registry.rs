use crate::descriptor::{ClassDef, TypeDescriptor};
use crate::dispatch;
use crate::report::{not_instance, Mismatch, Reason};
use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::rc::Rc;

pub type RoutineResult = Result<bool, Box<dyn Error>>;

pub(crate) type Routine = Rc<dyn Fn(&Value, &mut Probe) -> RoutineResult>;

thread_local! {
    // Written only by `define`, read by the dispatcher. Last writer wins.
    static CHECKS: RefCell<HashMap<u64, Routine>> = RefCell::new(HashMap::new());
}

pub enum DefineTarget {
    Name(String),
    Class(Rc<ClassDef>),
}

impl From<&str> for DefineTarget {
    fn from(name: &str) -> Self {
        DefineTarget::Name(name.to_string())
    }
}

impl From<&Rc<ClassDef>> for DefineTarget {
    fn from(class: &Rc<ClassDef>) -> Self {
        DefineTarget::Class(class.clone())
    }
}

impl From<&TypeDescriptor> for DefineTarget {
    fn from(descriptor: &TypeDescriptor) -> Self {
        match descriptor.class() {
            Some(class) => DefineTarget::Class(class.clone()),
            None => panic!(
                "a check can only be attached to a named type, not `{}`",
                descriptor.name()
            ),
        }
    }
}

pub fn define<T, F>(target: T, routine: F) -> TypeDescriptor
where
    T: Into<DefineTarget>,
    F: Fn(&Value, &mut Probe) -> RoutineResult + 'static,
{
    let class = match target.into() {
        DefineTarget::Name(name) => ClassDef::new(name),
        DefineTarget::Class(class) => class,
    };
    CHECKS.with(|checks| {
        checks.borrow_mut().insert(class.id(), Rc::new(routine));
    });
    TypeDescriptor::from(&class)
}

pub(crate) fn routine_for(class: &ClassDef) -> Option<Routine> {
    CHECKS.with(|checks| checks.borrow().get(&class.id()).cloned())
}

// Per-invocation accumulator handed to a custom routine.
pub struct Probe {
    reasons: Vec<Reason>,
}

impl Probe {
    pub(crate) fn new() -> Self {
        Self {
            reasons: Vec::new(),
        }
    }

    pub fn fail(&mut self, reason: impl Into<String>) {
        self.reasons.push(Reason::leaf(reason));
    }

    pub fn is(&mut self, value: &Value, alternatives: &[TypeDescriptor]) -> bool {
        for descriptor in alternatives {
            if dispatch::attempt(value, descriptor).is_ok() {
                return true;
            }
        }
        for descriptor in alternatives {
            self.fail(not_instance(value, descriptor.name()));
        }
        false
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }

    pub(crate) fn into_reasons(self) -> Vec<Reason> {
        self.reasons
    }
}

pub(crate) fn run(routine: &Routine, value: &Value, expected: &str) -> Result<(), Mismatch> {
    let mut probe = Probe::new();
    match routine(value, &mut probe) {
        // A routine error wipes out whatever the probe gathered; only the
        // error text survives.
        Err(error) => Err(Mismatch::with_reasons(
            value,
            expected,
            vec![Reason::leaf(error.to_string())],
        )),
        Ok(_) if !probe.is_empty() => {
            Err(Mismatch::with_reasons(value, expected, probe.into_reasons()))
        }
        Ok(false) => Err(Mismatch::bare(value, expected)),
        Ok(true) => Ok(()),
    }
}
