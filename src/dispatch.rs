use crate::combinator;
use crate::descriptor::{ClassDef, DescriptorKind, PrimitiveKind, TypeDescriptor};
use crate::registry;
use crate::report::Mismatch;
use crate::value::Value;

pub fn attempt(value: &Value, descriptor: &TypeDescriptor) -> Result<(), Mismatch> {
    if value.is_absent() {
        return Ok(());
    }
    // Explicit null passes every type except the void marker.
    if value.is_null() {
        return match descriptor.kind() {
            DescriptorKind::Primitive(PrimitiveKind::Void) => {
                Err(Mismatch::bare(value, descriptor.name()))
            }
            _ => Ok(()),
        };
    }
    match descriptor.kind() {
        DescriptorKind::Nominal(class) => match registry::routine_for(class) {
            Some(routine) => registry::run(&routine, value, descriptor.name()),
            None => instance_check(value, class, descriptor),
        },
        DescriptorKind::Primitive(kind) => primitive_check(value, *kind, descriptor),
        DescriptorKind::ArrayOf(element_types) => {
            combinator::attempt_array(value, element_types, descriptor)
        }
        DescriptorKind::Structure(fields) => {
            combinator::attempt_structure(value, fields, descriptor)
        }
    }
}

fn primitive_check(
    value: &Value,
    kind: PrimitiveKind,
    descriptor: &TypeDescriptor,
) -> Result<(), Mismatch> {
    let conforms = match kind {
        PrimitiveKind::String => matches!(value, Value::String(_)),
        PrimitiveKind::Number => matches!(value, Value::Int(_) | Value::Float(_)),
        PrimitiveKind::Boolean => matches!(value, Value::Bool(_)),
        // Only the absent value satisfies void, and that is handled above.
        PrimitiveKind::Void => false,
    };
    if conforms {
        Ok(())
    } else {
        Err(Mismatch::bare(value, descriptor.name()))
    }
}

fn instance_check(
    value: &Value,
    class: &ClassDef,
    descriptor: &TypeDescriptor,
) -> Result<(), Mismatch> {
    if let Value::Instance(instance) = value {
        if instance.class().descends_from(class) {
            return Ok(());
        }
    }
    Err(Mismatch::bare(value, descriptor.name()))
}
