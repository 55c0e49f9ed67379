use crate::descriptor::{DescriptorKind, TypeDescriptor};
use crate::dispatch;
use crate::registry::Probe;
use crate::report::{not_instance, Mismatch, Reason};
use crate::value::Value;

pub fn array_of(element_types: &[TypeDescriptor]) -> TypeDescriptor {
    let names: Vec<&str> = element_types.iter().map(|ty| ty.name()).collect();
    TypeDescriptor::new(
        format!("array of {}", names.join("/")),
        DescriptorKind::ArrayOf(element_types.to_vec()),
    )
}

pub fn structure(properties: &[(&str, TypeDescriptor)]) -> TypeDescriptor {
    let names: Vec<&str> = properties.iter().map(|(name, _)| *name).collect();
    let fields = properties
        .iter()
        .map(|(name, ty)| (name.to_string(), ty.clone()))
        .collect();
    TypeDescriptor::new(
        format!("object with properties {}", names.join(", ")),
        DescriptorKind::Structure(fields),
    )
}

pub(crate) fn attempt_array(
    value: &Value,
    element_types: &[TypeDescriptor],
    descriptor: &TypeDescriptor,
) -> Result<(), Mismatch> {
    let items = match value {
        Value::Array(items) => items,
        _ => {
            return Err(Mismatch::with_reasons(
                value,
                descriptor.name(),
                vec![Reason::leaf(not_instance(value, "Array"))],
            ));
        }
    };
    let mut probe = Probe::new();
    for item in items {
        probe.is(item, element_types);
    }
    if probe.is_empty() {
        return Ok(());
    }
    let summary = Reason::branch(not_instance(value, descriptor.name()), probe.into_reasons());
    Err(Mismatch::with_reasons(
        value,
        descriptor.name(),
        vec![summary],
    ))
}

pub(crate) fn attempt_structure(
    value: &Value,
    fields: &[(String, TypeDescriptor)],
    descriptor: &TypeDescriptor,
) -> Result<(), Mismatch> {
    if !matches!(value, Value::Object(_) | Value::Instance(_)) {
        return Err(Mismatch::with_reasons(
            value,
            descriptor.name(),
            vec![Reason::leaf(not_instance(value, "Object"))],
        ));
    }
    let absent = Value::Absent;
    let mut reasons = Vec::new();
    // Every declared property is checked; failures do not short-circuit.
    for (property, ty) in fields {
        let field = value.get_property(property).unwrap_or(&absent);
        if dispatch::attempt(field, ty).is_err() {
            reasons.push(Reason::leaf(not_instance(field, ty.name())));
        }
    }
    if reasons.is_empty() {
        Ok(())
    } else {
        Err(Mismatch::with_reasons(value, descriptor.name(), reasons))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{number, string};

    fn reason_messages(mismatch: &Mismatch) -> Vec<&str> {
        mismatch.reasons().iter().map(|r| r.message()).collect()
    }

    #[test]
    fn array_of_accepts_any_declared_element_type() {
        let descriptor = array_of(&[string(), number()]);
        let value = Value::array(vec![
            Value::from("one"),
            Value::from(55),
            Value::from("two"),
        ]);
        assert!(dispatch::attempt(&value, &descriptor).is_ok());
    }

    #[test]
    fn array_of_rejects_non_arrays_before_item_checks() {
        let descriptor = array_of(&[string()]);
        let mismatch = dispatch::attempt(&Value::from(55), &descriptor).unwrap_err();
        assert_eq!(reason_messages(&mismatch), vec!["55 is not instance of Array"]);
    }

    #[test]
    fn failing_item_reports_one_reason_per_element_type() {
        let descriptor = array_of(&[string(), number()]);
        let value = Value::array(vec![Value::from("aaa"), Value::from(true)]);
        let mismatch = dispatch::attempt(&value, &descriptor).unwrap_err();
        assert_eq!(
            reason_messages(&mismatch),
            vec!["[\"aaa\", true] is not instance of array of string/number"]
        );
        let nested: Vec<&str> = mismatch.reasons()[0]
            .nested()
            .iter()
            .map(|r| r.message())
            .collect();
        assert_eq!(
            nested,
            vec![
                "true is not instance of string",
                "true is not instance of number",
            ]
        );
    }

    #[test]
    fn reasons_from_several_failing_items_concatenate_in_item_order() {
        let descriptor = array_of(&[string()]);
        let value = Value::array(vec![Value::from(true), Value::from(5)]);
        let mismatch = dispatch::attempt(&value, &descriptor).unwrap_err();
        let nested: Vec<&str> = mismatch.reasons()[0]
            .nested()
            .iter()
            .map(|r| r.message())
            .collect();
        assert_eq!(
            nested,
            vec![
                "true is not instance of string",
                "5 is not instance of string",
            ]
        );
    }

    #[test]
    fn null_items_pass_through() {
        let descriptor = array_of(&[string()]);
        let value = Value::array(vec![Value::Null, Value::from("one")]);
        assert!(dispatch::attempt(&value, &descriptor).is_ok());
    }

    #[test]
    fn structure_checks_each_property_against_its_single_type() {
        let descriptor = structure(&[("name", string()), ("age", number())]);
        let ok = Value::object(vec![
            ("name", Value::from("Vojta")),
            ("age", Value::from(28)),
        ]);
        assert!(dispatch::attempt(&ok, &descriptor).is_ok());

        let bad = Value::object(vec![
            ("name", Value::from("Vojta")),
            ("age", Value::from(true)),
        ]);
        let mismatch = dispatch::attempt(&bad, &descriptor).unwrap_err();
        assert_eq!(
            reason_messages(&mismatch),
            vec!["true is not instance of number"]
        );
    }

    #[test]
    fn structure_rejects_non_objects() {
        let descriptor = structure(&[("name", string())]);
        let mismatch = dispatch::attempt(&Value::from(123), &descriptor).unwrap_err();
        assert_eq!(
            reason_messages(&mismatch),
            vec!["123 is not instance of Object"]
        );
    }

    #[test]
    fn structure_reports_all_failing_properties() {
        let descriptor = structure(&[("name", string()), ("age", number())]);
        let bad = Value::object(vec![
            ("name", Value::from(1)),
            ("age", Value::from(true)),
        ]);
        let mismatch = dispatch::attempt(&bad, &descriptor).unwrap_err();
        assert_eq!(
            reason_messages(&mismatch),
            vec![
                "1 is not instance of string",
                "true is not instance of number",
            ]
        );
    }

    #[test]
    fn missing_properties_pass_as_absent() {
        let descriptor = structure(&[("name", string())]);
        let empty = Value::object::<String>(vec![]);
        assert!(dispatch::attempt(&empty, &descriptor).is_ok());
    }

    #[test]
    fn structure_checks_instance_fields() {
        let class = crate::descriptor::ClassDef::new("Person");
        let descriptor = structure(&[("age", number())]);
        let person = Value::instance(&class, vec![("age", Value::from(28))]);
        assert!(dispatch::attempt(&person, &descriptor).is_ok());
    }

    #[test]
    fn composite_names_follow_their_children() {
        assert_eq!(array_of(&[string(), number()]).name(), "array of string/number");
        assert_eq!(
            structure(&[("name", string()), ("age", number())]).name(),
            "object with properties name, age"
        );
    }
}
