use crate::descriptor::TypeDescriptor;
use crate::dispatch;
use crate::error::{TypeError, TypeResult};
use crate::report::{self, Reason};
use crate::value::Value;

pub fn assert_type(value: &Value, descriptor: &TypeDescriptor) -> TypeResult<()> {
    match dispatch::attempt(value, descriptor) {
        Ok(()) => Ok(()),
        Err(mismatch) => {
            let headline = format!(
                "Expected an instance of {}, got {}!",
                mismatch.expected(),
                mismatch.subject()
            );
            Err(TypeError::new(report::compose(headline, mismatch.reasons())))
        }
    }
}

pub fn return_type(value: &Value, descriptor: &TypeDescriptor) -> TypeResult<()> {
    match dispatch::attempt(value, descriptor) {
        Ok(()) => Ok(()),
        Err(mismatch) => {
            let headline = format!(
                "Expected to return an instance of {}, got {}!",
                mismatch.expected(),
                mismatch.subject()
            );
            Err(TypeError::new(report::compose(headline, mismatch.reasons())))
        }
    }
}

// Pairs are scanned positionally; the first failing pair raises.
pub fn argument_types(arguments: &[(&Value, &TypeDescriptor)]) -> TypeResult<()> {
    for (position, &(value, descriptor)) in arguments.iter().enumerate() {
        if let Err(mismatch) = dispatch::attempt(value, descriptor) {
            let line = format!(
                "{} argument has to be an instance of {}, got {}",
                report::ordinal(position + 1),
                mismatch.expected(),
                mismatch.subject()
            );
            let reasons = vec![Reason::branch(line, mismatch.reasons().to_vec())];
            return Err(TypeError::new(report::compose(
                "Invalid arguments given!".to_string(),
                &reasons,
            )));
        }
    }
    Ok(())
}
