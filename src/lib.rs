pub mod assert;
pub mod combinator;
pub mod descriptor;
pub mod dispatch;
pub mod error;
pub mod registry;
pub mod report;
pub mod value;

pub use assert::{argument_types, assert_type, return_type};
pub use combinator::{array_of, structure};
pub use descriptor::{boolean, number, string, void, ClassDef, PrimitiveKind, TypeDescriptor};
pub use dispatch::attempt;
pub use error::{TypeError, TypeResult};
pub use registry::{define, DefineTarget, Probe, RoutineResult};
pub use report::{Mismatch, Reason};
pub use value::{InstanceValue, Value};

#[cfg(test)]
mod tests;
