//! Accessor naming conventions
//!
//! Getters are named `getX` or `isX`, setters `setX`. The field name is the
//! remainder with its first character lower-cased.

use crate::error::{Error, Result};
use crate::types::AccessorKind;

const GETTER_PREFIXES: [&str; 2] = ["get", "is"];
const SETTER_PREFIX: &str = "set";

/// Strip `prefix` from `name` and lower-case the next character
///
/// Returns `None` if `name` does not start with `prefix` or nothing is left.
pub fn strip_prefix(name: &str, prefix: &str) -> Option<String> {
    let rest = name.strip_prefix(prefix)?;
    let mut chars = rest.chars();
    let first = chars.next()?;
    Some(first.to_lowercase().chain(chars).collect())
}

/// Field name for a getter method
pub fn getter_field_name(method: &str) -> Result<String> {
    GETTER_PREFIXES
        .iter()
        .find_map(|prefix| strip_prefix(method, prefix))
        .ok_or_else(|| Error::malformed_accessor(method, "getter has wrong prefix"))
}

/// Field name for a setter method
pub fn setter_field_name(method: &str) -> Result<String> {
    strip_prefix(method, SETTER_PREFIX)
        .ok_or_else(|| Error::malformed_accessor(method, "setter has wrong prefix"))
}

/// Check the arity of an accessor
///
/// Getters take no arguments and must return a value; setters take exactly
/// one argument.
pub fn check_arity(
    method: &str,
    kind: AccessorKind,
    param_count: usize,
    has_return: bool,
) -> Result<()> {
    match kind {
        AccessorKind::Getter if param_count != 0 => Err(Error::malformed_accessor(
            method,
            format!("getter methods should take no arguments, found {param_count}"),
        )),
        AccessorKind::Getter if !has_return => Err(Error::malformed_accessor(
            method,
            "getter methods should return a value",
        )),
        AccessorKind::Setter if param_count != 1 => Err(Error::malformed_accessor(
            method,
            format!("setter methods should take a single argument, found {param_count}"),
        )),
        _ => Ok(()),
    }
}

/// Field name for an accessor of the given kind
pub fn accessor_field_name(method: &str, kind: AccessorKind) -> Result<String> {
    match kind {
        AccessorKind::Getter => getter_field_name(method),
        AccessorKind::Setter => setter_field_name(method),
    }
}
