use super::Val;
use crate::error;
use crate::lang::Error;
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, Error>;

/// ## Operator semantics
///
/// Arithmetic coerces both sides to numbers; text that does not
/// parse reads as zero. `+` concatenates when either side is text.
/// Comparisons are textual when either side is text.
pub struct Operation {}

impl Operation {
    pub fn negate(val: Val) -> Result<Val> {
        Ok(Val::Number(-val.to_number()))
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Number(lhs.to_number() * rhs.to_number()))
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        let r = rhs.to_number();
        if r == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Val::Number(lhs.to_number() / r))
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        if lhs.is_string() || rhs.is_string() {
            let s = format!("{}{}", lhs, rhs);
            return Ok(Val::String(s.into()));
        }
        Ok(Val::Number(lhs.to_number() + rhs.to_number()))
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Number(lhs.to_number() - rhs.to_number()))
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(Operation::compare(&lhs, &rhs) == Some(Ordering::Equal)))
    }

    pub fn not_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(Operation::compare(&lhs, &rhs) != Some(Ordering::Equal)))
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(Operation::compare(&lhs, &rhs) == Some(Ordering::Less)))
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(matches!(
            Operation::compare(&lhs, &rhs),
            Some(Ordering::Less) | Some(Ordering::Equal)
        )))
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(Operation::compare(&lhs, &rhs) == Some(Ordering::Greater)))
    }

    pub fn greater_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(matches!(
            Operation::compare(&lhs, &rhs),
            Some(Ordering::Greater) | Some(Ordering::Equal)
        )))
    }

    // None only when a NaN is involved; every comparison but <> is then false.
    fn compare(lhs: &Val, rhs: &Val) -> Option<Ordering> {
        if lhs.is_string() || rhs.is_string() {
            Some(lhs.to_string().cmp(&rhs.to_string()))
        } else {
            lhs.to_number().partial_cmp(&rhs.to_number())
        }
    }
}
