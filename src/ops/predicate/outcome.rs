use crate::value::Value;

/// The result of a predicate callback.
pub trait Outcome {
    /// Returns true if the outcome counts as a pass when filtering.
    fn is_truthy(&self) -> bool;

    /// Returns true only if the outcome is exactly the boolean `true`.
    fn is_true(&self) -> bool;
}

impl Outcome for bool {
    fn is_truthy(&self) -> bool {
        *self
    }

    fn is_true(&self) -> bool {
        *self
    }
}

impl Outcome for Value {
    fn is_truthy(&self) -> bool {
        Value::is_truthy(self)
    }

    fn is_true(&self) -> bool {
        matches!(self, Value::Bool(true))
    }
}

impl<T: Outcome + ?Sized> Outcome for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }

    fn is_true(&self) -> bool {
        (**self).is_true()
    }
}

/// [`None`] never passes, and [`Some`] passes exactly when its contents do, so `Some(false)` and
/// `Some(Value::from(""))` both fail a filter.
impl<T: Outcome> Outcome for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Outcome::is_truthy)
    }

    fn is_true(&self) -> bool {
        self.as_ref().is_some_and(Outcome::is_true)
    }
}
