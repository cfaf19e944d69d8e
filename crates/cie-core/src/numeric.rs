use crate::CieError;

/// Coordinate and pixel scalar.
pub type Real = f64;

/// Reject NaN and infinities, naming the offending quantity.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CieError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CieError::NonFinite { what, value: v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_values_are_rejected() {
        for v in [Real::NAN, Real::INFINITY, Real::NEG_INFINITY] {
            let err = ensure_finite(v, "u'").unwrap_err();
            assert!(format!("{err}").contains("Non-finite value for u'"));
        }
    }

    #[test]
    fn values_outside_the_diagram_pass() {
        assert_eq!(ensure_finite(-3.5, "x").unwrap(), -3.5);
        assert_eq!(ensure_finite(0.3127, "x").unwrap(), 0.3127);
    }
}
