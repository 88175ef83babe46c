//! Convenience macros for error handling and propagation

/// Early return with a [`BikeReportError`](crate::BikeReportError).
///
/// With a leading variant constructor name (`config`, `dataset`,
/// `graph`, `validation`) the error is built through that constructor;
/// without one it falls back to a generic error.
///
/// # Examples
///
/// ```rust
/// use bikereport_common::bail;
/// use bikereport_common::Result;
///
/// fn check_value(value: i32) -> Result<()> {
///     if value < 0 {
///         bail!(validation, "value cannot be negative: {}", value);
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($kind:ident, $msg:literal $(,)?) => {
        return Err($crate::BikeReportError::$kind($msg))
    };
    ($kind:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::BikeReportError::$kind(format!($fmt, $($arg)*)))
    };
    ($msg:literal $(,)?) => {
        return Err($crate::BikeReportError::new($msg))
    };
    ($err:expr $(,)?) => {
        return Err($crate::BikeReportError::new($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::BikeReportError::new(format!($fmt, $($arg)*)))
    };
}

/// Check a condition and [`bail!`] when it does not hold.
///
/// Accepts the same optional variant constructor name as [`bail!`].
///
/// # Examples
///
/// ```rust
/// use bikereport_common::ensure;
/// use bikereport_common::Result;
///
/// fn validate_positive(value: i32) -> Result<()> {
///     ensure!(value > 0, "Value must be positive, got: {}", value);
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $kind:ident, $msg:literal $(,)?) => {
        if !$cond {
            return Err($crate::BikeReportError::$kind($msg));
        }
    };
    ($cond:expr, $kind:ident, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::BikeReportError::$kind(format!($fmt, $($arg)*)));
        }
    };
    ($cond:expr, $msg:literal $(,)?) => {
        if !$cond {
            return Err($crate::BikeReportError::new($msg));
        }
    };
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($crate::BikeReportError::new($err));
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::BikeReportError::new(format!($fmt, $($arg)*)));
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{BikeReportError, Result};

    fn guarded(value: i32) -> Result<i32> {
        ensure!(value >= 0, "negative value: {}", value);
        if value > 100 {
            bail!("value too large: {}", value);
        }
        Ok(value)
    }

    fn classified(value: i32) -> Result<i32> {
        ensure!(value >= 0, validation, "negative value: {}", value);
        if value > 100 {
            bail!(dataset, "value too large: {}", value);
        }
        Ok(value)
    }

    #[test]
    fn test_ensure_and_bail() {
        assert_eq!(guarded(42).unwrap(), 42);
        assert!(guarded(-1).is_err());
        assert!(guarded(101).is_err());
    }

    #[test]
    fn test_variant_forms_pick_the_constructor() {
        assert_eq!(classified(42).unwrap(), 42);
        assert!(matches!(
            classified(-1).unwrap_err(),
            BikeReportError::Validation { .. }
        ));
        assert!(matches!(
            classified(101).unwrap_err(),
            BikeReportError::Dataset { .. }
        ));
    }
}
