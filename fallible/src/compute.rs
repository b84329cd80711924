use crate::error::{ArgError, Error, Result};

/// The one argument both computations refuse.
pub const UNWORKABLE: i64 = 42;

const OFFSET: i64 = 3;

/// Adds three to `argument`, failing with an opaque [`Error::Generic`] for [`UNWORKABLE`].
///
/// The addition wraps on overflow.
#[tracing::instrument(level = "debug")]
pub fn compute_basic(argument: i64) -> Result<i64> {
    if argument == UNWORKABLE {
        tracing::debug!("rejecting unworkable argument");
        return Err(Error::generic("can't work with 42"));
    }

    Ok(argument.wrapping_add(OFFSET))
}

/// Adds three to `argument`, failing with an [`ArgError`] naming the argument for [`UNWORKABLE`].
///
/// The addition wraps on overflow.
#[tracing::instrument(level = "debug")]
pub fn compute_structured(argument: i64) -> Result<i64, ArgError> {
    if argument == UNWORKABLE {
        tracing::debug!("rejecting unworkable argument");
        return Err(ArgError::new(argument, "can't work with it"));
    }

    Ok(argument.wrapping_add(OFFSET))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{UNWORKABLE, compute_basic, compute_structured};
    use crate::error::{ArgError, Error};

    const WORKABLE: [i64; 8] = [i64::MIN, -43, -1, 0, 7, 41, 43, 1 << 40];

    #[test]
    fn workable_arguments_gain_three() {
        for argument in WORKABLE {
            assert_eq!(compute_basic(argument), Ok(argument + 3), "f1({argument})");
            assert_eq!(
                compute_structured(argument),
                Ok(argument + 3),
                "f2({argument})"
            );
        }
    }

    #[test]
    fn addition_wraps_at_the_top_of_the_range() {
        assert_eq!(compute_basic(i64::MAX), Ok(i64::MIN + 2));
        assert_eq!(compute_structured(i64::MAX), Ok(i64::MIN + 2));
    }

    #[test]
    fn basic_rejects_42_with_a_message() {
        let error = compute_basic(UNWORKABLE).unwrap_err();

        assert_eq!(error, Error::Generic("can't work with 42".to_owned()));
        assert_eq!(error.to_string(), "can't work with 42");
        assert!(error.as_structured().is_none());
    }

    #[test]
    fn structured_rejects_42_with_detail() {
        let error = compute_structured(UNWORKABLE).unwrap_err();

        assert_eq!(error, ArgError::new(42, "can't work with it"));
        assert_eq!(error.argument(), 42);
        assert_eq!(error.problem(), "can't work with it");
        assert_eq!(error.to_string(), "42 - can't work with it");
    }

    #[test]
    fn structured_failure_survives_widening() {
        let error = compute_structured(UNWORKABLE).map_err(Error::from).unwrap_err();

        assert!(matches!(&error, Error::Structured(detail) if detail.argument() == 42));
        assert_eq!(error.to_string(), "42 - can't work with it");
    }
}
