use crate::fd::Attribute;
use thiserror::Error;

/// The errors raised while computing closures and Armstrong relations.
///
/// Library functions return [anyhow::Result]; these values are wrapped inside them
/// and may be recovered with `downcast_ref::<ArmstrongError>()`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArmstrongError {
    /// A dependency refers to an attribute that is not part of the schema.
    #[error("attribute {attribute} is not part of the schema")]
    InvalidAttribute {
        /// The unknown attribute
        attribute: Attribute,
    },

    /// A schema was given the same attribute twice.
    #[error("attribute {attribute} appears more than once in the schema")]
    DuplicateAttribute {
        /// The repeated attribute
        attribute: Attribute,
    },

    /// An internal consistency check failed.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            "attribute Z is not part of the schema",
            ArmstrongError::InvalidAttribute {
                attribute: Attribute::from('Z')
            }
            .to_string()
        );
        assert_eq!(
            "invariant violation: foo",
            ArmstrongError::InvariantViolation("foo".to_string()).to_string()
        );
    }

    #[test]
    fn test_downcast_from_anyhow() {
        let err: anyhow::Error = ArmstrongError::DuplicateAttribute {
            attribute: Attribute::from('A'),
        }
        .into();
        assert_eq!(
            Some(&ArmstrongError::DuplicateAttribute {
                attribute: Attribute::from('A')
            }),
            err.downcast_ref::<ArmstrongError>()
        );
    }
}
