//! This module contains the data model of functional dependencies: attributes, schemas and dependency sets.

mod attributes;
pub use attributes::Attribute;
pub use attributes::AttributeSet;

mod dependencies;
pub use dependencies::DependencyInstance;
pub use dependencies::FunctionalDependencies;

mod error;
pub use error::ArmstrongError;

mod schema;
pub use schema::Schema;
