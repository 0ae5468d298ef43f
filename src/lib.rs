//! Strong Arms computes Armstrong relations for sets of functional dependencies.
//!
//! Given a schema and dependencies whose determinants are single attributes,
//! the closures of the proper subsets of the schema are computed and reduced,
//! then used to build three relations satisfying exactly the implied dependencies:
//! a regular Armstrong relation and two strong Armstrong relations.

#![warn(missing_docs)]

pub mod closures;

pub mod fd;

pub mod io;

pub mod relations;
