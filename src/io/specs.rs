use crate::fd::DependencyInstance;
use anyhow::Result;
use std::io::Read;

/// The type of callback functions to call when warnings are raised while parsing an instance.
///
/// The first parameter is the (1-based) line number the warning refers to,
/// or `0` if the warning concerns the whole input rather than a line.
pub type WarningHandler = Box<dyn Fn(usize, String)>;

/// A trait implemented by objects able to read dependency instances.
pub trait InstanceReader {
    /// Reads a [`DependencyInstance`].
    ///
    /// In case warnings are raised, the callback functions registered by [add_warning_handler](Self::add_warning_handler) are triggered.
    ///
    /// # Example
    ///
    /// ```
    /// # use strong_arms::fd::DependencyInstance;
    /// # use strong_arms::io::{DependencyFileReader, InstanceReader};
    /// fn read_instance_from_str(s: &str) -> DependencyInstance {
    ///     let reader = DependencyFileReader::default();
    ///     reader.read(&mut s.as_bytes()).expect("invalid dependency file")
    /// }
    /// # read_instance_from_str("R = (A, B)\nF = {A->B}\n");
    /// ```
    fn read(&self, reader: &mut dyn Read) -> Result<DependencyInstance>;

    /// Adds a callback function to call when warnings are raised while parsing an instance.
    fn add_warning_handler(&mut self, h: WarningHandler);
}
