//! Objects used to read dependency instances and to write the computed relations.

mod dependency_file_reader;
pub use dependency_file_reader::DependencyFileReader;

mod json_request;
pub use json_request::JsonRequestReader;
pub use json_request::ValidationErrors;

mod json_response;
pub use json_response::process_request;
pub use json_response::ResponsePayload;
pub use json_response::SymbolicGroupPayload;
pub use json_response::TablesPayload;

mod specs;
pub use specs::InstanceReader;
pub use specs::WarningHandler;

mod table_writer;
pub use table_writer::TableWriter;

mod warning_result;
