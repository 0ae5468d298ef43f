pub(crate) mod app_helper;

mod authors_command;
pub(crate) use authors_command::AuthorsCommand;

mod check_command;
pub(crate) use check_command::CheckCommand;

pub(crate) mod cli_manager;

mod closures_command;
pub(crate) use closures_command::ClosuresCommand;

pub(crate) mod command;

pub(crate) mod common;

mod relations_command;
pub(crate) use relations_command::RelationsCommand;
