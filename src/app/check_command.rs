use super::{cli_manager, command::Command, common};
use anyhow::{anyhow, Result};
use clap::{App, AppSettings, ArgMatches, SubCommand};
use log::{debug, info};

const CMD_NAME: &str = "check";

pub(crate) struct CheckCommand;

impl CheckCommand {
    pub(crate) fn new() -> Self {
        CheckCommand
    }
}

impl<'a> Command<'a> for CheckCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks input dependency files and requests for errors")
            .setting(AppSettings::DisableVersion)
            .args(&common::input_args())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let instance = common::read_instance(arg_matches)?;
        info!(
            "schema is R = ({})",
            instance
                .schema()
                .attributes()
                .iter()
                .map(|a| a.to_string())
                .collect::<Vec<String>>()
                .join(", ")
        );
        instance
            .dependencies()
            .iter()
            .for_each(|(lhs, rhs)| debug!("dependency {}->{}", lhs, rhs));
        let unknown = instance
            .dependencies()
            .unknown_attributes(instance.schema());
        if !unknown.is_empty() {
            return Err(anyhow!(
                "the dependencies refer to attribute(s) {} which are not part of the schema",
                unknown
            ));
        }
        info!("no error found");
        Ok(())
    }
}
