use super::{cli_manager, command::Command, common};
use anyhow::Result;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::info;
use strong_arms::{
    closures::{compute_closures, reduce_closures},
    io::TableWriter,
};

const CMD_NAME: &str = "closures";

const ARG_ABRIDGED: &str = "ABRIDGED";

pub(crate) struct ClosuresCommand;

impl ClosuresCommand {
    pub(crate) fn new() -> Self {
        ClosuresCommand
    }
}

impl<'a> Command<'a> for ClosuresCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Displays the closures of the proper subsets of the schema and the abridged closures")
            .setting(AppSettings::DisableVersion)
            .args(&common::input_args())
            .arg(
                Arg::with_name(ARG_ABRIDGED)
                    .long("abridged")
                    .help("only display the abridged closures, used to build Armstrong relations"),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let instance = common::read_instance(arg_matches)?;
        let closures = compute_closures(&instance)?;
        info!(
            "computed {} closure(s) in {} pass(es)",
            closures.len(),
            closures.n_passes()
        );
        let abridged = reduce_closures(&closures, instance.schema().len());
        info!("kept {} abridged closure(s)", abridged.len());
        let writer = TableWriter::default();
        let mut out = std::io::stdout().lock();
        if !arg_matches.is_present(ARG_ABRIDGED) {
            writer.write_closures("Closures", closures.iter(), &mut out)?;
        }
        writer.write_closures("Abridged closures", abridged.iter(), &mut out)
    }
}
