use super::{cli_manager, command::Command};
use anyhow::{Context, Result};
use clap::{App, AppSettings, ArgMatches, SubCommand};
use std::io::Write;

const CMD_NAME: &str = "authors";

/// Prints the app name and version, followed by one author per line.
pub(crate) struct AuthorsCommand<'a> {
    app_name: &'a str,
    app_version: &'a str,
    authors: &'a str,
}

impl<'a> AuthorsCommand<'a> {
    /// Builds the command; `authors` is a colon-separated list, as in `CARGO_PKG_AUTHORS`.
    pub(crate) fn new(app_name: &'a str, app_version: &'a str, authors: &'a str) -> Self {
        AuthorsCommand {
            app_name,
            app_version,
            authors,
        }
    }

    fn write_authors(&self, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing authors";
        writeln!(writer, "{} {}", self.app_name, self.app_version).context(context)?;
        for author in self
            .authors
            .split(':')
            .map(str::trim)
            .filter(|a| !a.is_empty())
        {
            writeln!(writer, "  {}", author).context(context)?;
        }
        writer.flush().context(context)
    }
}

impl<'a> Command<'a> for AuthorsCommand<'a> {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Displays the app version and its authors")
            .setting(AppSettings::DisableVersion)
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, _arg_matches: &ArgMatches<'_>) -> Result<()> {
        self.write_authors(&mut std::io::stdout().lock())
    }
}
