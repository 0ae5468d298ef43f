use super::{cli_manager, command::Command, common};
use anyhow::{Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use lazy_static::lazy_static;
use log::{debug, info};
use std::{io::Write, str::FromStr};
use strong_arms::{
    io::{TableWriter, TablesPayload},
    relations::{ArmstrongConstruction, ArmstrongTables},
};
use strum::IntoEnumIterator;

const CMD_NAME: &str = "relations";

const ARG_RELATION: &str = "RELATION";
const ARG_JSON: &str = "JSON";
const ARG_VERIFY: &str = "VERIFY";

const ALL_RELATIONS: &str = "all";

lazy_static! {
    static ref RELATION_NAMES: Vec<&'static str> = ArmstrongConstruction::iter()
        .map(|c| c.into())
        .chain(std::iter::once(ALL_RELATIONS))
        .collect();
}

pub(crate) struct RelationsCommand;

impl RelationsCommand {
    pub(crate) fn new() -> Self {
        RelationsCommand
    }
}

impl<'a> Command<'a> for RelationsCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Computes Armstrong relations for a set of functional dependencies")
            .setting(AppSettings::DisableVersion)
            .args(&common::input_args())
            .arg(
                Arg::with_name(ARG_RELATION)
                    .short("r")
                    .long("relation")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(&RELATION_NAMES)
                    .default_value(ALL_RELATIONS)
                    .help("the relation(s) to display"),
            )
            .arg(
                Arg::with_name(ARG_JSON)
                    .long("json")
                    .help("write all the relations as a single JSON object"),
            )
            .arg(
                Arg::with_name(ARG_VERIFY)
                    .long("verify")
                    .help("check that the relations satisfy exactly the implied dependencies"),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let instance = common::read_instance(arg_matches)?;
        let tables = ArmstrongTables::compute(&instance)?;
        info!(
            "computed {} closure(s), {} of them kept for the relations",
            tables.closures().len(),
            tables.abridged_closures().len()
        );
        tables
            .abridged_closures()
            .iter()
            .for_each(|e| debug!("abridged closure {}+ = {}", e.key(), e.closure()));
        let constructions: Vec<ArmstrongConstruction> = match arg_matches.value_of(ARG_RELATION) {
            None | Some(ALL_RELATIONS) => ArmstrongConstruction::iter().collect(),
            Some(r) => vec![ArmstrongConstruction::from_str(r)
                .with_context(|| format!(r#"unknown relation "{}""#, r))?],
        };
        if arg_matches.is_present(ARG_VERIFY) {
            for c in constructions.iter() {
                tables.verify(*c)?;
                info!("the {} relation is an Armstrong relation", c.as_ref());
            }
        }
        let mut out = std::io::stdout().lock();
        if arg_matches.is_present(ARG_JSON) {
            let payload = TablesPayload::from(&tables);
            serde_json::to_writer(&mut out, &payload).context("while writing JSON output")?;
            writeln!(out).context("while writing JSON output")?;
            return out.flush().context("while writing JSON output");
        }
        let writer = TableWriter::default();
        for c in constructions {
            info!("writing the {} relation", c.as_ref());
            match c {
                ArmstrongConstruction::Regular => {
                    writer.write_relation(c.title(), tables.regular(), &mut out)?
                }
                ArmstrongConstruction::Strong => {
                    writer.write_relation(c.title(), tables.strong(), &mut out)?
                }
                ArmstrongConstruction::Product => {
                    writer.write_relation(c.title(), tables.product(), &mut out)?
                }
            }
        }
        Ok(())
    }
}
