use super::{
    app_helper::AppHelper, command::Command, AuthorsCommand, CheckCommand, ClosuresCommand,
    RelationsCommand,
};
use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgMatches};
use log::{info, warn};
use std::{
    fs::{self, File},
    io::{BufReader, Read},
    path::PathBuf,
};
use strong_arms::{
    fd::DependencyInstance,
    io::{DependencyFileReader, InstanceReader, JsonRequestReader},
};

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        authors,
        "Strong Arms, an Armstrong relation generator for functional dependencies.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AuthorsCommand::new(app_name, app_version, authors)),
        Box::new(CheckCommand::new()),
        Box::new(ClosuresCommand::new()),
        Box::new(RelationsCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app
}

pub(crate) const ARG_INPUT: &str = "INPUT";
pub(crate) const ARG_INPUT_JSON: &str = "INPUT_JSON";

pub(crate) fn input_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name(ARG_INPUT)
            .short("f")
            .takes_value(true)
            .empty_values(false)
            .multiple(false)
            .help("the input file that contains the schema and the dependencies")
            .required_unless(ARG_INPUT_JSON)
            .conflicts_with(ARG_INPUT_JSON),
        Arg::with_name(ARG_INPUT_JSON)
            .long("input-json")
            .takes_value(true)
            .empty_values(false)
            .multiple(false)
            .help(r#"a JSON request like {"columns": ["A", "B"], "dependencies": {"A": "B"}}"#),
    ]
}

/// Reads the instance given either as a file or as a JSON request.
pub(crate) fn read_instance(arg_matches: &ArgMatches<'_>) -> Result<DependencyInstance> {
    let instance = match (
        arg_matches.value_of(ARG_INPUT_JSON),
        arg_matches.value_of(ARG_INPUT),
    ) {
        (Some(request), _) => {
            info!("reading JSON request");
            JsonRequestReader::default()
                .read_request(request)
                .context("while reading the JSON request")?
        }
        (None, Some(file)) => read_file_path(file, &mut DependencyFileReader::default())?,
        (None, None) => return Err(anyhow!("no input was provided")),
    };
    info!(
        "the schema has {} attribute(s) and {} dependency rule(s)",
        instance.schema().len(),
        instance.dependencies().len(),
    );
    Ok(instance)
}

pub(crate) fn read_file_path(
    file_path: &str,
    reader: &mut dyn InstanceReader,
) -> Result<DependencyInstance> {
    reader.add_warning_handler(Box::new(|line, msg| {
        if line == 0 {
            warn!("{}", msg)
        } else {
            warn!("at line {}: {}", line, msg)
        }
    }));
    read_file_path_with(file_path, &|r| reader.read(r))
}

pub(crate) fn read_file_path_with<F, R>(file_path: &str, reader: &F) -> Result<R>
where
    F: Fn(&mut dyn Read) -> Result<R>,
{
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let mut file_reader = BufReader::new(File::open(canonicalized)?);
    (reader)(&mut file_reader)
}

/// Canonicalize a path given by the user.
pub(crate) fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}
