//! Query helper for the truepass ABI.
//!
//! Answers one lookup per invocation against the embedded registry, or
//! against an ABI file given with `--file` / `TRUEPASS_ABI_FILE`, and prints
//! the result as JSON. A name that is not found prints `null` and still exits
//! successfully so shell callers can branch on the output.

use anyhow::{Result, bail};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use truepass_abi::{AbiIndex, truepass_abi};

const ABI_FILE_ENV: &str = "TRUEPASS_ABI_FILE";

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse()?;
    let index = args.source.load()?;
    println!("{}", render(&index, &args.query)?);
    Ok(())
}

fn render(index: &AbiIndex, query: &Query) -> Result<String> {
    let output = match query {
        Query::Function(name) => serde_json::to_string(&index.function(name))?,
        Query::Struct(name) => serde_json::to_string(&index.structure(name))?,
        Query::Views => serde_json::to_string(&index.view_functions())?,
        Query::Entries => serde_json::to_string(&index.entry_functions())?,
        Query::Qualify(name) => {
            serde_json::to_string(&index.descriptor().qualified_function_id(name))?
        }
        Query::Dump => index.descriptor().to_json_pretty()?,
    };
    Ok(output)
}

#[derive(Debug, PartialEq)]
enum Query {
    Function(String),
    Struct(String),
    Views,
    Entries,
    Qualify(String),
    Dump,
}

#[derive(Debug, PartialEq)]
enum AbiSource {
    Embedded,
    File(PathBuf),
}

impl AbiSource {
    fn load(&self) -> Result<AbiIndex> {
        match self {
            AbiSource::Embedded => AbiIndex::from_descriptor(truepass_abi().clone()),
            AbiSource::File(path) => AbiIndex::load(path),
        }
    }
}

struct CliArgs {
    source: AbiSource,
    query: Query,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let env_file = env::var_os(ABI_FILE_ENV).filter(|value| !value.is_empty());
        Self::parse_from(env::args_os().skip(1), env_file)
    }

    fn parse_from(
        args: impl IntoIterator<Item = OsString>,
        env_file: Option<OsString>,
    ) -> Result<Self> {
        let mut args = args.into_iter();
        let mut file: Option<PathBuf> = None;
        let mut query: Option<Query> = None;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow::anyhow!("argument is not valid UTF-8"))?;
            let parsed = match arg.as_str() {
                "--file" => {
                    if file.is_some() {
                        bail!("--file may only be provided once");
                    }
                    file = Some(PathBuf::from(next_value(&mut args, "--file")?));
                    continue;
                }
                "--function" => Query::Function(next_value(&mut args, "--function")?),
                "--struct" => Query::Struct(next_value(&mut args, "--struct")?),
                "--qualify" => Query::Qualify(next_value(&mut args, "--qualify")?),
                "--views" => Query::Views,
                "--entries" => Query::Entries,
                "--dump" => Query::Dump,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}"),
            };
            if query.replace(parsed).is_some() {
                bail!("only one query flag may be given");
            }
        }

        let Some(query) = query else {
            bail!("{}", usage());
        };
        let source = match file.or_else(|| env_file.map(PathBuf::from)) {
            Some(path) => AbiSource::File(path),
            None => AbiSource::Embedded,
        };

        Ok(CliArgs { source, query })
    }
}

fn next_value(args: &mut impl Iterator<Item = OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow::anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: abi-query [--file PATH] (--function NAME | --struct NAME | --views | --entries | --qualify NAME | --dump)\n\
Looks up the truepass ABI (or the ABI in PATH / $TRUEPASS_ABI_FILE) and prints the result as JSON; unknown names print null.\n"
}

fn print_usage() {
    print!("{}", usage());
}
