// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use compute_api_types::codec;
use compute_api_types::creation_source::NO_LUN;
use compute_api_types::{
    CreationData, CreationSourceType, EnumFamily, ModelKind,
};
use compute_config_toml::Config;
use serde::Serialize;
use serde_json::Value;
use slog::{debug, info, o, warn, Drain, Level, Logger};

#[derive(Debug, Parser)]
#[clap(about, version)]
/// Decode, validate and inspect compute management API payloads
struct Opt {
    /// Enable debugging
    #[clap(short, long, action)]
    debug: bool,

    /// TOML configuration file
    #[clap(short, long, action)]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[clap(short, long, action)]
    pretty: bool,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode a model and print its normalized encoding
    Decode {
        /// Model type name, e.g. CreationData
        #[clap(action)]
        model: ModelKind,

        /// JSON file to read
        #[clap(action)]
        file: PathBuf,
    },

    /// Decode a model and check its required properties
    Validate {
        /// Model type name, e.g. UefiKeySignatures
        #[clap(action)]
        model: ModelKind,

        /// JSON file to read
        #[clap(action)]
        file: PathBuf,
    },

    /// Report where the disk described by a CreationData came from
    Classify {
        /// JSON file holding a CreationData object
        #[clap(action)]
        file: PathBuf,
    },

    /// List the values registered for an enumeration family
    Values {
        /// Family name, e.g. PowerState
        #[clap(action)]
        family: EnumFamily,
    },

    /// Print the JSON schema of a model
    Schema {
        /// Model type name
        #[clap(action)]
        model: ModelKind,
    },
}

/// Output of the `classify` command.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct Classification {
    source_type: CreationSourceType,
    source_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lun: Option<i32>,
}

fn parse_json_file(path: &Path) -> anyhow::Result<Value> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| e.into())
}

fn render<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let out = if pretty {
        codec::encode_pretty(value)?
    } else {
        codec::encode(value)?
    };
    Ok(out)
}

/// Registers the values listed in the configuration's `[enums]` table.
fn preload_enums(log: &Logger, config: &Config) {
    for (name, values) in &config.enums {
        match EnumFamily::from_str(name) {
            Ok(family) => {
                for value in values {
                    family.register(value);
                }
                debug!(log, "preloaded enum values";
                    "family" => %family,
                    "count" => values.len());
            }
            Err(e) => {
                warn!(log, "skipping unknown enum family";
                    "family" => name,
                    "error" => %e);
            }
        }
    }
}

fn classify(log: &Logger, path: &Path) -> anyhow::Result<Classification> {
    let value = parse_json_file(path)?;
    let data: CreationData = codec::decode_value(value)?
        .ok_or_else(|| anyhow!("no CreationData in {}", path.display()))?;
    let source = data.source();
    let lun = source.source_data_disk_image_lun();
    let classification = Classification {
        source_type: source.source_type(),
        source_id: source.source_id().map(str::to_owned),
        lun: (lun != NO_LUN).then_some(lun),
    };
    info!(log, "classified creation data";
        "source_type" => %classification.source_type,
        "create_option" => ?data.create_option().map(|o| o.as_str()));
    Ok(classification)
}

/// Runs `cmd`, returning what it prints on success.
fn run(log: &Logger, cmd: &Command, pretty: bool) -> anyhow::Result<String> {
    match cmd {
        Command::Decode { model, file } => {
            let value = parse_json_file(file)
                .with_context(|| format!("reading {}", file.display()))?;
            let normalized = model
                .normalize(value, pretty)
                .with_context(|| format!("decoding {model}"))?;
            debug!(log, "decoded model";
                "model" => %model,
                "bytes" => normalized.len());
            Ok(normalized)
        }
        Command::Validate { model, file } => {
            let value = parse_json_file(file)
                .with_context(|| format!("reading {}", file.display()))?;
            model
                .validate(value)
                .with_context(|| format!("validating {model}"))?;
            info!(log, "model is valid"; "model" => %model);
            Ok(format!("{model}: ok"))
        }
        Command::Classify { file } => {
            let classification = classify(log, file)
                .with_context(|| format!("classifying {}", file.display()))?;
            render(&classification, pretty)
        }
        Command::Values { family } => {
            let mut values = family.values();
            values.sort_unstable();
            debug!(log, "listing enum values";
                "family" => %family,
                "count" => values.len());
            Ok(values.join("\n"))
        }
        Command::Schema { model } => render(&model.schema(), pretty),
    }
}

/// Picks the log level: `--debug` wins, then the config file, then info.
fn log_level(opt: &Opt, config: &Config) -> anyhow::Result<Level> {
    if opt.debug {
        return Ok(Level::Debug);
    }
    match config.log.level.as_deref() {
        Some(level) => Level::from_str(level)
            .map_err(|_| anyhow!("invalid log level '{level}'")),
        None => Ok(Level::Info),
    }
}

/// Create a top-level logger that outputs to stderr
fn create_logger(level: Level) -> Logger {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog::LevelFilter(drain, level).fuse();
    let drain = slog_async::Async::new(drain).build().fuse();

    Logger::root(drain, o!())
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::parse();

    let config = match &opt.config {
        Some(path) => compute_config_toml::parse(path).with_context(|| {
            format!("loading config from {}", path.display())
        })?,
        None => Config::default(),
    };
    let log = create_logger(log_level(&opt, &config)?);
    preload_enums(&log, &config);

    let pretty = opt.pretty || config.output.pretty;
    let out = run(&log, &opt.cmd, pretty)?;
    println!("{out}");

    Ok(())
}
