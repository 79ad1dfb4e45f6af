// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::BTreeMap;
use std::path::Path;

use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for the compute model tooling.
#[derive(Default, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub log: Log,

    #[serde(default)]
    pub output: Output,

    /// Values to register in each open enumeration family before any input
    /// is decoded, keyed by family name.
    #[serde(default)]
    pub enums: BTreeMap<String, Vec<String>>,
}

#[derive(Default, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Log {
    /// One of `trace`, `debug`, `info`, `warn`, `error` or `critical`.
    /// Unset means the tool's default.
    pub level: Option<String>,
}

#[derive(Default, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Output {
    /// Pretty-print JSON output.
    #[serde(default)]
    pub pretty: bool,
}

/// Errors which may be returned when parsing the configuration.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Cannot parse toml: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses a TOML file into a configuration object.
pub fn parse<P: AsRef<Path>>(path: P) -> Result<Config, ParseError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    let cfg = toml::from_str::<Config>(&contents)?;
    Ok(cfg)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn config_can_be_serialized_as_toml() {
        let mut dummy_config = Config::default();
        dummy_config.output.pretty = true;
        dummy_config
            .enums
            .insert("PowerState".to_owned(), vec!["PowerState/x".to_owned()]);
        let serialized = toml::ser::to_string(&dummy_config).unwrap();
        let deserialized: Config = toml::de::from_str(&serialized).unwrap();
        assert_eq!(dummy_config, deserialized);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: Config = toml::de::from_str("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.log.level, None);
        assert!(!cfg.output.pretty);
    }

    #[test]
    fn parse_basic_config() {
        let raw = r#"
[log]
level = "debug"

[output]
pretty = true

[enums]
PowerState = ["PowerState/hibernated"]
DiskStorageAccountTypes = ["Premium_LRS_Preview", "Standard_XRS"]
"#;
        let cfg: Config = toml::de::from_str(raw).unwrap();

        assert_eq!(cfg.log.level.as_deref(), Some("debug"));
        assert!(cfg.output.pretty);
        assert_eq!(cfg.enums.len(), 2);
        assert_eq!(cfg.enums["PowerState"], ["PowerState/hibernated"]);
        assert_eq!(
            cfg.enums["DiskStorageAccountTypes"],
            ["Premium_LRS_Preview", "Standard_XRS"]
        );
    }

    #[test]
    fn wrong_types_are_rejected() {
        let raw = r#"
[enums]
PowerState = "PowerState/hibernated"
"#;
        assert!(toml::de::from_str::<Config>(raw).is_err());
    }

    #[test]
    fn parse_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\npretty = true").unwrap();
        let cfg = parse(file.path()).unwrap();
        assert!(cfg.output.pretty);

        let err = parse(file.path().with_extension("missing")).unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));

        writeln!(file, "[output").unwrap();
        let err = parse(file.path()).unwrap_err();
        assert!(matches!(err, ParseError::Toml(_)));
    }
}
