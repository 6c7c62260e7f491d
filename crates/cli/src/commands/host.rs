//! config host command - Manage host aliases
//!
//! A host is a named S3-compatible storage endpoint with its credentials and
//! API signature version. Hosts live in the configuration file and are
//! referenced by alias from every other command.

use std::path::PathBuf;

use clap::{Args, CommandFactory};
use mc_core::validate::{
    is_valid_access_key, is_valid_alias, is_valid_api, is_valid_host_url, is_valid_secret_key,
};
use mc_core::{Api, ConfigStore, Error, FileConfigStore, HostConfig, HostManager};
use serde::Serialize;

use super::Cli;
use crate::exit_code::ExitCode;
use crate::output::{Formatter, Message, Role, Theme};

pub const HOST_USAGE: &str = "mc config host OPERATION

OPERATION:
   add ALIAS URL ACCESS-KEY SECRET-KEY [API]
   remove ALIAS
   list";

pub const HOST_EXAMPLES: &str = "EXAMPLES:
   1. Add Amazon S3 storage service under \"myphotos\" alias. For security reasons turn off bash history momentarily.
      $ set +o history
      $ mc config host add myphotos https://s3.amazonaws.com \\
                  BKIKJAA5BMMU2RHO6IBB V8f1CwQqAcwo80UEIJEjc5gVQUSSx5ohQ9GSrr12
      $ set -o history

   2. Add Amazon S3 accelerated storage service under \"accel\" alias. For security reasons turn off bash history momentarily.
      $ set +o history
      $ mc config host add accel https://s3-accelerate.amazonaws.com \\
                  BKIKJAA5BMMU2RHO6IBB V8f1CwQqAcwo80UEIJEjc5gVQUSSx5ohQ9GSrr12
      $ set -o history

   3. List all hosts.
      $ mc config host list

   4. Remove \"goodisk\" config.
      $ mc config host remove goodisk";

/// Arguments for the `config host` command
#[derive(Args, Debug)]
pub struct HostArgs {
    /// Operation to perform: add, remove or list
    #[arg(value_name = "OPERATION")]
    pub operation: Option<String>,

    /// Arguments of the operation
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// A validated `config host` operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOperation {
    Add { alias: String, host: HostConfig },
    Remove { alias: String },
    List,
}

/// Why the command line could not be turned into an operation
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    /// Missing or unknown operation, answered with the help text
    #[error("missing or unknown operation")]
    ShowHelp,

    #[error("{0}")]
    ArgumentCount(&'static str),

    #[error(transparent)]
    Invalid(#[from] Error),
}

impl HostArgs {
    /// Dispatch on the operation verb and validate its arguments
    pub fn parse_operation(&self) -> Result<HostOperation, UsageError> {
        let Some(operation) = self.operation.as_deref() else {
            return Err(UsageError::ShowHelp);
        };

        match operation.trim() {
            "add" => parse_add(&self.args),
            "remove" => parse_remove(&self.args),
            "list" => Ok(HostOperation::List),
            _ => Err(UsageError::ShowHelp),
        }
    }
}

fn parse_add(args: &[String]) -> Result<HostOperation, UsageError> {
    let [alias, url, access_key, secret_key, rest @ ..] = args else {
        return Err(UsageError::ArgumentCount(
            "Incorrect number of arguments for host add command.",
        ));
    };
    let api = match rest {
        [] => "",
        [api] => api.as_str(),
        _ => {
            return Err(UsageError::ArgumentCount(
                "Incorrect number of arguments for host add command.",
            ));
        }
    };

    if !is_valid_alias(alias) {
        return Err(Error::InvalidAlias(alias.clone()).into());
    }
    if !is_valid_host_url(url) {
        return Err(Error::InvalidUrl(url.clone()).into());
    }
    if !is_valid_access_key(access_key) {
        return Err(Error::InvalidAccessKey(access_key.clone()).into());
    }
    if !is_valid_secret_key(secret_key) {
        return Err(Error::InvalidSecretKey(secret_key.clone()).into());
    }
    // Empty selects the default signature.
    if !api.is_empty() && !is_valid_api(api) {
        return Err(Error::InvalidApi(api.to_string()).into());
    }

    Ok(HostOperation::Add {
        alias: alias.clone(),
        host: HostConfig::new(
            url.as_str(),
            access_key.as_str(),
            secret_key.as_str(),
            Api::from_arg(api)?,
        ),
    })
}

fn parse_remove(args: &[String]) -> Result<HostOperation, UsageError> {
    let [alias] = args else {
        return Err(UsageError::ArgumentCount(
            "Incorrect number of arguments for remove host command.",
        ));
    };

    if !is_valid_alias(alias) {
        return Err(Error::InvalidAlias(alias.clone()).into());
    }

    Ok(HostOperation::Remove {
        alias: alias.clone(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HostOp {
    Add,
    Remove,
    List,
}

/// Result line of a `config host` operation
#[derive(Debug, Serialize)]
pub struct HostMessage {
    #[serde(skip)]
    op: HostOp,
    #[serde(skip)]
    alias_width: usize,
    status: &'static str,
    alias: String,
    #[serde(rename = "URL")]
    url: String,
    #[serde(rename = "accessKey", skip_serializing_if = "String::is_empty")]
    access_key: String,
    #[serde(rename = "secretKey", skip_serializing_if = "String::is_empty")]
    secret_key: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    api: String,
}

impl HostMessage {
    fn new(op: HostOp, alias: &str, host: Option<&HostConfig>) -> Self {
        let (url, access_key, secret_key, api) = match host {
            Some(h) => (
                h.url.clone(),
                h.access_key.clone(),
                h.secret_key.clone(),
                h.api.to_string(),
            ),
            None => Default::default(),
        };
        Self {
            op,
            alias_width: alias.chars().count(),
            status: "success",
            alias: alias.to_string(),
            url,
            access_key,
            secret_key,
            api,
        }
    }

    pub fn added(alias: &str, host: &HostConfig) -> Self {
        Self::new(HostOp::Add, alias, Some(host))
    }

    pub fn removed(alias: &str) -> Self {
        Self::new(HostOp::Remove, alias, None)
    }

    /// A list entry whose alias is padded to `alias_width` in text mode
    pub fn listed(alias: &str, host: &HostConfig, alias_width: usize) -> Self {
        let mut message = Self::new(HostOp::List, alias, Some(host));
        message.alias_width = message.alias_width.max(alias_width);
        message
    }
}

impl Message for HostMessage {
    fn render(&self, theme: &Theme) -> String {
        match self.op {
            HostOp::Add => theme.paint(
                Role::HostMessage,
                &format!("Added ‘{}’ successfully.", self.alias),
            ),
            HostOp::Remove => theme.paint(
                Role::HostMessage,
                &format!("Removed ‘{}’ successfully.", self.alias),
            ),
            HostOp::List => {
                let width = self.alias_width;
                let mut line = theme.paint(Role::Alias, &format!("{:<width$.width$}: ", self.alias));
                line += &theme.paint(Role::Url, &format!("{:<30.30}", self.url));
                if !self.access_key.is_empty() || !self.secret_key.is_empty() {
                    let access_key = format!("  {:<20.20}", self.access_key);
                    let secret_key = format!("  {:<40.40}", self.secret_key);
                    line += &theme.paint(Role::AccessKey, &access_key);
                    line += &theme.paint(Role::SecretKey, &secret_key);
                    line += &theme.paint(Role::Api, &format!("  {:.20}", self.api));
                }
                line
            }
        }
    }
}

/// Build list messages with aliases aligned to the longest one
pub fn list_messages(hosts: &[(String, HostConfig)]) -> Vec<HostMessage> {
    let width = hosts
        .iter()
        .map(|(alias, _)| alias.chars().count())
        .max()
        .unwrap_or(0);

    hosts
        .iter()
        .map(|(alias, host)| HostMessage::listed(alias, host, width))
        .collect()
}

/// Execute the `config host` command
pub fn execute(args: HostArgs, config_dir: Option<PathBuf>, formatter: &Formatter) -> ExitCode {
    let operation = match args.parse_operation() {
        Ok(op) => op,
        Err(UsageError::ShowHelp) => {
            print_help();
            return ExitCode::Failure;
        }
        Err(e) => {
            formatter.error(&e.to_string(), None);
            return ExitCode::Failure;
        }
    };

    let store = match config_dir {
        Some(dir) => FileConfigStore::in_dir(dir),
        None => match FileConfigStore::new() {
            Ok(store) => store,
            Err(e) => {
                formatter.error("Unable to locate config directory.", Some(&e));
                return ExitCode::Failure;
            }
        },
    };
    let location = store.config_path().display().to_string();
    let manager = HostManager::with_store(store);

    run(operation, &manager, formatter, &location)
}

/// Apply a validated operation and print its result
pub fn run<S: ConfigStore>(
    operation: HostOperation,
    manager: &HostManager<S>,
    formatter: &Formatter,
    location: &str,
) -> ExitCode {
    match operation {
        HostOperation::Add { alias, host } => match manager.add(&alias, host.clone()) {
            Ok(_) => {
                formatter.print(&HostMessage::added(&alias, &host));
                ExitCode::Success
            }
            Err(e) => {
                formatter.error(
                    &format!("Unable to update hosts in config ‘{location}’."),
                    Some(&e),
                );
                ExitCode::Failure
            }
        },
        HostOperation::Remove { alias } => match manager.remove(&alias) {
            Ok(_) => {
                formatter.print(&HostMessage::removed(&alias));
                ExitCode::Success
            }
            Err(e) => {
                formatter.error(
                    &format!("Unable to save deleted hosts in config ‘{location}’."),
                    Some(&e),
                );
                ExitCode::Failure
            }
        },
        HostOperation::List => match manager.list() {
            Ok(hosts) => {
                for message in list_messages(&hosts) {
                    formatter.print(&message);
                }
                ExitCode::Success
            }
            Err(e) => {
                formatter.error(&format!("Unable to load config ‘{location}’."), Some(&e));
                ExitCode::Failure
            }
        },
    }
}

fn print_help() {
    let mut cmd = Cli::command();
    cmd.build();
    if let Some(host) = cmd
        .find_subcommand_mut("config")
        .and_then(|config| config.find_subcommand_mut("host"))
    {
        if let Err(e) = host.print_help() {
            tracing::debug!("failed to print help: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputConfig;
    use mc_core::MemoryConfigStore;

    fn host_args(words: &[&str]) -> HostArgs {
        let (operation, args) = match words.split_first() {
            Some((op, rest)) => (
                Some(op.to_string()),
                rest.iter().map(|s| s.to_string()).collect(),
            ),
            None => (None, Vec::new()),
        };
        HostArgs { operation, args }
    }

    fn quiet_formatter() -> Formatter {
        Formatter::new(OutputConfig {
            quiet: true,
            no_color: true,
            ..Default::default()
        })
    }

    fn example_host() -> HostConfig {
        HostConfig::new(
            "https://s3.amazonaws.com",
            "AKIAEXAMPLE",
            "SECRETEXAMPLE",
            Api::S3v4,
        )
    }

    #[test]
    fn test_parse_add_defaults_api() {
        let op = host_args(&[
            "add",
            "myphotos",
            "https://s3.amazonaws.com",
            "AKIAEXAMPLE",
            "SECRETEXAMPLE",
        ])
        .parse_operation()
        .unwrap();

        assert_eq!(
            op,
            HostOperation::Add {
                alias: "myphotos".to_string(),
                host: example_host(),
            }
        );
    }

    #[test]
    fn test_parse_add_explicit_api() {
        let op = host_args(&[
            "add",
            "legacy",
            "http://localhost:9000",
            "minioadmin",
            "minioadmin",
            "S3v2",
        ])
        .parse_operation()
        .unwrap();

        let HostOperation::Add { host, .. } = op else {
            panic!("expected add operation");
        };
        assert_eq!(host.api, Api::S3v2);
    }

    #[test]
    fn test_parse_add_argument_count() {
        for words in [
            &["add", "a", "http://x:9000", "minioadmin"][..],
            &["add", "a", "http://x:9000", "minioadmin", "minioadmin", "S3v4", "extra"][..],
            &["add"][..],
        ] {
            let err = host_args(words).parse_operation().unwrap_err();
            assert!(
                matches!(err, UsageError::ArgumentCount(msg) if msg.contains("host add")),
                "unexpected result for {words:?}"
            );
        }
    }

    fn add_error(args: &[&str]) -> Error {
        let mut words = vec!["add"];
        words.extend_from_slice(args);
        match host_args(&words).parse_operation() {
            Err(UsageError::Invalid(e)) => e,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_add_rejects_invalid_fields() {
        assert!(matches!(
            add_error(&["1bad", "http://x:9000", "minioadmin", "minioadmin"]),
            Error::InvalidAlias(a) if a == "1bad"
        ));
        assert!(matches!(
            add_error(&["ok", "not a url", "minioadmin", "minioadmin"]),
            Error::InvalidUrl(u) if u == "not a url"
        ));
        assert!(matches!(
            add_error(&["ok", "http://x:9000", "abc", "minioadmin"]),
            Error::InvalidAccessKey(_)
        ));
        assert!(matches!(
            add_error(&["ok", "http://x:9000", "minioadmin", "short"]),
            Error::InvalidSecretKey(_)
        ));
        assert!(matches!(
            add_error(&["ok", "http://x:9000", "minioadmin", "minioadmin", "S3v3"]),
            Error::InvalidApi(api) if api == "S3v3"
        ));
    }

    #[test]
    fn test_parse_remove() {
        assert_eq!(
            host_args(&["remove", "goodisk"]).parse_operation().unwrap(),
            HostOperation::Remove {
                alias: "goodisk".to_string()
            }
        );
        assert!(matches!(
            host_args(&["remove"]).parse_operation(),
            Err(UsageError::ArgumentCount(_))
        ));
        assert!(matches!(
            host_args(&["remove", "a", "b"]).parse_operation(),
            Err(UsageError::ArgumentCount(_))
        ));
        assert!(matches!(
            host_args(&["remove", "bad alias"]).parse_operation(),
            Err(UsageError::Invalid(Error::InvalidAlias(_)))
        ));
    }

    #[test]
    fn test_parse_verb() {
        assert_eq!(
            host_args(&[" list "]).parse_operation().unwrap(),
            HostOperation::List
        );
        assert!(matches!(
            host_args(&[]).parse_operation(),
            Err(UsageError::ShowHelp)
        ));
        assert!(matches!(
            host_args(&["rename", "a", "b"]).parse_operation(),
            Err(UsageError::ShowHelp)
        ));
    }

    #[test]
    fn test_add_message_text() {
        let message = HostMessage::added("myphotos", &example_host());
        assert_eq!(
            message.render(&Theme::plain()),
            "Added ‘myphotos’ successfully."
        );
    }

    #[test]
    fn test_remove_message_text() {
        let message = HostMessage::removed("goodisk");
        assert_eq!(
            message.render(&Theme::plain()),
            "Removed ‘goodisk’ successfully."
        );
    }

    #[test]
    fn test_add_message_json() {
        let message = HostMessage::added("myphotos", &example_host());
        let json = serde_json::to_string(&message).unwrap();
        insta::assert_snapshot!(json, @r#"{"status":"success","alias":"myphotos","URL":"https://s3.amazonaws.com","accessKey":"AKIAEXAMPLE","secretKey":"SECRETEXAMPLE","api":"S3v4"}"#);
    }

    #[test]
    fn test_remove_message_json() {
        let json = serde_json::to_string(&HostMessage::removed("goodisk")).unwrap();
        insta::assert_snapshot!(json, @r#"{"status":"success","alias":"goodisk","URL":""}"#);
    }

    #[test]
    fn test_list_messages_align_aliases() {
        let hosts = vec![
            ("myphotos".to_string(), example_host()),
            (
                "s3".to_string(),
                HostConfig::new("https://s3.amazonaws.com", "", "", Api::S3v4),
            ),
        ];
        let lines: Vec<String> = list_messages(&hosts)
            .iter()
            .map(|m| m.render(&Theme::plain()))
            .collect();

        assert_eq!(
            lines[0],
            format!(
                "myphotos: https://s3.amazonaws.com{}  AKIAEXAMPLE{}  SECRETEXAMPLE{}  S3v4",
                " ".repeat(6),
                " ".repeat(9),
                " ".repeat(27)
            )
        );
        assert_eq!(
            lines[1],
            format!("s3      : https://s3.amazonaws.com{}", " ".repeat(6))
        );
    }

    #[test]
    fn test_list_message_truncates_url() {
        let host = HostConfig::new(
            "https://very-long-endpoint.example.com:9000",
            "",
            "",
            Api::S3v4,
        );
        let lines = list_messages(&[("a".to_string(), host)]);
        assert_eq!(
            lines[0].render(&Theme::plain()),
            "a: https://very-long-endpoint.exa"
        );
    }

    #[test]
    fn test_list_message_json_has_bare_alias() {
        let hosts = vec![
            ("a".to_string(), example_host()),
            ("longer".to_string(), example_host()),
        ];
        let messages = list_messages(&hosts);
        let value = serde_json::to_value(&messages[0]).unwrap();
        assert_eq!(value["alias"], "a");
        assert_eq!(value["status"], "success");
    }

    #[test]
    fn test_run_add_remove_list() {
        let manager = HostManager::with_store(MemoryConfigStore::default());
        let formatter = quiet_formatter();

        let add = host_args(&[
            "add",
            "myphotos",
            "https://s3.amazonaws.com",
            "AKIAEXAMPLE",
            "SECRETEXAMPLE",
        ])
        .parse_operation()
        .unwrap();
        assert_eq!(run(add, &manager, &formatter, "memory"), ExitCode::Success);
        assert_eq!(manager.get("myphotos").unwrap(), example_host());

        let remove = HostOperation::Remove {
            alias: "myphotos".to_string(),
        };
        assert_eq!(run(remove, &manager, &formatter, "memory"), ExitCode::Success);
        assert!(manager.list().unwrap().is_empty());

        assert_eq!(
            run(HostOperation::List, &manager, &formatter, "memory"),
            ExitCode::Success
        );
    }

    #[test]
    fn test_run_remove_missing_succeeds() {
        let manager = HostManager::with_store(MemoryConfigStore::default());
        let before = manager.store().snapshot();

        let remove = HostOperation::Remove {
            alias: "nonexistent".to_string(),
        };
        assert_eq!(
            run(remove, &manager, &quiet_formatter(), "memory"),
            ExitCode::Success
        );
        assert_eq!(manager.store().snapshot(), before);
    }

    #[test]
    fn test_run_reports_store_failure() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "version = [").unwrap();
        let manager = HostManager::with_store(FileConfigStore::with_path(path.clone()));

        let code = run(
            HostOperation::List,
            &manager,
            &quiet_formatter(),
            &path.display().to_string(),
        );
        assert_eq!(code, ExitCode::Failure);
    }
}
