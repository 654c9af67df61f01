//! Command-line surface.
//!
//! Flags use the single-dash style of Go's `flag` package (`-file_path x`,
//! `-file_path=x`); [`normalize_args`] rewrites those into the double-dash
//! form clap understands, so both spellings work.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::config::DEFAULT_REGION;
use crate::error::{Error, Result};
use crate::resolver::KeyPolicy;

/// Shown above the flag listing when no parameters are given.
pub const ABOUT: &str = "\
Burrito collects ssm parameters and wraps them up... like a burrito!

Collect your parameters by calling:
        $ burrito env_var env_var1 env_var2

Each env_var names an environment variable holding the SSM Parameter-Store
key to fetch. Burrito writes burrito.sh, a shell script that exports each
env_var set to the value returned from the SSM Parameter-Store.";

/// Long flags that may be spelled with a single dash.
const LONG_FLAGS: &[&str] = &["file_path", "file_header", "region", "skip_unset"];

#[derive(Debug, Parser)]
#[command(name = "burrito", version, about = ABOUT)]
pub struct Cli {
    /// Filepath for the output script
    #[arg(long = "file_path", value_name = "PATH", default_value = "burrito.sh")]
    pub file_path: PathBuf,

    /// First line of the output script
    #[arg(long = "file_header", value_name = "LINE", default_value = "#!/bin/bash")]
    pub file_header: String,

    /// Region of the parameter store
    #[arg(long, env = "BURRITO_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Skip variables that are unset instead of looking up an empty key
    #[arg(long = "skip_unset")]
    pub skip_unset: bool,

    /// Environment variables whose values are the parameter keys
    #[arg(value_name = "ENV_VAR")]
    pub variables: Vec<String>,
}

/// Options fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub output_path: PathBuf,
    pub header_line: String,
    pub region: String,
    pub key_policy: KeyPolicy,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("burrito.sh"),
            header_line: "#!/bin/bash".to_string(),
            region: DEFAULT_REGION.to_string(),
            key_policy: KeyPolicy::PassThrough,
        }
    }
}

impl Cli {
    /// Parse `args` (program name first) after normalizing flag spelling.
    pub fn parse_normalized<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_args(args))
    }

    /// Like [`Cli::parse_normalized`], returning clap's error instead of exiting.
    pub fn try_parse_normalized<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    /// Split into run options and the ordered variable names.
    ///
    /// # Errors
    /// Returns [`Error::NoParameters`] when no variable names were given.
    pub fn into_parts(self) -> Result<(CliOptions, Vec<String>)> {
        if self.variables.is_empty() {
            return Err(Error::NoParameters);
        }
        let key_policy = if self.skip_unset {
            KeyPolicy::SkipUnset
        } else {
            KeyPolicy::PassThrough
        };
        let options = CliOptions {
            output_path: self.file_path,
            header_line: self.file_header,
            region: self.region,
            key_policy,
        };
        Ok((options, self.variables))
    }
}

/// Full help text: the blurb plus the flag listing.
pub fn help_text() -> String {
    Cli::command().render_help().to_string()
}

/// Rewrite `-flag` / `-flag=value` into `--flag` / `--flag=value` for
/// known long flags. Everything after a bare `--` is left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut past_separator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if past_separator {
                return arg;
            }
            if arg == "--" {
                past_separator = true;
                return arg;
            }
            match arg.to_str() {
                Some(s) if is_single_dash_long(s) => OsString::from(format!("-{s}")),
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let flag = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&flag)
}
