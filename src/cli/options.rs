//! Command-line option schema.
//!
//! Syntactic parsing only: no filesystem checks and no cross-field rules.
//! Numeric values are taken as raw strings so that malformed input can fall
//! back to defaults instead of being rejected.
//!
//! Tokens that do not name a schema option are not handed to clap at all;
//! they are returned untouched, in order, for the resolver to interpret.

use clap::{Arg, Command, CommandFactory, Parser};

use crate::error::{Error, Result};
use crate::job::DEFAULT_TEXEL_BIAS;

const SCALE_HELP: &str = "Scale the output vertices by a value.
A value of 0.01 is popular for many Unity projects that use 'Pixels Per Unit' of 100 for sprites.
Default is 1 (no scaling).";

const TEXEL_BIAS_HELP: &str = "Bias for texel sampling.
Texels are offset by 1 / value.
Default value is 8192.
A value of 2048 has been useful for shaders that show seams.";

/// Export a Tiled map to a Unity project
#[derive(Parser, Debug, Default)]
#[command(name = "tiled2unity")]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(args_override_self = true)]
pub struct Options {
    /// Automatically export to UNITYDIR and close.
    #[arg(short = 'a', long)]
    pub auto_export: bool,

    #[arg(short = 's', long, value_name = "VALUE", allow_hyphen_values = true, help = SCALE_HELP)]
    pub scale: Option<String>,

    #[arg(short = 't', long, value_name = "VALUE", allow_hyphen_values = true, help = TEXEL_BIAS_HELP)]
    pub texel_bias: Option<String>,

    /// Print verbose messages.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Display this help message.
    #[arg(short = 'h', long)]
    pub help: bool,
}

/// Option values after numeric parsing, with leftover tokens in order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedOptions {
    pub auto_export: bool,
    /// Explicit scale, if one parsed. May still be non-positive.
    pub scale: Option<f32>,
    pub texel_bias: f32,
    pub verbose: bool,
    pub help: bool,
    pub leftovers: Vec<String>,
}

impl Options {
    /// Parse invocation tokens (without the program name).
    pub fn parse_tokens(args: &[String]) -> Result<ParsedOptions> {
        let (schema, leftovers) = split_tokens(&Self::command(), args);
        let argv = std::iter::once("tiled2unity").chain(schema.iter().map(String::as_str));
        let options = Self::try_parse_from(argv).map_err(|e| Error::Usage {
            message: e.to_string().trim_end().to_string(),
        })?;
        Ok(options.into_parsed(leftovers))
    }

    /// Convert raw option strings into typed values.
    pub fn into_parsed(self, leftovers: Vec<String>) -> ParsedOptions {
        ParsedOptions {
            auto_export: self.auto_export,
            scale: self.scale.as_deref().and_then(parse_float),
            texel_bias: self
                .texel_bias
                .as_deref()
                .and_then(parse_float)
                .filter(|bias| *bias > 0.0)
                .unwrap_or(DEFAULT_TEXEL_BIAS),
            verbose: self.verbose,
            help: self.help,
            leftovers,
        }
    }
}

/// Separate tokens naming a schema option (plus a detached option value)
/// from everything else. Both lists keep their original order.
fn split_tokens(cmd: &Command, args: &[String]) -> (Vec<String>, Vec<String>) {
    let mut schema = Vec::new();
    let mut leftovers = Vec::new();
    let mut tokens = args.iter();

    while let Some(token) = tokens.next() {
        if token == "--" {
            leftovers.extend(tokens.by_ref().cloned());
            break;
        }

        match lookup(cmd, token) {
            Some((arg, inline_value)) => {
                schema.push(token.clone());
                if arg.get_action().takes_values() && !inline_value {
                    if let Some(value) = tokens.next() {
                        schema.push(value.clone());
                    }
                }
            }
            None => leftovers.push(token.clone()),
        }
    }

    (schema, leftovers)
}

/// Find the option a token names, and whether it carries its value inline.
fn lookup<'c>(cmd: &'c Command, token: &str) -> Option<(&'c Arg, bool)> {
    if let Some(long) = token.strip_prefix("--") {
        let (name, inline) = match long.split_once('=') {
            Some((name, _)) => (name, true),
            None => (long, false),
        };
        return cmd
            .get_arguments()
            .find(|arg| arg.get_long() == Some(name))
            .map(|arg| (arg, inline));
    }

    let short = token.strip_prefix('-')?;
    let mut chars = short.chars();
    let flag = chars.next()?;
    let inline = chars.next().is_some();
    cmd.get_arguments()
        .find(|arg| arg.get_short() == Some(flag))
        .map(|arg| (arg, inline))
}

/// Parse a float with '.' as the decimal separator regardless of locale.
/// Non-finite values count as unparsable.
pub fn parse_float(value: &str) -> Option<f32> {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
}
