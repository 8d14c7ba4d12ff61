// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::env;

use tracing::{debug, trace};

use crate::desc::{ArgKind, Desc, LONG_OPT_PREFIX, OPT_PREFIX};
use crate::error::{Error, Result};
use crate::options::{Options, ParseResult, ParsedOption};
use crate::value::{convert, Value};

/// Special argument that is silently consumed and used to denote the end of
/// all options; all arguments that follow are considered to be positional
/// arguments (even if they start with `-`!)
///
/// See: `getopt(3)`.
const END_OF_OPTIONS: &str = LONG_OPT_PREFIX;

const LONG_OPT_VALUE_SEP: char = '=';

/// Settings used to control the parsers behaviour.
#[derive(Clone, Copy, Debug, Eq, Default, PartialEq)]
pub struct Settings {
    /// Stop handling options at the first positional argument.
    posixly_correct: bool,
}

impl Settings {
    /// Create a new settings object.
    pub fn new() -> Self {
        Settings::default()
    }

    /// By default, options and positional arguments may be freely
    /// intermingled: all options are found, wherever they appear, and the
    /// positional arguments are returned in their original order.
    ///
    /// When this setting is enabled, the parser behaves like `getopt(3)`
    /// with `POSIXLY_CORRECT` set: the first positional argument ends
    /// option handling, and it, plus all the arguments after it, are
    /// returned as positional arguments.
    ///
    /// # Example
    ///
    /// Given a `-v` flag and the command line:
    ///
    /// ```bash
    /// $ prog -v file -v
    /// ```
    ///
    /// - By default, `-v` is found (twice) and the only positional argument
    ///   is `file`.
    /// - With `posixly_correct()`, `-v` is found once and the positional
    ///   arguments are `file` and `-v`.
    pub fn posixly_correct(self) -> Self {
        Settings {
            posixly_correct: true,
        }
    }
}

/// Get a list of all command-line arguments specified to the program with
/// the program name (the first argument) removed.
///
/// # Note
///
/// Used with [Parser::parse_with_args()]. However, this isn't usually
/// required: just call [Parser::parse()].
///
/// # Panics
///
/// Panics if any argument is not valid Unicode (see [std::env::args()]).
/// [Parser::parse()] calls this function so it panics in the same way.
pub fn get_args() -> Vec<String> {
    env::args().skip(1).collect()
}

/// A single, unmerged, occurrence of an option on the command line.
#[derive(Clone, Debug, PartialEq)]
struct Occurrence {
    index: usize,
    value: Option<Value>,
}

/// Parser for a particular descriptor table.
///
/// The table is borrowed, not copied: the [ParseResult] returned refers back
/// to the descriptors it contains.
#[derive(Clone, Debug, PartialEq)]
pub struct Parser<'a> {
    descs: &'a [Desc],
    settings: Settings,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the specified descriptor table.
    pub fn new(descs: &'a [Desc]) -> Self {
        Parser {
            descs,
            settings: Settings::default(),
        }
    }

    /// Specify any settings for the parser.
    pub fn settings(self, settings: Settings) -> Self {
        Parser { settings, ..self }
    }

    /// Parse a set of command line arguments (without the program name).
    ///
    /// # Arguments
    ///
    /// - `cli_args`: The arguments to parse. Specify your own,
    ///    or call [get_args()].
    ///
    /// # Notes
    ///
    /// - Parsing stops at the first error; no partial result is returned.
    pub fn parse_with_args<S: AsRef<str>>(&self, cli_args: &[S]) -> Result<ParseResult<'a>> {
        let mut found = Vec::<Occurrence>::new();
        let mut positionals = Vec::<String>::new();

        let mut i = 0;

        while i < cli_args.len() {
            let cli_arg = cli_args[i].as_ref();

            if cli_arg == END_OF_OPTIONS {
                trace!(index = i, "end of options");

                positionals.extend(cli_args[i + 1..].iter().map(|a| a.as_ref().to_string()));
                break;
            }

            if cli_arg.starts_with(OPT_PREFIX) {
                let (occurrences, consumed) = match resolve_dashed(self.descs, &cli_args[i..]) {
                    Ok(resolved) => resolved,
                    Err(e) => {
                        debug!(index = i, arg = cli_arg, error = %e, "parse failed");
                        return Err(e);
                    }
                };

                trace!(index = i, arg = cli_arg, consumed, "option");

                found.extend(occurrences);
                i += consumed;
            } else if self.settings.posixly_correct {
                trace!(index = i, arg = cli_arg, "first positional argument, end of options");

                positionals.extend(cli_args[i..].iter().map(|a| a.as_ref().to_string()));
                break;
            } else {
                trace!(index = i, arg = cli_arg, "positional argument");

                positionals.push(cli_arg.into());
                i += 1;
            }
        }

        let options = merge(self.descs, found);

        debug!(
            args = cli_args.len(),
            options = options.len(),
            positionals = positionals.len(),
            "parsed command line"
        );

        Ok(ParseResult {
            options: Options::new(options),
            positionals,
        })
    }

    /// Simplest interface to the parser: parses the arguments the program
    /// was started with.
    ///
    /// # Panics
    ///
    /// Panics if any argument is not valid Unicode (see [get_args()]).
    pub fn parse(&self) -> Result<ParseResult<'a>> {
        let args = get_args();

        self.parse_with_args(&args)
    }
}

/// Parse `cli_args` (without the program name) against the descriptor
/// table `descs` using the default [Settings].
pub fn parse<'a, S: AsRef<str>>(cli_args: &[S], descs: &'a [Desc]) -> Result<ParseResult<'a>> {
    Parser::new(descs).parse_with_args(cli_args)
}

/// Handle a single argument that starts with a dash.
///
/// `cli_args` starts at that argument and includes every argument after it,
/// since an option may take its value from the next argument.
///
/// One argument can produce several options (`-abc` is `-a -b -c`).
/// Returns them along with the number of arguments used up (at least 1).
fn resolve_dashed<S: AsRef<str>>(
    descs: &[Desc],
    cli_args: &[S],
) -> Result<(Vec<Occurrence>, usize)> {
    let cli_arg = match cli_args.first() {
        Some(a) => a.as_ref(),
        None => return Err(Error::MalformedToken("".into())),
    };

    let next_arg = cli_args.get(1).map(|a| a.as_ref());

    let dashes = cli_arg.chars().take_while(|c| *c == OPT_PREFIX).count();

    match dashes {
        1 => resolve_short(descs, cli_arg, next_arg),
        2 => resolve_long(descs, cli_arg, next_arg),
        _ => Err(Error::MalformedToken(cli_arg.into())),
    }
}

/// Handle a cluster of short options (`-a`, `-abc`, `-ofoo`).
fn resolve_short(
    descs: &[Desc],
    cli_arg: &str,
    next_arg: Option<&str>,
) -> Result<(Vec<Occurrence>, usize)> {
    let cluster = &cli_arg[OPT_PREFIX.len_utf8()..];

    if cluster.is_empty() {
        return Err(Error::MalformedToken(cli_arg.into()));
    }

    let mut found = Vec::<Occurrence>::new();
    let mut consumed = 1;

    for (pos, option) in cluster.char_indices() {
        let (index, desc) = descs
            .iter()
            .enumerate()
            .find(|(_, d)| d.short == Some(option))
            .ok_or_else(|| Error::UnrecognizedOption(option.to_string()))?;

        if !desc.kind.takes_arg() {
            found.push(Occurrence { index, value: None });
            continue;
        }

        // The rest of the cluster is the value (`-ofoo`). If there is no
        // rest, the value is the next argument (`-o foo`), even if that
        // starts with a dash.
        let rest = &cluster[pos + option.len_utf8()..];

        let raw = if rest.is_empty() {
            consumed += 1;
            next_arg.ok_or_else(|| Error::MissingArgument(option.to_string()))?
        } else {
            rest
        };

        let value = convert(&option.to_string(), desc.kind, raw)?;

        found.push(Occurrence { index, value });
        break;
    }

    Ok((found, consumed))
}

/// Handle a long option (`--option`, `--option value`, `--option=value`).
fn resolve_long(
    descs: &[Desc],
    cli_arg: &str,
    next_arg: Option<&str>,
) -> Result<(Vec<Occurrence>, usize)> {
    let body = &cli_arg[LONG_OPT_PREFIX.len()..];

    let (name, inline_value) = match body.split_once(LONG_OPT_VALUE_SEP) {
        Some((name, value)) => (name, Some(value)),
        None => (body, None),
    };

    let (index, desc) = descs
        .iter()
        .enumerate()
        .find(|(_, d)| d.matches_long(name))
        .ok_or_else(|| Error::UnrecognizedOption(name.into()))?;

    if desc.kind == ArgKind::None {
        if inline_value.is_some() {
            return Err(Error::UnexpectedArgument(name.into()));
        }

        return Ok((vec![Occurrence { index, value: None }], 1));
    }

    let (raw, consumed) = match inline_value {
        Some(value) => (value, 1),
        None => (
            next_arg.ok_or_else(|| Error::MissingArgument(name.into()))?,
            2,
        ),
    };

    let value = convert(name, desc.kind, raw)?;

    Ok((vec![Occurrence { index, value }], consumed))
}

/// Merge all occurrences of the same option into a single [ParsedOption].
///
/// Options are identified by their position in the descriptor table, not by
/// name. The result is ordered by first occurrence and each option's values
/// are in command-line order.
fn merge(descs: &[Desc], found: Vec<Occurrence>) -> Vec<ParsedOption<'_>> {
    let mut merged = Vec::<ParsedOption>::new();

    for occurrence in found {
        match merged.iter_mut().find(|o| o.index == occurrence.index) {
            Some(existing) => existing.values.extend(occurrence.value),
            None => merged.push(ParsedOption {
                index: occurrence.index,
                desc: &descs[occurrence.index],
                values: occurrence.value.into_iter().collect(),
            }),
        }
    }

    merged
}
