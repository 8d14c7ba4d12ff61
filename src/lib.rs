// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! GNU `getopt` style command-line option parsing with typed option values.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Details](#details)
//! * [Terminology](#terminology)
//! * [Summary of features and behaviour](#summary-of-features-and-behaviour)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! You describe the options your program supports with a table of [Desc]
//! values, hand the command-line to [parse()] and get back a [ParseResult]:
//! the options found (with their arguments already converted to the
//! declared type) plus the positional arguments.
//!
//! # Quickstart
//!
//! 1. Create a descriptor table.
//!
//!    Each option needs a short name, a long name, or both. By default,
//!    options are "flags" (see the [Terminology section](#terminology)).
//!
//!    ```rust
//!    use getopt_lite::{ArgKind, Desc};
//!
//!    let descs = vec![
//!        Desc::new().short('a').long("add").help("add new item"),
//!        Desc::new().long("delete").help("delete item"),
//!        Desc::new().short('h').long("help").help("display help information and exit"),
//!        Desc::new()
//!            .short('p')
//!            .long("path")
//!            .arg(ArgKind::Str, "path")
//!            .help("path to store output files to"),
//!        Desc::new()
//!            .short('n')
//!            .arg(ArgKind::Int, "count")
//!            .help("number of items"),
//!    ];
//!    ```
//!
//! 1. Parse the command-line.
//!
//!    Real programs would normally pass [get_args()], or call
//!    [Parser::parse()].
//!
//!    ```rust
//!    # use getopt_lite::{ArgKind, Desc};
//!    # let descs = vec![
//!    #     Desc::new().short('a').long("add").help("add new item"),
//!    #     Desc::new().long("delete").help("delete item"),
//!    #     Desc::new().short('h').long("help").help("display help information and exit"),
//!    #     Desc::new().short('p').long("path").arg(ArgKind::Str, "path"),
//!    #     Desc::new().short('n').arg(ArgKind::Int, "count"),
//!    # ];
//!    let result = getopt_lite::parse(&["-an3", "--path=/tmp", "item", "--", "-x"], &descs)?;
//!
//!    assert_eq!(result.positionals, vec!["item", "-x"]);
//!    # Ok::<(), getopt_lite::Error>(())
//!    ```
//!
//! 1. Use the options.
//!
//!    ```rust
//!    # use getopt_lite::{ArgKind, Desc};
//!    # let descs = vec![
//!    #     Desc::new().short('a').long("add").help("add new item"),
//!    #     Desc::new().long("delete").help("delete item"),
//!    #     Desc::new().short('h').long("help").help("display help information and exit"),
//!    #     Desc::new().short('p').long("path").arg(ArgKind::Str, "path"),
//!    #     Desc::new().short('n').arg(ArgKind::Int, "count"),
//!    # ];
//!    # let result = getopt_lite::parse(&["-an3", "--path=/tmp", "item", "--", "-x"], &descs)?;
//!    let opts = &result.options;
//!
//!    if opts.has("help") {
//!        print!("{}", getopt_lite::usage(&descs));
//!    }
//!
//!    assert!(opts.has("add"));
//!    assert!(!opts.has("delete"));
//!    assert_eq!(opts.int_or("n", 1)?, 3);
//!    assert_eq!(opts.string_or("path", ".")?, "/tmp");
//!
//!    // Asking for the wrong type is an error, not a silent conversion.
//!    assert!(opts.float("n").is_err());
//!    # Ok::<(), getopt_lite::Error>(())
//!    ```
//!
//! # Details
//!
//! ## Terminology
//!
//! > **Note:** For further details, see `getopt(3)`.
//!
//! - An "option" is an argument that starts with a dash.
//!
//!   A "short option" is a single character introduced by one dash
//!   (`-v`). A "long option" is a name introduced by two dashes
//!   (`--verbose`).
//!
//! - An "option argument" is the value bound to an option. Short options
//!   accept it in the same argument (`-ofoo`) or in the next one
//!   (`-o foo`). Long options accept `--output=foo` or `--output foo`.
//!
//!   The next argument is always taken as the option argument, even if it
//!   starts with a dash.
//!
//! - Options that do not accept an argument are called "flags".
//!
//! - A "positional argument" is an argument that is not an option and not
//!   an option argument.
//!
//! - The special argument `--` means "end of all options": every argument
//!   that follows it is a positional argument, even if it starts with a
//!   dash.
//!
//! # Summary of features and behaviour
//!
//! - Short options can be bundled: `-abc` is the same as `-a -b -c`.
//!
//!   If an option in a bundle takes an argument, the rest of the bundle is
//!   that argument: with `-o` taking a value, `-vofoo` is `-v -o foo`.
//!
//! - Options and positional arguments can be intermingled (unless
//!   [Settings::posixly_correct()] is set). The order of the positional
//!   arguments is preserved.
//!
//! - Option arguments are converted to the [ArgKind] declared for the option
//!   ([Value::Int], [Value::Float] or [Value::Str]).
//!
//! - Options can be specified multiple times. All their arguments are
//!   kept, in order: the singular accessors ([Options::int()] _etc_) return
//!   the last one, the plural ones ([Options::ints()] _etc_) return them all.
//!
//! - Parsing stops at the first error. See [Error] for the possible errors.
//!
//! - Parsing logs through [`tracing`](https://docs.rs/tracing): one `debug`
//!   event per parse and one `trace` event per argument.
//!
//! - [usage()] generates the options section of a help statement.
//!
//! # Limitations
//!
//! - Options with optional arguments are not supported.
//!
//!   **Explanation:** An option has to be defined as being a flag (no
//!   argument) or a standard option (requiring a value). It cannot be both.
//!
//! - Long option names cannot be abbreviated.
//!
//!   **Example:** With a `--verbose` option, `--verb` is an unrecognized
//!   option.
//!
//! - Subcommands are not supported.

mod desc;
mod error;
mod options;
mod parser;
mod usage;
mod value;

pub use error::{Error, Result};

pub use desc::{ArgKind, Desc};
pub use options::{Options, ParseResult, ParsedOption};
pub use parser::{get_args, parse, Parser, Settings};
pub use usage::usage;
pub use value::Value;
