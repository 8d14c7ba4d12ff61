// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;

pub(crate) const OPT_PREFIX: char = '-';
pub(crate) const LONG_OPT_PREFIX: &str = "--";

/// Used to specify whether an option is a flag (needs no value), or the
/// type of the option argument it requires.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ArgKind {
    /// Option is a flag (no argument allowed).
    None,
    /// Option needs a base-10 signed integer argument.
    Int,
    /// Option needs a floating-point argument.
    Float,
    /// Option needs a string argument (taken verbatim).
    Str,
}

impl Default for ArgKind {
    fn default() -> Self {
        ArgKind::None
    }
}

impl ArgKind {
    /// Returns true if options of this kind consume an argument.
    pub fn takes_arg(self) -> bool {
        self != ArgKind::None
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ArgKind::None => "a flag",
            ArgKind::Int => "an integer",
            ArgKind::Float => "a float",
            ArgKind::Str => "a string",
        };

        write!(f, "{}", name)
    }
}

/// Describes one supported option.
///
/// At least one of `short` and `long` should be set. A descriptor table is
/// simply a slice of these; the parser never copies them, parsed options
/// borrow the descriptor they were matched against.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Desc {
    /// Single character short option name (`-o`).
    pub short: Option<char>,
    /// Long option name (`--option`).
    pub long: Option<String>,
    /// Type of argument the option requires.
    pub kind: ArgKind,
    /// Name shown for the argument in the usage text.
    pub arg_name: String,
    /// Description of the option.
    pub help: String,
}

impl Desc {
    /// Create a new flag descriptor with no names set.
    pub fn new() -> Self {
        Desc::default()
    }

    /// Specify the short option name.
    pub fn short(self, short: char) -> Self {
        Desc {
            short: Some(short),
            ..self
        }
    }

    /// Specify the long option name.
    pub fn long(self, long: &str) -> Self {
        Desc {
            long: Some(long.into()),
            ..self
        }
    }

    /// Specify that the option requires an argument of the given kind,
    /// shown as `<arg_name>` in the usage text.
    pub fn arg(self, kind: ArgKind, arg_name: &str) -> Self {
        Desc {
            kind,
            arg_name: arg_name.into(),
            ..self
        }
    }

    /// Specify the help text for the option.
    pub fn help(self, help: &str) -> Self {
        Desc {
            help: help.into(),
            ..self
        }
    }

    /// Returns true if `name` is either the short or the long name of
    /// this option.
    pub fn matches(&self, name: &str) -> bool {
        self.matches_short(name) || self.matches_long(name)
    }

    pub(crate) fn matches_short(&self, name: &str) -> bool {
        let mut chars = name.chars();

        match (self.short, chars.next(), chars.next()) {
            (Some(short), Some(c), None) => short == c,
            _ => false,
        }
    }

    pub(crate) fn matches_long(&self, name: &str) -> bool {
        self.long.as_deref() == Some(name)
    }

    /// Key used to order descriptors in the usage text: the short name
    /// followed by the long name.
    pub(crate) fn sort_key(&self) -> String {
        let mut key = String::new();

        if let Some(short) = self.short {
            key.push(short);
        }

        if let Some(long) = &self.long {
            key.push_str(long);
        }

        key
    }
}

impl fmt::Display for Desc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.short {
            Some(short) => write!(f, "{}{}", OPT_PREFIX, short)?,
            None => write!(f, "  ")?,
        }

        if let Some(long) = &self.long {
            let sep = if self.short.is_some() { ", " } else { "  " };

            write!(f, "{}{}{}", sep, LONG_OPT_PREFIX, long)?;
        }

        if self.kind.takes_arg() {
            write!(f, " <{}>", self.arg_name)?;
        }

        Ok(())
    }
}
