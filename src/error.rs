// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

use crate::desc::ArgKind;

/// The error type.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    //------------------------------
    // Runtime errors (user error)
    //------------------------------
    /// User specified an option that is not in the descriptor table.
    #[error("unrecognized option '{0}'")]
    UnrecognizedOption(String),

    /// Option argument was not specified (end of the command line was reached).
    #[error("option '{0}' requires an argument")]
    MissingArgument(String),

    /// A long flag option was given an `=value`.
    #[error("option '{0}' doesn't allow an argument")]
    UnexpectedArgument(String),

    /// Option argument could not be converted to the type the option declares.
    #[error("invalid argument '{value}' for option '{option}'")]
    InvalidArgument {
        /// Name the option was specified with.
        option: String,
        /// Raw value given on the command line.
        value: String,
    },

    /// Argument starts with a dash but is not a valid option
    /// (`-` on its own, or more than two leading dashes).
    #[error("invalid option format '{0}'")]
    MalformedToken(String),

    //------------------------------
    // Incorrect API usage errors (programmer error)
    //------------------------------
    /// An accessor asked for a value type that does not match the
    /// [ArgKind] the option was declared with.
    #[error("option '{option}' is not {expected} option (declared as {found})")]
    TypeMismatch {
        /// Name passed to the accessor.
        option: String,
        /// Kind implied by the accessor.
        expected: ArgKind,
        /// Kind the descriptor declares.
        found: ArgKind,
    },
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
