// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;

use crate::desc::ArgKind;
use crate::error::{Error, Result};

/// A typed option argument.
///
/// Flags have no value at all: a [crate::ParsedOption] for a flag simply
/// has an empty value list.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Value of an [ArgKind::Int] option.
    Int(i64),
    /// Value of an [ArgKind::Float] option.
    Float(f64),
    /// Value of an [ArgKind::Str] option.
    Str(String),
}

impl Value {
    /// The [ArgKind] this value belongs to.
    pub fn kind(&self) -> ArgKind {
        match self {
            Value::Int(_) => ArgKind::Int,
            Value::Float(_) => ArgKind::Float,
            Value::Str(_) => ArgKind::Str,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

/// Convert the raw option argument `raw` given for option `name` into the
/// type declared by `kind`.
///
/// Returns `Ok(None)` for [ArgKind::None] since flags carry no value.
pub(crate) fn convert(name: &str, kind: ArgKind, raw: &str) -> Result<Option<Value>> {
    let invalid = || Error::InvalidArgument {
        option: name.into(),
        value: raw.into(),
    };

    let value = match kind {
        ArgKind::None => return Ok(None),
        ArgKind::Int => Value::Int(raw.parse::<i64>().map_err(|_| invalid())?),
        ArgKind::Float => Value::Float(raw.parse::<f64>().map_err(|_| invalid())?),
        ArgKind::Str => Value::Str(raw.into()),
    };

    Ok(Some(value))
}
