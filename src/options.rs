// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::slice;

use crate::desc::{ArgKind, Desc};
use crate::error::{Error, Result};
use crate::value::Value;

/// An option found on the command-line.
///
/// All occurrences of the same option are merged into a single
/// `ParsedOption`, so `values` holds every argument given for the option,
/// in command-line order.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedOption<'a> {
    /// Position of the descriptor in the table passed to the parser.
    pub index: usize,
    /// The descriptor the option was matched against.
    pub desc: &'a Desc,
    /// Option arguments. Always empty for flags.
    pub values: Vec<Value>,
}

/// The set of options found by the parser, in order of first occurrence.
///
/// Accessors look options up by either their short or long name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Options<'a> {
    entries: Vec<ParsedOption<'a>>,
}

impl<'a> Options<'a> {
    pub(crate) fn new(entries: Vec<ParsedOption<'a>>) -> Self {
        Options { entries }
    }

    /// Number of distinct options specified.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no options were specified.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the parsed options in order of first occurrence.
    pub fn iter(&self) -> slice::Iter<'_, ParsedOption<'a>> {
        self.entries.iter()
    }

    /// Returns the parsed option with the specified short or long name.
    pub fn get(&self, name: &str) -> Option<&ParsedOption<'a>> {
        self.entries.iter().find(|o| o.desc.matches(name))
    }

    /// Determine if the option with the specified name was specified.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the last argument given for integer option `name`, or
    /// `None` if the option was not specified.
    pub fn int(&self, name: &str) -> Result<Option<i64>> {
        Ok(self.ints(name)?.pop())
    }

    /// Returns all arguments given for integer option `name`.
    pub fn ints(&self, name: &str) -> Result<Vec<i64>> {
        self.typed(name, ArgKind::Int, |v| match v {
            Value::Int(i) => Some(*i),
            _ => None,
        })
    }

    /// Like [Options::int], but returns `default` if the option was not
    /// specified.
    pub fn int_or(&self, name: &str, default: i64) -> Result<i64> {
        Ok(self.int(name)?.unwrap_or(default))
    }

    /// Returns the last argument given for float option `name`, or
    /// `None` if the option was not specified.
    pub fn float(&self, name: &str) -> Result<Option<f64>> {
        Ok(self.floats(name)?.pop())
    }

    /// Returns all arguments given for float option `name`.
    pub fn floats(&self, name: &str) -> Result<Vec<f64>> {
        self.typed(name, ArgKind::Float, |v| match v {
            Value::Float(f) => Some(*f),
            _ => None,
        })
    }

    /// Like [Options::float], but returns `default` if the option was not
    /// specified.
    pub fn float_or(&self, name: &str, default: f64) -> Result<f64> {
        Ok(self.float(name)?.unwrap_or(default))
    }

    /// Returns the last argument given for string option `name`, or
    /// `None` if the option was not specified.
    pub fn string(&self, name: &str) -> Result<Option<String>> {
        Ok(self.strings(name)?.pop())
    }

    /// Returns all arguments given for string option `name`.
    pub fn strings(&self, name: &str) -> Result<Vec<String>> {
        self.typed(name, ArgKind::Str, |v| match v {
            Value::Str(s) => Some(s.clone()),
            _ => None,
        })
    }

    /// Like [Options::string], but returns `default` if the option was not
    /// specified.
    pub fn string_or(&self, name: &str, default: &str) -> Result<String> {
        Ok(self.string(name)?.unwrap_or_else(|| default.into()))
    }

    fn typed<T, F>(&self, name: &str, expected: ArgKind, extract: F) -> Result<Vec<T>>
    where
        F: Fn(&Value) -> Option<T>,
    {
        let option = match self.get(name) {
            Some(option) => option,
            None => return Ok(Vec::new()),
        };

        if option.desc.kind != expected {
            return Err(Error::TypeMismatch {
                option: name.into(),
                expected,
                found: option.desc.kind,
            });
        }

        Ok(option.values.iter().filter_map(extract).collect())
    }
}

impl<'a, 'b> IntoIterator for &'b Options<'a> {
    type Item = &'b ParsedOption<'a>;
    type IntoIter = slice::Iter<'b, ParsedOption<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Result of a successful parse.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParseResult<'a> {
    /// Options found, one entry per distinct option.
    pub options: Options<'a>,
    /// Positional (non-option) arguments in command-line order, including
    /// everything after `--`.
    pub positionals: Vec<String>,
}

impl<'a> ParseResult<'a> {
    /// See [Options::get].
    pub fn get(&self, name: &str) -> Option<&ParsedOption<'a>> {
        self.options.get(name)
    }

    /// See [Options::has].
    pub fn has(&self, name: &str) -> bool {
        self.options.has(name)
    }

    /// See [Options::int].
    pub fn int(&self, name: &str) -> Result<Option<i64>> {
        self.options.int(name)
    }

    /// See [Options::ints].
    pub fn ints(&self, name: &str) -> Result<Vec<i64>> {
        self.options.ints(name)
    }

    /// See [Options::int_or].
    pub fn int_or(&self, name: &str, default: i64) -> Result<i64> {
        self.options.int_or(name, default)
    }

    /// See [Options::float].
    pub fn float(&self, name: &str) -> Result<Option<f64>> {
        self.options.float(name)
    }

    /// See [Options::floats].
    pub fn floats(&self, name: &str) -> Result<Vec<f64>> {
        self.options.floats(name)
    }

    /// See [Options::float_or].
    pub fn float_or(&self, name: &str, default: f64) -> Result<f64> {
        self.options.float_or(name, default)
    }

    /// See [Options::string].
    pub fn string(&self, name: &str) -> Result<Option<String>> {
        self.options.string(name)
    }

    /// See [Options::strings].
    pub fn strings(&self, name: &str) -> Result<Vec<String>> {
        self.options.strings(name)
    }

    /// See [Options::string_or].
    pub fn string_or(&self, name: &str, default: &str) -> Result<String> {
        self.options.string_or(name, default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descs() -> Vec<Desc> {
        vec![
            Desc::new().short('v').long("verbose"),
            Desc::new().short('n').long("count").arg(ArgKind::Int, "n"),
            Desc::new().short('r').long("ratio").arg(ArgKind::Float, "r"),
            Desc::new().short('p').long("path").arg(ArgKind::Str, "path"),
            Desc::new().short('q').arg(ArgKind::Int, "q"),
        ]
    }

    fn options(descs: &[Desc]) -> Options<'_> {
        Options::new(vec![
            ParsedOption {
                index: 0,
                desc: &descs[0],
                values: vec![],
            },
            ParsedOption {
                index: 1,
                desc: &descs[1],
                values: vec![Value::Int(1), Value::Int(2)],
            },
            ParsedOption {
                index: 2,
                desc: &descs[2],
                values: vec![Value::Float(1.23), Value::Float(2.34)],
            },
            ParsedOption {
                index: 3,
                desc: &descs[3],
                values: vec![Value::Str("A".into()), Value::Str("AA".into())],
            },
        ])
    }

    #[test]
    fn test_has() {
        let descs = descs();
        let opts = options(&descs);

        assert_eq!(opts.len(), 4);
        assert!(!opts.is_empty());

        assert!(opts.has("v"));
        assert!(opts.has("verbose"));
        assert!(opts.has("n"));
        assert!(opts.has("path"));

        assert!(!opts.has("q"));
        assert!(!opts.has("x"));
        assert!(!opts.has(""));

        assert!(Options::default().is_empty());
    }

    #[test]
    fn test_get() {
        let descs = descs();
        let opts = options(&descs);

        let option = opts.get("count").unwrap();
        assert_eq!(option.index, 1);
        assert_eq!(option.desc, &descs[1]);

        assert_eq!(opts.get("q"), None);

        let names: Vec<usize> = opts.iter().map(|o| o.index).collect();
        assert_eq!(names, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_int_accessors() {
        let descs = descs();
        let opts = options(&descs);

        assert_eq!(opts.int("n"), Ok(Some(2)));
        assert_eq!(opts.int("count"), Ok(Some(2)));
        assert_eq!(opts.ints("n"), Ok(vec![1, 2]));
        assert_eq!(opts.int_or("n", -1), Ok(2));

        // Declared but not specified
        assert_eq!(opts.int("q"), Ok(None));
        assert_eq!(opts.ints("q"), Ok(vec![]));
        assert_eq!(opts.int_or("q", -1), Ok(-1));

        // Not declared at all
        assert_eq!(opts.int_or("c", -1), Ok(-1));
    }

    #[test]
    fn test_float_accessors() {
        let descs = descs();
        let opts = options(&descs);

        assert_eq!(opts.float("r"), Ok(Some(2.34)));
        assert_eq!(opts.floats("ratio"), Ok(vec![1.23, 2.34]));
        assert_eq!(opts.float_or("r", 0.12), Ok(2.34));
        assert_eq!(opts.float_or("c", 0.12), Ok(0.12));
        assert_eq!(opts.floats("c"), Ok(vec![]));
    }

    #[test]
    fn test_string_accessors() {
        let descs = descs();
        let opts = options(&descs);

        assert_eq!(opts.string("p"), Ok(Some("AA".into())));
        assert_eq!(opts.string("path"), Ok(Some("AA".into())));
        assert_eq!(opts.strings("p"), Ok(vec!["A".into(), "AA".into()]));
        assert_eq!(opts.string_or("p", "def"), Ok("AA".into()));
        assert_eq!(opts.string_or("c", "def"), Ok("def".into()));
        assert_eq!(opts.string("c"), Ok(None));
    }

    #[test]
    fn test_type_mismatch() {
        #[derive(Debug)]
        struct TestData<'a> {
            name: &'a str,
            expected: ArgKind,
            found: ArgKind,
        }

        let descs = descs();
        let opts = options(&descs);

        let tests = &[
            TestData {
                name: "path",
                expected: ArgKind::Float,
                found: ArgKind::Str,
            },
            TestData {
                name: "n",
                expected: ArgKind::Str,
                found: ArgKind::Int,
            },
            TestData {
                name: "r",
                expected: ArgKind::Int,
                found: ArgKind::Float,
            },
            TestData {
                name: "verbose",
                expected: ArgKind::Int,
                found: ArgKind::None,
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let expected_err = Err(Error::TypeMismatch {
                option: d.name.into(),
                expected: d.expected,
                found: d.found,
            });

            let result = match d.expected {
                ArgKind::Int => opts.int(d.name).map(|_| ()),
                ArgKind::Float => opts.floats(d.name).map(|_| ()),
                ArgKind::Str => opts.string_or(d.name, "").map(|_| ()),
                ArgKind::None => unreachable!(),
            };

            assert_eq!(result, expected_err, "{}", msg);
        }
    }

    #[test]
    fn test_parse_result_accessors() {
        let descs = descs();

        let result = ParseResult {
            options: options(&descs),
            positionals: vec!["file".into()],
        };

        assert!(result.has("v"));
        assert!(result.has("verbose"));
        assert!(!result.has("q"));
        assert_eq!(result.get("path").map(|o| o.index), Some(3));

        assert_eq!(result.int("n"), Ok(Some(2)));
        assert_eq!(result.ints("count"), Ok(vec![1, 2]));
        assert_eq!(result.int_or("n", 1), Ok(2));
        assert_eq!(result.int_or("q", 1), Ok(1));

        assert_eq!(result.float("r"), Ok(Some(2.34)));
        assert_eq!(result.floats("ratio"), Ok(vec![1.23, 2.34]));
        assert_eq!(result.float_or("c", 0.5), Ok(0.5));

        assert_eq!(result.string("p"), Ok(Some("AA".into())));
        assert_eq!(result.strings("path"), Ok(vec!["A".into(), "AA".into()]));
        assert_eq!(result.string_or("c", "def"), Ok("def".into()));

        assert_eq!(
            result.int("path"),
            Err(Error::TypeMismatch {
                option: "path".into(),
                expected: ArgKind::Int,
                found: ArgKind::Str,
            })
        );
    }
}
