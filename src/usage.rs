// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use crate::desc::Desc;

const USAGE_PREFIX_SPACES: &str = "  ";

/// Number of spaces between the longest option column entry and the help text.
const HELP_GAP: usize = 2;

/// Generate the option lines of a help/usage statement, ready to be printed.
///
/// Options are sorted by their short name followed by their long name, and
/// the help text of every option starts in the same column:
///
/// ```text
///   -a, --add          add new item
///       --delete       delete item
///   -h                 display help information and exit
///   -p, --path <path>  path to store output files to
/// ```
///
/// The descriptor table itself is not modified.
pub fn usage(descs: &[Desc]) -> String {
    let mut sorted: Vec<&Desc> = descs.iter().collect();

    sorted.sort_by_key(|d| d.sort_key());

    let lines: Vec<String> = sorted
        .iter()
        .map(|d| format!("{}{}", USAGE_PREFIX_SPACES, d))
        .collect();

    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) + HELP_GAP;

    let mut result = String::new();

    for (line, desc) in lines.iter().zip(sorted) {
        let padding = width - line.chars().count();

        result.push_str(line);
        result.push_str(&" ".repeat(padding));
        result.push_str(&desc.help);
        result.push('\n');
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::desc::ArgKind;
    use regex::Regex;

    #[test]
    fn test_usage() {
        let expected = concat!(
            "  -a, --add          add new item\n",
            "      --delete       delete item\n",
            "  -h                 display help information and exit\n",
            "  -p, --path <path>  path to store output files to\n",
        );

        let descs = vec![
            Desc::new().long("delete").help("delete item"),
            Desc::new().short('a').long("add").help("add new item"),
            Desc::new()
                .short('p')
                .long("path")
                .arg(ArgKind::Str, "path")
                .help("path to store output files to"),
            Desc::new()
                .short('h')
                .help("display help information and exit"),
        ];

        let original = descs.clone();

        assert_eq!(usage(&descs), expected);

        // Input order is left alone
        assert_eq!(descs, original);
    }

    #[test]
    fn test_usage_empty() {
        assert_eq!(usage(&[]), "");
    }

    #[test]
    fn test_usage_layout() {
        #[derive(Debug)]
        struct TestData<'a> {
            descs: Vec<Desc>,
            // One regex per expected line, in order.
            lines_re: Vec<&'a str>,
        }

        let tests = &[
            TestData {
                descs: vec![Desc::new().short('v')],
                lines_re: vec![r"^  -v  $"],
            },
            TestData {
                // Sorted by short name and long name concatenated, so
                // "zlong" sorts after "b".
                descs: vec![
                    Desc::new().short('z').long("long").help("z help"),
                    Desc::new().short('b').help("b help"),
                ],
                lines_re: vec![r"^  -b {10}b help$", r"^  -z, --long  z help$"],
            },
            TestData {
                descs: vec![
                    Desc::new().short('n').arg(ArgKind::Int, "count").help("number"),
                    Desc::new().long("ratio").arg(ArgKind::Float, "r").help("ratio"),
                ],
                lines_re: vec![r"^  -n <count> {7}number$", r"^      --ratio <r>  ratio$"],
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let value = usage(&d.descs);

            let msg = format!("{}, value: {:?}", msg, value);

            let lines: Vec<&str> = value.lines().collect();

            assert_eq!(lines.len(), d.lines_re.len(), "{}", msg);

            for (line, line_re) in lines.iter().zip(d.lines_re.iter()) {
                let re = Regex::new(line_re).unwrap();
                assert!(re.is_match(line), "{}, line: {:?}", msg, line);
            }
        }
    }
}
