// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// A simple example showing how to declare, parse and query options.
///
/// Try:
///
/// ```bash
/// $ cargo run --example simple -- -v -n 3 --path /tmp one -vv two -- -x
/// ```
use getopt_lite::{usage, ArgKind, Desc, Parser, Result};

fn main() -> Result<()> {
    let descs = vec![
        Desc::new()
            .short('h')
            .long("help")
            .help("display help information and exit"),
        Desc::new()
            .short('n')
            .long("count")
            .arg(ArgKind::Int, "count")
            .help("number of times to repeat"),
        Desc::new()
            .short('p')
            .long("path")
            .arg(ArgKind::Str, "path")
            .help("path to store output files to"),
        Desc::new()
            .short('r')
            .long("ratio")
            .arg(ArgKind::Float, "ratio")
            .help("scaling ratio"),
        Desc::new().short('v').long("verbose").help("be verbose"),
    ];

    let result = Parser::new(&descs).parse()?;
    let opts = &result.options;

    if opts.has("help") {
        println!("Options:");
        print!("{}", usage(&descs));
        return Ok(());
    }

    for option in opts {
        println!("INFO: option: {}, values: {:?}", option.desc, option.values);
    }

    println!("INFO: verbose: {}", opts.has("verbose"));
    println!("INFO: count: {}", opts.int_or("count", 1)?);
    println!("INFO: path: {:?}", opts.string_or("path", ".")?);
    println!("INFO: ratio: {}", opts.float_or("ratio", 1.0)?);
    println!("INFO: positional arguments: {:?}", result.positionals);

    Ok(())
}
