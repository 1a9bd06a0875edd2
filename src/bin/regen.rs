//! Command-line interface for regen
//! Parses a pattern once and generates one or more matching strings, or dumps the
//! token stream / parsed tree for inspection.
//!
//! Usage:
//!   regen `<pattern>` [--seed `<n>`] [--count `<n>`] [--max-repeat `<n>`]
//!         [--rng simple|mt] [--format text|json|tree|tokens]

use clap::{Arg, Command};
use regen::{Lexer, MersenneTwister, Parser, RandomSource, SimpleRandom};
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    let matches = Command::new("regen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates random strings matching a restricted regex grammar")
        .arg_required_else_help(true)
        .arg(
            Arg::new("pattern")
                .help("The pattern to generate from")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .short('s')
                .help("Random seed; omit for a time-derived seed")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("count")
                .long("count")
                .short('n')
                .help("Number of strings to generate")
                .value_parser(clap::value_parser!(u32))
                .default_value("1"),
        )
        .arg(
            Arg::new("max-repeat")
                .long("max-repeat")
                .help("Cap applied to the unbounded repeats of '+' and '*'")
                .value_parser(clap::value_parser!(u32))
                .default_value("10"),
        )
        .arg(
            Arg::new("rng")
                .long("rng")
                .help("Random source: 'simple' (LCG) or 'mt' (MT19937)")
                .value_parser(["simple", "mt"])
                .default_value("simple"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output: 'text', 'json' (generated strings), 'tree', 'tokens'")
                .value_parser(["text", "json", "tree", "tokens"])
                .default_value("text"),
        )
        .get_matches();

    let pattern = matches
        .get_one::<String>("pattern")
        .expect("pattern is required");
    let format = matches.get_one::<String>("format").expect("has default");

    let lexer = Lexer::scan(pattern).unwrap_or_else(|err| {
        eprintln!("Scan error: {}", err);
        std::process::exit(1);
    });

    if format == "tokens" {
        match serde_json::to_string_pretty(lexer.tokens()) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Serialization error: {}", err);
                std::process::exit(1);
            }
        }
        return;
    }

    let mut scope = Parser::new(lexer).parse().unwrap_or_else(|err| {
        eprintln!("Parse error: {}", err);
        std::process::exit(1);
    });
    scope.cap_unbounded(*matches.get_one::<u32>("max-repeat").expect("has default"));

    if format == "tree" {
        print!("{}", regen::to_tree_string(&scope));
        return;
    }

    let seed = matches
        .get_one::<u64>("seed")
        .copied()
        .unwrap_or_else(time_seed);
    let mut rng: Box<dyn RandomSource> =
        match matches.get_one::<String>("rng").expect("has default").as_str() {
            "mt" => Box::new(MersenneTwister::new(seed as u32)),
            _ => Box::new(SimpleRandom::new(seed)),
        };

    let count = *matches.get_one::<u32>("count").expect("has default");
    let mut outputs = Vec::with_capacity(count as usize);
    let mut buffer = String::new();
    for _ in 0..count {
        buffer.clear();
        if let Err(err) = scope.generate(&mut buffer, rng.as_mut()) {
            eprintln!("Generation error: {}", err);
            std::process::exit(1);
        }
        outputs.push(buffer.clone());
    }

    if format == "json" {
        match serde_json::to_string_pretty(&outputs) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Serialization error: {}", err);
                std::process::exit(1);
            }
        }
    } else {
        for output in outputs {
            println!("{}", output);
        }
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}
