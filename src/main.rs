// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
mod minimal_tracer;

use std::{env, error::Error, process::exit};

use minimal_tracer::MinimalTracer;
use tracing::trace;
use tzguard::{Config, Policy, TimeZoneSchemas, VERSION};

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            exit(1);
        },
    };
    if let Err(error) = MinimalTracer::register(config.log_filter.as_deref()) {
        eprintln!("{error}");
        exit(1);
    }
    trace!(policy = %config.policy, "Started tzguard");

    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None => {
            usage();
            exit(1);
        },
        Some("-v" | "--version") => print_version(),
        Some("-h" | "--help") => usage(),
        Some("list") => list(&args[1..]),
        Some(_) => validate(config.policy, &args),
    }

    Ok(())
}

fn print_version() {
    println!("tzguard {}", VERSION);
}

fn usage() {
    print_version();
    println!(
        r#"

Usage:
  tzguard [-p | --policy <policy>] <name>...
  tzguard list [--all]
  tzguard -v | --version
  tzguard -h | --help

Options:
  -v, --version     Print version information
  -h, --help        Print this help message
  -p, --policy      Validation policy, one of:
                      strict        canonical names only
                      canonicalize  any known name, printed in canonical form
                      permissive    any known name, printed as given
                    defaults to $TZGUARD_POLICY, else canonicalize
  list              Print canonical zone names, or every known name with --all
"#
    );
}

fn list(args: &[String]) {
    let names: Vec<&str> = match args {
        [] => tzguard_tz::canonical_names().to_vec(),
        [flag] if flag == "--all" => tzguard_tz::zone_names().collect(),
        _ => {
            eprintln!("list: unexpected arguments: {}", args.join(" "));
            exit(1);
        },
    };
    for name in names {
        println!("{name}");
    }
}

fn validate(default_policy: Policy, args: &[String]) {
    let mut policy = default_policy;
    let mut names: Vec<&str> = Vec::with_capacity(args.len());

    let mut skip_next = false;
    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "-p" | "--policy" => {
                let Some(value) = args.get(i + 1) else {
                    eprintln!("{arg}: policy name is required.");
                    exit(1);
                };
                policy = match value.parse() {
                    Ok(policy) => policy,
                    Err(error) => {
                        eprintln!("{error}");
                        exit(1);
                    },
                };
                skip_next = true;
            },
            _ => names.push(arg),
        }
    }

    if names.is_empty() {
        eprintln!("No time zone names given.");
        usage();
        exit(1);
    }

    let validator = TimeZoneSchemas::global().for_policy(policy);
    let mut failed = false;
    for name in names {
        match validator.parse(name) {
            Ok(value) => println!("{value}"),
            Err(error) => {
                eprintln!("{error}");
                failed = true;
            },
        }
    }

    if failed {
        exit(1);
    }
}
