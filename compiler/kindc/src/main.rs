//! Kind encoding generator CLI
//!
//! Extracts tagged declarations into metadata archives and generates the
//! witness and typeclass glue from them.

use std::path::Path;

use kindc::commands::{
    dump_archive, explain_error, parse_extract_args, parse_generate_args, run_extract,
    run_generate,
};

fn main() {
    kindc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let ok = match command.as_str() {
        "extract" => {
            let options = match parse_extract_args(&args[2..]) {
                Ok(options) => options,
                Err(message) => {
                    eprintln!("error: {message}");
                    eprintln!("Usage: kindc extract <src-dir> [--crate=<name>] [-o <archive>]");
                    std::process::exit(1);
                }
            };
            run_extract(&options)
        }
        "generate" => {
            let options = match parse_generate_args(&args[2..]) {
                Ok(options) => options,
                Err(message) => {
                    eprintln!("error: {message}");
                    eprintln!("Usage: kindc generate <archive>... -o <dir> [options]");
                    eprintln!();
                    eprintln!("Options:");
                    eprintln!("  --runtime=<path>        Path of the runtime crate (default: ::kind_rt)");
                    eprintln!("  --prune                 Remove stale generated files");
                    eprintln!("  --format=<fmt>          Diagnostics: human, json");
                    eprintln!("  --color=<mode>          Colors: auto, always, never");
                    std::process::exit(1);
                }
            };
            run_generate(&options)
        }
        "dump" => {
            if args.len() < 3 {
                eprintln!("Usage: kindc dump <archive>");
                std::process::exit(1);
            }
            dump_archive(Path::new(&args[2]))
        }
        "help" | "--help" | "-h" => {
            print_usage();
            true
        }
        "version" | "--version" | "-V" => {
            println!("kindc {}", env!("CARGO_PKG_VERSION"));
            true
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: kindc --explain <ERROR_CODE>");
                eprintln!("Example: kindc --explain E2002");
                std::process::exit(1);
            }
            explain_error(&args[2])
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            false
        }
    };

    if !ok {
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("kindc: kind encoding generator");
    println!();
    println!("Usage: kindc <command> [options]");
    println!();
    println!("Commands:");
    println!("  extract <src-dir>          Record tagged declarations in a metadata archive");
    println!("  generate <archive>... -o   Generate witness and typeclass sources");
    println!("  dump <archive>             List the declarations in an archive");
    println!("  --explain <code>           Explain an error code (e.g., E2002)");
    println!("  help                       Show this help message");
    println!("  version                    Show version information");
    println!();
    println!("Extract options:");
    println!("  --crate=<name>      Crate name (default: parent directory of <src-dir>)");
    println!("  -o <archive>        Output archive (default: <crate>.kmda)");
    println!();
    println!("Generate options:");
    println!("  -o <dir>            Generated-sources root (required)");
    println!("  --runtime=<path>    Path of the runtime crate (default: ::kind_rt)");
    println!("  --prune             Remove stale generated files");
    println!();
    println!("Common options:");
    println!("  --format=<fmt>      Diagnostics: human (stderr), json (stdout)");
    println!("  --color=<mode>      Colors: auto, always, never");
    println!();
    println!("Set RUST_LOG=debug for tracing; KINDC_LOG_TREE=1 nests it by span.");
}
