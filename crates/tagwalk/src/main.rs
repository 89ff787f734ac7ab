//! tagwalk CLI
//!
//! Structural navigation over HTML and CSS files from the command line.

use tagwalk::CliConfig;

fn main() {
    tagwalk::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        "version" | "--version" | "-V" => {
            println!("tagwalk {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        _ => {}
    }

    let config = match CliConfig::parse(&args[1..]) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("Run `tagwalk help` for usage.");
            std::process::exit(1);
        }
    };

    match tagwalk::run(&config) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("tagwalk: structural navigation over HTML and CSS");
    println!();
    println!("Usage: tagwalk <command> <file> <position> [options]");
    println!();
    println!("<file> may be `-` to read standard input. <position> is a byte offset;");
    println!("`step` also accepts a selection written `<start>..<end>`.");
    println!();
    println!("Commands:");
    println!("  context      Enclosing tag (markup) or CSS section (stylesheet)");
    println!("  select       Selection stops of the next item, or previous with --prev");
    println!("  step         Range to select after the given selection");
    println!("  balance      Balanced regions around the position");
    println!("  properties   Declarations of the enclosing CSS section");
    println!("  help         Show this help message");
    println!("  version      Show version information");
    println!();
    println!("Options:");
    println!("  --syntax=<name>        Document syntax (default: from file extension, else html)");
    println!("  --css                  Same as --syntax=css");
    println!("  --xml                  Same as --syntax=xml");
    println!("  --prev                 Walk backwards (select, step)");
    println!("  --direction=<dir>      Balance direction: outward (default) or inward");
    println!("  --inward, --outward    Shorthands for --direction");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=tagwalk_nav=trace) to trace the scanners.");
}
