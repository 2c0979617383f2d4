//! keybed CLI — headless session replay.
//!
//! Usage:
//!   kb-cli                       (built-in demo session)
//!   kb-cli path/to/session.kbs
//!   kb-cli --fast --verbose
//!
//! `--fast` drops the inter-tick delay; `--verbose` logs every register
//! write, not just note on/off.

use std::time::Duration;
use std::{env, fs};

use kb_host::{
    parse_script, run_script, Keybed, RegisterLogDriver, SimInput, StdoutDiag, TICK_DELAY,
};

const DEMO_SCRIPT: &str = "\
# built-in demo: chord, release, transpose, settings sweep
set attack 200
set release 150
wait 2
press 0
wait 3
press 2
wait 3
press 4
wait 6
release 0
release 2
release 4
wait 2
transpose up
wait 2
transpose off
press 0
wait 4
release 0
wait 2
";

fn main() {
    let args: Vec<String> = env::args().collect();
    let fast = args.iter().any(|a| a == "--fast");
    let verbose = args.iter().any(|a| a == "--verbose");
    let script_path = args.iter().skip(1).find(|a| !a.starts_with("--"));

    let text = match script_path {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Failed to read {}: {}", path, e);
            std::process::exit(1);
        }),
        None => DEMO_SCRIPT.to_string(),
    };

    let commands = parse_script(&text).unwrap_or_else(|e| {
        eprintln!("Failed to parse script: {}", e);
        std::process::exit(1);
    });

    let driver = if verbose {
        RegisterLogDriver::verbose()
    } else {
        RegisterLogDriver::new()
    };
    let mut keybed = Keybed::new(driver, StdoutDiag);
    let mut input = SimInput::new();

    println!("Channels: {}", keybed.manager().table().len());
    println!("Base:     {}", keybed.manager().base());
    println!("Commands: {}", commands.len());
    println!();

    let delay = if fast { Duration::ZERO } else { TICK_DELAY };
    run_script(&mut keybed, &mut input, &commands, delay);

    println!();
    println!("Done.");
}
