/* 📖 # Why is the CLI minimal and hardcoded?

The CLI only drives UnixPath through a script, so there is no argument parser:

1. `unixpath ROOT [STEP...]` takes the script from the arguments
2. `unixpath --script FILE` loads a TOML script
3. `unixpath` alone loads `unixpath.toml` from the current directory

Exit codes:
- 0: Success (every intermediate path and the final path printed)
- 1: Error (script missing or malformed)
*/

use std::env;
use std::path::Path;
use std::process;

use tracing::{debug, error};
use unixpath_base::tracing::init_tracing;
use unixpath_base::{UnixPathResult, err};
use unixpath_script::{DEFAULT_SCRIPT_FILE, Script, load_script};

fn script_from_args(args: Vec<String>) -> UnixPathResult<Script> {
    if args.is_empty() {
        return load_script(Path::new(DEFAULT_SCRIPT_FILE));
    }
    if args[0] == "--script" {
        return match args.as_slice() {
            [_, file] => load_script(Path::new(file)),
            _ => Err(err!("Usage: unixpath --script FILE")),
        };
    }
    Script::parse_args(args)
}

fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("Warning: {}", e);
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let script = match script_from_args(args) {
        Ok(script) => script,
        Err(e) => {
            error!(error = ?e, "failed to read script");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    debug!(root = %script.root, steps = script.steps.len(), "running script");

    let states = script.trace();
    for (step, state) in std::iter::once(None)
        .chain(script.steps.iter().map(Some))
        .zip(&states)
    {
        match step {
            Some(step) => println!("{:<24} {}", step.to_string(), state),
            None => println!("{:<24} {}", "root", state),
        }
    }

    let path = script.run();
    println!("\n{}", path);
}
