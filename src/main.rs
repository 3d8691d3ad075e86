use std::ffi::OsString;
use std::fs;
use std::io;
use std::process::ExitCode;

use pagesim::console::Console;
use pagesim::input::{frames_or_default, reference_or_default, EmptyReference};
use pagesim::{service, PolicySelector, DEFAULT_FRAMES};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
pagesim - virtual memory page-replacement simulator

USAGE:
  pagesim                       interactive menu
  pagesim --demo [-f <n>]       run the demo reference string
  pagesim -r <refs> [-f <n>]    run on a space-separated reference string
  pagesim --request <json>      answer one JSON simulation request on stdout

OPTIONS:
  -r, --reference <refs>   reference string, e.g. \"7 0 1 2 0 3\"
  -f, --frames <n>         number of physical frames [default: 3]
                           (the interactive menu prompts for it instead)
  -p, --policy <name>      fifo | lru | optimal | clock | all [default: all]
      --json <path>        write the response (reference, frames, results,
                           warnings, card) as JSON
      --card <path>        write the HTML summary card
  -h, --help               print this help

Log verbosity follows RUST_LOG (default: warn).
";

struct Args {
    demo: bool,
    reference: Option<String>,
    frames: Option<String>,
    policy: PolicySelector,
    /// Whether `-p` was given, as opposed to defaulting to ALL.
    policy_given: bool,
    json_path: Option<String>,
    card_path: Option<String>,
    request: Option<String>,
}

fn parse_args() -> pagesim::Result<Option<Args>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(None);
    }

    let policy: Option<PolicySelector> = args.opt_value_from_str(["-p", "--policy"])?;
    let parsed = Args {
        demo: args.contains("--demo"),
        reference: args.opt_value_from_str(["-r", "--reference"])?,
        frames: args.opt_value_from_str(["-f", "--frames"])?,
        policy: policy.unwrap_or_default(),
        policy_given: policy.is_some(),
        json_path: args.opt_value_from_str("--json")?,
        card_path: args.opt_value_from_str("--card")?,
        request: args.opt_value_from_str("--request")?,
    };

    let rest: Vec<OsString> = args.finish();
    if !rest.is_empty() {
        warn!(?rest, "ignoring unused arguments");
    }
    Ok(Some(parsed))
}

/// Names of the flags that were given but mean nothing in request mode.
fn request_mode_extras(args: &Args) -> Vec<&'static str> {
    [
        (args.demo, "--demo"),
        (args.reference.is_some(), "--reference"),
        (args.frames.is_some(), "--frames"),
        (args.policy_given, "--policy"),
        (args.json_path.is_some(), "--json"),
        (args.card_path.is_some(), "--card"),
    ]
    .into_iter()
    .filter_map(|(given, flag)| given.then_some(flag))
    .collect()
}

/// Frame count from `-f`, or the default when the flag is absent.
fn frames_arg(args: &Args, warnings: &mut Vec<String>) -> usize {
    match &args.frames {
        Some(text) => {
            let frames = frames_or_default(text);
            warnings.extend(frames.warning);
            frames.value
        }
        None => DEFAULT_FRAMES,
    }
}

fn run(args: Args) -> pagesim::Result<()> {
    if let Some(request) = &args.request {
        let ignored = request_mode_extras(&args);
        if !ignored.is_empty() {
            warn!(?ignored, "request mode takes every input from the request JSON");
        }
        let response = service::handle_json(request)?;
        println!("{}", response);
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock()).with_selector(args.policy);

    let response = if args.demo {
        if args.reference.is_some() {
            warn!("--reference is ignored with --demo");
        }
        let mut warnings = Vec::new();
        let frames = frames_arg(&args, &mut warnings);
        let mut response = console.demo(frames)?;
        response.warnings = warnings;
        response
    } else if let Some(text) = &args.reference {
        let mut warnings = Vec::new();
        let reference = reference_or_default(text, EmptyReference::Simulate);
        warnings.extend(reference.warning);
        let frames = frames_arg(&args, &mut warnings);
        console.run_all(reference.value, frames, warnings)?
    } else {
        if args.frames.is_some() {
            warn!("--frames is ignored in interactive mode; the session prompts for it");
        }
        console.run()?
    };

    let response = if args.card_path.is_some() {
        response.with_card(args.policy)
    } else {
        response
    };

    if let Some(path) = &args.json_path {
        let file = fs::File::create(path)?;
        serde_json::to_writer_pretty(file, &response)?;
    }

    if let (Some(path), Some(html)) = (&args.card_path, &response.card_html) {
        fs::write(path, html)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let result = parse_args().and_then(|args| match args {
        Some(args) => run(args),
        None => Ok(()),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
