use std::{
    env,
    io::{self, BufWriter, IsTerminal, Read, Write},
    path::PathBuf,
    process,
};

use flt_session::{
    diag::emitter::DefaultEmitter,
    output::{parse_emit_list, Emit},
    source_map::{loader::FileLoader, source::Source},
    Mode, Session,
};
use tracing::debug;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

const SUCCESS: i32 = 0;
const FAILED_NUMERAL: i32 = 1;
const USAGE_ERROR: i32 = 2;

fn usage() {
    println!(
        r"
USAGE:
flt [OPTIONS] [NUMERAL...]

DESCRIPTION:
flt converts decimal numerals to the nearest IEEE 754 double, ties to even.
Numerals are read from the command line and from files, one per line. Blank
lines and lines starting with '#' are skipped. Put numerals starting with '-'
after '--'.

OPTIONS:
    -h, --help          Display this message
    -V, --version       Print version information
    -f, --file PATH     Read numerals from PATH, '-' for stdin
        --int BASE      Parse integers in BASE, 0 infers it from the prefix
        --emit [value,bits,parts,path]
        --color [auto|always|never]
    -v, --verbose       Log to stderr, twice for more
"
    );
}

/// Returns `None` once help or version information was printed.
///
/// # Errors
/// if the arguments do not match the options
pub fn handle_options(args: &[String]) -> Result<Option<getopts::Matches>, getopts::Fail> {
    let mut options = getopts::Options::new();
    options.optflag("h", "help", "display this message and exit");
    options.optflag("V", "version", "print version information and exit");
    options.optmulti("f", "file", "read numerals from a file", "PATH");
    options.optopt("", "int", "parse integers in a radix", "BASE");
    options.optopt(
        "",
        "emit",
        "comma separated list of columns to emit",
        "[value,bits,parts,path]",
    );
    options.optopt("", "color", "configure coloring", "[auto|always|never]");
    options.optflagmulti("v", "verbose", "log to stderr");

    let matches = options.parse(args)?;

    if matches.opt_present("help") {
        usage();
        return Ok(None);
    }

    if matches.opt_present("version") {
        println!("flt {}", env!("CARGO_PKG_VERSION"));
        return Ok(None);
    }

    Ok(Some(matches))
}

struct Config {
    mode: Mode,
    emit: Vec<Emit>,
    color: bool,
    verbosity: usize,
    files: Vec<String>,
    numerals: Vec<String>,
}

fn make_config(matches: getopts::Matches) -> Result<Config, String> {
    let mode = match matches.opt_str("int") {
        None => Mode::Float,
        Some(base) => match base.parse::<u32>() {
            Ok(base) if base == 0 || (2..=36).contains(&base) => Mode::Integer { base },
            _ => return Err(format!("invalid radix `{}`, expected 0 or 2 to 36", base)),
        },
    };

    let emit = match matches.opt_str("emit") {
        None => vec![Emit::Value],
        Some(list) => parse_emit_list(&list).map_err(|e| e.to_string())?,
    };

    let color = match matches.opt_str("color").as_deref() {
        None | Some("auto") => io::stderr().is_terminal(),
        Some("always") => true,
        Some("never") => false,
        Some(other) => {
            return Err(format!(
                "invalid color `{}`, expected auto, always or never",
                other
            ))
        }
    };

    Ok(Config {
        mode,
        emit,
        color,
        verbosity: matches.opt_count("verbose"),
        files: matches.opt_strs("file"),
        numerals: matches.free,
    })
}

fn init_logging(verbosity: usize) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .init();
}

type CliSession = Session<FileLoader, DefaultEmitter<io::Stderr>>;

/// Registers every input, reporting the ones that cannot be read.
fn load_inputs<'a>(session: &'a CliSession, config: &Config) -> (Vec<&'a Source>, bool) {
    let map = session.source_map();
    let mut sources = Vec::new();
    let mut ok = true;

    if !config.numerals.is_empty() {
        let src = config.numerals.join("\n");
        sources.push(map.register_source("<command line>".to_owned(), src));
    }

    for file in &config.files {
        if file == "-" {
            let mut src = String::new();
            match io::stdin().read_to_string(&mut src) {
                Ok(_) => sources.push(map.register_source("<stdin>".to_owned(), src)),
                Err(e) => {
                    eprintln!("flt: cannot read stdin: {}", e);
                    ok = false;
                }
            }
            continue;
        }

        match map.load_source(PathBuf::from(file)) {
            Ok(src) => sources.push(src),
            Err(path) => {
                eprintln!("flt: cannot read {}", path.display());
                ok = false;
            }
        }
    }

    (sources, ok)
}

fn run(args: &[String]) -> i32 {
    if args.is_empty() {
        usage();
        return USAGE_ERROR;
    }

    let matches = match handle_options(args) {
        Ok(Some(matches)) => matches,
        Ok(None) => return SUCCESS,
        Err(e) => {
            eprintln!("flt: {}", e);
            return USAGE_ERROR;
        }
    };

    let config = match make_config(matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("flt: {}", e);
            return USAGE_ERROR;
        }
    };

    init_logging(config.verbosity);
    debug!(mode = ?config.mode, emit = ?config.emit, "configured");

    if config.files.is_empty() && config.numerals.is_empty() {
        eprintln!("flt: no input");
        return USAGE_ERROR;
    }

    let emitter = DefaultEmitter {
        stream: io::stderr(),
        color: config.color,
    };
    let session = Session::new(FileLoader, emitter, config.mode);
    let (sources, loaded) = load_inputs(&session, &config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for src in sources {
        let written = session.convert(src).and_then(|conversions| {
            conversions
                .iter()
                .try_for_each(|c| writeln!(out, "{}", c.render(&config.emit)))
        });
        if let Err(e) = written {
            eprintln!("flt: {}", e);
            return USAGE_ERROR;
        }
    }
    if let Err(e) = out.flush() {
        eprintln!("flt: {}", e);
        return USAGE_ERROR;
    }

    if !loaded {
        USAGE_ERROR
    } else if session.error_count() > 0 {
        FAILED_NUMERAL
    } else {
        SUCCESS
    }
}

fn main() {
    let args: Vec<String> = env::args_os()
        .enumerate()
        .skip(1)
        .map(|(i, arg)| {
            arg.into_string().unwrap_or_else(|arg| {
                eprintln!("flt: argument {} is not valid Unicode: {:?}", i, arg);
                process::exit(USAGE_ERROR)
            })
        })
        .collect();

    process::exit(run(&args));
}
