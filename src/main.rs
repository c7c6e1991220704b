//! The `nblist` binary.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use nblist::{Entry, Options};

const CONFIG_NONE: &str = "none";

#[derive(Debug, Parser)]
#[command(about, version, args_override_self = true)]
#[command(after_help = "\
By default, nblist will attempt to read command-line options from a config file specified by \
--config-file.  This behaviour can be disabled by passing --config-file none.  It is not an \
error if the default config file doesn't exist.  The config file holds options only; DIRECTORY \
and PREFIX are always given on the command line.")]
struct Cli {
    /// Directory containing the notebooks to list
    #[arg(value_name = "DIRECTORY")]
    directory: String,

    /// Repository path the Colab links are built from, e.g. "org/repo/blob/main/notebooks"
    #[arg(value_name = "PREFIX")]
    prefix: String,

    /// Path to config file containing command-line arguments, or 'none'
    #[arg(short, long, value_name = "PATH", default_value = get_default_config_path())]
    config_file: String,

    /// Write output to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Suffix of the files to list
    #[arg(long, value_name = "SUFFIX", default_value = nblist::DEFAULT_EXTENSION)]
    extension: String,

    /// Title shown for notebooks without one
    #[arg(long, value_name = "TITLE", default_value = nblist::DEFAULT_PLACEHOLDER)]
    placeholder: String,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy)]
enum Exit {
    Directory = 1,
    ConfigFile = 3,
    Output = 4,
}

impl Exit {
    fn exit(self) -> ! {
        process::exit(self as i32)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let mut cli = Cli::parse();

    if cli.config_file != CONFIG_NONE {
        let config_args = match read_config_args(Path::new(&cli.config_file)) {
            Ok(args) => args,
            Err(message) => {
                eprintln!("{}", message);
                Exit::ConfigFile.exit();
            }
        };

        let mut args = env::args_os();
        let mut full_args: Vec<OsString> = args.next().into_iter().collect();
        full_args.extend(config_args.into_iter().map(OsString::from));
        full_args.extend(args);
        cli = Cli::parse_from(full_args);
    }

    let directory = cli.directory.trim_end_matches('/');
    let prefix = cli.prefix.trim().trim_end_matches('/');
    if prefix.is_empty() {
        Cli::command()
            .error(ErrorKind::InvalidValue, "PREFIX must not be empty")
            .exit();
    }

    let options = Options::builder()
        .extension(cli.extension.as_str())
        .placeholder(cli.placeholder.as_str())
        .build();

    let mut entries =
        match nblist::collect_entries(directory, prefix, &options, &mut io::stderr().lock()) {
            Ok(entries) => entries,
            Err(err) => {
                eprintln!("{}", err);
                Exit::Directory.exit();
            }
        };
    nblist::sort_entries(&mut entries);

    let written = match cli.output {
        Some(ref path) => fs::File::create(path).and_then(|file| write_list(file, &entries)),
        None => write_list(io::stdout().lock(), &entries),
    };
    if let Err(err) = written {
        eprintln!("Error writing output: {}", err);
        Exit::Output.exit();
    }
}

fn get_default_config_path() -> String {
    get_configuration_path()
        .and_then(|path| path.into_os_string().into_string().ok())
        .unwrap_or_else(|| CONFIG_NONE.to_string())
}

#[cfg(all(not(windows), not(target_arch = "wasm32")))]
fn get_configuration_path() -> Option<PathBuf> {
    xdg::BaseDirectories::with_prefix("nblist")
        .ok()
        .and_then(|dirs| dirs.find_config_file("config"))
}

#[cfg(any(windows, target_arch = "wasm32"))]
fn get_configuration_path() -> Option<PathBuf> {
    None
}

fn read_config_args(path: &Path) -> Result<Vec<String>, String> {
    let contents = fs::read_to_string(path)
        .map_err(|err| format!("failed to read config file {}: {}", path.display(), err))?;
    shell_words::split(&contents)
        .map_err(|err| format!("failed to parse config file {}: {}", path.display(), err))
}

fn write_list<W: Write>(writer: W, entries: &[Entry]) -> io::Result<()> {
    let mut bw = BufWriter::new(writer);
    fmt2io::write(&mut bw, |w| nblist::render_list(entries, w))?;
    writeln!(bw)?;
    bw.flush()
}
