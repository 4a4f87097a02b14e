use std::{
    fs::read_to_string,
    io::{BufWriter, StdoutLock, Write, stdout},
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use argh::FromArgValue;
use tracing::info;
use tracing_subscriber::EnvFilter;
use visitgen::{Printer, Target, emit_source};

macro_rules! bail {
    ($($tt:tt)*) => {{
        eprintln!($($tt)*);
        ::std::process::exit(1);
    }};
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Args = argh::from_env();
    if args.categories.is_empty() {
        bail!("no categories given, expected one or more `Category=path`");
    }

    let target = args.target.0;
    let imports = if args.usings.is_empty() {
        default_imports(target)
    } else {
        args.usings.clone()
    };
    let printer = target.printer(&args.namespace, &imports);

    let mut failed = 0;
    for category in &args.categories {
        if let Err(err) = generate(category, target, &*printer, &args.out_dir) {
            eprintln!("error: {err:#}");
            failed += 1;
        }
    }
    if failed > 0 {
        bail!("{failed} of {} categories failed", args.categories.len());
    }
}

#[derive(argh::FromArgs)]
/// Generate visitor-pattern node types from grammar files.
struct Args {
    /// output language, `cs` or `rust` (default: cs)
    #[argh(option, short = 't', default = "TargetArg(Target::CSharp)")]
    target: TargetArg,

    /// namespace of generated C# code (default: Lox)
    #[argh(option, short = 'n', default = "String::from(\"Lox\")")]
    namespace: String,

    /// import added to every module as `using` (C#) or `use` (Rust), may be repeated
    #[argh(option, short = 'u', long = "using")]
    usings: Vec<String>,

    /// output directory, or `-` to write to stdout (default: .)
    #[argh(option, short = 'o', long = "out-dir", default = "String::from(\".\")")]
    out_dir: String,

    /// categories to generate, as `Category=path/to/grammar`
    #[argh(positional)]
    categories: Vec<CategoryArg>,
}

struct TargetArg(Target);

impl FromArgValue for TargetArg {
    fn from_arg_value(value: &str) -> Result<Self, String> {
        value.parse().map(TargetArg).map_err(|err| format!("{err}"))
    }
}

struct CategoryArg {
    name: String,
    grammar: PathBuf,
}

impl FromArgValue for CategoryArg {
    fn from_arg_value(value: &str) -> Result<Self, String> {
        let Some((name, grammar)) = value.split_once('=') else {
            return Err(format!("expected `Category=path`, got {value:?}"));
        };
        Ok(CategoryArg {
            name: name.trim().to_owned(),
            grammar: PathBuf::from(grammar.trim()),
        })
    }
}

fn default_imports(target: Target) -> Vec<String> {
    match target {
        Target::CSharp => vec!["System".into(), "System.Collections.Generic".into()],
        Target::Rust => vec![],
    }
}

struct BufferedStdout<'a>(BufWriter<StdoutLock<'a>>);

impl BufferedStdout<'_> {
    fn with<R>(f: impl FnOnce(&mut Self) -> R) -> R {
        f(&mut Self(BufWriter::new(stdout().lock())))
    }
}

impl Write for BufferedStdout<'_> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()
    }
}

fn generate(
    category: &CategoryArg,
    target: Target,
    printer: &dyn Printer,
    out_dir: &str,
) -> Result<()> {
    let source = read_to_string(&category.grammar)
        .with_context(|| format!("failed to read {}", category.grammar.display()))?;
    let out = emit_source(&category.name, &source, printer)?;

    if out_dir == "-" {
        return BufferedStdout::with(|o| {
            o.write_all(out.as_bytes())?;
            o.flush()
        })
        .context("failed to write to stdout");
    }

    let out_dir = Path::new(out_dir);
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let path = out_dir.join(target.file_name(&category.name));
    std::fs::write(&path, out).with_context(|| format!("failed to write {}", path.display()))?;
    info!(category = %category.name, path = %path.display(), "wrote module");

    Ok(())
}
