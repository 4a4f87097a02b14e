use anyhow::{Context as _, Result, bail};

fn main() -> Result<()> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();

    match args.first().map(String::as_str) {
        Some("codegen") => codegen(),
        Some("codegen-check") => codegen_check(),
        _ => help(),
    }
}

/// `(out dir, target, extra args, categories)`
const DEMOS: &[(&str, &str, &[&str], &[&str])] = &[
    (
        "demos/lox",
        "cs",
        &["-n", "Lox"],
        &["Expr=demos/lox/expr.ast", "Stmt=demos/lox/stmt.ast"],
    ),
    (
        "demos/calc",
        "rust",
        &["-u", "super::{BinaryOp, UnaryOp}"],
        &["Expr=demos/calc/expr.ast"],
    ),
    (
        "demos/calc",
        "rust",
        &["-u", "super::expr::Expr"],
        &["Stmt=demos/calc/stmt.ast"],
    ),
];

fn codegen() -> Result<()> {
    for &(out_dir, target, extra, categories) in DEMOS {
        let mut args = vec!["run", "--release", "-p", "visitgen-cli", "--"];
        args.extend(["-t", target, "-o", out_dir]);
        args.extend(extra.iter().copied());
        args.extend(categories.iter().copied());
        cmd("cargo", &args)?;
    }
    Ok(())
}

fn codegen_check() -> Result<()> {
    codegen()?;
    cmd("git", &["diff", "--exit-code", "--", "demos"])
        .context("generated demos are out of date, run `cargo x codegen`")
}

fn help() -> Result<()> {
    let s = "
usage: cargo x <command>

commands:
    codegen          regenerate demos
    codegen-check    fail if regenerating demos changes them
";
    eprint!("{s}");

    std::process::exit(1);
}

fn cmd(program: &str, args: &[&str]) -> Result<()> {
    let status = std::process::Command::new(program)
        .args(args)
        .stdout(std::io::stdout())
        .stderr(std::io::stderr())
        .status()
        .with_context(|| format!("failed to spawn {program}"))?;
    if !status.success() {
        bail!("{program} exited with {status}");
    }
    Ok(())
}
