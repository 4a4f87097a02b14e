//! Rendering of a lowered [`Module`] into source text.
//!
//! Printers decide syntax only. Every name they print comes from the
//! [`Module`], so two printers for the same module agree on all names.

mod csharp;
mod rust;

pub use csharp::CSharp;
pub use rust::Rust;

use crate::ir::Module;
use heck::AsSnakeCase;
use std::fmt::Display;
use std::str::FromStr;

pub trait Printer {
    /// Appends the whole module to `out`.
    fn print(&self, module: &Module, out: &mut String);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    CSharp,
    Rust,
}

impl Target {
    pub fn extension(self) -> &'static str {
        match self {
            Target::CSharp => "cs",
            Target::Rust => "rs",
        }
    }

    /// `Expr.cs` for C#, `expr.rs` for Rust.
    pub fn file_name(self, category: &str) -> String {
        let ext = self.extension();
        match self {
            Target::CSharp => format!("{category}.{ext}"),
            Target::Rust => format!("{}.{ext}", AsSnakeCase(category)),
        }
    }

    /// `namespace` is only used by C#. `imports` become `using` directives
    /// for C# and `use` declarations for Rust.
    pub fn printer(self, namespace: &str, imports: &[String]) -> Box<dyn Printer> {
        match self {
            Target::CSharp => Box::new(CSharp {
                namespace: namespace.to_owned(),
                usings: imports.to_vec(),
            }),
            Target::Rust => Box::new(Rust {
                uses: imports.to_vec(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown target {0:?}, expected one of: cs, rust")]
pub struct UnknownTarget(pub String);

impl FromStr for Target {
    type Err = UnknownTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let v = match s {
            "cs" | "csharp" => Target::CSharp,
            "rs" | "rust" => Target::Rust,
            _ => return Err(UnknownTarget(s.to_owned())),
        };
        Ok(v)
    }
}

/// Appends `text`, indenting every non-empty line by `level` steps of four spaces.
fn push_indented(out: &mut String, text: &str, level: usize) {
    for line in text.lines() {
        if !line.is_empty() {
            for _ in 0..level {
                out.push_str("    ");
            }
            out.push_str(line);
        }
        out.push('\n');
    }
}

pub struct Join<Iter, Sep>
where
    Iter: Iterator,
{
    iter: Iter,
    sep: Sep,
}

impl<Iter, Sep> Display for Join<Iter, Sep>
where
    Iter: Iterator + Clone,
    <Iter as Iterator>::Item: Display,
    Sep: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.iter.clone().peekable();
        while let Some(item) = iter.next() {
            write!(f, "{item}")?;
            if iter.peek().is_some() {
                write!(f, "{}", self.sep)?;
            }
        }
        Ok(())
    }
}

pub trait JoinIter: Sized + Iterator {
    fn join<Sep>(self, sep: Sep) -> Join<Self, Sep>;
}

impl<Iter> JoinIter for Iter
where
    Iter: Sized + Iterator + Clone,
{
    fn join<Sep>(self, sep: Sep) -> Join<Self, Sep> {
        Join { iter: self, sep }
    }
}
