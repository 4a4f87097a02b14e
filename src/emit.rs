//! Grammar lines in, one generated module out.

use crate::error::{Error, Result};
use crate::grammar::{self, VariantSpec};
use crate::ir::Module;
use crate::print::Printer;
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

/// A category name and its variants, in grammar order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpec<'a> {
    pub name: &'a str,
    pub variants: Vec<VariantSpec<'a>>,
}

impl<'a> CategorySpec<'a> {
    /// Parses all `lines` up front. The first malformed line fails the whole
    /// category.
    pub fn parse<I>(name: &'a str, lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(Error::InvalidCategory {
                name: name.to_owned(),
            });
        }

        let variants = grammar::parse_lines(lines).map_err(|source| Error::MalformedLine {
            category: name.to_owned(),
            source,
        })?;

        let category = Self { name, variants };
        category.warn_duplicates();
        Ok(category)
    }

    pub fn lower(&self) -> Module {
        Module::lower(self.name, &self.variants)
    }

    /// Duplicates are kept as written, they only get a warning.
    fn warn_duplicates(&self) {
        let mut variant_names = FxHashSet::default();
        for variant in &self.variants {
            if !variant_names.insert(variant.name) {
                warn!(
                    category = self.name,
                    variant = variant.name,
                    "duplicate variant name"
                );
            }

            let mut field_names = FxHashSet::default();
            for field in &variant.fields {
                if !field_names.insert(field.name) {
                    warn!(
                        category = self.name,
                        variant = variant.name,
                        field = field.name,
                        "duplicate field name"
                    );
                }
            }
        }
    }
}

/// Generates the module for `category` from its grammar `lines`.
///
/// Nothing is printed unless every line parses.
pub fn emit_module<'a, I, P>(category: &'a str, lines: I, printer: &P) -> Result<String>
where
    I: IntoIterator<Item = &'a str>,
    P: Printer + ?Sized,
{
    let category = CategorySpec::parse(category, lines)?;
    let module = category.lower();

    let mut out = String::new();
    printer.print(&module, &mut out);

    debug!(
        category = category.name,
        variants = module.variants.len(),
        bytes = out.len(),
        "emitted module"
    );

    Ok(out)
}

/// Like [`emit_module`], with one grammar line per line of `source`.
pub fn emit_source<P>(category: &str, source: &str, printer: &P) -> Result<String>
where
    P: Printer + ?Sized,
{
    emit_module(category, source.lines(), printer)
}
