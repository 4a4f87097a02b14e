use super::{JoinIter as _, Printer};
use crate::ir::{Field, Module, VariantType};
use std::fmt::{Display, Write as _};

/// A Rust module: the base type is an enum over the variant structs.
///
/// Accessor and visit method names keep their capitalized spelling, so the
/// module allows `non_snake_case`. Fields that mention the category are
/// boxed unless they are already behind a pointer, and keyword parameters are
/// printed as raw identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rust {
    pub uses: Vec<String>,
}

impl Printer for Rust {
    fn print(&self, module: &Module, out: &mut String) {
        ln!(out, "// @generated by visitgen");
        ln!(out, "#![allow(non_snake_case)]");
        if !self.uses.is_empty() {
            ln!(out);
            for path in &self.uses {
                ln!(out, "use {path};");
            }
        }

        emit_base(module, out);
        emit_visitor(module, out);
        for variant in &module.variants {
            emit_variant(module, variant, out);
        }
    }
}

fn emit_base(module: &Module, out: &mut String) {
    let base = &module.base.name;
    let visitor = &module.visitor.name;

    ln!(out);
    ln!(out, "pub enum {base} {{");
    for variant in &module.variants {
        ln!(out, "    {0}({0}),", variant.name);
    }
    ln!(out, "}}");

    ln!(out);
    ln!(out, "impl {base} {{");
    ln!(
        out,
        "    pub fn Accept<T, V: {visitor}<T> + ?Sized>(&self, visitor: &mut V) -> T {{"
    );
    if module.variants.is_empty() {
        ln!(out, "        match *self {{}}");
    } else {
        ln!(out, "        match self {{");
        for variant in &module.variants {
            ln!(
                out,
                "            {base}::{}(node) => node.Accept(visitor),",
                variant.name
            );
        }
        ln!(out, "        }}");
    }
    ln!(out, "    }}");
    ln!(out, "}}");
}

fn emit_visitor(module: &Module, out: &mut String) {
    let visitor = &module.visitor.name;

    ln!(out);
    if module.visitor.methods.is_empty() {
        ln!(out, "pub trait {visitor}<T> {{}}");
        return;
    }
    ln!(out, "pub trait {visitor}<T> {{");
    for method in &module.visitor.methods {
        ln!(
            out,
            "    fn {}(&mut self, node: &{}) -> T;",
            method.name,
            method.node_type
        );
    }
    ln!(out, "}}");
}

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
    "true", "try", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
    "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield",
];

/// A parameter name, raw (`r#type`) if it is a keyword.
///
/// `self`, `Self`, `super` and `crate` cannot be raw, they get a trailing `_`.
struct Ident<'a>(&'a str);

impl Display for Ident<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            "self" | "Self" | "super" | "crate" => write!(f, "{}_", self.0),
            v if KEYWORDS.contains(&v) => write!(f, "r#{v}"),
            v => write!(f, "{v}"),
        }
    }
}

/// Pointer types that already give a recursive mention a finite size.
const INDIRECTIONS: &[&str] = &["Box<", "Vec<", "VecDeque<", "Rc<", "Arc<", "&"];

/// Boxes every mention of `category` in `ty` that is not already behind a
/// pointer: `Stmt` -> `Box<Stmt>`, `Option<Stmt>` -> `Option<Box<Stmt>>`,
/// `Vec<Stmt>` stays as is.
fn rust_ty(ty: &str, category: &str) -> String {
    let is_ident = |c: char| c.is_alphanumeric() || c == '_';

    let mut out = String::with_capacity(ty.len());
    let mut rest = ty;
    while let Some(start) = rest.find(is_ident) {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let end = tail.find(|c: char| !is_ident(c)).unwrap_or(tail.len());
        let word = &tail[..end];

        let behind_pointer = INDIRECTIONS.iter().any(|p| out.trim_end().ends_with(p));
        if word == category && !behind_pointer {
            out.push_str("Box<");
            out.push_str(word);
            out.push('>');
        } else {
            out.push_str(word);
        }
        rest = &tail[end..];
    }
    out.push_str(rest);
    out
}

/// A field typed exactly as the category takes and returns the unboxed type.
fn is_boxed(module: &Module, field: &Field) -> bool {
    field.ty == module.base.name
}

/// Type used by the initializer parameter and returned by the accessor.
fn public_ty(module: &Module, field: &Field) -> String {
    if is_boxed(module, field) {
        field.ty.clone()
    } else {
        rust_ty(&field.ty, &module.base.name)
    }
}

fn emit_variant(module: &Module, variant: &VariantType, out: &mut String) {
    let visitor = &module.visitor.name;
    let name = &variant.name;
    let visit_method = &variant.visit_method;

    ln!(out);
    if variant.fields.is_empty() {
        ln!(out, "pub struct {name} {{}}");
    } else {
        ln!(out, "pub struct {name} {{");
        for field in &variant.fields {
            let stored = rust_ty(&field.ty, &module.base.name);
            ln!(out, "    {}: {stored},", field.accessor);
        }
        ln!(out, "}}");
    }

    let params = variant
        .fields
        .iter()
        .map(|field| format!("{}: {}", Ident(&field.param), public_ty(module, field)))
        .join(", ");
    ln!(out);
    ln!(out, "impl {name} {{");
    ln!(out, "    pub fn new({params}) -> Self {{");
    if variant.fields.is_empty() {
        ln!(out, "        Self {{}}");
    } else {
        ln!(out, "        Self {{");
        for field in &variant.fields {
            let param = Ident(&field.param);
            if is_boxed(module, field) {
                ln!(out, "            {}: Box::new({param}),", field.accessor);
            } else {
                ln!(out, "            {}: {param},", field.accessor);
            }
        }
        ln!(out, "        }}");
    }
    ln!(out, "    }}");

    for field in &variant.fields {
        let accessor = &field.accessor;
        ln!(out);
        ln!(
            out,
            "    pub fn {accessor}(&self) -> &{} {{",
            public_ty(module, field)
        );
        ln!(out, "        &self.{accessor}");
        ln!(out, "    }}");
    }

    ml!(
        out,
        "

            pub fn Accept<T, V: {visitor}<T> + ?Sized>(&self, visitor: &mut V) -> T {{
                visitor.{visit_method}(self)
            }}
        }}
        "
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxes_recursive_mentions() {
        assert_eq!(rust_ty("Stmt", "Stmt"), "Box<Stmt>");
        assert_eq!(rust_ty("Option<Stmt>", "Stmt"), "Option<Box<Stmt>>");
        assert_eq!(rust_ty("(Stmt, Expr)", "Stmt"), "(Box<Stmt>, Expr)");
        assert_eq!(rust_ty("Vec<Stmt>", "Stmt"), "Vec<Stmt>");
        assert_eq!(rust_ty("Option<Vec<Stmt>>", "Stmt"), "Option<Vec<Stmt>>");
        assert_eq!(rust_ty("std::boxed::Box<Stmt>", "Stmt"), "std::boxed::Box<Stmt>");
        assert_eq!(rust_ty("StmtList", "Stmt"), "StmtList");
        assert_eq!(rust_ty("Option<Expr>", "Stmt"), "Option<Expr>");
    }

    #[test]
    fn keyword_params() {
        assert_eq!(Ident("type").to_string(), "r#type");
        assert_eq!(Ident("match").to_string(), "r#match");
        assert_eq!(Ident("self").to_string(), "self_");
        assert_eq!(Ident("value").to_string(), "value");
    }
}
