use super::{JoinIter as _, Printer, push_indented};
use crate::ir::{Module, VariantType};
use heck::AsLowerCamelCase;
use std::fmt::{Display, Write as _};

/// C# classes wrapped in a `namespace` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CSharp {
    pub namespace: String,
    pub usings: Vec<String>,
}

impl CSharp {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            usings: vec!["System".into(), "System.Collections.Generic".into()],
        }
    }
}

const KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// An identifier, as a verbatim identifier (`@operator`) if it is a keyword.
struct Ident<'a>(&'a str);

impl Display for Ident<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if KEYWORDS.contains(&self.0) {
            write!(f, "@{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Printer for CSharp {
    fn print(&self, module: &Module, out: &mut String) {
        for using in &self.usings {
            ln!(out, "using {using};");
        }
        ln!(out, "namespace {}", self.namespace);
        ln!(out, "{{");

        let mut body = String::new();
        emit_base(module, &mut body);
        emit_visitor(module, &mut body);
        for variant in &module.variants {
            emit_variant(module, variant, &mut body);
        }
        push_indented(out, &body, 1);

        ln!(out, "}}");
    }
}

fn emit_base(module: &Module, out: &mut String) {
    let base = &module.base.name;
    let visitor = &module.visitor.name;
    ml!(
        out,
        "
        public abstract class {base}
        {{
            public abstract T Accept<T>({visitor}<T> visitor);
        }}
        "
    );
}

fn emit_visitor(module: &Module, out: &mut String) {
    let visitor = &module.visitor.name;
    let param = AsLowerCamelCase(&module.base.name).to_string();
    let param = Ident(&param);

    ln!(out);
    ln!(out, "public interface {visitor}<T>");
    ln!(out, "{{");
    for method in &module.visitor.methods {
        ln!(out, "    T {}({} {param});", method.name, method.node_type);
    }
    ln!(out, "}}");
}

fn emit_variant(module: &Module, variant: &VariantType, out: &mut String) {
    let base = &module.base.name;
    let visitor = &module.visitor.name;
    let name = &variant.name;
    let visit_method = &variant.visit_method;

    ln!(out);
    ln!(out, "public class {name} : {base}");
    ln!(out, "{{");
    for field in &variant.fields {
        ln!(out, "    public {} {} {{ get; }}", field.ty, field.accessor);
    }
    if !variant.fields.is_empty() {
        ln!(out);
    }

    let params = variant
        .fields
        .iter()
        .map(|field| format!("{} {}", field.ty, Ident(&field.param)))
        .join(", ");
    ln!(out, "    public {name}({params})");
    ln!(out, "    {{");
    for field in &variant.fields {
        ln!(out, "        {} = {};", field.accessor, Ident(&field.param));
    }
    ln!(out, "    }}");

    ml!(
        out,
        "

            public override T Accept<T>({visitor}<T> visitor)
            {{
                return visitor.{visit_method}(this);
            }}
        }}
        "
    );
}
