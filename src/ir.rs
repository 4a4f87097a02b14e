//! The generated module, with every name already derived.
//!
//! Printers only copy names out of this structure. A name that is used in
//! several places (a visit method, an accessor) is stored once and cloned to
//! each place that refers to it.

use crate::grammar::VariantSpec;
use crate::naming::{accessor_name, visit_method_name, visitor_name};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub base: BaseType,
    pub visitor: VisitorInterface,
    /// In grammar order.
    pub variants: Vec<VariantType>,
}

/// `abstract class Expr` with a single `Accept<T>` operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseType {
    pub name: String,
}

/// `IExprVisitor<T>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorInterface {
    pub name: String,
    pub methods: Vec<VisitMethod>,
}

/// `T VisitBinaryExpr(Binary expr)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitMethod {
    pub name: String,
    pub node_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantType {
    pub name: String,
    /// Called from the variant's `Accept` with the variant itself.
    pub visit_method: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Declared type, verbatim.
    pub ty: String,
    /// Initializer parameter, the field name as written in the grammar.
    pub param: String,
    /// Capitalized `param`.
    pub accessor: String,
}

impl Module {
    pub fn lower(category: &str, variants: &[VariantSpec<'_>]) -> Self {
        let mut methods = Vec::with_capacity(variants.len());
        let mut variant_types = Vec::with_capacity(variants.len());

        for variant in variants {
            let visit_method = visit_method_name(variant.name, category);
            methods.push(VisitMethod {
                name: visit_method.clone(),
                node_type: variant.name.to_owned(),
            });

            let fields = variant
                .fields
                .iter()
                .map(|field| Field {
                    ty: field.ty.to_owned(),
                    param: field.name.to_owned(),
                    accessor: accessor_name(field.name),
                })
                .collect();
            variant_types.push(VariantType {
                name: variant.name.to_owned(),
                visit_method,
                fields,
            });
        }

        Module {
            base: BaseType {
                name: category.to_owned(),
            },
            visitor: VisitorInterface {
                name: visitor_name(category),
                methods,
            },
            variants: variant_types,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::parse_line;

    #[test]
    fn lower_binary() {
        let binary = parse_line("Binary : Expr left, Token operator, Expr right").unwrap();
        let module = Module::lower("Expr", &[binary]);

        assert_eq!(module.base.name, "Expr");
        assert_eq!(module.visitor.name, "IExprVisitor");
        assert_eq!(
            module.visitor.methods,
            [VisitMethod {
                name: "VisitBinaryExpr".into(),
                node_type: "Binary".into(),
            }]
        );

        let variant = &module.variants[0];
        assert_eq!(variant.name, "Binary");
        assert_eq!(variant.visit_method, module.visitor.methods[0].name);
        let fields: Vec<_> = variant
            .fields
            .iter()
            .map(|f| (f.ty.as_str(), f.param.as_str(), f.accessor.as_str()))
            .collect();
        assert_eq!(
            fields,
            [
                ("Expr", "left", "Left"),
                ("Token", "operator", "Operator"),
                ("Expr", "right", "Right"),
            ]
        );
    }

    #[test]
    fn lower_empty() {
        let module = Module::lower("Stmt", &[]);
        assert_eq!(module.base.name, "Stmt");
        assert_eq!(module.visitor.name, "IStmtVisitor");
        assert!(module.visitor.methods.is_empty());
        assert!(module.variants.is_empty());
    }

    #[test]
    fn lowercase_variant_name() {
        let module = Module::lower("Expr", &[parse_line("literal : Object value").unwrap()]);
        assert_eq!(module.visitor.methods[0].name, "VisitLiteralExpr");
        assert_eq!(module.visitor.methods[0].node_type, "literal");
        assert_eq!(module.variants[0].name, "literal");
    }
}
