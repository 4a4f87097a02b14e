//! Name derivation shared by every part of the generator.
//!
//! Every name that appears in more than one place of a generated module is
//! produced here, so the declaration and all of its uses agree.

/// Uppercases the first character and leaves the rest untouched.
///
/// ```
/// use visitgen::naming::capitalize;
///
/// assert_eq!(capitalize("thenBranch"), "ThenBranch");
/// assert_eq!(capitalize("Binary"), "Binary");
/// ```
pub fn capitalize(ident: &str) -> String {
    let mut chars = ident.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `Expr` -> `IExprVisitor`
pub fn visitor_name(category: &str) -> String {
    format!("I{category}Visitor")
}

/// `(Binary, Expr)` -> `VisitBinaryExpr`
pub fn visit_method_name(variant: &str, category: &str) -> String {
    format!("Visit{}{category}", capitalize(variant))
}

/// `operator` -> `Operator`
#[inline]
pub fn accessor_name(field: &str) -> String {
    capitalize(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_char_only() {
        assert_eq!(capitalize("left"), "Left");
        assert_eq!(capitalize("elseBranch"), "ElseBranch");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("_value"), "_value");
        assert_eq!(capitalize("ßtraße"), "SStraße");
    }

    #[test]
    fn derived_names() {
        assert_eq!(visitor_name("Stmt"), "IStmtVisitor");
        assert_eq!(visit_method_name("Binary", "Expr"), "VisitBinaryExpr");
        assert_eq!(visit_method_name("varDecl", "Stmt"), "VisitVarDeclStmt");
        assert_eq!(accessor_name("operator"), "Operator");
    }
}
