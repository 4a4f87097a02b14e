//! The checked-in demos must match what the generator produces today.
//! Regenerate them with `cargo x codegen`.

use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::Path;
use visitgen::{CSharp, Printer, Rust, Target, emit_source};

#[allow(dead_code)]
#[path = "../demos/calc/expr.rs"]
mod expr;

#[allow(dead_code)]
#[path = "../demos/calc/stmt.rs"]
mod stmt;

use expr::{Binary, Call, Cast, Expr, IExprVisitor, Number, Unary, Variable};
use stmt::{Block, IStmtVisitor, If, Let, Print, Stmt};

pub enum BinaryOp {
    Add,
    Sub,
    Mul,
}

pub enum UnaryOp {
    Neg,
}

fn check(dir: &str, category: &str, grammar: &str, target: Target, printer: &dyn Printer) {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(dir);
    let source = read_to_string(dir.join(grammar)).unwrap();
    let expected = read_to_string(dir.join(target.file_name(category))).unwrap();

    let actual = emit_source(category, &source, printer).unwrap();
    assert_eq!(
        actual, expected,
        "{category} is out of date, run `cargo x codegen`"
    );
}

#[test]
fn lox_csharp() {
    let printer = CSharp::new("Lox");
    check("lox", "Expr", "expr.ast", Target::CSharp, &printer);
    check("lox", "Stmt", "stmt.ast", Target::CSharp, &printer);
}

#[test]
fn calc_rust() {
    let printer = Rust {
        uses: vec!["super::{BinaryOp, UnaryOp}".into()],
    };
    check("calc", "Expr", "expr.ast", Target::Rust, &printer);

    let printer = Rust {
        uses: vec!["super::expr::Expr".into()],
    };
    check("calc", "Stmt", "stmt.ast", Target::Rust, &printer);
}

#[test]
fn lox_if_accessors() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/lox");
    let stmt = read_to_string(dir.join("Stmt.cs")).unwrap();
    assert!(stmt.contains("public Stmt ThenBranch { get; }"));
    assert!(stmt.contains("ThenBranch = thenBranch;"));
    assert!(stmt.contains("T VisitIfStmt(If stmt);"));
}

#[derive(Default)]
struct Calc {
    vars: HashMap<String, f64>,
    printed: Vec<f64>,
}

impl Calc {
    fn eval(&mut self, expr: &Expr) -> f64 {
        expr.Accept(self)
    }
}

impl IExprVisitor<f64> for Calc {
    fn VisitNumberExpr(&mut self, node: &Number) -> f64 {
        *node.Value()
    }

    fn VisitVariableExpr(&mut self, node: &Variable) -> f64 {
        self.vars[node.Name()]
    }

    fn VisitUnaryExpr(&mut self, node: &Unary) -> f64 {
        let operand = self.eval(node.Operand());
        match node.Op() {
            UnaryOp::Neg => -operand,
        }
    }

    fn VisitBinaryExpr(&mut self, node: &Binary) -> f64 {
        let left = self.eval(node.Left());
        let right = self.eval(node.Right());
        match node.Op() {
            BinaryOp::Add => left + right,
            BinaryOp::Sub => left - right,
            BinaryOp::Mul => left * right,
        }
    }

    fn VisitCallExpr(&mut self, node: &Call) -> f64 {
        let args: Vec<f64> = node.Args().iter().map(|arg| self.eval(arg)).collect();
        match node.Callee().as_str() {
            "max" => args.into_iter().fold(f64::NEG_INFINITY, f64::max),
            callee => panic!("unknown function {callee}"),
        }
    }

    fn VisitCastExpr(&mut self, node: &Cast) -> f64 {
        let value = self.eval(node.Value());
        match node.Type().as_str() {
            "int" => value.trunc(),
            _ => value,
        }
    }
}

impl IStmtVisitor<()> for Calc {
    fn VisitLetStmt(&mut self, node: &Let) {
        let value = self.eval(node.Value());
        self.vars.insert(node.Name().clone(), value);
    }

    fn VisitPrintStmt(&mut self, node: &Print) {
        let value = self.eval(node.Value());
        self.printed.push(value);
    }

    fn VisitIfStmt(&mut self, node: &If) {
        if self.eval(node.Condition()) != 0.0 {
            node.ThenBranch().Accept(self);
        } else if let Some(else_branch) = node.ElseBranch() {
            else_branch.Accept(self);
        }
    }

    fn VisitBlockStmt(&mut self, node: &Block) {
        for stmt in node.Body() {
            stmt.Accept(self);
        }
    }
}

fn num(value: f64) -> Expr {
    Expr::Number(Number::new(value))
}

fn var(name: &str) -> Expr {
    Expr::Variable(Variable::new(name.into()))
}

#[test]
fn calc_generated_code_runs() {
    let program = Stmt::Block(Block::new(vec![
        Stmt::Let(Let::new(
            "x".into(),
            Expr::Binary(Binary::new(num(2.0), BinaryOp::Mul, num(3.5))),
        )),
        Stmt::Print(Print::new(Expr::Cast(Cast::new(var("x"), "int".into())))),
        Stmt::If(If::new(
            Expr::Binary(Binary::new(var("x"), BinaryOp::Sub, num(7.0))),
            Stmt::Print(Print::new(num(1.0))),
            Some(Box::new(Stmt::Print(Print::new(Expr::Call(Call::new(
                "max".into(),
                vec![num(-1.0), Expr::Unary(Unary::new(UnaryOp::Neg, var("x")))],
            )))))),
        )),
        Stmt::If(If::new(num(0.0), Stmt::Print(Print::new(num(9.0))), None)),
    ]));

    let mut calc = Calc::default();
    program.Accept(&mut calc);
    assert_eq!(calc.printed, [7.0, -1.0]);
}
