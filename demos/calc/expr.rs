// @generated by visitgen
#![allow(non_snake_case)]

use super::{BinaryOp, UnaryOp};

pub enum Expr {
    Number(Number),
    Variable(Variable),
    Unary(Unary),
    Binary(Binary),
    Call(Call),
    Cast(Cast),
}

impl Expr {
    pub fn Accept<T, V: IExprVisitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        match self {
            Expr::Number(node) => node.Accept(visitor),
            Expr::Variable(node) => node.Accept(visitor),
            Expr::Unary(node) => node.Accept(visitor),
            Expr::Binary(node) => node.Accept(visitor),
            Expr::Call(node) => node.Accept(visitor),
            Expr::Cast(node) => node.Accept(visitor),
        }
    }
}

pub trait IExprVisitor<T> {
    fn VisitNumberExpr(&mut self, node: &Number) -> T;
    fn VisitVariableExpr(&mut self, node: &Variable) -> T;
    fn VisitUnaryExpr(&mut self, node: &Unary) -> T;
    fn VisitBinaryExpr(&mut self, node: &Binary) -> T;
    fn VisitCallExpr(&mut self, node: &Call) -> T;
    fn VisitCastExpr(&mut self, node: &Cast) -> T;
}

pub struct Number {
    Value: f64,
}

impl Number {
    pub fn new(value: f64) -> Self {
        Self {
            Value: value,
        }
    }

    pub fn Value(&self) -> &f64 {
        &self.Value
    }

    pub fn Accept<T, V: IExprVisitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        visitor.VisitNumberExpr(self)
    }
}

pub struct Variable {
    Name: String,
}

impl Variable {
    pub fn new(name: String) -> Self {
        Self {
            Name: name,
        }
    }

    pub fn Name(&self) -> &String {
        &self.Name
    }

    pub fn Accept<T, V: IExprVisitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        visitor.VisitVariableExpr(self)
    }
}

pub struct Unary {
    Op: UnaryOp,
    Operand: Box<Expr>,
}

impl Unary {
    pub fn new(op: UnaryOp, operand: Expr) -> Self {
        Self {
            Op: op,
            Operand: Box::new(operand),
        }
    }

    pub fn Op(&self) -> &UnaryOp {
        &self.Op
    }

    pub fn Operand(&self) -> &Expr {
        &self.Operand
    }

    pub fn Accept<T, V: IExprVisitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        visitor.VisitUnaryExpr(self)
    }
}

pub struct Binary {
    Left: Box<Expr>,
    Op: BinaryOp,
    Right: Box<Expr>,
}

impl Binary {
    pub fn new(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Self {
            Left: Box::new(left),
            Op: op,
            Right: Box::new(right),
        }
    }

    pub fn Left(&self) -> &Expr {
        &self.Left
    }

    pub fn Op(&self) -> &BinaryOp {
        &self.Op
    }

    pub fn Right(&self) -> &Expr {
        &self.Right
    }

    pub fn Accept<T, V: IExprVisitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        visitor.VisitBinaryExpr(self)
    }
}

pub struct Call {
    Callee: String,
    Args: Vec<Expr>,
}

impl Call {
    pub fn new(callee: String, args: Vec<Expr>) -> Self {
        Self {
            Callee: callee,
            Args: args,
        }
    }

    pub fn Callee(&self) -> &String {
        &self.Callee
    }

    pub fn Args(&self) -> &Vec<Expr> {
        &self.Args
    }

    pub fn Accept<T, V: IExprVisitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        visitor.VisitCallExpr(self)
    }
}

pub struct Cast {
    Value: Box<Expr>,
    Type: String,
}

impl Cast {
    pub fn new(value: Expr, r#type: String) -> Self {
        Self {
            Value: Box::new(value),
            Type: r#type,
        }
    }

    pub fn Value(&self) -> &Expr {
        &self.Value
    }

    pub fn Type(&self) -> &String {
        &self.Type
    }

    pub fn Accept<T, V: IExprVisitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        visitor.VisitCastExpr(self)
    }
}
