// @generated by visitgen
#![allow(non_snake_case)]

use super::expr::Expr;

pub enum Stmt {
    Let(Let),
    Print(Print),
    If(If),
    Block(Block),
}

impl Stmt {
    pub fn Accept<T, V: IStmtVisitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        match self {
            Stmt::Let(node) => node.Accept(visitor),
            Stmt::Print(node) => node.Accept(visitor),
            Stmt::If(node) => node.Accept(visitor),
            Stmt::Block(node) => node.Accept(visitor),
        }
    }
}

pub trait IStmtVisitor<T> {
    fn VisitLetStmt(&mut self, node: &Let) -> T;
    fn VisitPrintStmt(&mut self, node: &Print) -> T;
    fn VisitIfStmt(&mut self, node: &If) -> T;
    fn VisitBlockStmt(&mut self, node: &Block) -> T;
}

pub struct Let {
    Name: String,
    Value: Expr,
}

impl Let {
    pub fn new(name: String, value: Expr) -> Self {
        Self {
            Name: name,
            Value: value,
        }
    }

    pub fn Name(&self) -> &String {
        &self.Name
    }

    pub fn Value(&self) -> &Expr {
        &self.Value
    }

    pub fn Accept<T, V: IStmtVisitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        visitor.VisitLetStmt(self)
    }
}

pub struct Print {
    Value: Expr,
}

impl Print {
    pub fn new(value: Expr) -> Self {
        Self {
            Value: value,
        }
    }

    pub fn Value(&self) -> &Expr {
        &self.Value
    }

    pub fn Accept<T, V: IStmtVisitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        visitor.VisitPrintStmt(self)
    }
}

pub struct If {
    Condition: Expr,
    ThenBranch: Box<Stmt>,
    ElseBranch: Option<Box<Stmt>>,
}

impl If {
    pub fn new(condition: Expr, thenBranch: Stmt, elseBranch: Option<Box<Stmt>>) -> Self {
        Self {
            Condition: condition,
            ThenBranch: Box::new(thenBranch),
            ElseBranch: elseBranch,
        }
    }

    pub fn Condition(&self) -> &Expr {
        &self.Condition
    }

    pub fn ThenBranch(&self) -> &Stmt {
        &self.ThenBranch
    }

    pub fn ElseBranch(&self) -> &Option<Box<Stmt>> {
        &self.ElseBranch
    }

    pub fn Accept<T, V: IStmtVisitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        visitor.VisitIfStmt(self)
    }
}

pub struct Block {
    Body: Vec<Stmt>,
}

impl Block {
    pub fn new(body: Vec<Stmt>) -> Self {
        Self {
            Body: body,
        }
    }

    pub fn Body(&self) -> &Vec<Stmt> {
        &self.Body
    }

    pub fn Accept<T, V: IStmtVisitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        visitor.VisitBlockStmt(self)
    }
}
