//! Read-only traversal of the syntax tree.
//!
//! Implement [`Visitor`] and override the methods you need. Call the matching
//! `walk_*` function inside an override to keep recursing; omit it to prune
//! the traversal at that node.
use crate::ast::*;

pub trait Visitor: Sized {
    fn visit_unit(&mut self, unit: &SourceUnit) {
        walk_unit(self, unit);
    }

    fn visit_function(&mut self, func: &FunctionDecl) {
        walk_function(self, func);
    }

    fn visit_statement(&mut self, stmt: &Statement) {
        walk_statement(self, stmt);
    }

    fn visit_expr(&mut self, expr: &SyntaxExpr) {
        walk_expr(self, expr);
    }

    fn visit_argument(&mut self, arg: &Argument) {
        walk_argument(self, arg);
    }
}

pub fn walk_unit<V: Visitor>(v: &mut V, unit: &SourceUnit) {
    for item in &unit.items {
        match item {
            Item::Function(func) => v.visit_function(func),
            Item::Statement(stmt) => v.visit_statement(stmt),
        }
    }
}

pub fn walk_function<V: Visitor>(v: &mut V, func: &FunctionDecl) {
    for stmt in &func.body {
        v.visit_statement(stmt);
    }
}

pub fn walk_statement<V: Visitor>(v: &mut V, stmt: &Statement) {
    match stmt {
        Statement::Let { value, .. } => v.visit_expr(value),
        Statement::Return { value, .. } => {
            if let Some(value) = value {
                v.visit_expr(value);
            }
        }
        Statement::Expr(expr) => v.visit_expr(expr),
    }
}

pub fn walk_argument<V: Visitor>(v: &mut V, arg: &Argument) {
    v.visit_expr(&arg.value);
}

pub fn walk_expr<V: Visitor>(v: &mut V, expr: &SyntaxExpr) {
    match &expr.kind {
        SyntaxKind::Literal(_) | SyntaxKind::Identifier(_) | SyntaxKind::MemberBinding(_) => {}
        SyntaxKind::MemberAccess { target, .. } => v.visit_expr(target),
        SyntaxKind::Invocation { callee, args } => {
            v.visit_expr(callee);
            for arg in args {
                v.visit_argument(arg);
            }
        }
        SyntaxKind::ObjectCreation { args, .. } => {
            for arg in args {
                v.visit_argument(arg);
            }
        }
        SyntaxKind::Lambda(lambda) => v.visit_expr(&lambda.body),
        SyntaxKind::Unary { operand, .. } => v.visit_expr(operand),
        SyntaxKind::Binary { left, right, .. } => {
            v.visit_expr(left);
            v.visit_expr(right);
        }
        SyntaxKind::ElementAccess { target, index } => {
            v.visit_expr(target);
            v.visit_expr(index);
        }
        SyntaxKind::Conditional {
            test,
            if_true,
            if_false,
        } => {
            v.visit_expr(test);
            v.visit_expr(if_true);
            v.visit_expr(if_false);
        }
        SyntaxKind::Parenthesized(inner) => v.visit_expr(inner),
        SyntaxKind::Cast { operand, .. } => v.visit_expr(operand),
        SyntaxKind::ConditionalAccess {
            target,
            when_not_null,
        } => {
            v.visit_expr(target);
            v.visit_expr(when_not_null);
        }
        SyntaxKind::Block(statements) => {
            for stmt in statements {
                v.visit_statement(stmt);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_source;

    #[derive(Default)]
    struct IdentCollector {
        names: Vec<String>,
    }

    impl Visitor for IdentCollector {
        fn visit_expr(&mut self, expr: &SyntaxExpr) {
            if let SyntaxKind::Identifier(name) = &expr.kind {
                self.names.push(name.clone());
            }
            walk_expr(self, expr);
        }
    }

    #[test]
    fn test_walk_reaches_every_identifier() {
        let unit = parse_source(
            r#"
            fn Show(item) { Render(item.Name ? left : right); }
            let total = items[index] + -offset;
            Outer(Inner(() => (nested)));
            Show(() => { return (Label)source?.Text; });
            "#,
        )
        .unwrap();
        let mut collector = IdentCollector::default();
        collector.visit_unit(&unit);
        assert_eq!(
            collector.names,
            vec![
                "Render", "item", "left", "right", "items", "index", "offset", "Outer", "Inner",
                "nested", "Show", "source"
            ]
        );
    }
}
