//! A `nom`-based parser for binding-expression source files.
//!
//! Every token parser skips the whitespace and `//` comments in front of it,
//! never behind it, so a node's span ends exactly at its last token.
use crate::ast::*;
use crate::error::SyntaxError;
use bindpath_expr::{BinaryOperator, UnaryOperator};
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{is_not, tag, take_while},
    character::complete::{char, digit1, multispace1, not_line_ending, satisfy},
    combinator::{cut, map, not, opt, peek, recognize, value},
    error::{Error, ErrorKind},
    multi::{many0, many0_count, separated_list0, separated_list1},
    sequence::{delimited, pair, preceded, terminated},
};
use nom_locate::LocatedSpan;
use serde_json::Value;

pub type Input<'a> = LocatedSpan<&'a str>;
type PResult<'a, O> = IResult<Input<'a>, O>;

const KEYWORDS: &[&str] = &[
    "fn", "let", "var", "new", "return", "true", "false", "null",
];

// --- Main Public Parsers ---

/// Parses a whole source file.
pub fn parse_source(source: &str) -> Result<SourceUnit, SyntaxError> {
    let mut input = Input::new(source);
    let mut items = Vec::new();
    loop {
        let (rest, ()) = sp(input).unwrap_or((input, ()));
        if rest.fragment().is_empty() {
            break;
        }
        match item(rest) {
            Ok((next, parsed)) => {
                items.push(parsed);
                input = next;
            }
            Err(nom::Err::Incomplete(_)) => return Err(SyntaxError::Incomplete),
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
                return Err(SyntaxError::Parse {
                    line: e.input.location_line(),
                    column: e.input.get_utf8_column(),
                    message: format!(
                        "unexpected input near '{}'",
                        snippet(e.input.fragment())
                    ),
                });
            }
        }
    }
    log::debug!("parsed {} item(s)", items.len());
    Ok(SourceUnit { items })
}

/// Parses a single expression, such as `() => viewModel.Items`.
pub fn parse_expression(source: &str) -> Result<SyntaxExpr, SyntaxError> {
    match terminated(expression, sp).parse(Input::new(source)) {
        Ok((rest, expr)) if rest.fragment().is_empty() => Ok(expr),
        Ok((rest, _)) => Err(SyntaxError::Parse {
            line: rest.location_line(),
            column: rest.get_utf8_column(),
            message: format!(
                "Parser did not consume all input. Remainder: '{}'",
                rest.fragment()
            ),
        }),
        Err(nom::Err::Incomplete(_)) => Err(SyntaxError::Incomplete),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(SyntaxError::Parse {
            line: e.input.location_line(),
            column: e.input.get_utf8_column(),
            message: format!("invalid expression near '{}'", snippet(e.input.fragment())),
        }),
    }
}

fn snippet(text: &str) -> &str {
    let line = text.lines().next().unwrap_or("");
    match line.char_indices().nth(24) {
        Some((end, _)) => &line[..end],
        None => line,
    }
}

// --- Spans & Tokens ---

fn span_from(start: &Input, end: &Input) -> Span {
    Span {
        offset: start.location_offset(),
        len: end.location_offset() - start.location_offset(),
        line: start.location_line(),
        column: start.get_utf8_column(),
    }
}

fn extend(span: Span, end: &Input) -> Span {
    Span {
        len: end.location_offset() - span.offset,
        ..span
    }
}

/// Skips whitespace and line comments.
fn sp(input: Input) -> PResult<()> {
    value(
        (),
        many0_count(alt((
            value((), multispace1),
            value((), pair(tag("//"), not_line_ending)),
        ))),
    )
    .parse(input)
}

fn sym<'a>(
    symbol: &'static str,
) -> impl Parser<Input<'a>, Output = Input<'a>, Error = Error<Input<'a>>> {
    preceded(sp, tag(symbol))
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn keyword<'a>(
    word: &'static str,
) -> impl Parser<Input<'a>, Output = Input<'a>, Error = Error<Input<'a>>> {
    preceded(sp, terminated(tag(word), not(satisfy(is_ident_char))))
}

fn identifier(input: Input) -> PResult<String> {
    let (rest, ident) = preceded(
        sp,
        recognize(pair(
            satisfy(|c: char| c.is_alphabetic() || c == '_'),
            take_while(is_ident_char),
        )),
    )
    .parse(input)?;
    if KEYWORDS.contains(ident.fragment()) {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Tag)));
    }
    Ok((rest, ident.fragment().to_string()))
}

// --- Literal Parsers ---

fn number(input: Input) -> PResult<Value> {
    let (rest, digits) = recognize(pair(digit1, opt(pair(char('.'), digit1)))).parse(input)?;
    let text = *digits.fragment();
    let number = match text.parse::<i64>() {
        Ok(n) => Value::from(n),
        Err(_) => text
            .parse::<f64>()
            .map(Value::from)
            .map_err(|_| nom::Err::Error(Error::new(input, ErrorKind::Float)))?,
    };
    Ok((rest, number))
}

fn string_literal(input: Input) -> PResult<Value> {
    map(
        delimited(char('"'), opt(is_not("\"")), char('"')),
        |s: Option<Input>| Value::String(s.map(|s| s.fragment().to_string()).unwrap_or_default()),
    )
    .parse(input)
}

fn literal(input: Input) -> PResult<Value> {
    alt((
        value(Value::Null, keyword("null")),
        value(Value::Bool(true), keyword("true")),
        value(Value::Bool(false), keyword("false")),
        preceded(sp, number),
        preceded(sp, string_literal),
    ))
    .parse(input)
}

// --- Expression Parsers (in order of precedence) ---

fn expression(input: Input) -> PResult<SyntaxExpr> {
    alt((lambda, conditional)).parse(input)
}

fn lambda(input: Input) -> PResult<SyntaxExpr> {
    let (i, ()) = sp(input)?;
    let start = i;
    let (i, params) = alt((
        delimited(sym("("), separated_list0(sym(","), identifier), sym(")")),
        map(identifier, |param| vec![param]),
    ))
    .parse(i)?;
    let (i, _) = sym("=>").parse(i)?;
    let (i, body) = cut(alt((block_expr, expression))).parse(i)?;
    let lambda = Lambda {
        params,
        body: Box::new(body),
    };
    Ok((i, SyntaxExpr::new(SyntaxKind::Lambda(lambda), span_from(&start, &i))))
}

fn conditional(input: Input) -> PResult<SyntaxExpr> {
    let (i, test) = or_expr(input)?;
    let (i, branches) = opt(pair(
        preceded(sym("?"), expression),
        preceded(sym(":"), expression),
    ))
    .parse(i)?;
    match branches {
        None => Ok((i, test)),
        Some((if_true, if_false)) => {
            let span = test.span.to(if_false.span);
            let kind = SyntaxKind::Conditional {
                test: Box::new(test),
                if_true: Box::new(if_true),
                if_false: Box::new(if_false),
            };
            Ok((i, SyntaxExpr::new(kind, span)))
        }
    }
}

/// Folds `operand (operator operand)*` into left-associative binary nodes.
fn binary_level<'a>(
    input: Input<'a>,
    operand: fn(Input<'a>) -> PResult<'a, SyntaxExpr>,
    operator: fn(Input<'a>) -> PResult<'a, BinaryOperator>,
) -> PResult<'a, SyntaxExpr> {
    let (i, mut left) = operand(input)?;
    let (i, remainder) = many0(pair(operator, operand)).parse(i)?;
    for (op, right) in remainder {
        let span = left.span.to(right.span);
        left = SyntaxExpr::new(
            SyntaxKind::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            },
            span,
        );
    }
    Ok((i, left))
}

fn or_op(input: Input) -> PResult<BinaryOperator> {
    value(BinaryOperator::OrElse, sym("||")).parse(input)
}

fn and_op(input: Input) -> PResult<BinaryOperator> {
    value(BinaryOperator::AndAlso, sym("&&")).parse(input)
}

fn equality_op(input: Input) -> PResult<BinaryOperator> {
    alt((
        value(BinaryOperator::Equal, sym("==")),
        value(BinaryOperator::NotEqual, sym("!=")),
    ))
    .parse(input)
}

fn relational_op(input: Input) -> PResult<BinaryOperator> {
    alt((
        value(BinaryOperator::LessThanOrEqual, sym("<=")),
        value(BinaryOperator::GreaterThanOrEqual, sym(">=")),
        value(BinaryOperator::LessThan, sym("<")),
        value(BinaryOperator::GreaterThan, sym(">")),
    ))
    .parse(input)
}

fn additive_op(input: Input) -> PResult<BinaryOperator> {
    alt((
        value(BinaryOperator::Add, sym("+")),
        value(BinaryOperator::Subtract, sym("-")),
    ))
    .parse(input)
}

fn multiplicative_op(input: Input) -> PResult<BinaryOperator> {
    alt((
        value(BinaryOperator::Multiply, sym("*")),
        value(BinaryOperator::Divide, sym("/")),
        value(BinaryOperator::Modulo, sym("%")),
    ))
    .parse(input)
}

fn or_expr(input: Input) -> PResult<SyntaxExpr> {
    binary_level(input, and_expr, or_op)
}

fn and_expr(input: Input) -> PResult<SyntaxExpr> {
    binary_level(input, equality_expr, and_op)
}

fn equality_expr(input: Input) -> PResult<SyntaxExpr> {
    binary_level(input, relational_expr, equality_op)
}

fn relational_expr(input: Input) -> PResult<SyntaxExpr> {
    binary_level(input, additive_expr, relational_op)
}

fn additive_expr(input: Input) -> PResult<SyntaxExpr> {
    binary_level(input, multiplicative_expr, additive_op)
}

fn multiplicative_expr(input: Input) -> PResult<SyntaxExpr> {
    binary_level(input, unary_expr, multiplicative_op)
}

fn unary_op(input: Input) -> PResult<UnaryOperator> {
    alt((
        value(UnaryOperator::Not, char('!')),
        value(UnaryOperator::Negate, char('-')),
    ))
    .parse(input)
}

fn unary_expr(input: Input) -> PResult<SyntaxExpr> {
    let (i, ()) = sp(input)?;
    let start = i;
    match unary_op(i) {
        Ok((i, op)) => {
            let (i, operand) = unary_expr(i)?;
            let kind = SyntaxKind::Unary {
                op,
                operand: Box::new(operand),
            };
            Ok((i, SyntaxExpr::new(kind, span_from(&start, &i))))
        }
        Err(nom::Err::Error(_)) => match cast(i) {
            Err(nom::Err::Error(_)) => postfix_expr(i),
            result => result,
        },
        Err(e) => Err(e),
    }
}

fn type_name(input: Input) -> PResult<String> {
    map(separated_list1(sym("."), identifier), |parts| parts.join(".")).parse(input)
}

/// `(Type)operand`. Only taken when the closing parenthesis is directly
/// followed by something that can start an operand, so `(a) - b` and
/// `(a).B` stay parenthesized expressions.
fn cast(input: Input) -> PResult<SyntaxExpr> {
    let (i, ()) = sp(input)?;
    let start = i;
    let (i, type_name) = delimited(sym("("), type_name, sym(")")).parse(i)?;
    let (i, _) = peek(preceded(
        sp,
        satisfy(|c: char| is_ident_char(c) || c == '"' || c == '('),
    ))
    .parse(i)?;
    let (i, operand) = unary_expr(i)?;
    let kind = SyntaxKind::Cast {
        type_name,
        operand: Box::new(operand),
    };
    Ok((i, SyntaxExpr::new(kind, span_from(&start, &i))))
}

enum Suffix {
    Member(String),
    Call(Vec<Argument>),
    Index(SyntaxExpr),
}

fn suffix(input: Input) -> PResult<Suffix> {
    alt((
        map(preceded(sym("."), identifier), Suffix::Member),
        map(argument_list, Suffix::Call),
        map(delimited(sym("["), expression, sym("]")), Suffix::Index),
    ))
    .parse(input)
}

fn postfix_expr(input: Input) -> PResult<SyntaxExpr> {
    let (i, expr) = primary(input)?;
    suffixes(i, expr)
}

/// `?.name`, the head of the chain evaluated when the target is not null.
fn member_binding(input: Input) -> PResult<SyntaxExpr> {
    let (i, ()) = sp(input)?;
    let start = i;
    let (i, name) = preceded(tag("?."), identifier).parse(i)?;
    Ok((i, SyntaxExpr::new(SyntaxKind::MemberBinding(name), span_from(&start, &i))))
}

/// Applies postfix suffixes to `expr`. A `?.` takes every suffix after it
/// into the conditional branch.
fn suffixes(input: Input, expr: SyntaxExpr) -> PResult<SyntaxExpr> {
    let (mut i, mut expr) = (input, expr);
    loop {
        match member_binding(i) {
            Ok((rest, binding)) => {
                let (rest, when_not_null) = suffixes(rest, binding)?;
                let span = extend(expr.span, &rest);
                let kind = SyntaxKind::ConditionalAccess {
                    target: Box::new(expr),
                    when_not_null: Box::new(when_not_null),
                };
                return Ok((rest, SyntaxExpr::new(kind, span)));
            }
            Err(nom::Err::Error(_)) => {}
            Err(e) => return Err(e),
        }
        match suffix(i) {
            Ok((rest, suffix)) => {
                let span = extend(expr.span, &rest);
                let target = Box::new(expr);
                let kind = match suffix {
                    Suffix::Member(name) => SyntaxKind::MemberAccess { target, name },
                    Suffix::Call(args) => SyntaxKind::Invocation {
                        callee: target,
                        args,
                    },
                    Suffix::Index(index) => SyntaxKind::ElementAccess {
                        target,
                        index: Box::new(index),
                    },
                };
                expr = SyntaxExpr::new(kind, span);
                i = rest;
            }
            Err(nom::Err::Error(_)) => break,
            Err(e) => return Err(e),
        }
    }
    Ok((i, expr))
}

fn object_creation(input: Input) -> PResult<SyntaxKind> {
    let (i, _) = keyword("new").parse(input)?;
    let (i, type_name) = identifier(i)?;
    let (i, args) = argument_list(i)?;
    Ok((i, SyntaxKind::ObjectCreation { type_name, args }))
}

fn primary(input: Input) -> PResult<SyntaxExpr> {
    let (i, ()) = sp(input)?;
    let start = i;
    let (i, kind) = alt((
        map(literal, SyntaxKind::Literal),
        object_creation,
        map(delimited(sym("("), expression, sym(")")), |inner| {
            SyntaxKind::Parenthesized(Box::new(inner))
        }),
        map(identifier, SyntaxKind::Identifier),
    ))
    .parse(i)?;
    Ok((i, SyntaxExpr::new(kind, span_from(&start, &i))))
}

// --- Argument Parsers ---

fn argument(input: Input) -> PResult<Argument> {
    let (i, ()) = sp(input)?;
    let start = i;
    let (i, name) = opt(terminated(identifier, sym(":"))).parse(i)?;
    let (i, value) = expression(i)?;
    let span = span_from(&start, &i);
    Ok((i, Argument { name, value, span }))
}

fn argument_list(input: Input) -> PResult<Vec<Argument>> {
    delimited(sym("("), separated_list0(sym(","), argument), sym(")")).parse(input)
}

// --- Declaration & Statement Parsers ---

fn let_statement(input: Input) -> PResult<Statement> {
    let (i, ()) = sp(input)?;
    let start = i;
    let (i, _) = alt((keyword("let"), keyword("var"))).parse(i)?;
    let (i, name) = identifier(i)?;
    let (i, _) = sym("=").parse(i)?;
    let (i, value) = expression(i)?;
    let (i, _) = sym(";").parse(i)?;
    let span = span_from(&start, &i);
    Ok((i, Statement::Let { name, value, span }))
}

fn return_statement(input: Input) -> PResult<Statement> {
    let (i, ()) = sp(input)?;
    let start = i;
    let (i, _) = keyword("return").parse(i)?;
    let (i, value) = opt(expression).parse(i)?;
    let (i, _) = sym(";").parse(i)?;
    let span = span_from(&start, &i);
    Ok((i, Statement::Return { value, span }))
}

fn statement(input: Input) -> PResult<Statement> {
    alt((
        let_statement,
        return_statement,
        map(terminated(expression, sym(";")), Statement::Expr),
    ))
    .parse(input)
}

fn block(input: Input) -> PResult<Vec<Statement>> {
    delimited(sym("{"), many0(statement), sym("}")).parse(input)
}

fn block_expr(input: Input) -> PResult<SyntaxExpr> {
    let (i, ()) = sp(input)?;
    let start = i;
    let (i, statements) = block(i)?;
    Ok((i, SyntaxExpr::new(SyntaxKind::Block(statements), span_from(&start, &i))))
}

fn attribute_list(input: Input) -> PResult<Vec<String>> {
    delimited(sym("["), separated_list1(sym(","), identifier), sym("]")).parse(input)
}

fn parameter(input: Input) -> PResult<ParameterDecl> {
    let (i, ()) = sp(input)?;
    let start = i;
    let (i, attributes) = many0(attribute_list).parse(i)?;
    let (i, name) = identifier(i)?;
    let span = span_from(&start, &i);
    Ok((
        i,
        ParameterDecl {
            name,
            attributes: attributes.into_iter().flatten().collect(),
            span,
        },
    ))
}

fn function_decl(input: Input) -> PResult<FunctionDecl> {
    let (i, ()) = sp(input)?;
    let start = i;
    let (i, _) = keyword("fn").parse(i)?;
    let (i, (name, params, body)) = cut((
        identifier,
        delimited(sym("("), separated_list0(sym(","), parameter), sym(")")),
        alt((value(Vec::new(), sym(";")), block)),
    ))
    .parse(i)?;
    let span = span_from(&start, &i);
    Ok((
        i,
        FunctionDecl {
            name,
            params,
            body,
            span,
        },
    ))
}

fn item(input: Input) -> PResult<Item> {
    alt((
        map(function_decl, Item::Function),
        map(statement, Item::Statement),
    ))
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lambda_body(source: &str) -> SyntaxExpr {
        let expr = parse_expression(source).unwrap();
        match expr.kind {
            SyntaxKind::Lambda(lambda) => *lambda.body,
            other => panic!("expected a lambda, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_member_chain() {
        let body = lambda_body("() => viewModel.Date.Day");
        let SyntaxKind::MemberAccess { target, name } = body.kind else {
            panic!("expected member access");
        };
        assert_eq!(name, "Day");
        assert!(matches!(
            target.kind,
            SyntaxKind::MemberAccess { ref name, .. } if name == "Date"
        ));
    }

    #[test]
    fn test_parse_literals() {
        assert_eq!(lambda_body("() => true").kind, SyntaxKind::Literal(json!(true)));
        assert_eq!(lambda_body("() => null").kind, SyntaxKind::Literal(json!(null)));
        assert_eq!(lambda_body("() => 42").kind, SyntaxKind::Literal(json!(42)));
        assert_eq!(lambda_body("() => 1.5").kind, SyntaxKind::Literal(json!(1.5)));
        assert_eq!(
            lambda_body("() => \"text\"").kind,
            SyntaxKind::Literal(json!("text"))
        );
    }

    #[test]
    fn test_parse_call_on_chain() {
        let body = lambda_body("() => viewModel.Items.ToString()");
        let SyntaxKind::Invocation { callee, args } = body.kind else {
            panic!("expected invocation");
        };
        assert!(args.is_empty());
        assert!(matches!(
            callee.kind,
            SyntaxKind::MemberAccess { ref name, .. } if name == "ToString"
        ));
    }

    #[test]
    fn test_parse_operator_precedence() {
        let body = lambda_body("() => a + b * c == d");
        let SyntaxKind::Binary { left, op, .. } = body.kind else {
            panic!("expected binary");
        };
        assert_eq!(op, BinaryOperator::Equal);
        assert!(matches!(
            left.kind,
            SyntaxKind::Binary {
                op: BinaryOperator::Add,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_lambda_forms() {
        let expr = parse_expression("x => x.Name").unwrap();
        let lambda = expr.as_lambda().unwrap();
        assert_eq!(lambda.params, vec!["x".to_string()]);

        let expr = parse_expression("(x) => x.Name").unwrap();
        assert_eq!(expr.as_lambda().unwrap().params, vec!["x".to_string()]);

        let expr = parse_expression("(a, b) => a").unwrap();
        assert_eq!(expr.as_lambda().unwrap().params.len(), 2);

        let expr = parse_expression("(viewModel.Items)").unwrap();
        assert!(matches!(expr.kind, SyntaxKind::Parenthesized(_)));
    }

    #[test]
    fn test_parse_spans() {
        let source = "ListView(  () => vm.Items , title: \"x\");";
        let unit = parse_source(source).unwrap();
        let Item::Statement(Statement::Expr(call)) = &unit.items[0] else {
            panic!("expected statement");
        };
        assert_eq!(&source[call.span.offset..call.span.end()], &source[..source.len() - 1]);
        let SyntaxKind::Invocation { args, .. } = &call.kind else {
            panic!("expected invocation");
        };
        let first = &args[0];
        assert_eq!(&source[first.span.offset..first.span.end()], "() => vm.Items");
        assert_eq!(first.span.column, 12);
        assert_eq!(args[1].name.as_deref(), Some("title"));
        assert_eq!(&source[args[1].span.offset..args[1].span.end()], "title: \"x\"");
    }

    #[test]
    fn test_parse_function_declarations() {
        let source = r#"
            // a view helper
            fn ListView([BindingExpression] binding, title);
            fn Grid([BindingExpression, Other] rows, [BindingExpression] selected) {
                let local = new ViewModel();
                ListView(() => local.Items, "rows");
            }
        "#;
        let unit = parse_source(source).unwrap();
        let functions: Vec<_> = unit.functions().collect();
        assert_eq!(functions.len(), 2);
        assert_eq!(functions[0].name, "ListView");
        assert_eq!(functions[0].params[0].attributes, vec!["BindingExpression"]);
        assert!(functions[0].params[1].attributes.is_empty());
        assert_eq!(functions[1].params[0].attributes, vec!["BindingExpression", "Other"]);
        assert_eq!(functions[1].body.len(), 2);
        assert_eq!(functions[1].span.line, 4);
        assert_eq!(functions[1].span.column, 13);
    }

    #[test]
    fn test_parse_let_statement() {
        let unit = parse_source("var viewModel = new ViewModel();").unwrap();
        assert!(matches!(
            &unit.items[0],
            Item::Statement(Statement::Let { name, .. }) if name == "viewModel"
        ));
    }

    #[test]
    fn test_parse_error_reports_location() {
        let err = parse_source("let a = 1;\nListView(() => );").unwrap_err();
        match err {
            SyntaxError::Parse { line, column, .. } => {
                assert_eq!(line, 2);
                assert_eq!(column, 16);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_inside_function_body() {
        let source = "fn Main() {\n    let a = 1;\n    ListView(a b);\n}";
        match parse_source(source).unwrap_err() {
            SyntaxError::Parse { line, column, .. } => {
                assert_eq!(line, 3);
                assert_eq!(column, 5);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_parse_cast() {
        let body = lambda_body("() => (object)viewModel.Items");
        let SyntaxKind::Cast { type_name, operand } = body.kind else {
            panic!("expected cast");
        };
        assert_eq!(type_name, "object");
        assert!(matches!(operand.kind, SyntaxKind::MemberAccess { .. }));

        let body = lambda_body("() => (System.Object) viewModel");
        assert!(matches!(body.kind, SyntaxKind::Cast { ref type_name, .. } if type_name == "System.Object"));
    }

    #[test]
    fn test_parenthesized_operands_are_not_casts() {
        assert!(matches!(lambda_body("() => (a) - b").kind, SyntaxKind::Binary { .. }));
        assert!(matches!(lambda_body("() => (a).B").kind, SyntaxKind::MemberAccess { .. }));
        assert!(matches!(lambda_body("() => (a)").kind, SyntaxKind::Parenthesized(_)));
    }

    #[test]
    fn test_parse_conditional_access() {
        let body = lambda_body("() => viewModel?.Items.Count");
        let SyntaxKind::ConditionalAccess {
            target,
            when_not_null,
        } = body.kind
        else {
            panic!("expected conditional access");
        };
        assert_eq!(target.kind, SyntaxKind::Identifier("viewModel".to_string()));
        let SyntaxKind::MemberAccess { target, name } = when_not_null.kind else {
            panic!("expected member access after the binding");
        };
        assert_eq!(name, "Count");
        assert_eq!(target.kind, SyntaxKind::MemberBinding("Items".to_string()));

        let ternary = lambda_body("() => a ? b : c");
        assert!(matches!(ternary.kind, SyntaxKind::Conditional { .. }));
    }

    #[test]
    fn test_parse_block_body() {
        let source = "() => { return viewModel.Items; }";
        let body = lambda_body(source);
        let SyntaxKind::Block(statements) = &body.kind else {
            panic!("expected block");
        };
        assert!(matches!(
            &statements[0],
            Statement::Return { value: Some(_), .. }
        ));
        assert_eq!(&source[body.span.offset..body.span.end()], "{ return viewModel.Items; }");
    }

    #[test]
    fn test_parse_expression_rejects_trailing_input() {
        assert!(parse_expression("() => a.b )").is_err());
    }

    #[test]
    fn test_keywords_are_not_identifiers() {
        assert!(parse_source("let new = 1;").is_err());
    }
}
