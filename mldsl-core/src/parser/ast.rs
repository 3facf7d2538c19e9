use std::fmt::Display;

use crate::{
    builtin::prelude::{builtin_for_token, BuiltinCategory},
    lexer::prelude::{LexResult, Token},
    parser::prelude::{parse_error, Parse, ParseError, ParseErrorType, Parser},
    utils::prelude::SrcSpan
};

// program -> { <statement> }
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Program {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let mut statements = vec![];

        while parser.current_token.is_some() {
            statements.push(Statement::parse(parser)?);
        }

        let location = match (statements.first(), statements.last()) {
            (Some(first), Some(last)) => SrcSpan {
                start: first.location().start,
                end: last.location().end
            },
            _ => SrcSpan { start: 0, end: 0 }
        };

        Ok(Self {
            statements,
            location
        })
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let statements = self.statements.iter()
            .map(|statement| statement.to_string())
            .collect::<Vec<String>>();

        write!(f, "{}", statements.join(" "))
    }
}

// statement -> <assignment> ; | <conditional> | <for_loop> | <while_loop>
//            | <function_def> | <expression> ;
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assignment(Assignment),
    Conditional(Conditional),
    For(ForLoop),
    While(WhileLoop),
    FunctionDef(FunctionDef),
    Expression {
        expression: Expression,
        location: SrcSpan
    }
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Statement {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let res = match (&parser.current_token, &parser.next_token) {
            (Some((_, Token::If, _)), _) => Self::Conditional(Conditional::parse(parser)?),
            (Some((_, Token::For, _)), _) => Self::For(ForLoop::parse(parser)?),
            (Some((_, Token::While, _)), _) => Self::While(WhileLoop::parse(parser)?),
            (Some((_, Token::Def, _)), _) => Self::FunctionDef(FunctionDef::parse(parser)?),
            // reserved words can never be assignment targets
            (Some((start, token, end)), Some((_, Token::Assign, _)))
                if token.is_reserved_word() =>
            {
                return parse_error(
                    ParseErrorType::ExpectedIdent,
                    SrcSpan { start: *start, end: *end }
                )
            },
            // an identifier followed by `=` starts an assignment, anything
            // else is an expression statement
            (Some((_, Token::Ident(_), _)), Some((_, Token::Assign, _))) => {
                let assignment = Assignment::parse(parser)?;
                expect_semicolon(parser, assignment.location.end)?;

                Self::Assignment(assignment)
            },
            (Some(_), _) => {
                let expression = Expression::parse(parser)?;
                let location = expression.location();
                expect_semicolon(parser, location.end)?;

                Self::Expression { expression, location }
            },
            (None, _) => return parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        };

        Ok(res)
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assignment(assignment) => write!(f, "{assignment};"),
            Self::Conditional(conditional) => write!(f, "{conditional}"),
            Self::For(loop_) => write!(f, "{loop_}"),
            Self::While(loop_) => write!(f, "{loop_}"),
            Self::FunctionDef(def) => write!(f, "{def}"),
            Self::Expression { expression, .. } => write!(f, "{expression};")
        }
    }
}

impl Statement {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Assignment(assignment) => assignment.location,
            Self::Conditional(conditional) => conditional.location,
            Self::For(loop_) => loop_.location,
            Self::While(loop_) => loop_.location,
            Self::FunctionDef(def) => def.location,
            Self::Expression { location, .. } => *location
        }
    }
}

fn expect_semicolon<T: Iterator<Item = LexResult>>(
    parser: &mut Parser<T>,
    after: u32
) -> Result<(), ParseError> {
    match parser.expect_one(Token::Semicolon) {
        Ok(_) => Ok(()),
        Err(_) => parse_error(
            ParseErrorType::MissingSemicolon,
            SrcSpan { start: after, end: after + 1 }
        )
    }
}

// block -> { { <statement> } }
fn parse_block<T: Iterator<Item = LexResult>>(
    parser: &mut Parser<T>
) -> Result<(Vec<Statement>, u32), ParseError> {
    parser.expect_one(Token::LBrace)?;

    let mut statements = vec![];

    loop {
        match &parser.current_token {
            Some((_, Token::RBrace, _)) => {
                let (_, end) = parser.expect_one(Token::RBrace)?;

                return Ok((statements, end));
            },
            Some(_) => statements.push(Statement::parse(parser)?),
            None => return parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        }
    }
}

// assignment -> <identifier> = <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub name: Identifier,
    pub value: Expression,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Assignment {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let ident = parser.expect_ident()?;
        let start = ident.0;

        parser.expect_one(Token::Assign)?;

        let value = Expression::parse(parser)?;
        let end = value.location().end;

        Ok(Self {
            name: ident.into(),
            value,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

// conditional -> if ( <condition> ) <block> [else <block>]
#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    pub condition: Condition,
    pub consequence: Vec<Statement>,
    pub alternative: Option<Vec<Statement>>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Conditional {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::If)?;

        parser.expect_one(Token::LParen)?;
        let condition = Condition::parse(parser)?;
        parser.expect_one(Token::RParen)?;

        let (consequence, mut end) = parse_block(parser)?;

        let alternative = match parser.expect_one(Token::Else) {
            Ok(_) => {
                let (block, block_end) = parse_block(parser)?;
                end = block_end;

                Some(block)
            },
            Err(_) => None
        };

        Ok(Self {
            condition,
            consequence,
            alternative,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Conditional {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "if ({}) {{ ... }}{}",
            self.condition,
            if self.alternative.is_some() { " else { ... }" } else { "" }
        )
    }
}

// for_loop -> for ( <assignment> ; <condition> ; <assignment> ) <block>
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    pub init: Assignment,
    pub condition: Condition,
    pub update: Assignment,
    pub body: Vec<Statement>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for ForLoop {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::For)?;

        parser.expect_one(Token::LParen)?;
        let init = Assignment::parse(parser)?;
        parser.expect_one(Token::Semicolon)?;
        let condition = Condition::parse(parser)?;
        parser.expect_one(Token::Semicolon)?;
        let update = Assignment::parse(parser)?;
        parser.expect_one(Token::RParen)?;

        let (body, end) = parse_block(parser)?;

        Ok(Self {
            init,
            condition,
            update,
            body,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for ForLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "for ({}; {}; {}) {{ ... }}", self.init, self.condition, self.update)
    }
}

// while_loop -> while ( <condition> ) <block>
#[derive(Debug, Clone, PartialEq)]
pub struct WhileLoop {
    pub condition: Condition,
    pub body: Vec<Statement>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for WhileLoop {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::While)?;

        parser.expect_one(Token::LParen)?;
        let condition = Condition::parse(parser)?;
        parser.expect_one(Token::RParen)?;

        let (body, end) = parse_block(parser)?;

        Ok(Self {
            condition,
            body,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for WhileLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "while ({}) {{ ... }}", self.condition)
    }
}

// function_def -> def <identifier> ( [<identifier> {, <identifier>}] )
//                 { { <statement> } return <expression> ; }
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    pub name: Identifier,
    pub params: Vec<String>,
    pub body: Vec<Statement>,
    pub return_expr: Expression,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for FunctionDef {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::Def)?;

        let name: Identifier = parser.expect_ident()?.into();

        parser.expect_one(Token::LParen)?;

        let mut params = vec![];

        if !matches!(parser.current_token, Some((_, Token::RParen, _))) {
            params.push(parser.expect_ident()?.1);

            while parser.expect_one(Token::Comma).is_ok() {
                params.push(parser.expect_ident()?.1);
            }
        }

        parser.expect_one(Token::RParen)?;
        parser.expect_one(Token::LBrace)?;

        let mut body = vec![];

        // the body runs until the mandatory trailing `return`
        loop {
            match &parser.current_token {
                Some((_, Token::Return, _)) => break,
                Some((brace_start, Token::RBrace, brace_end)) => {
                    return parse_error(
                        ParseErrorType::ExpectedReturn,
                        SrcSpan { start: *brace_start, end: *brace_end }
                    )
                },
                Some(_) => body.push(Statement::parse(parser)?),
                None => return parse_error(
                    ParseErrorType::UnexpectedEof,
                    SrcSpan { start: 0, end: 0 }
                )
            }
        }

        parser.expect_one(Token::Return)?;

        let return_expr = Expression::parse(parser)?;

        expect_semicolon(parser, return_expr.location().end)?;
        let (_, end) = parser.expect_one(Token::RBrace)?;

        Ok(Self {
            name,
            params,
            body,
            return_expr,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for FunctionDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "def {}({}) {{ ... return {}; }}",
            self.name,
            self.params.join(", "),
            self.return_expr
        )
    }
}

// condition -> <expression> [<rel_op> <expression>]
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub left: Expression,
    pub rel: Option<(RelOp, Expression)>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Condition {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let left = Expression::parse(parser)?;
        let start = left.location().start;
        let mut end = left.location().end;

        let rel = match &parser.current_token {
            Some((_, token, _)) if token.is_rel_op() => {
                let (_, token, _) = parser.next_token()
                    .ok_or(ParseError {
                        error: ParseErrorType::UnexpectedEof,
                        span: SrcSpan { start: 0, end: 0 }
                    })?;
                let op = RelOp::from(&token);

                let right = Expression::parse(parser)?;
                end = right.location().end;

                Some((op, right))
            },
            _ => None
        };

        Ok(Self {
            left,
            rel,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.rel {
            Some((op, right)) => write!(f, "{} {} {}", self.left, op, right),
            None => write!(f, "{}", self.left)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual
}

impl From<&Token> for RelOp {
    fn from(value: &Token) -> Self {
        match value {
            Token::Equal => Self::Equal,
            Token::NotEqual => Self::NotEqual,
            Token::LessThan => Self::LessThan,
            Token::LessThanOrEqual => Self::LessThanOrEqual,
            Token::GreaterThan => Self::GreaterThan,
            Token::GreaterThanOrEqual => Self::GreaterThanOrEqual,
            _ => unreachable!("relational operator tokens only")
        }
    }
}

impl Display for RelOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">="
        };

        write!(f, "{op}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow
}

impl Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^"
        };

        write!(f, "{op}")
    }
}

// expression -> <term> { (+ | -) <term> }
// term       -> <factor> { (* | / | %) <factor> }
// factor     -> <base> { ^ <base> }
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Primitive(Primitive),
    Infix(Infix),
    Negate {
        expression: Box<Expression>,
        location: SrcSpan
    },
    Trig(TrigCall),
    MatrixOp(MatrixOpCall),
    List(ListLiteral),
    Call(Call),
    Grouping {
        expression: Box<Expression>,
        location: SrcSpan
    }
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Expression {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let mut expr = parse_term(parser)?;

        loop {
            let op = match &parser.current_token {
                Some((_, Token::Plus, _)) => BinOp::Add,
                Some((_, Token::Minus, _)) => BinOp::Sub,
                _ => break
            };
            parser.step();

            let right = parse_term(parser)?;
            expr = Self::Infix(Infix::new(expr, op, right));
        }

        Ok(expr)
    }
}

fn parse_term<T: Iterator<Item = LexResult>>(
    parser: &mut Parser<T>
) -> Result<Expression, ParseError> {
    let mut expr = parse_factor(parser)?;

    loop {
        let op = match &parser.current_token {
            Some((_, Token::Mult, _)) => BinOp::Mul,
            Some((_, Token::Div, _)) => BinOp::Div,
            Some((_, Token::Mod, _)) => BinOp::Mod,
            _ => break
        };
        parser.step();

        let right = parse_factor(parser)?;
        expr = Expression::Infix(Infix::new(expr, op, right));
    }

    Ok(expr)
}

// `^` chains group left to right: 2 ^ 3 ^ 2 is (2 ^ 3) ^ 2
fn parse_factor<T: Iterator<Item = LexResult>>(
    parser: &mut Parser<T>
) -> Result<Expression, ParseError> {
    let mut expr = parse_base(parser)?;

    while matches!(parser.current_token, Some((_, Token::Caret, _))) {
        parser.step();

        let right = parse_base(parser)?;
        expr = Expression::Infix(Infix::new(expr, BinOp::Pow, right));
    }

    Ok(expr)
}

fn parse_base<T: Iterator<Item = LexResult>>(
    parser: &mut Parser<T>
) -> Result<Expression, ParseError> {
    let expr = match &parser.current_token {
        Some((start, token, end)) => match token {
            Token::Number(_) | Token::Float(_) | Token::Str(_) => {
                Expression::Primitive(Primitive::parse(parser)?)
            },
            // unary minus binds a single base, -2 ^ 2 is (-2) ^ 2
            Token::Minus => {
                let (start, _) = parser.expect_one(Token::Minus)?;

                let expression = parse_base(parser)?;
                let end = expression.location().end;

                Expression::Negate {
                    expression: Box::new(expression),
                    location: SrcSpan { start, end }
                }
            },
            Token::Ident(_) => {
                // a call only when the parenthesis follows directly
                if matches!(parser.next_token, Some((_, Token::LParen, _))) {
                    Expression::Call(Call::parse(parser)?)
                } else {
                    Expression::Identifier(parser.expect_ident()?.into())
                }
            },
            Token::Sin | Token::Cos | Token::Tan | Token::Sqrt => {
                Expression::Trig(TrigCall::parse(parser)?)
            },
            Token::Transpose | Token::Inverse
            | Token::Matmult | Token::Matadd | Token::Matsub => {
                Expression::MatrixOp(MatrixOpCall::parse(parser)?)
            },
            token if token.is_builtin_keyword() => {
                Expression::Call(Call::parse(parser)?)
            },
            Token::LParen => {
                let (start, _) = parser.expect_one(Token::LParen)?;

                let expression = Box::new(Expression::parse(parser)?);

                let (_, end) = parser.expect_one(Token::RParen)?;

                Expression::Grouping {
                    expression,
                    location: SrcSpan { start, end }
                }
            },
            Token::LBracket => {
                Expression::List(ListLiteral::parse(parser)?)
            },
            _ => return parse_error(
                ParseErrorType::UnexpectedToken {
                    token: token.clone(),
                    expected: vec!["an identifier, a literal, `-`, `(` or `[`".to_string()]
                },
                SrcSpan { start: *start, end: *end }
            )
        },
        None => return parse_error(
            ParseErrorType::UnexpectedEof,
            SrcSpan { start: 0, end: 0 }
        )
    };

    Ok(expr)
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(ident) => write!(f, "{ident}"),
            Self::Primitive(primitive) => write!(f, "{primitive}"),
            Self::Infix(infix) => write!(f, "{infix}"),
            Self::Negate { expression, .. } => write!(f, "-{expression}"),
            Self::Trig(call) => write!(f, "{call}"),
            Self::MatrixOp(call) => write!(f, "{call}"),
            Self::List(list) => write!(f, "{list}"),
            Self::Call(call) => write!(f, "{call}"),
            Self::Grouping { expression, .. } => write!(f, "({expression})")
        }
    }
}

impl Expression {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Identifier(ident) => ident.location,
            Self::Primitive(primitive) => primitive.location(),
            Self::Infix(infix) => infix.location,
            Self::Negate { location, .. } => *location,
            Self::Trig(call) => call.location,
            Self::MatrixOp(call) => call.location,
            Self::List(list) => list.location,
            Self::Call(call) => call.location,
            Self::Grouping { location, .. } => *location
        }
    }
}

// identifier -> (<letter> | _) { <letter> | <digit> | _ }
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub value: String,
    pub location: SrcSpan
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<(u32, String, u32)> for Identifier {
    fn from(value: (u32, String, u32)) -> Self {
        Identifier {
            value: value.1,
            location: SrcSpan { start: value.0, end: value.2 }
        }
    }
}

// infix -> <expression> <operator> <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Infix {
    pub left: Box<Expression>,
    pub operator: BinOp,
    pub right: Box<Expression>,
    pub location: SrcSpan
}

impl Infix {
    pub fn new(left: Expression, operator: BinOp, right: Expression) -> Self {
        let location = SrcSpan {
            start: left.location().start,
            end: right.location().end
        };

        Self {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            location
        }
    }
}

impl Display for Infix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}

// primitive -> <number> | <float> | <string>
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Number {
        value: i64,
        location: SrcSpan
    },
    Float {
        value: f64,
        location: SrcSpan
    },
    Str {
        value: String,
        location: SrcSpan
    }
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Primitive {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        match parser.next_token() {
            Some((start, Token::Number(value), end)) => Ok(Self::Number {
                value,
                location: SrcSpan { start, end }
            }),
            Some((start, Token::Float(value), end)) => Ok(Self::Float {
                value,
                location: SrcSpan { start, end }
            }),
            Some((start, Token::Str(value), end)) => Ok(Self::Str {
                value,
                location: SrcSpan { start, end }
            }),
            Some((start, token, end)) => parse_error(
                ParseErrorType::UnexpectedToken {
                    token,
                    expected: vec!["a literal".to_string()]
                },
                SrcSpan { start, end }
            ),
            None => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        }
    }
}

impl Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::Float { value, .. } => write!(f, "{value}"),
            Self::Str { value, .. } => write!(f, "\"{value}\"")
        }
    }
}

impl Primitive {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Number { location, .. } |
            Self::Float { location, .. } |
            Self::Str { location, .. } => *location
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
    Sqrt
}

impl Display for TrigFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt"
        };

        write!(f, "{name}")
    }
}

// trig_call -> (sin | cos | tan | sqrt) ( <expression> )
#[derive(Debug, Clone, PartialEq)]
pub struct TrigCall {
    pub function: TrigFn,
    pub argument: Box<Expression>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for TrigCall {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, token, _) = parser.next_token()
            .ok_or(ParseError {
                error: ParseErrorType::UnexpectedEof,
                span: SrcSpan { start: 0, end: 0 }
            })?;

        let function = match token {
            Token::Sin => TrigFn::Sin,
            Token::Cos => TrigFn::Cos,
            Token::Tan => TrigFn::Tan,
            Token::Sqrt => TrigFn::Sqrt,
            _ => unreachable!("trig function tokens only")
        };

        parser.expect_one(Token::LParen)?;
        let argument = Expression::parse(parser)?;
        let (_, end) = parser.expect_one(Token::RParen)?;

        Ok(Self {
            function,
            argument: Box::new(argument),
            location: SrcSpan { start, end }
        })
    }
}

impl Display for TrigCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.function, self.argument)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixOpKind {
    Transpose,
    Inverse,
    Matmult,
    Matadd,
    Matsub
}

impl MatrixOpKind {
    pub fn arity(&self) -> usize {
        match self {
            Self::Transpose | Self::Inverse => 1,
            Self::Matmult | Self::Matadd | Self::Matsub => 2
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Transpose => "transpose",
            Self::Inverse => "inverse",
            Self::Matmult => "matmult",
            Self::Matadd => "matadd",
            Self::Matsub => "matsub"
        }
    }
}

impl Display for MatrixOpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

// matrix_op -> <op_keyword> ( <expression> {, <expression>} )
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixOpCall {
    pub op: MatrixOpKind,
    pub args: Vec<Expression>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for MatrixOpCall {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, token, _) = parser.next_token()
            .ok_or(ParseError {
                error: ParseErrorType::UnexpectedEof,
                span: SrcSpan { start: 0, end: 0 }
            })?;

        let op = match token {
            Token::Transpose => MatrixOpKind::Transpose,
            Token::Inverse => MatrixOpKind::Inverse,
            Token::Matmult => MatrixOpKind::Matmult,
            Token::Matadd => MatrixOpKind::Matadd,
            Token::Matsub => MatrixOpKind::Matsub,
            _ => unreachable!("matrix operation tokens only")
        };

        let (args, end) = parse_call_args(parser)?;

        if args.len() != op.arity() {
            return parse_error(
                ParseErrorType::WrongBuiltinArity {
                    keyword: op.keyword(),
                    expected: op.arity(),
                    got: args.len()
                },
                SrcSpan { start, end }
            );
        }

        Ok(Self {
            op,
            args,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for MatrixOpCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let args = self.args.iter()
            .map(|arg| arg.to_string())
            .collect::<Vec<String>>();

        write!(f, "{}({})", self.op, args.join(", "))
    }
}

// row -> [ <expression> {, <expression>} ] | <expression>
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    Bracketed(Vec<Expression>),
    Bare(Expression)
}

// list -> [ [<row> {, <row>}] ]
#[derive(Debug, Clone, PartialEq)]
pub struct ListLiteral {
    pub rows: Vec<Row>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for ListLiteral {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::LBracket)?;

        let mut rows = vec![];

        if !matches!(parser.current_token, Some((_, Token::RBracket, _))) {
            rows.push(parse_row(parser)?);

            while parser.expect_one(Token::Comma).is_ok() {
                rows.push(parse_row(parser)?);
            }
        }

        let (_, end) = parser.expect_one(Token::RBracket)?;

        Ok(Self {
            rows,
            location: SrcSpan { start, end }
        })
    }
}

fn parse_row<T: Iterator<Item = LexResult>>(
    parser: &mut Parser<T>
) -> Result<Row, ParseError> {
    if !matches!(parser.current_token, Some((_, Token::LBracket, _))) {
        return Ok(Row::Bare(Expression::parse(parser)?));
    }

    parser.expect_one(Token::LBracket)?;

    let mut elements = vec![];

    if !matches!(parser.current_token, Some((_, Token::RBracket, _))) {
        elements.push(Expression::parse(parser)?);

        while parser.expect_one(Token::Comma).is_ok() {
            elements.push(Expression::parse(parser)?);
        }
    }

    parser.expect_one(Token::RBracket)?;

    Ok(Row::Bracketed(elements))
}

impl Display for ListLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = self.rows.iter()
            .map(|row| match row {
                Row::Bare(expr) => expr.to_string(),
                Row::Bracketed(elements) => {
                    let elements = elements.iter()
                        .map(|element| element.to_string())
                        .collect::<Vec<String>>();

                    format!("[{}]", elements.join(", "))
                }
            })
            .collect::<Vec<String>>();

        write!(f, "[{}]", rows.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CallTarget {
    User(String),
    Builtin {
        category: BuiltinCategory,
        keyword: &'static str
    }
}

// call -> (<identifier> | <builtin_keyword>) ( [<expression> {, <expression>}] )
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub target: CallTarget,
    pub args: Vec<Expression>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Call {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        match &parser.current_token {
            Some((_, Token::Ident(_), _)) => {
                let (start, name, _) = parser.expect_ident()?;

                let (args, end) = parse_call_args(parser)?;

                Ok(Self {
                    target: CallTarget::User(name),
                    args,
                    location: SrcSpan { start, end }
                })
            },
            Some((start, token, end)) => {
                let (start, end) = (*start, *end);
                let (category, keyword, arity) = match builtin_for_token(token) {
                    Some(entry) => entry,
                    None => return parse_error(
                        ParseErrorType::UnexpectedToken {
                            token: token.clone(),
                            expected: vec!["a function name".to_string()]
                        },
                        SrcSpan { start, end }
                    )
                };
                parser.step();

                let (args, end) = match keyword {
                    // file paths are string literals, never computed values
                    "read_file" | "write_file" => parse_io_path_args(parser, arity)?,
                    _ => parse_call_args(parser)?
                };

                if args.len() != arity {
                    return parse_error(
                        ParseErrorType::WrongBuiltinArity {
                            keyword,
                            expected: arity,
                            got: args.len()
                        },
                        SrcSpan { start, end }
                    );
                }

                Ok(Self {
                    target: CallTarget::Builtin { category, keyword },
                    args,
                    location: SrcSpan { start, end }
                })
            },
            None => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        }
    }
}

fn parse_call_args<T: Iterator<Item = LexResult>>(
    parser: &mut Parser<T>
) -> Result<(Vec<Expression>, u32), ParseError> {
    parser.expect_one(Token::LParen)?;

    let mut args = vec![];

    if !matches!(parser.current_token, Some((_, Token::RParen, _))) {
        args.push(Expression::parse(parser)?);

        while parser.expect_one(Token::Comma).is_ok() {
            args.push(Expression::parse(parser)?);
        }
    }

    let (_, end) = parser.expect_one(Token::RParen)?;

    Ok((args, end))
}

fn parse_io_path_args<T: Iterator<Item = LexResult>>(
    parser: &mut Parser<T>,
    arity: usize
) -> Result<(Vec<Expression>, u32), ParseError> {
    parser.expect_one(Token::LParen)?;

    let (start, path, path_end) = parser.expect_string()?;

    let mut args = vec![Expression::Primitive(Primitive::Str {
        value: path,
        location: SrcSpan { start, end: path_end }
    })];

    if arity > 1 {
        parser.expect_one(Token::Comma)?;
        args.push(Expression::parse(parser)?);
    }

    let (_, end) = parser.expect_one(Token::RParen)?;

    Ok((args, end))
}

impl Display for Call {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match &self.target {
            CallTarget::User(name) => name.as_str(),
            CallTarget::Builtin { keyword, .. } => keyword
        };

        let args = self.args.iter()
            .map(|arg| arg.to_string())
            .collect::<Vec<String>>();

        write!(f, "{}({})", name, args.join(", "))
    }
}
