use swc_common::Span;
use swc_ecma_ast::{
    BinaryOp, Expr, JSXElement, JSXElementChild, JSXExpr, JSXExprContainer, JSXFragment, JSXText,
    Lit,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::siblings::{is_formatting_whitespace, significant_siblings};

/// The two hazards the detector distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FindingKind {
    /// A conditional expression renders raw text next to other children.
    DangerousConditional,
    /// A text node directly follows a conditional that may render an element.
    DangerousLiteral,
}

impl FindingKind {
    pub fn message(&self) -> &'static str {
        match self {
            Self::DangerousConditional => {
                "Conditionally rendered text node with siblings must be wrapped in a block-level container."
            }
            Self::DangerousLiteral => {
                "Text node is a sibling of a conditional expression and must be wrapped in a block-level container."
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DangerousConditional => "dangerous-conditional",
            Self::DangerousLiteral => "dangerous-literal",
        }
    }

    /// Parse a rule name (case insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dangerous-conditional" => Some(Self::DangerousConditional),
            "dangerous-literal" => Some(Self::DangerousLiteral),
            _ => None,
        }
    }

    pub fn all() -> [Self; 2] {
        [Self::DangerousConditional, Self::DangerousLiteral]
    }
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reported hazard: the node to wrap and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub span: Span,
    pub kind: FindingKind,
}

/// Branching shape of a container's expression.
enum Branching<'a> {
    /// `a && b`, `a || b`, `a ?? b`. Only the right operand matters.
    Logical { right: &'a Expr },
    /// `test ? cons : alt`.
    Conditional { cons: &'a Expr, alt: &'a Expr },
}

impl<'a> Branching<'a> {
    fn of(expr: &'a Expr) -> Option<Self> {
        match unparen(expr) {
            Expr::Bin(bin)
                if matches!(
                    bin.op,
                    BinaryOp::LogicalAnd | BinaryOp::LogicalOr | BinaryOp::NullishCoalescing
                ) =>
            {
                Some(Self::Logical { right: &bin.right })
            }
            Expr::Cond(cond) => Some(Self::Conditional {
                cons: &cond.cons,
                alt: &cond.alt,
            }),
            _ => None,
        }
    }
}

/// Walks JSX trees and collects conditional text hazards.
///
/// Every element and fragment body is inspected child by child, in document
/// order. Attribute values are traversed for nested JSX but are never
/// treated as children, so `alt={cond && 'x'}` cannot match.
#[derive(Debug, Default)]
pub struct ConditionalTextDetector {
    findings: Vec<Finding>,
}

impl ConditionalTextDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the detector over any AST node and return findings in source order.
    pub fn detect<N: VisitWith<Self>>(mut self, node: &N) -> Vec<Finding> {
        node.visit_with(&mut self);
        self.findings
    }

    fn check_children(&mut self, children: &[JSXElementChild]) {
        for (index, child) in children.iter().enumerate() {
            match child {
                JSXElementChild::JSXExprContainer(container) => {
                    if let Some(kind) = check_conditional_text(container, children) {
                        self.report(container.span, kind);
                    }
                }
                JSXElementChild::JSXText(text) => {
                    if let Some(kind) = check_text_after_conditional(text, children, index) {
                        self.report(text.span, kind);
                    }
                }
                _ => {}
            }
            child.visit_with(self);
        }
    }

    fn report(&mut self, span: Span, kind: FindingKind) {
        self.findings.push(Finding { span, kind });
    }
}

impl Visit for ConditionalTextDetector {
    fn visit_jsx_element(&mut self, node: &JSXElement) {
        node.opening.visit_with(self);
        self.check_children(&node.children);
    }

    fn visit_jsx_fragment(&mut self, node: &JSXFragment) {
        self.check_children(&node.children);
    }
}

/// Bare conditional text: `{cond && 'text'}` or `{cond ? 'text' : x}` next to
/// at least one other significant child.
///
/// `siblings` is the full child list of the parent the container sits in.
pub fn check_conditional_text(
    container: &JSXExprContainer,
    siblings: &[JSXElementChild],
) -> Option<FindingKind> {
    let branching = container_expr(container).and_then(Branching::of)?;

    if significant_siblings(siblings).len() <= 1 {
        return None;
    }

    let dangerous = match branching {
        // Any literal on the right, falsy ones included.
        Branching::Logical { right } => as_literal(right).is_some(),
        Branching::Conditional { cons, alt } => [cons, alt]
            .into_iter()
            .any(|branch| as_literal(branch).is_some_and(is_truthy)),
    };

    dangerous.then_some(FindingKind::DangerousConditional)
}

/// Text directly after a conditional that can swap between an element and
/// nothing: `{cond && <span />} text`.
///
/// `index` is the raw position of `text` within `siblings`.
pub fn check_text_after_conditional(
    text: &JSXText,
    siblings: &[JSXElementChild],
    index: usize,
) -> Option<FindingKind> {
    let previous = index.checked_sub(1).and_then(|i| siblings.get(i))?;
    let JSXElementChild::JSXExprContainer(container) = previous else {
        return None;
    };
    let branching = container_expr(container).and_then(Branching::of)?;

    // Formatting whitespace only matters when a bare literal follows it.
    if is_formatting_whitespace(&text.value) {
        let next_is_literal = match siblings.get(index + 1) {
            Some(JSXElementChild::JSXExprContainer(next)) => {
                container_expr(next).and_then(as_literal).is_some()
            }
            _ => false,
        };
        if !next_is_literal {
            return None;
        }
    }

    let dangerous = match branching {
        Branching::Logical { right } => is_element(right),
        Branching::Conditional { cons, alt } => {
            let branches = [cons, alt];
            branches.into_iter().any(is_element) && branches.into_iter().any(can_render_empty)
        }
    };

    dangerous.then_some(FindingKind::DangerousLiteral)
}

fn container_expr(container: &JSXExprContainer) -> Option<&Expr> {
    match &container.expr {
        JSXExpr::Expr(expr) => Some(unparen(expr)),
        JSXExpr::JSXEmptyExpr(_) => None,
    }
}

fn unparen(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unparen(&paren.expr),
        _ => expr,
    }
}

fn as_literal(expr: &Expr) -> Option<&Lit> {
    match unparen(expr) {
        Expr::Lit(lit) => Some(lit),
        _ => None,
    }
}

fn is_element(expr: &Expr) -> bool {
    matches!(unparen(expr), Expr::JSXElement(_))
}

/// A branch that renders nothing: a falsy literal or `undefined`.
fn can_render_empty(expr: &Expr) -> bool {
    match unparen(expr) {
        Expr::Lit(lit) => !is_truthy(lit),
        Expr::Ident(ident) => ident.sym == "undefined",
        _ => false,
    }
}

/// JavaScript truthiness of a literal value.
fn is_truthy(lit: &Lit) -> bool {
    match lit {
        // Lone surrogates fail `as_str` but still make a non-empty string.
        Lit::Str(s) => s.value.as_str().is_none_or(|v| !v.is_empty()),
        Lit::Bool(b) => b.value,
        Lit::Null(_) => false,
        Lit::Num(n) => n.value != 0.0 && !n.value.is_nan(),
        Lit::BigInt(b) => b.value.to_string() != "0",
        Lit::JSXText(text) => !text.value.is_empty(),
        _ => true,
    }
}
