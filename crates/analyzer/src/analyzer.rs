//! Finds call sites, binds their arguments and reports rejected shapes.
use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::marker::MarkerLookup;
use crate::shape::{ShapeVerdict, validate_argument};
use bindpath_executor::ExecutorImpl;
use bindpath_syntax::visit::{self, Visitor};
use bindpath_syntax::{Argument, SourceUnit, SyntaxExpr, SyntaxKind};
use bindpath_traits::Executor;
use std::sync::Arc;

/// A parsed file ready for analysis.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: Arc<str>,
    pub text: Arc<str>,
    pub unit: SourceUnit,
}

impl SourceFile {
    pub fn new(name: impl Into<Arc<str>>, text: impl Into<Arc<str>>, unit: SourceUnit) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            unit,
        }
    }
}

/// One invocation, borrowed from the unit it appears in.
#[derive(Debug, Clone, Copy)]
pub struct CallSite<'u> {
    pub callee: &'u str,
    pub args: &'u [Argument],
}

/// `ListView(..)` and `view.ListView(..)` both call `ListView`.
fn callee_name(callee: &SyntaxExpr) -> Option<&str> {
    match &callee.kind {
        SyntaxKind::Identifier(name) => Some(name.as_str()),
        SyntaxKind::MemberAccess { name, .. } => Some(name.as_str()),
        _ => None,
    }
}

/// Checks every invocation in `file`, including nested ones. Returns the
/// number of call sites seen.
pub fn check_file<L, S>(lookup: &L, file: &SourceFile, sink: &mut S) -> usize
where
    L: MarkerLookup + ?Sized,
    S: DiagnosticSink,
{
    let mut checker = CallSiteChecker {
        lookup,
        file,
        sink,
        sites: 0,
    };
    checker.visit_unit(&file.unit);
    checker.sites
}

struct CallSiteChecker<'a, L: ?Sized, S> {
    lookup: &'a L,
    file: &'a SourceFile,
    sink: &'a mut S,
    sites: usize,
}

impl<L, S> Visitor for CallSiteChecker<'_, L, S>
where
    L: MarkerLookup + ?Sized,
    S: DiagnosticSink,
{
    fn visit_expr(&mut self, expr: &SyntaxExpr) {
        if let SyntaxKind::Invocation { callee, args } = &expr.kind {
            match callee_name(callee) {
                Some(name) => {
                    self.sites += 1;
                    let site = CallSite { callee: name, args };
                    check_call_site(self.lookup, self.file, site, &mut *self.sink);
                }
                None => log::trace!("skipping call with a computed callee at {:?}", expr.span),
            }
        }
        visit::walk_expr(self, expr);
    }
}

/// Checks every marked argument of `site`. Each argument is judged on its
/// own, so one rejection never hides another.
pub fn check_call_site<L, S>(lookup: &L, file: &SourceFile, site: CallSite<'_>, sink: &mut S)
where
    L: MarkerLookup + ?Sized,
    S: DiagnosticSink,
{
    let Some(signature) = lookup.signature(site.callee) else {
        log::trace!("'{}' is not a declared function", site.callee);
        return;
    };
    if !lookup.has_binding_parameters(signature) {
        return;
    }

    for (position, arg) in site.args.iter().enumerate() {
        let Some(index) = lookup.bound_parameter(signature, arg, position) else {
            log::debug!(
                "argument {} of '{}' binds to no parameter",
                position,
                site.callee
            );
            continue;
        };
        if !lookup.is_binding_parameter(signature, index) {
            continue;
        }
        let reason = match validate_argument(arg) {
            None => {
                log::debug!(
                    "argument {} of '{}' is not a lambda; skipped",
                    position,
                    site.callee
                );
                continue;
            }
            Some(ShapeVerdict::Accepted) => continue,
            Some(ShapeVerdict::Rejected { shape, .. }) => format!("body is a {}", shape),
            Some(ShapeVerdict::Parameterized { arity }) => {
                format!("lambda declares {} parameter(s)", arity)
            }
        };
        log::debug!(
            "rejecting argument {} of '{}': {}",
            position,
            site.callee,
            reason
        );
        let expression = file
            .text
            .get(arg.span.offset..arg.span.end())
            .unwrap_or_default();
        sink.report(Diagnostic::binding_expression(
            file.name.as_ref(),
            arg.span,
            expression,
        ));
    }
}

/// Runs the check over whole files, one job per file.
#[derive(Debug)]
pub struct Analyzer<L> {
    lookup: Arc<L>,
    executor: ExecutorImpl,
}

impl<L: MarkerLookup + 'static> Analyzer<L> {
    pub fn new(lookup: L, executor: ExecutorImpl) -> Self {
        Self {
            lookup: Arc::new(lookup),
            executor,
        }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Diagnostics for `files`, ordered by file name and then by position.
    pub fn analyze(&self, files: &[Arc<SourceFile>]) -> Vec<Diagnostic> {
        log::debug!(
            "checking {} file(s) with {}",
            files.len(),
            self.executor.name()
        );

        let lookup = Arc::clone(&self.lookup);
        let per_file = self.executor.execute_all(files.to_vec(), move |file| {
            let mut found = Vec::new();
            let sites = check_file(lookup.as_ref(), &file, &mut found);
            log::trace!("'{}': {} call site(s)", file.name, sites);
            found
        });

        let mut diagnostics: Vec<Diagnostic> = per_file.into_iter().flatten().collect();
        diagnostics.sort_by(|a, b| (&a.file, a.span.offset).cmp(&(&b.file, b.span.offset)));
        diagnostics
    }
}
