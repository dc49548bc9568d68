use std::cell::RefCell;
use std::fmt::Write;

/// One per-iteration diagnostics row kept in the solve history.
#[derive(Clone, Debug)]
pub struct SolverTraceRecord {
    pub solver: &'static str,
    pub iter: usize,
    pub f: Option<f64>,
    /// L1 norm of the estimated gradient (the convergence quantity).
    pub grad_l1: Option<f64>,
    /// Step size selected by the line search.
    pub alpha: Option<f64>,
    pub note: Option<&'static str>,
}

impl SolverTraceRecord {
    fn format_line(&self) -> String {
        let mut line = format!("[{}] iter {:>6}", self.solver, self.iter);
        if let Some(v) = self.f {
            let _ = write!(line, " | f {:>13.6e}", v);
        }
        if let Some(v) = self.grad_l1 {
            let _ = write!(line, " | grad {:>13.6e}", v);
        }
        if let Some(v) = self.alpha {
            let _ = write!(line, " | alpha {:>8.3e}", v);
        }
        if let Some(note) = self.note {
            let _ = write!(line, " | note {note}");
        }
        line
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct TraceRow {
    iter: usize,
    f: Option<f64>,
    grad_l1: Option<f64>,
    alpha: Option<f64>,
    note: Option<&'static str>,
}

impl TraceRow {
    pub(crate) fn iter(iter: usize) -> Self {
        Self {
            iter,
            f: None,
            grad_l1: None,
            alpha: None,
            note: None,
        }
    }

    pub(crate) fn f(mut self, f: f64) -> Self {
        self.f = Some(f);
        self
    }

    pub(crate) fn grad_l1(mut self, grad_l1: f64) -> Self {
        self.grad_l1 = Some(grad_l1);
        self
    }

    pub(crate) fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub(crate) fn note(mut self, note: &'static str) -> Self {
        self.note = Some(note);
        self
    }
}

#[derive(Clone, Debug)]
pub(crate) struct SolverTracer {
    verbose: bool,
    solver: &'static str,
    history: Option<RefCell<Vec<SolverTraceRecord>>>,
}

impl SolverTracer {
    pub(crate) fn gd(verbose: bool) -> Self {
        Self {
            verbose,
            solver: "gd",
            history: None,
        }
    }

    pub(crate) fn gd_with_history(verbose: bool) -> Self {
        Self {
            verbose,
            solver: "gd",
            history: Some(RefCell::new(Vec::new())),
        }
    }

    pub(crate) fn emit(&self, row: TraceRow) {
        let record = SolverTraceRecord {
            solver: self.solver,
            iter: row.iter,
            f: row.f,
            grad_l1: row.grad_l1,
            alpha: row.alpha,
            note: row.note,
        };

        if let Some(history) = &self.history {
            history.borrow_mut().push(record.clone());
        }

        if self.verbose {
            println!("{}", record.format_line());
        }
    }

    pub(crate) fn into_history(self) -> Vec<SolverTraceRecord> {
        self.history
            .map(|history| history.into_inner())
            .unwrap_or_default()
    }
}
