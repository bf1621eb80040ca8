//! Diagnostic rendering for verification failures.
//!
//! A failure produces one block on the append-only sink: the violation
//! message, the call site, and a structural snapshot of the whole stack
//! including every buffer cell and the sentinel positions. Rendering is
//! deliberately paranoid - a missing buffer renders as a placeholder, and a
//! sink that cannot be opened falls back to stderr - because this code runs
//! exactly when the stack is already known to be damaged.

use std::fs::OpenOptions;
use std::io::{self, Write};

use super::GuardedStack;
use crate::Violation;

/// Fixed name of the append-only diagnostic sink, created in the working
/// directory on first failure.
pub const SINK_PATH: &str = "stackguard_failures.log";

const SEPARATOR: &str = "-----------------------------------------------------------";

/// Renders one failure block for `stack` to `out`.
///
/// The block consists of the violation's message line, the call-site line
/// (`stack[<address>] "stk" called from <file>(<line>) <function>`), a
/// brace-delimited structural snapshot, and a separator line. Lines for
/// disabled defensive layers are omitted. When `stack` is `None` the snapshot
/// is replaced by a `stack[NULL]` call-site line.
///
/// # Errors
///
/// Returns any error raised by the underlying writer.
pub fn render<W: Write>(
    out: &mut W,
    stack: Option<&GuardedStack>,
    violation: &Violation,
    file: &str,
    function: &str,
    line: u32,
) -> io::Result<()> {
    writeln!(out, "ERROR: {violation}")?;
    writeln!(out)?;

    let Some(stack) = stack else {
        writeln!(out, "stack[NULL] \"stk\" called from {file}({line}) {function}")?;
        writeln!(out)?;
        writeln!(out, "{SEPARATOR}")?;
        return Ok(());
    };

    writeln!(
        out,
        "stack[{:p}] \"stk\" called from {file}({line}) {function}",
        std::ptr::from_ref(stack)
    )?;
    writeln!(out, "{{")?;

    if stack.config.struct_guards {
        writeln!(out, "\tleft_guard = {:x}", stack.left_guard)?;
    }
    writeln!(out, "\tlength = {}", stack.len)?;
    writeln!(out, "\tcapacity = {}", stack.cap)?;

    match &stack.buf {
        Some(buf) => {
            writeln!(out, "\tbuffer[{:p}]", buf.cells.as_ptr())?;
            writeln!(out, "\t{{")?;
            if let Some(canary) = buf.left_canary() {
                writeln!(out, "\t\tbuffer->left_canary = {canary:x}")?;
            }
            for (index, value) in buf.elements().iter().enumerate() {
                writeln!(out, "\t\t*[{index}] = {value}")?;
            }
            if let Some(canary) = buf.right_canary() {
                writeln!(out, "\t\tbuffer->right_canary = {canary:x}")?;
            }
            writeln!(out, "\t}}")?;
        }
        None => {
            writeln!(out, "\tbuffer[NULL]")?;
        }
    }

    if stack.config.digests {
        writeln!(out, "\tstruct_digest = {}", stack.struct_digest)?;
        writeln!(out, "\tcontent_digest = {}", stack.content_digest)?;
    }
    if stack.config.struct_guards {
        writeln!(out, "\tright_guard = {:x}", stack.right_guard)?;
    }

    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "{SEPARATOR}")?;
    Ok(())
}

/// Renders one failure block to the diagnostic sink.
///
/// Opens [`SINK_PATH`] in append mode and writes the block produced by
/// [`render`]. Sink failures are soft: when the file cannot be opened or
/// written, the block goes to stderr instead, and the caller's fatal-path
/// termination proceeds regardless.
pub fn dump(
    stack: Option<&GuardedStack>,
    violation: &Violation,
    file: &str,
    function: &str,
    line: u32,
) {
    match OpenOptions::new().create(true).append(true).open(SINK_PATH) {
        Ok(mut sink) => {
            if render(&mut sink, stack, violation, file, function, line).is_err() {
                let _ = render(&mut io::stderr().lock(), stack, violation, file, function, line);
            }
        }
        Err(open_err) => {
            let mut err_out = io::stderr().lock();
            let _ = writeln!(err_out, "ERROR: could not open {SINK_PATH}: {open_err}");
            let _ = render(&mut err_out, stack, violation, file, function, line);
        }
    }
}
