//! Namespace grouper
//!
//! Wraps each run of consecutive declarations that share a non-empty namespace in exactly one
//! `namespace` block. Runs are never merged across a different namespace, so the same
//! namespace may be opened several times in one dump.

/// How a namespace wrapper is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapStyle {
    /// `namespace N {` and `}` on their own lines around multi-line declarations.
    Block,
    /// `namespace N { a; b; }` on a single line around single-line declarations.
    Inline,
}

/// Group `(namespace, rendered)` pairs into text, preserving order.
///
/// Block-style declarations are expected to end with a newline; inline declarations are
/// expected not to.
pub fn group<'a, I>(entries: I, style: WrapStyle) -> String
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    let mut out = String::new();
    let mut run: Vec<String> = Vec::new();
    let mut run_namespace: Option<&'a str> = None;

    for (namespace, rendered) in entries {
        if let Some(current) = run_namespace {
            if current != namespace {
                flush_run(&mut out, current, &mut run, style);
            }
        }
        run_namespace = Some(namespace);
        run.push(rendered);
    }
    if let Some(namespace) = run_namespace {
        flush_run(&mut out, namespace, &mut run, style);
    }
    out
}

fn flush_run(out: &mut String, namespace: &str, run: &mut Vec<String>, style: WrapStyle) {
    match (namespace.is_empty(), style) {
        (true, WrapStyle::Block) => {
            for decl in run.drain(..) {
                out.push_str(&decl);
            }
        }
        (true, WrapStyle::Inline) => {
            for decl in run.drain(..) {
                out.push_str(&decl);
                out.push('\n');
            }
        }
        (false, WrapStyle::Block) => {
            out.push_str(&format!("namespace {} {{\n", namespace));
            for decl in run.drain(..) {
                out.push_str(&decl);
            }
            out.push_str("}\n");
        }
        (false, WrapStyle::Inline) => {
            let body: Vec<String> = run.drain(..).collect();
            out.push_str(&format!("namespace {} {{ {} }}\n", namespace, body.join(" ")));
        }
    }
}
