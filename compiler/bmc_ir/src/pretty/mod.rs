//! Indented pretty printer.
//!
//! A node renders as its kind name followed by one line per field:
//!
//! ```text
//! constant_int
//! * constant_value : 0
//! * type : unsignedbv
//!   * width : 32
//! ```
//!
//! Field lines at level `n` are indented by `n` two-space units. Nested
//! nodes print at `n + 1`. List elements print one per line at `n + 1` as
//! `* <index> : <element>`, the element itself at `n + 2`. The output is a
//! stable contract; tests compare it byte for byte.

use crate::field::{Field, FieldValue};
use crate::stack::ensure_sufficient_stack;
use crate::{Expr, Name, Type};

const INDENT: &str = "  ";

impl Type {
    /// Render this type with its field lines at `indent`.
    pub fn pretty(&self, indent: usize) -> String {
        let mut buf = String::new();
        self.pretty_into(indent, &mut buf);
        buf
    }

    /// Render into an existing buffer.
    pub fn pretty_into(&self, indent: usize, buf: &mut String) {
        ensure_sufficient_stack(|| {
            buf.push_str(self.type_id().name());
            write_fields(&self.fields(), indent, buf);
        });
    }
}

impl Expr {
    /// Render this expression with its field lines at `indent`.
    pub fn pretty(&self, indent: usize) -> String {
        let mut buf = String::new();
        self.pretty_into(indent, &mut buf);
        buf
    }

    /// Render into an existing buffer.
    pub fn pretty_into(&self, indent: usize, buf: &mut String) {
        ensure_sufficient_stack(|| {
            buf.push_str(self.expr_id().name());
            write_fields(&self.fields(), indent, buf);
        });
    }
}

fn new_line(indent: usize, buf: &mut String) {
    buf.push('\n');
    for _ in 0..indent {
        buf.push_str(INDENT);
    }
}

fn write_fields(fields: &[Field<'_>], indent: usize, buf: &mut String) {
    for field in fields {
        new_line(indent, buf);
        buf.push_str("* ");
        buf.push_str(field.name);
        buf.push_str(" : ");
        write_value(field.value, indent, buf);
    }
}

/// Write a field value whose line is already started at `indent`.
fn write_value(value: FieldValue<'_>, indent: usize, buf: &mut String) {
    match value {
        FieldValue::Bool(value) => buf.push_str(if value { "true" } else { "false" }),
        FieldValue::Uint(value) => buf.push_str(&value.to_string()),
        FieldValue::Int(value) => buf.push_str(&value.to_string()),
        FieldValue::Name(name) => buf.push_str(name),
        FieldValue::Type(ty) => ty.pretty_into(indent + 1, buf),
        FieldValue::Expr(expr) | FieldValue::OptExpr(Some(expr)) => {
            expr.pretty_into(indent + 1, buf);
        }
        FieldValue::OptExpr(None) => buf.push_str("nil"),
        FieldValue::Names(names) => {
            write_list(names, indent, buf, |name: &Name, _: usize, buf: &mut String| {
                buf.push_str(name);
            });
        }
        FieldValue::Types(types) => {
            write_list(types, indent, buf, Type::pretty_into);
        }
        FieldValue::Exprs(exprs) => {
            write_list(exprs, indent, buf, Expr::pretty_into);
        }
    }
}

fn write_list<T>(
    items: &[T],
    indent: usize,
    buf: &mut String,
    mut write_item: impl FnMut(&T, usize, &mut String),
) {
    if items.is_empty() {
        buf.push_str("[]");
        return;
    }
    for (index, item) in items.iter().enumerate() {
        new_line(indent + 1, buf);
        buf.push_str("* ");
        buf.push_str(&index.to_string());
        buf.push_str(" : ");
        write_item(item, indent + 2, buf);
    }
}
