// Copyright 2024 StreamQL Labs
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use itertools::Itertools;

use super::FormatTreeNode;
use crate::ast::Expr;
use crate::ast::FrameBound;
use crate::ast::Identifier;
use crate::ast::OrderByExpr;
use crate::ast::Visitor;
use crate::ast::Window;
use crate::ast::WindowFrame;
use crate::ast::WindowRef;
use crate::ast::WindowSpec;

/// Turns any node of the tree into a kind-labeled outline. This is the
/// reference consumer of [`Visitor`] dispatch; new renderings belong in
/// their own visitor, not here.
#[derive(Debug, Default)]
pub struct AstFormatVisitor;

pub fn format_expr(expr: &Expr) -> String {
    expr.accept(&mut AstFormatVisitor, &mut ()).format_indent()
}

pub fn format_window_spec(spec: &WindowSpec) -> String {
    spec.accept(&mut AstFormatVisitor, &mut ()).format_indent()
}

pub fn format_frame_bound(bound: &FrameBound) -> String {
    bound.accept(&mut AstFormatVisitor, &mut ()).format_indent()
}

impl Visitor for AstFormatVisitor {
    type Context = ();
    type Output = FormatTreeNode<String>;

    fn visit_identifier(&mut self, ident: &Identifier, _ctx: &mut ()) -> FormatTreeNode<String> {
        FormatTreeNode::new(format!("Identifier {ident}"))
    }

    fn visit_expr(&mut self, expr: &Expr, ctx: &mut ()) -> FormatTreeNode<String> {
        match expr {
            Expr::ColumnRef { .. } => FormatTreeNode::new(format!("ColumnRef {expr}")),
            Expr::Literal { lit, .. } => FormatTreeNode::new(format!("Literal {lit}")),
            Expr::BinaryOp {
                op, left, right, ..
            } => FormatTreeNode::with_children(format!("BinaryOp {op}"), vec![
                left.accept(self, ctx),
                right.accept(self, ctx),
            ]),
            Expr::UnaryOp { op, expr, .. } => {
                FormatTreeNode::with_children(format!("UnaryOp {op}"), vec![expr.accept(self, ctx)])
            }
            Expr::FunctionCall {
                distinct,
                name,
                args,
                params,
                window,
                ..
            } => {
                let mut payload = format!("FunctionCall {name}");
                if !params.is_empty() {
                    payload = format!("{payload}({})", params.iter().join(", "));
                }
                if *distinct {
                    payload = format!("{payload} DISTINCT");
                }
                let mut children = args
                    .iter()
                    .map(|arg| arg.accept(self, ctx))
                    .collect::<Vec<_>>();
                if let Some(window) = window {
                    children.push(window.accept(self, ctx));
                }
                FormatTreeNode::with_children(payload, children)
            }
            Expr::Tuple { exprs, .. } => FormatTreeNode::with_children(
                "Tuple".to_string(),
                exprs.iter().map(|expr| expr.accept(self, ctx)).collect(),
            ),
        }
    }

    fn visit_order_by(&mut self, order_by: &OrderByExpr, ctx: &mut ()) -> FormatTreeNode<String> {
        let mut payload = String::from("OrderByExpr");
        if let Some(asc) = order_by.asc {
            payload.push_str(if asc { " ASC" } else { " DESC" });
        }
        if let Some(nulls_first) = order_by.nulls_first {
            payload.push_str(if nulls_first {
                " NULLS FIRST"
            } else {
                " NULLS LAST"
            });
        }
        FormatTreeNode::with_children(payload, vec![order_by.expr.accept(self, ctx)])
    }

    fn visit_window(&mut self, window: &Window, ctx: &mut ()) -> FormatTreeNode<String> {
        let child = match window {
            Window::WindowSpec(spec) => spec.accept(self, ctx),
            Window::WindowReference(window_ref) => window_ref.accept(self, ctx),
        };
        FormatTreeNode::with_children("Window".to_string(), vec![child])
    }

    fn visit_window_ref(
        &mut self,
        window_ref: &WindowRef,
        _ctx: &mut (),
    ) -> FormatTreeNode<String> {
        FormatTreeNode::new(format!("WindowRef {}", window_ref.window_name))
    }

    fn visit_window_spec(&mut self, spec: &WindowSpec, ctx: &mut ()) -> FormatTreeNode<String> {
        let mut children = vec![];
        if let Some(existing_window_name) = &spec.existing_window_name {
            children.push(FormatTreeNode::new(format!(
                "ExistingWindow {existing_window_name}"
            )));
        }
        if !spec.partition_by.is_empty() {
            children.push(FormatTreeNode::with_children(
                "PartitionBy".to_string(),
                spec.partition_by
                    .iter()
                    .map(|expr| expr.accept(self, ctx))
                    .collect(),
            ));
        }
        if !spec.order_by.is_empty() {
            children.push(FormatTreeNode::with_children(
                "OrderBy".to_string(),
                spec.order_by
                    .iter()
                    .map(|order_by| order_by.accept(self, ctx))
                    .collect(),
            ));
        }
        if let Some(frame) = &spec.window_frame {
            children.push(frame.accept(self, ctx));
        }
        FormatTreeNode::with_children("WindowSpec".to_string(), children)
    }

    fn visit_window_frame(&mut self, frame: &WindowFrame, ctx: &mut ()) -> FormatTreeNode<String> {
        FormatTreeNode::with_children(format!("WindowFrame {}", frame.units), vec![
            frame.start_bound.accept(self, ctx),
            frame.end_bound.accept(self, ctx),
        ])
    }

    fn visit_frame_bound(&mut self, bound: &FrameBound, ctx: &mut ()) -> FormatTreeNode<String> {
        let payload = format!("FrameBound {}", bound.kind);
        match &bound.value {
            Some(value) => FormatTreeNode::with_children(payload, vec![value.accept(self, ctx)]),
            None => FormatTreeNode::new(payload),
        }
    }
}
