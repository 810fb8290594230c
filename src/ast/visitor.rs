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

use crate::ast::Expr;
use crate::ast::FrameBound;
use crate::ast::Identifier;
use crate::ast::OrderByExpr;
use crate::ast::Window;
use crate::ast::WindowFrame;
use crate::ast::WindowRef;
use crate::ast::WindowSpec;

/// Capability interface over every node kind in this AST. An implementation
/// fixes its output type and ambient context once; each node's `accept`
/// routes to the handler for that node kind and hands back the handler's
/// result unmodified. Every method is required, so adding a node kind
/// breaks consumers at compile time rather than at runtime.
pub trait Visitor {
    type Context;
    type Output;

    fn visit_identifier(&mut self, ident: &Identifier, ctx: &mut Self::Context) -> Self::Output;

    fn visit_expr(&mut self, expr: &Expr, ctx: &mut Self::Context) -> Self::Output;

    fn visit_order_by(&mut self, order_by: &OrderByExpr, ctx: &mut Self::Context) -> Self::Output;

    fn visit_window(&mut self, window: &Window, ctx: &mut Self::Context) -> Self::Output;

    fn visit_window_ref(
        &mut self,
        window_ref: &WindowRef,
        ctx: &mut Self::Context,
    ) -> Self::Output;

    fn visit_window_spec(&mut self, spec: &WindowSpec, ctx: &mut Self::Context) -> Self::Output;

    fn visit_window_frame(&mut self, frame: &WindowFrame, ctx: &mut Self::Context) -> Self::Output;

    fn visit_frame_bound(&mut self, bound: &FrameBound, ctx: &mut Self::Context) -> Self::Output;
}

impl Identifier {
    pub fn accept<V: Visitor>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        visitor.visit_identifier(self, ctx)
    }
}

impl Expr {
    pub fn accept<V: Visitor>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        visitor.visit_expr(self, ctx)
    }
}

impl OrderByExpr {
    pub fn accept<V: Visitor>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        visitor.visit_order_by(self, ctx)
    }
}

impl Window {
    pub fn accept<V: Visitor>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        visitor.visit_window(self, ctx)
    }
}

impl WindowRef {
    pub fn accept<V: Visitor>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        visitor.visit_window_ref(self, ctx)
    }
}

impl WindowSpec {
    pub fn accept<V: Visitor>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        visitor.visit_window_spec(self, ctx)
    }
}

impl WindowFrame {
    pub fn accept<V: Visitor>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        visitor.visit_window_frame(self, ctx)
    }
}

impl FrameBound {
    pub fn accept<V: Visitor>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        visitor.visit_frame_bound(self, ctx)
    }
}
