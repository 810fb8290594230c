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

use std::fmt::Display;
use std::fmt::Formatter;

use educe::Educe;
use enum_as_inner::EnumAsInner;

use crate::ast::write_comma_separated_list;
use crate::ast::Expr;
use crate::ast::Identifier;
use crate::ast::OrderByExpr;
use crate::merge_span;
use crate::Span;

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumAsInner)]
pub enum Window {
    WindowReference(WindowRef),
    WindowSpec(WindowSpec),
}

impl Display for Window {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Window::WindowSpec(spec) => write!(f, "{spec}"),
            Window::WindowReference(window_ref) => write!(f, "{window_ref}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WindowRef {
    pub window_name: Identifier,
}

impl Display for WindowRef {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "WINDOW {}", self.window_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WindowSpec {
    pub existing_window_name: Option<Identifier>,
    pub partition_by: Vec<Expr>,
    pub order_by: Vec<OrderByExpr>,
    pub window_frame: Option<WindowFrame>,
}

impl Display for WindowSpec {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let mut first = true;
        if let Some(existing_window_name) = &self.existing_window_name {
            first = false;
            write!(f, "{existing_window_name}")?;
        }

        if !self.partition_by.is_empty() {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "PARTITION BY ")?;
            write_comma_separated_list(f, &self.partition_by)?;
        }

        if !self.order_by.is_empty() {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "ORDER BY ")?;
            write_comma_separated_list(f, &self.order_by)?;
        }

        if let Some(frame) = &self.window_frame {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{frame}")?;
        }
        Ok(())
    }
}

/// `RANGE UNBOUNDED PRECEDING` or `ROWS BETWEEN 5 PRECEDING AND CURRENT ROW`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WindowFrame {
    pub units: WindowFrameUnits,
    pub start_bound: FrameBound,
    pub end_bound: FrameBound,
}

impl WindowFrame {
    /// Source range covering both endpoints, when the parser attached any.
    pub fn span(&self) -> Span {
        merge_span(self.start_bound.span, self.end_bound.span)
    }
}

impl Display for WindowFrame {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} BETWEEN {} AND {}",
            self.units, self.start_bound, self.end_bound
        )
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumAsInner,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
pub enum WindowFrameUnits {
    #[strum(serialize = "ROWS")]
    Rows,
    #[strum(serialize = "RANGE")]
    Range,
}

/// The five endpoint kinds a frame clause can name. Whether an offset
/// expression accompanies the kind is tracked on [`FrameBound`] itself.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumAsInner,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
pub enum FrameBoundKind {
    #[strum(serialize = "UNBOUNDED PRECEDING")]
    UnboundedPreceding,
    #[strum(serialize = "PRECEDING")]
    Preceding,
    #[strum(serialize = "CURRENT ROW")]
    CurrentRow,
    #[strum(serialize = "FOLLOWING")]
    Following,
    #[strum(serialize = "UNBOUNDED FOLLOWING")]
    UnboundedFollowing,
}

impl FrameBoundKind {
    /// Whether this kind semantically carries an offset expression. The
    /// construction contract stays permissive either way.
    pub fn takes_offset(&self) -> bool {
        match self {
            FrameBoundKind::Preceding | FrameBoundKind::Following => true,
            FrameBoundKind::UnboundedPreceding
            | FrameBoundKind::CurrentRow
            | FrameBoundKind::UnboundedFollowing => false,
        }
    }
}

/// One endpoint of a window frame, e.g. the `3 PRECEDING` or `CURRENT ROW`
/// of `ROWS BETWEEN 3 PRECEDING AND CURRENT ROW`.
///
/// Equality and hashing are structural over `(kind, value)`; the span the
/// parser attached is provenance only, so the same bound written at two
/// source positions compares equal and hashes identically.
#[derive(Debug, Clone, Educe)]
#[educe(PartialEq, Eq, Hash)]
pub struct FrameBound {
    #[educe(PartialEq(ignore), Hash(ignore))]
    pub span: Span,
    pub kind: FrameBoundKind,
    /// Offset expression of `<N> PRECEDING`/`<N> FOLLOWING`. Construction
    /// does not tie presence to `kind`; rejecting an offset on e.g.
    /// `CURRENT ROW` is left to semantic analysis.
    pub value: Option<Box<Expr>>,
}

impl FrameBound {
    pub fn new(span: Span, kind: FrameBoundKind) -> FrameBound {
        FrameBound {
            span,
            kind,
            value: None,
        }
    }

    pub fn with_value(span: Span, kind: FrameBoundKind, value: Option<Expr>) -> FrameBound {
        FrameBound {
            span,
            kind,
            value: value.map(Box::new),
        }
    }

    pub fn offset(&self) -> Option<&Expr> {
        self.value.as_deref()
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(
            self.kind,
            FrameBoundKind::UnboundedPreceding | FrameBoundKind::UnboundedFollowing
        )
    }
}

impl Display for FrameBound {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{value} {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}
