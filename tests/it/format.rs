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

use std::io::Write;

use goldenfile::Mint;
use pretty_assertions::assert_eq;
use streamql_ast::ast::format_expr;
use streamql_ast::ast::format_frame_bound;
use streamql_ast::ast::format_window_spec;
use streamql_ast::ast::Expr;
use streamql_ast::ast::FrameBound;
use streamql_ast::ast::FrameBoundKind;
use streamql_ast::ast::Identifier;
use streamql_ast::ast::Literal;
use streamql_ast::ast::OrderByExpr;
use streamql_ast::ast::Window;
use streamql_ast::ast::WindowFrame;
use streamql_ast::ast::WindowFrameUnits;
use streamql_ast::ast::WindowSpec;

fn literal(val: u64) -> Expr {
    Expr::Literal {
        span: None,
        lit: Literal::UInt64(val),
    }
}

fn column(name: &str) -> Expr {
    Expr::ColumnRef {
        span: None,
        database: None,
        table: None,
        column: Identifier::from_name(None, name),
    }
}

fn sample_spec() -> WindowSpec {
    WindowSpec {
        existing_window_name: None,
        partition_by: vec![column("region")],
        order_by: vec![OrderByExpr {
            expr: column("ts"),
            asc: Some(true),
            nulls_first: None,
        }],
        window_frame: Some(WindowFrame {
            units: WindowFrameUnits::Rows,
            start_bound: FrameBound::with_value(None, FrameBoundKind::Preceding, Some(literal(3))),
            end_bound: FrameBound::new(None, FrameBoundKind::CurrentRow),
        }),
    }
}

macro_rules! run_format {
    ($file:expr, $input:expr, $formatted:expr $(,)*) => {
        writeln!($file, "---------- Input ----------").unwrap();
        writeln!($file, "{}", $input).unwrap();
        writeln!($file, "---------- Format ---------").unwrap();
        writeln!($file, "{}", $formatted).unwrap();
    };
}

#[test]
fn test_format() {
    let mut mint = Mint::new("tests/it/testdata");
    let mut file = mint.new_goldenfile("format.txt").unwrap();

    let bound = FrameBound::with_value(None, FrameBoundKind::Preceding, Some(literal(3)));
    run_format!(file, bound, format_frame_bound(&bound));

    let spec = sample_spec();
    run_format!(file, spec, format_window_spec(&spec));

    let expr = Expr::FunctionCall {
        span: None,
        distinct: false,
        name: Identifier::from_name(None, "sum"),
        args: vec![column("sales")],
        params: vec![],
        window: Some(Window::WindowSpec(sample_spec())),
    };
    run_format!(file, expr, format_expr(&expr));
}

#[test]
fn leaf_bound_tree() {
    let bound = FrameBound::new(None, FrameBoundKind::UnboundedPreceding);
    assert_eq!(
        format_frame_bound(&bound),
        "FrameBound UNBOUNDED PRECEDING\n"
    );
}

#[test]
fn bound_tree_includes_offset_subtree() {
    let bound = FrameBound::with_value(None, FrameBoundKind::Following, Some(literal(7)));
    assert_eq!(
        format_frame_bound(&bound),
        "FrameBound FOLLOWING\n    Literal 7\n"
    );
}
