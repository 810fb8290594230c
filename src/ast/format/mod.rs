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

mod ast_format;

use std::fmt::Display;
use std::fmt::Write;

pub use ast_format::*;

static INDENT_SIZE: usize = 4;

/// Payload plus ordered children, rendered one payload per line with four
/// spaces of indentation per depth level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTreeNode<T = String> {
    pub payload: T,
    pub children: Vec<FormatTreeNode<T>>,
}

impl<T> FormatTreeNode<T>
where T: Display + Clone
{
    pub fn new(payload: T) -> Self {
        Self {
            payload,
            children: vec![],
        }
    }

    pub fn with_children(payload: T, children: Vec<Self>) -> Self {
        Self { payload, children }
    }

    pub fn format_indent(&self) -> String {
        let mut buf = String::new();
        self.format_indent_impl(0, &mut buf);
        buf
    }

    fn format_indent_impl(&self, indent: usize, f: &mut String) {
        writeln!(f, "{}{}", " ".repeat(indent), &self.payload).unwrap();
        for child in self.children.iter() {
            child.format_indent_impl(indent + INDENT_SIZE, f);
        }
    }
}
