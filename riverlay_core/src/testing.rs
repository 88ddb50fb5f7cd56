// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory protocol double that journals every request.

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::backend::{Binder, LayoutObject, Protocol, ProtocolObject};
use crate::output::OutputId;
use crate::rect::Rect;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Request {
    BindOutput { name: u32, version: u32 },
    BindManager { name: u32, version: u32 },
    GetLayout { output: OutputId, namespace: String },
    Push { output: OutputId, rect: Rect, serial: u32 },
    Commit { output: OutputId, layout_name: String, serial: u32 },
    DestroyLayout(OutputId),
    DestroyOutput(u32),
    DestroyManager,
}

/// Shared request log.
#[derive(Clone, Debug, Default)]
pub(crate) struct Journal(Rc<RefCell<Vec<Request>>>);

impl Journal {
    fn push(&self, request: Request) {
        self.0.borrow_mut().push(request);
    }

    pub(crate) fn take(&self) -> Vec<Request> {
        core::mem::take(&mut *self.0.borrow_mut())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

#[derive(Debug)]
pub(crate) struct TestOutput {
    journal: Journal,
    name: u32,
}

impl TestOutput {
    pub(crate) fn new(journal: &Journal, name: u32) -> Self {
        Self {
            journal: journal.clone(),
            name,
        }
    }
}

impl ProtocolObject for TestOutput {
    fn destroy(&self) {
        self.journal.push(Request::DestroyOutput(self.name));
    }
}

#[derive(Debug)]
pub(crate) struct TestManager {
    journal: Journal,
}

impl TestManager {
    pub(crate) fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

impl ProtocolObject for TestManager {
    fn destroy(&self) {
        self.journal.push(Request::DestroyManager);
    }
}

#[derive(Debug)]
pub(crate) struct TestLayout {
    journal: Journal,
    output: OutputId,
}

impl ProtocolObject for TestLayout {
    fn destroy(&self) {
        self.journal.push(Request::DestroyLayout(self.output));
    }
}

impl LayoutObject for TestLayout {
    fn push_view_dimensions(&self, rect: Rect, serial: u32) {
        self.journal.push(Request::Push {
            output: self.output,
            rect,
            serial,
        });
    }

    fn commit(&self, layout_name: &str, serial: u32) {
        self.journal.push(Request::Commit {
            output: self.output,
            layout_name: layout_name.to_string(),
            serial,
        });
    }
}

#[derive(Debug)]
pub(crate) struct TestProtocol;

impl Protocol for TestProtocol {
    type Output = TestOutput;
    type Manager = TestManager;
    type Layout = TestLayout;
}

#[derive(Debug)]
pub(crate) struct TestBinder {
    journal: Journal,
}

impl TestBinder {
    pub(crate) fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

impl Binder<TestProtocol> for TestBinder {
    fn bind_output(&mut self, name: u32, version: u32) -> TestOutput {
        self.journal.push(Request::BindOutput { name, version });
        TestOutput::new(&self.journal, name)
    }

    fn bind_manager(&mut self, name: u32, version: u32) -> TestManager {
        self.journal.push(Request::BindManager { name, version });
        TestManager::new(&self.journal)
    }

    fn get_layout(
        &mut self,
        _manager: &TestManager,
        _output: &TestOutput,
        output_id: OutputId,
        namespace: &str,
    ) -> TestLayout {
        self.journal.push(Request::GetLayout {
            output: output_id,
            namespace: namespace.to_string(),
        });
        TestLayout {
            journal: self.journal.clone(),
            output: output_id,
        }
    }
}
