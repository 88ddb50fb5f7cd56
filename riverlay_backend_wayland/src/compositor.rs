// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-process compositor that records every request it receives.
//!
//! Built directly on the `wayland-backend` server so the client loop can be
//! driven over a real socket pair without a running river.

use std::collections::VecDeque;
use std::os::unix::io::{OwnedFd, RawFd};
use std::os::unix::net::UnixStream;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use wayland_backend::protocol::{Argument, Message};
use wayland_backend::server::{
    Backend, ClientData, ClientId, GlobalHandler, GlobalId, Handle, ObjectData, ObjectId,
};
use wayland_client::protocol::__interfaces::WL_OUTPUT_INTERFACE;

use crate::protocol::__interfaces::RIVER_LAYOUT_MANAGER_V3_INTERFACE;

/// A request as the compositor saw it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Seen {
    GetLayout(String),
    Push {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        serial: u32,
    },
    Commit {
        layout_name: String,
        serial: u32,
    },
    DestroyLayout,
    ReleaseOutput,
    DestroyManager,
}

/// Reply to a `get_layout`, consumed in request order.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Answer {
    Demand {
        view_count: u32,
        width: u32,
        height: u32,
        serial: u32,
    },
    NamespaceInUse,
}

#[derive(Debug)]
pub(crate) struct Compositor {
    seen: Vec<Seen>,
    answers: VecDeque<Answer>,
}

pub(crate) struct TestServer {
    backend: Backend<Compositor>,
    compositor: Compositor,
    client: ClientId,
}

impl TestServer {
    /// Returns the server and the client end of its socket.
    pub(crate) fn new(answers: &[Answer]) -> (Self, UnixStream) {
        let backend = Backend::new().unwrap();
        let (server_end, client_end) = UnixStream::pair().unwrap();
        let client = backend
            .handle()
            .insert_client(server_end, Arc::new(TestClient))
            .unwrap();
        let server = Self {
            backend,
            compositor: Compositor {
                seen: Vec::new(),
                answers: answers.iter().copied().collect(),
            },
            client,
        };
        (server, client_end)
    }

    pub(crate) fn add_output(&self) -> GlobalId {
        self.backend
            .handle()
            .create_global::<Compositor>(&WL_OUTPUT_INTERFACE, 4, Arc::new(OutputGlobal))
    }

    pub(crate) fn add_manager(&self) -> GlobalId {
        self.backend.handle().create_global::<Compositor>(
            &RIVER_LAYOUT_MANAGER_V3_INTERFACE,
            2,
            Arc::new(ManagerGlobal),
        )
    }

    /// Registry name the client sees for `global`.
    pub(crate) fn name_of(&self, global: GlobalId) -> u32 {
        self.backend
            .handle()
            .global_name(global, self.client.clone())
            .unwrap()
    }

    pub(crate) fn seen(&self) -> &[Seen] {
        &self.compositor.seen
    }

    /// Serves requests until `client` finishes, then drains what it flushed
    /// last.
    pub(crate) fn serve_until<T>(&mut self, client: JoinHandle<T>) -> T {
        let deadline = Instant::now() + Duration::from_secs(10);
        while !client.is_finished() {
            assert!(Instant::now() < deadline, "client did not finish");
            self.pump();
            thread::sleep(Duration::from_millis(1));
        }
        self.pump();
        client.join().unwrap()
    }

    fn pump(&mut self) {
        // Errors here only mean the client has hung up.
        let _ = self.backend.dispatch_all_clients(&mut self.compositor);
        let _ = self.backend.flush(None);
    }
}

struct TestClient;

impl ClientData for TestClient {}

struct OutputGlobal;

impl GlobalHandler<Compositor> for OutputGlobal {
    fn bind(
        self: Arc<Self>,
        _: &Handle,
        _: &mut Compositor,
        _: ClientId,
        _: GlobalId,
        _: ObjectId,
    ) -> Arc<dyn ObjectData<Compositor>> {
        Arc::new(OutputObject)
    }
}

struct ManagerGlobal;

impl GlobalHandler<Compositor> for ManagerGlobal {
    fn bind(
        self: Arc<Self>,
        _: &Handle,
        _: &mut Compositor,
        _: ClientId,
        _: GlobalId,
        _: ObjectId,
    ) -> Arc<dyn ObjectData<Compositor>> {
        Arc::new(ManagerObject)
    }
}

struct OutputObject;

impl ObjectData<Compositor> for OutputObject {
    fn request(
        self: Arc<Self>,
        _: &Handle,
        compositor: &mut Compositor,
        _: ClientId,
        msg: Message<ObjectId, OwnedFd>,
    ) -> Option<Arc<dyn ObjectData<Compositor>>> {
        // `release` is the only wl_output request.
        assert_eq!(msg.opcode, 0, "unexpected wl_output request");
        compositor.seen.push(Seen::ReleaseOutput);
        None
    }

    fn destroyed(self: Arc<Self>, _: &Handle, _: &mut Compositor, _: ClientId, _: ObjectId) {}
}

struct ManagerObject;

impl ObjectData<Compositor> for ManagerObject {
    fn request(
        self: Arc<Self>,
        handle: &Handle,
        compositor: &mut Compositor,
        _: ClientId,
        msg: Message<ObjectId, OwnedFd>,
    ) -> Option<Arc<dyn ObjectData<Compositor>>> {
        match (msg.opcode, &msg.args[..]) {
            (0, []) => {
                compositor.seen.push(Seen::DestroyManager);
                None
            }
            (
                1,
                [
                    Argument::NewId(layout),
                    Argument::Object(_),
                    Argument::Str(Some(namespace)),
                ],
            ) => {
                compositor
                    .seen
                    .push(Seen::GetLayout(namespace.to_string_lossy().into_owned()));
                let answer = compositor
                    .answers
                    .pop_front()
                    .unwrap_or(Answer::NamespaceInUse);
                send_answer(handle, layout, answer);
                Some(Arc::new(LayoutObject))
            }
            _ => panic!("unexpected river_layout_manager_v3 request: {msg:?}"),
        }
    }

    fn destroyed(self: Arc<Self>, _: &Handle, _: &mut Compositor, _: ClientId, _: ObjectId) {}
}

fn send_answer(handle: &Handle, layout: &ObjectId, answer: Answer) {
    let (opcode, args): (u16, Vec<Argument<ObjectId, RawFd>>) = match answer {
        Answer::NamespaceInUse => (0, Vec::new()),
        Answer::Demand {
            view_count,
            width,
            height,
            serial,
        } => (
            1,
            vec![
                Argument::Uint(view_count),
                Argument::Uint(width),
                Argument::Uint(height),
                Argument::Uint(1),
                Argument::Uint(serial),
            ],
        ),
    };
    handle
        .send_event(Message {
            sender_id: layout.clone(),
            opcode,
            args: args.into_iter().collect(),
        })
        .unwrap();
}

struct LayoutObject;

impl ObjectData<Compositor> for LayoutObject {
    fn request(
        self: Arc<Self>,
        _: &Handle,
        compositor: &mut Compositor,
        _: ClientId,
        msg: Message<ObjectId, OwnedFd>,
    ) -> Option<Arc<dyn ObjectData<Compositor>>> {
        let seen = match (msg.opcode, &msg.args[..]) {
            (0, []) => Seen::DestroyLayout,
            (
                1,
                [
                    Argument::Int(x),
                    Argument::Int(y),
                    Argument::Uint(width),
                    Argument::Uint(height),
                    Argument::Uint(serial),
                ],
            ) => Seen::Push {
                x: *x,
                y: *y,
                width: *width,
                height: *height,
                serial: *serial,
            },
            (2, [Argument::Str(Some(layout_name)), Argument::Uint(serial)]) => Seen::Commit {
                layout_name: layout_name.to_string_lossy().into_owned(),
                serial: *serial,
            },
            _ => panic!("unexpected river_layout_v3 request: {msg:?}"),
        };
        compositor.seen.push(seen);
        None
    }

    fn destroyed(self: Arc<Self>, _: &Handle, _: &mut Compositor, _: ClientId, _: ObjectId) {}
}
