//! Scripted streams and delay shared by the integration tests

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use embassy_futures::yield_now;
use embedded_hal_async::delay::DelayNs;
use hc05_configurator::link::SerialPort;
use hc05_configurator::LinkError;

/// Operator terminal: pre-typed input, captured output.
#[derive(Clone, Default)]
pub struct Operator {
    state: Rc<RefCell<OperatorState>>,
}

#[derive(Default)]
struct OperatorState {
    input: VecDeque<u8>,
    output: Vec<u8>,
    broken: bool,
}

impl Operator {
    pub fn typing(input: &str) -> Self {
        let operator = Self::default();
        operator.state.borrow_mut().input.extend(input.bytes());
        operator
    }

    pub fn idle() -> Self {
        Self::default()
    }

    /// Terminal that accepts no output.
    pub fn broken() -> Self {
        let operator = Self::default();
        operator.state.borrow_mut().broken = true;
        operator
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.state.borrow().output).into_owned()
    }

    pub fn unread(&self) -> usize {
        self.state.borrow().input.len()
    }
}

impl SerialPort for Operator {
    fn bytes_available(&self) -> usize {
        self.state.borrow().input.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.state.borrow_mut().input.pop_front()
    }

    async fn write_all(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        let mut state = self.state.borrow_mut();
        if state.broken {
            return Err(LinkError::Write);
        }
        state.output.extend_from_slice(bytes);
        Ok(())
    }
}

/// HC-05 stand-in: every line written pops the next scripted reply.
#[derive(Clone, Default)]
pub struct Module {
    state: Rc<RefCell<ModuleState>>,
}

#[derive(Default)]
struct ModuleState {
    replies: VecDeque<Vec<u8>>,
    rx: VecDeque<u8>,
    written: Vec<u8>,
    broken: bool,
}

impl Module {
    pub fn replying(replies: &[&str]) -> Self {
        let module = Self::default();
        module
            .state
            .borrow_mut()
            .replies
            .extend(replies.iter().map(|r| r.as_bytes().to_vec()));
        module
    }

    /// Never answers anything.
    pub fn silent() -> Self {
        Self::default()
    }

    /// Every write fails.
    pub fn broken() -> Self {
        let module = Self::default();
        module.state.borrow_mut().broken = true;
        module
    }

    /// Bytes already waiting in the receive buffer, e.g. a stale reply.
    pub fn with_pending(self, bytes: &str) -> Self {
        self.state.borrow_mut().rx.extend(bytes.bytes());
        self
    }

    pub fn written(&self) -> String {
        String::from_utf8_lossy(&self.state.borrow().written).into_owned()
    }

    pub fn unread(&self) -> usize {
        self.state.borrow().rx.len()
    }
}

impl SerialPort for Module {
    fn bytes_available(&self) -> usize {
        self.state.borrow().rx.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.state.borrow_mut().rx.pop_front()
    }

    async fn write_all(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        let mut state = self.state.borrow_mut();
        if state.broken {
            return Err(LinkError::Write);
        }
        for &byte in bytes {
            state.written.push(byte);
            if byte == b'\n' {
                let reply = state.replies.pop_front();
                if let Some(reply) = reply {
                    state.rx.extend(reply);
                }
            }
        }
        Ok(())
    }
}

/// Module whose reply shows up in pieces, each piece released by the n-th
/// sleep taken on the delay from [`Trickle::delay`].
#[derive(Clone, Default)]
pub struct Trickle {
    state: Rc<RefCell<TrickleState>>,
}

#[derive(Default)]
struct TrickleState {
    pending: VecDeque<(u32, Vec<u8>)>,
    rx: VecDeque<u8>,
    written: Vec<u8>,
    sleeps: u32,
}

impl Trickle {
    /// `chunks` pairs the sleep count that releases a piece with its bytes.
    pub fn arriving(chunks: &[(u32, &str)]) -> Self {
        let module = Self::default();
        module
            .state
            .borrow_mut()
            .pending
            .extend(chunks.iter().map(|(at, c)| (*at, c.as_bytes().to_vec())));
        module
    }

    pub fn delay(&self) -> TrickleDelay {
        TrickleDelay {
            state: self.state.clone(),
        }
    }

    pub fn sleeps(&self) -> u32 {
        self.state.borrow().sleeps
    }

    pub fn written(&self) -> String {
        String::from_utf8_lossy(&self.state.borrow().written).into_owned()
    }

    pub fn unread(&self) -> usize {
        self.state.borrow().rx.len()
    }
}

impl SerialPort for Trickle {
    fn bytes_available(&self) -> usize {
        self.state.borrow().rx.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.state.borrow_mut().rx.pop_front()
    }

    async fn write_all(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        self.state.borrow_mut().written.extend_from_slice(bytes);
        Ok(())
    }
}

/// Counts sleeps and hands due pieces to the [`Trickle`] receive buffer.
#[derive(Clone)]
pub struct TrickleDelay {
    state: Rc<RefCell<TrickleState>>,
}

impl DelayNs for TrickleDelay {
    async fn delay_ns(&mut self, _ns: u32) {
        {
            let mut guard = self.state.borrow_mut();
            let state = &mut *guard;
            state.sleeps += 1;
            let now = state.sleeps;
            while state.pending.front().is_some_and(|(at, _)| *at <= now) {
                if let Some((_, chunk)) = state.pending.pop_front() {
                    state.rx.extend(chunk);
                }
            }
        }
        yield_now().await;
    }
}

/// Delay that only records how long it was asked to sleep, then yields once.
#[derive(Clone, Default)]
pub struct TestDelay {
    elapsed_ns: Rc<Cell<u64>>,
}

impl TestDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns.get() / 1_000_000
    }
}

impl DelayNs for TestDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns.set(self.elapsed_ns.get() + u64::from(ns));
        yield_now().await;
    }
}
