use crate::replay::RequestSender;
use crate::sinks::OutputSinks;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, Write};

pub const TRACK_LINE: &str =
    r#"1.2.3.4 - - [10/Oct/2023:13:55:36 -0700] "GET /track?x=1 HTTP/1.1" 200"#;
pub const TRACK_LINE_MILLIS: i64 = 1_696_971_336_000;

/// Answers from a script and remembers every URL it was asked for.
#[derive(Default)]
pub struct ScriptedSender {
    responses: RefCell<VecDeque<Result<u16, String>>>,
    pub calls: RefCell<Vec<String>>,
}

impl ScriptedSender {
    pub fn new(responses: impl IntoIterator<Item = Result<u16, String>>) -> Self {
        Self {
            responses: RefCell::new(responses.into_iter().collect()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl RequestSender for ScriptedSender {
    fn send(&self, url: &str) -> Result<u16, String> {
        self.calls.borrow_mut().push(url.to_string());
        self.responses.borrow_mut().pop_front().unwrap_or(Ok(200))
    }
}

/// Fails the test if anything tries to reach the network.
pub struct NoNetwork;

impl RequestSender for NoNetwork {
    fn send(&self, url: &str) -> Result<u16, String> {
        panic!("unexpected network request to {url}");
    }
}

/// A sink that is either healthy (in-memory) or always fails.
#[derive(Debug, Default)]
pub struct TestSink {
    pub written: Vec<u8>,
    pub broken: bool,
}

impl TestSink {
    pub fn broken() -> Self {
        Self {
            written: Vec::new(),
            broken: true,
        }
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.written.clone()).unwrap()
    }
}

impl Write for TestSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.broken {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "sink is read-only"));
        }
        self.written.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn memory_sinks() -> OutputSinks<TestSink> {
    OutputSinks {
        succeeded: TestSink::default(),
        failed: TestSink::default(),
        failure_details: TestSink::default(),
    }
}
