use crate::replay::constants::UNKNOWN_FAILURE_REASON;
use crate::replay::types::ReplayOutcome;
use reqwest::blocking::Client;
use std::error::Error;
use std::time::Duration;

/// Transport seam for issuing a single GET.
///
/// `Ok` carries the response status, `Err` the transport error text
/// (connection refused, DNS, timeout, TLS...).
pub trait RequestSender {
    fn send(&self, url: &str) -> Result<u16, String>;
}

impl<S: RequestSender + ?Sized> RequestSender for &S {
    fn send(&self, url: &str) -> Result<u16, String> {
        (**self).send(url)
    }
}

/// Blocking HTTP sender. Redirects are followed, response bodies are never read.
#[derive(Debug, Clone)]
pub struct HttpSender {
    client: Client,
}

impl HttpSender {
    /// `None` means requests never time out.
    pub fn new(timeout: Option<Duration>) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl RequestSender for HttpSender {
    fn send(&self, url: &str) -> Result<u16, String> {
        self.client
            .get(url)
            .send()
            .map(|response| response.status().as_u16())
            .map_err(|e| error_chain(&e))
    }
}

/// reqwest keeps the useful part (e.g. "Connection refused") in the source chain.
fn error_chain(err: &dyn Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !out.contains(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        source = cause.source();
    }
    out
}

/// Executes replays and classifies the result.
pub struct Replayer<S> {
    sender: S,
    dry_run: bool,
}

impl<S: RequestSender> Replayer<S> {
    pub fn new(sender: S, dry_run: bool) -> Self {
        Self { sender, dry_run }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Dry run never touches the network and always counts as a success.
    pub fn replay(&self, url: &str) -> ReplayOutcome {
        if self.dry_run {
            return ReplayOutcome::Succeeded;
        }

        match self.sender.send(url) {
            Ok(200) => ReplayOutcome::Succeeded,
            Ok(status) => ReplayOutcome::Failed {
                status,
                reason: UNKNOWN_FAILURE_REASON.to_string(),
            },
            Err(reason) => ReplayOutcome::Failed { status: 0, reason },
        }
    }
}
