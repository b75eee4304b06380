use crate::error::TradeFinanceError;
use crate::application::dispatcher::Outcome;
use serde::Serialize;
use std::io::Write;

/// One CSV line describing how an invocation ended.
#[derive(Debug, Serialize)]
pub struct ResponseRow<'a> {
    pub line: u64,
    pub action: &'a str,
    pub outcome: &'static str,
    pub kind: &'static str,
    pub body: String,
}

impl<'a> ResponseRow<'a> {
    pub fn new(line: u64, action: &'a str, result: &Result<Outcome, TradeFinanceError>) -> Self {
        match result {
            Ok(outcome) => Self {
                line,
                action,
                outcome: "ok",
                kind: "",
                body: String::from_utf8_lossy(outcome.body()).into_owned(),
            },
            Err(err) => Self {
                line,
                action,
                outcome: "error",
                kind: err.kind().as_str(),
                body: err.to_string(),
            },
        }
    }
}

/// Writes invocation responses as CSV with a `line,action,outcome,kind,body` header.
pub struct ResponseWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResponseWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write(&mut self, row: &ResponseRow<'_>) -> csv::Result<()> {
        self.writer.serialize(row)
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}
