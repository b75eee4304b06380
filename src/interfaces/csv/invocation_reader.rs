use crate::application::dispatcher::Invocation;
use std::io::Read;

/// Reads invocations from a CSV source, one call per row.
///
/// The first column is the action name and the rest are its positional
/// arguments. Rows may have different widths; trailing empty cells are
/// dropped so spreadsheets padded to a fixed width still parse.
pub struct InvocationReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> InvocationReader<R> {
    /// Creates a new `InvocationReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .flexible(true)
            .comment(Some(b'#'))
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator of `(line, invocation)` pairs, lazily read.
    pub fn invocations(self) -> impl Iterator<Item = csv::Result<(u64, Invocation)>> {
        self.reader.into_records().map(|result| {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let mut args: Vec<String> = record.iter().map(str::to_string).collect();
            while args.last().is_some_and(|arg| arg.is_empty()) {
                args.pop();
            }
            Ok((line, Invocation::invoke(args)))
        })
    }
}
