//! Shared line-based input and output.

use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

/// A reader and writer shared by the form screen and its notifier.
pub struct Console<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    /// Read one line without its terminator. `None` at end of input.
    pub async fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.lock().await.read_line(&mut line).await?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub async fn write(&self, text: &str) -> io::Result<()> {
        let mut output = self.output.lock().await;
        output.write_all(text.as_bytes()).await?;
        output.flush().await
    }

    /// Inspect the writer, e.g. an in-memory buffer.
    pub async fn with_output<T>(&self, f: impl FnOnce(&W) -> T) -> T {
        f(&*self.output.lock().await)
    }
}
