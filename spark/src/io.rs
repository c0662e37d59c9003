//! `Read` and `Write` wrappers that chart their own throughput.

use std::io;
use std::io::ErrorKind;
use std::io::Read;
use std::io::Write;
use std::time::Duration;

use crate::error::Result;
use crate::error::SparkError;
use crate::stream::SparkStream;
use crate::stream::is_stdout;
use crate::unit::Unit;

/// Refresh interval of the streams created by the adapters.
pub const ADAPTER_REFRESH_INTERVAL: Duration = Duration::from_millis(60);

fn byte_stream<O>(output: O) -> SparkStream
where
    O: Write + Send + 'static,
{
    SparkStream::with_parts(ADAPTER_REFRESH_INTERVAL, Unit::Bytes, output)
}

fn start_once(stream: &mut SparkStream) {
    if !stream.has_started() {
        stream.start();
    }
}

/// Charts the bytes read through it.
///
/// The sparkline starts on the first read and stops at end of stream or on
/// the first error other than [`ErrorKind::Interrupted`].
pub struct SparkReader<R> {
    inner: R,
    stream: SparkStream,
}

impl<R: Read> SparkReader<R> {
    /// Renders the byte rate to stdout.
    pub fn new(inner: R) -> Self {
        Self::with_stream(inner, byte_stream(io::stdout()))
    }

    pub fn with_output<O>(inner: R, output: O) -> Self
    where
        O: Write + Send + 'static,
    {
        Self::with_stream(inner, byte_stream(output))
    }

    /// Uses a caller-configured stream as is.
    pub fn with_stream(inner: R, stream: SparkStream) -> Self {
        Self { inner, stream }
    }
}

impl<R> SparkReader<R> {
    pub fn stream(&self) -> &SparkStream {
        &self.stream
    }

    /// Stops the sparkline and returns the wrapped reader.
    pub fn into_inner(self) -> R {
        let Self { inner, mut stream } = self;
        stream.stop();
        inner
    }
}

impl<R: Read> Read for SparkReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        start_once(&mut self.stream);
        match self.inner.read(buf) {
            Ok(0) if !buf.is_empty() => {
                self.stream.stop();
                Ok(0)
            }
            Ok(read) => {
                self.stream.add(read as f64);
                Ok(read)
            }
            Err(err) if err.kind() == ErrorKind::Interrupted => Err(err),
            Err(err) => {
                self.stream.stop();
                Err(err)
            }
        }
    }
}

/// Charts the bytes written through it.
///
/// The sparkline starts on the first write and stops on the first error
/// other than [`ErrorKind::Interrupted`]. Wrapping stdout while rendering to
/// stdout is rejected, since the sparkline would interleave with the data.
pub struct SparkWriter<W> {
    inner: W,
    stream: SparkStream,
}

impl<W: Write + 'static> SparkWriter<W> {
    /// Renders the byte rate to stdout, so `inner` must not be stdout.
    pub fn new(inner: W) -> Result<Self> {
        Self::with_stream(inner, byte_stream(io::stdout()))
    }

    pub fn with_output<O>(inner: W, output: O) -> Result<Self>
    where
        O: Write + Send + 'static,
    {
        Self::with_stream(inner, byte_stream(output))
    }

    pub fn with_stream(inner: W, stream: SparkStream) -> Result<Self> {
        if stream.renders_to_stdout() && is_stdout(&inner) {
            return Err(SparkError::StdoutSink);
        }
        Ok(Self { inner, stream })
    }
}

impl<W> SparkWriter<W> {
    pub fn stream(&self) -> &SparkStream {
        &self.stream
    }

    /// Stops the sparkline and returns the wrapped writer.
    pub fn into_inner(self) -> W {
        let Self { inner, mut stream } = self;
        stream.stop();
        inner
    }
}

impl<W: Write> Write for SparkWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        start_once(&mut self.stream);
        match self.inner.write(buf) {
            Ok(written) => {
                self.stream.add(written as f64);
                Ok(written)
            }
            Err(err) if err.kind() == ErrorKind::Interrupted => Err(err),
            Err(err) => {
                self.stream.stop();
                Err(err)
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
