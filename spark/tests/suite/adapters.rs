use std::io::Read;
use std::io::Write;
use std::time::Duration;

use pretty_assertions::assert_eq;
use uniplot_spark::FixedWidth;
use uniplot_spark::SparkReader;
use uniplot_spark::SparkStream;
use uniplot_spark::SparkWriter;
use uniplot_spark::Unit;

use super::SharedBuffer;

/// Reader that hands out one chunk per call, pausing between chunks.
struct SlowReader {
    chunks: Vec<Vec<u8>>,
}

impl Read for SlowReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.chunks.is_empty() {
            return Ok(0);
        }
        std::thread::sleep(Duration::from_millis(10));
        let chunk = self.chunks.remove(0);
        let len = chunk.len().min(buf.len());
        buf[..len].copy_from_slice(&chunk[..len]);
        Ok(len)
    }
}

fn byte_stream(output: &SharedBuffer, interval: Duration) -> SparkStream {
    let mut stream = SparkStream::new(interval);
    stream.set_unit(Unit::Bytes).unwrap();
    stream.set_output(output.clone()).unwrap();
    stream.set_terminal(FixedWidth(30)).unwrap();
    stream
}

#[test]
fn reader_charts_bytes_read() {
    let output = SharedBuffer::default();
    let chunks = (0..10).map(|_| vec![b'x'; 100]).collect();
    let mut reader = SparkReader::with_stream(
        SlowReader { chunks },
        byte_stream(&output, Duration::from_millis(20)),
    );

    let mut copied = Vec::new();
    reader.read_to_end(&mut copied).unwrap();

    assert_eq!(copied.len(), 1000);
    assert!(!reader.stream().is_running());
    let frames = output.frames();
    assert!(!frames.is_empty());
    assert!(frames.iter().all(|frame| frame.ends_with("B/s")), "{frames:?}");
}

#[test]
fn writer_charts_bytes_written() {
    let output = SharedBuffer::default();
    let mut writer =
        SparkWriter::with_stream(Vec::new(), byte_stream(&output, Duration::from_millis(5)))
            .unwrap();
    for _ in 0..20 {
        writer.write_all(&[0; 64]).unwrap();
        std::thread::sleep(Duration::from_millis(2));
    }
    output.wait_for_frames(1, Duration::from_secs(5));

    let written = writer.into_inner();
    assert_eq!(written.len(), 20 * 64);
    assert!(!output.frames().is_empty());
}
