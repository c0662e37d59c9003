mod adapters;
mod stream;

use std::io;
use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;
use std::time::Instant;

/// Sink whose contents stay readable after the stream takes ownership.
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    /// Frames drawn so far, without their leading carriage return.
    pub(crate) fn frames(&self) -> Vec<String> {
        self.contents()
            .split('\r')
            .skip(1)
            .map(str::to_string)
            .collect()
    }

    pub(crate) fn wait_for_frames(&self, count: usize, timeout: Duration) -> Vec<String> {
        let deadline = Instant::now() + timeout;
        loop {
            let frames = self.frames();
            if frames.len() >= count || Instant::now() >= deadline {
                return frames;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
