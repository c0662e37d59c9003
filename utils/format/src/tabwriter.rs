use std::io;
use std::io::Write;

use unicode_width::UnicodeWidthStr;

/// Buffers tab-separated text and aligns it into columns on [`flush`].
///
/// Cells are terminated by `\t`; the text after the last tab on a line is
/// not part of any column. Consecutive lines sharing a terminated cell in
/// the same column form a block whose width is the widest cell plus
/// `padding`, but never less than `min_width`. Widths are measured in
/// terminal columns, so block glyphs count as one.
///
/// [`flush`]: Write::flush
pub struct TabWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
    min_width: usize,
    padding: usize,
}

impl<W: Write> TabWriter<W> {
    pub fn new(inner: W, min_width: usize, padding: usize) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            min_width,
            padding,
        }
    }

    /// Flushes buffered text and returns the wrapped writer.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.flush()?;
        Ok(self.inner)
    }

    fn aligned(&self) -> String {
        let text = String::from_utf8_lossy(&self.buf);
        let mut lines: Vec<&str> = text.split('\n').collect();
        // `split` yields a trailing empty piece after the final newline.
        let ends_with_newline = lines.last().is_some_and(|last| last.is_empty());
        if ends_with_newline {
            lines.pop();
        }
        let rows: Vec<Vec<&str>> = lines.iter().map(|line| line.split('\t').collect()).collect();

        let mut widths: Vec<Vec<usize>> = rows
            .iter()
            .map(|cells| vec![0; cells.len().saturating_sub(1)])
            .collect();
        self.measure(&rows, 0, 0, rows.len(), &mut widths);

        let mut out = String::with_capacity(text.len());
        for (i, (cells, widths)) in rows.iter().zip(&widths).enumerate() {
            for (cell, width) in cells.iter().zip(widths) {
                out.push_str(cell);
                let pad = width.saturating_sub(cell.width());
                out.extend(std::iter::repeat_n(' ', pad));
            }
            if let Some(last) = cells.last() {
                out.push_str(last);
            }
            if i + 1 < rows.len() || ends_with_newline {
                out.push('\n');
            }
        }
        out
    }

    fn measure(
        &self,
        rows: &[Vec<&str>],
        column: usize,
        start: usize,
        end: usize,
        widths: &mut [Vec<usize>],
    ) {
        let terminated = |row: &Vec<&str>| row.len().saturating_sub(1) > column;
        let mut line = start;
        while line < end {
            if !terminated(&rows[line]) {
                line += 1;
                continue;
            }

            let block_start = line;
            while line < end && terminated(&rows[line]) {
                line += 1;
            }
            let width = rows[block_start..line]
                .iter()
                .map(|row| row[column].width() + self.padding)
                .fold(self.min_width, usize::max);
            for row_widths in &mut widths[block_start..line] {
                row_widths[column] = width;
            }
            self.measure(rows, column + 1, block_start, line, widths);
        }
    }
}

impl<W: Write> Write for TabWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let aligned = self.aligned();
            self.buf.clear();
            self.inner.write_all(aligned.as_bytes())?;
        }
        self.inner.flush()
    }
}
