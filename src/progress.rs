use std::io;
use std::io::Write;

const BAR_WIDTH: usize = 70;

/// Single-line progress bar redrawn in place. Draws on stderr unless told otherwise, clear of the
/// log output on stdout.
pub struct ProgressBar<W: Write = io::Stderr> {
    total: usize,
    done: usize,
    out: W,
}

impl ProgressBar {
    pub fn new(total: usize) -> Self {
        Self::with_writer(total, io::stderr())
    }
}

impl<W: Write> ProgressBar<W> {
    pub fn with_writer(total: usize, out: W) -> Self {
        let mut progress_bar = Self { total, done: 0, out };
        progress_bar.draw();
        progress_bar
    }

    pub fn advance(&mut self) {
        self.done = (self.done + 1).min(self.total);
        self.draw();
    }

    pub fn finish(mut self) -> W {
        // Best effort, a broken terminal must not abort the batch.
        let _ = write!(self.out, "\r{: <width$}\r", "", width = BAR_WIDTH + 30);
        let _ = self.out.flush();
        self.out
    }

    fn draw(&mut self) {
        let _ = write!(self.out, "\r{}", render(self.done, self.total));
        let _ = self.out.flush();
    }
}

pub fn render(done: usize, total: usize) -> String {
    let fraction = if total == 0 { 1.0 } else { done as f32 / total as f32 };

    format!(
        "[{: <width$}] {:.2}% ({done}/{total})",
        "#".repeat((fraction * BAR_WIDTH as f32).round() as usize),
        fraction * 100.0,
        width = BAR_WIDTH
    )
}
