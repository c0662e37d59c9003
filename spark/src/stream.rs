use std::any::Any;
use std::io;
use std::io::Write;
use std::sync::Arc;
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel::Receiver;
use crossbeam_channel::Sender;
use crossbeam_channel::bounded;
use crossbeam_channel::select;
use crossbeam_channel::tick;
use tracing::debug;
use tracing::warn;

use crate::accumulator::Accumulator;
use crate::error::Result;
use crate::error::SparkError;
use crate::render::Renderer;
use crate::terminal::CrosstermTerminal;
use crate::terminal::TerminalSize;
use crate::unit::Unit;

const RENDERER_THREAD_NAME: &str = "spark-renderer";
const MIN_REFRESH_INTERVAL: Duration = Duration::from_millis(1);

/// A sparkline that redraws itself on a background thread.
///
/// Samples can be added from any thread through [`SparkStream::add`] or a
/// [`Sampler`]. Every `refresh_interval` the renderer drains what was added
/// since the previous tick into a sliding window sized to the terminal and
/// redraws the line in place.
pub struct SparkStream {
    refresh_interval: Duration,
    accumulator: Arc<Accumulator>,
    output_is_stdout: bool,
    state: Lifecycle,
}

enum Lifecycle {
    Created(RenderSetup),
    Running(RendererThread),
    Stopped,
}

/// Collaborators handed to the renderer thread at start.
pub(crate) struct RenderSetup {
    unit: Unit,
    output: Box<dyn Write + Send>,
    terminal: Box<dyn TerminalSize>,
}

struct RendererThread {
    shutdown_tx: Sender<()>,
    handle: JoinHandle<()>,
}

impl SparkStream {
    /// Creates a stopped stream rendering to stdout.
    ///
    /// Intervals shorter than a millisecond are raised to one millisecond.
    pub fn new(refresh_interval: Duration) -> Self {
        Self::with_parts(refresh_interval, Unit::None, io::stdout())
    }

    pub(crate) fn with_parts<W>(refresh_interval: Duration, unit: Unit, output: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            refresh_interval: refresh_interval.max(MIN_REFRESH_INTERVAL),
            accumulator: Arc::new(Accumulator::new()),
            output_is_stdout: is_stdout(&output),
            state: Lifecycle::Created(RenderSetup {
                unit,
                output: Box::new(output),
                terminal: Box::new(CrosstermTerminal),
            }),
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, Lifecycle::Running(_))
    }

    /// True once [`start`](Self::start) or [`stop`](Self::stop) was called.
    pub fn has_started(&self) -> bool {
        !matches!(self.state, Lifecycle::Created(_))
    }

    /// Whether the rendered line goes to the process's stdout.
    pub fn renders_to_stdout(&self) -> bool {
        self.output_is_stdout
    }

    pub fn set_unit(&mut self, unit: impl Into<Unit>) -> Result<()> {
        self.setup_mut()?.unit = unit.into();
        Ok(())
    }

    pub fn set_output<W>(&mut self, output: W) -> Result<()>
    where
        W: Write + Send + 'static,
    {
        let output_is_stdout = is_stdout(&output);
        self.setup_mut()?.output = Box::new(output);
        self.output_is_stdout = output_is_stdout;
        Ok(())
    }

    pub fn set_terminal<T>(&mut self, terminal: T) -> Result<()>
    where
        T: TerminalSize + 'static,
    {
        self.setup_mut()?.terminal = Box::new(terminal);
        Ok(())
    }

    fn setup_mut(&mut self) -> Result<&mut RenderSetup> {
        match &mut self.state {
            Lifecycle::Created(setup) => Ok(setup),
            Lifecycle::Running(_) | Lifecycle::Stopped => Err(SparkError::AlreadyStarted),
        }
    }

    /// Adds `value` to the total drawn at the next tick.
    pub fn add(&self, value: f64) {
        self.accumulator.add(value);
    }

    /// Returns a handle producers can move to other threads.
    pub fn sampler(&self) -> Sampler {
        Sampler {
            accumulator: Arc::clone(&self.accumulator),
        }
    }

    /// Spawns the renderer. The first line is drawn one interval from now.
    ///
    /// Starting a stream that already started, or was stopped, only logs a
    /// warning.
    pub fn start(&mut self) {
        let setup = match std::mem::replace(&mut self.state, Lifecycle::Stopped) {
            Lifecycle::Created(setup) => setup,
            state => {
                self.state = state;
                warn!("sparkline stream already started; ignoring start");
                return;
            }
        };

        let ticker = Ticker::new(Arc::clone(&self.accumulator), self.refresh_interval, setup);
        let refresh_interval = self.refresh_interval;
        let (shutdown_tx, shutdown_rx) = bounded(0);
        let spawned = thread::Builder::new()
            .name(RENDERER_THREAD_NAME.to_string())
            .spawn(move || ticker.run(refresh_interval, shutdown_rx));
        match spawned {
            Ok(handle) => {
                debug!(?refresh_interval, "sparkline renderer started");
                self.state = Lifecycle::Running(RendererThread {
                    shutdown_tx,
                    handle,
                });
            }
            Err(err) => warn!("failed to spawn sparkline renderer: {err}"),
        }
    }

    /// Stops the renderer and waits for an in-flight tick to finish.
    ///
    /// A stopped stream never renders again.
    pub fn stop(&mut self) {
        let state = std::mem::replace(&mut self.state, Lifecycle::Stopped);
        if let Lifecycle::Running(RendererThread {
            shutdown_tx,
            handle,
        }) = state
        {
            drop(shutdown_tx);
            if handle.join().is_err() {
                warn!("sparkline renderer thread panicked");
            }
            debug!("sparkline renderer stopped");
        }
    }
}

impl Drop for SparkStream {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Cloneable producer handle for a [`SparkStream`].
///
/// Samples added through a sampler after the stream stopped are accepted and
/// never drawn.
#[derive(Debug, Clone)]
pub struct Sampler {
    accumulator: Arc<Accumulator>,
}

impl Sampler {
    pub fn add(&self, value: f64) {
        self.accumulator.add(value);
    }
}

pub(crate) fn is_stdout<T: Any>(value: &T) -> bool {
    let value: &dyn Any = value;
    value.is::<io::Stdout>() || value.is::<io::StdoutLock<'static>>()
}

/// State owned by the renderer thread.
struct Ticker {
    accumulator: Arc<Accumulator>,
    terminal: Box<dyn TerminalSize>,
    output: Box<dyn Write + Send>,
    renderer: Renderer,
}

impl Ticker {
    fn new(accumulator: Arc<Accumulator>, refresh_interval: Duration, setup: RenderSetup) -> Self {
        let RenderSetup {
            unit,
            output,
            terminal,
        } = setup;
        Self {
            accumulator,
            terminal,
            output,
            renderer: Renderer::new(refresh_interval, unit),
        }
    }

    fn run(mut self, refresh_interval: Duration, shutdown_rx: Receiver<()>) {
        let ticks = tick(refresh_interval);
        loop {
            select! {
                recv(shutdown_rx) -> _ => break,
                recv(ticks) -> _ => self.tick(),
            }
        }
    }

    /// Draws one line. A tick without a usable terminal width leaves the
    /// pending total for the next tick.
    fn tick(&mut self) {
        let width = match self.terminal.columns() {
            Ok(0) => {
                warn!("terminal reported zero columns; skipping sparkline tick");
                return;
            }
            Ok(width) => width,
            Err(err) => {
                warn!("failed to query terminal width; skipping sparkline tick: {err}");
                return;
            }
        };

        let pending = self.accumulator.drain();
        let line = self.renderer.render(usize::from(width), pending);
        if let Err(err) = self
            .output
            .write_all(line.as_bytes())
            .and_then(|()| self.output.flush())
        {
            warn!("failed to write sparkline: {err}");
        }
    }
}
