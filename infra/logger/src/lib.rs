//! # Logger
//!
//! Installs the process-wide `tracing` subscriber for the back-office host.
//!
//! Output goes to the console (compact, coloured) and optionally to a rolling file
//! in a directory of your choice, plain text or JSON. Filtering starts from a default
//! level, then applies programmatic directives, then `RUST_LOG`.
//!
//! ```rust
//! # use gamma_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("gamma-server")
//!     .level(LevelFilter::DEBUG)
//!     .directives("gamma_kernel=trace,reqwest=warn")
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

const DEFAULT_RETAINED_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug)]
struct Settings {
    console: bool,
    level: LevelFilter,
    directives: Option<String>,
    file: Option<FileSettings>,
}

#[derive(Debug)]
struct FileSettings {
    dir: PathBuf,
    rotation: Rotation,
    retained: usize,
    json: bool,
}

/// Builder state before a name is given.
#[derive(Debug)]
pub struct Unnamed;
/// Builder state with a name; the builder can `init`.
#[derive(Debug)]
pub struct Named(String);
/// Output goes to the console only.
#[derive(Debug)]
pub struct ConsoleOnly;
/// A rolling log file is configured.
#[derive(Debug)]
pub struct Rolling;

mod sealed {
    pub trait Sealed {}
}
impl sealed::Sealed for Unnamed {}
impl sealed::Sealed for Named {}
impl sealed::Sealed for ConsoleOnly {}
impl sealed::Sealed for Rolling {}

/// Configures and installs the global subscriber.
///
/// A name is required before [`LoggerBuilder::init`] becomes available; file-only
/// knobs appear once [`LoggerBuilder::file`] was called.
#[must_use = "The builder does nothing until .init() is called."]
#[derive(Debug)]
pub struct LoggerBuilder<N: sealed::Sealed = Unnamed, O: sealed::Sealed = ConsoleOnly> {
    settings: Settings,
    name: N,
    output: PhantomData<O>,
}

impl<O: sealed::Sealed> LoggerBuilder<Unnamed, O> {
    /// Names the application; rolling files are prefixed with it.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, O> {
        LoggerBuilder { settings: self.settings, name: Named(name.into()), output: PhantomData }
    }
}

impl<O: sealed::Sealed> LoggerBuilder<Named, O> {
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Per-target directives such as `gamma_kernel=debug,hyper=info`.
    ///
    /// `RUST_LOG` is ignored when directives are set. Invalid directives make
    /// [`LoggerBuilder::init`] fail.
    pub fn directives(mut self, directives: impl Into<String>) -> Self {
        self.settings.directives = Some(directives.into()).filter(|d| !d.trim().is_empty());
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Also writes to daily-rotated files inside `dir`.
    pub fn file(self, dir: impl Into<PathBuf>) -> LoggerBuilder<Named, Rolling> {
        let mut settings = self.settings;
        settings.file = Some(FileSettings {
            dir: dir.into(),
            rotation: Rotation::DAILY,
            retained: DEFAULT_RETAINED_FILES,
            json: false,
        });
        LoggerBuilder { settings, name: self.name, output: PhantomData }
    }

    /// Installs the subscriber.
    ///
    /// The returned [`Logger`] owns the file writer's worker; keep it alive until
    /// shutdown or buffered lines are lost.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero retained files,
    ///   bad directives, or no enabled output.
    /// * [`LoggerError::Directory`] / [`LoggerError::Appender`] when the log directory
    ///   cannot be used.
    /// * [`LoggerError::Subscriber`] when a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Named(name) = self.name;
        let settings = self.settings;
        validate(&name, &settings)?;

        let filter = env_filter(&settings)?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if settings.console {
            layers.push(fmt::layer().compact().with_ansi(true).boxed());
        }

        let guard = match settings.file {
            Some(file) => {
                let (layer, guard) = file_layer(&name, file)?;
                layers.push(layer);
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "no output enabled; turn on the console or configure a log file".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;
        tracing::debug!(logger = %name, "Logging initialized");

        Ok(Logger { name, guard })
    }
}

impl LoggerBuilder<Named, Rolling> {
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = self.settings.file.as_mut() {
            file.rotation = rotation;
        }
        self
    }

    /// How many rotated files survive; older ones are deleted.
    pub fn retained_files(mut self, count: usize) -> Self {
        if let Some(file) = self.settings.file.as_mut() {
            file.retained = count;
        }
        self
    }

    /// Writes the file as JSON lines; the console stays human-readable.
    pub fn json(mut self, enabled: bool) -> Self {
        if let Some(file) = self.settings.file.as_mut() {
            file.json = enabled;
        }
        self
    }
}

/// Handle to the installed subscriber.
#[must_use = "Dropping the handle stops the background file writer."]
#[derive(Debug)]
pub struct Logger {
    name: String,
    guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder {
            settings: Settings {
                console: true,
                level: LevelFilter::INFO,
                directives: None,
                file: None,
            },
            name: Unnamed,
            output: PhantomData,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a file writer is attached.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!(logger = %self.name, "Flushing log files");
        }
    }
}

fn validate(name: &str, settings: &Settings) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(as_config_error("logger name cannot be empty".into()));
    }
    if settings.file.as_ref().is_some_and(|f| f.retained == 0) {
        return Err(as_config_error("retained_files must be greater than zero".into()));
    }
    Ok(())
}

fn as_config_error(message: std::borrow::Cow<'static, str>) -> LoggerError {
    LoggerError::InvalidConfiguration { message, context: None }
}

fn env_filter(settings: &Settings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    match settings.directives.as_deref() {
        Some(directives) => builder.parse(directives).map_err(|e| {
            as_config_error(format!("invalid directives '{directives}': {e}").into())
        }),
        None => Ok(builder.from_env_lossy()),
    }
}

fn file_layer(name: &str, file: FileSettings) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    fs::create_dir_all(&file.dir).context(format!("creating {}", file.dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(file.rotation)
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(file.retained)
        .build(&file.dir)
        .context(format!("opening log files in {}", file.dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    let layer: BoxedLayer = if file.json { layer.json().boxed() } else { layer.boxed() };

    Ok((layer, guard))
}
