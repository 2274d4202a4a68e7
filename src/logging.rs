use log::{Level, Log, Metadata, Record};
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Target attached to every record the client emits.
pub const LOG_TARGET: &str = "lifx_color";

/// Destination for the client's diagnostics.
///
/// The sink is handed to [`LifxApi`](crate::LifxApi) when it is built, so the
/// library never installs or depends on a process-wide logger of its own.
#[derive(Clone)]
pub struct LogSink {
    inner: Arc<dyn Log>,
}

struct Global;

impl Log for Global {
    fn enabled(&self, metadata: &Metadata) -> bool {
        log::logger().enabled(metadata)
    }
    fn log(&self, record: &Record) {
        log::logger().log(record)
    }
    fn flush(&self) {
        log::logger().flush()
    }
}

impl LogSink {
    pub fn new<L: Log + 'static>(logger: L) -> Self {
        LogSink {
            inner: Arc::new(logger),
        }
    }

    /// Forwards to whatever logger the `log` facade has installed, if any.
    pub fn global() -> Self {
        LogSink::new(Global)
    }

    pub(crate) fn emit(
        &self,
        level: Level,
        (module, file, line): (&'static str, &'static str, u32),
        args: fmt::Arguments<'_>,
    ) {
        let metadata = Metadata::builder().level(level).target(LOG_TARGET).build();
        if !self.inner.enabled(&metadata) {
            return;
        }
        self.inner.log(
            &Record::builder()
                .metadata(metadata)
                .args(args)
                .module_path_static(Some(module))
                .file_static(Some(file))
                .line(Some(line))
                .build(),
        );
    }

    pub fn flush(&self) {
        self.inner.flush()
    }
}

impl Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSink").finish()
    }
}

macro_rules! emit {
    ($sink:expr, $level:expr, $($arg:tt)+) => {
        $sink.emit(
            $level,
            (module_path!(), file!(), line!()),
            format_args!($($arg)+),
        )
    };
}
