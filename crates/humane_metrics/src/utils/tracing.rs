use std::fmt;
use std::sync::OnceLock;

use time::macros::format_description;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::{
    format, time::FormatTime, FmtContext, FormatEvent, FormatFields, FormattedFields,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Span field copied onto every event line so batch output can be correlated
const TRANSCRIPT_FIELD: &str = "transcript=";

struct BracketedTime;

impl FormatTime for BracketedTime {
    fn format_time(&self, w: &mut format::Writer<'_>) -> fmt::Result {
        let now = time::OffsetDateTime::now_utc();
        let stamp = now
            .format(&format_description!(
                "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"
            ))
            .map_err(|_| fmt::Error)?;
        write!(w, "[{}]", stamp)
    }
}

struct BracketedFormatter;

impl<S, N> FormatEvent<S, N> for BracketedFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        BracketedTime.format_time(&mut writer)?;

        write!(
            writer,
            "[{}]",
            event.metadata().level().to_string().to_lowercase()
        )?;

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                let extensions = span.extensions();
                let Some(fields) = extensions.get::<FormattedFields<N>>() else {
                    continue;
                };
                let fields_str = fields.fields.as_str();
                if let Some(start) = fields_str.find(TRANSCRIPT_FIELD) {
                    let rest = &fields_str[start + TRANSCRIPT_FIELD.len()..];
                    let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
                    write!(writer, " {}{}", TRANSCRIPT_FIELD, &rest[..end])?;
                    break;
                }
            }
        }

        write!(writer, " ")?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

static INIT_LOGGER: OnceLock<()> = OnceLock::new();

/// Installs the global subscriber once. `RUST_LOG` wins over `log_level`.
/// Output goes to stderr so stdout stays machine-readable.
pub fn init_tracer(log_level: &str) {
    INIT_LOGGER.get_or_init(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .event_format(BracketedFormatter)
            .fmt_fields(format::DefaultFields::new())
            .with_writer(std::io::stderr)
            .with_ansi(false);

        if let Err(err) = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
        {
            eprintln!("failed to install tracing subscriber: {}", err);
        }
    });
}
