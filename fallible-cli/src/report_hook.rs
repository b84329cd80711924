//! Renders [`eyre::Report`]s for the `fallible` binary.
//!
//! A report lists the error chain, then the spans that were open when the report was built, so a
//! failed write names the step of the run it interrupted.

use std::error::Error;
use std::fmt;
use std::panic::Location;

use eyre::EyreHandler;
use tracing_error::{SpanTrace, SpanTraceStatus};

/// Remembers where a report was built; the error itself is passed in at render time.
struct OutcomeReportHandler {
    context: SpanTrace,
    location: Option<&'static Location<'static>>,
}

impl OutcomeReportHandler {
    fn capture() -> Self {
        Self {
            context: SpanTrace::capture(),
            location: None,
        }
    }

    fn write_causes(error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut causes = std::iter::successors(error.source(), |&cause| cause.source()).peekable();
        if causes.peek().is_none() {
            return Ok(());
        }

        write!(f, "\n\nCaused by:")?;
        for (index, cause) in causes.enumerate() {
            write!(f, "\n{index:>4}: {cause}")?;
        }
        Ok(())
    }

    fn write_context(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Stays empty unless `tracing_error::ErrorLayer` is installed and the span was enabled.
        if self.context.status() != SpanTraceStatus::CAPTURED {
            return Ok(());
        }

        write!(f, "\n\nContext:")?;
        let mut index = 0;
        let mut result = Ok(());
        self.context.with_spans(|metadata, fields| {
            result = if fields.is_empty() {
                write!(f, "\n{index:>4}: {}", metadata.name())
            } else {
                write!(f, "\n{index:>4}: {} {{ {fields} }}", metadata.name())
            };
            index += 1;
            result.is_ok()
        });
        result
    }
}

impl EyreHandler for OutcomeReportHandler {
    fn debug(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return fmt::Debug::fmt(error, f);
        }

        write!(f, "{error}")?;
        Self::write_causes(error, f)?;
        self.write_context(f)?;
        if let Some(location) = self.location {
            write!(f, "\n\nLocation: {location}")?;
        }
        Ok(())
    }

    fn track_caller(&mut self, location: &'static Location<'static>) {
        self.location = Some(location);
    }
}

fn hook(_error: &(dyn Error + 'static)) -> Box<dyn EyreHandler> {
    Box::new(OutcomeReportHandler::capture())
}

/// Installs [`OutcomeReportHandler`] for every [`eyre::Report`] created afterwards.
pub fn install() -> Result<(), eyre::InstallError> {
    eyre::set_hook(Box::new(hook))
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use eyre::EyreHandler;

    use super::OutcomeReportHandler;

    struct Rendered<'a>(&'a OutcomeReportHandler, &'a (dyn std::error::Error + 'static));

    impl fmt::Debug for Rendered<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.debug(self.1, f)
        }
    }

    #[derive(thiserror::Error, Debug)]
    #[error("writing outcomes to stdout")]
    struct Writing(#[source] std::io::Error);

    #[test]
    fn lists_the_cause_chain_without_context_outside_any_span() {
        let handler = OutcomeReportHandler::capture();
        let error = Writing(std::io::ErrorKind::BrokenPipe.into());

        let rendered = format!("{:?}", Rendered(&handler, &error));

        assert!(rendered.starts_with("writing outcomes to stdout\n\nCaused by:\n   0: "));
        assert!(!rendered.contains("Context:"));
    }

    #[test]
    fn omits_causes_for_a_lone_error() {
        let handler = OutcomeReportHandler::capture();
        let error = std::io::Error::other("disk full");

        assert_eq!(format!("{:?}", Rendered(&handler, &error)), "disk full");
    }
}
