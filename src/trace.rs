//! Span and event macros for the post-processing pipeline.
//!
//! `process` opens a span carrying the tensor shape and reports candidate and
//! kept counts; metadata label loading warns about missing class ids. All of
//! it is emitted only with the `tracing` feature.

/// Span around one `PostProcessor::process` call.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

/// Info event with per-frame counts such as `candidates` and `kept`.
///
/// Without the `tracing` feature the field values are evaluated and dropped.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
    ($name:expr) => {
        tracing::info!(name: $name)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
    ($name:expr) => {};
}

/// Warn event for label resources that load with gaps.
#[cfg(feature = "tracing")]
macro_rules! trace_warn {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::warn!(name: $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_warn {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

pub(crate) use trace_event;
pub(crate) use trace_span;
#[allow(unused_imports)]
pub(crate) use trace_warn;

/// Stand-in for the `process` span guard when tracing is off.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Matches `Span::entered()`.
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
