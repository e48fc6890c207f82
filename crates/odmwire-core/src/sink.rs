//! Compile observation boundary.
//!
//! Observation is optional, injected by the caller, and must not affect
//! compilation semantics.

///
/// CompileEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompileEvent<'a> {
    DefinitionEmitted { id: &'a str },
    AliasEmitted { id: &'a str, target: &'a str },
    ParameterSet { key: &'a str },
    Verified { definitions: usize, aliases: usize },
}

///
/// CompileSink
///

pub trait CompileSink {
    fn record(&self, event: CompileEvent<'_>);
}

/// Sink that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl CompileSink for NullSink {
    fn record(&self, _: CompileEvent<'_>) {}
}
