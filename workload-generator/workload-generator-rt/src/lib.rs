use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::string::FromUtf8Error;

use log::info;
use rand::Rng;
use thiserror::Error;
use workload_generator_algo::Generator;
use workload_generator_algo::State;
use workload_generator_algo::Summary;
use workload_generator_algo::Variant;

/// Writes workload scripts into a sink, one command per line.
pub struct Script<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> Script<W> {
    #[inline]
    pub fn new(out: W) -> Self {
        Self {
            out: BufWriter::new(out),
        }
    }

    /// Drains `generator` into the sink and flushes it.
    ///
    /// The generator must not have produced anything yet: a script is always
    /// written from its first line to its terminating `x`.
    pub fn write<V, R>(
        &mut self,
        generator: &mut Generator<V>,
        rng: &mut R,
    ) -> Result<Summary, ScriptError>
    where
        V: Variant,
        R: Rng + ?Sized,
    {
        if generator.state() != State::NotStarted {
            return Err(ScriptError::AlreadyStarted);
        }

        for command in generator.commands(rng) {
            writeln!(self.out, "{command}")?;
        }
        self.out.flush()?;

        Ok(generator.summary())
    }

    /// Unwraps the underlying sink, flushing whatever is still buffered.
    pub fn into_inner(self) -> Result<W, ScriptError> {
        self.out
            .into_inner()
            .map_err(|error| ScriptError::Io(error.into_error()))
    }
}

/// Creates (or truncates) `path` and writes the whole script into it.
pub fn write_file<V, R>(
    path: &Path,
    generator: &mut Generator<V>,
    rng: &mut R,
) -> Result<Summary, ScriptError>
where
    V: Variant,
    R: Rng + ?Sized,
{
    let mut script = Script::new(File::create(path)?);
    let summary = script.write(generator, rng)?;
    info!(
        "wrote {} order(s) and {} cancel(s) to {}",
        summary.created,
        summary.cancelled,
        path.display()
    );

    Ok(summary)
}

/// Renders the whole script in memory.
pub fn render<V, R>(
    generator: &mut Generator<V>,
    rng: &mut R,
) -> Result<String, ScriptError>
where
    V: Variant,
    R: Rng + ?Sized,
{
    let mut script = Script::new(Vec::new());
    script.write(generator, rng)?;
    let bytes = script.into_inner()?;

    Ok(String::from_utf8(bytes)?)
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("script generation already started")]
    AlreadyStarted,
    #[error("script is not valid UTF-8")]
    Encoding(#[from] FromUtf8Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
