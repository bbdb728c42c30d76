//! `becaps demo` command - straight-line demonstration of both object types.

use anyhow::Context;
use becaps_objects::{Stream, Vector2};
use becaps_runtime::{invoke, Object, Sink};

/// Run the demonstration against the process streams.
pub fn run_stdio() -> anyhow::Result<()> {
    run(&Sink::stdout(), &Sink::stderr())
}

/// Run the demonstration.
///
/// Writes the vector's magnitude and one line of text to `out`, and one
/// line of text to `err`.
pub fn run(out: &Sink, err: &Sink) -> anyhow::Result<()> {
    // Vector2: construct with two parameters, set X and Y, compute magnitude.
    let mut v1 = Object::<Vector2>::new();
    invoke!(v1.init(3.0, 4.0));

    invoke!(v1.set_x(6.0));
    invoke!(v1.set_y(8.0));

    let magnitude = invoke!(v1.magnitude());
    out.write_str(&format!("Magnitude is: {:.6}\n", magnitude))
        .context("writing magnitude")?;

    // Stream: construct without parameters, bind to out/err, write.
    let mut stream = Object::<Stream>::new();
    invoke!(stream.init());
    invoke!(stream.set_file(Some(out.clone())));
    invoke!(stream.write { text: "Writing from stream object!\n".into() })?;

    let mut err_stream = Object::<Stream>::new();
    invoke!(err_stream.init());
    invoke!(err_stream.set_file(Some(err.clone())));
    invoke!(err_stream.write { text: "Error message goes here.\n".into() })?;

    Ok(())
}
