/*!
# IO

Utilities for reading and writing multigraphs as plain adjacency matrices.

## Format

The input is a sequence of whitespace-separated integers; line breaks carry no meaning.
- The first integer is the number of nodes `n` which must be positive.
- It is followed by the `n * n` entries of the adjacency matrix in row-major order.

```text
3
0 1 1
1 0 1
1 1 0
```

Several graphs may follow each other in the same stream, see [`MatrixReader::graphs`].
Writing produces `n` lines of `n` space-separated integers, optionally preceded by `n` so that
the output can be read again.

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by readers and writers,
- [`MatrixRead`] and [`MatrixWrite`] provide shorthands with default settings on the graphs.
*/

pub mod matrix;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Write},
    path::Path,
};

use crate::{error::GraphError, prelude::*};

pub use matrix::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns [`GraphError::Io`] if the input is not a sequence of integers or ends
    /// prematurely, and any other [`GraphError`] if the parsed graph violates an invariant of `G`.
    fn try_read_graph<R>(&self, reader: R) -> Result<G, GraphError>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G, GraphError>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
///
/// This trait provides both a low-level method to write to any
/// [`Write`] instance and a convenience wrapper to write directly
/// to files.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> std::io::Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> std::io::Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning an IO-error early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info).into());
        }
    };
}

/// Tries to parse the next token of a [`Tokens`] stream and returns early if it fails
macro_rules! parse_next_value {
    ($tokens : expr, $name : expr) => {{
        let Some(token) = $tokens.next().transpose()? else {
            return Err(io_error!(
                ErrorKind::UnexpectedEof,
                format!("Premature end of input when parsing {}.", $name)
            )
            .into());
        };

        match token.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("Invalid value {token:?} found. Cannot parse {}.", $name)
                )
                .into());
            }
        }
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;
