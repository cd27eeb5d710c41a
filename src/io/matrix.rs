/*!
# Adjacency Matrices

Readers and writers for multigraphs given as a vertex count followed by a dense adjacency matrix.

# Examples

## Reading a graph
```
use ueuler::{prelude::*, algo::*, io::*};
use std::io::Cursor;

let data = b"3\n0 1 1\n1 0 1\n1 1 0\n";
let graph: EulerGraph = MatrixReader::new().try_read_graph(Cursor::new(&data[..])).unwrap();

assert_eq!(graph.number_of_nodes(), 3);
assert_eq!(graph.number_of_edges(), 3);
```

## Reading many graphs
```
use ueuler::{prelude::*, io::*};
use std::io::Cursor;

let data = b"1 2   2 0 1 2 0   1 -1   1 0";
let graphs: Vec<Result<MultiGraph, _>> = MatrixReader::new().graphs(Cursor::new(&data[..])).collect();

assert_eq!(graphs.len(), 4);
assert!(graphs[0].is_ok());
assert!(graphs[1].is_err()); // not symmetric
assert!(graphs[2].is_err()); // negative entry
assert!(graphs[3].is_ok());
```

## Writing a graph
```
use ueuler::{prelude::*, io::*};

let graph = MultiGraph::try_from_rows([[0, 2], [2, 1]]).unwrap();

let mut buffer = Vec::new();
graph.try_write_matrix(&mut buffer).unwrap();
assert_eq!(String::from_utf8(buffer).unwrap(), "2\n0 2\n2 1\n");
```
*/

use std::{io::Lines, marker::PhantomData};

use itertools::Itertools;
use tracing::trace;

use super::*;

/// Whitespace-separated tokens of a buffered reader, regardless of line breaks
pub struct Tokens<R> {
    lines: Lines<R>,
    /// Remaining tokens of the current line in reverse order
    pending: Vec<String>,
}

impl<R> Tokens<R>
where
    R: BufRead,
{
    /// Creates a token stream over `reader`
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            pending: Vec::new(),
        }
    }

    /// Returns *true* if at least one more token can be read.
    ///
    /// # Errors
    /// Propagates errors of the underlying reader.
    pub fn has_next(&mut self) -> std::io::Result<bool> {
        while self.pending.is_empty() {
            match self.lines.next() {
                None => return Ok(false),
                Some(line) => {
                    self.pending = line?.split_whitespace().rev().map(String::from).collect();
                }
            }
        }
        Ok(true)
    }
}

impl<R> Iterator for Tokens<R>
where
    R: BufRead,
{
    type Item = std::io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.has_next() {
            Ok(true) => self.pending.pop().map(Ok),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// A reader for the adjacency matrix format.
///
/// The matrix is always read completely (all `n * n` entries) before it is validated. Thus a
/// graph that is rejected for a negative entry, an asymmetry, or by the invariants of the target
/// graph type leaves the stream right behind its last entry, and the next graph can be read.
#[derive(Debug, Copy, Clone, Default)]
pub struct MatrixReader;

impl MatrixReader {
    /// Creates a new [`MatrixReader`]
    pub fn new() -> Self {
        Self
    }

    /// Reads the next graph from a token stream.
    ///
    /// # Errors
    /// - [`GraphError::NonPositiveVertexCount`] if the vertex count is not positive,
    /// - [`GraphError::NegativeEdgeCount`] naming the first negative entry in row-major order,
    /// - [`GraphError::Io`] of kind [`ErrorKind::InvalidData`] for tokens that are not integers
    ///   (or too large), of kind [`ErrorKind::UnexpectedEof`] if the input ends prematurely,
    /// - whatever [`GraphFromMatrix::try_from_matrix`] reports for `G`.
    pub fn try_read_from_tokens<G, R>(&self, tokens: &mut Tokens<R>) -> Result<G, GraphError>
    where
        G: GraphFromMatrix,
        R: BufRead,
    {
        let n: i64 = parse_next_value!(tokens, "number of vertices");
        if n <= 0 {
            return Err(GraphError::NonPositiveVertexCount);
        }
        raise_error_unless!(
            n < NumNodes::MAX as i64,
            ErrorKind::InvalidData,
            format!("Number of vertices {n} is too large.")
        );
        let n = n as NumNodes;

        let mut entries: Vec<Multiplicity> = Vec::new();
        let mut first_negative = None;
        for u in 0..n {
            for v in 0..n {
                let m: i64 = parse_next_value!(tokens, format!("entry {u},{v}"));
                raise_error_unless!(
                    m <= Multiplicity::MAX as i64,
                    ErrorKind::InvalidData,
                    format!("Entry {u},{v} is too large.")
                );

                if m < 0 {
                    first_negative.get_or_insert(Edge(u, v));
                }
                entries.push(m.max(0) as Multiplicity);
            }
        }

        if let Some(Edge(u, v)) = first_negative {
            return Err(GraphError::NegativeEdgeCount { u, v });
        }

        trace!(nodes = n, "read adjacency matrix");
        G::try_from_matrix(EdgeMatrix::from_rows(
            entries.chunks_exact(n.idx()).map(|row| row.iter().copied()),
        ))
    }

    /// Returns an iterator over all graphs in `reader`, one `Result` per graph.
    ///
    /// Graphs that fail validation are reported and reading continues with the next graph.
    /// After a [`GraphError::Io`] the position in the stream is unknown and the iterator ends.
    pub fn graphs<G, R>(&self, reader: R) -> Graphs<G, R>
    where
        G: GraphFromMatrix,
        R: BufRead,
    {
        Graphs {
            reader: *self,
            tokens: Tokens::new(reader),
            failed: false,
            _graph: PhantomData,
        }
    }
}

impl<G> GraphReader<G> for MatrixReader
where
    G: GraphFromMatrix,
{
    /// Reads the first graph of `reader`; trailing input is ignored
    fn try_read_graph<R>(&self, reader: R) -> Result<G, GraphError>
    where
        R: BufRead,
    {
        self.try_read_from_tokens(&mut Tokens::new(reader))
    }
}

/// Iterator over consecutive graphs of a stream, see [`MatrixReader::graphs`]
pub struct Graphs<G, R> {
    reader: MatrixReader,
    tokens: Tokens<R>,
    failed: bool,
    _graph: PhantomData<fn() -> G>,
}

impl<G, R> Iterator for Graphs<G, R>
where
    G: GraphFromMatrix,
    R: BufRead,
{
    type Item = Result<G, GraphError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.tokens.has_next() {
            Ok(false) => return None,
            Ok(true) => {}
            Err(e) => {
                self.failed = true;
                return Some(Err(e.into()));
            }
        }

        let result = self.reader.try_read_from_tokens(&mut self.tokens);
        self.failed = matches!(result, Err(GraphError::Io(_)));
        Some(result)
    }
}

/// Trait for creating graphs from the adjacency matrix format.
///
/// Provides shorthand methods for reading graphs using the default [`MatrixReader`] settings.
pub trait MatrixRead: Sized {
    /// Tries to read a graph from a given buffered reader.
    ///
    /// # Errors
    /// See [`MatrixReader::try_read_from_tokens`].
    fn try_read_matrix<R>(reader: R) -> Result<Self, GraphError>
    where
        R: BufRead;

    /// Tries to read a graph from a file on disk.
    ///
    /// # Errors
    /// Returns an error if the file does not exist or does not hold a valid graph.
    fn try_read_matrix_file<P>(path: P) -> Result<Self, GraphError>
    where
        P: AsRef<Path>,
    {
        Self::try_read_matrix(BufReader::new(File::open(path)?))
    }
}

impl<G> MatrixRead for G
where
    G: GraphFromMatrix,
{
    fn try_read_matrix<R>(reader: R) -> Result<Self, GraphError>
    where
        R: BufRead,
    {
        MatrixReader::new().try_read_graph(reader)
    }
}

/// A writer for exporting graphs as adjacency matrices.
#[derive(Debug, Copy, Clone)]
pub struct MatrixWriter {
    with_vertex_count: bool,
}

impl Default for MatrixWriter {
    /// Default to output that [`MatrixReader`] can read again
    fn default() -> Self {
        Self {
            with_vertex_count: true,
        }
    }
}

impl MatrixWriter {
    /// Creates a new [`MatrixWriter`] that precedes the matrix by the number of nodes
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the number of nodes is written in a line before the matrix
    pub fn set_vertex_count(&mut self, with_vertex_count: bool) {
        self.with_vertex_count = with_vertex_count;
    }

    /// Updates whether the number of nodes is written, consuming and returning `self` for chaining.
    ///
    /// # Example
    /// ```
    /// use ueuler::{prelude::*, io::*};
    ///
    /// let graph = MultiGraph::try_from_rows([[1]]).unwrap();
    ///
    /// let mut buffer = Vec::new();
    /// MatrixWriter::new()
    ///     .with_vertex_count(false)
    ///     .try_write_graph(&graph, &mut buffer)
    ///     .unwrap();
    /// assert_eq!(buffer, b"1\n");
    /// ```
    pub fn with_vertex_count(mut self, with_vertex_count: bool) -> Self {
        self.set_vertex_count(with_vertex_count);
        self
    }
}

impl<G> GraphWriter<G> for MatrixWriter
where
    G: AdjacencyMatrix,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> std::io::Result<()> {
        if self.with_vertex_count {
            writeln!(writer, "{}", graph.number_of_nodes())?;
        }

        for row in graph.edge_matrix().rows() {
            writeln!(writer, "{}", row.iter().join(" "))?;
        }

        Ok(())
    }
}

/// Trait for writing a graph as an adjacency matrix.
///
/// Provides shorthand methods for writing graphs using the default [`MatrixWriter`] settings.
pub trait MatrixWrite {
    /// Writes the graph to the given writer.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_matrix<W>(&self, writer: W) -> std::io::Result<()>
    where
        W: Write;

    /// Writes the graph to a file on disk.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or writing fails.
    fn try_write_matrix_file<P>(&self, path: P) -> std::io::Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_matrix(BufWriter::new(File::create(path)?))
    }
}

impl<G> MatrixWrite for G
where
    G: AdjacencyMatrix,
{
    fn try_write_matrix<W>(&self, writer: W) -> std::io::Result<()>
    where
        W: Write,
    {
        MatrixWriter::new().try_write_graph(self, writer)
    }
}
