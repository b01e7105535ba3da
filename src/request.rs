//! Boundary layer: parsing a route query from the text input format.
//!
//! The format is line-oriented: a header of `num_vertices num_edges`, one
//! `from to weight` line per directed edge, and a final `source destination
//! k` query line. Vertex identifiers are opaque string labels.

use ordered_float::OrderedFloat;
use std::fs;
use std::path::Path;

use crate::graph::{Graph, MutableGraph};
use crate::{Error, Network, Result};

/// Edge weight type used at the input boundary
pub type Weight = OrderedFloat<f64>;

/// A validated request: the constructed network plus the query parameters
#[derive(Debug, Clone)]
pub struct RouteRequest {
    /// The constructed network
    pub network: Network<String, Weight>,

    /// Vertex count declared in the header
    pub vertex_count: usize,

    /// Edge count declared in the header
    pub edge_count: usize,

    /// Source vertex label
    pub source: String,

    /// Destination vertex label
    pub destination: String,

    /// Number of paths requested
    pub k: usize,
}

impl RouteRequest {
    /// Reads and parses a request from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parses a request from text input
    pub fn parse(input: &str) -> Result<Self> {
        let lines: Vec<&str> = input.lines().filter(|line| !line.trim().is_empty()).collect();

        let (header, rest) = lines
            .split_first()
            .ok_or_else(|| Error::MalformedInput("empty input".to_string()))?;
        let (vertex_count, edge_count) = parse_header(header)?;

        let (query, edge_lines) = rest
            .split_last()
            .ok_or_else(|| Error::MalformedInput("missing query line".to_string()))?;

        let mut network = Network::with_capacity(vertex_count);
        for line in edge_lines {
            let (from, to, weight) = parse_edge(line)?;
            network.add_edge(from, to, weight);
        }

        let (source, destination, k) = parse_query(query)?;
        if k < 1 {
            return Err(Error::InvalidPathCount);
        }
        if !network.has_vertex(&source) {
            return Err(Error::SourceNotFound(source));
        }
        if !network.has_vertex(&destination) {
            return Err(Error::DestinationNotFound(destination));
        }

        Ok(RouteRequest {
            network,
            vertex_count,
            edge_count,
            source,
            destination,
            k,
        })
    }
}

fn parse_header(line: &str) -> Result<(usize, usize)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(Error::MalformedInput(format!(
            "expected 'num_vertices num_edges' header, got '{}'",
            line
        )));
    }
    let vertices = parse_count(tokens[0], "vertex count")?;
    let edges = parse_count(tokens[1], "edge count")?;
    Ok((vertices, edges))
}

fn parse_edge(line: &str) -> Result<(String, String, Weight)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(Error::MalformedInput(format!(
            "expected 'from to weight' edge line, got '{}'",
            line
        )));
    }
    let weight: f64 = tokens[2].parse().map_err(|_| {
        Error::MalformedInput(format!("invalid edge weight '{}'", tokens[2]))
    })?;
    if weight < 0.0 {
        return Err(Error::NegativeWeight(weight));
    }
    Ok((tokens[0].to_string(), tokens[1].to_string(), OrderedFloat(weight)))
}

fn parse_query(line: &str) -> Result<(String, String, usize)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(Error::MalformedInput(format!(
            "expected 'source destination k' query line, got '{}'",
            line
        )));
    }
    let k = parse_count(tokens[2], "path count")?;
    Ok((tokens[0].to_string(), tokens[1].to_string(), k))
}

fn parse_count(token: &str, what: &str) -> Result<usize> {
    token
        .parse()
        .map_err(|_| Error::MalformedInput(format!("invalid {} '{}'", what, token)))
}
