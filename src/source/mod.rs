//! Delimited-text loaders for nodes and vehicles.
//!
//! Files are header-less and read positionally. Node rows are `x,y` with an
//! optional trailing `demand`; vehicle rows are `id,capacity`. Indexed node
//! files, with rows `id,x,y`, go through [`read_indexed_nodes`]. Error
//! messages number lines from 1.
//!
//! ```text
//! 41,49,10
//! 35,17,7
//! 40,50,0
//! ```

use std::io::Read;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::RoutingError;
use crate::models::{Instance, Node, Vehicle};

#[derive(Debug, Deserialize)]
struct NodeRecord {
    x: f64,
    y: f64,
    #[serde(default)]
    demand: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct IndexedNodeRecord {
    id: usize,
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
struct VehicleRecord {
    id: usize,
    capacity: f64,
}

fn reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input)
}

fn parse_error(row: usize, err: csv::Error) -> RoutingError {
    if let csv::ErrorKind::Io(_) = err.kind() {
        return RoutingError::Csv(err);
    }
    let line = err
        .position()
        .map_or(row + 1, |pos| pos.line() as usize);
    RoutingError::Parse {
        line,
        reason: err.to_string(),
    }
}

fn read_records<R: Read, T: DeserializeOwned>(input: R) -> Result<Vec<T>, RoutingError> {
    let mut rdr = reader(input);
    let mut records = Vec::new();
    for (row, record) in rdr.deserialize::<T>().enumerate() {
        records.push(record.map_err(|e| parse_error(row, e))?);
    }
    Ok(records)
}

/// Reads `x,y[,demand]` rows in file order; a missing demand reads as zero.
///
/// Node ids follow the row index.
pub fn read_nodes<R: Read>(input: R) -> Result<Vec<Node>, RoutingError> {
    let records: Vec<NodeRecord> = read_records(input)?;
    Ok(records
        .into_iter()
        .enumerate()
        .map(|(row, r)| Node::new(row, r.x, r.y).with_demand(r.demand.unwrap_or(0.0)))
        .collect())
}

/// Reads `id,x,y` rows, keeping the id from the first column.
pub fn read_indexed_nodes<R: Read>(input: R) -> Result<Vec<Node>, RoutingError> {
    let records: Vec<IndexedNodeRecord> = read_records(input)?;
    Ok(records
        .into_iter()
        .map(|r| Node::new(r.id, r.x, r.y))
        .collect())
}

/// Reads `id,capacity` rows in file order.
pub fn read_vehicles<R: Read>(input: R) -> Result<Vec<Vehicle>, RoutingError> {
    let records: Vec<VehicleRecord> = read_records(input)?;
    Ok(records
        .into_iter()
        .map(|r| Vehicle::new(r.id, r.capacity))
        .collect())
}

/// Reads a TSP instance from `x,y` rows.
pub fn read_tsp<R: Read>(nodes: R) -> Result<Instance, RoutingError> {
    Instance::tsp(read_nodes(nodes)?)
}

/// Reads a CVRP instance whose depot is the last row of the node file.
pub fn read_cvrp<N: Read, V: Read>(nodes: N, vehicles: V) -> Result<Instance, RoutingError> {
    let mut nodes = read_nodes(nodes)?;
    let depot = nodes.pop().ok_or(RoutingError::NoNodes)?;
    Instance::cvrp(depot, nodes, read_vehicles(vehicles)?)
}
