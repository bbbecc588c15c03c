//! Network description: named locations and the roads between them.
//!
//! A [`NetworkConfig`] is plain data (serde) that turns into a [`Graph`]
//! through [`NetworkConfig::build_graph`]; road weights come from
//! [`road_weight`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::models::{road_weight, Graph, GraphBuilder};

/// A named location with geographic coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique label, used as the node label.
    pub name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Optional human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Location {
    /// Creates a location.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            description: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A two-way road between two locations with its raw measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    /// One endpoint.
    pub from: String,
    /// The other endpoint.
    pub to: String,
    /// Length in kilometers.
    pub distance: f64,
    /// Travel time in minutes.
    pub time: f64,
    /// Fuel consumption in liters per 100 km.
    pub consumption: f64,
}

impl Road {
    /// Creates a road.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        distance: f64,
        time: f64,
        consumption: f64,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
            time,
            consumption,
        }
    }

    /// Edge weight derived from distance, time, and consumption.
    pub fn weight(&self) -> f64 {
        road_weight(self.distance, self.time, self.consumption)
    }
}

/// Locations and roads of a network.
///
/// # Examples
///
/// ```
/// use road_graph::config::NetworkConfig;
///
/// let json = r#"{
///     "locations": [
///         { "name": "H", "latitude": 41.0, "longitude": -8.0 },
///         { "name": "P", "latitude": 41.1, "longitude": -8.1 }
///     ],
///     "roads": [
///         { "from": "H", "to": "P", "distance": 5.0, "time": 10.0, "consumption": 6.0 }
///     ]
/// }"#;
/// let config = NetworkConfig::from_json_str(json).unwrap();
/// let graph = config.build_graph().unwrap();
/// assert_eq!(graph.num_edges(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Locations in the order they become nodes.
    pub locations: Vec<Location>,
    /// Roads between locations.
    #[serde(default)]
    pub roads: Vec<Road>,
}

impl NetworkConfig {
    /// Parses a network description from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a network description from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&text)?;
        info!(
            path = %path.as_ref().display(),
            locations = config.locations.len(),
            roads = config.roads.len(),
            "network loaded"
        );
        Ok(config)
    }

    /// Serializes the description as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds the graph: one node per location, one edge per road.
    ///
    /// Fails on duplicate locations and on roads rejected by
    /// [`GraphBuilder::add_edge`].
    pub fn build_graph(&self) -> Result<Graph> {
        let mut builder = GraphBuilder::new();
        for location in &self.locations {
            builder.add_node(location.name.as_str())?;
        }
        for road in &self.roads {
            builder.add_edge(&road.from, &road.to, road.weight())?;
        }
        Ok(builder.build())
    }

    /// The sample network: a hotel (`A1`) and six monuments (`M1`–`M6`).
    pub fn sample() -> Self {
        let locations = vec![
            Location::new("A1", 41.320855, -8.145473).with_description("4615 Hotel"),
            Location::new("M1", 41.343831, -8.248757)
                .with_description("Igreja de São Vicente de Sousa"),
            Location::new("M2", 41.312157, -8.236581)
                .with_description("Igreja do Salvador de Unhão"),
            Location::new("M3", 41.314833, -8.198791)
                .with_description("Igreja de Santa Maria de Airães"),
            Location::new("M4", 41.304822, -8.181841)
                .with_description("Igreja de São Mamede de Vila Verde"),
            Location::new("M5", 41.279507, -8.253011)
                .with_description("Igreja do Salvador de Aveleda"),
            Location::new("M6", 41.382566, -8.225727)
                .with_description("Mosteiro de Santa Maria de Pombeiro"),
        ];
        let roads = vec![
            Road::new("A1", "M3", 5.5, 8.0, 8.5),
            Road::new("A1", "M4", 5.1, 7.0, 6.8),
            Road::new("A1", "M6", 12.5, 17.0, 7.0),
            Road::new("M6", "M1", 7.7, 12.0, 6.7),
            Road::new("M6", "M2", 10.9, 14.0, 4.8),
            Road::new("M6", "M3", 11.2, 14.0, 9.2),
            Road::new("M1", "M3", 8.3, 13.0, 5.5),
            Road::new("M1", "M2", 5.6, 8.0, 5.2),
            Road::new("M2", "M3", 5.4, 8.0, 7.1),
            Road::new("M2", "M5", 6.0, 8.0, 5.9),
            Road::new("M5", "M3", 7.5, 11.0, 5.3),
            Road::new("M5", "M4", 11.2, 14.0, 7.5),
            Road::new("M4", "M3", 3.6, 6.0, 6.3),
        ];
        Self { locations, roads }
    }
}
