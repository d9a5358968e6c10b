//! Seed dataset loading.
//!
//! The graph is built once at startup from a seed network: either a JSON
//! file supplied by the operator, or the built-in Accra network.

use std::path::Path;

use crate::domain::{RouteStep, SeedNetwork, SeedRoute, Stop};

/// Errors that can occur when loading a seed dataset.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Could not read the seed file
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    /// The seed file is not valid JSON in the expected shape
    #[error("failed to parse seed file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load a seed network from a JSON file.
pub fn load_network(path: impl AsRef<Path>) -> Result<SeedNetwork, SeedError> {
    let text = std::fs::read_to_string(path)?;
    let network = serde_json::from_str(&text)?;
    Ok(network)
}

/// The built-in Accra trotro network.
///
/// Stations and fares for the central Accra corridors, used when no seed
/// file is configured and as a realistic fixture in tests.
pub fn accra_network() -> SeedNetwork {
    let circle = Stop::new("circle", "Kwame Nkrumah Circle", (5.5560, -0.2057));
    let achimota = Stop::new("achimota", "Achimota New Station", (5.6128, -0.2222));
    let madina = Stop::new("madina", "Madina Zongo Junction", (5.6675, -0.1659));
    let accra = Stop::new("accra", "Accra Tema Station", (5.5458, -0.2051));
    let kaneshie = Stop::new("kaneshie", "Kaneshie Market", (5.5658, -0.2319));
    let lapaz = Stop::new("lapaz", "Lapaz Remote Station", (5.5925, -0.2378));
    let military = Stop::new("37", "37 Military Hospital", (5.5874, -0.1837));
    let osu = Stop::new("osu", "Osu Oxford Street", (5.5560, -0.1760));
    let tema = Stop::new("tema", "Tema Station", (5.6667, 0.0000));
    let spintex = Stop::new("spintex", "Spintex Coca-Cola", (5.6300, -0.1200));

    let step = |from: &Stop, to: &Stop, fare: f64, duration: &str, description: &str| RouteStep {
        from: from.clone(),
        to: to.clone(),
        fare,
        duration: duration.to_string(),
        description: description.to_string(),
    };

    let routes = vec![
        SeedRoute {
            id: "r1".to_string(),
            total_fare: 15.00,
            total_duration: "45 mins".to_string(),
            steps: vec![step(
                &circle,
                &madina,
                15.00,
                "45 mins",
                "Take a direct trotro from the Overheads station heading to Madina.",
            )],
        },
        SeedRoute {
            id: "r2".to_string(),
            total_fare: 12.50,
            total_duration: "30 mins".to_string(),
            steps: vec![
                step(&achimota, &circle, 8.00, "20 mins", "Board a \"Circle\" car."),
                step(
                    &circle,
                    &accra,
                    4.50,
                    "10 mins",
                    "Transfer to an Accra-bound vehicle at the Circle station.",
                ),
            ],
        },
        SeedRoute {
            id: "r3".to_string(),
            total_fare: 7.00,
            total_duration: "25 mins".to_string(),
            steps: vec![step(
                &circle,
                &lapaz,
                7.00,
                "25 mins",
                "Board a \"Lapaz\" car under the bridge.",
            )],
        },
        SeedRoute {
            id: "r4".to_string(),
            total_fare: 8.00,
            total_duration: "20 mins".to_string(),
            steps: vec![step(
                &lapaz,
                &kaneshie,
                8.00,
                "20 mins",
                "Take a car from the main highway heading towards Kaneshie.",
            )],
        },
        SeedRoute {
            id: "r5".to_string(),
            total_fare: 10.00,
            total_duration: "25 mins".to_string(),
            steps: vec![step(
                &military,
                &madina,
                10.00,
                "25 mins",
                "Board a Madina car at the 37 Trotro Station.",
            )],
        },
        SeedRoute {
            id: "r6".to_string(),
            total_fare: 5.00,
            total_duration: "15 mins".to_string(),
            steps: vec![step(
                &accra,
                &osu,
                5.00,
                "15 mins",
                "Take a \"Danquah Circle\" or \"Osu\" car.",
            )],
        },
        SeedRoute {
            id: "r7".to_string(),
            total_fare: 22.00,
            total_duration: "1 hr 10 mins".to_string(),
            steps: vec![step(
                &circle,
                &tema,
                22.00,
                "1 hr 10 mins",
                "Board a \"Tema\" bus at the Circle Neoplan Station.",
            )],
        },
    ];

    SeedNetwork {
        stops: vec![
            circle, achimota, madina, accra, kaneshie, lapaz, military, osu, tema, spintex,
        ],
        routes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StopId;
    use crate::graph::RouteGraph;
    use crate::planner::{SearchConfig, find_shortest_path};
    use std::io::Write;

    #[test]
    fn builtin_network_is_consistent() {
        let network = accra_network();
        assert_eq!(network.stops.len(), 10);
        assert_eq!(network.routes.len(), 7);

        // Every step endpoint is pre-registered
        for route in &network.routes {
            for step in &route.steps {
                assert!(network.stops.iter().any(|s| s.id == step.from.id));
                assert!(network.stops.iter().any(|s| s.id == step.to.id));
            }
        }

        // Totals match their steps
        for route in &network.routes {
            let sum: f64 = route.steps.iter().map(|s| s.fare).sum();
            assert!((route.total_fare - sum).abs() < 1e-9, "route {}", route.id);
        }
    }

    #[test]
    fn builtin_network_plans_a_known_route() {
        let graph = RouteGraph::from_seed(&accra_network());

        // achimota -> osu goes via circle and accra
        let result = find_shortest_path(
            &graph,
            &StopId::new("achimota"),
            &StopId::new("osu"),
            &SearchConfig::default(),
        )
        .unwrap();

        assert_eq!(result.leg_count(), 3);
        assert_eq!(result.total_fare, 8.00 + 4.50 + 5.00);
    }

    #[test]
    fn load_network_roundtrip() {
        let network = accra_network();
        let json = serde_json::to_string_pretty(&network).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = load_network(file.path()).unwrap();
        assert_eq!(loaded.stops.len(), network.stops.len());
        assert_eq!(loaded.routes.len(), network.routes.len());
        assert_eq!(loaded.routes[0].steps[0].description, network.routes[0].steps[0].description);
    }

    #[test]
    fn load_network_missing_file() {
        let err = load_network("/nonexistent/seed.json").unwrap_err();
        assert!(matches!(err, SeedError::Io(_)));
    }

    #[test]
    fn load_network_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = load_network(file.path()).unwrap_err();
        assert!(matches!(err, SeedError::Json(_)));
    }
}
