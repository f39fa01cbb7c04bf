//! Demonstration of AR placement transforms and the reverse mapping

use geopose::{
    GeoCoordinate, GeoPoint, GeodeticSolver, LocationService, ObjectData, ObjectRegistry,
    TransformBuilder,
};
use nalgebra::Matrix4;

fn main() {
    println!("=== Geographic Pose - Placement Demo ===\n");

    let solver = GeodeticSolver::new();
    let builder = TransformBuilder::new();

    // The platform feed would drive this; here we push one fix by hand
    let service = LocationService::new();
    service.start();
    service.publish_location(GeoPoint::from_coordinate(GeoCoordinate {
        latitude: 35.6895,
        longitude: 139.6917,
    }));
    let viewer = service.snapshot().coordinate_or_default();
    println!("Viewer at {}\n", viewer);

    let mut registry = ObjectRegistry::new();
    let anchor_matrix = Matrix4::identity();

    println!("1. Placing objects around the viewer:");
    for (label, distance, bearing) in [
        ("north-object", 40.0, 0.0),
        ("east-object", 75.0, 90.0),
        ("far-object", 1_500.0, 225.0),
    ] {
        let target = match solver.direct(&viewer, distance, bearing) {
            Ok(coordinate) => coordinate,
            Err(error) => {
                println!("   {} solve failed: {}", label, error);
                continue;
            }
        };

        match builder.build_placement_transform(&anchor_matrix, &viewer, &target) {
            Ok(transform) => {
                let node = registry.insert(ObjectData {
                    coordinate: target,
                    model: label.to_string(),
                    user_id: "demo".to_string(),
                });
                println!(
                    "   node {:>2}  {}  world translation ({:8.2}, {:5.2}, {:8.2})",
                    node.raw(),
                    target,
                    transform[(0, 3)],
                    transform[(1, 3)],
                    transform[(2, 3)],
                );
            }
            Err(error) => println!("   {} placement failed: {}", label, error),
        }
    }

    println!("\n2. Reverse mapping a placed offset:");
    if let Ok(target) = solver.direct(&viewer, 120.0, 60.0) {
        let transform = builder
            .build_placement_transform(&anchor_matrix, &viewer, &target)
            .expect("placement");
        let offset = builder.placement_offset(&transform).expect("offset");
        let located = builder
            .locate_from_offset(&anchor_matrix, &viewer, &offset)
            .expect("reverse mapping");

        println!("   placed at  {}", target);
        println!("   recovered  {}", located);
        if let Ok(error) = solver.inverse(&target, &located) {
            println!("   round-trip error {:.4} m", error.distance_m);
        }
    }

    println!("\n3. Registry holds {} placed objects", registry.len());
    for (node, data) in registry.iter() {
        println!("   node {:>2} -> {} at {}", node.raw(), data.model, data.coordinate);
    }

    service.stop();
}
