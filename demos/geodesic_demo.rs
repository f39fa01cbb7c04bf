//! Demonstration of the inverse and direct geodesic solvers

use geopose::{Ellipsoid, GeoCoordinate, GeodeticSolver, SolveReport};

fn main() {
    println!("=== Geographic Pose - Geodesic Demo ===\n");

    let solver = GeodeticSolver::new();

    let tokyo = GeoCoordinate {
        latitude: 35.6895,
        longitude: 139.6917,
    };
    let osaka = GeoCoordinate {
        latitude: 34.6937,
        longitude: 135.5023,
    };

    demonstrate_inverse(&solver, tokyo, osaka);
    demonstrate_direct(&solver, tokyo);
    demonstrate_failure_reporting(&solver);
}

fn demonstrate_inverse(solver: &GeodeticSolver, tokyo: GeoCoordinate, osaka: GeoCoordinate) {
    println!("1. Inverse solve (Tokyo -> Osaka):");

    match solver.inverse(&tokyo, &osaka) {
        Ok(result) => {
            let report = SolveReport::new(tokyo, osaka, result, Ellipsoid::wgs84());
            for line in report.to_text().lines() {
                println!("   {}", line);
            }
            println!();
            println!("   As JSON:");
            match report.to_json() {
                Ok(json) => println!("{}", json),
                Err(error) => println!("   serialization failed: {}", error),
            }
        }
        Err(error) => println!("   solve failed: {}", error),
    }
    println!();
}

fn demonstrate_direct(solver: &GeodeticSolver, start: GeoCoordinate) {
    println!("2. Direct solve (walk 5 km from Tokyo):");

    for bearing in [0.0, 90.0, 180.0, 270.0] {
        match solver.direct(&start, 5_000.0, bearing) {
            Ok(destination) => println!("   bearing {:>5.1}° -> {}", bearing, destination),
            Err(error) => println!("   bearing {:>5.1}° failed: {}", bearing, error),
        }
    }
    println!();
}

fn demonstrate_failure_reporting(solver: &GeodeticSolver) {
    println!("3. Failure reporting:");

    let origin = GeoCoordinate {
        latitude: 0.0,
        longitude: 0.0,
    };
    let near_antipode = GeoCoordinate {
        latitude: 0.0,
        longitude: 179.9,
    };
    match solver.inverse(&origin, &near_antipode) {
        Ok(result) => println!("   converged anyway: {:.0} m", result.distance_m),
        Err(error) => println!("   {}", error),
    }

    let invalid = GeoCoordinate {
        latitude: 95.0,
        longitude: 0.0,
    };
    match solver.inverse(&origin, &invalid) {
        Ok(_) => println!("   unexpected success"),
        Err(error) => println!("   {}", error),
    }
}
