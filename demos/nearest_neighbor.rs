//! Example demonstrating nearest-neighbor queries against a KD-tree.
//!
//! Builds a small 2D index, runs a few queries, and prints how much of the
//! tree each query actually had to examine.

use kd_index::kdtree::{KDTree, KDTreeBuilder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() {
    println!("=== Nearest-Neighbor Search Example ===\n");

    println!("1. Small 2D point set:");
    small_2d_example();

    println!("\n2. Random 3D point set:");
    random_3d_example();
}

fn small_2d_example() {
    let points = vec![
        vec![2.0, 3.0],
        vec![5.0, 4.0],
        vec![9.0, 6.0],
        vec![4.0, 7.0],
        vec![8.0, 1.0],
        vec![7.0, 2.0],
    ];

    let mut builder = KDTreeBuilder::new(2);
    for point in &points {
        builder.add(point).unwrap();
    }
    let tree = builder.finish();

    for query in [[9.0, 2.0], [0.0, 0.0], [5.0, 5.0]] {
        let nearest = tree.nearest(&query).unwrap();
        println!(
            "  query {:?} -> nearest {:?}, distance {:.4}, visited {}/{} nodes",
            query,
            nearest.point.unwrap(),
            nearest.distance,
            nearest.nodes_visited,
            tree.num_items(),
        );
    }
}

fn random_3d_example() {
    let mut rng = StdRng::seed_from_u64(42);
    let points: Vec<Vec<f64>> = (0..10_000)
        .map(|_| (0..3).map(|_| rng.gen_range(0.0..100.0)).collect())
        .collect();

    let tree = KDTree::from_points(&points).unwrap();

    let query = [50.0, 50.0, 50.0];
    let nearest = tree.nearest(&query).unwrap();
    println!(
        "  query {:?} -> nearest {:?}, distance {:.4}",
        query,
        nearest.point.unwrap(),
        nearest.distance,
    );
    println!(
        "  visited {} of {} nodes ({:.1}%)",
        nearest.nodes_visited,
        tree.num_items(),
        100.0 * nearest.nodes_visited as f64 / tree.num_items() as f64,
    );
}
