//! Demonstration driver for the spatial index.
//!
//! Populates the tree with random shapes, runs one of each public
//! operation with wall-time measurements, and writes the introspection
//! JSON to `rtree_dump.json`. Build with `--features demo`.

use std::error::Error;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spindex::{Coordinate, MemRTree, Record, Shape};

const COUNT: u64 = 1000;
const DUMP_PATH: &str = "rtree_dump.json";

fn random_shape(rng: &mut StdRng) -> Shape {
    let x = rng.gen_range(0.0..1000.0);
    let y = rng.gen_range(0.0..1000.0);
    match rng.gen_range(0..3) {
        0 => {
            let w = rng.gen_range(0.5..40.0);
            let h = rng.gen_range(0.5..40.0);
            Shape::rect(x, y, x + w, y + h)
        }
        1 => Shape::disk(x, y, rng.gen_range(0.5..20.0)),
        _ => {
            let w = rng.gen_range(1.0..30.0);
            let h = rng.gen_range(1.0..30.0);
            Shape::polygon(vec![
                Coordinate::new(x, y),
                Coordinate::new(x + w, y),
                Coordinate::new(x + w / 2.0, y + h),
            ])
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(0xca11ab1e);
    let mut tree = MemRTree::new();

    let start = Instant::now();
    for id in 0..COUNT {
        tree.insert(Record::new(id, format!("shape-{}", id)), random_shape(&mut rng));
    }
    println!("inserted {} shapes in {:?}", COUNT, start.elapsed());

    let region = Shape::rect(200.0, 200.0, 400.0, 400.0);
    let start = Instant::now();
    let hits = tree.search(&region);
    println!("region search hit {} records in {:?}", hits.len(), start.elapsed());

    let probe = COUNT / 2;
    let start = Instant::now();
    let found = tree.search_by_id(probe);
    println!(
        "id lookup for #{} -> {} in {:?}",
        probe,
        found.map(|r| r.name.as_str()).unwrap_or("<absent>"),
        start.elapsed()
    );

    let start = Instant::now();
    let deleted = tree.delete_by_id(probe);
    println!("delete #{} -> {} in {:?}", probe, deleted, start.elapsed());

    let target = probe + 1;
    let start = Instant::now();
    let updated = tree.update_by_id(target, Shape::disk(500.0, 500.0, 100.0));
    println!("update #{} -> {} in {:?}", target, updated, start.elapsed());

    let stats = tree.stats();
    println!(
        "tree: {} records across {} nodes, height {}",
        stats.total_entries, stats.node_count, stats.tree_height
    );

    let json = tree.to_json()?;
    std::fs::write(DUMP_PATH, &json)?;
    println!("wrote introspection dump to {}", DUMP_PATH);

    Ok(())
}
