use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};
use path_tree::path::position_path;
use path_tree::validate::bst_path;
use path_tree::{Tree, TreeOps};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::time::Instant;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    /// Breadth-first positions 1..=size
    Perfect,
    /// Shuffled keys placed at their search-tree paths
    Random,
}

#[derive(Parser)]
#[command(name = "path-tree-benchmark")]
#[command(about = "A path tree performance testing tool")]
struct Args {
    #[arg(long, default_value = "1000000")]
    size: usize,

    #[arg(long, value_enum, default_value_t = Shape::Perfect)]
    shape: Shape,

    #[arg(long, default_value = "42")]
    seed: u64,
}

fn main() {
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    info!(
        "Running with {:?} shape and {} node count",
        args.shape, args.size
    );

    let size = args.size;
    let mut tree = Tree::new();
    let mut paths = Vec::with_capacity(size);

    let start = Instant::now();
    match args.shape {
        Shape::Perfect => {
            for position in 1..=size {
                let path = position_path(position);
                tree.insert(position as u64, &path);
                paths.push(path);
            }
        }
        Shape::Random => {
            let mut rng = StdRng::seed_from_u64(args.seed);
            let mut keys: Vec<u64> = (0..size as u64).collect();
            keys.shuffle(&mut rng);
            for key in keys {
                let path = bst_path(&tree, &key);
                tree.insert(key, &path);
                paths.push(path);
            }
        }
    }
    assert_eq!(tree.size(), size);
    let inserted = Instant::now();

    for path in &paths {
        assert!(tree.lookup(path).is_ok());
    }
    let looked_up = Instant::now();

    let mut visited = 0;
    tree.traverse_bfs(|_| visited += 1);
    assert_eq!(visited, size);
    let traversed = Instant::now();

    info!("Tree height is {}", tree.height());

    let drain_start = Instant::now();
    let mut removed = 0;
    while tree.delete(&[]).is_some() {
        removed += 1;
    }
    assert_eq!(removed, size);
    let end = Instant::now();

    info!(
        "Inserts took {} seconds",
        inserted.saturating_duration_since(start).as_secs_f32()
    );
    info!(
        "Lookups took {} seconds",
        looked_up.saturating_duration_since(inserted).as_secs_f32()
    );
    info!(
        "Breadth-first traversal took {} seconds",
        traversed.saturating_duration_since(looked_up).as_secs_f32()
    );
    info!(
        "Draining from the root took {} seconds",
        end.saturating_duration_since(drain_start).as_secs_f32()
    );
    info!(
        "Total {} seconds",
        (traversed.saturating_duration_since(start) + end.saturating_duration_since(drain_start))
            .as_secs_f32()
    );
}
