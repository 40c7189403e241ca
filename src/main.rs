use greedy_cover::{cover_weight, GreedyConfig, Instance};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let parallel = !std::env::args().skip(1).any(|a| a == "--sequential");
    let config = GreedyConfig::default().with_parallel(parallel);

    let instance = Instance::from_stdin().expect("c Failed to read the instance!");
    match instance.solve(&config) {
        Ok(cover) => {
            for j in &cover {
                println!("{}", j);
            }
            println!("c weight {}", cover_weight(&instance.weights, &cover));
        }
        Err(e) => {
            eprintln!("c {}", e);
            std::process::exit(1);
        }
    }
}
