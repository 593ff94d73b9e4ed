//! PaCS simulation - run the search on a synthetic population.

use u_pacs::pacs::{PacsConfig, PacsRunner};
use u_pacs::random::Lcg;
use u_pacs::scoring::{Candidate, CompatibilityMap};

const MAJORS: [&str; 4] = ["Computer Science", "Business", "Economics", "Psychology"];
const PERSONALITIES: [&str; 4] = ["Analytical", "Collaborative", "Creative", "Practical"];

fn generate_candidates(count: usize) -> Vec<Candidate> {
    (0..count)
        .map(|i| {
            let interests: &[&str] = if i % 2 == 0 {
                &["AI", "Data", "Web"]
            } else {
                &["Finance", "Policy", "Data"]
            };
            Candidate::new(
                format!("sim-user-{}", i + 1),
                MAJORS[i % 4],
                (i % 4) as i32 + 1,
                interests.iter().copied(),
                PERSONALITIES[i % 4],
            )
        })
        .collect()
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: {} [count] [seed]", args[0]);
        eprintln!();
        eprintln!("Run PaCS on a synthetic population with the default configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  count  Number of candidates (default: 40)");
        eprintln!("  seed   Seed for the deterministic generator (default: 123)");
        return;
    }

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(40);
    let seed: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(123);

    let candidates = generate_candidates(count);
    let config = PacsConfig::default();
    let mut rng = Lcg::new(seed);

    let result = PacsRunner::run(&candidates, &config, &CompatibilityMap::new(), &mut rng)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    println!("PaCS simulation summary");
    println!("-----------------------");
    println!("Profiles: {}", candidates.len());
    println!("Cycles executed: {}", result.cycles_executed);
    println!("Best world score: {:.4}", result.best_world_score);
    println!("Average world score: {:.4}", result.average_world_score);
    println!("Final groups: {}", result.best_world.groups.len());
}
