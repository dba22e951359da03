use rand::Rng;
use std::collections::HashMap;
use weighted_random::{WeightBounds, WeightedRandom};

/// Pretend backend: fails with the given probability.
struct Backend {
    name: &'static str,
    failure_rate: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let backends = [
        Backend { name: "eu-1", failure_rate: 0.01 },
        Backend { name: "eu-2", failure_rate: 0.10 },
        Backend { name: "us-1", failure_rate: 0.60 },
    ];

    // Healthy backends climb to 20, failing ones sink but never below 1.
    let mut pool = WeightedRandom::new_uniform(
        backends.iter().map(|b| b.name),
        10,
        WeightBounds::new(1, 20),
    );
    let mut served: HashMap<&str, u64> = HashMap::new();

    let mut rng = rand::rng();
    for round in 0..10_000 {
        let name = pool.pick_owned(&mut rng)?;
        let backend = backends
            .iter()
            .find(|b| b.name == name)
            .ok_or("picked an unknown backend")?;

        if rng.random::<f64>() < backend.failure_rate {
            pool.decrease_weight(&name);
        } else {
            pool.increase_weight(&name);
            *served.entry(name).or_default() += 1;
        }

        if round % 2_500 == 0 {
            let mut snapshot: Vec<_> = pool.iter().collect();
            snapshot.sort();
            println!("round {round:>5}: {snapshot:?}");
        }
    }

    let mut v: Vec<_> = served.into_iter().collect();
    v.sort_by(|a, b| b.1.cmp(&a.1));
    for (name, count) in v {
        println!("{count:>6} {name} (p={:.2})", pool.probability(name).unwrap_or(0.0));
    }

    Ok(())
}
