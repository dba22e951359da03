use std::sync::{Arc, Mutex};
use std::thread;

use rand::SeedableRng;
use rand::rngs::StdRng;
use weighted_random::{WeightBounds, WeightedRandom};

#[test]
fn mutex_serializes_adjustments() {
    let sampler = Arc::new(Mutex::new(WeightedRandom::new_uniform(
        ["east", "west"],
        0,
        WeightBounds::at_most(1_000),
    )));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let sampler = Arc::clone(&sampler);
            thread::spawn(move || {
                let key = if i % 2 == 0 { "east" } else { "west" };
                for _ in 0..100 {
                    sampler.lock().unwrap().increase_weight(&key);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let sampler = sampler.lock().unwrap();
    assert_eq!(sampler.weight("east"), Some(200));
    assert_eq!(sampler.weight("west"), Some(200));
    assert_eq!(sampler.total_weight(), 400);
}

#[test]
fn picks_track_latest_weights() {
    let mut sampler = WeightedRandom::from_weights([("a", 1u64), ("b", 1)]);
    let mut rng = StdRng::seed_from_u64(9);

    sampler.set("a", 9);
    let draws = 20_000;
    let picks = sampler.pick_many(&mut rng, draws).unwrap();
    let a = picks.iter().filter(|k| **k == "a").count() as f64 / draws as f64;
    assert!((a - 0.9).abs() < 0.05, "a={a}");

    sampler.set("a", 0);
    assert!(sampler.pick_many(&mut rng, 100).unwrap().iter().all(|k| *k == "b"));
}
