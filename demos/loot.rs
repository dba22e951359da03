use std::collections::HashMap;
use weighted_random::{WeightBounds, WeightedKeys};

#[derive(Copy, Eq, PartialEq, Clone, Debug, Hash, WeightedKeys)]
enum Rarity {
    #[weight(1)]
    Mythic,
    #[weight(10)]
    Legendary,
    #[weight(200)]
    Uncommon,
    #[weight(789)]
    Common,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Bad luck protection: every miss makes legendaries a little likelier.
    let mut table = Rarity::sampler_with_bounds(WeightBounds::at_most(1_000));
    let mut hist: HashMap<Rarity, u64> = HashMap::default();

    let mut rng = rand::rng();
    for _ in 0..200_000 {
        let item = table.pick_owned(&mut rng)?;
        *hist.entry(item).or_default() += 1;

        match item {
            Rarity::Legendary | Rarity::Mythic => table.set(Rarity::Legendary, 10),
            _ => {
                table.increase_weight(&Rarity::Legendary);
            }
        }
    }

    let mut values: Vec<(Rarity, u64)> = hist.into_iter().collect();
    values.sort_by(|(_, ca), (_, cb)| cb.cmp(ca));

    for (rarity, count) in values {
        println!("{count: >7} {rarity:?}");
    }
    println!(
        "legendary weight now {:?}",
        table.weight(&Rarity::Legendary)
    );

    Ok(())
}
