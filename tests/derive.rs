use rand::SeedableRng;
use rand_pcg::Pcg32;
use weighted_random::{PickError, WeightBounds, WeightedKeys};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, WeightedKeys)]
enum Rarity {
    #[weight(0)]
    Mythic,
    #[weight(1)]
    Legendary,
    #[weight(20)]
    Uncommon,
    #[weight(79)]
    Common,
}

const SPARE: u64 = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, WeightedKeys)]
enum Backend {
    #[weight(2 * SPARE)]
    Primary,
    #[weight(SPARE)]
    Replica,
}

#[test]
fn entries_follow_declaration() {
    let rarity: &[(Rarity, u64)] = &[
        (Rarity::Mythic, 0),
        (Rarity::Legendary, 1),
        (Rarity::Uncommon, 20),
        (Rarity::Common, 79),
    ];
    assert_eq!(Rarity::ENTRIES, rarity);

    let backend: &[(Backend, u64)] = &[(Backend::Primary, 8), (Backend::Replica, 4)];
    assert_eq!(Backend::ENTRIES, backend);
}

#[test]
fn sampler_exposes_declared_weights() {
    let table = Rarity::sampler();
    assert_eq!(table.len(), 4);
    assert_eq!(table.total_weight(), 100);
    assert_eq!(table.weight(&Rarity::Uncommon), Some(20));
    assert_eq!(table.bounds(), WeightBounds::default());
}

#[test]
fn zero_weight_variant_is_never_picked() {
    let table = Rarity::sampler();
    let mut rng = Pcg32::seed_from_u64(11);
    let picks = table.pick_many(&mut rng, 5_000).unwrap();
    assert!(!picks.contains(&Rarity::Mythic));
}

#[test]
fn derived_sampler_is_mutable() {
    let mut table = Backend::sampler_with_bounds(WeightBounds::new(0, 8));
    assert_eq!(table.increase_weight(&Backend::Primary), 8);
    for _ in 0..4 {
        table.decrease_weight(&Backend::Replica);
    }
    for _ in 0..8 {
        table.decrease_weight(&Backend::Primary);
    }
    let mut rng = Pcg32::seed_from_u64(5);
    assert_eq!(table.pick(&mut rng), Err(PickError::AllWeightsZero));
}

#[test]
#[should_panic(expected = "out of bounds")]
fn bounds_reject_declared_weights() {
    let _ = Rarity::sampler_with_bounds(WeightBounds::at_least(1));
}
