//! End-to-end palette editing: generate, lock, regenerate, share.

use crafter_color::is_valid_hex;
use crafter_harmony::{GradientSpec, Harmony, HarmonyMode};
use crafter_palette::{Palette, PaletteLimits, PaletteQuery};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn lock_regenerate_share_restore() {
    let mut rng = StdRng::seed_from_u64(2024);
    let harmony = Harmony::new("#E76F51", HarmonyMode::Random, 5, &GradientSpec::default());
    let mut palette = Palette::generate(&harmony, PaletteLimits::default(), &mut rng);
    assert_eq!(palette.len(), 5);

    palette.toggle_lock(2).unwrap();
    let kept = palette.colors()[2].clone();
    for _ in 0..10 {
        palette.regenerate(&harmony, &mut rng);
        assert_eq!(palette.colors()[2], kept);
    }

    let query = PaletteQuery::from_palette(&palette, &harmony).to_query();
    let restored = PaletteQuery::from_query(&query).unwrap();
    assert_eq!(restored.colors, Some(palette.hexes()));
    assert_eq!(restored.mode, Some(HarmonyMode::Random));

    let colors = restored.colors.unwrap_or_default();
    let again = Palette::from_hexes(&colors, PaletteLimits::default(), &mut rng);
    assert_eq!(again.hexes(), palette.hexes());
}

#[test]
fn gradient_palette_shares_its_anchors() {
    let mut rng = StdRng::seed_from_u64(3);
    let spec = GradientSpec::new("#1E1B4B", "#FEF9C3", 4);
    let harmony = Harmony::new("#000000", HarmonyMode::Gradient, 4, &spec);
    let palette = Palette::generate(&harmony, PaletteLimits::default(), &mut rng);

    let query = PaletteQuery::from_palette(&palette, &harmony);
    assert_eq!(query.gradient, Some(spec));
    let text = query.to_query();
    assert!(text.contains("gradient=1E1B4B_FEF9C3_4"), "{text}");
}

proptest! {
    #[test]
    fn locked_swatches_survive_any_regeneration(
        seed in any::<u64>(),
        locks in prop::collection::vec(any::<bool>(), 2..=6),
        mode in prop::sample::select(HarmonyMode::all().to_vec()),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let harmony = Harmony::new("#2A9D8F", mode, locks.len(), &GradientSpec::default());
        let mut palette = Palette::generate(&harmony, PaletteLimits::default(), &mut rng);
        for (i, &locked) in locks.iter().enumerate() {
            palette.set_locked(i, locked).unwrap();
        }
        let before = palette.clone();

        palette.regenerate(&harmony, &mut rng);

        prop_assert_eq!(palette.len(), before.len());
        for (now, was) in palette.iter().zip(before.iter()) {
            prop_assert_eq!(&now.id, &was.id);
            prop_assert!(is_valid_hex(&now.hex));
            if was.locked {
                prop_assert_eq!(&now.hex, &was.hex);
            }
        }
    }
}
