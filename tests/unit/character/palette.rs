use super::*;
use rand::{SeedableRng, rngs::StdRng};
use std::collections::HashSet;

#[test]
fn builtin_groups_match_their_sizes() {
    let sizes: Vec<_> = Palette::BUILTIN.groups.iter().map(|g| g.len()).collect();
    assert_eq!(sizes, vec![14, 14, 14, 13, 14]);
    assert_eq!(Palette::BUILTIN.groups[0][0], [0xe5, 0xe5, 0xe5]);
}

#[test]
fn first_strokes_get_distinct_groups() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let picks = Palette::BUILTIN.assign(5, &mut rng);
        let groups: HashSet<_> = picks.iter().map(|p| p.group).collect();
        assert_eq!(groups.len(), 5);
    }
}

#[test]
fn every_pick_comes_from_the_palette() {
    let mut rng = StdRng::seed_from_u64(42);
    let picks = Palette::BUILTIN.assign(12, &mut rng);
    assert_eq!(picks.len(), 12);
    for pick in &picks {
        assert!(pick.group < 5);
        let rgb = [pick.color.r, pick.color.g, pick.color.b];
        assert!(Palette::BUILTIN.groups[pick.group].contains(&rgb));
        assert!(Palette::BUILTIN.contains(pick.color));
        assert!((153..=204).contains(&pick.color.a));
    }
}

#[test]
fn same_seed_same_colors() {
    let a = Palette::BUILTIN.assign(6, &mut StdRng::seed_from_u64(1));
    let b = Palette::BUILTIN.assign(6, &mut StdRng::seed_from_u64(1));
    assert_eq!(a, b);
}

#[test]
fn empty_palette_picks_nothing() {
    let empty = Palette {
        groups: &[],
        alphas: ALPHA_VALUES,
    };
    assert!(empty.assign(3, &mut StdRng::seed_from_u64(0)).is_empty());
}

#[test]
fn empty_groups_are_never_picked() {
    const EMPTY: &[[u8; 3]] = &[];
    const RED: &[[u8; 3]] = &[[200, 0, 0]];
    let palette = Palette {
        groups: &[EMPTY, RED, EMPTY],
        alphas: ALPHA_VALUES,
    };
    let picks = palette.assign(4, &mut StdRng::seed_from_u64(3));
    assert_eq!(picks.len(), 4);
    assert!(picks.iter().all(|p| p.group == 1 && p.color.r == 200));
}
