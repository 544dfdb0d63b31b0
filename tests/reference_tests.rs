// Host-side tests for the reference-object table.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod reference {
    include!("../src/core/reference.rs");
}

use reference::*;

#[test]
fn table_is_sorted_with_unbounded_sentinel() {
    let mut prev = f32::NEG_INFINITY;
    for entry in REFERENCES.iter() {
        assert!(entry.max_fat_lbs > prev, "table not ascending");
        prev = entry.max_fat_lbs;
    }
    assert!(REFERENCES[REFERENCES.len() - 1].max_fat_lbs.is_infinite());
}

#[test]
fn small_mass_selects_golf_ball() {
    assert_eq!(select_reference(0.05).name, "Golf ball");
}

#[test]
fn band_edges_are_inclusive() {
    assert_eq!(select_reference(5.0).name, "Golf ball");
    assert_eq!(select_reference(5.0001).name, "Tennis ball");
}

#[test]
fn huge_mass_falls_through_to_the_sentinel() {
    assert_eq!(select_reference(50.0).name, "Bowling ball");
    assert_eq!(select_reference(1.0e9).name, "Bowling ball");
}

#[test]
fn selection_is_monotone_in_mass() {
    let index_of = |mass: f32| {
        let picked = select_reference(mass);
        REFERENCES
            .iter()
            .position(|e| std::ptr::eq(e, picked))
            .unwrap()
    };
    let mut prev = 0;
    let mut mass = 0.01f32;
    while mass < 200.0 {
        let i = index_of(mass);
        assert!(i >= prev, "selection moved backwards at mass={mass}");
        prev = i;
        mass *= 1.3;
    }
}
