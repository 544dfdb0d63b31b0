// Familiar comparison objects for the reference sphere.

/// One row of the reference table. `max_fat_lbs` is the upper bound of the
/// fat-mass band this object represents; the last row uses +infinity as a
/// sentinel so every mass selects something.
pub struct ReferenceObject {
    pub name: &'static str,
    /// Real-world mass of the reference item itself (legend copy).
    pub item_mass_lbs: f32,
    /// Real-world radius used for display sizing.
    pub radius_cm: f32,
    pub color: [f32; 3],
    pub max_fat_lbs: f32,
}

/// Ordered ascending by `max_fat_lbs`; the final entry is unbounded.
pub static REFERENCES: [ReferenceObject; 6] = [
    ReferenceObject {
        name: "Golf ball",
        item_mass_lbs: 0.1,
        radius_cm: 2.1,
        color: [0.85, 0.85, 0.82],
        max_fat_lbs: 5.0,
    },
    ReferenceObject {
        name: "Tennis ball",
        item_mass_lbs: 0.13,
        radius_cm: 3.3,
        color: [0.80, 0.84, 0.20],
        max_fat_lbs: 12.0,
    },
    ReferenceObject {
        name: "Softball",
        item_mass_lbs: 0.4,
        radius_cm: 4.8,
        color: [0.90, 0.82, 0.30],
        max_fat_lbs: 25.0,
    },
    ReferenceObject {
        name: "Soccer ball",
        item_mass_lbs: 0.9,
        radius_cm: 11.0,
        color: [0.88, 0.88, 0.86],
        max_fat_lbs: 45.0,
    },
    ReferenceObject {
        name: "Basketball",
        item_mass_lbs: 1.4,
        radius_cm: 12.1,
        color: [0.82, 0.46, 0.20],
        max_fat_lbs: 65.0,
    },
    ReferenceObject {
        name: "Bowling ball",
        item_mass_lbs: 14.0,
        radius_cm: 10.9,
        color: [0.45, 0.66, 0.72],
        max_fat_lbs: f32::INFINITY,
    },
];

/// First entry whose band covers the mass. Monotone: a larger mass never
/// selects an earlier entry. The infinity sentinel makes the fallback
/// unreachable, but keep it so the scan is total.
pub fn select_reference(fat_mass_lbs: f32) -> &'static ReferenceObject {
    for entry in REFERENCES.iter() {
        if fat_mass_lbs <= entry.max_fat_lbs {
            return entry;
        }
    }
    &REFERENCES[REFERENCES.len() - 1]
}
