/// Example scripts that are built into the binary.
pub static DEMOS: &[(&str, &str)] = &[
    ("flower", include_str!("../demos/flower.logocode")),
    ("square", include_str!("../demos/square.logocode")),
    ("stairs", include_str!("../demos/stairs.logocode")),
    ("star", include_str!("../demos/star.logocode")),
];

pub fn demo(name: &str) -> Option<&'static str> {
    DEMOS.iter().find(|(n, _)| *n == name).map(|(_, src)| *src)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    DEMOS.iter().map(|(n, _)| *n)
}

/// The demo at `seed`, wrapping around the list.
pub fn pick(seed: u64) -> (&'static str, &'static str) {
    DEMOS[(seed % DEMOS.len() as u64) as usize]
}

/// Any one of the demos.
pub fn random() -> (&'static str, &'static str) {
    use std::hash::{BuildHasher, Hasher};

    // `RandomState` is keyed randomly per process.
    pick(std::collections::hash_map::RandomState::new().build_hasher().finish())
}
