use super::models::atom::Atom;
use phf::{Map, phf_map};

static ELEMENT_NAMES: Map<u32, &'static str> = phf_map! {
    1u32 => "Hydrogen",
    2u32 => "Helium",
    3u32 => "Lithium",
    4u32 => "Beryllium",
    5u32 => "Boron",
    6u32 => "Carbon",
    7u32 => "Nitrogen",
    8u32 => "Oxygen",
    9u32 => "Fluorine",
    10u32 => "Neon",
    11u32 => "Sodium",
    12u32 => "Magnesium",
};

// Most abundant isotope per element, used when resolving a name to a nuclide.
static COMMON_NEUTRON_COUNTS: Map<u32, u32> = phf_map! {
    1u32 => 0,
    2u32 => 2,
    3u32 => 4,
    4u32 => 5,
    5u32 => 6,
    6u32 => 6,
    7u32 => 7,
    8u32 => 8,
    9u32 => 10,
    10u32 => 10,
    11u32 => 12,
    12u32 => 12,
};

// Nuclides with their own conventional names, keyed "protons-neutrons".
static NUCLIDE_NAMES: Map<&'static str, &'static str> = phf_map! {
    "1-1" => "Deuteron",
    "1-2" => "Tritium",
    "6-8" => "Carbon-14",
};

/// Resolves a proton/neutron pair to its element or nuclide name.
///
/// Specially named nuclides (e.g. Deuteron, Carbon-14) take precedence over
/// the element name for their atomic number. Returns `None` for atomic
/// numbers outside the supported range (1 through 12).
pub fn element_name(protons: u32, neutrons: u32) -> Option<&'static str> {
    let key = format!("{protons}-{neutrons}");
    if let Some(name) = NUCLIDE_NAMES.get(key.as_str()) {
        return Some(*name);
    }
    ELEMENT_NAMES.get(&protons).copied()
}

/// Resolves an element or nuclide name to a neutral atom in simple form.
///
/// Element names map to their most abundant isotope; specially named nuclides
/// map to their exact proton/neutron pair. Matching is case-insensitive.
/// Electron spins are not accounted for: the returned atom carries only an
/// electron count, equal to its proton count.
pub fn atom_by_name(name: &str) -> Option<Atom> {
    for (protons, element) in ELEMENT_NAMES.entries() {
        if element.eq_ignore_ascii_case(name) {
            let neutrons = COMMON_NEUTRON_COUNTS.get(protons).copied()?;
            return Some(Atom::with_count(*protons, neutrons, *protons as usize));
        }
    }
    for (key, nuclide) in NUCLIDE_NAMES.entries() {
        if nuclide.eq_ignore_ascii_case(name) {
            let (protons, neutrons) = key.split_once('-')?;
            let protons: u32 = protons.parse().ok()?;
            let neutrons: u32 = neutrons.parse().ok()?;
            return Some(Atom::with_count(protons, neutrons, protons as usize));
        }
    }
    None
}
