//! `enigma catalog`

use enigma_core::Catalog;
use std::fmt::Write;

/// Rotor names with notch letters, then reflector names
pub fn run(catalog: &Catalog) -> String {
    let mut out = String::from("Rotors:\n");
    for rotor in catalog.rotors() {
        let _ = writeln!(out, "  {:<4} notch {}", rotor.name(), rotor.notch());
    }
    out.push_str("Reflectors:\n");
    for reflector in catalog.reflectors() {
        let _ = writeln!(out, "  {}", reflector.name());
    }
    out
}
