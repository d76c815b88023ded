//! Named color tables and the palette registry.
//!
//! The static tables are built into the binary and shared read-only; the
//! registry additionally stores palettes generated at run time (for example
//! Bezier ramps) under caller-chosen names. Lookup repairs capitalisation:
//! an exact name match wins, otherwise the first case-insensitive match, and
//! an unknown name is a hard error.

pub mod brewer;
pub mod sron;
pub mod ufz;
pub mod x11;

use std::collections::HashMap;

use bitflags::bitflags;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::error::{ColorError, Result};
use crate::models::{Rgb, Rgb01};

bitflags! {
    /// Options for palette retrieval.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct PaletteFlags: u8 {
        /// Reverse the palette order.
        const REVERSE = 1 << 0;
        /// Replace every color by its grey-scale equivalent.
        const GREY = 1 << 1;
    }
}

/// The palette families known to the static tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// Brewer sequential schemes.
    Sequential,
    /// Brewer diverging schemes.
    Diverging,
    /// Brewer qualitative schemes.
    Qualitative,
    /// Oregon State University schemes.
    Osu,
    /// NCL schemes with more than 50 colors.
    NclLarge,
    /// NCL schemes with up to 50 colors.
    NclSmall,
    /// NCL schemes from Meteo Swiss.
    NclMeteoSwiss,
    /// Mathematica schemes.
    Mathematica,
}

/// A named palette in one of the static tables.
pub(crate) struct PaletteDef {
    pub(crate) name: &'static str,
    pub(crate) category: Category,
    pub(crate) colors: &'static [&'static str],
}

// The OSU, NCL and Mathematica tables are empty; see DESIGN.md.
static OSU: &[PaletteDef] = &[];
static NCL_LARGE: &[PaletteDef] = &[];
static NCL_SMALL: &[PaletteDef] = &[];
static NCL_METEO_SWISS: &[PaletteDef] = &[];
static MATHEMATICA: &[PaletteDef] = &[];

fn all_defs() -> impl Iterator<Item = &'static PaletteDef> {
    brewer::SEQUENTIAL
        .iter()
        .chain(brewer::DIVERGING)
        .chain(brewer::QUALITATIVE)
        .chain(OSU)
        .chain(NCL_LARGE)
        .chain(NCL_SMALL)
        .chain(NCL_METEO_SWISS)
        .chain(MATHEMATICA)
}

static REGISTRY: Lazy<RwLock<HashMap<String, Vec<Rgb01>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Store a generated palette under `name` in the process-wide registry.
/// Registering the same name again replaces the palette.
pub fn register(name: &str, colors: &[Rgb01]) {
    REGISTRY.write().insert(name.to_owned(), colors.to_vec());
}

fn find_static(name: &str) -> Option<&'static PaletteDef> {
    all_defs().find(|def| def.name == name).or_else(|| {
        let lower = name.to_lowercase();
        all_defs().find(|def| def.name.to_lowercase() == lower)
    })
}

fn find_registered(name: &str) -> Option<Vec<Rgb01>> {
    let registry = REGISTRY.read();
    registry.get(name).cloned().or_else(|| {
        let lower = name.to_lowercase();
        registry
            .iter()
            .find(|(key, _)| key.to_lowercase() == lower)
            .map(|(_, colors)| colors.clone())
    })
}

/// The colors of the named palette, in unit-interval RGB.
pub fn get(name: &str) -> Result<Vec<Rgb01>> {
    get_with(name, PaletteFlags::empty())
}

/// The colors of the named palette, with retrieval options applied.
pub fn get_with(name: &str, flags: PaletteFlags) -> Result<Vec<Rgb01>> {
    let mut colors = if let Some(def) = find_static(name) {
        def.colors
            .iter()
            .map(|hex| Rgb::from_hex(hex).map(|c| c.to_rgb01()))
            .collect::<Result<Vec<_>>>()?
    } else if let Some(colors) = find_registered(name) {
        colors
    } else {
        return Err(ColorError::UnknownColorMap(name.to_owned()));
    };

    if flags.contains(PaletteFlags::REVERSE) {
        colors.reverse();
    }
    if flags.contains(PaletteFlags::GREY) {
        for c in &mut colors {
            let grey = 0.2125 * c.red + 0.7154 * c.green + 0.072 * c.blue;
            *c = Rgb01::new(grey, grey, grey);
        }
    }

    Ok(colors)
}

/// The names of the known static palettes, all of them or one category's.
pub fn names(category: Option<Category>) -> Vec<&'static str> {
    all_defs()
        .filter(|def| category.map_or(true, |c| def.category == c))
        .map(|def| def.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::color::Component;

    #[test]
    fn blues4_resolves_to_its_device_colors() {
        let colors = get("blues4").unwrap();
        let rgb256: Vec<Rgb> = colors.iter().map(|c| c.to_rgb()).collect();
        assert_eq!(
            rgb256,
            vec![
                Rgb::new(239, 243, 255),
                Rgb::new(189, 215, 231),
                Rgb::new(107, 174, 214),
                Rgb::new(33, 113, 181),
            ]
        );
    }

    #[test]
    fn lookup_repairs_capitalisation() {
        let expected = get("blues4").unwrap();
        assert_eq!(get("BLUES4").unwrap(), expected);
        assert_eq!(get("bLuEs4").unwrap(), expected);
    }

    #[test]
    fn unknown_names_report_the_exact_message() {
        let err = get("not_a_palette").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Color map name not known: not_a_palette"
        );
    }

    #[test]
    fn reverse_flips_the_palette() {
        let forward = get("blues4").unwrap();
        let backward = get_with("blues4", PaletteFlags::REVERSE).unwrap();
        assert_eq!(backward[0], forward[forward.len() - 1]);
        assert_eq!(backward[backward.len() - 1], forward[0]);
        assert_eq!(backward[0].to_rgb(), Rgb::new(33, 113, 181));
    }

    #[test]
    fn grey_uses_the_reference_weights() {
        let colors = get_with("blues4", PaletteFlags::GREY).unwrap();
        let first = get("blues4").unwrap()[0];
        let expected: Component =
            0.2125 * first.red + 0.7154 * first.green + 0.072 * first.blue;
        assert_component_eq!(colors[0].red, expected);
        assert_eq!(colors[0].red, colors[0].green);
        assert_eq!(colors[0].green, colors[0].blue);
    }

    #[test]
    fn category_filters_names() {
        let sequential = names(Some(Category::Sequential));
        assert!(sequential.contains(&"blues4"));
        assert!(!sequential.contains(&"rdbu11"));

        let diverging = names(Some(Category::Diverging));
        assert!(diverging.contains(&"rdbu11"));

        let all = names(None);
        assert!(all.len() >= sequential.len() + diverging.len());
    }

    #[test]
    fn registered_palettes_resolve_like_static_ones() {
        let palette = vec![Rgb01::new(1.0, 0.0, 0.0), Rgb01::new(0.0, 0.0, 1.0)];
        register("my_test_gradient", &palette);
        assert_eq!(get("my_test_gradient").unwrap(), palette);
        assert_eq!(get("MY_TEST_GRADIENT").unwrap(), palette);
    }
}
