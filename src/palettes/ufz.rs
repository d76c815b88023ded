//! The UFZ corporate-design color names.
//!
//! `grey` aliases `gray`, the numbered greys alias dark/plain/light, and
//! every name also exists without the `ufz` prefix.

use crate::models::Rgb;

const DARKBLUE: Rgb = Rgb::new(0, 62, 110);
const BLUE: Rgb = Rgb::new(0, 88, 156);
const LIGHTBLUE: Rgb = Rgb::new(0, 162, 224);
const RED: Rgb = Rgb::new(212, 45, 18);
const ORANGE: Rgb = Rgb::new(207, 104, 0);
const YELLOW: Rgb = Rgb::new(230, 175, 17);
const DARKGREEN: Rgb = Rgb::new(20, 77, 40);
const GREEN: Rgb = Rgb::new(169, 181, 9);
const GRAY1: Rgb = Rgb::new(81, 81, 81);
const GRAY2: Rgb = Rgb::new(156, 156, 156);
const GRAY3: Rgb = Rgb::new(185, 185, 185);
const BLACK: Rgb = Rgb::new(0, 0, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);

static NAMES: &[(&str, Rgb)] = &[
    ("ufzdarkblue", DARKBLUE),
    ("ufzblue", BLUE),
    ("ufzlightblue", LIGHTBLUE),
    ("ufzred", RED),
    ("ufzorange", ORANGE),
    ("ufzyellow", YELLOW),
    ("ufzdarkgreen", DARKGREEN),
    ("ufzgreen", GREEN),
    ("ufzlightgreen", GREEN),
    ("ufzgray1", GRAY1),
    ("ufzgray2", GRAY2),
    ("ufzgray3", GRAY3),
    ("ufzgrey1", GRAY1),
    ("ufzgrey2", GRAY2),
    ("ufzgrey3", GRAY3),
    ("ufzdarkgray", GRAY1),
    ("ufzgray", GRAY2),
    ("ufzlightgray", GRAY3),
    ("ufzdarkgrey", GRAY1),
    ("ufzgrey", GRAY2),
    ("ufzlightgrey", GRAY3),
    ("ufzblack", BLACK),
    ("ufzwhite", WHITE),
];

/// Look up a lowercase color name, with or without the `ufz` prefix.
pub fn lookup(name: &str) -> Option<Rgb> {
    let find = |name: &str| {
        NAMES
            .iter()
            .find(|&&(n, _)| n == name)
            .map(|&(_, rgb)| rgb)
    };
    find(name).or_else(|| find(&format!("ufz{name}")))
}

/// All known UFZ color names (the prefixed spellings).
pub fn names() -> impl Iterator<Item = &'static str> {
    NAMES.iter().map(|&(n, _)| n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_and_bare_names_agree() {
        assert_eq!(lookup("ufzdarkblue"), Some(Rgb::new(0, 62, 110)));
        assert_eq!(lookup("darkblue"), lookup("ufzdarkblue"));
        assert_eq!(lookup("orange"), Some(Rgb::new(207, 104, 0)));
    }

    #[test]
    fn grey_aliases_gray() {
        assert_eq!(lookup("ufzgrey1"), lookup("ufzgray1"));
        assert_eq!(lookup("ufzdarkgrey"), lookup("ufzgray1"));
        assert_eq!(lookup("ufzlightgray"), lookup("ufzgray3"));
    }

    #[test]
    fn unknown_names_miss() {
        assert_eq!(lookup("ufzpurple"), None);
    }
}
