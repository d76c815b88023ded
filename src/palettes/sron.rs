//! Distinct color schemes of Paul Tol at SRON, the Netherlands Institute
//! for Space Research.

use crate::error::{ColorError, Result};
use crate::models::{Rgb, Rgb01};

/// The available SRON color schemes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SronScheme {
    /// The qualitative palette, 1 to 12 colors.
    Palette1,
    /// The regular-hue palette, all 21 colors interleaved light/medium/dark.
    Palette2,
    /// The 7 light colors of palette 2.
    Palette2Light,
    /// The 7 medium colors of palette 2.
    Palette2Medium,
    /// The 7 dark colors of palette 2.
    Palette2Dark,
    /// 4 colors optimized for printing in grey scale.
    GreySafe,
    /// Yellow-orange-brown sequential, 3 to 9 colors.
    YlOrBr,
    /// Blue-yellow-red diverging, 3 to 11 colors.
    BuYlRd,
    /// Rainbow, 4 to 12 colors.
    Rainbow,
    /// Banded rainbow, 14, 15, 18 or 21 colors.
    BandedRainbow,
}

static PALETTE1: [&[&str]; 12] = [
    &["#4477AA"],
    &["#4477AA", "#CC6677"],
    &["#4477AA", "#DDCC77", "#CC6677"],
    &["#4477AA", "#117733", "#DDCC77", "#CC6677"],
    &["#332288", "#88CCEE", "#117733", "#DDCC77", "#CC6677"],
    &["#332288", "#88CCEE", "#117733", "#DDCC77", "#CC6677", "#AA4499"],
    &["#332288", "#88CCEE", "#44AA99", "#117733", "#DDCC77", "#CC6677", "#AA4499"],
    &[
        "#332288", "#88CCEE", "#44AA99", "#117733", "#999933", "#DDCC77", "#CC6677", "#AA4499",
    ],
    &[
        "#332288", "#88CCEE", "#44AA99", "#117733", "#999933", "#DDCC77", "#CC6677", "#882255",
        "#AA4499",
    ],
    &[
        "#332288", "#88CCEE", "#44AA99", "#117733", "#999933", "#DDCC77", "#661100", "#CC6677",
        "#882255", "#AA4499",
    ],
    &[
        "#332288", "#6699CC", "#88CCEE", "#44AA99", "#117733", "#999933", "#DDCC77", "#661100",
        "#CC6677", "#882255", "#AA4499",
    ],
    &[
        "#332288", "#6699CC", "#88CCEE", "#44AA99", "#117733", "#999933", "#DDCC77", "#661100",
        "#CC6677", "#AA4466", "#882255", "#AA4499",
    ],
];

static PALETTE2_LIGHT: [&str; 7] = [
    "#77AADD", "#77CCCC", "#88CCAA", "#DDDD77", "#DDAA77", "#DD7788", "#CC99BB",
];
static PALETTE2_MEDIUM: [&str; 7] = [
    "#4477AA", "#44AAAA", "#44AA77", "#AAAA44", "#AA7744", "#AA4455", "#AA4488",
];
static PALETTE2_DARK: [&str; 7] = [
    "#114477", "#117777", "#117744", "#777711", "#774411", "#771122", "#771155",
];

static GREYSAFE: [&str; 4] = ["#809BC8", "#FF6666", "#FFCC66", "#64C204"];

static PALETTE_YLORBR: [&[&str]; 7] = [
    &["#FFF7BC", "#FEC44F", "#D95F0E"],
    &["#FFFBD5", "#FED98E", "#FB9A29", "#CC4C02"],
    &["#FFFBD5", "#FED98E", "#FB9A29", "#D95F0E", "#993404"],
    &["#FFFBD5", "#FEE391", "#FEC44F", "#FB9A29", "#D95F0E", "#993404"],
    &[
        "#FFFBD5", "#FEE391", "#FEC44F", "#FB9A29", "#EC7014", "#CC4C02", "#8C2D04",
    ],
    &[
        "#FFFFE5", "#FFF7BC", "#FEE391", "#FEC44F", "#FB9A29", "#EC7014", "#CC4C02", "#8C2D04",
    ],
    &[
        "#FFFFE5", "#FFF7BC", "#FEE391", "#FEC44F", "#FB9A29", "#EC7014", "#CC4C02", "#993404",
        "#662506",
    ],
];

static PALETTE_BUYLRD: [&[&str]; 9] = [
    &["#99C7EC", "#FFFAD2", "#F5A275"],
    &["#008BCE", "#B4DDF7", "#F9BD7E", "#D03232"],
    &["#008BCE", "#B4DDF7", "#FFFAD2", "#F9BD7E", "#D03232"],
    &["#3A89C9", "#99C7EC", "#E6F5FE", "#FFE3AA", "#F5A275", "#D24D3E"],
    &[
        "#3A89C9", "#99C7EC", "#E6F5FE", "#FFFAD2", "#FFE3AA", "#F5A275", "#D24D3E",
    ],
    &[
        "#3A89C9", "#77B7E5", "#B4DDF7", "#E6F5FE", "#FFE3AA", "#F9BD7E", "#ED875E", "#D24D3E",
    ],
    &[
        "#3A89C9", "#77B7E5", "#B4DDF7", "#E6F5FE", "#FFFAD2", "#FFE3AA", "#F9BD7E", "#ED875E",
        "#D24D3E",
    ],
    &[
        "#3D52A1", "#3A89C9", "#77B7E5", "#B4DDF7", "#E6F5FE", "#FFE3AA", "#F9BD7E", "#ED875E",
        "#D24D3E", "#AE1C3E",
    ],
    &[
        "#3D52A1", "#3A89C9", "#77B7E5", "#B4DDF7", "#E6F5FE", "#FFFAD2", "#FFE3AA", "#F9BD7E",
        "#ED875E", "#D24D3E", "#AE1C3E",
    ],
];

static PALETTE_RAINBOW: [&[&str]; 9] = [
    &["#404096", "#57A3AD", "#DEA73A", "#D92120"],
    &["#404096", "#529DB7", "#7DB874", "#E39C37", "#D92120"],
    &["#404096", "#498CC2", "#63AD99", "#BEBC48", "#E68B33", "#D92120"],
    &[
        "#781C81", "#3F60AE", "#539EB6", "#6DB388", "#CAB843", "#E78532", "#D92120",
    ],
    &[
        "#781C81", "#3F56A7", "#4B91C0", "#5FAA9F", "#91BD61", "#D8AF3D", "#E77C30", "#D92120",
    ],
    &[
        "#781C81", "#3F4EA1", "#4683C1", "#57A3AD", "#6DB388", "#B1BE4E", "#DFA53A", "#E7742F",
        "#D92120",
    ],
    &[
        "#781C81", "#3F479B", "#4277BD", "#529DB7", "#62AC9B", "#86BB6A", "#C7B944", "#E39C37",
        "#E76D2E", "#D92120",
    ],
    &[
        "#781C81", "#404096", "#416CB7", "#4D95BE", "#5BA7A7", "#6EB387", "#A1BE56", "#D3B33F",
        "#E59435", "#E6682D", "#D92120",
    ],
    &[
        "#781C81", "#413B93", "#4065B1", "#488BC2", "#55A1B1", "#63AD99", "#7FB972", "#B5BD4C",
        "#D9AD3C", "#E68E34", "#E6642C", "#D92120",
    ],
];

static PALETTE_RAINBOW_BAND: [&[&str]; 4] = [
    &[
        "#882E72", "#B178A6", "#D6C1DE", "#1965B0", "#5289C7", "#7BAFDE", "#4EB265", "#90C987",
        "#CAE0AB", "#F7EE55", "#F6C141", "#F1932D", "#E8601C", "#DC050C",
    ],
    &[
        "#114477", "#4477AA", "#77AADD", "#117755", "#44AA88", "#99CCBB", "#777711", "#AAAA44",
        "#DDDD77", "#771111", "#AA4444", "#DD7777", "#771144", "#AA4477", "#DD77AA",
    ],
    &[
        "#771155", "#AA4488", "#CC99BB", "#114477", "#4477AA", "#77AADD", "#117777", "#44AAAA",
        "#77CCCC", "#777711", "#AAAA44", "#DDDD77", "#774411", "#AA7744", "#DDAA77", "#771122",
        "#AA4455", "#DD7788",
    ],
    &[
        "#771155", "#AA4488", "#CC99BB", "#114477", "#4477AA", "#77AADD", "#117777", "#44AAAA",
        "#77CCCC", "#117744", "#44AA77", "#88CCAA", "#777711", "#AAAA44", "#DDDD77", "#774411",
        "#AA7744", "#DDAA77", "#771122", "#AA4455", "#DD7788",
    ],
];

fn decode(hexes: &[&str]) -> Result<Vec<Rgb01>> {
    hexes
        .iter()
        .map(|hex| Rgb::from_hex(hex).map(|c| c.to_rgb01()))
        .collect()
}

fn sized<'a>(
    scheme: &str,
    rows: &[&'a [&'a str]],
    smallest: usize,
    ncol: usize,
) -> Result<&'a [&'a str]> {
    let largest = smallest + rows.len() - 1;
    if ncol < smallest || ncol > largest {
        return Err(ColorError::InvalidInput {
            message: format!("{scheme} has {smallest}-{largest} colors, got {ncol}"),
        });
    }
    Ok(rows[ncol - smallest])
}

/// The colors of an SRON scheme.
///
/// `ncol` selects the variant for the sized schemes (`Palette1`, `YlOrBr`,
/// `BuYlRd`, `Rainbow`, `BandedRainbow`) and is ignored for the fixed-size
/// ones.
pub fn palette(scheme: SronScheme, ncol: usize) -> Result<Vec<Rgb01>> {
    match scheme {
        SronScheme::Palette1 => decode(sized("palette1", &PALETTE1, 1, ncol)?),
        SronScheme::Palette2 => {
            let mut colors = Vec::with_capacity(21);
            for i in 0..7 {
                colors.push(Rgb::from_hex(PALETTE2_LIGHT[i])?.to_rgb01());
                colors.push(Rgb::from_hex(PALETTE2_MEDIUM[i])?.to_rgb01());
                colors.push(Rgb::from_hex(PALETTE2_DARK[i])?.to_rgb01());
            }
            Ok(colors)
        }
        SronScheme::Palette2Light => decode(&PALETTE2_LIGHT),
        SronScheme::Palette2Medium => decode(&PALETTE2_MEDIUM),
        SronScheme::Palette2Dark => decode(&PALETTE2_DARK),
        SronScheme::GreySafe => decode(&GREYSAFE),
        SronScheme::YlOrBr => decode(sized("ylorbr", &PALETTE_YLORBR, 3, ncol)?),
        SronScheme::BuYlRd => decode(sized("buylrd", &PALETTE_BUYLRD, 3, ncol)?),
        SronScheme::Rainbow => decode(sized("rainbow", &PALETTE_RAINBOW, 4, ncol)?),
        SronScheme::BandedRainbow => {
            let row = match ncol {
                14 => 0,
                15 => 1,
                18 => 2,
                21 => 3,
                _ => {
                    return Err(ColorError::InvalidInput {
                        message: format!(
                            "banded-rainbow palette has 14, 15, 18, or 21 colors, got {ncol}"
                        ),
                    })
                }
            };
            decode(PALETTE_RAINBOW_BAND[row])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb256(colors: &[Rgb01]) -> Vec<Rgb> {
        colors.iter().map(|c| c.to_rgb()).collect()
    }

    #[test]
    fn palette1_with_three_colors() {
        let colors = palette(SronScheme::Palette1, 3).unwrap();
        assert_eq!(
            rgb256(&colors),
            vec![Rgb::new(68, 119, 170), Rgb::new(221, 204, 119), Rgb::new(204, 102, 119)]
        );
    }

    #[test]
    fn palette2_light_starts_with_light_blue() {
        let colors = palette(SronScheme::Palette2Light, 7).unwrap();
        assert_eq!(colors.len(), 7);
        assert_eq!(colors[0].to_rgb(), Rgb::new(119, 170, 221));
    }

    #[test]
    fn palette2_interleaves_light_medium_dark() {
        let colors = palette(SronScheme::Palette2, 21).unwrap();
        assert_eq!(colors.len(), 21);
        assert_eq!(colors[0].to_rgb(), Rgb::new(119, 170, 221));
        assert_eq!(colors[1].to_rgb(), Rgb::new(68, 119, 170));
        assert_eq!(colors[2].to_rgb(), Rgb::new(17, 68, 119));
    }

    #[test]
    fn ylorbr_reversed_ends_on_the_darkest_color() {
        let mut colors = palette(SronScheme::YlOrBr, 4).unwrap();
        colors.reverse();
        assert_eq!(colors[0].to_rgb(), Rgb::new(204, 76, 2));
    }

    #[test]
    fn sized_schemes_reject_out_of_range_counts() {
        assert!(palette(SronScheme::Palette1, 0).is_err());
        assert!(palette(SronScheme::Palette1, 13).is_err());
        assert!(palette(SronScheme::YlOrBr, 10).is_err());
        assert!(palette(SronScheme::BandedRainbow, 16).is_err());
    }

    #[test]
    fn banded_rainbow_sizes() {
        for n in [14, 15, 18, 21] {
            assert_eq!(palette(SronScheme::BandedRainbow, n).unwrap().len(), n);
        }
    }
}
