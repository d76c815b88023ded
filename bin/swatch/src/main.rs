//! Render a palette or a Bezier ramp as a horizontal PNG strip.
//!
//! With one argument the named palette is looked up in the tables; with two
//! or more arguments a 255-color Bezier ramp is interpolated through the
//! given colors.
//!
//! ```text
//! swatch blues9
//! swatch darkred lightyellow teal
//! ```

use colorramp::{bezier, palettes, BezierOptions, Rgb01};
use image::{Rgba, RgbaImage};

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 100;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let colors = match args.as_slice() {
        [] => palettes::get("blues9"),
        [name] => palettes::get(name),
        controls => bezier(controls, 255, &BezierOptions::default()),
    };
    let colors = match colors {
        Ok(colors) => colors,
        Err(err) => {
            eprintln!("swatch: {err}");
            std::process::exit(1);
        }
    };

    let mut img = RgbaImage::new(WIDTH, HEIGHT);
    for (x, _, pixel) in img.enumerate_pixels_mut() {
        let index = (x as usize * colors.len()) / WIDTH as usize;
        *pixel = pixel_color(colors[index.min(colors.len() - 1)]);
    }

    img.save("swatch.png")
        .expect("could not write image to swatch.png");
}

fn pixel_color(c: Rgb01) -> Rgba<u8> {
    let rgb = c.to_rgb();
    Rgba([rgb.red, rgb.green, rgb.blue, 255])
}
