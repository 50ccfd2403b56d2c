use image::Pixel;

use std::str;

use crate::error::ConfigError;

/// Guards the saturation quotient against black pixels.
const EPSILON: f64 = 1e-10;

/// The key a pixel is segmented and sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueMethod {
    #[default]
    Luminosity,
    Hue,
    Saturation,
}

impl ValueMethod {
    pub fn function<P>(self) -> fn(&P) -> f64
    where
        P: Pixel<Subpixel = u8>,
    {
        match self {
            ValueMethod::Luminosity => luminosity,
            ValueMethod::Hue => hue,
            ValueMethod::Saturation => saturation,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueMethod::Luminosity => "luminosity",
            ValueMethod::Hue => "hue",
            ValueMethod::Saturation => "saturation",
        }
    }
}

impl str::FromStr for ValueMethod {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "luminosity" => Ok(ValueMethod::Luminosity),
            "hue" => Ok(ValueMethod::Hue),
            "saturation" => Ok(ValueMethod::Saturation),
            _ => Err(ConfigError::UnknownMethod(String::from(s))),
        }
    }
}

#[inline]
fn rgb<P>(pixel: &P) -> (f64, f64, f64)
where
    P: Pixel<Subpixel = u8>,
{
    let [r, g, b] = pixel.to_rgb().0;
    (f64::from(r), f64::from(g), f64::from(b))
}

/// Mean of the color channels scaled to `[0, 1]`.
#[inline]
pub fn luminosity<P>(pixel: &P) -> f64
where
    P: Pixel<Subpixel = u8>,
{
    let (r, g, b) = rgb(pixel);
    (r + g + b) / 3.0 / 255.0
}

/// Hue angle in `(-pi, pi]`, taken on the raw channel values.
#[inline]
pub fn hue<P>(pixel: &P) -> f64
where
    P: Pixel<Subpixel = u8>,
{
    let (r, g, b) = rgb(pixel);
    (3f64.sqrt() * (g - b)).atan2(2.0 * r - g - b)
}

#[inline]
pub fn saturation<P>(pixel: &P) -> f64
where
    P: Pixel<Subpixel = u8>,
{
    let (r, g, b) = rgb(pixel);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    (max - min) / (max + EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::f64::consts::PI;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn luminosity_is_channel_mean() {
        assert_eq!(luminosity(&Rgba([0u8, 0, 0, 255])), 0.0);
        assert_eq!(luminosity(&Rgba([255u8, 255, 255, 0])), 1.0);
        assert!(approx(luminosity(&Rgba([255u8, 0, 0, 255])), 1.0 / 3.0));
    }

    #[test]
    fn alpha_does_not_affect_keys() {
        let opaque = Rgba([12u8, 200, 77, 255]);
        let clear = Rgba([12u8, 200, 77, 0]);
        for method in [ValueMethod::Luminosity, ValueMethod::Hue, ValueMethod::Saturation] {
            let f = method.function::<Rgba<u8>>();
            assert_eq!(f(&opaque), f(&clear));
        }
    }

    #[test]
    fn hue_of_primaries() {
        assert!(approx(hue(&Rgba([255u8, 0, 0, 255])), 0.0));
        assert!(approx(hue(&Rgba([0u8, 255, 0, 255])), 2.0 * PI / 3.0));
        assert!(approx(hue(&Rgba([0u8, 0, 255, 255])), -2.0 * PI / 3.0));
        // gray has no hue
        assert_eq!(hue(&Rgba([90u8, 90, 90, 255])), 0.0);
    }

    #[test]
    fn hue_uses_signed_differences() {
        // g < b must give a negative angle
        assert!(hue(&Rgba([10u8, 20, 200, 255])) < 0.0);
    }

    #[test]
    fn saturation_handles_black() {
        assert_eq!(saturation(&Rgba([0u8, 0, 0, 255])), 0.0);
        assert_eq!(saturation(&Rgba([40u8, 40, 40, 255])), 0.0);
        assert!(approx(saturation(&Rgba([200u8, 100, 0, 255])), 1.0));
        assert!(approx(saturation(&Rgba([200u8, 100, 50, 255])), 0.75));
    }

    #[test]
    fn parse_method_names() {
        assert_eq!("hue".parse::<ValueMethod>().unwrap(), ValueMethod::Hue);
        assert_eq!(
            "Saturation".parse::<ValueMethod>().unwrap(),
            ValueMethod::Saturation
        );
        assert!(matches!(
            "lightness".parse::<ValueMethod>(),
            Err(ConfigError::UnknownMethod(name)) if name == "lightness"
        ));
    }
}
