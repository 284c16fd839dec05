mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use remote_light_composer::color::{
        HexColor, HexColorError, Rgb, hue_to_rgb, hue_to_rgb_scaled, lerp_colors, offset_color,
        rgb_from_u32, scale_color,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0xFF_0000), RED);
        assert_eq!(
            rgb_from_u32(0x41_69E1),
            Rgb {
                r: 0x41,
                g: 0x69,
                b: 0xE1
            }
        );
    }

    #[test]
    fn test_lerp_colors() {
        assert_eq!(lerp_colors(RED, BLUE, 0.0), RED);
        assert_eq!(lerp_colors(RED, BLUE, 1.0), BLUE);
        assert_eq!(
            lerp_colors(RED, BLUE, 0.5),
            Rgb {
                r: 127,
                g: 0,
                b: 127
            }
        );
        assert_eq!(
            lerp_colors(BLACK, WHITE, 0.5),
            Rgb {
                r: 127,
                g: 127,
                b: 127
            }
        );
    }

    #[test]
    fn test_scale_color_floors() {
        assert_eq!(scale_color(WHITE, 1.0), WHITE);
        assert_eq!(scale_color(WHITE, 0.0), BLACK);
        assert_eq!(
            scale_color(WHITE, 0.5),
            Rgb {
                r: 127,
                g: 127,
                b: 127
            }
        );
    }

    #[test]
    fn test_offset_color_saturates() {
        let base = Rgb {
            r: 10,
            g: 128,
            b: 250,
        };
        assert_eq!(
            offset_color(base, [-50.0, 0.0, 50.0]),
            Rgb {
                r: 0,
                g: 128,
                b: 255
            }
        );
    }

    #[test]
    fn test_hue_to_rgb_sine_model() {
        assert_eq!(
            hue_to_rgb(0.0),
            Rgb {
                r: 127,
                g: 237,
                b: 17
            }
        );
        assert_eq!(
            hue_to_rgb(90.0),
            Rgb {
                r: 255,
                g: 63,
                b: 63
            }
        );
        assert_eq!(hue_to_rgb(360.0 + 90.0), hue_to_rgb(90.0));
    }

    #[test]
    fn test_hue_to_rgb_scaled() {
        assert_eq!(hue_to_rgb_scaled(90.0, 1.0), hue_to_rgb(90.0));
        assert_eq!(hue_to_rgb_scaled(90.0, 0.0), BLACK);
    }

    #[test]
    fn test_hex_color_parse_and_format() {
        let color: HexColor = "#4169e1".parse().unwrap();
        assert_eq!(color, HexColor::new(0x41, 0x69, 0xE1));
        assert_eq!(color.to_string(), "#4169e1");
        assert_eq!("#FF0000".parse::<HexColor>().unwrap().rgb(), RED);
    }

    #[test]
    fn test_hex_color_errors() {
        assert_eq!(
            "ff0000".parse::<HexColor>(),
            Err(HexColorError::MissingHash)
        );
        assert_eq!(
            "#ff00".parse::<HexColor>(),
            Err(HexColorError::InvalidLength(4))
        );
        assert_eq!(
            "#ff00zz".parse::<HexColor>(),
            Err(HexColorError::InvalidDigit)
        );
    }

    #[test]
    fn test_hex_color_sample_is_seeded() {
        let a = HexColor::sample(&mut StdRng::seed_from_u64(7));
        let b = HexColor::sample(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.to_string().len(), 7);
    }
}
