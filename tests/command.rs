mod tests {
    use remote_light_composer::{
        Command, CommandKind, Frame, HexColor, StripLength,
        color::Rgb,
        command::wire::{
            BreatheBody, ExplicitBody, RainbowBody, SolidColorBody, StrobeBody, WireRgb,
        },
    };
    use serde_json::{Value, json};

    #[test]
    fn test_solid_color_body() {
        let command = Command::solid(255, 0, 0);
        assert_eq!(command.path(), "/update-led-color");
        assert_eq!(
            command.to_json().unwrap(),
            r#"{"rgb":{"r":255,"g":0,"b":0}}"#
        );
        let body: SolidColorBody = serde_json::from_str(&command.to_json().unwrap()).unwrap();
        assert_eq!(Rgb::from(body.rgb), Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_strobe_numbers_are_strings() {
        let command = Command::Strobe {
            color: HexColor::new(0xFF, 0, 0),
            speed: 80,
            duration: 3000,
        };
        assert_eq!(command.path(), "/animate-strobe");
        let value: Value = serde_json::from_str(&command.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({"color": "#ff0000", "speed": "80", "duration": "3000"})
        );
        let body: StrobeBody = serde_json::from_value(value).unwrap();
        assert_eq!(body.color, HexColor::new(0xFF, 0, 0));
    }

    #[test]
    fn test_breathe_body() {
        let command = Command::Breathe {
            color: HexColor::new(0x41, 0x69, 0xE1),
            speed: 150,
        };
        assert_eq!(command.path(), "/animate-breathe");
        let body: BreatheBody = serde_json::from_str(&command.to_json().unwrap()).unwrap();
        assert_eq!(
            body,
            BreatheBody {
                color: HexColor::new(0x41, 0x69, 0xE1),
                speed: "150".to_owned(),
            }
        );
    }

    #[test]
    fn test_rainbow_body() {
        let command = Command::Rainbow {
            num_rainbows: 2,
            value: 10_000,
            speed: 180,
        };
        assert_eq!(command.path(), "/animate-rainbow");
        let value: Value = serde_json::from_str(&command.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({"num_rainbows": "2", "value": "10000", "speed": "180"})
        );
        let body: RainbowBody = serde_json::from_value(value).unwrap();
        assert_eq!(body.num_rainbows, "2");
    }

    #[test]
    fn test_explicit_body() {
        let pixel = Rgb { r: 1, g: 2, b: 3 };
        let frame = Frame::filled(pixel, StripLength::DEFAULT);
        let command = Command::Explicit(frame);
        assert_eq!(command.path(), "/animate-explicit");
        assert_eq!(command.kind(), CommandKind::Explicit);

        let json = command.to_json().unwrap();
        assert!(json.starts_with(r#"{"led_state":[{"r":1,"g":2,"b":3},"#));
        let body: ExplicitBody = serde_json::from_str(&json).unwrap();
        assert_eq!(body.led_state.len(), 640);
        assert!(
            body.led_state
                .iter()
                .all(|&led| led == WireRgb { r: 1, g: 2, b: 3 })
        );
    }

    #[test]
    fn test_paths_are_distinct() {
        let kinds = [
            CommandKind::SolidColor,
            CommandKind::Strobe,
            CommandKind::Breathe,
            CommandKind::Rainbow,
            CommandKind::Explicit,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.path(), b.path());
            }
        }
    }
}
