mod tests {
    use std::collections::HashSet;

    use remote_light_composer::PatternId;

    #[test]
    fn test_pattern_id_parse_matrix_rain() {
        assert_eq!(
            PatternId::parse_from_str("matrix_rain"),
            Some(PatternId::MatrixRain)
        );
    }

    #[test]
    fn test_pattern_id_as_str_larson_scanner() {
        assert_eq!(PatternId::LarsonScanner.as_str(), "larson_scanner");
    }

    #[test]
    fn test_pattern_id_parse_unknown() {
        assert_eq!(PatternId::parse_from_str("aurora"), None);
        assert!("aurora".parse::<PatternId>().is_err());
    }

    #[test]
    fn test_pattern_id_round_trip() {
        for id in PatternId::ALL {
            assert_eq!(PatternId::parse_from_str(id.as_str()), Some(*id));
            assert_eq!(id.to_string().parse::<PatternId>(), Ok(*id));
        }
    }

    #[test]
    fn test_pattern_id_catalog() {
        assert_eq!(PatternId::ALL.len(), 29);
        let names: HashSet<_> = PatternId::ALL.iter().map(|id| id.as_str()).collect();
        assert_eq!(names.len(), PatternId::ALL.len());
    }

    #[test]
    fn test_only_rain_and_twinkle_are_stateful() {
        let stateful: Vec<_> = PatternId::ALL
            .iter()
            .copied()
            .filter(|id| id.is_stateful())
            .collect();
        assert_eq!(stateful, [PatternId::MatrixRain, PatternId::Twinkle]);
    }
}
