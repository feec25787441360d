pub mod ids;
pub mod morphology;
pub mod signature;

// Re-export core types for convenience
pub use ids::{LexemeId, SchemeId};
pub use morphology::*;
pub use signature::*;

pub mod model;
pub use model::*;

#[cfg(test)]
mod tests {
    use super::*;
    use rkyv::{from_bytes, to_bytes};

    #[test]
    fn test_enum_serialization() {
        // Test basic enum round-trip
        let original = Case::Accusative;

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize Case");
        let deserialized: Case = from_bytes(&bytes).expect("Failed to deserialize Case");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_id_serialization() {
        let original = LexemeId::new(42);

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize LexemeId");
        let deserialized: LexemeId = from_bytes(&bytes).expect("Failed to deserialize LexemeId");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_id_layout() {
        // LexemeId(u32) should be exactly 4 bytes
        assert_eq!(core::mem::size_of::<LexemeId>(), 4);
        assert_eq!(core::mem::size_of::<Option<SchemeId>>(), 8);
    }

    #[test]
    fn test_lexeme_archive_round_trip() {
        let fifty = Lexeme {
            id: LexemeId(7),
            lemma: "пятьдесят".to_string(),
            stems: Stems::single("пятьдесят"),
            scheme: SchemeId(3),
            bound: false,
            kind: LexemeKind::Numeral(NumeralInfo {
                value: 50,
                digits: "50".to_string(),
                category: NumeralCategory::ProperQuantitative,
                structure: NumeralStructure::Complex,
                rank: NumeralRank::Tens,
                components: vec![LexemeId(5), LexemeId(6)],
            }),
        };
        let archive = LexiconArchive {
            version: 1,
            lexemes: vec![fifty.clone()],
        };

        let bytes = to_bytes::<_, 1024>(&archive).expect("Failed to serialize archive");
        let restored: LexiconArchive = from_bytes(&bytes).expect("Failed to deserialize archive");

        assert_eq!(restored.lexemes, vec![fifty]);
        assert!(restored.lexemes[0].is_compound());
        assert_eq!(restored.lexemes[0].part_of_speech(), PartOfSpeech::Numeral);
    }

    #[test]
    fn test_tags_round_trip() {
        for case in Case::ALL {
            assert_eq!(case.tag().parse::<Case>().unwrap(), *case);
        }
        assert!("dual".parse::<Number>().is_err());
    }

    #[test]
    fn test_sign_compatibility() {
        let any: Sign<Gender> = Sign::Unspecified;
        let masc = Sign::Is(Gender::Masculine);
        let fem = Sign::Is(Gender::Feminine);

        assert!(any.compatible(masc));
        assert!(masc.compatible(any));
        assert!(masc.compatible(masc));
        assert!(!masc.compatible(fem));
        assert_eq!(any.or(fem), fem);
    }
}
