// src/services/resolution_service_tests.rs
//
// Extraction and resolution over scripted OCR output
//
// INVARIANTS TESTED:
// - The member with the highest code confidence decides the group code
// - Ties keep the earlier member
// - Groups without a code fall back to their own name at 0.0
// - Collaborator failures are downgraded to "no data" and reported
// - A code claimed by an earlier group is suffixed with the later group's name

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::domain::{CodeSource, ColorMarker, ProductGroup};
    use crate::events::EventBus;
    use crate::services::resolution_service::ResolutionService;
    use crate::services::test_support::*;

    // ========================================================================
    // TEST HELPERS
    // ========================================================================

    fn group(name: &str, members: &[&str]) -> ProductGroup {
        ProductGroup {
            name: name.to_string(),
            marker: ColorMarker::Red,
            members: shots(members),
        }
    }

    fn resolver(script: &[ScriptLine], bus: &Arc<EventBus>) -> ResolutionService {
        ResolutionService::new(extraction(loader(), recognizer(script), bus), Arc::clone(bus))
    }

    // ========================================================================
    // SINGLE GROUP
    // ========================================================================

    #[test]
    fn test_highest_confidence_member_wins() {
        let bus = Arc::new(EventBus::new());
        let service = resolver(
            &[
                ("IMG_01.jpg", &[], &[("AB12345678", 0.6)]),
                ("IMG_02.jpg", &[], &[("A3422300021Y00R14.5", 0.9)]),
                ("IMG_03.jpg", &[], &[("XY98765432", 0.7)]),
            ],
            &bus,
        );

        let resolved = service.resolve_group(&group("group1-red", &["IMG_01.jpg", "IMG_02.jpg", "IMG_03.jpg"]));

        assert_eq!(resolved.code, "A3422300021Y00R14.5");
        assert_eq!(resolved.source, CodeSource::Extracted);
        assert_eq!(resolved.image_path, Some(shot("IMG_02.jpg")));
        assert!((resolved.confidence - 0.9).abs() < f64::EPSILON);
        assert_eq!(bus.count_of("CodeExtracted"), 3);
    }

    #[test]
    fn test_tie_keeps_first_member() {
        let bus = Arc::new(EventBus::new());
        let service = resolver(
            &[
                ("a.jpg", &[], &[("FIRST1234", 0.8)]),
                ("b.jpg", &[], &[("SECOND1234", 0.8)]),
            ],
            &bus,
        );

        let resolved = service.resolve_group(&group("group1-red", &["a.jpg", "b.jpg"]));
        assert_eq!(resolved.code, "FIRST1234");
    }

    #[test]
    fn test_zero_confidence_code_still_counts() {
        let bus = Arc::new(EventBus::new());
        let service = resolver(&[("a.jpg", &[], &[("AB12345678", 0.0)])], &bus);

        let resolved = service.resolve_group(&group("group1-red", &["a.jpg"]));

        assert_eq!(resolved.code, "AB12345678");
        assert_eq!(resolved.source, CodeSource::Extracted);
    }

    #[test]
    fn test_group_without_code_uses_its_name() {
        let bus = Arc::new(EventBus::new());
        let service = resolver(&[("a.jpg", &[("红标", 0.9)], &[("SIZE", 0.9)])], &bus);

        let resolved = service.resolve_group(&group("group3-none", &["a.jpg", "b.jpg"]));

        assert_eq!(resolved.code, "group3-none");
        assert_eq!(resolved.confidence, 0.0);
        assert!(resolved.is_fallback());
        assert_eq!(bus.count_of("CodeExtracted"), 0);
    }

    #[test]
    fn test_fast_and_accurate_candidates_are_merged() {
        let bus = Arc::new(EventBus::new());
        // Only the fast pass sees the code
        let service = resolver(&[("a.jpg", &[("AB-1234", 0.7)], &[("SIZE", 0.9)])], &bus);

        let resolved = service.resolve_group(&group("group1-red", &["a.jpg"]));
        assert_eq!(resolved.code, "AB-1234");
    }

    // ========================================================================
    // COLLABORATOR FAILURES
    // ========================================================================

    #[test]
    fn test_unloadable_image_is_skipped() {
        let bus = Arc::new(EventBus::new());
        let service = ResolutionService::new(
            extraction(
                loader_failing_on(&["a.jpg"]),
                recognizer(&[
                    ("a.jpg", &[], &[("BROKEN12345", 0.99)]),
                    ("b.jpg", &[], &[("GOOD123456", 0.5)]),
                ]),
                &bus,
            ),
            Arc::clone(&bus),
        );

        let resolved = service.resolve_group(&group("group1-red", &["a.jpg", "b.jpg"]));

        assert_eq!(resolved.code, "GOOD123456");
        assert_eq!(bus.count_of("CollaboratorFailed"), 1);
    }

    #[test]
    fn test_recognizer_failure_falls_back() {
        let bus = Arc::new(EventBus::new());
        let service = ResolutionService::new(
            extraction(loader(), broken_recognizer(), &bus),
            Arc::clone(&bus),
        );

        let resolved = service.resolve_group(&group("group1-red", &["a.jpg"]));

        assert!(resolved.is_fallback());
        // One failure per pass
        assert_eq!(bus.count_of("CollaboratorFailed"), 2);
    }

    // ========================================================================
    // ACROSS GROUPS
    // ========================================================================

    #[test]
    fn test_colliding_code_is_disambiguated() {
        let bus = Arc::new(EventBus::new());
        let service = resolver(
            &[
                ("a.jpg", &[], &[("AB12345678", 0.9)]),
                ("b.jpg", &[], &[("AB12345678", 0.8)]),
            ],
            &bus,
        );

        let groups = vec![group("group1-red", &["a.jpg"]), group("group2-blue", &["b.jpg"])];
        let resolved = service.resolve_all(&groups);

        assert_eq!(resolved[0].code, "AB12345678");
        assert_eq!(resolved[0].source, CodeSource::Extracted);
        assert_eq!(resolved[1].code, "AB12345678-group2-blue");
        assert_eq!(resolved[1].source, CodeSource::Disambiguated);
        assert_eq!(bus.count_of("GroupCodeResolved"), 2);
    }

    #[test]
    fn test_collisions_kept_when_disabled() {
        let bus = Arc::new(EventBus::new());
        let service = resolver(
            &[
                ("a.jpg", &[], &[("AB12345678", 0.9)]),
                ("b.jpg", &[], &[("AB12345678", 0.8)]),
            ],
            &bus,
        )
        .with_disambiguation(false);

        let groups = vec![group("group1-red", &["a.jpg"]), group("group2-blue", &["b.jpg"])];
        let resolved = service.resolve_all(&groups);

        assert_eq!(resolved[1].code, "AB12345678");
        assert_eq!(resolved[1].source, CodeSource::Extracted);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let script: &[ScriptLine] = &[
            ("a.jpg", &[("蓝标", 0.9)], &[("A3422300021Y00R14.5", 0.9)]),
            ("b.jpg", &[], &[("12.5", 0.95)]),
        ];
        let groups = vec![group("group1-blue", &["a.jpg", "b.jpg"])];

        let first = resolver(script, &Arc::new(EventBus::new())).resolve_all(&groups);
        let second = resolver(script, &Arc::new(EventBus::new())).resolve_all(&groups);

        assert_eq!(first, second);
    }
}
