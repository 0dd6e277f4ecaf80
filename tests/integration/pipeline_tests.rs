/*!
 * End-to-end tests: batch pipeline output fed into the validation engine
 */

use std::sync::Arc;

use yakugo::app_config::PipelineConfig;
use yakugo::gateway::MockGateway;
use yakugo::glossary::{Term, TranslatedTerm};
use yakugo::translation::{resume, BatchProcessor};
use yakugo::validation::ValidationService;

use crate::common;

fn fast_config() -> PipelineConfig {
    PipelineConfig {
        batch_size: 2,
        retry_count: 2,
        retry_delay_ms: 0,
        batch_delay_ms: 0,
        ..Default::default()
    }
}

fn mixed_dataset() -> Vec<Term> {
    vec![
        common::make_term("3.1", "algorithm"),
        common::make_full_term("3.2", "software"),
        common::make_multi_definition_term("3.3", "system", 3),
    ]
}

#[tokio::test]
async fn test_pipeline_withHealthyGateway_shouldProduceValidDataset() {
    let terms = mixed_dataset();
    let processor = BatchProcessor::new(Arc::new(MockGateway::suffix("(JA)")), fast_config());

    let outcome = processor.run(&terms, None, |_| {}).await.unwrap();
    assert_eq!(outcome.status.completed_count, 3);
    assert_eq!(outcome.status.failed_count, 0);

    // Every translatable field got a distinct translated value
    let full = &outcome.terms[1];
    assert_eq!(full.name_ja, "software(JA)");
    assert_eq!(full.aliases_ja.as_ref().unwrap().len(), 1);
    assert_eq!(full.related_terms_ja.as_ref().unwrap().len(), 2);
    assert!(full.example_ja.as_ref().unwrap().ends_with("(JA)"));
    assert!(full.note_ja.as_ref().unwrap().ends_with("(JA)"));
    assert_eq!(outcome.terms[2].definitions.len(), 3);

    let result = ValidationService::new().validate(&terms, &outcome.terms);
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

#[tokio::test]
async fn test_pipeline_withOneFailingTerm_shouldFallBackAndStayValid() {
    let terms = vec![
        common::make_term("3.1", "algorithm"),
        common::make_term("3.2", "recursion"),
    ];
    // Only texts mentioning "recursion" fail; everything else echoes
    let processor = BatchProcessor::new(
        Arc::new(MockGateway::fail_matching("recursion")),
        fast_config(),
    );

    let outcome = processor.run(&terms, None, |_| {}).await.unwrap();

    assert_eq!(outcome.status.completed_count, 2);
    assert_eq!(outcome.status.failed_count, 1);
    assert!(outcome.status.errors.iter().any(|e| e.contains("3.2")));

    // The failed fields carried the source text forward
    let failed = &outcome.terms[1];
    assert_eq!(failed.name_ja, "recursion");
    assert_eq!(failed.definitions[0].text_ja, failed.definitions[0].text);

    // A degraded term is a review concern, not a contract violation
    let result = ValidationService::new().validate(&terms, &outcome.terms);
    assert!(result.is_valid);
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("3.2") && w.contains("identical")));
}

#[tokio::test]
async fn test_pipeline_underTotalFailure_shouldKeepStructuralParallelism() {
    let terms = mixed_dataset();
    let processor = BatchProcessor::new(Arc::new(MockGateway::failing()), fast_config());

    let outcome = processor.run(&terms, None, |_| {}).await.unwrap();

    assert_eq!(outcome.status.completed_count, 3);
    assert_eq!(outcome.status.failed_count, 3);

    // Even with every call failing the output mirrors the input structure
    let result = ValidationService::new().validate(&terms, &outcome.terms);
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert!(!result.warnings.is_empty());
}

#[tokio::test]
async fn test_resume_fromCheckpoint_shouldOnlyTranslateRemainder() {
    let terms: Vec<Term> = ["1.1", "1.2", "1.3", "1.4", "1.5"]
        .iter()
        .map(|id| common::make_term(id, &format!("term-{}", id)))
        .collect();

    // Checkpoint covering the first two terms, as a prior run would write it
    let checkpoint: Vec<TranslatedTerm> = {
        let gateway = Arc::new(MockGateway::suffix("(JA)"));
        let processor = BatchProcessor::new(gateway, fast_config());
        let outcome = processor.run(&terms[..2], None, |_| {}).await.unwrap();
        outcome.terms
    };

    let gateway = Arc::new(MockGateway::suffix("(JA)"));
    let processor = BatchProcessor::new(gateway.clone(), fast_config());
    let outcome = resume(&processor, checkpoint.clone(), &terms, None, |_| {})
        .await
        .unwrap();

    // One call per sub-field: three remaining terms with name + definition
    assert_eq!(gateway.calls(), 6);

    let ids: Vec<_> = outcome.terms.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1.1", "1.2", "1.3", "1.4", "1.5"]);
    assert_eq!(&outcome.terms[..2], &checkpoint[..]);

    let result = ValidationService::new().validate(&terms, &outcome.terms);
    assert!(result.is_valid);
}

#[test]
fn test_validation_overPipelineOutput_shouldBeDeterministic() {
    let terms = mixed_dataset();
    let outcome = tokio_test::block_on(async {
        let processor = BatchProcessor::new(
            Arc::new(MockGateway::fail_matching("system")),
            fast_config(),
        );
        processor.run(&terms, None, |_| {}).await.unwrap()
    });

    let service = ValidationService::new();
    let first = service.validate(&terms, &outcome.terms);
    let second = service.validate(&terms, &outcome.terms);

    assert_eq!(first.is_valid, second.is_valid);
    assert_eq!(first.errors, second.errors);
    assert_eq!(first.warnings, second.warnings);
}
