//! End-to-end tests: mapping file to rendered documents.

use std::fs;
use std::path::{Path, PathBuf};

use hkdoc_catalog::load_mapping;
use hkdoc_core::{GeneratorConfig, build_reports};
use hkdoc_model::{Category, CategoryReport};
use hkdoc_report::{
    DocumentSet, FormatError, WriteError, assemble, check_documents, write_documents,
};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/HKSampleMapping.json")
}

fn reports_for(path: &Path, config: &GeneratorConfig) -> Vec<CategoryReport> {
    let mapping = load_mapping(path, &config.mapping_sections()).unwrap();
    build_reports(&mapping)
}

fn render(config: &GeneratorConfig) -> (Vec<CategoryReport>, DocumentSet) {
    let reports = reports_for(&fixture_path(), config);
    let set = assemble(&reports, config).unwrap();
    (reports, set)
}

/// Data rows of a rendered table (everything after the header and separator).
fn data_rows(contents: &str) -> Vec<&str> {
    contents
        .lines()
        .filter(|line| line.starts_with('|'))
        .skip(2)
        .collect()
}

#[test]
fn row_counts_match_coverage_sentences() {
    let config = GeneratorConfig::default();
    let (reports, set) = render(&config);

    for report in &reports {
        let document = set.document(report.category).unwrap();
        let coverage = report.coverage;
        assert!(coverage.supported <= coverage.total);
        assert_eq!(coverage.supported + coverage.unsupported(), coverage.total);
        assert_eq!(data_rows(&document.contents).len(), coverage.total);
        assert!(document.contents.contains(&document.coverage_sentence));
        assert_eq!(
            document.coverage_sentence,
            format!(
                "{} of {} {} types supported.",
                coverage.supported, coverage.total, report.category
            )
        );
    }
}

#[test]
fn rows_are_sorted_by_raw_identifier() {
    let config = GeneratorConfig::default();
    let (reports, _) = render(&config);

    for report in &reports {
        assert!(
            report
                .rows
                .windows(2)
                .all(|pair| pair[0].identifier <= pair[1].identifier),
            "{} rows are not sorted",
            report.category
        );
    }
}

#[test]
fn uncatalogued_supported_type_appears_once() {
    let config = GeneratorConfig::default();
    let (reports, set) = render(&config);

    let quantity = &reports[0];
    assert_eq!(
        quantity.uncatalogued,
        vec!["HKQuantityTypeIdentifierAppleStandTime".to_string()]
    );
    let contents = &set.document(Category::Quantity).unwrap().contents;
    let rows: Vec<_> = data_rows(contents)
        .into_iter()
        .filter(|row| row.starts_with("|[AppleStandTime]("))
        .collect();
    assert_eq!(
        rows,
        vec![
            "|[AppleStandTime](https://developer.apple.com/documentation/healthkit/HKQuantityTypeIdentifierAppleStandTime)|:white_check_mark:|[HKQuantityTypeIdentifierAppleStandTime](https://developer.apple.com/documentation/healthkit/HKQuantityTypeIdentifierAppleStandTime)|[min](http://unitsofmeasure.org)|"
        ]
    );
    assert!(set.document(Category::Quantity).unwrap().coverage_sentence.starts_with("4 of 81 "));
}

#[test]
fn unsupported_types_get_placeholders() {
    let config = GeneratorConfig::default();
    let (_, set) = render(&config);

    let contents = &set.document(Category::Quantity).unwrap().contents;
    assert!(contents.contains(
        "|[Height](https://developer.apple.com/documentation/healthkit/HKQuantityTypeIdentifierHeight)|:x:|-|-|\n"
    ));
    assert!(contents.contains("|:white_check_mark:|[55423-8](http://loinc.org/55423-8)|steps|\n"));
}

#[test]
fn clinical_types_are_always_supported() {
    let config = GeneratorConfig::default();
    let (_, set) = render(&config);

    let clinical = set.document(Category::Clinical).unwrap();
    assert_eq!(clinical.coverage_sentence, "9 of 9 clinical types supported.");
    assert!(!clinical.contents.contains(":x:"));
}

#[test]
fn summary_links_every_category_in_order() {
    let config = GeneratorConfig::default();
    let (_, set) = render(&config);

    let lines: Vec<_> = set
        .summary
        .contents
        .lines()
        .filter(|line| line.starts_with("- "))
        .collect();
    let expected: Vec<String> = set
        .documents
        .iter()
        .map(|document| {
            let heading = &config.category(document.category.unwrap()).heading;
            format!(
                "- [{heading}]({}): {}",
                document.file_name, document.coverage_sentence
            )
        })
        .collect();
    assert_eq!(lines, expected);
    assert_eq!(
        lines[1],
        "- [HKCorrelationType](SupportedHKCorrelationTypes.md): 1 of 2 correlation types supported."
    );
}

#[test]
fn correlation_document_snapshot() {
    let config = GeneratorConfig::default();
    let (_, set) = render(&config);

    let document = set.document(Category::Correlation).unwrap();
    insta::assert_snapshot!(document.contents.as_str());
}

#[test]
fn regeneration_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::default();

    let (_, first) = render(&config);
    let paths = write_documents(&first, dir.path()).unwrap();
    let before: Vec<Vec<u8>> = paths.iter().map(|path| fs::read(path).unwrap()).collect();

    let (_, second) = render(&config);
    assert!(check_documents(&second, dir.path()).unwrap().is_empty());
    write_documents(&second, dir.path()).unwrap();
    let after: Vec<Vec<u8>> = paths.iter().map(|path| fs::read(path).unwrap()).collect();

    assert_eq!(paths.len(), 5);
    assert_eq!(before, after);
}

#[test]
fn empty_coding_list_aborts_before_any_output() {
    let dir = tempfile::tempdir().unwrap();
    let mapping_path = dir.path().join("HKSampleMapping.json");
    fs::write(
        &mapping_path,
        r#"{
            "HKQuantitySamples": {},
            "HKCorrelations": {
                "HKCorrelationTypeIdentifierFood": {"codings": []}
            },
            "HKCategorySamples": {}
        }"#,
    )
    .unwrap();
    let output_dir = dir.path().join("Documentation");
    let config = GeneratorConfig::default();

    let reports = reports_for(&mapping_path, &config);
    let err = assemble(&reports, &config).unwrap_err();

    assert_eq!(
        err,
        FormatError::MissingCoding {
            category: Category::Correlation,
            identifier: "HKCorrelationTypeIdentifierFood".to_string(),
        }
    );
    assert!(err.to_string().contains("HKCorrelationTypeIdentifierFood"));
    assert!(!output_dir.exists());
}

#[test]
fn unwritable_destination_leaves_every_document_untouched() {
    let config = GeneratorConfig::default();
    let (_, set) = render(&config);
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path();
    fs::write(out.join("SupportedHKQuantityTypes.md"), "previous\n").unwrap();
    fs::create_dir_all(out.join("SupportedHKCategoryTypes.md").join("x")).unwrap();

    let err = write_documents(&set, out).unwrap_err();

    assert!(matches!(err, WriteError::NotAFile { .. }));
    assert_eq!(
        fs::read_to_string(out.join("SupportedHKQuantityTypes.md")).unwrap(),
        "previous\n"
    );
    assert!(out.join("SupportedHKCategoryTypes.md").join("x").is_dir());
    for name in [
        "SupportedHKCorrelationTypes.md",
        "SupportedHKClinicalTypes.md",
        "SupportedHKSampleTypes.md",
    ] {
        assert!(!out.join(name).exists(), "{name} was published");
    }
    let leftovers: Vec<_> = fs::read_dir(out)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|ext| ext == "tmp" || ext == "bak")
        })
        .collect();
    assert!(leftovers.is_empty());
}
