//! Library-level end-to-end tests: request in, normalized report out.

use std::io::Write;

use license_solver::{
    agents, AgentKind, LicenseCatalog, LicenseId, NgramIndex, ScanReport, ScanRequest,
};

fn license_text(shortname: &str) -> String {
    LicenseCatalog::load_embedded()
        .unwrap()
        .get(&LicenseId::new(shortname))
        .unwrap()
        .text
        .clone()
}

fn write_doc(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn all_agents_accept_legal_or_omitted_similarity() {
    let catalog = LicenseCatalog::load_embedded().unwrap();
    let index = NgramIndex::load_embedded().unwrap();

    let cases: &[(AgentKind, Option<&str>)] = &[
        (AgentKind::WordFrequency, None),
        (AgentKind::EditDistance, None),
        (AgentKind::Tfidf, None),
        (AgentKind::Tfidf, Some("CosineSim")),
        (AgentKind::Tfidf, Some("ScoreSim")),
        (AgentKind::Ngram, Some("CosineSim")),
        (AgentKind::Ngram, Some("DiceSim")),
        (AgentKind::Ngram, Some("BigramCosineSim")),
    ];

    for &(kind, similarity) in cases {
        let selected = agents::select(kind, similarity, &catalog, Some(&index));
        assert!(selected.is_ok(), "selection failed for {kind} / {similarity:?}");
    }
}

#[test]
fn illegal_similarity_is_rejected_per_agent() {
    let catalog = LicenseCatalog::load_embedded().unwrap();
    let index = NgramIndex::load_embedded().unwrap();

    for bad in ["DiceSim", "BigramCosineSim", "LevenshteinSim", ""] {
        let err = agents::select(AgentKind::Tfidf, Some(bad), &catalog, None);
        assert!(err.is_err(), "tfidf accepted '{bad}'");
    }
    for bad in ["ScoreSim", "JaccardSim", ""] {
        let err = agents::select(AgentKind::Ngram, Some(bad), &catalog, Some(&index));
        assert!(err.is_err(), "Ngram accepted '{bad}'");
    }
}

#[test]
fn word_frequency_scan_yields_single_fixed_score_record() {
    let doc = write_doc(&license_text("MIT"));
    let report = license_solver::scan::run(&ScanRequest::new(
        doc.path(),
        AgentKind::WordFrequency,
    ))
    .unwrap();

    assert_eq!(report.results.len(), 1);
    let record = &report.results[0];
    assert_eq!(record.shortname, "MIT");
    assert_eq!(record.sim_type, "wordFrequencySimilarity");
    assert!((record.sim_score - 1.0).abs() < f64::EPSILON);
    assert!(record.description.is_empty());
}

#[test]
fn edit_distance_scan_yields_single_dld_record() {
    let doc = write_doc(&license_text("GPL-2.0-only"));
    let report =
        license_solver::scan::run(&ScanRequest::new(doc.path(), AgentKind::EditDistance)).unwrap();

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].shortname, "GPL-2.0-only");
    assert_eq!(report.results[0].sim_type, "dld");
}

#[test]
fn tfidf_cosine_identifies_mit_with_top_score() {
    let doc = write_doc(&license_text("MIT"));
    let request = ScanRequest::new(doc.path(), AgentKind::Tfidf).with_similarity("CosineSim");
    let report = license_solver::scan::run(&request).unwrap();

    assert_eq!(report.file, doc.path().canonicalize().unwrap());
    assert!(!report.results.is_empty());

    let top = &report.results[0];
    assert_eq!(top.shortname, "MIT");
    assert!(report.results.iter().all(|r| r.sim_score <= top.sim_score));
}

#[test]
fn ngram_agents_identify_mit() {
    let doc = write_doc(&license_text("MIT"));
    for similarity in ["CosineSim", "DiceSim", "BigramCosineSim"] {
        let request = ScanRequest::new(doc.path(), AgentKind::Ngram).with_similarity(similarity);
        let report = license_solver::scan::run(&request).unwrap();
        assert_eq!(report.results[0].shortname, "MIT", "failed for {similarity}");
        assert_eq!(report.results[0].sim_type, similarity);
    }
}

#[test]
fn repeated_scans_are_identical() {
    let doc = write_doc(&license_text("Apache-2.0"));

    for agent in [
        AgentKind::WordFrequency,
        AgentKind::EditDistance,
        AgentKind::Tfidf,
        AgentKind::Ngram,
    ] {
        let request = ScanRequest::new(doc.path(), agent);
        let first = license_solver::scan::run(&request).unwrap();
        let second = license_solver::scan::run(&request).unwrap();
        assert_eq!(first.file, second.file, "file differs for {agent}");
        assert_eq!(first.results, second.results, "results differ for {agent}");
    }
}

#[test]
fn report_json_round_trips() {
    let doc = write_doc(&license_text("BSD-3-Clause"));
    let request = ScanRequest::new(doc.path(), AgentKind::Tfidf).with_similarity("ScoreSim");
    let report = license_solver::scan::run(&request).unwrap();

    let json = report.to_json().unwrap();
    let parsed: ScanReport = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.file, report.file);
    assert_eq!(parsed.results.len(), report.results.len());
    for (a, b) in parsed.results.iter().zip(report.results.iter()) {
        assert_eq!(a, b);
    }
}

#[test]
fn custom_catalog_file_is_honored() {
    let mut custom = LicenseCatalog::new();
    custom.add_license(
        license_solver::KnownLicense::new("FOO-1.0", "Foo License")
            .with_text("you may foo the bar under the terms of the foo license"),
    );

    let mut catalog_file = tempfile::NamedTempFile::new().unwrap();
    catalog_file
        .write_all(custom.to_json().unwrap().as_bytes())
        .unwrap();

    let doc = write_doc("you may foo the bar under the terms of the foo license");
    let request = ScanRequest::new(doc.path(), AgentKind::WordFrequency)
        .with_catalog(catalog_file.path());
    let report = license_solver::scan::run(&request).unwrap();

    assert_eq!(report.results[0].shortname, "FOO-1.0");
}
