mod fixtures;

use std::collections::BTreeSet;
use std::fs;

use fixtures::{printers_xml, SysvolFixture, DOMAIN};
use gpp_printers::{Error, FileReportSink, Pipeline, ReportSink};
use regex::Regex;

fn anchors(html: &str) -> BTreeSet<String> {
    Regex::new(r#"id="([^"]*)""#)
        .unwrap()
        .captures_iter(html)
        .map(|c| c[1].to_string())
        .collect()
}

fn hrefs(html: &str) -> Vec<String> {
    Regex::new(r##"href="#([^"]+)""##)
        .unwrap()
        .captures_iter(html)
        .map(|c| c[1].to_string())
        .collect()
}

#[test]
fn test_unknown_domain_is_domain_resolution_error() {
    let fixture = SysvolFixture::new();
    let pipeline = Pipeline::new(&fixture.config());

    let err = pipeline.run("missing.example").unwrap_err();
    assert!(matches!(err, Error::DomainResolution { ref domain, .. } if domain == "missing.example"));
}

#[test]
fn test_empty_policies_dir_is_domain_resolution_error() {
    let fixture = SysvolFixture::new();
    fs::create_dir_all(fixture.policies_root()).unwrap();

    let err = Pipeline::new(&fixture.config()).run(DOMAIN).unwrap_err();
    assert!(err.is_domain_resolution());
}

#[test]
fn test_policies_without_printers_is_no_preferences_error() {
    let fixture = SysvolFixture::new();
    fixture.add_policy("{31B2F340-016D-11D2-945F-00C04FB984F9}");
    fixture.add_policy("{6AC1786C-016F-11D2-945F-00C04FB984F9}");

    let err = Pipeline::new(&fixture.config()).run(DOMAIN).unwrap_err();
    assert!(err.is_no_printer_preferences());
}

#[test]
fn test_catalog_skips_policies_without_preferences() {
    let fixture = SysvolFixture::new();
    fixture.add_policy("{A}");
    let file = fixture.add_printers("{B}", &printers_xml(&[("Color-1", &["Sales"])]));
    fixture.add_policy("{C}");

    let catalog = Pipeline::new(&fixture.config()).catalog(DOMAIN).unwrap();
    assert_eq!(catalog.policy_objects, 3);
    assert_eq!(catalog.paths, vec![file]);
}

#[test]
fn test_merges_across_files() {
    let fixture = SysvolFixture::new();
    fixture.add_printers("{A}", &printers_xml(&[("HP1", &["CONTOSO\\Finance"]), ("Lobby", &[])]));
    fixture.add_printers("{B}", &printers_xml(&[("hp1", &["Finance", "Sales"])]));

    let report = Pipeline::new(&fixture.config()).execute(DOMAIN).unwrap();
    let inv = &report.inventory;

    assert_eq!(inv.printers().len(), 2);
    assert_eq!(inv.printers()["HP1"], vec!["Finance", "Finance", "Sales"]);
    assert!(inv.printers()["LOBBY"].is_empty());
    assert_eq!(inv.groups()["Finance"], vec!["HP1", "hp1"]);
    assert_eq!(inv.groups()["Sales"], vec!["hp1"]);
    assert_eq!(report.summary.files_parsed, 2);
    assert_eq!(report.summary.assignments, 3);
}

#[test]
fn test_document_links_resolve_and_indexes_sort() {
    let fixture = SysvolFixture::new();
    fixture.add_printers(
        "{A}",
        &printers_xml(&[("Zebra Label", &["Warehouse"]), ("color-2", &["HR\\Staff", "Sales"])]),
    );
    fixture.add_printers("{B}", &printers_xml(&[("Accounts", &["Finance"])]));

    let html = Pipeline::new(&fixture.config()).run(DOMAIN).unwrap();

    let ids = anchors(&html);
    for href in hrefs(&html) {
        assert!(ids.contains(&href), "link #{} has no target", href);
    }

    let index = Regex::new(r#"<div class="grouplistitem"><a href="[^"]*">([^<]*)</a>"#).unwrap();
    let labels: Vec<String> = index.captures_iter(&html).map(|c| c[1].to_string()).collect();
    assert_eq!(
        labels,
        vec!["Finance", "Sales", "Staff", "Warehouse", "ACCOUNTS", "COLOR-2", "ZEBRA LABEL"]
    );
}

#[test]
fn test_runs_are_byte_identical() {
    let fixture = SysvolFixture::new();
    fixture.add_printers("{A}", &printers_xml(&[("P1", &["G1", "G2"]), ("P2", &["G2"])]));
    fixture.add_printers("{B}", &printers_xml(&[("P3", &["G1"])]));

    let pipeline = Pipeline::new(&fixture.config());
    assert_eq!(pipeline.run(DOMAIN).unwrap(), pipeline.run(DOMAIN).unwrap());
}

#[test]
fn test_malformed_file_aborts_run() {
    let fixture = SysvolFixture::new();
    fixture.add_printers("{A}", &printers_xml(&[("P1", &["G1"])]));
    fixture.add_printers("{B}", "<Printers><SharedPrinter name=\"P2\"></Printers>");

    let err = Pipeline::new(&fixture.config()).run(DOMAIN).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn test_missing_name_attribute_aborts_run() {
    let fixture = SysvolFixture::new();
    fixture.add_printers("{A}", "<Printers><SharedPrinter><FilterGroup name=\"G\"/></SharedPrinter></Printers>");

    let err = Pipeline::new(&fixture.config()).run(DOMAIN).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[tokio::test]
async fn test_report_written_to_configured_dir() {
    let fixture = SysvolFixture::new();
    fixture.add_printers("{A}", &printers_xml(&[("P1", &["G1"])]));
    let config = fixture.config();

    let html = Pipeline::new(&config).run(DOMAIN).unwrap();
    let sink = FileReportSink::in_dir(config.output_dir.as_deref(), &config.file_name);
    let written = sink.write(&html).await.unwrap();

    assert_eq!(written, fixture.prefix().join("out").join("printers.html"));
    assert_eq!(fs::read_to_string(written).unwrap(), html);
}
