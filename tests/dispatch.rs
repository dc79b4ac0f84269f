//! Concurrent dispatch of CSV and XML generation.

use aggtest_gen::{dispatch, dispatch_sequential, DriverError, OutputFormat, WorkItem};
use quick_xml::events::Event;
use quick_xml::Reader;
use tempfile::TempDir;

const HEADER: &str = "start_page,user,ts,depth,duration,transmit,type";

/// Count `<row>` children of the root and check each has the seven leaves.
fn count_xml_rows(xml: &str) -> usize {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    let mut rows = 0usize;
    let mut leaves: Vec<String> = Vec::new();

    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => {
                let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                match depth {
                    0 => assert_eq!(name, "root"),
                    1 => {
                        assert_eq!(name, "row");
                        rows += 1;
                        leaves.clear();
                    }
                    _ => leaves.push(name),
                }
                depth += 1;
            }
            Event::End(_) => {
                depth -= 1;
                if depth == 1 {
                    assert_eq!(leaves.join(","), HEADER);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    rows
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_dispatch_writes_independent_files() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("example_data_log.csv");
    let xml_path = temp_dir.path().join("example_data_log.xml");

    let report = dispatch(
        vec![
            WorkItem::csv(&csv_path, 2_000),
            WorkItem::xml(&xml_path, 500),
        ],
        42,
    )
    .await;

    assert!(report.is_success());
    assert_eq!(report.outcomes.len(), 2);
    assert_eq!(report.outcomes[0].item.format, OutputFormat::Csv);
    assert_eq!(report.outcomes[0].result.as_ref().unwrap().rows_written, 1_999);
    assert_eq!(report.outcomes[1].result.as_ref().unwrap().rows_written, 499);

    let csv_content = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv_content.lines().collect();
    assert_eq!(lines.len(), 2_000);
    assert_eq!(lines[0], HEADER);
    assert!(!csv_content.contains('<'));
    assert!(lines[1..].iter().all(|line| line.split(',').count() == 7));

    let xml_content = std::fs::read_to_string(&xml_path).unwrap();
    assert!(xml_content.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert!(!xml_content.contains(HEADER));
    assert_eq!(count_xml_rows(&xml_content), 499);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_dispatch_matches_sequential_output() {
    let temp_dir = TempDir::new().unwrap();
    let concurrent = vec![
        WorkItem::csv(temp_dir.path().join("c.csv"), 100),
        WorkItem::xml(temp_dir.path().join("c.xml"), 100),
    ];
    let sequential = vec![
        WorkItem::csv(temp_dir.path().join("s.csv"), 100),
        WorkItem::xml(temp_dir.path().join("s.xml"), 100),
    ];

    assert!(dispatch(concurrent, 7).await.is_success());
    assert!(dispatch_sequential(sequential, 7).is_success());

    for (a, b) in [("c.csv", "s.csv"), ("c.xml", "s.xml")] {
        let a = std::fs::read_to_string(temp_dir.path().join(a)).unwrap();
        let b = std::fs::read_to_string(temp_dir.path().join(b)).unwrap();
        assert_eq!(a, b);
    }
}

#[tokio::test]
async fn test_failed_task_does_not_affect_the_other() {
    let temp_dir = TempDir::new().unwrap();
    let xml_path = temp_dir.path().join("ok.xml");

    let report = dispatch(
        vec![
            WorkItem::csv(temp_dir.path().join("no_such_dir").join("bad.csv"), 5),
            WorkItem::xml(&xml_path, 5),
        ],
        42,
    )
    .await;

    assert!(!report.is_success());
    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].item.format, OutputFormat::Csv);
    assert!(matches!(failures[0].result, Err(DriverError::Csv(_))));

    let xml_content = std::fs::read_to_string(&xml_path).unwrap();
    assert_eq!(count_xml_rows(&xml_content), 4);
}
