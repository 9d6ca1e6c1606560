use bucket_insight::analyzer::BucketAnalyzer;
use bucket_insight::models::BucketRecord;
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::HashMap;

fn synthetic_fleet(count: usize) -> Vec<BucketRecord> {
    let regions = ["us-east-1", "us-west-2", "eu-west-1", "ap-south-1"];
    let teams = ["platform", "data", "ml", "web"];
    let base = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();

    (0..count)
        .map(|i| {
            let mut tags = HashMap::new();
            if i % 7 != 0 {
                tags.insert("team".to_string(), teams[i % teams.len()].to_string());
            }
            if i % 3 == 0 {
                tags.insert("environment".to_string(), "prod".to_string());
            }
            BucketRecord {
                name: format!("bucket-{i}"),
                region: regions[i % regions.len()].to_string(),
                size_gb: (i % 500) as f64,
                versioning: i % 2 == 0,
                created_on: base + chrono::Duration::days((i % 900) as i64),
                tags,
                policies: if i % 5 == 0 {
                    vec![serde_json::json!({"transition": "GLACIER"})]
                } else {
                    Vec::new()
                },
            }
        })
        .collect()
}

fn bench_cost_report(c: &mut Criterion) {
    let analyzer = BucketAnalyzer::from_records(synthetic_fleet(10_000));

    c.bench_function("cost_report_10k", |b| {
        b.iter(|| black_box(analyzer.cost_report()))
    });
}

fn bench_deletion_candidates(c: &mut Criterion) {
    let analyzer = BucketAnalyzer::from_records(synthetic_fleet(10_000));

    c.bench_function("deletion_candidates_10k", |b| {
        b.iter(|| black_box(analyzer.deletion_candidates(100.0, 20)))
    });
}

criterion_group!(benches, bench_cost_report, bench_deletion_candidates);
criterion_main!(benches);
