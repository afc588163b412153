use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dataset_query::service::DatasetService;
use dataset_query::types::{Table, Value};

const SCHEMA: &str = r#"[
    {"Name": "Genre", "DataSetControls": {"IsGroupable": true, "Filterable": true}},
    {"Name": "Rating", "DataSetControls": {"IsAggregator": true}}
]"#;

const GENRES: [&str; 5] = ["Drama", "Crime", "Action", "Comedy", "Western"];

fn service_with_rows(n: usize) -> DatasetService {
    let rows = (0..n)
        .map(|i| {
            vec![
                Value::Utf8(GENRES[i % GENRES.len()].to_string()),
                Value::Float64(5.0 + (i % 50) as f64 / 10.0),
            ]
        })
        .collect();
    let table = Table::new(vec!["Genre".to_string(), "Rating".to_string()], rows);

    let mut svc = DatasetService::new();
    svc.setup(Some(table), Some(SCHEMA)).unwrap();
    svc
}

fn bench_group_by(c: &mut Criterion) {
    let svc = service_with_rows(10_000);
    c.bench_function("group_by 10k rows", |b| {
        b.iter(|| svc.group_by(black_box("Genre")).unwrap());
    });
}

fn bench_chart_dataset(c: &mut Criterion) {
    let svc = service_with_rows(10_000);
    c.bench_function("prepare_chart_dataset 10k rows", |b| {
        b.iter(|| {
            svc.prepare_chart_dataset(black_box("Genre"), black_box("Rating"), "Average")
                .unwrap()
        });
    });
}

fn bench_percentile(c: &mut Criterion) {
    let svc = service_with_rows(10_000);
    c.bench_function("percentile 10k rows", |b| {
        b.iter(|| svc.percentile(black_box("Rating"), black_box(95.0)).unwrap());
    });
}

criterion_group!(benches, bench_group_by, bench_chart_dataset, bench_percentile);
criterion_main!(benches);
