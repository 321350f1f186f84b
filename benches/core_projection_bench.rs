use chart_csv::core::{ChartConfiguration, parse_table, project_points};
use criterion::{Criterion, criterion_group, criterion_main};
use std::fmt::Write;
use std::hint::black_box;

fn grade_sheet(rows: usize) -> String {
    let mut text = String::from("student,group,score,attendance\n");
    for i in 0..rows {
        let score = if i % 17 == 0 {
            "absent".to_owned()
        } else {
            format!("{}.5", 40 + i % 60)
        };
        let _ = writeln!(text, "student-{i},G{},{score},{}%", i % 8, 50 + i % 50);
    }
    text
}

fn bench_parse_table_10k(c: &mut Criterion) {
    let text = grade_sheet(10_000);

    c.bench_function("parse_table_10k", |b| {
        b.iter(|| {
            let _ = parse_table(black_box(&text));
        })
    });
}

fn bench_bar_projection_10k(c: &mut Criterion) {
    let table = parse_table(&grade_sheet(10_000));
    let config = ChartConfiguration::bar("student", "score");

    c.bench_function("bar_projection_10k", |b| {
        b.iter(|| {
            let _ = project_points(black_box(&table), black_box(&config))
                .expect("projection should succeed");
        })
    });
}

fn bench_pie_projection_10k(c: &mut Criterion) {
    let table = parse_table(&grade_sheet(10_000));
    let config = ChartConfiguration::pie("group", "attendance");

    c.bench_function("pie_projection_10k", |b| {
        b.iter(|| {
            let _ = project_points(black_box(&table), black_box(&config))
                .expect("projection should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_parse_table_10k,
    bench_bar_projection_10k,
    bench_pie_projection_10k
);
criterion_main!(benches);
