use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use excelxml::{CellValue, Workbook};

fn build_workbook(size: usize) -> Workbook {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet("Data");
    sheet.add_row(["ID", "Name", "Value"]);

    for i in 0..size {
        sheet.add_row(vec![
            CellValue::from(i),
            CellValue::from(format!("Name_{} & <co>", i)),
            CellValue::Float(i as f64 * 1.5),
        ]);
    }

    workbook
}

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for size in [100, 1000, 10000, 100000].iter() {
        let workbook = build_workbook(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(workbook.render()));
        });
    }

    group.finish();
}

fn benchmark_convert_types(c: &mut Criterion) {
    let mut workbook = Workbook::builder().convert_types(true).build();
    workbook.add_array(
        "Imported",
        (0..10000).map(|i| vec![i.to_string(), format!("{}.25", i), "text".to_string()]),
    );

    c.bench_function("render_convert_types_10000", |b| {
        b.iter(|| black_box(workbook.render()));
    });
}

criterion_group!(benches, benchmark_render, benchmark_convert_types);
criterion_main!(benches);
