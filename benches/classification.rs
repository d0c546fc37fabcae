//! Parse and analysis throughput benchmarks
//!
//! Measures:
//! - Static checking of programs with a growing number of call sites
//! - Sequential vs rayon executors on the same program
//! - Runtime path extraction from source lambdas
//!
//! Run benchmarks: `cargo bench --bench classification`

use bindpath::{Config, Project, binding_path};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// A program with `sites` calls, every third one rejected.
fn program(sites: usize) -> String {
    let mut source = String::from(
        "fn ListView([BindingExpression] binding);\nfn Grid([BindingExpression] rows, title);\n\nfn Main() {\n    var viewModel = new ViewModel();\n",
    );
    for i in 0..sites {
        let line = match i % 3 {
            0 => format!("    ListView(() => viewModel.Items{}.ToString());\n", i),
            1 => format!("    Grid(() => viewModel.Rows{}, \"title\");\n", i),
            _ => format!("    ListView(() => viewModel.Date.Day{});\n", i),
        };
        source.push_str(&line);
    }
    source.push_str("}\n");
    source
}

fn project(sites: usize) -> Project {
    let mut project = Project::new();
    if let Err(err) = project.add_document("Program.cs", program(sites)) {
        panic!("failed to build benchmark project: {}", err);
    }
    project
}

fn bench_analysis_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis_throughput");
    let config = Config::default();

    for sites in [10, 100, 1000] {
        let project = project(sites);
        group.throughput(Throughput::Elements(sites as u64));
        group.bench_with_input(BenchmarkId::new("call_sites", sites), &sites, |b, _| {
            b.iter(|| black_box(project.analyze(&config)))
        });
    }
    group.finish();
}

fn bench_executors(c: &mut Criterion) {
    let mut group = c.benchmark_group("executors");
    let project = project(1000);
    group.throughput(Throughput::Elements(1000));

    for parallel in [false, true] {
        let config = Config::default().with_parallel(parallel);
        let name = if parallel { "rayon" } else { "sequential" };
        group.bench_function(name, |b| b.iter(|| black_box(project.analyze(&config))));
    }
    group.finish();
}

fn bench_path_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_extraction");
    for (name, source) in [
        ("property", "() => viewModel.Items"),
        ("deep_property", "() => viewModel.Date.Day.Of.Week"),
        ("rejected_call", "() => viewModel.ToString()"),
    ] {
        group.bench_function(name, |b| b.iter(|| black_box(binding_path(source))));
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_analysis_throughput,
    bench_executors,
    bench_path_extraction
);
criterion_main!(benches);
